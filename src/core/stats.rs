//! Menu statistics: dish count and average price per course.

use super::course::Course;
use super::dish::{DishRecord, MAX_PRICE};
use std::collections::BTreeMap;

/// Running count and price total for one course.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CourseTally {
    pub count: usize,
    pub total: f64,
}

impl CourseTally {
    /// Average price, or `0.0` for an empty course.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Aggregated figures shown on the home view.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStats {
    pub total_count: usize,
    per_course: BTreeMap<Course, CourseTally>,
}

impl MenuStats {
    pub fn tally(&self, course: Course) -> CourseTally {
        self.per_course.get(&course).copied().unwrap_or_default()
    }

    pub fn average(&self, course: Course) -> f64 {
        self.tally(course).average()
    }

    /// Average price rounded to two decimals, e.g. `"150.00"`.
    ///
    /// Halves round away from zero, so 10.125 shows as `"10.13"`.
    pub fn average_label(&self, course: Course) -> String {
        let cents = (self.average(course) * 100.0).round();
        format!("{:.2}", cents / 100.0)
    }

    /// Per-course tallies in [`Course::ALL`] order.
    pub fn courses(&self) -> impl Iterator<Item = (Course, CourseTally)> + '_ {
        Course::ALL.into_iter().map(|course| (course, self.tally(course)))
    }
}

/// Compute statistics over a list of dishes.
///
/// Prices that don't parse, or lie outside `±MAX_PRICE`, still count
/// towards their course but add nothing to its total.
pub fn aggregate(dishes: &[DishRecord]) -> MenuStats {
    let mut per_course: BTreeMap<Course, CourseTally> = Course::ALL
        .into_iter()
        .map(|course| (course, CourseTally::default()))
        .collect();

    for dish in dishes {
        if let Some(tally) = per_course.get_mut(&dish.course) {
            tally.count += 1;
            tally.total += dish
                .price_value()
                .filter(|value| value.abs() <= MAX_PRICE)
                .unwrap_or(0.0);
        }
    }

    MenuStats {
        total_count: dishes.len(),
        per_course,
    }
}

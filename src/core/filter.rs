//! Filtering dishes by course.

use super::course::Course;
use super::dish::DishRecord;

/// Dishes matching `selected`, in menu order. `None` means show all.
pub fn filter_by_course(dishes: &[DishRecord], selected: Option<Course>) -> Vec<&DishRecord> {
    match selected {
        None => dishes.iter().collect(),
        Some(course) => dishes.iter().filter(|dish| dish.course == course).collect(),
    }
}

/// Heading above the filtered list.
pub fn section_title(selected: Option<Course>, total: usize) -> String {
    match selected {
        Some(course) => format!("{} Items", course),
        None => format!("All Items ({})", total),
    }
}

/// Message shown when the filtered list is empty.
pub fn empty_message(selected: Option<Course>) -> String {
    match selected {
        Some(course) => format!("No {} found.", course.as_str().to_lowercase()),
        None => "No items found.".to_string(),
    }
}

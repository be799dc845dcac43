//! Fixed set of menu courses.
//!
//! Every place that needs to list, parse or display courses goes through
//! [`Course`], so the set of course names lives in one spot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A menu course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Dessert,
}

impl Course {
    /// All courses in display order.
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    pub fn as_str(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known course.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course: {0}")]
pub struct UnknownCourse(pub String);

impl FromStr for Course {
    type Err = UnknownCourse;

    /// Case-sensitive: only the exact display names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Course::ALL
            .into_iter()
            .find(|course| course.as_str() == s)
            .ok_or_else(|| UnknownCourse(s.to_string()))
    }
}

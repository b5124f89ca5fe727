//! Course section data structure.

use serde::{Deserialize, Serialize};

/// One scheduled instance of a course, as shown in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseSection {
    /// Section number; all state lookups key on this
    pub number: String,

    /// Instructor name, may be empty
    pub instructor: String,

    /// Building/room descriptor, may be empty
    pub location: String,

    /// Currently open seats
    pub available: u32,

    /// Total seats
    pub total: u32,
}

impl CourseSection {
    /// Occupied seat count.
    ///
    /// Signed: the catalog occasionally reports more open seats than total
    /// seats, which is unusual data but not an error.
    pub fn occupied(&self) -> i64 {
        i64::from(self.total) - i64::from(self.available)
    }

    /// One-line summary used in notifications and logs.
    pub fn describe(&self) -> String {
        format!(
            "{} {} *at* {}, {}/{} seats open",
            self.number, self.instructor, self.location, self.available, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_section() -> CourseSection {
        CourseSection {
            number: "10101".to_string(),
            instructor: "Ada Lovelace".to_string(),
            location: "Tempe - CAVC351".to_string(),
            available: 12,
            total: 30,
        }
    }

    #[test]
    fn test_occupied() {
        assert_eq!(sample_section().occupied(), 18);
    }

    #[test]
    fn test_occupied_handles_available_above_total() {
        let section = CourseSection {
            available: 5,
            total: 3,
            ..sample_section()
        };
        assert_eq!(section.occupied(), -2);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            sample_section().describe(),
            "10101 Ada Lovelace *at* Tempe - CAVC351, 12/30 seats open"
        );
    }
}

//! Availability change detection.
//!
//! Holds the last-observed record per section and decides, for each fresh
//! record, whether a notification is warranted. Detection keys on the
//! occupied-seat count rather than the available count alone, so it fires
//! both when seats free up and when a section's capacity grows.

use std::collections::HashMap;

use crate::models::CourseSection;

/// Notification decision for one observed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Section number not present in prior state.
    Discovered,
    /// Occupied-seat count changed and open seats remain.
    Availability,
    /// Nothing worth announcing.
    NoChange,
}

/// Last-observed record per section number.
///
/// Empty at loop start. Entries are inserted on first sight and overwritten
/// every cycle the section stays visible; they are never removed. A section
/// that drops out of the listing keeps its entry, so it is not re-announced
/// as discovered if it reappears.
#[derive(Debug, Default)]
pub struct MonitorState {
    sections: HashMap<String, CourseSection>,
}

impl MonitorState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide what, if anything, to announce for a fresh record.
    ///
    /// `Availability` requires the occupied count (total - available) to
    /// differ from the prior cycle AND the new available count to be
    /// positive: seats merely staying at zero, or occupancy rising, stay
    /// quiet. Comparing occupancy instead of `available` alone also
    /// catches seats added to an expanded section.
    pub fn decide(&self, incoming: &CourseSection) -> Decision {
        match self.sections.get(&incoming.number) {
            None => Decision::Discovered,
            Some(old) => {
                if old.occupied() != incoming.occupied() && incoming.available > 0 {
                    Decision::Availability
                } else {
                    Decision::NoChange
                }
            }
        }
    }

    /// Record the observation.
    ///
    /// Unconditional: suppressing a notification never suppresses the
    /// state update.
    pub fn observe(&mut self, incoming: CourseSection) {
        self.sections.insert(incoming.number.clone(), incoming);
    }

    /// Last-observed record for a section number.
    pub fn get(&self, number: &str) -> Option<&CourseSection> {
        self.sections.get(number)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

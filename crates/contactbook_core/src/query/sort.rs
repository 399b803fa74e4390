//! Column ordering for contact snapshots.
//!
//! # Invariants
//! - Ordering is lexicographic on the raw string (no numeric parsing).
//! - Ascending is stable; descending is the exact reverse of ascending.

use crate::model::contact::{Contact, ContactField};

/// Returns `snapshot` ordered by `field`.
pub fn sort_by(snapshot: &[Contact], field: ContactField, descending: bool) -> Vec<Contact> {
    let mut sorted = snapshot.to_vec();
    sorted.sort_by(|left, right| field.value(left).cmp(field.value(right)));
    if descending {
        sorted.reverse();
    }
    sorted
}

/// Click-to-toggle sort state, one direction per column.
///
/// The first request for a column sorts ascending; each later request for
/// the same column flips it. Columns do not affect each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortToggle {
    next_descending: [bool; 4],
}

impl SortToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the direction to use for `field` now and flips it for next time.
    pub fn next(&mut self, field: ContactField) -> bool {
        let slot = &mut self.next_descending[field.slot()];
        let descending = *slot;
        *slot = !descending;
        descending
    }

    /// Orders `snapshot` by `field` using the toggled direction.
    pub fn apply(&mut self, snapshot: &[Contact], field: ContactField) -> Vec<Contact> {
        let descending = self.next(field);
        sort_by(snapshot, field, descending)
    }
}

//! Per-slot in-flight request tracking
//!
//! One outstanding generation request per logical slot: the tracker refuses
//! a second `begin` for a slot until the first finishes. Keys are structured
//! [`Slot`] values, so a meal at breakfast index 1 can never collide with an
//! exercise slot the way concatenated string keys could.

use savant_domain::Slot;
use std::collections::HashSet;

/// Tracks which slots have a request outstanding.
#[derive(Debug, Default)]
pub struct InFlightTracker {
    pending: HashSet<Slot>,
}

impl InFlightTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `slot` as having a request in flight.
    ///
    /// Returns `false` when the slot already has one, in which case the
    /// caller must not issue another request.
    pub fn begin(&mut self, slot: Slot) -> bool {
        self.pending.insert(slot)
    }

    /// Clear the in-flight mark for `slot`.
    pub fn finish(&mut self, slot: &Slot) {
        self.pending.remove(slot);
    }

    /// Whether `slot` has a request outstanding.
    pub fn is_pending(&self, slot: &Slot) -> bool {
        self.pending.contains(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savant_domain::MealCategory;

    fn slot(index: usize) -> Slot {
        Slot::Meal {
            category: MealCategory::Lunch,
            index,
        }
    }

    #[test]
    fn second_begin_for_same_slot_is_refused() {
        let mut tracker = InFlightTracker::new();
        assert!(tracker.begin(slot(0)));
        assert!(!tracker.begin(slot(0)));
        assert!(tracker.is_pending(&slot(0)));
    }

    #[test]
    fn distinct_slots_do_not_collide() {
        let mut tracker = InFlightTracker::new();
        assert!(tracker.begin(slot(0)));
        assert!(tracker.begin(slot(1)));
        let exercise = Slot::Exercise {
            day: "Monday".to_string(),
            index: 0,
        };
        assert!(tracker.begin(exercise));
    }

    #[test]
    fn finish_releases_the_slot() {
        let mut tracker = InFlightTracker::new();
        tracker.begin(slot(2));
        tracker.finish(&slot(2));
        assert!(!tracker.is_pending(&slot(2)));
        assert!(tracker.begin(slot(2)));
    }
}

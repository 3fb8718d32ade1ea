//! Addressing for in-place plan edits
//!
//! A slot names exactly one element inside the plan's two-level structure:
//! a meal category plus index, or an exercise day plus index. Slots are
//! hashable so an in-flight request tracker can key on them directly instead
//! of on concatenated strings.

use crate::plan::{Exercise, Meal, MealCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of one replaceable element in a generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// A meal at `index` within the given category
    Meal {
        /// Meal category containing the element
        category: MealCategory,
        /// Zero-based position within the category list
        index: usize,
    },
    /// An exercise at `index` within the given day
    Exercise {
        /// Day label, matched exactly against `ExerciseDay::day`
        day: String,
        /// Zero-based position within the day's activity list
        index: usize,
    },
}

impl Slot {
    /// Zero-based index addressed by this slot.
    pub fn index(&self) -> usize {
        match self {
            Slot::Meal { index, .. } => *index,
            Slot::Exercise { index, .. } => *index,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Meal { category, index } => write!(f, "{}[{}]", category, index),
            Slot::Exercise { day, index } => write!(f, "{}[{}]", day, index),
        }
    }
}

/// A replacement value destined for a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanItem {
    /// Replacement meal
    Meal(Meal),
    /// Replacement exercise
    Exercise(Exercise),
}

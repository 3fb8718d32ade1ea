//! In-place plan edits by slot address

use crate::error::SessionError;
use savant_domain::{GeneratedPlan, PlanItem, Slot};
use tracing::debug;

/// Replace exactly one element of the plan addressed by `slot`.
///
/// Returns a new plan; the caller's snapshot is never aliased, so keeping
/// history across edits is safe. Every element other than the addressed one
/// is identical to the input.
pub fn replace_at_slot(
    plan: &GeneratedPlan,
    slot: &Slot,
    item: PlanItem,
) -> Result<GeneratedPlan, SessionError> {
    let mut next = plan.clone();

    match (slot, item) {
        (Slot::Meal { category, index }, PlanItem::Meal(meal)) => {
            let meals = next
                .diet_plan
                .meals_mut(*category)
                .ok_or_else(|| SessionError::SlotNotFound {
                    slot: slot.to_string(),
                })?;
            let len = meals.len();
            let target = meals
                .get_mut(*index)
                .ok_or(SessionError::IndexOutOfRange { index: *index, len })?;
            debug!("replacing meal at {}", slot);
            *target = meal;
        }
        (Slot::Exercise { day, index }, PlanItem::Exercise(exercise)) => {
            let day_plan = next
                .exercise_plan
                .iter_mut()
                .find(|d| d.day == *day)
                .ok_or_else(|| SessionError::SlotNotFound {
                    slot: slot.to_string(),
                })?;
            let len = day_plan.activities.len();
            let target = day_plan
                .activities
                .get_mut(*index)
                .ok_or(SessionError::IndexOutOfRange { index: *index, len })?;
            debug!("replacing exercise at {}", slot);
            *target = exercise;
        }
        _ => return Err(SessionError::ItemKindMismatch),
    }

    Ok(next)
}

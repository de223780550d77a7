//! Pure availability rule

use super::slots::{MinuteOfDay, SlotTag, window};
use shared::models::TimeSlot;

/// What the evaluator needs to know about one food item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: i64,
    pub slot: SlotTag,
    /// NULL in storage is `None` and counts as not overridden
    pub manual_override: Option<bool>,
}

impl Candidate {
    pub fn new(id: i64, time_slot: &str, manual_override: Option<bool>) -> Self {
        Self {
            id,
            slot: SlotTag::classify(time_slot),
            manual_override,
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.manual_override.unwrap_or(false)
    }
}

/// Computed flag for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub id: i64,
    pub is_available: bool,
}

pub fn is_available(slot: TimeSlot, now: MinuteOfDay) -> bool {
    window(slot).contains(now)
}

/// Decide availability for every non-overridden item with a known slot
///
/// Overridden items and unrecognized slots produce no entry. Output
/// keeps input order.
pub fn evaluate(now: MinuteOfDay, items: &[Candidate]) -> Vec<Decision> {
    items
        .iter()
        .filter(|item| !item.is_overridden())
        .filter_map(|item| match &item.slot {
            SlotTag::Known(slot) => Some(Decision {
                id: item.id,
                is_available: is_available(*slot, now),
            }),
            SlotTag::Unrecognized(raw) => {
                tracing::debug!(food_id = item.id, time_slot = %raw, "Skipping item with unrecognized time slot");
                None
            }
        })
        .collect()
}

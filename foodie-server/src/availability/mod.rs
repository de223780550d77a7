//! Time-slot availability
//!
//! Each non-overridden food item's `is_available` flag follows the serving
//! window of its time slot. A pass is run by the background scheduler and
//! on demand through the API; both share one [`AvailabilityService`].

pub mod clock;
pub mod evaluator;
pub mod scheduler;
pub mod service;
pub mod slots;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use evaluator::{Candidate, Decision, evaluate};
pub use scheduler::AvailabilityScheduler;
pub use service::{AvailabilityService, PassReport, run_pass};
pub use slots::{MinuteOfDay, SlotTag, SlotWindow, window};
pub use store::{AvailabilityStore, SqliteAvailabilityStore};

#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("failed to load food items: {0}")]
    Read(String),

    #[error("failed to write availability for food item {id}: {reason}")]
    Write { id: i64, reason: String },
}

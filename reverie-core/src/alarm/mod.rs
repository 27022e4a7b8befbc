//! Reality-check alarms
//!
//! Randomized scheduling, quiet-hours suppression and the trigger/dismiss
//! lifecycle.

mod scheduler;

pub use scheduler::{
    interval_bounds, select_check_kind, AlarmScheduler, TriggerDecision, AWAKE_WINDOW_MINUTES,
    INTERVAL_JITTER_PERCENT,
};

//! Sleep-phase cueing

mod cue_timer;

pub use cue_timer::{
    SleepCueTimer, EARLY_CUE_INTERVAL_MINUTES, LATE_CUE_INTERVAL_MINUTES, LATE_WINDOW_MINUTES,
    REM_LATENCY_MINUTES,
};

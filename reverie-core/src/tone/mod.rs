//! Tone sequencing
//!
//! A single non-blocking sequencer plays both the loud reality-check
//! chirp burst and the soft ascending cue used for REM prompts and the
//! dream journal.

mod pattern;
mod sequencer;

pub use pattern::{TonePattern, CHIRP, GENTLE_CUE};
pub use sequencer::{ChirpEnded, Phase, ToneSequencer, SETTLE_GAP_MS};

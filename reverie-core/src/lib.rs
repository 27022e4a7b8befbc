//! Board-agnostic core logic for the reality-check watch
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Time primitives (monotonic [`time::Instant`], [`time::WallClock`])
//! - Persisted settings and their record format
//! - Collaborator traits (buttons, motion, display, tone, clock, storage)
//! - Randomized reality-check alarm scheduling with quiet hours
//! - Non-blocking tone sequencing
//! - REM-phase sleep cue timing
//! - Mode state machine and the interaction controller that drives it all
//!
//! Everything here runs from a single poll loop; nothing blocks and
//! nothing allocates.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod alarm;
pub mod config;
pub mod controller;
pub mod sleep;
pub mod state;
pub mod time;
pub mod tone;
pub mod traits;

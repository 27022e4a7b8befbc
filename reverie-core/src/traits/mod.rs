//! Collaborator traits
//!
//! These traits define the interface between the interaction core and the
//! board: clocks, buttons, motion, display, audio and settings storage.

pub mod clock;
pub mod display;
pub mod input;
pub mod motion;
pub mod storage;
pub mod tone;

pub use clock::ClockSource;
pub use display::Display;
pub use input::{ButtonId, ButtonInput};
pub use motion::{Acceleration, Accelerometer, MotionDelta, MotionSensor, SensorError};
pub use storage::{SettingsStore, StorageError};
pub use tone::ToneOutput;

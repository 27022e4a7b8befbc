//! Motion sensing
//!
//! - [`Qmi8658`] - 6-axis IMU on the round-display boards
//! - [`DeltaTracker`] - turns absolute readings into per-sample change

mod qmi8658;
mod tracker;

pub use qmi8658::{reg, Qmi8658, ADDRESS, CHIP_ID, LSB_PER_G};
pub use tracker::DeltaTracker;

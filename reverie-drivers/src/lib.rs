//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in reverie-core for the watch hardware:
//!
//! - Debounced push buttons (any [`reverie_hal::InputPin`])
//! - Accelerometer change tracking for shake-to-wake
//! - QMI8658 6-axis IMU over I2C (accelerometer only)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod input;
pub mod motion;

//! RP2040-specific HAL for the watch firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `reverie-hal` traits and of the board-facing `reverie-core`
//! collaborators:
//!
//! - GPIO inputs for the buttons (implements `reverie_hal::InputPin`)
//! - Flash storage driver (implements `reverie_hal::FlashStorage`)
//! - RTC wall clock (implements `reverie_core::traits::ClockSource`)
//! - PWM piezo output (implements `reverie_core::traits::ToneOutput`)
//! - PWM display backlight

#![no_std]

pub mod backlight;
pub mod clock;
pub mod flash;
pub mod gpio;
pub mod tone;

// Re-export shared traits from reverie-hal for convenience
pub use reverie_hal::{FlashStorage as FlashStorageTrait, StorageKey};

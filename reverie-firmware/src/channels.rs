//! Inter-task communication
//!
//! The interaction task owns the controller; everything it hands to the
//! slower tasks goes through these signals.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use reverie_core::config::Settings;
use reverie_core::controller::View;

/// Settings to write to flash (latest value wins)
pub static SETTINGS_SAVE: Signal<CriticalSectionRawMutex, Settings> = Signal::new();

/// Latest view to draw
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, View> = Signal::new();

//! Render descriptors
//!
//! A [`View`] names what the screen should show and carries the values a
//! renderer needs. Layout is left entirely to the display implementation.

use crate::config::{
    Brightness, CheckKind, ClockColor, MorningAlarm, QuietHours, ScreenTimeout, Sensitivity,
    TimeFormat,
};
use crate::state::MenuItem;
use crate::time::WallClock;

/// Field focused while editing a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    #[default]
    Hour,
    Minute,
}

/// Bound focused while editing quiet hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QuietBound {
    #[default]
    Start,
    End,
}

/// Screen contents for the current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Clock face
    Clock {
        time: WallClock,
        format: TimeFormat,
        color: ClockColor,
        /// Checks completed to date
        check_count: u32,
        /// Show the "hold to open menu" hint
        menu_hint: bool,
    },
    /// Interactive light-switch check on the clock face
    LightSwitch { time: WallClock, lit: bool },
    /// Settings menu with the highlighted entry
    Menu { selected: MenuItem },
    /// Wall clock being set
    SetTime {
        hour: u8,
        minute: u8,
        field: TimeField,
    },
    /// Reality-check prompt
    RealityCheck {
        kind: CheckKind,
        time: WallClock,
        /// Milliseconds until the prompt times out
        remaining_ms: u32,
    },
    /// Sleep session
    NightRest {
        time: WallClock,
        elapsed_minutes: u32,
        cues: u16,
    },
    /// Morning alarm reached
    DreamJournal { time: WallClock },
    /// Settings overlay
    Edit(EditView),
}

/// Overlay contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditView {
    AlarmsPerDay(u8),
    MorningAlarm { alarm: MorningAlarm, field: TimeField },
    ScreenTimeout(ScreenTimeout),
    Sensitivity(Sensitivity),
    Brightness(Brightness),
    ClockColor(ClockColor),
    QuietHours { hours: QuietHours, bound: QuietBound },
    TimeFormat(TimeFormat),
    CheckPreview(CheckKind),
}

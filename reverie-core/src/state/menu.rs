//! Settings menu entries

use super::machine::{EditingKind, Mode};

/// Settings menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    SetTime,
    MorningAlarm,
    AlarmsPerDay,
    QuietHours,
    TimeFormat,
    ScreenTimeout,
    ShakeSensitivity,
    Brightness,
    ClockColor,
    TestCheck,
}

impl MenuItem {
    /// All entries in display order
    pub const ALL: [MenuItem; 10] = [
        MenuItem::SetTime,
        MenuItem::MorningAlarm,
        MenuItem::AlarmsPerDay,
        MenuItem::QuietHours,
        MenuItem::TimeFormat,
        MenuItem::ScreenTimeout,
        MenuItem::ShakeSensitivity,
        MenuItem::Brightness,
        MenuItem::ClockColor,
        MenuItem::TestCheck,
    ];

    /// Next entry, wrapping to the top
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Mode the entry opens
    pub const fn destination(self) -> Mode {
        match self {
            MenuItem::SetTime => Mode::SetTime,
            MenuItem::MorningAlarm => Mode::Editing(EditingKind::ManualAlarm),
            MenuItem::AlarmsPerDay => Mode::Editing(EditingKind::AlarmCount),
            MenuItem::QuietHours => Mode::Editing(EditingKind::QuietHours),
            MenuItem::TimeFormat => Mode::Editing(EditingKind::TimeFormat),
            MenuItem::ScreenTimeout => Mode::Editing(EditingKind::ScreenTimeout),
            MenuItem::ShakeSensitivity => Mode::Editing(EditingKind::Sensitivity),
            MenuItem::Brightness => Mode::Editing(EditingKind::Brightness),
            MenuItem::ClockColor => Mode::Editing(EditingKind::ClockColor),
            MenuItem::TestCheck => Mode::Editing(EditingKind::RealityCheckTest),
        }
    }

    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            MenuItem::SetTime => "Set Time",
            MenuItem::MorningAlarm => "Morning Alarm",
            MenuItem::AlarmsPerDay => "Alarms/Day",
            MenuItem::QuietHours => "Quiet Hours",
            MenuItem::TimeFormat => "12/24 Format",
            MenuItem::ScreenTimeout => "Screen Timeout",
            MenuItem::ShakeSensitivity => "Shake Sense",
            MenuItem::Brightness => "Brightness",
            MenuItem::ClockColor => "Clock Color",
            MenuItem::TestCheck => "Test Check",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_wraps() {
        let mut item = MenuItem::SetTime;
        for _ in 0..MenuItem::ALL.len() {
            item = item.next();
        }
        assert_eq!(item, MenuItem::SetTime);
        assert_eq!(MenuItem::TestCheck.next(), MenuItem::SetTime);
    }

    #[test]
    fn test_every_overlay_reachable_once() {
        let overlays: std::vec::Vec<EditingKind> = MenuItem::ALL
            .iter()
            .filter_map(|item| match item.destination() {
                Mode::Editing(kind) => Some(kind),
                _ => None,
            })
            .collect();
        assert_eq!(overlays.len(), 9);
        for (i, a) in overlays.iter().enumerate() {
            assert!(overlays[i + 1..].iter().all(|b| b != a));
        }
    }
}

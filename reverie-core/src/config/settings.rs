//! Persisted user settings
//!
//! [`Settings`] is the whole record the settings collaborator loads and
//! saves. It is small and `Copy`; the controller owns the live copy and
//! hands the store a snapshot whenever something changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{
    Brightness, CheckKindSet, ClockColor, MorningAlarm, QuietHours, ScreenTimeout, Sensitivity,
    TimeFormat,
};
use crate::time::MINUTES_PER_DAY;

/// Upper bound for the daily reality-check target
pub const MAX_ALARMS_PER_DAY: u8 = 20;

/// Default daily reality-check target
pub const DEFAULT_ALARMS_PER_DAY: u8 = 12;

/// User settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Reality-check alarms per day (0 disables random alarms)
    pub alarms_per_day: u8,
    /// Alarm suppression window
    pub quiet_hours: QuietHours,
    /// Fixed morning alarm that opens the dream journal
    pub morning_alarm: MorningAlarm,
    /// Screen-off timeout
    pub screen_timeout: ScreenTimeout,
    /// Shake-to-wake sensitivity
    pub sensitivity: Sensitivity,
    /// Backlight level
    pub brightness: Brightness,
    /// Clock face colour
    pub clock_color: ClockColor,
    /// 12/24-hour display
    pub time_format: TimeFormat,
    /// Reality-check kinds eligible for selection
    pub check_kinds: CheckKindSet,
    /// Lifetime count of dismissed reality checks
    pub check_count: u32,
    /// Minute of day the last alarm fired
    pub last_alarm_minute: Option<u16>,
    /// Minute of day the next alarm is scheduled for
    pub next_alarm_minute: Option<u16>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alarms_per_day: DEFAULT_ALARMS_PER_DAY,
            quiet_hours: QuietHours::default(),
            morning_alarm: MorningAlarm::default(),
            screen_timeout: ScreenTimeout::default(),
            sensitivity: Sensitivity::default(),
            brightness: Brightness::default(),
            clock_color: ClockColor::default(),
            time_format: TimeFormat::default(),
            check_kinds: CheckKindSet::default(),
            check_count: 0,
            last_alarm_minute: None,
            next_alarm_minute: None,
        }
    }
}

impl Settings {
    /// Clamp every field into its valid range
    ///
    /// Out-of-range values are never rejected; they are pulled to the
    /// nearest valid value so the record can always be used and re-saved.
    pub fn sanitize(&mut self) {
        self.alarms_per_day = self.alarms_per_day.min(MAX_ALARMS_PER_DAY);
        self.quiet_hours.start_hour = self.quiet_hours.start_hour.min(23);
        self.quiet_hours.end_hour = self.quiet_hours.end_hour.min(23);
        self.morning_alarm.hour = self.morning_alarm.hour.min(23);
        self.morning_alarm.minute = self.morning_alarm.minute.min(59);
        self.screen_timeout = ScreenTimeout::from_secs(self.screen_timeout.as_secs());
        self.sensitivity = Sensitivity::new(self.sensitivity.level());
        self.brightness = Brightness::new(self.brightness.level());
        self.check_kinds = CheckKindSet::from_bits(self.check_kinds.bits());
        self.last_alarm_minute = self.last_alarm_minute.filter(|m| *m < MINUTES_PER_DAY);
        self.next_alarm_minute = self.next_alarm_minute.filter(|m| *m < MINUTES_PER_DAY);
    }

    /// Sanitized copy
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// One more alarm per day, up to the maximum
    pub fn increase_alarms_per_day(&mut self) {
        self.alarms_per_day = (self.alarms_per_day + 1).min(MAX_ALARMS_PER_DAY);
    }

    /// One fewer alarm per day, down to zero
    pub fn decrease_alarms_per_day(&mut self) {
        self.alarms_per_day = self.alarms_per_day.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.alarms_per_day, 12);
        assert_eq!(settings.quiet_hours, QuietHours::new(23, 7));
        assert!(!settings.morning_alarm.enabled);
        assert_eq!(settings.screen_timeout.as_secs(), 15);
        assert_eq!(settings.brightness.level(), 8);
        assert_eq!(settings.check_kinds, CheckKindSet::ALL);
        assert_eq!(settings.check_count, 0);
    }

    #[test]
    fn test_sanitize_clamps_out_of_range_values() {
        let mut settings = Settings {
            alarms_per_day: 99,
            quiet_hours: QuietHours {
                enabled: true,
                start_hour: 30,
                end_hour: 7,
            },
            morning_alarm: MorningAlarm {
                enabled: true,
                hour: 24,
                minute: 75,
            },
            next_alarm_minute: Some(5000),
            last_alarm_minute: Some(12),
            ..Settings::default()
        };
        settings.sanitize();

        assert_eq!(settings.alarms_per_day, MAX_ALARMS_PER_DAY);
        assert_eq!(settings.quiet_hours.start_hour, 23);
        assert_eq!(settings.morning_alarm.hour, 23);
        assert_eq!(settings.morning_alarm.minute, 59);
        assert_eq!(settings.next_alarm_minute, None);
        assert_eq!(settings.last_alarm_minute, Some(12));
    }

    #[test]
    fn test_alarms_per_day_stepping_clamps() {
        let mut settings = Settings {
            alarms_per_day: MAX_ALARMS_PER_DAY,
            ..Settings::default()
        };
        settings.increase_alarms_per_day();
        assert_eq!(settings.alarms_per_day, MAX_ALARMS_PER_DAY);

        settings.alarms_per_day = 0;
        settings.decrease_alarms_per_day();
        assert_eq!(settings.alarms_per_day, 0);
    }
}

//! Overlay and clock editing
//!
//! Primary increments, secondary decrements (or switches field where a
//! value has several parts). The power button is handled by the
//! controller since it changes mode.

use super::view::{EditView, QuietBound, TimeField};
use crate::config::{CheckKind, Settings};
use crate::state::EditingKind;
use crate::time::WallClock;

/// Draft time while in SetTime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeDraft {
    pub hour: u8,
    pub minute: u8,
    pub field: TimeField,
}

impl TimeDraft {
    /// Start from the current wall clock, focused on the hour
    pub fn from_wall(wall: WallClock) -> Self {
        Self {
            hour: wall.hour,
            minute: wall.minute,
            field: TimeField::Hour,
        }
    }

    /// Increment the focused field, wrapping
    pub fn increment(&mut self) {
        match self.field {
            TimeField::Hour => self.hour = (self.hour + 1) % 24,
            TimeField::Minute => self.minute = (self.minute + 1) % 60,
        }
    }

    /// Switch between hour and minute
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            TimeField::Hour => TimeField::Minute,
            TimeField::Minute => TimeField::Hour,
        };
    }
}

/// Cursor state for the editing screens
#[derive(Debug, Clone, Copy, Default)]
pub struct Editor {
    pub time: TimeDraft,
    pub morning_field: TimeField,
    pub quiet_bound: QuietBound,
    pub preview: CheckKind,
}

impl Editor {
    /// Reset the cursors for a freshly opened overlay
    pub fn open(&mut self, kind: EditingKind) {
        match kind {
            EditingKind::ManualAlarm => self.morning_field = TimeField::Hour,
            EditingKind::QuietHours => self.quiet_bound = QuietBound::Start,
            EditingKind::RealityCheckTest => self.preview = CheckKind::default(),
            _ => {}
        }
    }

    /// Primary button in an overlay
    pub fn increment(&mut self, kind: EditingKind, settings: &mut Settings) {
        match kind {
            EditingKind::AlarmCount => settings.increase_alarms_per_day(),
            EditingKind::ManualAlarm => {
                let alarm = &mut settings.morning_alarm;
                match self.morning_field {
                    TimeField::Hour => alarm.hour = (alarm.hour + 1) % 24,
                    TimeField::Minute => alarm.minute = (alarm.minute + 1) % 60,
                }
            }
            EditingKind::ScreenTimeout => settings.screen_timeout = settings.screen_timeout.next(),
            EditingKind::Sensitivity => settings.sensitivity = settings.sensitivity.firmer(),
            EditingKind::Brightness => settings.brightness = settings.brightness.brighter(),
            EditingKind::ClockColor => settings.clock_color = settings.clock_color.next(),
            EditingKind::QuietHours => {
                let bound = self.quiet_bound_mut(settings);
                *bound = (*bound + 1) % 24;
            }
            EditingKind::TimeFormat => settings.time_format = settings.time_format.toggled(),
            EditingKind::RealityCheckTest => self.preview = self.preview.next(),
        }
    }

    /// Secondary button in an overlay
    pub fn decrement(&mut self, kind: EditingKind, settings: &mut Settings) {
        match kind {
            EditingKind::AlarmCount => settings.decrease_alarms_per_day(),
            EditingKind::ManualAlarm => match self.morning_field {
                TimeField::Hour => self.morning_field = TimeField::Minute,
                TimeField::Minute => {
                    settings.morning_alarm.enabled = !settings.morning_alarm.enabled;
                    self.morning_field = TimeField::Hour;
                }
            },
            EditingKind::ScreenTimeout => settings.screen_timeout = settings.screen_timeout.prev(),
            EditingKind::Sensitivity => settings.sensitivity = settings.sensitivity.lighter(),
            EditingKind::Brightness => settings.brightness = settings.brightness.dimmer(),
            EditingKind::ClockColor => settings.clock_color = settings.clock_color.prev(),
            EditingKind::QuietHours => {
                let bound = self.quiet_bound_mut(settings);
                *bound = (*bound + 23) % 24;
            }
            EditingKind::TimeFormat => settings.time_format = settings.time_format.toggled(),
            EditingKind::RealityCheckTest => self.preview = self.preview.prev(),
        }
    }

    /// Power button in the quiet-hours overlay
    ///
    /// Moves from the start bound to the end bound; returns true once both
    /// bounds have been confirmed.
    pub fn confirm_quiet_bound(&mut self) -> bool {
        match self.quiet_bound {
            QuietBound::Start => {
                self.quiet_bound = QuietBound::End;
                false
            }
            QuietBound::End => true,
        }
    }

    /// Overlay contents for `kind`
    pub fn view(&self, kind: EditingKind, settings: &Settings) -> EditView {
        match kind {
            EditingKind::AlarmCount => EditView::AlarmsPerDay(settings.alarms_per_day),
            EditingKind::ManualAlarm => EditView::MorningAlarm {
                alarm: settings.morning_alarm,
                field: self.morning_field,
            },
            EditingKind::ScreenTimeout => EditView::ScreenTimeout(settings.screen_timeout),
            EditingKind::Sensitivity => EditView::Sensitivity(settings.sensitivity),
            EditingKind::Brightness => EditView::Brightness(settings.brightness),
            EditingKind::ClockColor => EditView::ClockColor(settings.clock_color),
            EditingKind::QuietHours => EditView::QuietHours {
                hours: settings.quiet_hours,
                bound: self.quiet_bound,
            },
            EditingKind::TimeFormat => EditView::TimeFormat(settings.time_format),
            EditingKind::RealityCheckTest => EditView::CheckPreview(self.preview),
        }
    }

    fn quiet_bound_mut<'a>(&self, settings: &'a mut Settings) -> &'a mut u8 {
        match self.quiet_bound {
            QuietBound::Start => &mut settings.quiet_hours.start_hour,
            QuietBound::End => &mut settings.quiet_hours.end_hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScreenTimeout, TimeFormat, MAX_ALARMS_PER_DAY};

    #[test]
    fn test_time_draft_wraps() {
        let mut draft = TimeDraft::from_wall(WallClock::new(23, 59, 10));
        draft.increment();
        assert_eq!(draft.hour, 0);
        draft.toggle_field();
        draft.increment();
        assert_eq!(draft.minute, 0);
        draft.toggle_field();
        assert_eq!(draft.field, TimeField::Hour);
    }

    #[test]
    fn test_alarm_count_clamps() {
        let mut editor = Editor::default();
        let mut settings = Settings::default();
        for _ in 0..30 {
            editor.increment(EditingKind::AlarmCount, &mut settings);
        }
        assert_eq!(settings.alarms_per_day, MAX_ALARMS_PER_DAY);
        for _ in 0..30 {
            editor.decrement(EditingKind::AlarmCount, &mut settings);
        }
        assert_eq!(settings.alarms_per_day, 0);
    }

    #[test]
    fn test_morning_alarm_field_then_toggle() {
        let mut editor = Editor::default();
        let mut settings = Settings::default();
        editor.open(EditingKind::ManualAlarm);

        editor.increment(EditingKind::ManualAlarm, &mut settings);
        assert_eq!(settings.morning_alarm.hour, 8);

        editor.decrement(EditingKind::ManualAlarm, &mut settings);
        assert_eq!(editor.morning_field, TimeField::Minute);
        editor.increment(EditingKind::ManualAlarm, &mut settings);
        assert_eq!(settings.morning_alarm.minute, 1);

        assert!(!settings.morning_alarm.enabled);
        editor.decrement(EditingKind::ManualAlarm, &mut settings);
        assert!(settings.morning_alarm.enabled);
        assert_eq!(editor.morning_field, TimeField::Hour);
    }

    #[test]
    fn test_quiet_hours_bounds() {
        let mut editor = Editor::default();
        let mut settings = Settings::default();
        editor.open(EditingKind::QuietHours);

        editor.increment(EditingKind::QuietHours, &mut settings);
        assert_eq!(settings.quiet_hours.start_hour, 0);
        assert!(!editor.confirm_quiet_bound());

        editor.decrement(EditingKind::QuietHours, &mut settings);
        assert_eq!(settings.quiet_hours.end_hour, 6);
        assert!(editor.confirm_quiet_bound());
    }

    #[test]
    fn test_screen_timeout_and_format() {
        let mut editor = Editor::default();
        let mut settings = Settings::default();

        editor.decrement(EditingKind::ScreenTimeout, &mut settings);
        assert_eq!(settings.screen_timeout, ScreenTimeout::from_secs(10));
        editor.increment(EditingKind::TimeFormat, &mut settings);
        assert_eq!(settings.time_format, TimeFormat::TwelveHour);
        editor.decrement(EditingKind::TimeFormat, &mut settings);
        assert_eq!(settings.time_format, TimeFormat::TwentyFourHour);
    }

    #[test]
    fn test_check_preview_leaves_settings_alone() {
        let mut editor = Editor::default();
        let mut settings = Settings::default();
        editor.open(EditingKind::RealityCheckTest);

        editor.decrement(EditingKind::RealityCheckTest, &mut settings);
        assert_eq!(
            editor.view(EditingKind::RealityCheckTest, &settings),
            EditView::CheckPreview(CheckKind::MemoryRecall)
        );
        assert_eq!(settings, Settings::default());
    }
}

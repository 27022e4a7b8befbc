//! Mode definition and transitions
//!
//! Button semantics, timers and rendering are all a function of the
//! current mode. The transition table here is pure; the controller turns
//! button gestures and timer outcomes into [`Event`]s.

use super::events::Event;

/// Settings overlays, reachable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditingKind {
    /// Reality checks per day
    AlarmCount,
    /// Morning alarm time and enable flag
    ManualAlarm,
    /// Screen-off timeout
    ScreenTimeout,
    /// Shake-to-wake sensitivity
    Sensitivity,
    /// Backlight level
    Brightness,
    /// Clock face colour
    ClockColor,
    /// Quiet-hours window
    QuietHours,
    /// 12/24-hour display
    TimeFormat,
    /// Preview each reality-check prompt
    RealityCheckTest,
}

/// Interaction modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Clock face
    #[default]
    Normal,
    /// Settings menu
    Menu,
    /// Setting the wall clock
    SetTime,
    /// Reality-check alarm showing
    RealityCheck,
    /// Sleep session with REM cues
    NightRest,
    /// Morning alarm reached; prompt to record dreams
    DreamJournal,
    /// Editing one setting
    Editing(EditingKind),
}

impl Mode {
    /// Check if this mode holds the screen on regardless of the timeout
    pub fn is_wake_locked(&self) -> bool {
        !matches!(self, Mode::Normal | Mode::NightRest)
    }

    /// Check if random and morning alarms may fire in this mode
    pub fn accepts_alarms(&self) -> bool {
        matches!(self, Mode::Normal)
    }

    /// Check if this is a settings overlay
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing(_))
    }

    /// Process an event and return the next mode
    ///
    /// Events that mean nothing in the current mode leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Normal transitions
            (Normal, HoldPrimary) => NightRest,
            (Normal, HoldSecondary) => Menu,
            (Normal, AlarmTriggered) => RealityCheck,
            (Normal, MorningAlarm) => DreamJournal,

            // Menu transitions
            (Menu, Select(item)) => item.destination(),
            (Menu, Exit) => Normal,

            // Editing transitions
            (SetTime, Commit) => Normal,
            (Editing(_), Commit) => Normal,

            // Alerts
            (RealityCheck, Dismiss) => Normal,
            (RealityCheck, TimedOut) => Normal,
            (DreamJournal, Dismiss) => Normal,

            // Night rest only ends by hand
            (NightRest, Exit) => Normal,

            // Default: no transition
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MenuItem;

    #[test]
    fn test_normal_transitions() {
        assert_eq!(Mode::Normal.transition(Event::HoldPrimary), Mode::NightRest);
        assert_eq!(Mode::Normal.transition(Event::HoldSecondary), Mode::Menu);
        assert_eq!(Mode::Normal.transition(Event::AlarmTriggered), Mode::RealityCheck);
        assert_eq!(Mode::Normal.transition(Event::MorningAlarm), Mode::DreamJournal);
        assert_eq!(Mode::Normal.transition(Event::Commit), Mode::Normal);
    }

    #[test]
    fn test_menu_opens_overlay() {
        let mode = Mode::Menu.transition(Event::Select(MenuItem::QuietHours));
        assert_eq!(mode, Mode::Editing(EditingKind::QuietHours));
        assert_eq!(mode.transition(Event::Commit), Mode::Normal);

        assert_eq!(
            Mode::Menu.transition(Event::Select(MenuItem::SetTime)),
            Mode::SetTime
        );
        assert_eq!(Mode::Menu.transition(Event::Exit), Mode::Normal);
    }

    #[test]
    fn test_alarms_only_enter_from_normal() {
        let busy = [
            Mode::Menu,
            Mode::SetTime,
            Mode::NightRest,
            Mode::DreamJournal,
            Mode::Editing(EditingKind::Brightness),
        ];
        for mode in busy {
            assert_eq!(mode.transition(Event::AlarmTriggered), mode);
            assert_eq!(mode.transition(Event::MorningAlarm), mode);
            assert!(!mode.accepts_alarms());
        }
    }

    #[test]
    fn test_night_rest_ignores_everything_but_exit() {
        for event in [
            Event::HoldPrimary,
            Event::HoldSecondary,
            Event::Commit,
            Event::Dismiss,
            Event::TimedOut,
            Event::AlarmTriggered,
        ] {
            assert_eq!(Mode::NightRest.transition(event), Mode::NightRest);
        }
        assert_eq!(Mode::NightRest.transition(Event::Exit), Mode::Normal);
    }

    #[test]
    fn test_reality_check_exits() {
        assert_eq!(Mode::RealityCheck.transition(Event::Dismiss), Mode::Normal);
        assert_eq!(Mode::RealityCheck.transition(Event::TimedOut), Mode::Normal);
        assert_eq!(Mode::RealityCheck.transition(Event::Exit), Mode::RealityCheck);
    }

    #[test]
    fn test_wake_lock() {
        assert!(!Mode::Normal.is_wake_locked());
        assert!(!Mode::NightRest.is_wake_locked());
        assert!(Mode::Menu.is_wake_locked());
        assert!(Mode::SetTime.is_wake_locked());
        assert!(Mode::RealityCheck.is_wake_locked());
        assert!(Mode::DreamJournal.is_wake_locked());
        assert!(Mode::Editing(EditingKind::TimeFormat).is_wake_locked());
    }
}

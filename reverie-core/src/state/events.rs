//! Events that trigger mode transitions

use super::menu::MenuItem;

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Button gestures
    /// Primary button held for the night-rest threshold
    HoldPrimary,
    /// Secondary button held for the menu threshold
    HoldSecondary,
    /// Menu entry chosen
    Select(MenuItem),
    /// Leave the menu or night rest without changes
    Exit,
    /// Save the edit in progress and return
    Commit,
    /// Acknowledge an alert
    Dismiss,

    // Timer events
    /// Reality-check alarm fired
    AlarmTriggered,
    /// Morning alarm time reached
    MorningAlarm,
    /// Reality check left unanswered
    TimedOut,
}

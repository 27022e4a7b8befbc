//! Button input trait

/// Logical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Front button: scroll, increment, hold for night rest
    Primary,
    /// Side button: select, decrement, hold for the menu
    Secondary,
    /// Power button: save, exit, dismiss
    Power,
}

impl ButtonId {
    /// All buttons
    pub const ALL: [ButtonId; 3] = [ButtonId::Primary, ButtonId::Secondary, ButtonId::Power];
}

/// Debounced button state for the current poll
///
/// Edge queries (`was_pressed`, `was_released`) report transitions since
/// the previous poll and must be stable for the whole poll.
pub trait ButtonInput {
    /// Button went down since the last poll
    fn was_pressed(&self, button: ButtonId) -> bool;

    /// Button came up since the last poll
    fn was_released(&self, button: ButtonId) -> bool;

    /// Button is currently held
    fn is_pressed(&self, button: ButtonId) -> bool;

    /// Button has been held continuously for at least `ms`
    fn pressed_for(&self, button: ButtonId, ms: u32) -> bool;

    /// Any button went down since the last poll
    fn any_pressed(&self) -> bool {
        ButtonId::ALL.iter().any(|b| self.was_pressed(*b))
    }
}

//! Display sink trait

use crate::controller::View;

/// One-way display sink
///
/// The core never reads display state back. Layout, fonts and colours are
/// entirely up to the implementation.
pub trait Display {
    /// Draw the given view
    fn render(&mut self, view: &View);

    /// Set backlight PWM duty (0-255); 0 turns the screen off
    fn set_backlight(&mut self, duty: u8);
}

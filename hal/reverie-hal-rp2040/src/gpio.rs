//! GPIO inputs

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

/// Button input with the internal pull-up enabled
pub struct ButtonPin<'d> {
    input: Input<'d>,
}

impl<'d> ButtonPin<'d> {
    /// Configure `pin` as an input pulled up; pressing shorts it to ground
    pub fn pull_up(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl reverie_hal::InputPin for ButtonPin<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

//! Display sink for the round LCD
//!
//! Views go to the display task through [`SCREEN_UPDATE`]; the backlight
//! is driven directly since it is a single register write.

use reverie_core::controller::View;
use reverie_core::traits::Display;
use reverie_hal_rp2040::backlight::PwmBacklight;

use crate::channels::SCREEN_UPDATE;

/// [`Display`] implementation handed to the controller
pub struct ScreenSink<'d> {
    backlight: PwmBacklight<'d>,
}

impl<'d> ScreenSink<'d> {
    pub fn new(backlight: PwmBacklight<'d>) -> Self {
        Self { backlight }
    }
}

impl Display for ScreenSink<'_> {
    fn render(&mut self, view: &View) {
        SCREEN_UPDATE.signal(*view);
    }

    fn set_backlight(&mut self, duty: u8) {
        self.backlight.set_duty(duty);
    }
}

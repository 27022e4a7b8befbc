//! LCD backlight on PWM channel B

use embassy_rp::pwm::{Config, Pwm};
use fixed::traits::ToFixed;

/// Backlight driver; duty 0 turns the LED off
pub struct PwmBacklight<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmBacklight<'d> {
    /// Wrap a PWM output; starts dark
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut config = Config::default();
        // 125 MHz / 16 / 256 ≈ 30 kHz, above audible range
        config.divider = 16u8.to_fixed();
        config.top = u8::MAX as u16;
        config.compare_b = 0;

        let mut backlight = Self { pwm, config };
        backlight.pwm.set_config(&backlight.config);
        backlight
    }

    /// Set the duty cycle (0-255)
    pub fn set_duty(&mut self, duty: u8) {
        self.config.compare_b = duty as u16;
        self.pwm.set_config(&self.config);
    }
}

//! Piezo tone output on a PWM slice
//!
//! The slice counter runs at 125 MHz / 64 so that audible frequencies
//! (down to about 30 Hz) fit in the 16-bit TOP register.

use embassy_rp::pwm::{Config, Pwm};
use fixed::traits::ToFixed;
use reverie_core::traits::ToneOutput;

/// System clock after `embassy_rp::init` with default clocks
const SYS_CLOCK_HZ: u32 = 125_000_000;

/// PWM clock divider
const DIVIDER: u32 = 64;

/// Counter rate after the divider
const COUNTER_HZ: u32 = SYS_CLOCK_HZ / DIVIDER;

/// TOP and compare values for a square wave at `frequency_hz`
///
/// Returns `None` for frequencies the slice cannot produce.
pub fn pwm_settings(frequency_hz: u16, duty_percent: u8) -> Option<(u16, u16)> {
    if frequency_hz == 0 {
        return None;
    }
    let top = (COUNTER_HZ / frequency_hz as u32).checked_sub(1)?;
    let top = u16::try_from(top).ok()?;
    let compare = (top as u32 + 1) * duty_percent.min(100) as u32 / 100;
    Some((top, compare as u16))
}

/// Piezo buzzer on PWM channel A of a slice
pub struct PwmTone<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmTone<'d> {
    /// Wrap a PWM output; the output starts silent
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut config = Config::default();
        config.divider = DIVIDER.to_fixed();
        config.compare_a = 0;
        config.enable = false;

        let mut tone = Self { pwm, config };
        tone.apply();
        tone
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

impl ToneOutput for PwmTone<'_> {
    fn tone(&mut self, frequency_hz: u16, duty_percent: u8) {
        match pwm_settings(frequency_hz, duty_percent) {
            Some((top, compare)) => {
                self.config.top = top;
                self.config.compare_a = compare;
                self.config.enable = true;
            }
            None => {
                self.config.compare_a = 0;
                self.config.enable = false;
            }
        }
        self.apply();
    }

    fn silence(&mut self) {
        self.config.compare_a = 0;
        self.config.enable = false;
        self.apply();
    }
}

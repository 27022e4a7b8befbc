//! Audio output trait

/// Single-channel square-wave tone output (piezo buzzer)
pub trait ToneOutput {
    /// Start (or retune) a tone
    ///
    /// `duty_percent` controls loudness on a piezo; 50 is loudest.
    fn tone(&mut self, frequency_hz: u16, duty_percent: u8);

    /// Silence the output
    fn silence(&mut self);
}

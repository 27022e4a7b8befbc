//! Tone burst descriptions

/// A fixed-count burst of tones
///
/// Tone `i` plays at `base_hz + i * step_hz` for `on_ms`, separated by
/// `gap_ms` of silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TonePattern {
    /// Number of tones in the burst
    pub count: u8,
    /// Tone duration in milliseconds
    pub on_ms: u32,
    /// Silence between tones in milliseconds
    pub gap_ms: u32,
    /// Frequency of the first tone
    pub base_hz: u16,
    /// Frequency increase per tone
    pub step_hz: u16,
    /// PWM duty; lower is softer
    pub duty_percent: u8,
}

impl TonePattern {
    /// Frequency of tone `index`
    pub const fn frequency(&self, index: u8) -> u16 {
        self.base_hz + self.step_hz * index as u16
    }

    /// Time from the first tone-on to the last tone-off
    pub const fn duration_ms(&self) -> u32 {
        if self.count == 0 {
            return 0;
        }
        self.count as u32 * self.on_ms + (self.count as u32 - 1) * self.gap_ms
    }
}

/// Reality-check alarm: three short loud chirps
pub const CHIRP: TonePattern = TonePattern {
    count: 3,
    on_ms: 100,
    gap_ms: 150,
    base_hz: 2000,
    step_hz: 0,
    duty_percent: 50,
};

/// REM / dream-journal cue: soft ascending triplet
pub const GENTLE_CUE: TonePattern = TonePattern {
    count: 3,
    on_ms: 200,
    gap_ms: 250,
    base_hz: 800,
    step_hz: 100,
    duty_percent: 25,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gentle_cue_ascends() {
        assert_eq!(GENTLE_CUE.frequency(0), 800);
        assert_eq!(GENTLE_CUE.frequency(1), 900);
        assert_eq!(GENTLE_CUE.frequency(2), 1000);
        assert_eq!(GENTLE_CUE.duration_ms(), 1100);
    }

    #[test]
    fn test_chirp_is_flat() {
        assert!((0..CHIRP.count).all(|i| CHIRP.frequency(i) == 2000));
        assert_eq!(CHIRP.duration_ms(), 600);
    }
}

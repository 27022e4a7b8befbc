//! Non-blocking tone sequencer
//!
//! Drives one audio channel through `ToneOn -> WaitingForNextChirp ->
//! ToneOn -> ... -> Idle` without ever waiting inside a call. The caller
//! polls it from the main loop; every transition happens on the first
//! poll at or after its deadline, so timing error is bounded by the poll
//! period.

use super::pattern::TonePattern;
use crate::time::Instant;
use crate::traits::ToneOutput;

/// Minimum silence between the end of one burst and the start of the next
pub const SETTLE_GAP_MS: u32 = 500;

/// Sequencer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Output silent, nothing scheduled
    Idle,
    /// A tone is sounding
    ToneOn,
    /// Silent between tones (or settling before a restarted burst)
    WaitingForNextChirp,
}

/// Reported by [`ToneSequencer::poll`] when a tone ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChirpEnded {
    /// Tones completed so far in this burst
    pub played: u8,
    /// The burst is over and the sequencer is idle
    pub finished: bool,
}

/// Tone sequencer
#[derive(Debug)]
pub struct ToneSequencer {
    phase: Phase,
    pattern: TonePattern,
    chirp_index: u8,
    phase_start: Instant,
    /// Length of the current silent phase
    wait_ms: u32,
    /// When the last burst ran to completion
    finished_at: Option<Instant>,
}

impl Default for ToneSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneSequencer {
    /// Create an idle sequencer
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            pattern: super::pattern::CHIRP,
            chirp_index: 0,
            phase_start: Instant::from_millis(0),
            wait_ms: 0,
            finished_at: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tones completed in the current burst
    pub fn chirp_index(&self) -> u8 {
        self.chirp_index
    }

    /// Pattern of the current (or last) burst
    pub fn pattern(&self) -> &TonePattern {
        &self.pattern
    }

    /// Whether a burst is in progress
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start a burst
    ///
    /// Restarting within [`SETTLE_GAP_MS`] of a completed burst holds the
    /// first tone until the settle gap has passed. Restarting while a burst
    /// is still playing begins the new one immediately.
    pub fn start<T: ToneOutput>(&mut self, now: Instant, pattern: TonePattern, out: &mut T) {
        self.pattern = pattern;
        self.chirp_index = 0;

        if pattern.count == 0 {
            self.stop(out);
            return;
        }

        match self.finished_at {
            Some(end) if self.phase == Phase::Idle && now.since(end) < SETTLE_GAP_MS => {
                out.silence();
                self.phase = Phase::WaitingForNextChirp;
                self.phase_start = end;
                self.wait_ms = SETTLE_GAP_MS;
            }
            _ => self.tone_on(now, out),
        }
    }

    /// Advance the sequence
    ///
    /// Returns `Some` on the poll where a tone is switched off.
    pub fn poll<T: ToneOutput>(&mut self, now: Instant, out: &mut T) -> Option<ChirpEnded> {
        let elapsed = now.since(self.phase_start);

        match self.phase {
            Phase::Idle => None,
            Phase::ToneOn if elapsed >= self.pattern.on_ms => {
                out.silence();
                self.chirp_index += 1;
                let finished = self.chirp_index >= self.pattern.count;

                if finished {
                    self.phase = Phase::Idle;
                    self.finished_at = Some(now);
                } else {
                    self.phase = Phase::WaitingForNextChirp;
                    self.phase_start = now;
                    self.wait_ms = self.pattern.gap_ms;
                }

                Some(ChirpEnded {
                    played: self.chirp_index,
                    finished,
                })
            }
            Phase::WaitingForNextChirp if elapsed >= self.wait_ms => {
                self.tone_on(now, out);
                None
            }
            _ => None,
        }
    }

    /// Force idle and silence the output; idempotent
    pub fn stop<T: ToneOutput>(&mut self, out: &mut T) {
        out.silence();
        self.phase = Phase::Idle;
        self.finished_at = None;
    }

    fn tone_on<T: ToneOutput>(&mut self, now: Instant, out: &mut T) {
        out.tone(
            self.pattern.frequency(self.chirp_index),
            self.pattern.duty_percent,
        );
        self.phase = Phase::ToneOn;
        self.phase_start = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::pattern::{CHIRP, GENTLE_CUE};
    use proptest::prelude::*;

    #[derive(Default)]
    struct MockTone {
        tones: u32,
        silences: u32,
        last_hz: Option<u16>,
        sounding: bool,
    }

    impl ToneOutput for MockTone {
        fn tone(&mut self, frequency_hz: u16, _duty_percent: u8) {
            self.tones += 1;
            self.last_hz = Some(frequency_hz);
            self.sounding = true;
        }

        fn silence(&mut self) {
            self.silences += 1;
            self.sounding = false;
        }
    }

    fn at(ms: u32) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_chirp_sequence_timing() {
        let mut seq = ToneSequencer::new();
        let mut out = MockTone::default();

        seq.start(at(0), CHIRP, &mut out);
        assert_eq!(seq.phase(), Phase::ToneOn);
        assert!(out.sounding);

        assert_eq!(seq.poll(at(99), &mut out), None);
        assert_eq!(
            seq.poll(at(100), &mut out),
            Some(ChirpEnded { played: 1, finished: false })
        );
        assert_eq!(seq.phase(), Phase::WaitingForNextChirp);
        assert!(!out.sounding);

        seq.poll(at(249), &mut out);
        assert_eq!(seq.phase(), Phase::WaitingForNextChirp);
        seq.poll(at(250), &mut out);
        assert_eq!(seq.phase(), Phase::ToneOn);

        seq.poll(at(350), &mut out);
        seq.poll(at(500), &mut out);
        assert_eq!(
            seq.poll(at(600), &mut out),
            Some(ChirpEnded { played: 3, finished: true })
        );
        assert_eq!(seq.phase(), Phase::Idle);
        assert_eq!(out.tones, 3);
        assert_eq!(out.silences, 3);
    }

    #[test]
    fn test_gentle_cue_ascends() {
        let mut seq = ToneSequencer::new();
        let mut out = MockTone::default();

        seq.start(at(0), GENTLE_CUE, &mut out);
        assert_eq!(out.last_hz, Some(800));
        seq.poll(at(200), &mut out);
        seq.poll(at(450), &mut out);
        assert_eq!(out.last_hz, Some(900));
        seq.poll(at(650), &mut out);
        seq.poll(at(900), &mut out);
        assert_eq!(out.last_hz, Some(1000));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut seq = ToneSequencer::new();
        let mut out = MockTone::default();

        seq.start(at(0), CHIRP, &mut out);
        seq.stop(&mut out);
        seq.stop(&mut out);
        assert_eq!(seq.phase(), Phase::Idle);
        assert!(!out.sounding);
        assert_eq!(seq.poll(at(1000), &mut out), None);
        assert_eq!(out.tones, 1);
    }

    #[test]
    fn test_restart_after_completion_waits_for_settle_gap() {
        let mut seq = ToneSequencer::new();
        let mut out = MockTone::default();

        seq.start(at(0), CHIRP, &mut out);
        for t in [100, 250, 350, 500, 600] {
            seq.poll(at(t), &mut out);
        }
        assert_eq!(seq.phase(), Phase::Idle);

        seq.start(at(700), CHIRP, &mut out);
        assert_eq!(seq.phase(), Phase::WaitingForNextChirp);
        assert!(!out.sounding);

        seq.poll(at(1099), &mut out);
        assert!(!out.sounding);
        seq.poll(at(1100), &mut out);
        assert_eq!(seq.phase(), Phase::ToneOn);
        assert!(out.sounding);
    }

    #[test]
    fn test_restart_after_settle_gap_is_immediate() {
        let mut seq = ToneSequencer::new();
        let mut out = MockTone::default();

        seq.start(at(0), CHIRP, &mut out);
        for t in [100, 250, 350, 500, 600] {
            seq.poll(at(t), &mut out);
        }
        seq.start(at(1200), CHIRP, &mut out);
        assert_eq!(seq.phase(), Phase::ToneOn);
    }

    #[test]
    fn test_sequence_survives_counter_wrap() {
        let mut seq = ToneSequencer::new();
        let mut out = MockTone::default();
        let start = Instant::from_millis(u32::MAX - 50);

        seq.start(start, CHIRP, &mut out);
        assert_eq!(seq.poll(start.add_millis(60), &mut out), None);
        assert!(seq.poll(start.add_millis(100), &mut out).is_some());
    }

    proptest! {
        #[test]
        fn prop_sequence_completes_at_any_cadence(step in 1u32..=60, origin in any::<u32>()) {
            let mut seq = ToneSequencer::new();
            let mut out = MockTone::default();
            let origin = Instant::from_millis(origin);

            seq.start(origin, CHIRP, &mut out);
            let mut tone_started = Some(origin);
            let mut cycles = 0u8;
            let mut t = 0u32;

            while seq.is_active() {
                t += step;
                prop_assert!(t < 10_000, "sequence never finished");
                let now = origin.add_millis(t);
                let before = seq.phase();
                seq.poll(now, &mut out);

                match (before, seq.phase()) {
                    (Phase::ToneOn, Phase::WaitingForNextChirp) | (Phase::ToneOn, Phase::Idle) => {
                        let on_for = now.since(tone_started.take().unwrap());
                        prop_assert!(on_for >= CHIRP.on_ms);
                        prop_assert!(on_for <= CHIRP.on_ms + step);
                        cycles += 1;
                    }
                    (Phase::WaitingForNextChirp, Phase::ToneOn) => {
                        tone_started = Some(now);
                    }
                    _ => {}
                }
                prop_assert!(seq.chirp_index() <= CHIRP.count);
            }

            prop_assert_eq!(cycles, CHIRP.count);
            prop_assert_eq!(out.tones, CHIRP.count as u32);
            prop_assert!(!out.sounding);
        }
    }
}

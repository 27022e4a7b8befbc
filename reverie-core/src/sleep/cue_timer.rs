//! REM cue timer
//!
//! Once a night-rest session has run long enough for the wearer to be
//! reaching REM sleep, plays a gentle cue at a fixed cadence. The cadence
//! tightens for the later, longer REM phases.

use crate::time::{Instant, MS_PER_MINUTE};
use crate::tone::{ToneSequencer, GENTLE_CUE};
use crate::traits::ToneOutput;

/// Session time before the first cue
pub const REM_LATENCY_MINUTES: u32 = 270;

/// Session time after which the late cadence applies
pub const LATE_WINDOW_MINUTES: u32 = 345;

/// Cue spacing before [`LATE_WINDOW_MINUTES`]
pub const EARLY_CUE_INTERVAL_MINUTES: u32 = 8;

/// Cue spacing from [`LATE_WINDOW_MINUTES`] on
pub const LATE_CUE_INTERVAL_MINUTES: u32 = 7;

/// Sleep cue timer
#[derive(Debug, Default)]
pub struct SleepCueTimer {
    session_start: Instant,
    last_cue: Option<Instant>,
    active: bool,
    cues: u16,
}

impl SleepCueTimer {
    /// Create an inactive timer
    pub const fn new() -> Self {
        Self {
            session_start: Instant::from_millis(0),
            last_cue: None,
            active: false,
            cues: 0,
        }
    }

    /// Begin a session at `now`, discarding any previous one
    pub fn start(&mut self, now: Instant) {
        self.session_start = now;
        self.last_cue = None;
        self.active = true;
        self.cues = 0;
    }

    /// End the session
    pub fn stop(&mut self) {
        self.active = false;
        self.last_cue = None;
    }

    /// Session in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cues played this session
    pub fn cues(&self) -> u16 {
        self.cues
    }

    /// Milliseconds since the session started (0 when inactive)
    pub fn elapsed_ms(&self, now: Instant) -> u32 {
        if self.active {
            now.since(self.session_start)
        } else {
            0
        }
    }

    /// Cue spacing in effect `elapsed_ms` into the session
    pub fn interval_ms(elapsed_ms: u32) -> u32 {
        if elapsed_ms >= LATE_WINDOW_MINUTES * MS_PER_MINUTE {
            LATE_CUE_INTERVAL_MINUTES * MS_PER_MINUTE
        } else {
            EARLY_CUE_INTERVAL_MINUTES * MS_PER_MINUTE
        }
    }

    /// Poll the timer; starts a gentle cue on `tone` when one is due
    ///
    /// Returns true if a cue was started.
    pub fn tick<T: ToneOutput>(
        &mut self,
        now: Instant,
        tone: &mut ToneSequencer,
        out: &mut T,
    ) -> bool {
        if !self.active {
            return false;
        }

        let elapsed = now.since(self.session_start);
        if elapsed < REM_LATENCY_MINUTES * MS_PER_MINUTE {
            return false;
        }

        let due = match self.last_cue {
            None => true,
            Some(last) => now.since(last) >= Self::interval_ms(elapsed),
        };
        if !due {
            return false;
        }

        tone.start(now, GENTLE_CUE, out);
        self.last_cue = Some(now);
        self.cues = self.cues.saturating_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullTone;

    impl ToneOutput for NullTone {
        fn tone(&mut self, _frequency_hz: u16, _duty_percent: u8) {}
        fn silence(&mut self) {}
    }

    const MIN: u32 = MS_PER_MINUTE;

    /// Run a session from `origin`, ticking once per second; returns cue
    /// times in minutes since the session started.
    fn run_session(origin: u32, minutes: u32) -> std::vec::Vec<u32> {
        let mut timer = SleepCueTimer::new();
        let mut tone = ToneSequencer::new();
        let mut out = NullTone;
        let origin = Instant::from_millis(origin);
        let mut cues = std::vec::Vec::new();

        timer.start(origin);
        for s in 0..=minutes * 60 {
            let now = origin.add_millis(s * 1000);
            tone.poll(now, &mut out);
            if timer.tick(now, &mut tone, &mut out) {
                assert_eq!(s * 1000 % MIN, 0, "cue off the minute at {}s", s);
                cues.push(s * 1000 / MIN);
            }
        }
        cues
    }

    #[test]
    fn test_no_cue_before_latency() {
        let cues = run_session(0, 269);
        assert!(cues.is_empty());
    }

    #[test]
    fn test_cue_cadence_windows() {
        let cues = run_session(0, 420);

        assert!((270..=278).contains(&cues[0]));
        for pair in cues.windows(2) {
            let gap = pair[1] - pair[0];
            if pair[1] < LATE_WINDOW_MINUTES {
                assert_eq!(gap, EARLY_CUE_INTERVAL_MINUTES, "cues {:?}", pair);
            } else {
                assert_eq!(gap, LATE_CUE_INTERVAL_MINUTES, "cues {:?}", pair);
            }
        }
        assert!(cues.iter().any(|m| *m > LATE_WINDOW_MINUTES));
    }

    #[test]
    fn test_cadence_across_counter_wrap() {
        let wrapped = run_session(u32::MAX - 5 * MIN, 300);
        let plain = run_session(0, 300);
        assert_eq!(wrapped, plain);
    }

    #[test]
    fn test_stop_discards_session() {
        let mut timer = SleepCueTimer::new();
        let mut tone = ToneSequencer::new();
        let mut out = NullTone;

        timer.start(Instant::from_millis(0));
        assert!(timer.tick(Instant::from_millis(270 * MIN), &mut tone, &mut out));
        timer.stop();
        assert!(!timer.is_active());
        assert!(!timer.tick(Instant::from_millis(300 * MIN), &mut tone, &mut out));

        // A new session starts the latency over
        timer.start(Instant::from_millis(300 * MIN));
        assert_eq!(timer.cues(), 0);
        assert!(!timer.tick(Instant::from_millis(400 * MIN), &mut tone, &mut out));
    }

    #[test]
    fn test_cue_starts_gentle_tone() {
        let mut timer = SleepCueTimer::new();
        let mut tone = ToneSequencer::new();
        let mut out = NullTone;

        timer.start(Instant::from_millis(0));
        timer.tick(Instant::from_millis(270 * MIN), &mut tone, &mut out);
        assert!(tone.is_active());
        assert_eq!(*tone.pattern(), GENTLE_CUE);
    }
}

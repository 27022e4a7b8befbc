//! Screen power management
//!
//! Tracks whether the screen is on, turns it off after the configured
//! inactivity timeout, and wakes it on buttons or on a shake.

use crate::config::{ScreenTimeout, Sensitivity};
use crate::time::Instant;
use crate::traits::MotionSensor;

/// How often the motion sensor is sampled for wake gestures
pub const MOTION_SAMPLE_MS: u32 = 100;

/// Screen power state
#[derive(Debug)]
pub struct ScreenPower {
    on: bool,
    last_activity: Instant,
    last_motion_sample: Option<Instant>,
}

impl ScreenPower {
    /// Screen on, with activity recorded at `now`
    pub fn new(now: Instant) -> Self {
        Self {
            on: true,
            last_activity: now,
            last_motion_sample: None,
        }
    }

    /// Check if the screen is on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Turn the screen on and restart the inactivity timer
    pub fn wake(&mut self, now: Instant) {
        self.on = true;
        self.last_activity = now;
    }

    /// Sample the motion sensor and wake on a shake
    ///
    /// Samples at most every [`MOTION_SAMPLE_MS`]. The button-only
    /// sensitivity never reads the sensor. Returns true if motion woke
    /// the screen or extended its activity.
    pub fn poll_motion<M: MotionSensor>(
        &mut self,
        now: Instant,
        motion: &mut M,
        sensitivity: Sensitivity,
    ) -> bool {
        let Some(threshold) = sensitivity.threshold_mg() else {
            return false;
        };

        if let Some(last) = self.last_motion_sample {
            if now.since(last) < MOTION_SAMPLE_MS {
                return false;
            }
        }
        self.last_motion_sample = Some(now);

        match motion.magnitude_delta() {
            Some(delta) if delta.exceeds(threshold) => {
                self.wake(now);
                true
            }
            _ => false,
        }
    }

    /// Apply the inactivity timeout
    ///
    /// While `wake_locked` the screen is held on and the timer restarts
    /// continuously. Returns true if the screen was turned off.
    pub fn apply_timeout(&mut self, now: Instant, timeout: ScreenTimeout, wake_locked: bool) -> bool {
        if wake_locked {
            self.wake(now);
            return false;
        }

        match timeout.as_millis() {
            Some(limit) if self.on && now.since(self.last_activity) >= limit => {
                self.on = false;
                true
            }
            _ => false,
        }
    }
}

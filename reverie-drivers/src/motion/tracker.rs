//! Change-between-samples tracker

use reverie_core::traits::{Acceleration, Accelerometer, MotionDelta, MotionSensor};

/// Reports how much acceleration changed since the previous read
///
/// The first read after construction, or after a failed read, only seeds
/// the baseline and reports nothing.
pub struct DeltaTracker<A> {
    sensor: A,
    last: Option<Acceleration>,
}

impl<A: Accelerometer> DeltaTracker<A> {
    pub fn new(sensor: A) -> Self {
        Self { sensor, last: None }
    }

    /// Give the sensor back
    pub fn release(self) -> A {
        self.sensor
    }
}

impl<A: Accelerometer> MotionSensor for DeltaTracker<A> {
    fn magnitude_delta(&mut self) -> Option<MotionDelta> {
        match self.sensor.read() {
            Ok(current) => {
                let delta = self.last.map(|previous| MotionDelta::between(previous, current));
                self.last = Some(current);
                delta
            }
            Err(_) => {
                self.last = None;
                None
            }
        }
    }
}

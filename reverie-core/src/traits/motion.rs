//! Motion sensing traits

/// Errors from the motion sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transfer failed
    Bus,
    /// Sensor did not identify itself
    NotDetected,
}

/// Acceleration in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x_mg: i32,
    pub y_mg: i32,
    pub z_mg: i32,
}

/// Per-axis change in acceleration between two samples, in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionDelta {
    pub dx_mg: u32,
    pub dy_mg: u32,
    pub dz_mg: u32,
}

impl MotionDelta {
    /// Change from `previous` to `current`
    pub fn between(previous: Acceleration, current: Acceleration) -> Self {
        Self {
            dx_mg: current.x_mg.abs_diff(previous.x_mg),
            dy_mg: current.y_mg.abs_diff(previous.y_mg),
            dz_mg: current.z_mg.abs_diff(previous.z_mg),
        }
    }

    /// True if any axis moved more than `threshold_mg`
    pub fn exceeds(&self, threshold_mg: u32) -> bool {
        self.dx_mg > threshold_mg || self.dy_mg > threshold_mg || self.dz_mg > threshold_mg
    }
}

/// Raw accelerometer
pub trait Accelerometer {
    /// Read the current acceleration
    fn read(&mut self) -> Result<Acceleration, SensorError>;
}

/// Source of motion deltas for wake-on-shake
pub trait MotionSensor {
    /// Change since the previous sample, or `None` if no new sample is
    /// available (sensor missing, bus error, first read)
    fn magnitude_delta(&mut self) -> Option<MotionDelta>;
}

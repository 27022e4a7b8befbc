//! Time source trait

use crate::time::{Instant, WallClock};

/// Monotonic counter plus local wall clock
pub trait ClockSource {
    /// Current monotonic time
    fn now(&self) -> Instant;

    /// Current local time of day
    ///
    /// Takes `&mut self` because RTC reads usually go over a bus.
    fn wall_clock(&mut self) -> WallClock;

    /// Set the local time of day; seconds restart from zero
    fn set_time(&mut self, hour: u8, minute: u8);
}

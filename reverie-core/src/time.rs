//! Time primitives
//!
//! [`Instant`] is the monotonic millisecond counter every timer in the
//! core compares against. [`WallClock`] is the local time of day as read
//! from the real-time clock; it is only used for minute-of-day decisions,
//! never for measuring durations.

/// Minutes in one day; minute-of-day values wrap here
pub const MINUTES_PER_DAY: u16 = 1440;

/// Milliseconds per minute
pub const MS_PER_MINUTE: u32 = 60_000;

/// Monotonic point in time, in milliseconds since an arbitrary epoch
///
/// The counter wraps after ~49.7 days. Only differences are meaningful and
/// they are always taken with wrapping subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// Create an instant from a raw millisecond count
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond count
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, wraparound-safe
    pub const fn since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Instant `ms` milliseconds after this one
    pub const fn add_millis(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

/// Local time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

impl WallClock {
    /// Create a wall clock reading, folding out-of-range fields back into range
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Wall clock at the given minute of the day (seconds zero)
    pub const fn from_minute_of_day(minute_of_day: u16) -> Self {
        let m = minute_of_day % MINUTES_PER_DAY;
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
            second: 0,
        }
    }

    /// Minutes since local midnight, 0-1439
    pub const fn minute_of_day(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Hour on a 12-hour dial (1-12) and whether it is after noon
    pub const fn hour12(&self) -> (u8, bool) {
        let pm = self.hour >= 12;
        let h = self.hour % 12;
        (if h == 0 { 12 } else { h }, pm)
    }
}

/// Forward distance from minute-of-day `from` to `to`, wrapping at midnight
pub const fn minutes_between(from: u16, to: u16) -> u16 {
    (to % MINUTES_PER_DAY + MINUTES_PER_DAY - from % MINUTES_PER_DAY) % MINUTES_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since_handles_counter_wrap() {
        let before = Instant::from_millis(u32::MAX - 99);
        let after = before.add_millis(250);
        assert_eq!(after.as_millis(), 150);
        assert_eq!(after.since(before), 250);
    }

    #[test]
    fn test_minute_of_day() {
        assert_eq!(WallClock::new(0, 0, 0).minute_of_day(), 0);
        assert_eq!(WallClock::new(8, 0, 30).minute_of_day(), 480);
        assert_eq!(WallClock::new(23, 59, 59).minute_of_day(), 1439);
        assert_eq!(WallClock::from_minute_of_day(1439 + 61), WallClock::new(1, 0, 0));
    }

    #[test]
    fn test_hour12() {
        assert_eq!(WallClock::new(0, 5, 0).hour12(), (12, false));
        assert_eq!(WallClock::new(12, 0, 0).hour12(), (12, true));
        assert_eq!(WallClock::new(15, 0, 0).hour12(), (3, true));
    }

    #[test]
    fn test_minutes_between_wraps_midnight() {
        assert_eq!(minutes_between(480, 560), 80);
        assert_eq!(minutes_between(1430, 30), 40);
        assert_eq!(minutes_between(100, 100), 0);
    }
}

//! Monotonic time plus the RTC peripheral as the wall clock

use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use reverie_core::time::{Instant, WallClock};
use reverie_core::traits::ClockSource;

/// Date written when the RTC has never been set
///
/// Only the time of day matters to the watch; the date just has to be
/// valid for the peripheral.
const EPOCH: DateTime = DateTime {
    year: 2024,
    month: 1,
    day: 1,
    day_of_week: DayOfWeek::Monday,
    hour: 0,
    minute: 0,
    second: 0,
};

/// [`ClockSource`] over `embassy_time` and the RP2040 RTC
pub struct RtcClock<'d> {
    rtc: Rtc<'d, embassy_rp::peripherals::RTC>,
    /// Last successful read, returned if the RTC is briefly unreadable
    last: WallClock,
}

impl<'d> RtcClock<'d> {
    /// Start the RTC at midnight if it is not already running
    pub fn new(mut rtc: Rtc<'d, embassy_rp::peripherals::RTC>) -> Self {
        if !rtc.is_running() {
            let _ = rtc.set_datetime(EPOCH);
        }
        Self {
            rtc,
            last: WallClock::default(),
        }
    }
}

impl ClockSource for RtcClock<'_> {
    fn now(&self) -> Instant {
        Instant::from_millis(embassy_time::Instant::now().as_millis() as u32)
    }

    fn wall_clock(&mut self) -> WallClock {
        if let Ok(now) = self.rtc.now() {
            self.last = WallClock::new(now.hour, now.minute, now.second);
        }
        self.last
    }

    fn set_time(&mut self, hour: u8, minute: u8) {
        let date = self.rtc.now().unwrap_or(EPOCH);
        let _ = self.rtc.set_datetime(DateTime {
            hour,
            minute,
            second: 0,
            ..date
        });
        self.last = WallClock::new(hour, minute, 0);
    }
}

//! Randomized reality-check alarm scheduler
//!
//! Spreads `alarms_per_day` alarms over the waking day at unpredictable
//! intervals. Trigger times are minutes since local midnight and wrap at
//! 1440; quiet hours push a due alarm to a fresh random time instead of
//! firing it.

use rand::{Rng, RngCore};

use crate::config::{CheckKind, CheckKindSet, Settings};
use crate::time::{minutes_between, Instant, WallClock, MINUTES_PER_DAY};

/// Length of the waking day the alarms are spread over, in minutes
pub const AWAKE_WINDOW_MINUTES: u16 = 960;

/// Random spread around the average interval, in percent
pub const INTERVAL_JITTER_PERCENT: u16 = 30;

/// Outcome of one scheduler poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerDecision {
    /// Nothing due
    Idle,
    /// Alarm was due inside quiet hours and has been moved
    Suppressed { next_minute: u16 },
    /// Alarm fired; start sounding
    Triggered(CheckKind),
}

/// Shortest and longest interval drawn for a daily target
///
/// The average is the waking window divided by `alarms_per_day`; draws
/// fall within ±30% of it and never below one minute.
pub fn interval_bounds(alarms_per_day: u8) -> (u16, u16) {
    let average = AWAKE_WINDOW_MINUTES / u16::from(alarms_per_day.max(1));
    let jitter = average * INTERVAL_JITTER_PERCENT / 100;
    ((average - jitter).max(1), average + jitter)
}

/// Pick a check kind uniformly from the enabled subset
///
/// Falls back to the first kind when nothing is enabled.
pub fn select_check_kind<R: RngCore>(rng: &mut R, kinds: CheckKindSet) -> CheckKind {
    if kinds.is_empty() {
        return CheckKind::ALL[0];
    }
    let n = rng.gen_range(0..kinds.len());
    kinds.nth(n).unwrap_or(CheckKind::ALL[0])
}

/// Alarm scheduler
///
/// Owns the trigger schedule and the active/dismissed lifecycle. An alarm
/// is sounding exactly while it is active and not dismissed.
#[derive(Debug)]
pub struct AlarmScheduler<R> {
    rng: R,
    /// Minute of day the alarm is due
    next_trigger_minute: u16,
    /// Minute of day the current interval was measured from
    armed_at_minute: u16,
    /// Length of the current interval
    interval_minutes: u16,
    last_trigger: Option<Instant>,
    active: bool,
    dismissed: bool,
    chirps_played: u8,
    check_kind: CheckKind,
}

impl<R: RngCore> AlarmScheduler<R> {
    /// Create a scheduler; call [`schedule_next`](Self::schedule_next) before polling
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            next_trigger_minute: 0,
            armed_at_minute: 0,
            interval_minutes: AWAKE_WINDOW_MINUTES,
            last_trigger: None,
            active: false,
            dismissed: false,
            chirps_played: 0,
            check_kind: CheckKind::ALL[0],
        }
    }

    /// Draw a random interval and schedule the next alarm after `minute_of_day`
    pub fn schedule_next(&mut self, minute_of_day: u16, alarms_per_day: u8) -> u16 {
        let (min, max) = interval_bounds(alarms_per_day);
        let interval = self.rng.gen_range(min..=max);
        self.arm(minute_of_day, interval)
    }

    /// Schedule the next alarm exactly `interval_minutes` after `minute_of_day`
    pub fn arm(&mut self, minute_of_day: u16, interval_minutes: u16) -> u16 {
        let from = minute_of_day % MINUTES_PER_DAY;
        let interval = interval_minutes.clamp(1, MINUTES_PER_DAY - 1);
        self.armed_at_minute = from;
        self.interval_minutes = interval;
        self.next_trigger_minute = (from + interval) % MINUTES_PER_DAY;
        self.next_trigger_minute
    }

    /// Poll the schedule
    ///
    /// Fires when the interval since arming has run out. Due alarms inside
    /// quiet hours are silently rescheduled. A zero daily target disables
    /// random alarms.
    pub fn tick(&mut self, now: Instant, wall: WallClock, settings: &Settings) -> TriggerDecision {
        if self.active || settings.alarms_per_day == 0 {
            return TriggerDecision::Idle;
        }

        let minute = wall.minute_of_day();
        if !self.is_due(minute) {
            return TriggerDecision::Idle;
        }

        if settings.quiet_hours.contains(wall.hour) {
            let next_minute = self.schedule_next(minute, settings.alarms_per_day);
            return TriggerDecision::Suppressed { next_minute };
        }

        TriggerDecision::Triggered(self.trigger(now, settings.check_kinds))
    }

    /// Start sounding with a freshly chosen check kind
    pub fn trigger(&mut self, now: Instant, kinds: CheckKindSet) -> CheckKind {
        self.active = true;
        self.dismissed = false;
        self.chirps_played = 0;
        self.last_trigger = Some(now);
        self.check_kind = select_check_kind(&mut self.rng, kinds);
        self.check_kind
    }

    /// End the alarm and schedule the next one
    ///
    /// Only an active alarm counts towards the lifetime check counter; the
    /// reschedule happens either way. Returns whether the alarm was active.
    pub fn dismiss(&mut self, minute_of_day: u16, settings: &mut Settings) -> bool {
        let was_active = self.active;
        if was_active {
            settings.check_count = settings.check_count.saturating_add(1);
        }
        self.active = false;
        self.dismissed = true;
        self.schedule_next(minute_of_day, settings.alarms_per_day);
        was_active
    }

    /// Record how many chirps of the current alarm have played
    pub fn record_chirps(&mut self, played: u8) {
        if self.active {
            self.chirps_played = played;
        }
    }

    fn is_due(&self, minute_of_day: u16) -> bool {
        minutes_between(self.armed_at_minute, minute_of_day) >= self.interval_minutes
    }

    /// Minute of day the next alarm is due
    pub fn next_trigger_minute(&self) -> u16 {
        self.next_trigger_minute
    }

    /// When the current (or last) alarm fired
    pub fn last_trigger(&self) -> Option<Instant> {
        self.last_trigger
    }

    /// Alarm lifecycle is between trigger and dismiss
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last alarm was dismissed
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Alarm is currently sounding
    pub fn is_sounding(&self) -> bool {
        self.active && !self.dismissed
    }

    /// Chirps played for the current alarm
    pub fn chirps_played(&self) -> u8 {
        self.chirps_played
    }

    /// Check kind chosen at the last trigger
    pub fn check_kind(&self) -> CheckKind {
        self.check_kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuietHours;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn scheduler(seed: u64) -> AlarmScheduler<SmallRng> {
        AlarmScheduler::new(SmallRng::seed_from_u64(seed))
    }

    fn wall(hour: u8, minute: u8) -> WallClock {
        WallClock::new(hour, minute, 0)
    }

    #[test]
    fn test_interval_bounds() {
        assert_eq!(interval_bounds(12), (56, 104));
        assert_eq!(interval_bounds(1), (672, 1248));
        assert_eq!(interval_bounds(20), (34, 62));
        // Zero is treated as one for the arithmetic
        assert_eq!(interval_bounds(0), interval_bounds(1));
    }

    #[test]
    fn test_twelve_per_day_from_eight_am() {
        for seed in 0..200 {
            let mut sched = scheduler(seed);
            let next = sched.schedule_next(8 * 60, 12);
            // 80 min average with ±30% jitter: 08:56 ..= 09:44
            assert!((536..=584).contains(&next), "seed {} gave {}", seed, next);
        }
    }

    #[test]
    fn test_due_alarm_in_quiet_hours_is_rescheduled() {
        let settings = Settings::default();
        let mut sched = scheduler(7);
        assert_eq!(sched.arm(60, 60), 120);

        let decision = sched.tick(Instant::from_millis(0), wall(2, 0), &settings);
        let TriggerDecision::Suppressed { next_minute } = decision else {
            panic!("expected suppression, got {:?}", decision);
        };
        assert!(!sched.is_active());
        assert_eq!(sched.next_trigger_minute(), next_minute);
        assert!((120 + 56..=120 + 104).contains(&next_minute));
    }

    #[test]
    fn test_due_alarm_outside_quiet_hours_triggers() {
        let settings = Settings::default();
        let mut sched = scheduler(3);
        sched.arm(8 * 60, 80);

        assert_eq!(
            sched.tick(Instant::from_millis(0), wall(9, 19), &settings),
            TriggerDecision::Idle
        );
        let decision = sched.tick(Instant::from_millis(1000), wall(9, 20), &settings);
        assert!(matches!(decision, TriggerDecision::Triggered(_)));
        assert!(sched.is_active());
        assert!(sched.is_sounding());
        assert_eq!(sched.last_trigger(), Some(Instant::from_millis(1000)));

        // No retrigger while active
        assert_eq!(
            sched.tick(Instant::from_millis(2000), wall(9, 21), &settings),
            TriggerDecision::Idle
        );
    }

    #[test]
    fn test_schedule_wrapping_midnight_waits_for_next_day() {
        let mut settings = Settings::default();
        settings.quiet_hours = QuietHours::new(3, 4);
        let mut sched = scheduler(1);
        assert_eq!(sched.arm(23 * 60 + 50, 40), 30);

        assert_eq!(
            sched.tick(Instant::from_millis(0), wall(23, 55), &settings),
            TriggerDecision::Idle
        );
        assert_eq!(
            sched.tick(Instant::from_millis(0), wall(0, 29), &settings),
            TriggerDecision::Idle
        );
        assert!(matches!(
            sched.tick(Instant::from_millis(0), wall(0, 30), &settings),
            TriggerDecision::Triggered(_)
        ));
    }

    #[test]
    fn test_dismiss_counts_only_active_alarms() {
        let mut settings = Settings::default();
        let mut sched = scheduler(11);

        assert!(!sched.dismiss(600, &mut settings));
        assert_eq!(settings.check_count, 0);
        let delta = minutes_between(600, sched.next_trigger_minute());
        assert!((56..=104).contains(&delta));

        sched.trigger(Instant::from_millis(0), settings.check_kinds);
        assert!(sched.dismiss(700, &mut settings));
        assert_eq!(settings.check_count, 1);
        assert!(!sched.is_active());
        assert!(sched.is_dismissed());
        assert!(!sched.is_sounding());

        assert!(!sched.dismiss(701, &mut settings));
        assert_eq!(settings.check_count, 1);
    }

    #[test]
    fn test_zero_alarms_per_day_never_triggers() {
        let mut settings = Settings::default();
        settings.alarms_per_day = 0;
        settings.quiet_hours.enabled = false;
        let mut sched = scheduler(5);
        sched.arm(0, 1);

        for minute in (0..MINUTES_PER_DAY).step_by(7) {
            let decision = sched.tick(
                Instant::from_millis(0),
                WallClock::from_minute_of_day(minute),
                &settings,
            );
            assert_eq!(decision, TriggerDecision::Idle);
        }
    }

    #[test]
    fn test_trigger_resets_chirp_count() {
        let mut sched = scheduler(2);
        sched.trigger(Instant::from_millis(0), CheckKindSet::ALL);
        sched.record_chirps(3);
        assert_eq!(sched.chirps_played(), 3);

        let mut settings = Settings::default();
        sched.dismiss(0, &mut settings);
        sched.record_chirps(2);
        assert_eq!(sched.chirps_played(), 3);

        sched.trigger(Instant::from_millis(10), CheckKindSet::ALL);
        assert_eq!(sched.chirps_played(), 0);
    }

    #[test]
    fn test_check_kind_fallback_when_none_enabled() {
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(select_check_kind(&mut rng, CheckKindSet::EMPTY), CheckKind::FingerPalm);
        }
    }

    #[test]
    fn test_check_kind_only_from_enabled_subset() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut kinds = CheckKindSet::EMPTY;
        kinds.set(CheckKind::MirrorTest, true);
        kinds.set(CheckKind::HandCount, true);

        let mut seen = [0u32; 9];
        for _ in 0..400 {
            let kind = select_check_kind(&mut rng, kinds);
            assert!(kinds.contains(kind));
            seen[kind.index()] += 1;
        }
        assert!(seen[CheckKind::MirrorTest.index()] > 100);
        assert!(seen[CheckKind::HandCount.index()] > 100);
    }

    proptest! {
        #[test]
        fn prop_schedule_stays_in_bounds(
            alarms in 1u8..=20,
            minute in 0u16..MINUTES_PER_DAY,
            seed in any::<u64>(),
        ) {
            let mut sched = scheduler(seed);
            let next = sched.schedule_next(minute, alarms);
            let (min, max) = interval_bounds(alarms);
            let average = AWAKE_WINDOW_MINUTES / alarms as u16;

            prop_assert!(next < MINUTES_PER_DAY);
            let delta = minutes_between(minute, next);
            prop_assert!(delta >= min && delta <= max);
            prop_assert!(delta >= 1);
            // ±30% of the average, rounded
            prop_assert!(delta * 10 >= average * 7 - 10);
            prop_assert!(delta * 10 <= average * 13 + 10);
        }

        #[test]
        fn prop_quiet_hours_never_fire(hour in 0u8..24, seed in any::<u64>()) {
            let settings = Settings::default();
            let mut sched = scheduler(seed);
            sched.arm(WallClock::new(hour, 0, 0).minute_of_day() + MINUTES_PER_DAY - 1, 1);

            let decision = sched.tick(Instant::from_millis(0), wall(hour, 0), &settings);
            if settings.quiet_hours.contains(hour) {
                let is_suppressed = matches!(decision, TriggerDecision::Suppressed { .. });
                prop_assert!(is_suppressed);
            } else {
                let is_triggered = matches!(decision, TriggerDecision::Triggered(_));
                prop_assert!(is_triggered);
            }
        }
    }
}

//! Interaction controller
//!
//! The single arbiter of mode, button semantics and timers. Every poll
//! runs the same fixed sequence:
//!
//! 1. advance the tone sequencer
//! 2. advance the sleep cue timer (night rest only)
//! 3. poll the alarm scheduler and morning alarm (clock face only)
//! 4. wake the screen on buttons or motion, apply the screen timeout
//! 5. route buttons for the current mode
//! 6. run mode timers (check timeout, journal beeps, light switch)
//! 7. update the backlight and render
//!
//! Render requests, button routing and the screen timeout all read the
//! same [`Mode`], so they cannot disagree about what is on screen.

mod editor;
mod screen;
mod view;

pub use editor::{Editor, TimeDraft};
pub use screen::{ScreenPower, MOTION_SAMPLE_MS};
pub use view::{EditView, QuietBound, TimeField, View};

use rand::RngCore;

use crate::alarm::{AlarmScheduler, TriggerDecision};
use crate::config::Settings;
use crate::sleep::SleepCueTimer;
use crate::state::{EditingKind, Event, MenuItem, Mode};
use crate::time::{Instant, WallClock, MS_PER_MINUTE};
use crate::tone::{ToneSequencer, CHIRP, GENTLE_CUE};
use crate::traits::{
    ButtonId, ButtonInput, ClockSource, Display, MotionSensor, SettingsStore, StorageError,
    ToneOutput,
};

/// Primary hold that starts night rest
pub const HOLD_NIGHT_REST_MS: u32 = 1000;

/// Secondary hold that opens the menu
pub const HOLD_MENU_MS: u32 = 2000;

/// Unanswered reality checks dismiss themselves after this long
pub const CHECK_TIMEOUT_MS: u32 = 10_000;

/// Gentle beep period while the dream journal is showing
pub const JOURNAL_BEEP_PERIOD_MS: u32 = 20_000;

/// Light-switch check returns to the clock after this long untouched
pub const LIGHT_SWITCH_TIMEOUT_MS: u32 = 10_000;

/// How long the "hold to open menu" hint stays up
pub const MENU_HINT_MS: u32 = 1000;

/// Refresh period for live screens
pub const RENDER_INTERVAL_MS: u32 = 200;

/// Refresh period during night rest
pub const NIGHT_RENDER_INTERVAL_MS: u32 = 1000;

/// Board collaborators handed to [`Controller::poll`]
pub struct Io<C, B, M, D, T> {
    pub clock: C,
    pub buttons: B,
    pub motion: M,
    pub display: D,
    pub tone: T,
}

#[derive(Debug, Clone, Copy)]
struct LightSwitch {
    lit: bool,
    since: Instant,
}

/// Interaction state machine
///
/// Owns the application state. Sub-components keep their own state and
/// are only reached through this type.
pub struct Controller<R, S> {
    mode: Mode,
    settings: Settings,
    store: S,
    alarm: AlarmScheduler<R>,
    tone: ToneSequencer,
    sleep: SleepCueTimer,
    screen: ScreenPower,
    editor: Editor,
    menu_item: MenuItem,
    check_started: Instant,
    journal_beep: Option<Instant>,
    /// Morning alarm already handled for the current minute
    morning_latch: bool,
    light_switch: Option<LightSwitch>,
    menu_hint: Option<Instant>,
    /// Secondary hold already opened the menu; cleared on release
    menu_hold_fired: bool,
    /// Buttons whose current press only woke the screen
    suppressed: [bool; 3],
    storage_error: Option<StorageError>,
    last_render: Option<(Instant, Mode)>,
    dirty: bool,
    backlight: Option<u8>,
}

impl<R: RngCore, S: SettingsStore> Controller<R, S> {
    /// Load settings and schedule the first alarm
    ///
    /// A failed load falls back to default settings; the error is kept for
    /// [`take_storage_error`](Self::take_storage_error).
    pub fn new<C: ClockSource>(rng: R, mut store: S, clock: &mut C) -> Self {
        let now = clock.now();
        let wall = clock.wall_clock();

        let (settings, storage_error) = match store.load() {
            Ok(settings) => (settings.sanitized(), None),
            Err(e) => (Settings::default(), Some(e)),
        };

        let mut alarm = AlarmScheduler::new(rng);
        alarm.schedule_next(wall.minute_of_day(), settings.alarms_per_day);

        Self {
            mode: Mode::Normal,
            settings,
            store,
            alarm,
            tone: ToneSequencer::new(),
            sleep: SleepCueTimer::new(),
            screen: ScreenPower::new(now),
            editor: Editor::default(),
            menu_item: MenuItem::SetTime,
            check_started: now,
            journal_beep: None,
            morning_latch: false,
            light_switch: None,
            menu_hint: None,
            menu_hold_fired: false,
            suppressed: [false; 3],
            storage_error,
            last_render: None,
            dirty: true,
            backlight: None,
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Live settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Alarm scheduler state
    pub fn alarm(&self) -> &AlarmScheduler<R> {
        &self.alarm
    }

    /// Tone sequencer state
    pub fn tone(&self) -> &ToneSequencer {
        &self.tone
    }

    /// Sleep cue timer state
    pub fn sleep(&self) -> &SleepCueTimer {
        &self.sleep
    }

    /// Check if the screen is on
    pub fn is_screen_on(&self) -> bool {
        self.screen.is_on()
    }

    /// Most recent settings load/save failure, cleared on read
    pub fn take_storage_error(&mut self) -> Option<StorageError> {
        self.storage_error.take()
    }

    /// Run one iteration of the interaction loop
    pub fn poll<C, B, M, D, T>(&mut self, io: &mut Io<C, B, M, D, T>)
    where
        C: ClockSource,
        B: ButtonInput,
        M: MotionSensor,
        D: Display,
        T: ToneOutput,
    {
        let now = io.clock.now();
        let wall = io.clock.wall_clock();
        let entry_mode = self.mode;

        if let Some(ended) = self.tone.poll(now, &mut io.tone) {
            if self.mode == Mode::RealityCheck {
                self.alarm.record_chirps(ended.played);
            }
        }

        if self.mode == Mode::NightRest && self.sleep.tick(now, &mut self.tone, &mut io.tone) {
            self.dirty = true;
        }

        if !self.settings.morning_alarm.matches(wall.hour, wall.minute) {
            self.morning_latch = false;
        }
        if self.mode.accepts_alarms() {
            self.poll_alarms(now, wall, &mut io.tone);
        }

        let woke = self.wake_on_buttons(now, &io.buttons);
        self.screen
            .poll_motion(now, &mut io.motion, self.settings.sensitivity);
        self.screen
            .apply_timeout(now, self.settings.screen_timeout, self.mode.is_wake_locked());

        if !woke {
            self.handle_buttons(now, wall, &io.buttons, &mut io.clock, &mut io.tone);
        }
        for (i, id) in ButtonId::ALL.iter().enumerate() {
            if !io.buttons.is_pressed(*id) {
                self.suppressed[i] = false;
            }
        }

        self.poll_mode_timers(now, wall, &mut io.tone);
        if self.mode != entry_mode {
            self.suppress_held(&io.buttons);
        }
        self.refresh_display(now, wall, &mut io.display);
    }

    /// What the screen shows right now
    pub fn view(&self, now: Instant, wall: WallClock) -> View {
        match self.mode {
            Mode::Normal => match self.light_switch {
                Some(light) => View::LightSwitch {
                    time: wall,
                    lit: light.lit,
                },
                None => View::Clock {
                    time: wall,
                    format: self.settings.time_format,
                    color: self.settings.clock_color,
                    check_count: self.settings.check_count,
                    menu_hint: self.menu_hint.is_some(),
                },
            },
            Mode::Menu => View::Menu {
                selected: self.menu_item,
            },
            Mode::SetTime => View::SetTime {
                hour: self.editor.time.hour,
                minute: self.editor.time.minute,
                field: self.editor.time.field,
            },
            Mode::RealityCheck => View::RealityCheck {
                kind: self.alarm.check_kind(),
                time: wall,
                remaining_ms: CHECK_TIMEOUT_MS.saturating_sub(now.since(self.check_started)),
            },
            Mode::NightRest => View::NightRest {
                time: wall,
                elapsed_minutes: self.sleep.elapsed_ms(now) / MS_PER_MINUTE,
                cues: self.sleep.cues(),
            },
            Mode::DreamJournal => View::DreamJournal { time: wall },
            Mode::Editing(kind) => View::Edit(self.editor.view(kind, &self.settings)),
        }
    }

    fn poll_alarms<T: ToneOutput>(&mut self, now: Instant, wall: WallClock, out: &mut T) {
        if let TriggerDecision::Triggered(_) = self.alarm.tick(now, wall, &self.settings) {
            self.settings.last_alarm_minute = Some(wall.minute_of_day());
            self.apply(Event::AlarmTriggered, now, wall, out);
            return;
        }

        if !self.morning_latch
            && !self.alarm.is_sounding()
            && self.settings.morning_alarm.matches(wall.hour, wall.minute)
        {
            self.morning_latch = true;
            self.apply(Event::MorningAlarm, now, wall, out);
        }
    }

    /// Wake the screen on a press; returns true if the press only woke it
    fn wake_on_buttons<B: ButtonInput>(&mut self, now: Instant, buttons: &B) -> bool {
        if !buttons.any_pressed() {
            return false;
        }
        let was_on = self.screen.is_on();
        self.screen.wake(now);
        if was_on {
            return false;
        }

        for (i, id) in ButtonId::ALL.iter().enumerate() {
            if buttons.is_pressed(*id) || buttons.was_pressed(*id) {
                self.suppressed[i] = true;
            }
        }
        self.dirty = true;
        true
    }

    /// Ignore buttons still down across a mode change until they are released
    fn suppress_held<B: ButtonInput>(&mut self, buttons: &B) {
        for (i, id) in ButtonId::ALL.iter().enumerate() {
            if buttons.is_pressed(*id) {
                self.suppressed[i] = true;
            }
        }
    }

    fn pressed<B: ButtonInput>(&self, buttons: &B, id: ButtonId) -> bool {
        !self.suppressed[id as usize] && buttons.was_pressed(id)
    }

    fn held<B: ButtonInput>(&self, buttons: &B, id: ButtonId, ms: u32) -> bool {
        !self.suppressed[id as usize] && buttons.pressed_for(id, ms)
    }

    fn handle_buttons<B, C, T>(
        &mut self,
        now: Instant,
        wall: WallClock,
        buttons: &B,
        clock: &mut C,
        out: &mut T,
    ) where
        B: ButtonInput,
        C: ClockSource,
        T: ToneOutput,
    {
        let secondary_released = buttons.was_released(ButtonId::Secondary);
        let hold_fired = self.menu_hold_fired;
        if secondary_released {
            self.menu_hold_fired = false;
        }

        match self.mode {
            Mode::Normal => {
                if self.held(buttons, ButtonId::Primary, HOLD_NIGHT_REST_MS) {
                    self.apply(Event::HoldPrimary, now, wall, out);
                    return;
                }
                if !hold_fired && self.held(buttons, ButtonId::Secondary, HOLD_MENU_MS) {
                    self.menu_hold_fired = true;
                    self.apply(Event::HoldSecondary, now, wall, out);
                    return;
                }

                if self.pressed(buttons, ButtonId::Primary) {
                    let lit = self.light_switch.map_or(true, |light| !light.lit);
                    self.light_switch = Some(LightSwitch { lit, since: now });
                    self.dirty = true;
                }
                if secondary_released && !hold_fired && !self.suppressed[ButtonId::Secondary as usize]
                {
                    self.menu_hint = Some(now);
                    self.dirty = true;
                }
                if self.pressed(buttons, ButtonId::Power) && self.light_switch.take().is_some() {
                    self.dirty = true;
                }
            }
            Mode::Menu => {
                if self.pressed(buttons, ButtonId::Primary) {
                    self.menu_item = self.menu_item.next();
                    self.dirty = true;
                }
                if self.pressed(buttons, ButtonId::Secondary) {
                    self.apply(Event::Select(self.menu_item), now, wall, out);
                } else if self.pressed(buttons, ButtonId::Power) {
                    self.apply(Event::Exit, now, wall, out);
                }
            }
            Mode::SetTime => {
                if self.pressed(buttons, ButtonId::Primary) {
                    self.editor.time.increment();
                    self.dirty = true;
                }
                if self.pressed(buttons, ButtonId::Secondary) {
                    self.editor.time.toggle_field();
                    self.dirty = true;
                }
                if self.pressed(buttons, ButtonId::Power) {
                    let draft = self.editor.time;
                    clock.set_time(draft.hour, draft.minute);
                    let minute = WallClock::new(draft.hour, draft.minute, 0).minute_of_day();
                    self.alarm
                        .schedule_next(minute, self.settings.alarms_per_day);
                    self.apply(Event::Commit, now, wall, out);
                }
            }
            Mode::Editing(kind) => {
                if self.pressed(buttons, ButtonId::Primary) {
                    self.editor.increment(kind, &mut self.settings);
                    self.dirty = true;
                }
                if self.pressed(buttons, ButtonId::Secondary) {
                    self.editor.decrement(kind, &mut self.settings);
                    self.dirty = true;
                }
                if self.pressed(buttons, ButtonId::Power) {
                    self.commit_overlay(kind, now, wall, out);
                }
            }
            Mode::RealityCheck => {
                if self.pressed(buttons, ButtonId::Power)
                    || self.pressed(buttons, ButtonId::Secondary)
                {
                    self.dismiss_check(Event::Dismiss, now, wall, out);
                }
            }
            Mode::NightRest => {
                if self.pressed(buttons, ButtonId::Power) {
                    self.apply(Event::Exit, now, wall, out);
                }
            }
            Mode::DreamJournal => {
                if ButtonId::ALL.iter().any(|id| self.pressed(buttons, *id)) {
                    self.apply(Event::Dismiss, now, wall, out);
                }
            }
        }
    }

    fn commit_overlay<T: ToneOutput>(
        &mut self,
        kind: EditingKind,
        now: Instant,
        wall: WallClock,
        out: &mut T,
    ) {
        if kind == EditingKind::QuietHours && !self.editor.confirm_quiet_bound() {
            self.dirty = true;
            return;
        }

        match kind {
            EditingKind::AlarmCount => {
                self.alarm
                    .schedule_next(wall.minute_of_day(), self.settings.alarms_per_day);
            }
            EditingKind::ManualAlarm => self.morning_latch = false,
            _ => {}
        }
        if kind != EditingKind::RealityCheckTest {
            self.persist();
        }
        self.apply(Event::Commit, now, wall, out);
    }

    fn dismiss_check<T: ToneOutput>(&mut self, event: Event, now: Instant, wall: WallClock, out: &mut T) {
        self.alarm.dismiss(wall.minute_of_day(), &mut self.settings);
        self.persist();
        self.apply(event, now, wall, out);
    }

    fn poll_mode_timers<T: ToneOutput>(&mut self, now: Instant, wall: WallClock, out: &mut T) {
        match self.mode {
            Mode::RealityCheck => {
                if now.since(self.check_started) >= CHECK_TIMEOUT_MS {
                    self.dismiss_check(Event::TimedOut, now, wall, out);
                }
            }
            Mode::DreamJournal => {
                let due = self
                    .journal_beep
                    .map_or(true, |last| now.since(last) >= JOURNAL_BEEP_PERIOD_MS);
                if due {
                    self.tone.start(now, GENTLE_CUE, out);
                    self.journal_beep = Some(now);
                }
            }
            Mode::Normal => {
                if let Some(light) = self.light_switch {
                    if now.since(light.since) >= LIGHT_SWITCH_TIMEOUT_MS {
                        self.light_switch = None;
                        self.dirty = true;
                    }
                }
                if let Some(shown) = self.menu_hint {
                    if now.since(shown) >= MENU_HINT_MS {
                        self.menu_hint = None;
                        self.dirty = true;
                    }
                }
            }
            _ => {}
        }
    }

    fn apply<T: ToneOutput>(&mut self, event: Event, now: Instant, wall: WallClock, out: &mut T) {
        let next = self.mode.transition(event);
        if next == self.mode {
            return;
        }

        match self.mode {
            Mode::RealityCheck | Mode::DreamJournal => self.tone.stop(out),
            Mode::NightRest => {
                self.sleep.stop();
                self.tone.stop(out);
            }
            _ => {}
        }
        self.light_switch = None;
        self.menu_hint = None;

        self.mode = next;

        match next {
            Mode::RealityCheck => {
                self.check_started = now;
                self.tone.start(now, CHIRP, out);
                self.screen.wake(now);
            }
            Mode::NightRest => self.sleep.start(now),
            Mode::DreamJournal => {
                self.journal_beep = None;
                self.screen.wake(now);
            }
            Mode::Menu => self.menu_item = MenuItem::SetTime,
            Mode::SetTime => self.editor.time = TimeDraft::from_wall(wall),
            Mode::Editing(kind) => self.editor.open(kind),
            Mode::Normal => {}
        }
        self.dirty = true;
    }

    fn persist(&mut self) {
        self.settings.next_alarm_minute = Some(self.alarm.next_trigger_minute());
        self.settings.sanitize();
        if let Err(e) = self.store.save(&self.settings) {
            self.storage_error = Some(e);
        }
    }

    fn refresh_display<D: Display>(&mut self, now: Instant, wall: WallClock, display: &mut D) {
        let duty = if self.screen.is_on() {
            self.settings.brightness.pwm()
        } else {
            0
        };
        if self.backlight != Some(duty) {
            display.set_backlight(duty);
            self.backlight = Some(duty);
            self.dirty |= duty != 0;
        }

        if !self.screen.is_on() {
            return;
        }

        let interval = if self.mode == Mode::NightRest {
            NIGHT_RENDER_INTERVAL_MS
        } else {
            RENDER_INTERVAL_MS
        };
        let due = match self.last_render {
            None => true,
            Some((at, mode)) => mode != self.mode || now.since(at) >= interval,
        };

        if self.dirty || due {
            display.render(&self.view(now, wall));
            self.last_render = Some((now, self.mode));
            self.dirty = false;
        }
    }
}

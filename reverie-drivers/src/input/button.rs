//! Debounced push button
//!
//! The pin is sampled on every [`Button::update`]. A level change only
//! becomes a press or release once it has been stable for the debounce
//! time; edges are then reported for exactly one update.

use reverie_core::time::Instant;
use reverie_hal::InputPin;

/// Button configuration
#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    /// Time a new level must hold before it is accepted
    pub debounce_ms: u32,
    /// Pressed pulls the pin low (pull-up wiring)
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            active_low: true, // buttons switch to ground
        }
    }
}

/// A single debounced button
pub struct Button<P> {
    pin: P,
    config: ButtonConfig,
    /// Last raw level (true = pressed)
    raw: bool,
    /// When the raw level last changed
    raw_since: Instant,
    /// Accepted level
    stable: bool,
    pressed_at: Option<Instant>,
    pressed_edge: bool,
    released_edge: bool,
    now: Instant,
}

impl<P: InputPin> Button<P> {
    /// Create a button, released
    pub fn new(pin: P, config: ButtonConfig) -> Self {
        Self {
            pin,
            config,
            raw: false,
            raw_since: Instant::from_millis(0),
            stable: false,
            pressed_at: None,
            pressed_edge: false,
            released_edge: false,
            now: Instant::from_millis(0),
        }
    }

    fn read_pressed(&self) -> bool {
        if self.config.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        }
    }

    /// Sample the pin and update edges
    pub fn update(&mut self, now: Instant) {
        self.now = now;
        self.pressed_edge = false;
        self.released_edge = false;

        let level = self.read_pressed();
        if level != self.raw {
            self.raw = level;
            self.raw_since = now;
        }

        if self.raw != self.stable && now.since(self.raw_since) >= self.config.debounce_ms {
            self.stable = self.raw;
            if self.stable {
                self.pressed_edge = true;
                self.pressed_at = Some(now);
            } else {
                self.released_edge = true;
                self.pressed_at = None;
            }
        }
    }

    /// Pressed since the previous update
    pub fn was_pressed(&self) -> bool {
        self.pressed_edge
    }

    /// Released since the previous update
    pub fn was_released(&self) -> bool {
        self.released_edge
    }

    /// Currently held (debounced)
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// How long the button has been held, if it is
    pub fn held_ms(&self) -> Option<u32> {
        self.pressed_at.map(|at| self.now.since(at))
    }
}

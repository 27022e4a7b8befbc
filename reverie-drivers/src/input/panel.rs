//! The watch's three buttons as one [`ButtonInput`]

use reverie_core::time::Instant;
use reverie_core::traits::{ButtonId, ButtonInput};
use reverie_hal::InputPin;

use super::button::{Button, ButtonConfig};

/// Primary, secondary and power buttons
pub struct ButtonPanel<P> {
    buttons: [Button<P>; 3],
}

impl<P: InputPin> ButtonPanel<P> {
    /// Create the panel; all buttons share one configuration
    pub fn new(primary: P, secondary: P, power: P, config: ButtonConfig) -> Self {
        Self {
            buttons: [
                Button::new(primary, config),
                Button::new(secondary, config),
                Button::new(power, config),
            ],
        }
    }

    /// Sample every button; call once per poll before handing the panel on
    pub fn update(&mut self, now: Instant) {
        for button in &mut self.buttons {
            button.update(now);
        }
    }

    fn button(&self, id: ButtonId) -> &Button<P> {
        &self.buttons[id as usize]
    }
}

impl<P: InputPin> ButtonInput for ButtonPanel<P> {
    fn was_pressed(&self, button: ButtonId) -> bool {
        self.button(button).was_pressed()
    }

    fn was_released(&self, button: ButtonId) -> bool {
        self.button(button).was_released()
    }

    fn is_pressed(&self, button: ButtonId) -> bool {
        self.button(button).is_pressed()
    }

    fn pressed_for(&self, button: ButtonId, ms: u32) -> bool {
        self.button(button).held_ms().map_or(false, |held| held >= ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FakePin<'a>(&'a Cell<bool>);

    impl InputPin for FakePin<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_buttons_are_independent() {
        let levels = [Cell::new(true), Cell::new(true), Cell::new(true)];
        let mut panel = ButtonPanel::new(
            FakePin(&levels[0]),
            FakePin(&levels[1]),
            FakePin(&levels[2]),
            ButtonConfig::default(),
        );
        panel.update(Instant::from_millis(0));

        levels[1].set(false);
        panel.update(Instant::from_millis(10));
        panel.update(Instant::from_millis(30));

        assert!(panel.was_pressed(ButtonId::Secondary));
        assert!(!panel.was_pressed(ButtonId::Primary));
        assert!(!panel.was_pressed(ButtonId::Power));
        assert!(panel.any_pressed());
    }

    #[test]
    fn test_hold_duration() {
        let levels = [Cell::new(false), Cell::new(true), Cell::new(true)];
        let mut panel = ButtonPanel::new(
            FakePin(&levels[0]),
            FakePin(&levels[1]),
            FakePin(&levels[2]),
            ButtonConfig::default(),
        );
        panel.update(Instant::from_millis(0));
        panel.update(Instant::from_millis(20));
        assert!(panel.is_pressed(ButtonId::Primary));

        panel.update(Instant::from_millis(1019));
        assert!(!panel.pressed_for(ButtonId::Primary, 1000));
        panel.update(Instant::from_millis(1020));
        assert!(panel.pressed_for(ButtonId::Primary, 1000));
        assert!(!panel.pressed_for(ButtonId::Secondary, 0));
    }
}

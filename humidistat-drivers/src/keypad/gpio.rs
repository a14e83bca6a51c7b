//! Discrete GPIO buttons
//!
//! One pin per button, for boards without the resistor ladder.

use humidistat_core::traits::{Button, ButtonSource};
use humidistat_hal::InputPin;

/// Order of the pins passed to [`GpioButtons::new`]
pub const PIN_ORDER: [Button; 5] = [
    Button::Up,
    Button::Down,
    Button::Left,
    Button::Right,
    Button::Select,
];

/// Five buttons on five input pins
///
/// When several buttons are held, the first in [`PIN_ORDER`] wins.
pub struct GpioButtons<P> {
    pins: [P; 5],
    /// If true, a pressed button pulls its pin LOW
    active_low: bool,
}

impl<P: InputPin> GpioButtons<P> {
    /// Create a new GPIO keypad
    ///
    /// # Arguments
    /// - `pins`: UP, DOWN, LEFT, RIGHT, SELECT
    /// - `active_low`: If true, buttons switch to ground (internal pull-ups)
    pub fn new(pins: [P; 5], active_low: bool) -> Self {
        Self { pins, active_low }
    }

    /// Buttons switching to ground with pull-ups enabled
    pub fn new_active_low(pins: [P; 5]) -> Self {
        Self::new(pins, true)
    }

    /// Buttons switching to VCC with pull-downs enabled
    pub fn new_active_high(pins: [P; 5]) -> Self {
        Self::new(pins, false)
    }
}

impl<P: InputPin> ButtonSource for GpioButtons<P> {
    fn pressed(&mut self) -> Button {
        let active_low = self.active_low;

        self.pins
            .iter_mut()
            .zip(PIN_ORDER)
            .find_map(|(pin, button)| {
                let down = if active_low {
                    pin.is_low()
                } else {
                    pin.is_high()
                };
                down.then_some(button)
            })
            .unwrap_or(Button::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    fn pins(levels: [bool; 5]) -> [MockPin; 5] {
        levels.map(|high| MockPin { high })
    }

    #[test]
    fn test_active_high() {
        let mut keypad = GpioButtons::new_active_high(pins([false, false, true, false, false]));
        assert_eq!(keypad.pressed(), Button::Left);

        let mut idle = GpioButtons::new_active_high(pins([false; 5]));
        assert_eq!(idle.pressed(), Button::None);
    }

    #[test]
    fn test_active_low() {
        let mut keypad = GpioButtons::new_active_low(pins([true, true, true, false, true]));
        assert_eq!(keypad.pressed(), Button::Right);

        let mut idle = GpioButtons::new_active_low(pins([true; 5]));
        assert_eq!(idle.pressed(), Button::None);
    }

    #[test]
    fn test_first_pin_wins() {
        let mut keypad = GpioButtons::new_active_high(pins([false, true, false, false, true]));
        assert_eq!(keypad.pressed(), Button::Down);
    }
}

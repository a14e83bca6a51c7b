//! Setpoint adjustment from keypad buttons

use crate::traits::{Button, ButtonSource};

/// Apply one button press to `value`, keeping it within `[min, max]`
///
/// UP/DOWN move by one, LEFT/RIGHT by `step`. Returns true if an
/// adjustment button was pressed, even when the value was already at the
/// bound and did not change.
pub fn apply_button(button: Button, value: &mut u8, min: u8, max: u8, step: u8) -> bool {
    let delta = match button {
        Button::Up => 1,
        Button::Down => -1,
        Button::Left => -i16::from(step),
        Button::Right => i16::from(step),
        Button::Select | Button::None => return false,
    };

    // Always lands between the two bounds, so it fits back into a u8
    let next = (i16::from(*value) + delta)
        .min(i16::from(max))
        .max(i16::from(min));

    *value = next as u8;
    true
}

/// Read the keypad and adjust `value`
///
/// Returns whether any adjustment button was pressed.
pub fn adjust_value<B: ButtonSource + ?Sized>(
    buttons: &mut B,
    value: &mut u8,
    min: u8,
    max: u8,
    step: u8,
) -> bool {
    apply_button(buttons.pressed(), value, min, max, step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Held(Button);

    impl ButtonSource for Held {
        fn pressed(&mut self) -> Button {
            self.0
        }
    }

    #[test]
    fn test_fine_steps() {
        let mut value = 50;
        assert!(apply_button(Button::Up, &mut value, 0, 100, 5));
        assert_eq!(value, 51);
        assert!(apply_button(Button::Down, &mut value, 0, 100, 5));
        assert!(apply_button(Button::Down, &mut value, 0, 100, 5));
        assert_eq!(value, 49);
    }

    #[test]
    fn test_coarse_steps() {
        let mut value = 50;
        assert!(apply_button(Button::Right, &mut value, 0, 100, 5));
        assert_eq!(value, 55);
        assert!(apply_button(Button::Left, &mut value, 0, 100, 5));
        assert!(apply_button(Button::Left, &mut value, 0, 100, 5));
        assert_eq!(value, 45);
    }

    #[test]
    fn test_coarse_step_clamps_to_max() {
        let mut value = 98;
        assert!(apply_button(Button::Right, &mut value, 0, 100, 5));
        assert_eq!(value, 100);
    }

    #[test]
    fn test_coarse_step_clamps_to_min() {
        let mut value = 3;
        assert!(apply_button(Button::Left, &mut value, 0, 100, 5));
        assert_eq!(value, 0);

        let mut value = 22;
        assert!(apply_button(Button::Left, &mut value, 20, 80, 5));
        assert_eq!(value, 20);
    }

    #[test]
    fn test_press_at_bound_still_reported() {
        let mut value = 100;
        for _ in 0..3 {
            assert!(apply_button(Button::Up, &mut value, 0, 100, 5));
            assert_eq!(value, 100);
        }

        let mut value = 0;
        assert!(apply_button(Button::Down, &mut value, 0, 100, 5));
        assert_eq!(value, 0);
    }

    #[test]
    fn test_no_adjustment_buttons() {
        let mut value = 42;
        assert!(!apply_button(Button::Select, &mut value, 0, 100, 5));
        assert!(!apply_button(Button::None, &mut value, 0, 100, 5));
        assert_eq!(value, 42);
    }

    #[test]
    fn test_out_of_range_value_pulled_into_bounds() {
        let mut value = 95;
        assert!(apply_button(Button::Down, &mut value, 0, 80, 5));
        assert_eq!(value, 80);
    }

    #[test]
    fn test_no_overflow_near_u8_max() {
        let mut value = 254;
        assert!(apply_button(Button::Right, &mut value, 0, 255, 200));
        assert_eq!(value, 255);

        let mut value = 1;
        assert!(apply_button(Button::Left, &mut value, 0, 255, 200));
        assert_eq!(value, 0);
    }

    #[test]
    fn test_adjust_value_reads_buttons() {
        let mut keypad = Held(Button::Right);
        let mut value = 50;
        assert!(adjust_value(&mut keypad, &mut value, 0, 100, 5));
        assert_eq!(value, 55);

        let mut idle = Held(Button::None);
        assert!(!adjust_value(&mut idle, &mut value, 0, 100, 5));
        assert_eq!(value, 55);
    }

    fn any_button() -> impl Strategy<Value = Button> {
        prop_oneof![
            Just(Button::Up),
            Just(Button::Down),
            Just(Button::Left),
            Just(Button::Right),
            Just(Button::Select),
            Just(Button::None),
        ]
    }

    proptest! {
        #[test]
        fn prop_value_stays_within_bounds(
            start in 0u8..=100,
            a in 0u8..=100,
            b in 0u8..=100,
            step in 1u8..=50,
            button in any_button(),
        ) {
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            let mut value = start.clamp(min, max);
            let pressed = apply_button(button, &mut value, min, max, step);

            prop_assert!(value >= min && value <= max);
            prop_assert_eq!(pressed, button.is_adjustment());
        }

        #[test]
        fn prop_repeated_up_at_max_is_idempotent(max in 0u8..=100, presses in 1usize..10) {
            let mut value = max;
            for _ in 0..presses {
                prop_assert!(apply_button(Button::Up, &mut value, 0, max, 5));
                prop_assert_eq!(value, max);
            }
        }

        #[test]
        fn prop_coarse_moves_by_exactly_step_unless_clamped(
            start in 0u8..=100,
            step in 1u8..=50,
        ) {
            let mut up = start;
            apply_button(Button::Right, &mut up, 0, 100, step);
            prop_assert_eq!(up, start.saturating_add(step).min(100));

            let mut down = start;
            apply_button(Button::Left, &mut down, 0, 100, step);
            prop_assert_eq!(down, start.saturating_sub(step));
        }
    }
}

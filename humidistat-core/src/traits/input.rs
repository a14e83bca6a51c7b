//! Keypad button trait

/// Keypad buttons
///
/// At most one button is reported per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Select,
    /// Nothing pressed
    #[default]
    None,
}

impl Button {
    /// Returns true for the four buttons that change the setpoint
    pub fn is_adjustment(self) -> bool {
        matches!(
            self,
            Button::Up | Button::Down | Button::Left | Button::Right
        )
    }
}

/// Trait for keypads
///
/// Implementations handle the electrical side (ladder thresholds, pin
/// polarity). Takes `&mut self` because ADC and GPIO reads typically
/// require mutable access.
pub trait ButtonSource {
    /// The button held down right now
    fn pressed(&mut self) -> Button;
}

impl<T: ButtonSource + ?Sized> ButtonSource for &mut T {
    fn pressed(&mut self) -> Button {
        T::pressed(self)
    }
}

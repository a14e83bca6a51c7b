//! Resistive ladder keypad
//!
//! The 16x2 LCD keypad shields (Ks0256 and clones) put all five buttons
//! on one analog pin through a resistor ladder. Each button pulls the pin
//! to a different voltage; RIGHT shorts it to ground, no button leaves it
//! at the rail.

use humidistat_core::traits::{Button, ButtonSource};
use humidistat_hal::AdcChannel;

/// Upper bounds of each button's voltage band, on a 10-bit scale
///
/// Checked in order; a reading at or above the last bound is "no button".
const LADDER_10BIT: [(u16, Button); 5] = [
    (50, Button::Right),
    (195, Button::Up),
    (380, Button::Down),
    (555, Button::Left),
    (790, Button::Select),
];

/// Counts of a 10-bit converter
const TEN_BIT_COUNTS: u32 = 1024;

/// Keypad on a single ADC channel
pub struct KeypadLadder<A> {
    adc: A,
}

impl<A: AdcChannel> KeypadLadder<A> {
    /// Create a new ladder keypad
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Decode a raw ADC reading
    ///
    /// Thresholds are scaled to the channel's resolution.
    pub fn decode(&self, raw: u16) -> Button {
        let counts = u32::from(self.adc.full_scale()) + 1;
        let raw = u32::from(raw);

        LADDER_10BIT
            .iter()
            .find(|(bound, _)| raw < u32::from(*bound) * counts / TEN_BIT_COUNTS)
            .map_or(Button::None, |(_, button)| *button)
    }

    /// Give back the ADC channel
    pub fn release(self) -> A {
        self.adc
    }
}

impl<A: AdcChannel> ButtonSource for KeypadLadder<A> {
    fn pressed(&mut self) -> Button {
        // A failed conversion is treated as no button
        match self.adc.read() {
            Ok(raw) => self.decode(raw),
            Err(_) => Button::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humidistat_hal::AdcError;

    struct DummyAdc {
        value: Result<u16, AdcError>,
        full_scale: u16,
    }

    impl AdcChannel for DummyAdc {
        fn read(&mut self) -> Result<u16, AdcError> {
            self.value
        }

        fn full_scale(&self) -> u16 {
            self.full_scale
        }
    }

    fn keypad(value: u16, full_scale: u16) -> KeypadLadder<DummyAdc> {
        KeypadLadder::new(DummyAdc {
            value: Ok(value),
            full_scale,
        })
    }

    #[test]
    fn test_shield_voltages_10bit() {
        // Typical readings on a 5 V Arduino
        assert_eq!(keypad(0, 1023).pressed(), Button::Right);
        assert_eq!(keypad(144, 1023).pressed(), Button::Up);
        assert_eq!(keypad(329, 1023).pressed(), Button::Down);
        assert_eq!(keypad(504, 1023).pressed(), Button::Left);
        assert_eq!(keypad(741, 1023).pressed(), Button::Select);
        assert_eq!(keypad(1023, 1023).pressed(), Button::None);
    }

    #[test]
    fn test_band_edges() {
        let pad = keypad(0, 1023);
        assert_eq!(pad.decode(49), Button::Right);
        assert_eq!(pad.decode(50), Button::Up);
        assert_eq!(pad.decode(789), Button::Select);
        assert_eq!(pad.decode(790), Button::None);
    }

    #[test]
    fn test_thresholds_scale_to_12bit() {
        assert_eq!(keypad(0, 4095).pressed(), Button::Right);
        assert_eq!(keypad(4 * 144, 4095).pressed(), Button::Up);
        assert_eq!(keypad(4 * 741, 4095).pressed(), Button::Select);
        assert_eq!(keypad(4095, 4095).pressed(), Button::None);
        assert_eq!(keypad(4 * 300, 4095).pressed(), Button::Down);
        // 12-bit reading that would be SELECT on a 10-bit scale
        assert_eq!(keypad(741, 4095).pressed(), Button::Up);
    }

    #[test]
    fn test_conversion_error_is_no_button() {
        let mut pad = KeypadLadder::new(DummyAdc {
            value: Err(AdcError::Timeout),
            full_scale: 1023,
        });
        assert_eq!(pad.pressed(), Button::None);
    }
}

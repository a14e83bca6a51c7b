//! Analog input abstraction
//!
//! The keypad ladder and the thermistors are both read through a single
//! ADC channel each. Resolution differs per chip (10-bit on AVR, 12-bit on
//! RP2040/STM32), so every channel reports its own full scale.

/// ADC conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    Timeout,
    /// Channel is not configured for analog input
    NotConfigured,
}

/// A single ADC channel
pub trait AdcChannel {
    /// Perform a blocking one-shot conversion
    ///
    /// Returns a raw value in `0..=full_scale()`.
    fn read(&mut self) -> Result<u16, AdcError>;

    /// Highest raw value this channel can return
    ///
    /// 1023 for a 10-bit converter, 4095 for 12-bit.
    fn full_scale(&self) -> u16;
}

impl<T: AdcChannel + ?Sized> AdcChannel for &mut T {
    fn read(&mut self) -> Result<u16, AdcError> {
        T::read(self)
    }

    fn full_scale(&self) -> u16 {
        T::full_scale(self)
    }
}

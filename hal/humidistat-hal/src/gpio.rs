//! Digital input abstraction

/// Digital input pin
///
/// Reads take `&mut self` to match `embedded-hal` 1.0, where sampling a
/// pin may touch peripheral state.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> bool {
        T::is_high(self)
    }
}

/// Adapter for any `embedded_hal::digital::InputPin`
///
/// A pin that fails to read reports neither level, so a faulty pin
/// never reads as a pressed button whichever way it is wired.
pub struct EhInputPin<P> {
    pin: P,
}

impl<P> EhInputPin<P> {
    /// Wrap an `embedded-hal` input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::InputPin> InputPin for EhInputPin<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }

    fn is_low(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

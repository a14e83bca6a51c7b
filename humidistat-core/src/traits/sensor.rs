//! Temperature sensor trait

/// Most temperature sources the UI will render
pub const MAX_TEMPERATURE_SOURCES: usize = 4;

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Sensor shorted to ground
    ShortCircuit,
    /// Reading out of expected range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
    /// No sample taken yet
    NoReading,
}

/// Round tenths of a degree to whole degrees, halves away from zero
pub fn round_tenths(x10: i16) -> i16 {
    let x10 = i32::from(x10);
    let half = if x10 >= 0 { 5 } else { -5 };
    // |result| <= 3277, always fits
    ((x10 + half) / 10) as i16
}

/// Trait for temperature sensors
///
/// Implementations should handle the specific sensor type (NTC thermistor,
/// digital probe, etc.)
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// Returns a fixed-point value with 0.1°C resolution.
    /// For example, 21.5°C is returned as 215.
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError>;

    /// Read the current temperature in whole degrees Celsius
    ///
    /// Rounded to nearest, halves away from zero.
    fn read_celsius(&mut self) -> Result<i16, SensorError> {
        self.read_celsius_x10().map(round_tenths)
    }
}

impl<T: TemperatureSensor + ?Sized> TemperatureSensor for &mut T {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        T::read_celsius_x10(self)
    }

    fn read_celsius(&mut self) -> Result<i16, SensorError> {
        T::read_celsius(self)
    }
}

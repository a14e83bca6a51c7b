//! In-memory setpoint store
//!
//! Holds the setpoint and the latest humidity sample. Whatever reads the
//! humidity sensor records samples here; the UI reads and adjusts it.

use humidistat_core::traits::SetpointStore;

/// Setpoint and last humidity reading, kept in RAM
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryHumidistat {
    setpoint: u8,
    /// Relative humidity (%), NaN until the first sample
    humidity: f32,
}

impl MemoryHumidistat {
    /// Create a store with an initial setpoint and no reading
    pub fn new(setpoint: u8) -> Self {
        Self {
            setpoint,
            humidity: f32::NAN,
        }
    }

    /// Record a humidity sample (%)
    pub fn record_humidity(&mut self, humidity: f32) {
        self.humidity = humidity;
    }

    /// Forget the last sample, e.g. after a sensor fault
    pub fn clear_humidity(&mut self) {
        self.humidity = f32::NAN;
    }

    /// Check if a humidity sample is available
    pub fn has_reading(&self) -> bool {
        !self.humidity.is_nan()
    }
}

impl SetpointStore for MemoryHumidistat {
    fn process_variable(&self) -> f32 {
        self.humidity
    }

    fn setpoint(&self) -> u8 {
        self.setpoint
    }

    fn setpoint_mut(&mut self) -> &mut u8 {
        &mut self.setpoint
    }
}

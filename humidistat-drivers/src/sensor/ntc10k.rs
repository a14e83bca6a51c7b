//! NTC 10K thermistor sensor
//!
//! The usual room-temperature thermistor on hobby boards: 10 kΩ at 25°C,
//! B=3950, read through a voltage divider on one ADC channel.
//! Uses a lookup table for integer-only temperature calculation.

use humidistat_core::traits::{SensorError, TemperatureSensor};
use humidistat_hal::AdcChannel;

/// NTC 10K thermistor temperature lookup table
///
/// Table format: (resistance_ohms, temperature_x10)
/// Generated using beta equation with:
/// - R0 = 10,000 ohms at T0 = 25°C
/// - Beta = 3950K
///
/// Temperature range: -20°C to 80°C
const TEMP_TABLE: &[(u32, i16)] = &[
    (105_385, -200), // -20°C
    (58_246, -100),  // -10°C
    (33_621, 0),     // 0°C
    (20_175, 100),   // 10°C
    (12_535, 200),   // 20°C
    (10_000, 250),   // 25°C (R0)
    (8_037, 300),    // 30°C
    (5_301, 400),    // 40°C
    (3_588, 500),    // 50°C
    (2_486, 600),    // 60°C
    (1_760, 700),    // 70°C
    (1_270, 800),    // 80°C
];

/// Readings this close to either rail (as a fraction of full scale) are
/// treated as a broken divider
const RAIL_MARGIN_DIVISOR: u32 = 256;

/// NTC 10K thermistor with B=3950
///
/// Circuit: VCC -- pullup -- ADC_PIN -- NTC -- GND
pub struct Ntc10kSensor<A> {
    adc: A,
    /// Pull-up resistor value in ohms
    pullup_ohms: u32,
}

impl<A: AdcChannel> Ntc10kSensor<A> {
    /// Create a new NTC sensor
    ///
    /// # Arguments
    /// - `adc`: ADC channel the divider midpoint is wired to
    /// - `pullup_ohms`: Pull-up resistor value (typically 10,000)
    pub fn new(adc: A, pullup_ohms: u32) -> Self {
        Self { adc, pullup_ohms }
    }

    /// Convert an ADC reading to thermistor resistance
    ///
    /// R_ntc = R_pullup * adc / (counts - adc)
    pub fn adc_to_resistance(&self, adc_value: u16) -> Result<u32, SensorError> {
        let counts = u32::from(self.adc.full_scale()) + 1;
        let margin = (counts / RAIL_MARGIN_DIVISOR).max(1);
        let adc_value = u32::from(adc_value);

        // Pulled up to the rail: thermistor missing
        if adc_value + margin >= counts {
            return Err(SensorError::OpenCircuit);
        }

        // Pulled down to ground: thermistor shorted
        if adc_value < margin {
            return Err(SensorError::ShortCircuit);
        }

        let numerator = u64::from(self.pullup_ohms) * u64::from(adc_value);
        let denominator = u64::from(counts - adc_value);

        Ok((numerator / denominator) as u32)
    }

    /// Get access to the underlying ADC channel
    pub fn adc(&self) -> &A {
        &self.adc
    }
}

/// Calculate temperature from resistance using the lookup table
///
/// Returns temperature in 0.1°C units (e.g., 250 = 25.0°C), linearly
/// interpolated between table entries.
pub fn resistance_to_temp_x10(resistance: u32) -> Result<i16, SensorError> {
    // Table is sorted by decreasing resistance (increasing temperature)
    TEMP_TABLE
        .windows(2)
        .find_map(|pair| {
            let (r_high, t_low) = pair[0];
            let (r_low, t_high) = pair[1];

            if resistance > r_high || resistance < r_low {
                return None;
            }

            let r_range = (r_high - r_low) as i32;
            let t_range = i32::from(t_high - t_low);
            let r_offset = (r_high - resistance) as i32;

            Some(t_low + (t_range * r_offset / r_range) as i16)
        })
        .ok_or(SensorError::OutOfRange)
}

impl<A: AdcChannel> TemperatureSensor for Ntc10kSensor<A> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let adc_value = self
            .adc
            .read()
            .map_err(|_| SensorError::ConversionError)?;

        let resistance = self.adc_to_resistance(adc_value)?;

        resistance_to_temp_x10(resistance)
    }
}

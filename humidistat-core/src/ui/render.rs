//! Field formatting for the status row
//!
//! Row 0 layout, in character columns:
//!
//! ```text
//! 0   4   8  11 14 17
//! |55%| 50%| 21| 22| 23| 24
//!  RH  SP   T0  T1  T2  T3
//! ```
//!
//! Fields past the display width are clipped by the display.

use core::fmt::Write;

use heapless::String;

use crate::traits::SensorError;

/// Capacity of one formatted field
pub const FIELD_CAP: usize = 12;

/// A formatted field
pub type Field = String<FIELD_CAP>;

/// Row holding the live values
pub const STATUS_ROW: u8 = 0;
/// Column of the humidity reading
pub const HUMIDITY_COL: u8 = 0;
/// Column of the setpoint
pub const SETPOINT_COL: u8 = 4;
/// Width of a percentage field, including the `%`
pub const PERCENT_WIDTH: usize = 4;
/// Column of the first temperature
pub const TEMPERATURE_COL: u8 = 8;
/// Width of one temperature field
pub const TEMPERATURE_WIDTH: u8 = 3;

/// Value shown in place of a missing reading
pub const PLACEHOLDER: i32 = 0;

/// Round a humidity reading to a whole percent
///
/// Non-finite readings become [`PLACEHOLDER`].
pub fn round_percent(pv: f32) -> i32 {
    if !pv.is_finite() {
        PLACEHOLDER
    } else if pv >= 0.0 {
        (pv + 0.5) as i32
    } else {
        (pv - 0.5) as i32
    }
}

/// `" 55%"`
pub fn percent_field(value: i32) -> Field {
    let mut field = Field::new();
    let _ = write!(field, "{:>3}%", value);
    field
}

/// `" 21"`, or the placeholder when the sensor has no reading
pub fn temperature_field(reading: Result<i16, SensorError>) -> Field {
    let celsius = reading.map_or(PLACEHOLDER, i32::from);
    let mut field = Field::new();
    let _ = write!(field, "{:>3}", celsius);
    field
}

/// Spaces covering a hidden field
pub fn blank_field(width: usize) -> Field {
    let mut field = Field::new();
    for _ in 0..width.min(FIELD_CAP) {
        let _ = field.push(' ');
    }
    field
}

/// Column of temperature source `index`
pub fn temperature_col(index: usize) -> u8 {
    TEMPERATURE_COL.saturating_add((index as u8).saturating_mul(TEMPERATURE_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(54.4), 54);
        assert_eq!(round_percent(54.6), 55);
        assert_eq!(round_percent(100.0), 100);
        assert_eq!(round_percent(f32::NAN), 0);
        assert_eq!(round_percent(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn test_percent_field() {
        assert_eq!(percent_field(55).as_str(), " 55%");
        assert_eq!(percent_field(5).as_str(), "  5%");
        assert_eq!(percent_field(100).as_str(), "100%");
        assert_eq!(percent_field(55).len(), PERCENT_WIDTH);
    }

    #[test]
    fn test_temperature_field() {
        assert_eq!(temperature_field(Ok(21)).as_str(), " 21");
        assert_eq!(temperature_field(Ok(-5)).as_str(), " -5");
        assert_eq!(temperature_field(Err(SensorError::OpenCircuit)).as_str(), "  0");
        assert_eq!(temperature_field(Err(SensorError::NoReading)).as_str(), "  0");
    }

    #[test]
    fn test_blank_field() {
        assert_eq!(blank_field(PERCENT_WIDTH).as_str(), "    ");
        assert_eq!(blank_field(100).len(), FIELD_CAP);
    }

    #[test]
    fn test_temperature_columns() {
        assert_eq!(temperature_col(0), 8);
        assert_eq!(temperature_col(1), 11);
        assert_eq!(temperature_col(3), 17);
    }
}

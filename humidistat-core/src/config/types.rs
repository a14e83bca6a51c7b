//! UI tuning constants and their validation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest setpoint a relative humidity bound may reach (%)
pub const MAX_SETPOINT: u8 = 100;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh, input or blink interval is zero
    ZeroInterval,
    /// Coarse adjustment step is zero
    ZeroAdjustStep,
    /// `setpoint_min` is above `setpoint_max`
    InvertedBounds,
    /// `setpoint_max` is above 100 %
    SetpointAboveMax,
}

/// UI configuration
///
/// Policy knobs, fixed when the `ControllerUI` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Minimum time between display redraws (ms)
    pub refresh_interval_ms: u32,
    /// Minimum time between accepted button presses (ms)
    pub input_interval_ms: u32,
    /// Half-period of the setpoint blink (ms)
    pub blink_interval_ms: u32,
    /// How long the splash screen stays up (ms)
    pub splash_duration_ms: u32,
    /// How long the info screen stays up (ms)
    pub info_duration_ms: u32,
    /// Deviation between humidity and setpoint that starts the blink
    /// (percentage points)
    pub tolerance: u8,
    /// LEFT/RIGHT adjustment step (percentage points)
    pub adjust_step: u8,
    /// Lowest selectable setpoint (%)
    pub setpoint_min: u8,
    /// Highest selectable setpoint (%)
    pub setpoint_max: u8,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 250,
            input_interval_ms: 200,
            blink_interval_ms: 500,
            splash_duration_ms: 2000,
            info_duration_ms: 2000,
            tolerance: 1,
            adjust_step: 5,
            setpoint_min: 0,
            setpoint_max: MAX_SETPOINT,
        }
    }
}

impl UiConfig {
    /// Check the configuration for values the UI cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_ms == 0
            || self.input_interval_ms == 0
            || self.blink_interval_ms == 0
        {
            return Err(ConfigError::ZeroInterval);
        }

        if self.adjust_step == 0 {
            return Err(ConfigError::ZeroAdjustStep);
        }

        if self.setpoint_min > self.setpoint_max {
            return Err(ConfigError::InvertedBounds);
        }

        if self.setpoint_max > MAX_SETPOINT {
            return Err(ConfigError::SetpointAboveMax);
        }

        Ok(())
    }
}

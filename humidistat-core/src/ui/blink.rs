//! Setpoint blink policy
//!
//! The blink phase is derived from the clock alone, so any number of
//! blinking fields stay in step without a toggle flag.

/// Whether the humidity is far enough from the setpoint to blink
///
/// True iff `|pv - setpoint| > tolerance`. A non-finite reading never
/// blinks.
pub fn deviation_exceeds(pv: f32, setpoint: u8, tolerance: u8) -> bool {
    if !pv.is_finite() {
        return false;
    }

    let diff = pv - f32::from(setpoint);
    let tolerance = f32::from(tolerance);
    diff > tolerance || diff < -tolerance
}

/// Blink phase at `now_ms`: visible on even half-periods
pub fn phase_visible(now_ms: u32, interval_ms: u32) -> bool {
    now_ms
        .checked_div(interval_ms)
        .map_or(true, |half_periods| half_periods % 2 == 0)
}

/// Whether a field should be drawn at `now_ms`
pub fn field_visible(now_ms: u32, interval_ms: u32, blinking: bool) -> bool {
    !blinking || phase_visible(now_ms, interval_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_deviation_threshold() {
        assert!(!deviation_exceeds(50.0, 50, 1));
        assert!(!deviation_exceeds(51.0, 50, 1));
        assert!(!deviation_exceeds(49.0, 50, 1));
        assert!(deviation_exceeds(51.5, 50, 1));
        assert!(deviation_exceeds(48.9, 50, 1));
        assert!(deviation_exceeds(55.0, 50, 1));
    }

    #[test]
    fn test_zero_tolerance() {
        assert!(!deviation_exceeds(50.0, 50, 0));
        assert!(deviation_exceeds(50.1, 50, 0));
    }

    #[test]
    fn test_nan_never_blinks() {
        assert!(!deviation_exceeds(f32::NAN, 50, 1));
        assert!(!deviation_exceeds(f32::INFINITY, 50, 1));
    }

    #[test]
    fn test_phase() {
        assert!(phase_visible(0, 500));
        assert!(phase_visible(499, 500));
        assert!(!phase_visible(500, 500));
        assert!(!phase_visible(999, 500));
        assert!(phase_visible(1000, 500));
    }

    #[test]
    fn test_inactive_always_visible() {
        for now in [0, 250, 500, 750, 1000, u32::MAX] {
            assert!(field_visible(now, 500, false));
        }
    }

    #[test]
    fn test_zero_interval_does_not_panic() {
        assert!(phase_visible(1234, 0));
    }

    proptest! {
        #[test]
        fn prop_blink_matches_tolerance(pv in 0.0f32..=100.0, sp in 0u8..=100, tol in 0u8..=10) {
            let diff = pv - f32::from(sp);
            let expected = diff.abs() > f32::from(tol);
            prop_assert_eq!(deviation_exceeds(pv, sp, tol), expected);
        }

        #[test]
        fn prop_toggles_once_per_interval(interval in 1u32..5000, n in 0u32..1000) {
            let start = n * interval;
            let a = phase_visible(start, interval);
            // Stable within the half-period
            prop_assert_eq!(phase_visible(start + interval - 1, interval), a);
            // Flipped in the next one
            prop_assert_ne!(phase_visible(start + interval, interval), a);
        }
    }
}

//! Validation utilities for incoming bar data.

use crate::bar::Bar;

/// Validate a bar has reasonable values.
///
/// Checks that all OHLC fields are finite and positive and that the
/// high/low range is not inverted. Volume may be zero but not negative.
pub fn validate_bar(bar: &Bar) -> bool {
    bar.open.is_finite()
        && bar.high.is_finite()
        && bar.low.is_finite()
        && bar.close.is_finite()
        && bar.volume.is_finite()
        && bar.high >= bar.low
        && bar.open > 0.0
        && bar.close > 0.0
        && bar.low > 0.0
        && bar.volume >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bar_valid() {
        let bar = Bar::new(1000.0, 100.0, 105.0, 95.0, 102.0, 1000.0);
        assert!(validate_bar(&bar));
    }

    #[test]
    fn test_validate_bar_nan_close() {
        let bar = Bar::new(1000.0, 100.0, 105.0, 95.0, f32::NAN, 1000.0);
        assert!(!validate_bar(&bar));
    }

    #[test]
    fn test_validate_bar_infinite_high() {
        let bar = Bar::new(1000.0, 100.0, f32::INFINITY, 95.0, 102.0, 1000.0);
        assert!(!validate_bar(&bar));
    }

    #[test]
    fn test_validate_bar_high_below_low() {
        let bar = Bar::new(1000.0, 100.0, 90.0, 95.0, 102.0, 1000.0);
        assert!(!validate_bar(&bar));
    }

    #[test]
    fn test_validate_bar_zero_volume_ok() {
        let bar = Bar::new(1000.0, 100.0, 105.0, 95.0, 102.0, 0.0);
        assert!(validate_bar(&bar));
    }
}

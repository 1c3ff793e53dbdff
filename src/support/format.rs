//! Presentation formatting for correlation results.

/// Formats a result the way result tables display it.
///
/// Zero prints as `"0"`. Magnitudes in `[0.01, 10000)` use four fixed
/// decimals; anything else uses exponential notation with a four-digit
/// mantissa fraction and an explicitly signed exponent.
///
/// ```
/// use packed_bed_models::support::format::display_number;
///
/// assert_eq!(display_number(0.0), "0");
/// assert_eq!(display_number(1261.621), "1261.6210");
/// assert_eq!(display_number(12345.6), "1.2346e+4");
/// assert_eq!(display_number(1.81e-5), "1.8100e-5");
/// ```
#[must_use]
pub fn display_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    if (0.01..10_000.0).contains(&value.abs()) {
        return format!("{value:.4}");
    }

    let formatted = format!("{value:.4e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_range_boundaries() {
        assert_eq!(display_number(0.01), "0.0100");
        assert_eq!(display_number(9_999.5), "9999.5000");
        assert_eq!(display_number(10_000.0), "1.0000e+4");
        assert_eq!(display_number(0.009_99), "9.9900e-3");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(display_number(-2.5), "-2.5000");
        assert_eq!(display_number(-3.0e6), "-3.0000e+6");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(display_number(f64::NAN), "NaN");
        assert_eq!(display_number(f64::INFINITY), "inf");
    }
}

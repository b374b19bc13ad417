//! Compact float formatting and numeric field parsing.

/// True when `value` has no fractional part. Non-finite values are
/// never integral.
pub fn is_integral(value: f64) -> bool {
    value.fract() == 0.0
}

/// Format with two decimals unless the value is integral:
/// `1.234` → `"1.23"`, `3.0` → `"3"`.
pub fn format_compact(value: f64) -> String {
    if is_integral(value) {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Parse user-entered text as a float, ignoring surrounding whitespace.
/// Returns `None` when the trimmed text is not a finite number.
pub fn field_value(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integral() {
        assert!(is_integral(3.0));
        assert!(is_integral(-2.0));
        assert!(is_integral(0.0));
        assert!(!is_integral(1.234));
        assert!(!is_integral(f64::NAN));
        assert!(!is_integral(f64::INFINITY));
    }

    #[test]
    fn test_format_compact_integral() {
        assert_eq!(format_compact(3.0), "3");
        assert_eq!(format_compact(-10.0), "-10");
    }

    #[test]
    fn test_format_compact_fractional_rounds_to_two_decimals() {
        assert_eq!(format_compact(1.234), "1.23");
        assert_eq!(format_compact(1.239), "1.24");
        assert_eq!(format_compact(-0.5), "-0.50");
    }

    #[test]
    fn test_field_value() {
        assert_eq!(field_value("  12.5 "), Some(12.5));
        assert_eq!(field_value("-3"), Some(-3.0));
        assert_eq!(field_value("abc"), None);
        assert_eq!(field_value(""), None);
        assert_eq!(field_value("NaN"), None);
    }
}

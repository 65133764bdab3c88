//! Compact general-number formatting for tick labels.

/// Significant digits used by the default tick label formatter.
pub const DEFAULT_PRECISION: usize = 6;

/// Format a value with at most `precision` significant digits.
///
/// Trailing zeros are dropped. Values whose decimal exponent is below -4 or
/// at least `precision` use exponent notation (`1.5e+07`, `2e-05`), the rest
/// use plain notation (`0.25`, `-18`, `1500`).
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(value: f64) -> String {
        format_general(value, DEFAULT_PRECISION)
    }

    #[test]
    fn plain_values_drop_trailing_zeros() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "0");
        assert_eq!(g(5.0), "5");
        assert_eq!(g(-18.0), "-18");
        assert_eq!(g(0.25), "0.25");
        assert_eq!(g(1500.0), "1500");
        assert_eq!(g(123456.0), "123456");
    }

    #[test]
    fn accumulated_drift_is_hidden() {
        assert_eq!(g(0.1 + 0.2), "0.3");
        assert_eq!(g(0.6000000000000001), "0.6");
    }

    #[test]
    fn large_and_small_values_use_exponent() {
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(1.5e7), "1.5e+07");
        assert_eq!(g(0.00002), "2e-05");
        assert_eq!(g(0.0001), "0.0001");
    }

    #[test]
    fn precision_limits_significant_digits() {
        assert_eq!(format_general(3.14159, 3), "3.14");
        assert_eq!(format_general(0.123, 3), "0.123");
        assert_eq!(format_general(98.76, 2), "99");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
    }
}

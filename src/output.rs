pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 9;

/// Rounds `x` to `digits` significant figures. Zero, non-finite values and a
/// zero digit count are returned unchanged.
pub fn round_significant(x: f64, digits: usize) -> f64 {
    if x == 0.0 || !x.is_finite() || digits == 0 {
        return x;
    }
    // scientific formatting rounds on the exact binary value
    format!("{:.*e}", digits - 1, x).parse().unwrap_or(x)
}

/// Renders integral values without a fractional part and everything else in
/// its shortest round-trip form. Magnitudes below `1e-4` use exponent
/// notation with a signed two-digit exponent, e.g. `2.5e-07`.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.fract() == 0.0 {
        return format!("{x:.0}");
    }
    if x.abs() < 1e-4 {
        return exponent_form(x);
    }
    format!("{x}")
}

fn exponent_form(x: f64) -> String {
    let formatted = format!("{x:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

pub fn format_distance(d: f64, digits: usize) -> String {
    format_number(round_significant(d, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_significant() {
        assert_eq!(round_significant(std::f64::consts::SQRT_2, 9), 1.41421356);
        assert_eq!(round_significant(123456789012.0, 9), 123456789000.0);
        assert_eq!(round_significant(123456789012.0, 3), 123000000000.0);
        assert_eq!(round_significant(0.000123456789012, 3), 0.000123);
        assert_eq!(round_significant(0.0, 9), 0.0);
        assert_eq!(round_significant(f64::INFINITY, 9), f64::INFINITY);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1.41421356), "1.41421356");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.00025), "0.00025");
        assert_eq!(format_number(2.5e-7), "2.5e-07");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(2f64.sqrt(), DEFAULT_SIGNIFICANT_DIGITS), "1.41421356");
        assert_eq!(format_distance(0.9999999999, DEFAULT_SIGNIFICANT_DIGITS), "1");
        assert_eq!(format_distance(5.0, DEFAULT_SIGNIFICANT_DIGITS), "5");
    }
}

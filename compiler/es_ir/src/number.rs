//! Textual form of numbers.

/// Render a number the way programs observe it through `asString`.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and the non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    // f64's Display already yields the shortest round-tripping form and
    // drops the fraction of integral values.
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn fractions_round_trip() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}

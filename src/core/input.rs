/// Reads the leading number of a form field the way a browser's lenient float
/// parse does: surrounding whitespace and trailing garbage are ignored, and a
/// field without a leading number yields `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        } else if int_digits == 0 {
            return None;
        }
    } else if int_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Like [`parse_number`], but also rejects infinities.
pub fn parse_finite(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|value| value.is_finite())
}

/// Prints a number the way a browser does: shortest round-trip digits, switching
/// to exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
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
    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::{format_number, parse_finite, parse_number};

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-12.5"), Some(-12.5));
        assert_eq!(parse_number("+3"), Some(3.0));
        assert_eq!(parse_number(".25"), Some(0.25));
        assert_eq!(parse_number("7."), Some(7.0));
        assert_eq!(parse_number("1.5e3"), Some(1500.0));
    }

    #[test]
    fn ignores_surrounding_text() {
        assert_eq!(parse_number("  9.8  "), Some(9.8));
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number("3e"), Some(3.0));
        assert_eq!(parse_number("3e+"), Some(3.0));
        assert_eq!(parse_number("45°"), Some(45.0));
    }

    #[test]
    fn rejects_fields_without_a_leading_number() {
        for raw in ["", "   ", "abc", ".", "-", "NaN", "e5", "--1"] {
            assert_eq!(parse_number(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn infinities_parse_but_are_not_finite() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("1e999"), Some(f64::INFINITY));
        assert_eq!(parse_finite("Infinity"), None);
        assert_eq!(parse_finite("1e999"), None);
        assert_eq!(parse_finite("10"), Some(10.0));
    }

    #[test]
    fn formats_like_a_browser() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(-9.0), "-9");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}

//! Number text in ECMAScript form
//!
//! Interpolated numbers are rendered back into strings (templates, color
//! opacity) and strings are read as numbers during coercion. Both directions
//! follow the ECMAScript `Number::toString` / `StringToNumber` rules so that
//! rendered text matches what a browser-side consumer would produce.

/// Render a number the way ECMAScript `Number::toString` does.
///
/// Digits are the shortest string that round-trips; exponent notation is
/// used outside `[1e-7, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    let (digits, n) = shortest_digits(value);
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        let mut out = digits;
        out.extend(std::iter::repeat('0').take((n - k) as usize));
        out
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        if k == 1 {
            format!("{}e{}{}", digits, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", &digits[..1], &digits[1..], sign, e.abs())
        }
    }
}

/// Shortest round-trip decimal digits of a positive finite number and the
/// position `n` of the decimal point relative to them (`value = 0.d1d2.. × 10^n`).
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.5e0" or "1e21"
    let text = format!("{:e}", value);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent + 1)
}

/// Match a decimal literal `[-+]?(\d+\.?\d*|\.?\d+)([eE][-+]?\d+)?` starting
/// exactly at byte offset `start`. Returns the end offset of the match.
pub fn scan_decimal(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = start;

    if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(bytes, pos);
    if int_digits > 0 {
        pos += int_digits;
        if bytes.get(pos) == Some(&b'.') {
            pos += 1;
            pos += count_digits(bytes, pos);
        }
    } else if bytes.get(pos) == Some(&b'.') {
        let frac_digits = count_digits(bytes, pos + 1);
        if frac_digits == 0 {
            return None;
        }
        pos += 1 + frac_digits;
    } else {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(bytes, exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    Some(pos)
}

/// Find the leftmost decimal literal at or after byte offset `from`.
pub fn find_decimal(text: &str, from: usize) -> Option<(usize, usize)> {
    (from..text.len()).find_map(|start| scan_decimal(text, start).map(|end| (start, end)))
}

#[inline]
fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}

/// Read a string the way ECMAScript `StringToNumber` does.
///
/// Surrounding whitespace is ignored, the empty string is 0, and anything
/// that is not a complete numeric literal is NaN.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }

    match scan_decimal(text, 0) {
        Some(end) if end == text.len() => text.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
    .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_plain() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(0.6), "0.6");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_special() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.23e-18), "1.23e-18");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_scan_decimal() {
        assert_eq!(scan_decimal("12.5px", 0), Some(4));
        assert_eq!(scan_decimal("-.5", 0), Some(3));
        assert_eq!(scan_decimal("1.e5", 0), Some(4));
        assert_eq!(scan_decimal("3e", 0), Some(1));
        assert_eq!(scan_decimal("+x", 0), None);
        assert_eq!(scan_decimal(".", 0), None);
    }

    #[test]
    fn test_find_decimal() {
        assert_eq!(find_decimal("translate(10, -20)", 0), Some((10, 12)));
        assert_eq!(find_decimal("translate(10, -20)", 12), Some((14, 17)));
        assert_eq!(find_decimal("no numbers", 0), None);
        assert_eq!(find_decimal("é 7", 0), Some((3, 4)));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("2"), 2.0);
        assert_eq!(parse_number("  -1.5e2 \n"), -150.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("bar").is_nan());
        assert!(parse_number("1px").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("0x").is_nan());
    }

    proptest! {
        #[test]
        fn test_format_round_trips(x in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL) {
            prop_assert_eq!(parse_number(&format_number(x)), x);
        }
    }
}

use thiserror::Error;

use crate::model::{Color, Hsl, Rgb};
use crate::named;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex digits")]
    InvalidHex,

    #[error("invalid hex length")]
    InvalidLength,

    #[error("invalid color function")]
    InvalidFunc,

    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// Parse a hex color (without the leading `#`).
///
/// The allowed formats are:
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    if !(3..=8).contains(&hex.len()) {
        return Err(InvalidLength);
    }
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(InvalidHex);
    }
    let m = u32::from_str_radix(hex, 16).map_err(|_| InvalidHex)?;

    // a short-form nibble is repeated: f -> ff
    let dup = |n: u32| ((n & 0xf) << 4 | (n & 0xf)) as f64;

    let rgb = match hex.len() {
        6 => Rgb::from_packed(m),
        3 => Rgb::opaque(dup(m >> 8), dup(m >> 4), dup(m)),
        8 => Rgb::with_opacity(
            ((m >> 24) & 0xff) as f64,
            ((m >> 16) & 0xff) as f64,
            ((m >> 8) & 0xff) as f64,
            (m & 0xff) as f64 / 255.0,
        ),
        4 => Rgb::with_opacity(dup(m >> 12), dup(m >> 8), dup(m >> 4), dup(m) / 255.0),
        _ => return Err(InvalidLength),
    };

    Ok(Color::Rgb(rgb))
}

/// Integer channel: `[+-]?\d+`
fn integer(arg: &str) -> Option<f64> {
    let arg = arg.trim();
    let digits = arg.strip_prefix(&['+', '-'][..]).unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}

/// Number: `[+-]?(\d*\.)?\d+([eE][+-]?\d+)?`
fn number(arg: &str) -> Option<f64> {
    let arg = arg.trim();
    let unsigned = arg.strip_prefix(&['+', '-'][..]).unwrap_or(arg);
    let (mantissa, exponent) = match unsigned.find(|c| c == 'e' || c == 'E') {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit());
    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => (int.is_empty() || all_digits(int)) && all_digits(frac),
        None => all_digits(mantissa),
    };
    let exponent_ok = exponent.map_or(true, |e| all_digits(e.strip_prefix(&['+', '-'][..]).unwrap_or(e)));

    if mantissa_ok && exponent_ok {
        arg.parse().ok()
    } else {
        None
    }
}

/// Percentage: a number immediately followed by `%`, as a fraction of 100
fn percent(arg: &str) -> Option<f64> {
    let body = arg.trim().strip_suffix('%')?;
    if body.ends_with(char::is_whitespace) {
        return None;
    }
    number(body)
}

/// Parse the argument list of a CSS color function
fn parse_func(name: &str, args: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let args: Vec<&str> = args.split(',').collect();

    let channels = |args: &[&str]| -> Option<(f64, f64, f64)> {
        match (integer(args[0]), integer(args[1]), integer(args[2])) {
            (Some(r), Some(g), Some(b)) => Some((r, g, b)),
            _ => {
                let r = percent(args[0])?;
                let g = percent(args[1])?;
                let b = percent(args[2])?;
                Some((r * 255.0 / 100.0, g * 255.0 / 100.0, b * 255.0 / 100.0))
            }
        }
    };
    let hsl = |args: &[&str]| -> Option<(f64, f64, f64)> {
        Some((number(args[0])?, percent(args[1])? / 100.0, percent(args[2])? / 100.0))
    };

    let color = match (name, args.len()) {
        ("rgb", 3) => channels(&args).map(|(r, g, b)| Color::Rgb(Rgb::opaque(r, g, b))),
        ("rgba", 4) => channels(&args).and_then(|(r, g, b)| {
            number(args[3]).map(|a| Color::Rgb(Rgb::with_opacity(r, g, b, a)))
        }),
        ("hsl", 3) => hsl(&args).map(|(h, s, l)| Color::Hsl(Hsl::with_opacity(h, s, l, 1.0))),
        ("hsla", 4) => hsl(&args).and_then(|(h, s, l)| {
            number(args[3]).map(|a| Color::Hsl(Hsl::with_opacity(h, s, l, a)))
        }),
        _ => None,
    };

    color.ok_or(InvalidFunc)
}

/// Parse CSS color text.
///
/// Input is trimmed and matched case-insensitively. Recognized forms are hex
/// colors, `rgb()`, `rgba()`, `hsl()`, `hsla()`, named colors and
/// `transparent`.
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let s = s.trim();
    if s.is_empty() {
        return Err(Empty);
    }
    let lower = s.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some((name, rest)) = lower.split_once('(') {
        let args = rest.strip_suffix(')').ok_or(InvalidFunc)?;
        return parse_func(name, args);
    }

    if let Some(packed) = named::lookup(&lower) {
        return Ok(Color::Rgb(Rgb::from_packed(packed)));
    }
    if lower == "transparent" {
        return Ok(Color::Rgb(Rgb::new(f64::NAN, f64::NAN, f64::NAN, 0.0)));
    }

    Err(UnknownName(lower))
}

impl core::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}

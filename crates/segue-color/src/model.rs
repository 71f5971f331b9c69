//! Color channel tuples
//!
//! Channels are kept as `f64` so that interpolation can overshoot and round
//! only when rendered. A NaN channel means "unspecified": it renders as 0 and
//! yields to the other endpoint when interpolated.

use std::fmt;

use segue_core::format_number;

/// RGB channel tuple. `r`, `g`, `b` nominally in [0, 255], `opacity` in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub opacity: f64,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::unspecified()
    }
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64, opacity: f64) -> Self {
        Self { r, g, b, opacity }
    }

    /// Fully opaque color
    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Every channel unspecified
    pub fn unspecified() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// From a packed `0xRRGGBB` value
    pub fn from_packed(n: u32) -> Self {
        Self::opaque(
            ((n >> 16) & 0xff) as f64,
            ((n >> 8) & 0xff) as f64,
            (n & 0xff) as f64,
        )
    }

    /// Channels with an explicit opacity; a non-positive opacity leaves the
    /// color channels unspecified
    pub fn with_opacity(r: f64, g: f64, b: f64, opacity: f64) -> Self {
        if opacity <= 0.0 {
            Self::new(f64::NAN, f64::NAN, f64::NAN, opacity)
        } else {
            Self::new(r, g, b, opacity)
        }
    }

    /// Parse `text` as a color, falling back to unspecified channels
    pub fn coerce(text: &str) -> Self {
        crate::parse_color(text)
            .map(|color| color.rgb())
            .unwrap_or_else(|_| Self::unspecified())
    }

    /// Opacity as rendered: unspecified is opaque, otherwise clamped to [0, 1]
    pub fn rendered_opacity(&self) -> f64 {
        if self.opacity.is_nan() {
            1.0
        } else {
            self.opacity.clamp(0.0, 1.0)
        }
    }

    /// Whether every channel is inside its nominal range
    pub fn is_displayable(&self) -> bool {
        (-0.5..255.5).contains(&self.r)
            && (-0.5..255.5).contains(&self.g)
            && (-0.5..255.5).contains(&self.b)
            && (0.0..=1.0).contains(&self.opacity)
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Round half up, clamp to [0, 255]; NaN renders as 0
#[inline]
fn channel(value: f64) -> u8 {
    let rounded = (value + 0.5).floor();
    if rounded.is_nan() {
        0
    } else {
        rounded.clamp(0.0, 255.0) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opacity = self.rendered_opacity();
        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        if opacity == 1.0 {
            write!(f, "rgb({}, {}, {})", r, g, b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", r, g, b, format_number(opacity))
        }
    }
}

/// HSL tuple: hue in degrees, saturation and lightness in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub opacity: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64, opacity: f64) -> Self {
        Self { h, s, l, opacity }
    }

    /// Channels with an explicit opacity; components that cannot matter for
    /// the resulting color are left unspecified
    pub fn with_opacity(h: f64, s: f64, l: f64, opacity: f64) -> Self {
        if opacity <= 0.0 {
            Self::new(f64::NAN, f64::NAN, f64::NAN, opacity)
        } else if l <= 0.0 || l >= 1.0 {
            Self::new(f64::NAN, f64::NAN, l, opacity)
        } else if s <= 0.0 {
            Self::new(f64::NAN, s, l, opacity)
        } else {
            Self::new(h, s, l, opacity)
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = if h.is_nan() || self.s.is_nan() { 0.0 } else { self.s };
        let l = self.l;
        let m2 = l + (if l < 0.5 { l } else { 1.0 - l }) * s;
        let m1 = 2.0 * l - m2;

        Rgb::new(
            hsl_channel(if h >= 240.0 { h - 240.0 } else { h + 120.0 }, m1, m2),
            hsl_channel(h, m1, m2),
            hsl_channel(if h < 120.0 { h + 240.0 } else { h - 120.0 }, m1, m2),
            self.opacity,
        )
    }
}

fn hsl_channel(h: f64, m1: f64, m2: f64) -> f64 {
    let v = if h < 60.0 {
        m1 + (m2 - m1) * h / 60.0
    } else if h < 180.0 {
        m2
    } else if h < 240.0 {
        m1 + (m2 - m1) * (240.0 - h) / 60.0
    } else {
        m1
    };
    v * 255.0
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let (r, g, b) = (rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0);
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let l = (max + min) / 2.0;
        let mut h = f64::NAN;
        let mut s = max - min;

        if s != 0.0 && !s.is_nan() {
            h = if r == max {
                (g - b) / s + (if g < b { 6.0 } else { 0.0 })
            } else if g == max {
                (b - r) / s + 2.0
            } else {
                (r - g) / s + 4.0
            };
            s /= if l < 0.5 { max + min } else { 2.0 - max - min };
            h *= 60.0;
        } else {
            s = if l > 0.0 && l < 1.0 { 0.0 } else { h };
        }

        Hsl::new(h, s, l, rgb.opacity)
    }
}

/// A structured color value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
}

impl Color {
    /// The color as an RGB channel tuple
    pub fn rgb(&self) -> Rgb {
        match self {
            Color::Rgb(rgb) => *rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    pub fn hsl(&self) -> Hsl {
        match self {
            Color::Rgb(rgb) => Hsl::from(*rgb),
            Color::Hsl(hsl) => *hsl,
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            Color::Rgb(rgb) => rgb.opacity,
            Color::Hsl(hsl) => hsl.opacity,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::Hsl(hsl)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rgb().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rgb() {
        assert_eq!(Rgb::opaque(127.5, 0.0, 127.5).to_string(), "rgb(128, 0, 128)");
        assert_eq!(Rgb::opaque(-20.0, 300.0, f64::NAN).to_string(), "rgb(0, 255, 0)");
        assert_eq!(Rgb::new(1.0, 2.0, 3.0, f64::NAN).to_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_format_rgba() {
        assert_eq!(Rgb::new(128.0, 0.0, 128.0, 0.6).to_string(), "rgba(128, 0, 128, 0.6)");
        assert_eq!(Rgb::new(0.0, 0.0, 0.0, -1.0).to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::from_packed(0x4682b4).hex(), "#4682b4");
        assert_eq!(Rgb::unspecified().hex(), "#000000");
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(Hsl::new(240.0, 1.0, 0.5, 1.0).to_rgb(), Rgb::opaque(0.0, 0.0, 255.0));
        assert_eq!(Hsl::new(0.0, 1.0, 0.5, 1.0).to_rgb(), Rgb::opaque(255.0, 0.0, 0.0));
        let grey = Hsl::new(f64::NAN, 0.0, 0.5, 1.0).to_rgb();
        assert_eq!(grey, Rgb::opaque(127.5, 127.5, 127.5));
    }

    #[test]
    fn test_rgb_to_hsl() {
        let hsl = Hsl::from(Rgb::opaque(0.0, 0.0, 255.0));
        assert_eq!(hsl.h, 240.0);
        assert_eq!(hsl.s, 1.0);
        assert_eq!(hsl.l, 0.5);
        assert_eq!(Color::Hsl(hsl).rgb(), Rgb::opaque(0.0, 0.0, 255.0));
    }

    #[test]
    fn test_displayable() {
        assert!(Rgb::opaque(255.0, 0.0, 0.0).is_displayable());
        assert!(!Rgb::opaque(256.0, 0.0, 0.0).is_displayable());
        assert!(!Rgb::unspecified().is_displayable());
    }
}

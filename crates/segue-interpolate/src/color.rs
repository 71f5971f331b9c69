//! RGB color interpolation

use segue_color::Rgb;
use tracing::debug;

use crate::coerce::to_concat_string;
use crate::interpolator::Interpolator;
use crate::value::Value;

/// One color channel. A channel with no usable difference holds still.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Channel {
    start: f64,
    delta: f64,
}

impl Channel {
    fn new(start: f64, end: f64) -> Self {
        let delta = end - start;
        if delta != 0.0 && !delta.is_nan() {
            Self { start, delta }
        } else {
            let held = if start.is_nan() { end } else { start };
            Self { start: held, delta: 0.0 }
        }
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        if self.delta == 0.0 {
            self.start
        } else {
            self.start + t * self.delta
        }
    }
}

/// Channel-wise linear blend in RGB, rendered as CSS color text
#[derive(Clone, Debug, PartialEq)]
pub struct RgbInterpolator {
    r: Channel,
    g: Channel,
    b: Channel,
    opacity: Channel,
}

impl RgbInterpolator {
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Self {
            r: Channel::new(start.r, end.r),
            g: Channel::new(start.g, end.g),
            b: Channel::new(start.b, end.b),
            opacity: Channel::new(start.opacity, end.opacity),
        }
    }

    pub fn at(&self, t: f64) -> Rgb {
        Rgb::new(self.r.at(t), self.g.at(t), self.b.at(t), self.opacity.at(t))
    }
}

/// Read any value as a color; what does not parse has unspecified channels
pub fn coerce_rgb(value: &Value) -> Rgb {
    match value {
        Value::Color(color) => color.rgb(),
        other => {
            let text = to_concat_string(other);
            let rgb = Rgb::coerce(&text);
            if rgb.r.is_nan() && rgb.opacity.is_nan() {
                debug!(text = %text, "start value is not a color");
            }
            rgb
        }
    }
}

pub(crate) fn build(a: &Value, end: Rgb) -> Interpolator {
    Interpolator::Rgb(RgbInterpolator::new(coerce_rgb(a), end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_color::{Color, Hsl};

    fn text(a: &str, b: &str, t: f64) -> String {
        RgbInterpolator::new(Rgb::coerce(a), Rgb::coerce(b)).at(t).to_string()
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(text("red", "blue", 0.5), "rgb(128, 0, 128)");
        assert_eq!(text("#f00", "#00f", 0.5), "rgb(128, 0, 128)");
        assert_eq!(
            text("rgba(100%, 0%, 0%, 0.5)", "rgba(0%, 0%, 100%, 0.7)", 0.5),
            "rgba(128, 0, 128, 0.6)"
        );
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(text("steelblue", "brown", 0.0), "rgb(70, 130, 180)");
        assert_eq!(text("steelblue", "brown", 1.0), "rgb(165, 42, 42)");
    }

    #[test]
    fn test_unspecified_channels_yield() {
        // transparent has no channels, so only opacity moves
        assert_eq!(text("transparent", "red", 0.5), "rgba(255, 0, 0, 0.5)");
        assert_eq!(text("red", "transparent", 0.5), "rgba(255, 0, 0, 0.5)");
        assert_eq!(text("not a color", "blue", 0.5), "rgb(0, 0, 255)");
    }

    #[test]
    fn test_structured_start() {
        let hsl = Value::Color(Color::Hsl(Hsl::new(0.0, 1.0, 0.5, 1.0)));
        assert_eq!(coerce_rgb(&hsl), Rgb::opaque(255.0, 0.0, 0.0));
        assert_eq!(
            build(&hsl, Rgb::opaque(0.0, 0.0, 255.0)).at(0.5),
            Value::from("rgb(128, 0, 128)")
        );
    }

    #[test]
    fn test_extrapolation_clamps_on_render() {
        assert_eq!(text("rgb(0, 0, 0)", "rgb(200, 100, 0)", 2.0), "rgb(255, 200, 0)");
    }
}

//! The interpolator type
//!
//! An [`Interpolator`] is built once from a start and an end value and is
//! then sampled with [`Interpolator::at`]. Every variant is immutable after
//! construction, so sampling takes `&self` and the same interpolator can be
//! shared between threads.

use segue_core::Date;

use crate::array::TypedInterpolator;
use crate::color::RgbInterpolator;
use crate::template::Template;
use crate::value::{Object, Value};

/// Straight-line blend of two numbers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Linear {
    pub start: f64,
    pub end: f64,
}

impl Linear {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `start + (end - start) * t`, weighted so that `t = 1` lands exactly on `end`
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        self.start * (1.0 - t) + self.end * t
    }
}

/// A function of `t` from a start value to an end value
#[derive(Clone, Debug)]
pub enum Interpolator {
    /// The same value for every `t`
    Constant(Value),
    Number(Linear),
    /// Number rounded half up to an integer
    Round(Linear),
    /// Angle in degrees, wrapped into `[0, 360)`
    Hue(Linear),
    Date(Linear),
    Template(Template),
    Rgb(RgbInterpolator),
    Array(Vec<Interpolator>),
    TypedArray(TypedInterpolator),
    Object(Vec<(String, Interpolator)>),
    /// Step through values at equal intervals
    Discrete(Vec<Value>),
    /// Consecutive segments over equal sub-ranges of [0, 1]
    Piecewise(Vec<Interpolator>),
}

impl Interpolator {
    /// Sample at `t`. Values outside [0, 1] extrapolate.
    pub fn at(&self, t: f64) -> Value {
        match self {
            Interpolator::Constant(value) => value.clone(),
            Interpolator::Number(linear) => Value::Number(linear.at(t)),
            Interpolator::Round(linear) => Value::Number((linear.at(t) + 0.5).floor()),
            Interpolator::Hue(linear) => {
                let x = linear.at(t);
                Value::Number(x - 360.0 * (x / 360.0).floor())
            }
            Interpolator::Date(linear) => Value::Date(Date::from_millis(linear.at(t))),
            Interpolator::Template(template) => Value::String(template.render(t)),
            Interpolator::Rgb(rgb) => Value::String(rgb.at(t).to_string()),
            Interpolator::Array(items) => Value::Array(items.iter().map(|item| item.at(t)).collect()),
            Interpolator::TypedArray(typed) => Value::TypedArray(typed.at(t)),
            Interpolator::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), entry.at(t)))
                    .collect::<Object>(),
            ),
            Interpolator::Discrete(values) => {
                let n = values.len();
                let index = (t * n as f64).floor();
                if n == 0 || index.is_nan() {
                    return Value::Undefined;
                }
                let index = index.clamp(0.0, (n - 1) as f64) as usize;
                values[index].clone()
            }
            Interpolator::Piecewise(segments) => {
                let n = segments.len();
                if n == 0 {
                    return Value::Undefined;
                }
                let scaled = t * n as f64;
                let index = scaled.floor().clamp(0.0, (n - 1) as f64);
                let index = if index.is_nan() { 0.0 } else { index };
                segments[index as usize].at(scaled - index)
            }
        }
    }

    /// Short name of the variant, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Interpolator::Constant(_) => "constant",
            Interpolator::Number(_) => "number",
            Interpolator::Round(_) => "round",
            Interpolator::Hue(_) => "hue",
            Interpolator::Date(_) => "date",
            Interpolator::Template(_) => "template",
            Interpolator::Rgb(_) => "rgb",
            Interpolator::Array(_) => "array",
            Interpolator::TypedArray(_) => "typed array",
            Interpolator::Object(_) => "object",
            Interpolator::Discrete(_) => "discrete",
            Interpolator::Piecewise(_) => "piecewise",
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Interpolator::Constant(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        let linear = Linear::new(1.0, 2.0);
        assert_eq!(linear.at(0.0), 1.0);
        assert_eq!(linear.at(0.5), 1.5);
        assert_eq!(linear.at(1.0), 2.0);
        assert_eq!(linear.at(2.0), 3.0);
        assert!(Linear::new(1.0, f64::NAN).at(0.5).is_nan());
    }

    #[test]
    fn test_round() {
        let round = Interpolator::Round(Linear::new(0.0, 3.0));
        assert_eq!(round.at(0.5), Value::Number(2.0));
        assert_eq!(round.at(0.1), Value::Number(0.0));
    }

    #[test]
    fn test_hue_wraps() {
        let hue = Interpolator::Hue(Linear::new(350.0, 370.0));
        assert_eq!(hue.at(0.75), Value::Number(5.0));
        assert_eq!(hue.at(0.0), Value::Number(350.0));
    }

    #[test]
    fn test_discrete() {
        let discrete = Interpolator::Discrete(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(discrete.at(0.0), Value::from("a"));
        assert_eq!(discrete.at(0.49), Value::from("a"));
        assert_eq!(discrete.at(0.5), Value::from("b"));
        assert_eq!(discrete.at(1.0), Value::from("b"));
        assert_eq!(discrete.at(-1.0), Value::from("a"));
        assert_eq!(discrete.at(f64::NAN), Value::Undefined);
        assert_eq!(Interpolator::Discrete(Vec::new()).at(0.5), Value::Undefined);
    }

    #[test]
    fn test_piecewise_segments() {
        let piecewise = Interpolator::Piecewise(vec![
            Interpolator::Number(Linear::new(0.0, 10.0)),
            Interpolator::Number(Linear::new(10.0, 30.0)),
        ]);
        assert_eq!(piecewise.at(0.25), Value::Number(5.0));
        assert_eq!(piecewise.at(0.5), Value::Number(10.0));
        assert_eq!(piecewise.at(0.75), Value::Number(20.0));
        assert_eq!(piecewise.at(1.0), Value::Number(30.0));
        // ends extrapolate through the outer segments
        assert_eq!(piecewise.at(1.25), Value::Number(40.0));
    }

    #[test]
    fn test_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Interpolator>();
        assert_send_sync::<Value>();
    }

    #[test]
    fn test_date() {
        let date = Interpolator::Date(Linear::new(0.0, 1000.0));
        assert_eq!(date.at(0.5), Value::Date(Date::from_millis(500.0)));
    }
}

//! Direct access to each interpolator, bypassing classification

use crate::array;
use crate::coerce::{to_concat_string, to_number};
use crate::color::{self, coerce_rgb};
use crate::config::{InterpolateConfig, TemplateMismatch};
use crate::dispatch::{interpolate, Builder};
use crate::interpolator::{Interpolator, Linear};
use crate::object;
use crate::template;
use crate::value::Value;

pub fn interpolate_number(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    Interpolator::Number(Linear::new(to_number(&a.into()), to_number(&b.into())))
}

/// Numbers rounded half up to integers
pub fn interpolate_round(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    Interpolator::Round(Linear::new(to_number(&a.into()), to_number(&b.into())))
}

/// Angles in degrees along the shorter arc. A NaN start holds the end.
pub fn interpolate_hue(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    let (a, b) = (to_number(&a.into()), to_number(&b.into()));
    let d = b - a;
    let linear = if d != 0.0 && !d.is_nan() {
        let d = if !(-180.0..=180.0).contains(&d) {
            d - 360.0 * (d / 360.0 + 0.5).floor()
        } else {
            d
        };
        Linear::new(a, a + d)
    } else {
        let held = if a.is_nan() { b } else { a };
        Linear::new(held, held)
    };
    Interpolator::Hue(linear)
}

/// String template between the text of `a` and `b`
pub fn interpolate_string(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    let (a, b) = (a.into(), b.into());
    template::build(
        &to_concat_string(&a),
        &to_concat_string(&b),
        TemplateMismatch::Constant,
    )
}

/// RGB blend; either side may be color text or a structured color
pub fn interpolate_rgb(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    let end = coerce_rgb(&b.into());
    color::build(&a.into(), end)
}

pub fn interpolate_date(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    Interpolator::Date(Linear::new(to_number(&a.into()), to_number(&b.into())))
}

/// Sequence interpolation with per-element dispatch; a typed end is
/// interpolated numerically
pub fn interpolate_array(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    let (a, b) = (a.into(), b.into());
    let config = InterpolateConfig::default();
    match &b {
        Value::Array(items) => array::build(&Builder::new(&config), &a, items, 0),
        Value::TypedArray(_) => array::number_array(&a, &b),
        _ => Interpolator::Array(Vec::new()),
    }
}

/// Element-wise number interpolation; the start is padded with 0
pub fn interpolate_number_array(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    array::number_array(&a.into(), &b.into())
}

/// Per-key dispatch over `b`'s enumerable keys
pub fn interpolate_object(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    let config = InterpolateConfig::default();
    object::build(&Builder::new(&config), &a.into(), &b.into(), 0)
}

/// Step through `values`: `t` selects `values[floor(t * n)]`, clamped
pub fn interpolate_discrete(values: impl IntoIterator<Item = impl Into<Value>>) -> Interpolator {
    Interpolator::Discrete(values.into_iter().map(Into::into).collect())
}

/// Interpolate through consecutive `values`, each pair covering an equal
/// share of [0, 1]
pub fn piecewise(values: &[Value]) -> Interpolator {
    piecewise_with(|a, b| interpolate(a, b), values)
}

/// [`piecewise`] with a chosen interpolator for each pair
pub fn piecewise_with<F>(builder: F, values: &[Value]) -> Interpolator
where
    F: Fn(&Value, &Value) -> Interpolator,
{
    match values {
        [] => Interpolator::Constant(Value::Undefined),
        [only] => Interpolator::Constant(only.clone()),
        _ => Interpolator::Piecewise(
            values
                .windows(2)
                .map(|pair| builder(&pair[0], &pair[1]))
                .collect(),
        ),
    }
}

/// `n` evenly spaced samples from `t = 0` to `t = 1`
pub fn quantize(interpolator: &Interpolator, n: usize) -> Vec<Value> {
    match n {
        0 => Vec::new(),
        1 => vec![interpolator.at(0.0)],
        _ => (0..n)
            .map(|i| interpolator.at(i as f64 / (n - 1) as f64))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;
    use segue_color::{Color, Hsl};
    use segue_core::{Date, ElementKind, TypedArray};

    #[test]
    fn test_number_coerces() {
        assert_eq!(interpolate_number("1", "3").at(0.5), Value::Number(2.0));
        assert_eq!(interpolate_number(Value::Null, 4).at(0.5), Value::Number(2.0));
    }

    #[test]
    fn test_round() {
        assert_eq!(interpolate_round(0, 10).at(0.26), Value::Number(3.0));
        assert_eq!(interpolate_round(0, 1).at(0.5), Value::Number(1.0));
    }

    #[test]
    fn test_hue_shorter_arc() {
        assert_eq!(interpolate_hue(350, 10).at(0.5), Value::Number(0.0));
        assert_eq!(interpolate_hue(10, 350).at(0.5), Value::Number(0.0));
        assert_eq!(interpolate_hue(20, 100).at(0.5), Value::Number(60.0));
        assert_eq!(interpolate_hue(f64::NAN, 90).at(0.5), Value::Number(90.0));
    }

    #[test]
    fn test_string_always_templates() {
        // "blue" is a color, but a string interpolator treats it as text
        assert_eq!(interpolate_string("red", "blue").at(0.5), Value::from("blue"));
        assert_eq!(interpolate_string(1, 3).at(0.5), Value::from("2"));
    }

    #[test]
    fn test_rgb() {
        let hsl = Color::Hsl(Hsl::new(240.0, 1.0, 0.5, 1.0));
        assert_eq!(interpolate_rgb("red", hsl).at(0.5), Value::from("rgb(128, 0, 128)"));
    }

    #[test]
    fn test_date() {
        let a = Date::from_millis(0.0);
        let b = Date::from_millis(100.0);
        assert_eq!(interpolate_date(a, b).at(0.25), Value::Date(Date::from_millis(25.0)));
    }

    #[test]
    fn test_array_and_number_array() {
        assert_eq!(interpolate_array(vec![0], vec![10]).at(0.5), Value::from(vec![5]));
        let typed = TypedArray::from_values(ElementKind::Int8, [100.0]);
        assert_eq!(
            interpolate_array(vec![0], typed).at(0.5),
            Value::TypedArray(TypedArray::Int8(vec![50]))
        );
        assert_eq!(interpolate_array(1, 2).at(0.5), Value::Array(Vec::new()));
        assert_eq!(interpolate_number_array(vec![1], vec![3]).at(0.5), Value::from(vec![2]));
    }

    #[test]
    fn test_object_ignores_numeric_reading() {
        // a boxed number would dispatch as a number; here its keys are used
        let b = Object::boxed(2).with("k", 4);
        let a = Object::new().with("k", 2);
        assert_eq!(
            interpolate_object(a, b).at(0.5),
            Value::from(Object::new().with("k", 3))
        );
    }

    #[test]
    fn test_discrete() {
        let discrete = interpolate_discrete(["a", "b", "c"]);
        assert_eq!(discrete.at(0.0), Value::from("a"));
        assert_eq!(discrete.at(0.5), Value::from("b"));
        assert_eq!(discrete.at(1.0), Value::from("c"));
    }

    #[test]
    fn test_piecewise() {
        let values = [Value::from(0), Value::from(10), Value::from(30)];
        let interpolator = piecewise(&values);
        assert_eq!(interpolator.at(0.25), Value::Number(5.0));
        assert_eq!(interpolator.at(0.75), Value::Number(20.0));

        let colors = [Value::from("red"), Value::from("green"), Value::from("blue")];
        let interpolator = piecewise_with(|a, b| interpolate_rgb(a, b), &colors);
        assert_eq!(interpolator.at(0.5), Value::from("rgb(0, 128, 0)"));

        assert_eq!(piecewise(&[Value::from(7)]).at(0.3), Value::from(7));
        assert_eq!(piecewise(&[]).at(0.3), Value::Undefined);
    }

    #[test]
    fn test_quantize() {
        let samples = quantize(&interpolate(0, 10), 3);
        assert_eq!(samples, vec![Value::from(0), Value::from(5), Value::from(10)]);
        assert!(quantize(&interpolate(0, 10), 0).is_empty());
        assert_eq!(quantize(&interpolate(0, 10), 1), vec![Value::from(0)]);
    }
}

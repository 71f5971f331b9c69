//! Sequence interpolation

use segue_core::TypedArray;

use crate::coerce::to_number;
use crate::dispatch::Builder;
use crate::interpolator::{Interpolator, Linear};
use crate::value::{code_unit, Value};

/// Element `index` of a sequence start value, if there is one. Strings and
/// boxed strings index their UTF-16 code units.
fn start_element(a: &Value, index: usize) -> Option<Value> {
    match a {
        Value::Array(items) => items.get(index).cloned(),
        Value::TypedArray(array) => array.get(index).map(Value::Number),
        Value::String(s) => code_unit(s, index),
        Value::Object(object) => object.primitive().and_then(|boxed| match boxed {
            Value::String(s) => code_unit(s, index),
            _ => None,
        }),
        _ => None,
    }
}

/// Per-index recursive dispatch over `b`'s indices. Indices past the end of
/// `a` hold `b`'s element.
pub(crate) fn build(builder: &Builder<'_>, a: &Value, b: &[Value], depth: usize) -> Interpolator {
    let items = b
        .iter()
        .enumerate()
        .map(|(index, end)| match start_element(a, index) {
            Some(start) => builder.build(&start, end, depth + 1),
            None => Interpolator::Constant(end.clone()),
        })
        .collect();
    Interpolator::Array(items)
}

/// Element-wise interpolation into a typed array of the end's kind
#[derive(Clone, Debug, PartialEq)]
pub struct TypedInterpolator {
    start: Vec<f64>,
    end: TypedArray,
}

impl TypedInterpolator {
    /// `a` is read as numbers (array elements through numeric coercion,
    /// typed elements natively) and padded with 0.
    pub fn new(a: &Value, end: TypedArray) -> Self {
        let start = match a {
            Value::Array(items) => items.iter().map(to_number).collect(),
            Value::TypedArray(array) => array.to_vec(),
            other => (0..)
                .map_while(|index| start_element(other, index))
                .map(|start| to_number(&start))
                .collect(),
        };
        Self { start, end }
    }

    /// A fresh array of the end's kind and length; each element is stored
    /// through the native write of that kind
    pub fn at(&self, t: f64) -> TypedArray {
        self.end.map_stored(|index, end| {
            let start = self.start.get(index).copied().unwrap_or(0.0);
            Linear::new(start, end).at(t)
        })
    }
}

/// Numbers only: `a`'s elements are read as numbers and padded with 0
pub(crate) fn number_array(a: &Value, b: &Value) -> Interpolator {
    match b {
        Value::TypedArray(end) => Interpolator::TypedArray(TypedInterpolator::new(a, end.clone())),
        Value::Array(end) => Interpolator::Array(
            end.iter()
                .enumerate()
                .map(|(index, end)| {
                    let start = start_element(a, index).map_or(0.0, |start| to_number(&start));
                    Interpolator::Number(Linear::new(start, to_number(end)))
                })
                .collect(),
        ),
        other => Interpolator::Constant(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_core::ElementKind;

    fn typed(kind: ElementKind, values: &[f64]) -> TypedArray {
        TypedArray::from_values(kind, values.iter().copied())
    }

    #[test]
    fn test_typed_wraps_on_write() {
        let a = Value::from(vec![0, 0]);
        let b = typed(ElementKind::Uint8, &[-2.0, 2.0]);
        let result = TypedInterpolator::new(&a, b).at(0.5);
        assert_eq!(result, TypedArray::Uint8(vec![127, 1]));

        let b = typed(ElementKind::Uint32, &[-2.0, 2.0]);
        let result = TypedInterpolator::new(&a, b).at(0.5);
        assert_eq!(result, TypedArray::Uint32(vec![2_147_483_647, 1]));
    }

    #[test]
    fn test_typed_keeps_kind_and_length() {
        let b = typed(ElementKind::Float32, &[-1.0, 1.0, 4.0]);
        let result = TypedInterpolator::new(&Value::from(vec![0]), b).at(0.5);
        assert_eq!(result.kind(), ElementKind::Float32);
        assert_eq!(result, TypedArray::Float32(vec![-0.5, 0.5, 2.0]));
    }

    #[test]
    fn test_typed_start() {
        let a = Value::from(typed(ElementKind::Int8, &[10.0, -10.0]));
        let b = typed(ElementKind::Float64, &[20.0, 10.0]);
        let result = TypedInterpolator::new(&a, b).at(0.5);
        assert_eq!(result, TypedArray::Float64(vec![15.0, 0.0]));
    }

    #[test]
    fn test_typed_non_sequence_start_is_zero() {
        let b = typed(ElementKind::Int16, &[100.0]);
        let result = TypedInterpolator::new(&Value::Null, b).at(0.25);
        assert_eq!(result, TypedArray::Int16(vec![25]));
    }

    #[test]
    fn test_string_start_indexes_code_units() {
        let config = crate::config::InterpolateConfig::default();
        let builder = Builder::new(&config);
        let b = [Value::from(1), Value::from(2), Value::from(3)];

        let Value::Array(items) = build(&builder, &Value::from("ab"), &b, 0).at(0.5) else {
            panic!("expected an array");
        };
        assert!(matches!(items[0], Value::Number(n) if n.is_nan()));
        assert!(matches!(items[1], Value::Number(n) if n.is_nan()));
        assert_eq!(items[2], Value::Number(3.0));

        let digits = build(&builder, &Value::from("13"), &b[..2], 0).at(0.5);
        assert_eq!(digits, Value::from(vec![1.0, 2.5]));

        let boxed = Value::from(crate::value::Object::boxed("13"));
        assert_eq!(build(&builder, &boxed, &b[..2], 0).at(0.5), Value::from(vec![1.0, 2.5]));
    }

    #[test]
    fn test_typed_string_start() {
        let b = typed(ElementKind::Float64, &[3.0, 5.0, 7.0]);
        let result = TypedInterpolator::new(&Value::from("13"), b).at(0.5);
        assert_eq!(result, TypedArray::Float64(vec![2.0, 4.0, 3.5]));
    }

    #[test]
    fn test_number_array_pads() {
        let interpolator = number_array(&Value::from(vec![2]), &Value::from(vec![4, 8]));
        assert_eq!(interpolator.at(0.5), Value::from(vec![3, 4]));
    }
}

//! Keyed collection interpolation

use crate::dispatch::Builder;
use crate::interpolator::Interpolator;
use crate::value::Value;

/// Enumerable keys of an end value. Functions contribute their own
/// properties; anything else has none.
pub(crate) fn enumerable_keys(b: &Value) -> Vec<String> {
    match b {
        Value::Object(object) => object.enumerable_keys(),
        Value::Function(function) => function.enumerable_keys(),
        _ => Vec::new(),
    }
}

/// Per-key recursive dispatch over `b`'s enumerable keys. A key `a` does
/// not have holds `b`'s value.
pub(crate) fn build(builder: &Builder<'_>, a: &Value, b: &Value, depth: usize) -> Interpolator {
    let entries = enumerable_keys(b)
        .into_iter()
        .filter_map(|key| {
            let end = b.property(&key)?;
            let entry = match a.property(&key) {
                Some(start) => builder.build(&start, &end, depth + 1),
                None => Interpolator::Constant(end),
            };
            Some((key, entry))
        })
        .collect();
    Interpolator::Object(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterpolateConfig;
    use crate::value::{Function, Object};

    fn object(a: Value, b: Value) -> Interpolator {
        let config = InterpolateConfig::default();
        build(&Builder::new(&config), &a, &b, 0)
    }

    #[test]
    fn test_keys_of_end() {
        let a = Value::from(Object::new().with("x", 0).with("extra", 5));
        let b = Value::from(Object::new().with("x", 10).with("y", "fixed"));
        let expected = Object::new().with("x", 5).with("y", "fixed");
        assert_eq!(object(a, b).at(0.5), Value::from(expected));
    }

    #[test]
    fn test_inherited_keys() {
        let proto = Object::new().with("inherited", 4);
        let b = Value::from(Object::with_prototype(proto).with("own", 2));
        let a = Value::from(Object::new().with("own", 0).with("inherited", 0));
        let expected = Object::new().with("own", 1).with("inherited", 2);
        assert_eq!(object(a, b).at(0.5), Value::from(expected));
    }

    #[test]
    fn test_boxed_string_end_keys_by_index() {
        let b = Value::from(Object::boxed("two"));
        let expected = Object::new().with("0", "t").with("1", "w").with("2", "o");
        assert_eq!(object(Value::from(Object::new()), b).at(0.5), Value::from(expected));
    }

    #[test]
    fn test_function_end_is_empty() {
        let f = Value::from(Function::new(|_| Value::Null));
        assert_eq!(object(Value::Null, f).at(0.5), Value::from(Object::new()));

        let g = Value::from(Function::new(|_| Value::Null).with("n", 4));
        let a = Value::from(Object::new().with("n", 2));
        assert_eq!(object(a, g).at(0.5), Value::from(Object::new().with("n", 3)));
    }

    #[test]
    fn test_array_start_answers_index_keys() {
        let a = Value::from(vec![10]);
        let b = Value::from(Object::new().with("0", 20));
        assert_eq!(object(a, b).at(0.5), Value::from(Object::new().with("0", 15)));
    }
}

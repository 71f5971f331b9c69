//! Classification of the end value

use segue_color::{parse_color, Rgb};

use crate::coerce::coerce_number;
use crate::value::Value;

/// Which interpolator an end value selects.
///
/// Classification may already compute the data the interpolator needs (the
/// parsed color, the coerced number); it is carried along so it is not
/// recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kind {
    /// Null, undefined or boolean: returned unchanged
    Constant,
    /// Color text or a structured color
    Color(Rgb),
    /// Any other text
    Template,
    Array,
    TypedArray,
    Date,
    /// A number, or a keyed collection with a numeric reading
    Number(f64),
    /// Any other keyed collection, functions included
    Object,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Constant => "constant",
            Kind::Color(_) => "color",
            Kind::Template => "template",
            Kind::Array => "array",
            Kind::TypedArray => "typed array",
            Kind::Date => "date",
            Kind::Number(_) => "number",
            Kind::Object => "object",
        }
    }
}

/// Classify `b`. The first matching rule wins.
pub fn classify(b: &Value) -> Kind {
    match b {
        Value::Undefined | Value::Null | Value::Bool(_) => Kind::Constant,
        Value::String(text) => match parse_color(text) {
            Ok(color) => Kind::Color(color.rgb()),
            Err(_) => Kind::Template,
        },
        Value::Color(color) => Kind::Color(color.rgb()),
        Value::Array(_) => Kind::Array,
        Value::TypedArray(_) => Kind::TypedArray,
        Value::Date(_) => Kind::Date,
        Value::Number(n) => Kind::Number(*n),
        Value::Object(_) | Value::Function(_) => match coerce_number(b) {
            Some(n) => Kind::Number(n),
            None => Kind::Object,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Function, Object};
    use segue_core::{Date, ElementKind, TypedArray};

    #[test]
    fn test_constants() {
        assert_eq!(classify(&Value::Null), Kind::Constant);
        assert_eq!(classify(&Value::Undefined), Kind::Constant);
        assert_eq!(classify(&Value::Bool(false)), Kind::Constant);
    }

    #[test]
    fn test_strings() {
        assert_eq!(classify(&Value::from("red")), Kind::Color(Rgb::opaque(255.0, 0.0, 0.0)));
        assert_eq!(classify(&Value::from("1px")), Kind::Template);
        assert_eq!(classify(&Value::from("")), Kind::Template);
    }

    #[test]
    fn test_structured() {
        assert_eq!(classify(&Value::from(vec![1])), Kind::Array);
        let typed = TypedArray::zeroed(ElementKind::Uint8, 2);
        assert_eq!(classify(&Value::from(typed)), Kind::TypedArray);
        assert_eq!(classify(&Value::from(Date::EPOCH)), Kind::Date);
        assert_eq!(classify(&Value::from(Rgb::opaque(0.0, 0.0, 0.0))), Kind::Color(Rgb::opaque(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_numeric_objects() {
        assert_eq!(classify(&Value::from(2)), Kind::Number(2.0));
        assert_eq!(classify(&Value::from(Object::boxed("2"))), Kind::Number(2.0));
        assert_eq!(classify(&Value::from(Object::boxed("two"))), Kind::Object);
        assert_eq!(classify(&Value::from(Object::new().with("a", 1))), Kind::Object);
    }

    #[test]
    fn test_functions_are_objects() {
        // the built-in toString is not numeric
        assert_eq!(classify(&Value::from(Function::new(|_| Value::Null))), Kind::Object);
    }
}

//! JavaScript-compatible conversions
//!
//! Dispatch and the leaf interpolators see their inputs the way a script
//! engine would: objects become primitives by calling `valueOf` and
//! `toString`, primitives become numbers through `StringToNumber`, and
//! everything renders as text the way string concatenation does.

use segue_core::{format_number, parse_number, CoercionError};

use crate::value::Value;

/// Preferred primitive type for [`to_primitive`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    /// `a + ""`; dates prefer text, everything else prefers numbers
    Default,
    Number,
    String,
}

/// Convert to a primitive value.
///
/// Keyed collections call their `valueOf` and `toString` methods (in hint
/// order) with the collection as receiver; the first primitive result wins.
/// A method that is missing, not callable, or returns a non-primitive is
/// skipped.
pub fn to_primitive(value: &Value, hint: Hint) -> Result<Value, CoercionError> {
    match value {
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Ok(value.clone())
        }
        Value::Date(date) => Ok(match hint {
            Hint::Number => Value::Number(date.millis()),
            Hint::Default | Hint::String => Value::String(date.to_iso_string()),
        }),
        Value::Color(color) => Ok(Value::String(color.to_string())),
        Value::Array(_) | Value::TypedArray(_) => Ok(Value::String(join(value))),
        Value::Object(_) | Value::Function(_) => {
            let order = match hint {
                Hint::String => ["toString", "valueOf"],
                Hint::Default | Hint::Number => ["valueOf", "toString"],
            };
            for name in order {
                if let Some(Value::Function(method)) = value.property(name) {
                    let result = method.call(value);
                    if result.is_primitive() {
                        return Ok(result);
                    }
                }
            }
            Err(CoercionError::NoPrimitive)
        }
    }
}

/// ECMAScript `ToNumber`; a failed conversion is NaN
pub fn to_number(value: &Value) -> f64 {
    match to_primitive(value, Hint::Number) {
        Ok(primitive) => primitive_to_number(&primitive),
        Err(_) => f64::NAN,
    }
}

/// ECMAScript `String(value)`
pub fn to_js_string(value: &Value) -> String {
    text_with_hint(value, Hint::String)
}

/// Text of `value + ""`
pub fn to_concat_string(value: &Value) -> String {
    text_with_hint(value, Hint::Default)
}

/// The numeric reading of a keyed collection, if it has one that is not NaN
pub fn coerce_number(value: &Value) -> Option<f64> {
    let primitive = to_primitive(value, Hint::Number).ok()?;
    let n = primitive_to_number(&primitive);
    (!n.is_nan()).then_some(n)
}

fn text_with_hint(value: &Value, hint: Hint) -> String {
    match to_primitive(value, hint) {
        Ok(primitive) => primitive_to_string(&primitive),
        // a script engine would throw here
        Err(_) => "[object Object]".to_string(),
    }
}

fn primitive_to_number(primitive: &Value) -> f64 {
    match primitive {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::String(s) => parse_number(s),
        _ => f64::NAN,
    }
}

pub(crate) fn primitive_to_string(primitive: &Value) -> String {
    match primitive {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        other => to_js_string(other),
    }
}

/// `Array.prototype.join(",")`: nullish elements render empty
fn join(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_nullish() {
                    String::new()
                } else {
                    to_js_string(item)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::TypedArray(array) => array
            .to_vec()
            .into_iter()
            .map(format_number)
            .collect::<Vec<_>>()
            .join(","),
        _ => String::new(),
    }
}

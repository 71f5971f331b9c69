//! Conversion to and from JSON

use serde_json::{Map, Number};

use crate::value::{Object, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Object>(),
            ),
        }
    }
}

fn number(n: f64) -> serde_json::Value {
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl Value {
    /// JSON rendering. Lossy: non-finite numbers and undefined become null,
    /// dates become epoch milliseconds, colors become their text, boxed
    /// primitives unwrap and functions keep only their properties.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Color(color) => serde_json::Value::String(color.to_string()),
            Value::Date(date) => number(date.millis()),
            Value::Array(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::TypedArray(array) => {
                serde_json::Value::Array(array.to_vec().into_iter().map(number).collect())
            }
            Value::Object(object) if object.primitive().is_some() => {
                object.primitive().map_or(serde_json::Value::Null, Value::to_json)
            }
            Value::Object(_) | Value::Function(_) => {
                let map: Map<String, serde_json::Value> = crate::object::enumerable_keys(self)
                    .into_iter()
                    .filter_map(|key| {
                        let value = self.property(&key)?;
                        Some((key, value.to_json()))
                    })
                    .collect();
                serde_json::Value::Object(map)
            }
        }
    }
}

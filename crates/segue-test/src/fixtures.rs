//! Value fixtures shared by the behavioural suite and benches

use segue_interpolate::{to_js_string, Function, Object, Value};

/// An object whose prototype is `proto`, or no prototype at all
pub fn noproto<K, V>(properties: impl IntoIterator<Item = (K, V)>, proto: Option<Object>) -> Value
where
    K: Into<String>,
    V: Into<Value>,
{
    let mut object = match proto {
        Some(proto) => Object::with_prototype(proto),
        None => Object::without_prototype(),
    };
    for (key, value) in properties {
        object.insert(key, value);
    }
    Value::Object(object)
}

/// Hook returning `this.foo`
pub fn foo() -> Function {
    Function::new(|this| this.property("foo").unwrap_or_default())
}

/// Hook returning `String(this.foo)`
pub fn foo_string() -> Function {
    Function::new(|this| Value::String(to_js_string(&this.property("foo").unwrap_or_default())))
}

/// A plain prototype holding one method
pub fn proto_with(name: &str, method: Function) -> Object {
    Object::new().with(name, method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_interpolate::to_number;

    #[test]
    fn test_hooks_read_receiver() {
        let value = noproto([("foo", 2)], Some(proto_with("valueOf", foo())));
        assert_eq!(to_number(&value), 2.0);

        let value = noproto([("foo", 3)], Some(proto_with("toString", foo_string())));
        assert_eq!(to_js_string(&value), "3");
    }

    #[test]
    fn test_noproto_has_no_builtins() {
        let value = noproto([("foo", 0)], None);
        assert_eq!(value.property("valueOf"), None);
    }
}

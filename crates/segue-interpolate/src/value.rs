//! Dynamic values
//!
//! [`Value`] is the dynamically typed input and output of every interpolator.
//! Keyed collections follow the JavaScript object model closely enough for
//! dispatch: properties are looked up along a prototype chain that ends in a
//! built-in root providing `valueOf` and `toString`, and only properties
//! above that root are enumerable.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use segue_color::{Color, Hsl, Rgb};
use segue_core::{Date, TypedArray};

use crate::coerce::{primitive_to_string, to_js_string};

/// A dynamically typed value
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Color(Color),
    Date(Date),
    Array(Vec<Value>),
    TypedArray(TypedArray),
    Object(Object),
    Function(Function),
}

impl Value {
    /// Whether the value is a primitive (undefined, null, boolean, number, string)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Short name of the variant, for logs
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Color(_) => "color",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::TypedArray(_) => "typed array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Property lookup, including the prototype chain.
    ///
    /// Sequences and strings answer index keys; other primitives have no
    /// properties.
    pub fn property(&self, key: &str) -> Option<Value> {
        match self {
            Value::String(s) => key.parse::<usize>().ok().and_then(|index| code_unit(s, index)),
            Value::Object(object) => object.get(key),
            Value::Function(function) => function.get(key),
            Value::Array(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index).cloned()),
            Value::TypedArray(array) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| array.get(index))
                .map(Value::Number),
            _ => None,
        }
    }
}

/// Where property lookup continues after an object's own properties
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Prototype {
    /// The universal root: non-enumerable `valueOf` and `toString`
    #[default]
    Builtin,
    /// No prototype at all
    Null,
    Custom(Arc<Object>),
}

/// A keyed collection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    properties: BTreeMap<String, Value>,
    prototype: Prototype,
    primitive: Option<Box<Value>>,
}

impl Object {
    /// Empty plain object
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty object inheriting from `prototype`
    pub fn with_prototype(prototype: Object) -> Self {
        Self {
            prototype: Prototype::Custom(Arc::new(prototype)),
            ..Self::default()
        }
    }

    /// Empty object without any prototype, not even the built-in root
    pub fn without_prototype() -> Self {
        Self {
            prototype: Prototype::Null,
            ..Self::default()
        }
    }

    /// Boxed primitive, like `new Number(2)` or `new String("2")`
    pub fn boxed(primitive: impl Into<Value>) -> Self {
        Self {
            primitive: Some(Box::new(primitive.into())),
            ..Self::default()
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    pub fn primitive(&self) -> Option<&Value> {
        self.primitive.as_deref()
    }

    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Own properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Text of a boxed string, whose code units are index properties
    fn boxed_str(&self) -> Option<&str> {
        self.primitive().and_then(Value::as_str)
    }

    /// Look up `key` on the object, then along its prototype chain
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut current = self;
        loop {
            if let Some(unit) = current
                .boxed_str()
                .zip(key.parse::<usize>().ok())
                .and_then(|(s, index)| code_unit(s, index))
            {
                return Some(unit);
            }
            if let Some(value) = current.properties.get(key) {
                return Some(value.clone());
            }
            match &current.prototype {
                Prototype::Custom(parent) => current = parent.as_ref(),
                Prototype::Builtin => return builtin(key),
                Prototype::Null => return None,
            }
        }
    }

    /// Own keys, then keys of the custom prototype chain not already seen.
    /// A boxed string lists its indices first.
    pub fn enumerable_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        let mut current = self;
        loop {
            let units = current.boxed_str().map_or(0, |s| s.encode_utf16().count());
            for index in 0..units {
                let key = index.to_string();
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            for key in current.properties.keys() {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
            match &current.prototype {
                Prototype::Custom(parent) => current = parent.as_ref(),
                Prototype::Builtin | Prototype::Null => return keys,
            }
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

type Hook = dyn Fn(&Value) -> Value + Send + Sync;

/// A callable value. It is called with the receiver (`this`) and, for
/// interpolation purposes, is otherwise a keyed collection of its own
/// properties.
#[derive(Clone)]
pub struct Function {
    hook: Arc<Hook>,
    properties: BTreeMap<String, Value>,
}

impl Function {
    pub fn new(hook: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self {
            hook: Arc::new(hook),
            properties: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Invoke with `this` as receiver
    pub fn call(&self, this: &Value) -> Value {
        (self.hook)(this)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.properties.get(key).cloned().or_else(|| builtin(key))
    }

    pub fn enumerable_keys(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        let a = Arc::as_ptr(&self.hook) as *const ();
        let b = Arc::as_ptr(&other.hook) as *const ();
        a == b && self.properties == other.properties
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

/// Methods of the built-in root
/// UTF-16 code unit `index` of `s` as a one-unit string; lone surrogates
/// are replaced
pub(crate) fn code_unit(s: &str, index: usize) -> Option<Value> {
    let unit = s.encode_utf16().nth(index)?;
    Some(Value::String(String::from_utf16_lossy(&[unit])))
}

fn builtin(key: &str) -> Option<Value> {
    static VALUE_OF: OnceLock<Function> = OnceLock::new();
    static TO_STRING: OnceLock<Function> = OnceLock::new();

    let method = match key {
        "valueOf" => VALUE_OF.get_or_init(|| Function::new(builtin_value_of)),
        "toString" => TO_STRING.get_or_init(|| Function::new(builtin_to_string)),
        _ => return None,
    };
    Some(Value::Function(method.clone()))
}

fn builtin_value_of(this: &Value) -> Value {
    match this {
        Value::Object(object) => object.primitive().cloned().unwrap_or_else(|| this.clone()),
        _ => this.clone(),
    }
}

fn builtin_to_string(this: &Value) -> Value {
    let text = match this {
        Value::Object(object) => match object.primitive() {
            Some(primitive) => primitive_to_string(primitive),
            None => "[object Object]".to_string(),
        },
        Value::Function(_) => "function () { [native code] }".to_string(),
        other => to_js_string(other),
    };
    Value::String(text)
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::Number(n as f64)
            }
        }
    )*};
}

value_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<Rgb> for Value {
    fn from(rgb: Rgb) -> Self {
        Value::Color(Color::Rgb(rgb))
    }
}

impl From<Hsl> for Value {
    fn from(hsl: Hsl) -> Self {
        Value::Color(Color::Hsl(hsl))
    }
}

impl From<Date> for Value {
    fn from(date: Date) -> Self {
        Value::Date(date)
    }
}

impl From<TypedArray> for Value {
    fn from(array: TypedArray) -> Self {
        Value::TypedArray(array)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_js_string(self))
    }
}

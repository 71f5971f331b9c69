//! Segue Fuzz - Structured inputs for the fuzz targets
//!
//! `arbitrary` builds [`FuzzValue`] trees from raw fuzzer bytes; they are
//! turned into [`Value`]s with hooks that are well behaved (they never
//! recurse into coercion of their own receiver).

use arbitrary::{Arbitrary, Unstructured};

use segue_core::{Date, ElementKind, TypedArray};
use segue_interpolate::{Function, Object, Value};

/// Nesting limit when building values
pub const MAX_DEPTH: usize = 8;

#[derive(Arbitrary, Clone, Copy, Debug)]
pub enum FuzzKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
}

impl From<FuzzKind> for ElementKind {
    fn from(kind: FuzzKind) -> Self {
        match kind {
            FuzzKind::Int8 => ElementKind::Int8,
            FuzzKind::Uint8 => ElementKind::Uint8,
            FuzzKind::Uint8Clamped => ElementKind::Uint8Clamped,
            FuzzKind::Int16 => ElementKind::Int16,
            FuzzKind::Uint16 => ElementKind::Uint16,
            FuzzKind::Int32 => ElementKind::Int32,
            FuzzKind::Uint32 => ElementKind::Uint32,
            FuzzKind::Float32 => ElementKind::Float32,
            FuzzKind::Float64 => ElementKind::Float64,
        }
    }
}

/// What a generated `valueOf` or `toString` hook returns
#[derive(Arbitrary, Clone, Debug)]
pub enum FuzzHook {
    /// The receiver itself (a non-primitive)
    Receiver,
    Number(f64),
    Text(String),
    /// The receiver's `foo` property
    Foo,
}

#[derive(Arbitrary, Clone, Debug)]
pub enum FuzzValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(f64),
    Array(Vec<FuzzValue>),
    Typed(FuzzKind, Vec<f64>),
    Object {
        properties: Vec<(String, FuzzValue)>,
        value_of: Option<FuzzHook>,
        to_string: Option<FuzzHook>,
        null_prototype: bool,
    },
    Boxed(Box<FuzzValue>),
    Function(Vec<(String, FuzzValue)>),
}

fn hook(kind: FuzzHook) -> Function {
    match kind {
        FuzzHook::Receiver => Function::new(|this| this.clone()),
        FuzzHook::Number(n) => Function::new(move |_| Value::Number(n)),
        FuzzHook::Text(s) => Function::new(move |_| Value::String(s.clone())),
        FuzzHook::Foo => Function::new(|this| this.property("foo").unwrap_or_default()),
    }
}

impl FuzzValue {
    /// Build the value, cutting nesting off at [`MAX_DEPTH`]
    pub fn to_value(&self) -> Value {
        self.build(0)
    }

    fn build(&self, depth: usize) -> Value {
        if depth > MAX_DEPTH {
            return Value::Null;
        }
        let nested = |value: &FuzzValue| value.build(depth + 1);

        match self {
            FuzzValue::Undefined => Value::Undefined,
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Bool(*b),
            FuzzValue::Number(n) => Value::Number(*n),
            FuzzValue::Text(s) => Value::String(s.clone()),
            FuzzValue::Date(ms) => Value::Date(Date::from_millis(*ms)),
            FuzzValue::Array(items) => Value::Array(items.iter().map(nested).collect()),
            FuzzValue::Typed(kind, values) => {
                Value::TypedArray(TypedArray::from_values((*kind).into(), values.iter().copied()))
            }
            FuzzValue::Object {
                properties,
                value_of,
                to_string,
                null_prototype,
            } => {
                let mut proto = if *null_prototype {
                    Object::without_prototype()
                } else {
                    Object::new()
                };
                if let Some(kind) = value_of {
                    proto.insert("valueOf", hook(kind.clone()));
                }
                if let Some(kind) = to_string {
                    proto.insert("toString", hook(kind.clone()));
                }
                let mut object = Object::with_prototype(proto);
                for (key, value) in properties {
                    object.insert(key.clone(), nested(value));
                }
                Value::Object(object)
            }
            FuzzValue::Boxed(inner) => match nested(inner) {
                primitive if primitive.is_primitive() => Value::Object(Object::boxed(primitive)),
                _ => Value::Object(Object::new()),
            },
            FuzzValue::Function(properties) => {
                let mut function = Function::new(|this| this.clone());
                for (key, value) in properties {
                    function = function.with(key.clone(), nested(value));
                }
                Value::Function(function)
            }
        }
    }
}

/// A start/end pair and sample points
#[derive(Arbitrary, Debug)]
pub struct DispatchInput {
    pub a: FuzzValue,
    pub b: FuzzValue,
    pub samples: Vec<f64>,
}

/// Decode a [`DispatchInput`] from raw fuzzer bytes
pub fn dispatch_input(data: &[u8]) -> arbitrary::Result<DispatchInput> {
    DispatchInput::arbitrary(&mut Unstructured::new(data))
}

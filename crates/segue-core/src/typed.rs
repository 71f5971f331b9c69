//! Typed numeric arrays
//!
//! A typed array is a fixed-width numeric sequence. Writing a real number
//! into it goes through the element kind's native store: integer kinds wrap
//! modulo 2^bits after truncation, `Uint8Clamped` clamps and rounds half to
//! even, `Float32` rounds to the nearest representable value. Interpolation
//! relies on these stores instead of clamping on its own.

use std::fmt;

use crate::{SegueError, SegueResult};

/// Element kind of a typed array
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
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

impl ElementKind {
    /// Size of one element in bytes
    pub fn width(self) -> usize {
        match self {
            ElementKind::Int8 | ElementKind::Uint8 | ElementKind::Uint8Clamped => 1,
            ElementKind::Int16 | ElementKind::Uint16 => 2,
            ElementKind::Int32 | ElementKind::Uint32 | ElementKind::Float32 => 4,
            ElementKind::Float64 => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Int8 => "Int8",
            ElementKind::Uint8 => "Uint8",
            ElementKind::Uint8Clamped => "Uint8Clamped",
            ElementKind::Int16 => "Int16",
            ElementKind::Uint16 => "Uint16",
            ElementKind::Int32 => "Int32",
            ElementKind::Uint32 => "Uint32",
            ElementKind::Float32 => "Float32",
            ElementKind::Float64 => "Float64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric element with native store semantics
pub trait Element: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    const KIND: ElementKind;

    /// Store a real number the way a native typed-array write would
    fn store(value: f64) -> Self;

    /// Read the element back as a real number
    fn load(self) -> f64;

    fn write_le(self, out: &mut Vec<u8>);

    fn read_le(bytes: &[u8]) -> Self;
}

/// Truncate toward zero and reduce modulo 2^bits; non-finite values become 0
#[inline]
fn wrap_bits(value: f64, bits: i32) -> u64 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(2f64.powi(bits)) as u64
}

macro_rules! wrapping_element {
    ($ty:ty, $kind:ident, $bits:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            #[inline]
            fn store(value: f64) -> Self {
                wrap_bits(value, $bits) as $ty
            }

            #[inline]
            fn load(self) -> f64 {
                self as f64
            }

            fn write_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            fn read_le(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                <$ty>::from_le_bytes(raw)
            }
        }
    };
}

wrapping_element!(i8, Int8, 8);
wrapping_element!(u8, Uint8, 8);
wrapping_element!(i16, Int16, 16);
wrapping_element!(u16, Uint16, 16);
wrapping_element!(i32, Int32, 32);
wrapping_element!(u32, Uint32, 32);

/// Byte that saturates instead of wrapping on store
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Clamped(pub u8);

impl Element for Clamped {
    const KIND: ElementKind = ElementKind::Uint8Clamped;

    fn store(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Clamped(0);
        }
        if value >= 255.0 {
            return Clamped(255);
        }
        let floor = value.floor();
        let rounded = match value - floor {
            d if d < 0.5 => floor,
            d if d > 0.5 => floor + 1.0,
            _ if floor % 2.0 == 0.0 => floor,
            _ => floor + 1.0,
        };
        Clamped(rounded as u8)
    }

    #[inline]
    fn load(self) -> f64 {
        self.0 as f64
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.push(self.0);
    }

    fn read_le(bytes: &[u8]) -> Self {
        Clamped(bytes[0])
    }
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float32;

    #[inline]
    fn store(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn load(self) -> f64 {
        self as f64
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        f32::from_le_bytes(raw)
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float64;

    #[inline]
    fn store(value: f64) -> Self {
        value
    }

    #[inline]
    fn load(self) -> f64 {
        self
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        f64::from_le_bytes(raw)
    }
}

/// Fixed-width numeric sequence
#[derive(Clone, Debug, PartialEq)]
pub enum TypedArray {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Uint8Clamped(Vec<Clamped>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// Run `$body` with `$v` bound to the inner vector, whatever the kind
macro_rules! with_elements {
    ($array:expr, $v:ident => $body:expr) => {
        match $array {
            TypedArray::Int8($v) => $body,
            TypedArray::Uint8($v) => $body,
            TypedArray::Uint8Clamped($v) => $body,
            TypedArray::Int16($v) => $body,
            TypedArray::Uint16($v) => $body,
            TypedArray::Int32($v) => $body,
            TypedArray::Uint32($v) => $body,
            TypedArray::Float32($v) => $body,
            TypedArray::Float64($v) => $body,
        }
    };
}

/// Rebuild a typed array of the same kind as `$array`, with `$v` bound to
/// the inner vector and `$body` producing the new vector
macro_rules! rebuild {
    ($array:expr, $v:ident => $body:expr) => {
        match $array {
            TypedArray::Int8($v) => TypedArray::Int8($body),
            TypedArray::Uint8($v) => TypedArray::Uint8($body),
            TypedArray::Uint8Clamped($v) => TypedArray::Uint8Clamped($body),
            TypedArray::Int16($v) => TypedArray::Int16($body),
            TypedArray::Uint16($v) => TypedArray::Uint16($body),
            TypedArray::Int32($v) => TypedArray::Int32($body),
            TypedArray::Uint32($v) => TypedArray::Uint32($body),
            TypedArray::Float32($v) => TypedArray::Float32($body),
            TypedArray::Float64($v) => TypedArray::Float64($body),
        }
    };
}

fn store_all<T: Element>(values: impl IntoIterator<Item = f64>) -> Vec<T> {
    values.into_iter().map(T::store).collect()
}

impl TypedArray {
    /// Allocate an array of `kind` and store every value through its native write
    pub fn from_values(kind: ElementKind, values: impl IntoIterator<Item = f64>) -> Self {
        match kind {
            ElementKind::Int8 => TypedArray::Int8(store_all(values)),
            ElementKind::Uint8 => TypedArray::Uint8(store_all(values)),
            ElementKind::Uint8Clamped => TypedArray::Uint8Clamped(store_all(values)),
            ElementKind::Int16 => TypedArray::Int16(store_all(values)),
            ElementKind::Uint16 => TypedArray::Uint16(store_all(values)),
            ElementKind::Int32 => TypedArray::Int32(store_all(values)),
            ElementKind::Uint32 => TypedArray::Uint32(store_all(values)),
            ElementKind::Float32 => TypedArray::Float32(store_all(values)),
            ElementKind::Float64 => TypedArray::Float64(store_all(values)),
        }
    }

    /// Zero-filled array of `kind` and `len`
    pub fn zeroed(kind: ElementKind, len: usize) -> Self {
        Self::from_values(kind, std::iter::repeat(0.0).take(len))
    }

    /// Decode little-endian bytes
    pub fn from_le_bytes(kind: ElementKind, bytes: &[u8]) -> SegueResult<Self> {
        fn decode<T: Element>(bytes: &[u8]) -> Vec<T> {
            bytes.chunks_exact(T::KIND.width()).map(T::read_le).collect()
        }

        if bytes.len() % kind.width() != 0 {
            return Err(SegueError::TypedArrayLength {
                kind,
                len: bytes.len(),
            });
        }

        Ok(match kind {
            ElementKind::Int8 => TypedArray::Int8(decode(bytes)),
            ElementKind::Uint8 => TypedArray::Uint8(decode(bytes)),
            ElementKind::Uint8Clamped => TypedArray::Uint8Clamped(decode(bytes)),
            ElementKind::Int16 => TypedArray::Int16(decode(bytes)),
            ElementKind::Uint16 => TypedArray::Uint16(decode(bytes)),
            ElementKind::Int32 => TypedArray::Int32(decode(bytes)),
            ElementKind::Uint32 => TypedArray::Uint32(decode(bytes)),
            ElementKind::Float32 => TypedArray::Float32(decode(bytes)),
            ElementKind::Float64 => TypedArray::Float64(decode(bytes)),
        })
    }

    /// Encode as little-endian bytes
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * self.kind().width());
        with_elements!(self, v => v.iter().for_each(|e| e.write_le(&mut out)));
        out
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            TypedArray::Int8(_) => ElementKind::Int8,
            TypedArray::Uint8(_) => ElementKind::Uint8,
            TypedArray::Uint8Clamped(_) => ElementKind::Uint8Clamped,
            TypedArray::Int16(_) => ElementKind::Int16,
            TypedArray::Uint16(_) => ElementKind::Uint16,
            TypedArray::Int32(_) => ElementKind::Int32,
            TypedArray::Uint32(_) => ElementKind::Uint32,
            TypedArray::Float32(_) => ElementKind::Float32,
            TypedArray::Float64(_) => ElementKind::Float64,
        }
    }

    pub fn len(&self) -> usize {
        with_elements!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `index` read as a real number
    pub fn get(&self, index: usize) -> Option<f64> {
        with_elements!(self, v => v.get(index).map(|e| e.load()))
    }

    /// All elements read as real numbers
    pub fn to_vec(&self) -> Vec<f64> {
        with_elements!(self, v => v.iter().map(|e| e.load()).collect())
    }

    /// Allocate a new array of the same kind and length, storing
    /// `f(index, element)` through the native write of each slot
    pub fn map_stored(&self, f: impl Fn(usize, f64) -> f64) -> TypedArray {
        rebuild!(self, v => v
            .iter()
            .enumerate()
            .map(|(i, e)| Element::store(f(i, e.load())))
            .collect())
    }
}

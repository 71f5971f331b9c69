//! Error types for Segue

use thiserror::Error;

use crate::ElementKind;

/// Conversion of a value to a primitive failed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionError {
    /// Neither `valueOf` nor `toString` produced a primitive
    #[error("Cannot convert value to a primitive")]
    NoPrimitive,
}

/// Core Segue errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegueError {
    #[error("Buffer of {len} bytes is not a whole number of {kind} elements")]
    TypedArrayLength { kind: ElementKind, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

/// Result type for Segue operations
pub type SegueResult<T> = Result<T, SegueError>;

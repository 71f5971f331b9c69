//! Segue Core - Fundamental types and primitives
//!
//! This crate defines the primitives shared by every Segue crate:
//! - Number text in ECMAScript form (format and parse)
//! - Date values as epoch milliseconds
//! - Typed numeric arrays with native write semantics
//! - Error types

pub mod date;
pub mod error;
pub mod numeric;
pub mod typed;

pub use date::*;
pub use error::*;
pub use numeric::*;
pub use typed::*;

//! Segue Color - the color collaborator
//!
//! Recognizes CSS color text and turns it into a channel tuple, and renders
//! channel tuples back into `rgb(...)` / `rgba(...)` text:
//! - Hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
//! - `rgb()` / `rgba()` with integer or percentage channels
//! - `hsl()` / `hsla()`
//! - CSS named colors and `transparent`

pub mod model;
mod named;
pub mod parse;

pub use model::*;
pub use parse::*;

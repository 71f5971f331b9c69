//! Segue Interpolate - Type-dispatching interpolation
//!
//! Given a start value `a` and an end value `b`, [`interpolate`] builds a
//! function of `t` that blends one into the other. The kind of blend is
//! chosen from `b`:
//! - null, undefined and booleans are held constant
//! - color text and structured colors blend in RGB
//! - other text interpolates the numbers embedded in it
//! - arrays and keyed collections recurse per element and per key
//! - typed arrays blend element-wise and store through their element kind
//! - dates blend their timestamps; numbers (and numeric objects) blend linearly
//!
//! ```
//! use segue_interpolate::{interpolate, Value};
//!
//! let f = interpolate(vec!["red", "10px"], vec!["blue", "20px"]);
//! assert_eq!(f.at(0.5), Value::from(vec!["rgb(128, 0, 128)", "15px"]));
//! ```

mod array;
pub mod coerce;
mod color;
pub mod config;
pub mod dispatch;
pub mod interpolator;
#[cfg(feature = "json")]
mod json;
pub mod kind;
mod object;
pub mod specialized;
mod template;
pub mod value;

pub use array::TypedInterpolator;
pub use coerce::*;
pub use color::{coerce_rgb, RgbInterpolator};
pub use config::*;
pub use dispatch::{interpolate, interpolate_with};
pub use interpolator::*;
pub use kind::*;
pub use specialized::*;
pub use template::Template;
pub use value::*;

pub use segue_color::{parse_color, Color, ColorParseError, Hsl, Rgb};
pub use segue_core::{Date, ElementKind, SegueError, SegueResult, TypedArray};

//! End-to-end behavioural suite
//!
//! Verifies dispatch through the public entry point:
//! - Text, color text and structured colors
//! - Arrays, typed arrays and keyed collections
//! - Numbers, numeric objects and dates
//! - Constants
//! - Objects with custom or missing prototypes

use segue_interpolate::{interpolate, Value};

/// Sample the interpolator from `a` to `b` halfway
pub fn midpoint(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    interpolate(a, b).at(0.5)
}

//! Type dispatch
//!
//! The end value decides which interpolator is built (see [`classify`]);
//! the start value is then read in whatever way that interpolator needs.

use tracing::{trace, warn};

use crate::array::{self, TypedInterpolator};
use crate::coerce::{to_concat_string, to_number};
use crate::color;
use crate::config::InterpolateConfig;
use crate::interpolator::{Interpolator, Linear};
use crate::kind::{classify, Kind};
use crate::object;
use crate::template;
use crate::value::Value;

/// Recursive interpolator construction under one configuration
pub(crate) struct Builder<'c> {
    config: &'c InterpolateConfig,
}

impl<'c> Builder<'c> {
    pub(crate) fn new(config: &'c InterpolateConfig) -> Self {
        Self { config }
    }

    pub(crate) fn build(&self, a: &Value, b: &Value, depth: usize) -> Interpolator {
        if depth >= self.config.max_depth {
            warn!(depth, max_depth = self.config.max_depth, "nesting too deep, holding end value");
            return Interpolator::Constant(b.clone());
        }

        let kind = classify(b);
        trace!(kind = kind.name(), start = a.type_name(), depth, "dispatch");

        match kind {
            Kind::Constant => Interpolator::Constant(b.clone()),
            Kind::Color(end) => color::build(a, end),
            Kind::Template => {
                let end = b.as_str().unwrap_or_default();
                template::build(&to_concat_string(a), end, self.config.template_mismatch)
            }
            Kind::Array => array::build(self, a, b.as_array().unwrap_or_default(), depth),
            Kind::TypedArray => match b {
                Value::TypedArray(end) => {
                    Interpolator::TypedArray(TypedInterpolator::new(a, end.clone()))
                }
                _ => Interpolator::Constant(b.clone()),
            },
            Kind::Date => match b {
                Value::Date(end) => Interpolator::Date(Linear::new(to_number(a), end.millis())),
                _ => Interpolator::Constant(b.clone()),
            },
            Kind::Number(end) => Interpolator::Number(Linear::new(to_number(a), end)),
            Kind::Object => object::build(self, a, b, depth),
        }
    }
}

/// Build the interpolator from `a` to `b`, choosing its kind from `b`.
///
/// ```
/// use segue_interpolate::{interpolate, Value};
///
/// assert_eq!(interpolate(1, 2).at(0.5), Value::Number(1.5));
/// assert_eq!(interpolate("red", "blue").at(0.5), Value::from("rgb(128, 0, 128)"));
/// assert_eq!(interpolate(" 1", " 2").at(0.5), Value::from(" 1.5"));
/// ```
pub fn interpolate(a: impl Into<Value>, b: impl Into<Value>) -> Interpolator {
    interpolate_with(a, b, &InterpolateConfig::default())
}

/// [`interpolate`] under an explicit configuration
pub fn interpolate_with(
    a: impl Into<Value>,
    b: impl Into<Value>,
    config: &InterpolateConfig,
) -> Interpolator {
    Builder::new(config).build(&a.into(), &b.into(), 0)
}

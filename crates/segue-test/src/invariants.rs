//! Invariant checking over random start/end pairs
//!
//! Checks:
//! - Sampling is repeatable
//! - The sample has the shape the end value selects
//! - Constants ignore the start value and `t`
//! - Numbers land on the end value at `t = 1`

use segue_interpolate::{classify, interpolate, to_number, Kind, Value};
use tracing::debug;

use crate::generator::{GeneratorConfig, ValueGenerator};

/// Sample points, including extrapolation
const SAMPLES: &[f64] = &[0.0, 0.25, 0.5, 1.0, -0.5, 1.5];

/// Outcome of an invariant run
#[derive(Clone, Debug, Default)]
pub struct InvariantReport {
    /// Pairs checked
    pub cases: usize,
    /// Human-readable violations
    pub violations: Vec<String>,
}

impl InvariantReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Generate `cases` pairs and check every invariant on each
pub fn check_invariants(config: GeneratorConfig, cases: usize) -> InvariantReport {
    let mut generator = ValueGenerator::new(config);
    let mut report = InvariantReport::default();

    for case in 0..cases {
        let (a, b) = generator.pair();
        report.cases += 1;
        if let Err(violation) = check_pair(&a, &b) {
            debug!(case, %violation, "invariant violated");
            report.violations.push(format!("case {}: {}", case, violation));
        }
    }

    report
}

/// Check one pair; the error names the broken invariant
pub fn check_pair(a: &Value, b: &Value) -> Result<(), String> {
    let interpolator = interpolate(a, b);

    for &t in SAMPLES {
        let first = interpolator.at(t);
        let second = interpolator.at(t);
        // NaN is not equal to itself, so compare renderings
        if format!("{:?}", first) != format!("{:?}", second) {
            return Err(format!("not repeatable at t={}", t));
        }
        check_shape(b, &first).map_err(|e| format!("{} at t={}", e, t))?;
    }

    if let Kind::Number(end) = classify(b) {
        if to_number(a).is_finite() && end.is_finite() && interpolator.at(1.0) != Value::Number(end) {
            return Err(format!("number does not reach {} at t=1", end));
        }
    }

    Ok(())
}

fn check_shape(b: &Value, sample: &Value) -> Result<(), String> {
    let ok = match (classify(b), sample) {
        (Kind::Constant, sample) => sample == b,
        (Kind::Color(_), Value::String(text)) => text.starts_with("rgb(") || text.starts_with("rgba("),
        (Kind::Template, Value::String(_)) => true,
        (Kind::Array, Value::Array(items)) => Some(items.len()) == b.as_array().map(<[Value]>::len),
        (Kind::TypedArray, Value::TypedArray(array)) => match b {
            Value::TypedArray(end) => array.kind() == end.kind() && array.len() == end.len(),
            _ => false,
        },
        (Kind::Date, Value::Date(_)) => true,
        (Kind::Number(_), Value::Number(_)) => true,
        (Kind::Object, Value::Object(object)) => match b {
            Value::Object(end) => {
                let keys: Vec<&String> = object.iter().map(|(key, _)| key).collect();
                let mut expected = end.enumerable_keys();
                expected.sort();
                keys.len() == expected.len() && keys.iter().zip(&expected).all(|(k, e)| *k == e)
            }
            _ => true,
        },
        _ => false,
    };

    if ok {
        Ok(())
    } else {
        Err(format!(
            "{} end produced {}",
            classify(b).name(),
            sample.type_name()
        ))
    }
}

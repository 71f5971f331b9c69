//! Random value generation
//!
//! Produces start/end pairs of matching shape (numbers with numbers, colors
//! with colors, arrays and objects recursively) plus a share of mismatched
//! pairs, for invariant checking and benches.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use segue_core::{Date, ElementKind, TypedArray};
use segue_interpolate::{Object, Value};

const COLORS: &[&str] = &[
    "red",
    "steelblue",
    "#0f0",
    "#336699",
    "#33669980",
    "rgb(10, 20, 30)",
    "rgba(10%, 20%, 30%, 0.5)",
    "hsl(120, 50%, 50%)",
    "transparent",
];

const UNITS: &[&str] = &["px", "em", "%", "deg", ""];

const ELEMENT_KINDS: &[ElementKind] = &[
    ElementKind::Int8,
    ElementKind::Uint8,
    ElementKind::Uint8Clamped,
    ElementKind::Int16,
    ElementKind::Uint16,
    ElementKind::Int32,
    ElementKind::Uint32,
    ElementKind::Float32,
    ElementKind::Float64,
];

/// Generator configuration
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Maximum nesting of arrays and objects
    pub max_depth: usize,
    /// Maximum elements per array or keys per object
    pub max_width: usize,
    /// Probability that a pair has unrelated shapes (0.0 - 1.0)
    pub mismatch_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_depth: 3,
            max_width: 4,
            mismatch_prob: 0.1,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Flat values only
    pub fn flat() -> Self {
        GeneratorConfig {
            max_depth: 0,
            ..Default::default()
        }
    }

    /// Deep, wide trees
    pub fn heavy() -> Self {
        GeneratorConfig {
            max_depth: 6,
            max_width: 8,
            mismatch_prob: 0.2,
            seed: 42,
        }
    }
}

/// Seeded generator of start/end value pairs
pub struct ValueGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl ValueGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// A start/end pair
    pub fn pair(&mut self) -> (Value, Value) {
        if self.rng.gen_bool(self.config.mismatch_prob) {
            let a = self.value(self.config.max_depth);
            let b = self.value(self.config.max_depth);
            return (a, b);
        }
        self.matched(self.config.max_depth)
    }

    /// A single value of any shape
    pub fn value(&mut self, depth: usize) -> Value {
        self.matched(depth).1
    }

    fn matched(&mut self, depth: usize) -> (Value, Value) {
        let choices = if depth == 0 { 7 } else { 9 };
        match self.rng.gen_range(0..choices) {
            0 => {
                let b = match self.rng.gen_range(0..3) {
                    0 => Value::Null,
                    1 => Value::Undefined,
                    _ => Value::Bool(self.rng.gen()),
                };
                (self.number(), b)
            }
            1 => (self.number(), self.number()),
            2 => (self.color(), self.color()),
            3 => {
                let unit = UNITS.choose(&mut self.rng).copied().unwrap_or("");
                (self.template(unit), self.template(unit))
            }
            4 => (self.date(), self.date()),
            5 => {
                let kind = ELEMENT_KINDS.choose(&mut self.rng).copied().unwrap_or(ElementKind::Float64);
                let len = self.rng.gen_range(0..=self.config.max_width);
                let a: Vec<Value> = (0..len).map(|_| self.number()).collect();
                let b = TypedArray::from_values(kind, (0..len).map(|_| self.rng.gen_range(-300.0..300.0)));
                (Value::Array(a), Value::TypedArray(b))
            }
            6 => (Value::from(Object::boxed(self.rng.gen_range(-10i32..10))), self.number()),
            7 => {
                let len = self.rng.gen_range(0..=self.config.max_width);
                let (a, b): (Vec<Value>, Vec<Value>) = (0..len).map(|_| self.matched(depth - 1)).unzip();
                // a shorter start exercises the missing-element path
                let keep = self.rng.gen_range(0..=a.len());
                (Value::Array(a[..keep].to_vec()), Value::Array(b))
            }
            _ => {
                let len = self.rng.gen_range(0..=self.config.max_width);
                let mut a = Object::new();
                let mut b = Object::new();
                for i in 0..len {
                    let key = format!("k{}", i);
                    let (start, end) = self.matched(depth - 1);
                    if self.rng.gen_bool(0.8) {
                        a.insert(key.clone(), start);
                    }
                    b.insert(key, end);
                }
                (Value::Object(a), Value::Object(b))
            }
        }
    }

    fn number(&mut self) -> Value {
        Value::Number(self.rng.gen_range(-1000.0..1000.0))
    }

    fn color(&mut self) -> Value {
        Value::from(COLORS.choose(&mut self.rng).copied().unwrap_or("black"))
    }

    fn template(&mut self, unit: &str) -> Value {
        let x: i32 = self.rng.gen_range(-100..100);
        let y: f64 = self.rng.gen_range(0.0..10.0);
        Value::String(format!("translate({}{}, {:.2}{})", x, unit, y, unit))
    }

    fn date(&mut self) -> Value {
        let days = self.rng.gen_range(0u32..20_000) as f64;
        Value::Date(Date::from_millis(days * 86_400_000.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debug_pairs(config: GeneratorConfig, n: usize) -> Vec<String> {
        let mut generator = ValueGenerator::new(config);
        (0..n).map(|_| format!("{:?}", generator.pair())).collect()
    }

    #[test]
    fn test_seeded_is_deterministic() {
        assert_eq!(debug_pairs(GeneratorConfig::default(), 20), debug_pairs(GeneratorConfig::default(), 20));
    }

    #[test]
    fn test_flat_has_no_nesting() {
        let mut generator = ValueGenerator::new(GeneratorConfig::flat());
        for _ in 0..200 {
            let (_, b) = generator.pair();
            assert!(!matches!(b, Value::Array(_) | Value::Object(_)));
        }
    }
}

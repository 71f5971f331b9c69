//! String templates
//!
//! Numbers embedded in text are interpolated while the text around them is
//! kept: `"10px"` to `"20px"` passes through `"15px"`. Literal text comes from
//! the end string; each pair of differing numeric tokens becomes a slot.

use segue_core::{find_decimal, format_number, parse_number};
use tracing::debug;

use crate::config::TemplateMismatch;
use crate::interpolator::{Interpolator, Linear};
use crate::value::Value;

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Literal(String),
    Slot(Linear),
}

/// Literal text interleaved with numeric slots
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Number of numeric slots
    pub fn slots(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Slot(_)))
            .count()
    }

    pub fn render(&self, t: f64) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(linear) => out.push_str(&format_number(linear.at(t))),
            }
        }
        out
    }
}

/// Build the template interpolator from `a` to `b`.
///
/// Degenerates to the constant `b` when no numeric token differs, or when the
/// token counts differ and `mismatch` is [`TemplateMismatch::Constant`].
pub fn build(a: &str, b: &str, mismatch: TemplateMismatch) -> Interpolator {
    let constant = || Interpolator::Constant(Value::String(b.to_string()));

    let mut segments = Vec::new();
    let mut literal = String::new();
    let (mut ai, mut bi) = (0, 0);

    loop {
        match (find_decimal(a, ai), find_decimal(b, bi)) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => {
                literal.push_str(&b[bi..b_start]);
                let (token_a, token_b) = (&a[a_start..a_end], &b[b_start..b_end]);
                if token_a == token_b {
                    literal.push_str(token_b);
                } else {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(Linear::new(
                        parse_number(token_a),
                        parse_number(token_b),
                    )));
                }
                ai = a_end;
                bi = b_end;
            }
            (None, None) => break,
            _ => match mismatch {
                TemplateMismatch::Constant => {
                    debug!(a, b, "numeric token counts differ, holding end string");
                    return constant();
                }
                TemplateMismatch::PairPrefix => break,
            },
        }
    }

    literal.push_str(&b[bi..]);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    let template = Template { segments };
    if template.slots() == 0 {
        return constant();
    }
    Interpolator::Template(template)
}

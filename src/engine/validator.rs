//! Feature Validator
//!
//! Turns a weakly-typed JSON sequence into a `FeatureVector`.
//! Numbers are taken as-is, strings are parsed as decimal floats after
//! trimming surrounding whitespace. Anything else is rejected.

use serde_json::Value;

use super::error::ValidationError;
use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};
use super::types::FeatureVector;

/// Check shape and numeric-ness, preserving input order.
pub fn validate(raw: &[Value]) -> Result<FeatureVector, ValidationError> {
    if raw.len() != FEATURE_COUNT {
        return Err(ValidationError::Shape {
            expected: FEATURE_COUNT,
            actual: raw.len(),
        });
    }

    let mut values = [0.0f64; FEATURE_COUNT];
    for (index, item) in raw.iter().enumerate() {
        values[index] = coerce(item).ok_or_else(|| ValidationError::NotNumeric {
            index,
            feature: FEATURE_LAYOUT[index],
            value: display_raw(item),
        })?;
    }

    FeatureVector::new(values)
}

/// Coerce one element to a finite f64
fn coerce(item: &Value) -> Option<f64> {
    let parsed = match item {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    // out-of-range literals such as 1e400 parse to infinity
    parsed.filter(|v| v.is_finite())
}

fn display_raw(item: &Value) -> String {
    match item {
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}

//! Heuristic Scorer
//!
//! Input: FeatureVector
//! Output: predicted ClassLabel + normalized ProbabilityDistribution
//!
//! Deterministic: the same vector always yields bit-identical output.

use super::error::{EngineError, EngineResult};
use super::rules::{BASE_WEIGHTS, RULES};
use super::types::{ClassLabel, FeatureVector, ProbabilityDistribution};

/// Scorer output
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub label: ClassLabel,
    pub probabilities: ProbabilityDistribution,
    /// Names of the rules that fired, in table order
    pub fired_rules: Vec<&'static str>,
}

/// Unnormalized weights after every applicable rule has added its bonus
pub fn raw_weights(vector: &FeatureVector) -> ([f64; 3], Vec<&'static str>) {
    let mut weights = BASE_WEIGHTS;
    let mut fired = Vec::new();

    for rule in RULES.iter().filter(|r| (r.applies)(vector)) {
        weights[rule.target.index()] += rule.bonus;
        fired.push(rule.name);
    }

    (weights, fired)
}

/// Score a validated vector
pub fn score(vector: &FeatureVector) -> EngineResult<Scored> {
    let (weights, fired_rules) = raw_weights(vector);

    let probabilities = ProbabilityDistribution::normalize(weights).ok_or_else(|| {
        EngineError::Internal(format!("weights {:?} did not normalize", weights))
    })?;
    let label = probabilities.argmax();

    tracing::debug!(
        fired = ?fired_rules,
        confirmed = probabilities.confirmed,
        candidate = probabilities.candidate,
        false_positive = probabilities.false_positive,
        label = %label,
        "scored feature vector"
    );

    Ok(Scored {
        label,
        probabilities,
        fired_rules,
    })
}

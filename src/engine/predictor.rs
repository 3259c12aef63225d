//! Predictor
//!
//! `Predictor` is the replaceable scoring backend. The heuristic
//! implementation chains scorer and explainer; a trained-ensemble client
//! can implement the same trait without touching validation or the
//! HTTP contract.

use serde_json::Value;

use super::error::{EngineError, EngineResult};
use super::explainer::{explain, Attributor, RandomAttributor};
use super::scorer::score;
use super::types::{FeatureVector, PredictionResult};
use super::validator::validate;

/// Scoring backend capability
pub trait Predictor: Send + Sync {
    /// Short identifier reported by `/health`
    fn name(&self) -> &str;

    fn predict(&self, vector: &FeatureVector, top_k: usize) -> EngineResult<PredictionResult>;
}

/// Rule-table scorer plus a pluggable attributor
#[derive(Debug, Clone)]
pub struct HeuristicPredictor<A: Attributor = RandomAttributor> {
    attributor: A,
    name: String,
}

impl HeuristicPredictor<RandomAttributor> {
    pub fn new() -> Self {
        Self::with_attributor(RandomAttributor::new())
    }
}

impl Default for HeuristicPredictor<RandomAttributor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Attributor> HeuristicPredictor<A> {
    pub fn with_attributor(attributor: A) -> Self {
        let name = format!("heuristic+{}", attributor.name());
        Self { attributor, name }
    }
}

impl<A: Attributor> Predictor for HeuristicPredictor<A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, vector: &FeatureVector, top_k: usize) -> EngineResult<PredictionResult> {
        let scored = score(vector)?;
        let top_features = explain(vector, &self.attributor, top_k)?;

        Ok(PredictionResult {
            predicted_class: scored.label,
            probabilities: scored.probabilities,
            top_features,
        })
    }
}

/// Validate raw input, then run the predictor.
///
/// Validation failures short-circuit before any scoring. A backend that
/// returns an inconsistent distribution is reported as an internal error.
pub fn classify(
    predictor: &dyn Predictor,
    raw: &[Value],
    top_k: usize,
) -> EngineResult<PredictionResult> {
    let vector = validate(raw)?;
    let result = predictor.predict(&vector, top_k)?;

    if !result.probabilities.is_valid() {
        return Err(EngineError::Internal(format!(
            "{} returned invalid probabilities {:?}",
            predictor.name(),
            result.probabilities
        )));
    }

    Ok(result)
}

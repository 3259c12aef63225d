//! Explainer
//!
//! Per-feature importance behind the `Attributor` seam, then ranking.
//!
//! `RandomAttributor` is a placeholder signal: uniform noise in (-1, 1),
//! uncorrelated with the scorer's rules. Swap in a sensitivity-analysis or
//! model-backed attributor without touching the ranking or the predictor.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::{EngineError, EngineResult};
use super::layout::FEATURE_COUNT;
use super::types::{FeatureContribution, FeatureVector};

/// Default number of contributions returned
pub const DEFAULT_TOP_K: usize = 3;

// ============================================================================
// ATTRIBUTOR
// ============================================================================

/// Source of signed per-feature importance values
pub trait Attributor: Send + Sync {
    fn name(&self) -> &'static str;

    /// One importance per feature, in layout order
    fn attribute(&self, vector: &FeatureVector) -> [f64; FEATURE_COUNT];
}

/// Uniform noise in the open interval (-1, 1)
///
/// Holds no mutable state. Unseeded calls draw from the thread-local rng;
/// seeded calls build a fresh `StdRng` each time, so every call with the same
/// seed repeats the same values.
#[derive(Debug, Clone, Default)]
pub struct RandomAttributor {
    seed: Option<u64>,
}

impl RandomAttributor {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn sample<R: Rng>(rng: &mut R) -> [f64; FEATURE_COUNT] {
        let range = Uniform::new(-1.0f64, 1.0);
        let mut out = [0.0; FEATURE_COUNT];
        for slot in out.iter_mut() {
            // Uniform is half-open, drop the lower bound
            *slot = loop {
                let v = range.sample(rng);
                if v > -1.0 {
                    break v;
                }
            };
        }
        out
    }
}

impl Attributor for RandomAttributor {
    fn name(&self) -> &'static str {
        "random"
    }

    fn attribute(&self, _vector: &FeatureVector) -> [f64; FEATURE_COUNT] {
        match self.seed {
            Some(seed) => Self::sample(&mut StdRng::seed_from_u64(seed)),
            None => Self::sample(&mut rand::thread_rng()),
        }
    }
}

// ============================================================================
// RANKING
// ============================================================================

/// Pair importances with their features and keep the `top_k` strongest.
///
/// Sorted by descending |importance|; equal magnitudes keep layout order.
/// `top_k` larger than the feature count returns every feature.
pub fn rank(
    vector: &FeatureVector,
    importances: &[f64; FEATURE_COUNT],
    top_k: usize,
) -> EngineResult<Vec<FeatureContribution>> {
    if let Some(bad) = importances.iter().find(|v| !v.is_finite()) {
        return Err(EngineError::Internal(format!(
            "attribution produced non-finite importance {}",
            bad
        )));
    }

    let mut contributions: Vec<FeatureContribution> = vector
        .named()
        .zip(importances.iter().copied())
        .map(|((feature, value), importance)| FeatureContribution {
            feature,
            importance,
            value,
        })
        .collect();

    // stable: ties stay in layout order
    contributions.sort_by(|a, b| b.importance.abs().total_cmp(&a.importance.abs()));
    contributions.truncate(top_k);

    Ok(contributions)
}

/// Attribute then rank
pub fn explain(
    vector: &FeatureVector,
    attributor: &dyn Attributor,
    top_k: usize,
) -> EngineResult<Vec<FeatureContribution>> {
    let importances = attributor.attribute(vector);
    rank(vector, &importances, top_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vector() -> FeatureVector {
        FeatureVector::new([10.0, 2.0, 0.1, 85.0, 300.0, 4.5, 1.0, 1.0, 5500.0]).unwrap()
    }

    struct Fixed([f64; FEATURE_COUNT]);

    impl Attributor for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn attribute(&self, _vector: &FeatureVector) -> [f64; FEATURE_COUNT] {
            self.0
        }
    }

    #[test]
    fn test_rank_by_magnitude() {
        let fixed = Fixed([0.1, -0.9, 0.5, 0.0, -0.6, 0.2, 0.3, -0.05, 0.7]);
        let top = explain(&sample_vector(), &fixed, 3).unwrap();

        let names: Vec<_> = top.iter().map(|c| c.feature).collect();
        assert_eq!(names, vec!["koi_prad", "koi_steff", "koi_teq"]);
        assert_eq!(top[0].importance, -0.9);
        assert_eq!(top[0].value, 2.0);
        assert_eq!(top[2].value, 300.0);
    }

    #[test]
    fn test_equal_magnitudes_keep_layout_order() {
        let fixed = Fixed([0.1, 0.5, -0.5, 0.2, 0.5, 0.0, 0.0, 0.0, -0.5]);
        let top = explain(&sample_vector(), &fixed, 4).unwrap();
        let names: Vec<_> = top.iter().map(|c| c.feature).collect();
        assert_eq!(names, vec!["koi_prad", "koi_sma", "koi_teq", "koi_steff"]);
    }

    #[test]
    fn test_top_k_bounds() {
        let attributor = RandomAttributor::new();
        assert_eq!(explain(&sample_vector(), &attributor, 0).unwrap().len(), 0);
        assert_eq!(explain(&sample_vector(), &attributor, 3).unwrap().len(), 3);
        assert_eq!(explain(&sample_vector(), &attributor, 9).unwrap().len(), 9);
        assert_eq!(explain(&sample_vector(), &attributor, 50).unwrap().len(), 9);
    }

    #[test]
    fn test_random_values_in_open_interval() {
        let attributor = RandomAttributor::new();
        for _ in 0..200 {
            for v in attributor.attribute(&sample_vector()) {
                assert!(v > -1.0 && v < 1.0, "{} outside (-1, 1)", v);
            }
        }
    }

    #[test]
    fn test_ranked_output_non_increasing() {
        let attributor = RandomAttributor::new();
        for _ in 0..50 {
            let all = explain(&sample_vector(), &attributor, 9).unwrap();
            for pair in all.windows(2) {
                assert!(pair[0].importance.abs() >= pair[1].importance.abs());
            }
        }
    }

    #[test]
    fn test_seeded_attributor_repeats() {
        let a = RandomAttributor::with_seed(42);
        assert_eq!(a.attribute(&sample_vector()), a.attribute(&sample_vector()));
        assert_ne!(
            a.attribute(&sample_vector()),
            RandomAttributor::with_seed(7).attribute(&sample_vector())
        );
    }

    #[test]
    fn test_non_finite_importance_is_internal_error() {
        let mut values = [0.0; FEATURE_COUNT];
        values[5] = f64::NAN;
        let err = explain(&sample_vector(), &Fixed(values), 3).unwrap_err();
        assert!(matches!(err, EngineError::Internal(_)));
    }
}

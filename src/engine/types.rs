//! Engine Types
//!
//! Data structures shared by the validator, scorer and explainer.
//! No scoring logic lives here.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT, IDX_PERIOD, IDX_PRAD, IDX_TEQ};

// ============================================================================
// CLASS LABEL
// ============================================================================

/// Disposition of a KOI candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLabel {
    Confirmed,
    Candidate,
    #[serde(rename = "False Positive")]
    FalsePositive,
}

impl ClassLabel {
    /// Enumeration order. Argmax ties resolve to the earliest entry.
    pub const ALL: [ClassLabel; 3] = [
        ClassLabel::Confirmed,
        ClassLabel::Candidate,
        ClassLabel::FalsePositive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::Confirmed => "Confirmed",
            ClassLabel::Candidate => "Candidate",
            ClassLabel::FalsePositive => "False Positive",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ClassLabel::Confirmed => 0,
            ClassLabel::Candidate => 1,
            ClassLabel::FalsePositive => 2,
        }
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Nine finite values in `FEATURE_LAYOUT` order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build from already-numeric values, rejecting NaN and infinities.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Result<Self, ValidationError> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ValidationError::NotNumeric {
                index,
                feature: FEATURE_LAYOUT[index],
                value: values[index].to_string(),
            });
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// (name, value) pairs in layout order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_LAYOUT.iter().copied().zip(self.0.iter().copied())
    }

    pub fn koi_period(&self) -> f64 {
        self.0[IDX_PERIOD]
    }

    pub fn koi_prad(&self) -> f64 {
        self.0[IDX_PRAD]
    }

    pub fn koi_teq(&self) -> f64 {
        self.0[IDX_TEQ]
    }
}

// ============================================================================
// PROBABILITY DISTRIBUTION
// ============================================================================

/// Normalized class probabilities, serialized with the display labels as keys
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    #[serde(rename = "Confirmed")]
    pub confirmed: f64,
    #[serde(rename = "Candidate")]
    pub candidate: f64,
    #[serde(rename = "False Positive")]
    pub false_positive: f64,
}

impl ProbabilityDistribution {
    /// Divide each weight by the total.
    ///
    /// Returns `None` when the total is zero or any result is not finite.
    pub fn normalize(weights: [f64; 3]) -> Option<Self> {
        let total: f64 = weights.iter().sum();
        if total == 0.0 || !total.is_finite() {
            return None;
        }

        let dist = Self {
            confirmed: weights[0] / total,
            candidate: weights[1] / total,
            false_positive: weights[2] / total,
        };
        dist.is_valid().then_some(dist)
    }

    pub fn get(&self, label: ClassLabel) -> f64 {
        self.to_array()[label.index()]
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.confirmed, self.candidate, self.false_positive]
    }

    pub fn sum(&self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Every entry finite and in [0, 1], total within 1e-9 of 1.0
    pub fn is_valid(&self) -> bool {
        self.to_array()
            .iter()
            .all(|p| p.is_finite() && (0.0..=1.0).contains(p))
            && (self.sum() - 1.0).abs() < 1e-9
    }

    /// Class with the greatest probability; first in `ClassLabel::ALL` on ties.
    pub fn argmax(&self) -> ClassLabel {
        let mut best = ClassLabel::ALL[0];
        for label in ClassLabel::ALL.into_iter().skip(1) {
            if self.get(label) > self.get(best) {
                best = label;
            }
        }
        best
    }
}

// ============================================================================
// CONTRIBUTIONS & RESULT
// ============================================================================

/// Signed importance of one input feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    pub feature: &'static str,
    pub importance: f64,
    pub value: f64,
}

/// Full response of one classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub predicted_class: ClassLabel,
    pub probabilities: ProbabilityDistribution,
    pub top_features: Vec<FeatureContribution>,
}

//! Classification Engine
//!
//! Scores a nine-value KOI feature vector into Confirmed / Candidate /
//! False Positive and reports which inputs mattered most.
//! Pure and synchronous: no I/O, no state kept between calls.
//!
//! ## Structure
//! - `layout`: feature names, order and layout hash
//! - `types`: FeatureVector, ClassLabel, ProbabilityDistribution, results
//! - `error`: ValidationError / EngineError
//! - `validator`: raw JSON sequence -> FeatureVector
//! - `rules`: base weights and the adjustment rule table
//! - `scorer`: rule evaluation, normalization, argmax
//! - `explainer`: Attributor seam and importance ranking
//! - `predictor`: Predictor seam and `classify` orchestration
//!
//! ## Usage
//! ```
//! use koi_classifier::engine::{classify, ClassLabel, HeuristicPredictor};
//! use serde_json::json;
//!
//! let raw = json!([10, 2, 0.1, 85, 300, 4.5, 1, 1, 5500]);
//! let predictor = HeuristicPredictor::new();
//! let result = classify(&predictor, raw.as_array().unwrap(), 3).unwrap();
//! assert_eq!(result.predicted_class, ClassLabel::Confirmed);
//! ```

pub mod error;
pub mod explainer;
pub mod layout;
pub mod predictor;
pub mod rules;
pub mod scorer;
pub mod types;
pub mod validator;

pub use error::{EngineError, EngineResult, ValidationError};
pub use explainer::{explain, rank, Attributor, RandomAttributor, DEFAULT_TOP_K};
pub use layout::{feature_index, feature_name, LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT};
pub use predictor::{classify, HeuristicPredictor, Predictor};
pub use scorer::{score, Scored};
pub use types::{
    ClassLabel, FeatureContribution, FeatureVector, PredictionResult, ProbabilityDistribution,
};
pub use validator::validate;

//! Prediction request models
//!
//! Success responses serialize `engine::PredictionResult` directly.

use serde::Deserialize;
use serde_json::{Map, Value};

/// `POST /api/v1/predict`
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Nine values in layout order, numbers or numeric strings
    pub features: Vec<Value>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// `POST /api/v1/predict/record`
#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    /// `{feature_name: value}`
    pub record: Map<String, Value>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// `?top_k=` on any predict route
#[derive(Debug, Default, Deserialize)]
pub struct TopKQuery {
    pub top_k: Option<usize>,
}

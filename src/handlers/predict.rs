//! Prediction handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection, StringRejection},
        Query, State,
    },
    Json,
};
use serde_json::Value;

use crate::engine::{classify, PredictionResult};
use crate::models::{PredictRequest, RecordRequest, TopKQuery};
use crate::{ingest, AppResult, AppState};

/// Classify an ordered feature sequence
pub async fn predict(
    State(state): State<AppState>,
    query: Result<Query<TopKQuery>, QueryRejection>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let Query(query) = query?;
    let Json(req) = payload?;

    let top_k = resolve_top_k(&state, req.top_k, query.top_k);
    run(&state, &req.features, top_k, "sequence")
}

/// Classify a `{feature_name: value}` record
pub async fn predict_record(
    State(state): State<AppState>,
    query: Result<Query<TopKQuery>, QueryRejection>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let Query(query) = query?;
    let Json(req) = payload?;

    let raw = ingest::from_record(&req.record);
    let top_k = resolve_top_k(&state, req.top_k, query.top_k);
    run(&state, &raw, top_k, "record")
}

/// Classify the first data row of an uploaded CSV document
pub async fn predict_csv(
    State(state): State<AppState>,
    query: Result<Query<TopKQuery>, QueryRejection>,
    body: Result<String, StringRejection>,
) -> AppResult<Json<PredictionResult>> {
    let Query(query) = query?;
    let body = body?;

    let raw = ingest::from_csv(&body)?;
    let top_k = resolve_top_k(&state, None, query.top_k);
    run(&state, &raw, top_k, "csv")
}

/// Body wins over query, query over the configured default
fn resolve_top_k(state: &AppState, body: Option<usize>, query: Option<usize>) -> usize {
    body.or(query).unwrap_or(state.config.default_top_k)
}

fn run(
    state: &AppState,
    raw: &[Value],
    top_k: usize,
    source: &str,
) -> AppResult<Json<PredictionResult>> {
    let result = classify(state.predictor.as_ref(), raw, top_k).map_err(|e| {
        tracing::warn!(source, error = %e, "classification rejected");
        e
    })?;

    tracing::info!(
        source,
        predicted = %result.predicted_class,
        top_k,
        "classified candidate"
    );

    Ok(Json(result))
}

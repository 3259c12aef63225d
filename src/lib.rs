//! KOI Classifier
//!
//! Scores Kepler object-of-interest feature vectors into
//! **Confirmed**, **Candidate** or **False Positive** and reports the
//! inputs with the strongest importance signal.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      KOI CLASSIFIER                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌───────────┐   ┌───────────────────────┐ │
//! │  │  API      │   │  Ingest   │   │  Engine               │ │
//! │  │  (Axum)   │──▶│ record /  │──▶│  Validator → Scorer   │ │
//! │  │           │   │   CSV     │   │        → Explainer    │ │
//! │  └───────────┘   └───────────┘   └───────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Uses structured logging via [`tracing`]. Set `RUST_LOG` to control
//! verbosity (e.g. `RUST_LOG=koi_classifier=debug`).

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

use crate::config::Config;
use crate::engine::{HeuristicPredictor, Predictor, RandomAttributor};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub predictor: Arc<dyn Predictor>,
}

impl AppState {
    /// Heuristic predictor, seeded when `ATTRIBUTION_SEED` is configured
    pub fn from_config(config: Config) -> Self {
        let attributor = match config.attribution_seed {
            Some(seed) => RandomAttributor::with_seed(seed),
            None => RandomAttributor::new(),
        };

        Self {
            predictor: Arc::new(HeuristicPredictor::with_attributor(attributor)),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/features", get(handlers::features::layout))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/predict/record", post(handlers::predict::predict_record))
        .route("/api/v1/predict/csv", post(handlers::predict::predict_csv))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

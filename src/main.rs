//! KOI Classifier Server

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use koi_classifier::config::{Config, LogFormat};
use koi_classifier::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "koi_classifier=debug,tower_http=debug".into());
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("KOI Classifier starting...");
    tracing::info!(
        environment = %config.environment,
        default_top_k = config.default_top_k,
        seeded = config.attribution_seed.is_some(),
        "configuration loaded"
    );

    let addr = config.bind_addr();
    let state = AppState::from_config(config);
    tracing::info!("Predictor: {}", state.predictor.name());

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

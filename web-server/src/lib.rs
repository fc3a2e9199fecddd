//! Heart Disease Predictor - Web Form Server
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 HEART RISK PREDICTOR                 │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌────────────────────┐     ┌──────────────────────┐ │
//! │  │  Form Controller   │     │  Prediction Adapter  │ │
//! │  │  (Axum, HTML page) │────▶│  (heart-risk-core)   │ │
//! │  └────────────────────┘     └──────────┬───────────┘ │
//! │                                        ▼             │
//! │                              ┌──────────────────┐    │
//! │                              │  model artifact  │    │
//! │                              └──────────────────┘    │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod views;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heart_risk_core::{load_classifier, LoadedModel, PredictionEngine};

pub use config::{Config, LogFormat};
pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PredictionEngine>,
    pub config: Config,
}

impl AppState {
    pub fn new(model: LoadedModel, config: Config) -> Self {
        Self {
            engine: Arc::new(PredictionEngine::new(model)),
            config,
        }
    }
}

/// Load the model named by `config`; any failure aborts startup
pub fn build_state(config: Config) -> anyhow::Result<AppState> {
    let model = load_classifier(&config.model_path, config.model_sha256.as_deref())
        .with_context(|| {
            format!(
                "failed to load model artifact from {}",
                config.model_path.display()
            )
        })?;

    tracing::info!(
        "Model ready: {} ({:?}, {} features)",
        model.metadata.model_path,
        model.metadata.format,
        model.metadata.features
    );

    Ok(AppState::new(model, config))
}

/// Filter used when `RUST_LOG` is unset; production drops the debug spans
pub fn default_log_filter(config: &Config) -> &'static str {
    if config.is_production() {
        "heart_risk_web=info,heart_risk_core=warn,tower_http=info"
    } else {
        "heart_risk_web=debug,heart_risk_core=info,tower_http=debug"
    }
}

/// Initialize logging
pub fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_log_filter(config).into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Page routes (HTML form)
    let page_routes = Router::new()
        .route("/", get(handlers::page::index))
        .route("/predict", post(handlers::predict::submit_form));

    // API routes (JSON)
    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::predict::predict_json))
        .route("/api/v1/model", get(handlers::model::status))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

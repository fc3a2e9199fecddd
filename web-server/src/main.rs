//! Heart Disease Predictor - server entry point

use std::net::SocketAddr;

use anyhow::Context;

use heart_risk_web::{build_state, create_router, init_tracing, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    init_tracing(&config);

    tracing::info!(
        "Heart Disease Predictor v{} starting ({})...",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    // Load the classifier before anything is served
    let state = build_state(config.clone()).map_err(|e| {
        tracing::error!("Startup failed: {:#}", e);
        e
    })?;

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

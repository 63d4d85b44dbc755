use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aegis_api::config::Config;
use aegis_api::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AEGIS API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::with_mock_analyzers(config.clone());
    info!(
        resume_backend = state.resume_analyzer.backend(),
        interview_backend = state.interview_analyzer.backend(),
        step_delay_ms = config.processing_step_delay_ms,
        "Analyzers initialized"
    );

    // The dashboard is served from a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received ctrl+c, shutting down");
}

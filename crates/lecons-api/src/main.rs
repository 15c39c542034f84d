//! Lecons lesson server entry point.

use std::error::Error;
use std::sync::Arc;

use lecons_api::config::Config;
use lecons_api::state::AppState;
use lecons_api::{build_app, telemetry};
use lecons_content::infrastructure::file_source::FileContentSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = Config::from_env()?;

    // Initialize tracing subscriber.
    let telemetry = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting Lecons lesson server");
    tracing::info!(
        content_path = %config.content_path.display(),
        static_dir = %config.static_dir.display(),
        "serving lesson content"
    );

    // Build application state.
    let content_source = Arc::new(FileContentSource::new(&config.content_path));
    let app_state = AppState::new(content_source);

    // Build router.
    let app = build_app(app_state, &config.static_dir);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    telemetry.shutdown();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

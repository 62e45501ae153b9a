//! Server entrypoint.

use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use tracker_admin::config::Config;
use tracker_admin::{AppState, create_app};

#[tokio::main]
async fn main() {
    // Load .env for local dev
    let _ = dotenvy::dotenv();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(config));
    let app = create_app(state.clone());

    let addr = format!("0.0.0.0:{}", state.config.port);
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}

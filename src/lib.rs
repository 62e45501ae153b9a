//! tracker-admin — admin backend for the social tracking dashboard.
//!
//! Persists account/URL lists as JSON documents, serves history snapshot
//! files, and gates writes behind a shared-password cookie session.

pub mod config;
pub mod error;
pub mod history;
pub mod routes;
pub mod session;
pub mod store;
pub mod token;
pub mod types;

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::JsonListStore;

/// Shared application state available to all route handlers.
pub struct AppState {
    pub config: Config,
    pub accounts: JsonListStore,
    pub urls: JsonListStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let accounts = JsonListStore::new(config.accounts_file.clone(), "accounts");
        let urls = JsonListStore::new(config.urls_file.clone(), "urls");
        Self {
            config,
            accounts,
            urls,
        }
    }
}

/// Build the Axum router with all middleware and routes.
pub fn create_app(state: Arc<AppState>) -> Router {
    // CORS: allow single frontend origin with credentials (cookie auth)
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(
            state.config.frontend_url.parse().unwrap(),
        ))
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true);

    let api = Router::new()
        .route(
            "/accounts",
            get(routes::accounts::list).post(routes::accounts::save),
        )
        .route("/urls", get(routes::urls::list).post(routes::urls::save))
        .route("/auth/login", post(routes::login::login))
        .route("/auth/logout", post(routes::logout::logout))
        .route("/auth/verify", get(routes::verify::verify))
        .route("/history/list", get(routes::history::list))
        .route("/history/load", get(routes::history::load));

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{extract::FromRef, http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::models::AppConfig;
use crate::services::{source_for, spawn_initial_load, TableStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TableStore>,
}

impl AppState {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self { store }
    }
}

impl FromRef<AppState> for Arc<TableStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

/// Create application state and start loading the reference table.
///
/// Returns immediately; requests served before the load finishes see an
/// empty table. Must be called from within a Tokio runtime.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.source.trim().is_empty() {
        anyhow::bail!("No reference table source configured");
    }

    let store = Arc::new(TableStore::new());
    let source = source_for(&config.source);
    tracing::info!(source = %source.describe(), "Loading reference table in the background");
    spawn_initial_load(store.clone(), source);

    Ok(AppState::new(store))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Browsers on other origins may call the GET endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Conversion endpoints
        .route("/api/ral-to-hex", get(api::handle_ral_to_hex))
        .route("/api/ral-to-name", get(api::handle_ral_to_name))
        .route("/api/hex-to-ral", get(api::handle_hex_to_ral))
        .route("/api/hex-to-rgb", get(api::handle_hex_to_rgb))
        .route("/api/status", get(api::handle_status))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(Any),
        )
}

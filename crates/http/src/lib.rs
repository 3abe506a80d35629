//! HTTP API server for omniwriter.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;

#[cfg(test)]
mod tests;

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use omniwriter_service::{HistoryService, WritingService};

pub use api_types::{OptionsResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// One instance per process; the services inside are the only provider and
/// store clients the application uses.
pub struct AppState {
    /// Generation requests
    pub writing_service: Arc<WritingService>,
    /// History list, save and delete
    pub history_service: Arc<HistoryService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/options", get(handlers::generate::options))
        .route("/api/generate", post(handlers::generate::generate))
        .route(
            "/api/history",
            get(handlers::history::list_history).post(handlers::history::save_history),
        )
        .route(
            "/api/history/{id}",
            get(handlers::history::get_history_item).delete(handlers::history::delete_history),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

//! Route configuration and setup

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/process", post(handlers::process::process_document))
        .with_state(state)
        // Uploads are unbounded; the default 2 MB multipart cap would
        // reject ordinary documents.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

//! # ismr-sheets-web
//!
//! Web upload surface for the ISMR to XLSX converter: a multi-file upload
//! form, an HTML and a JSON conversion endpoint, and a one-shot download
//! route for the produced workbook.

pub mod handlers;
pub mod pages;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router
pub fn app(state: AppState, max_upload_mib: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/convert", post(handlers::convert_form))
        .route("/api/convert", post(handlers::convert_api))
        .route("/download/:id", get(handlers::download))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_mib * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

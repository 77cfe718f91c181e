//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check
//!
//! # Orders
//! POST /api/orders/fetch        - Fetch a date range, replace the session table
//! GET  /api/orders              - Current session table (404 before first fetch)
//! POST /api/orders/select       - Flip one row's selection flag
//! POST /api/orders/select-all   - Set every row's selection flag
//!
//! # Exports (selected rows only)
//! GET  /api/export/xlsx         - Orders + Item Summary workbook download
//! GET  /api/export/pdf          - One page per selected order
//! ```

pub mod export;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/orders/fetch", post(orders::fetch))
        .route("/api/orders", get(orders::table))
        .route("/api/orders/select", post(orders::select))
        .route("/api/orders/select-all", post(orders::select_all))
        .route("/api/export/xlsx", get(export::xlsx))
        .route("/api/export/pdf", get(export::pdf))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

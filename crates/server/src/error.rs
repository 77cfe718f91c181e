//! Unified error handling for the server.
//!
//! All route handlers return `Result<T, AppError>`. Fetch and parse failures
//! propagate here and are rendered as human-readable messages; nothing is
//! swallowed, and no automatic retry happens anywhere in the pipeline.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use orderdesk_core::NormalizeError;

use crate::export::ExportError;
use crate::woo::WooError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Order fetch from WooCommerce failed.
    #[error("WooCommerce error: {0}")]
    Woo(#[from] WooError),

    /// A fetched order could not be normalized.
    #[error("order data error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Export artifact generation failed.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Upstream faults, including order data the store hands us that
            // we refuse to normalize.
            Self::Woo(_) | Self::Normalize(_) => StatusCode::BAD_GATEWAY,
            Self::Export(ExportError::EmptySelection) => StatusCode::BAD_REQUEST,
            Self::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        }

        // The operator is the only client; surface the full message so a
        // failed fetch is diagnosable without reading server logs.
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::Woo(WooError::Upstream {
                    status: 500,
                    body: "boom".to_string(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Export(ExportError::EmptySelection),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NotFound("no orders fetched yet".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::BadRequest("end_date before start_date".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_malformed_order_maps_to_bad_gateway() {
        let err = AppError::Normalize(NormalizeError::MalformedOrder {
            order_id: 8,
            field: "date_created",
            value: "not-a-date".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

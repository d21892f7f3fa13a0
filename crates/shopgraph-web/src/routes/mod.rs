//! Route handlers.

pub mod etl;
pub mod health;
pub mod recs;

use axum::http::StatusCode;

/// Map any failure to a plain-text 500.
pub(crate) fn internal_error(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!(error = %format!("{:#}", e), "Request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
}

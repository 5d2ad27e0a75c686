//! Market Error Types
//!
//! Upstream detail stays in the logs; the response body only ever says the
//! data source is unavailable.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Market-specific result type alias
pub type MarketResult<T> = Result<T, MarketError>;

/// Market-specific error variants
#[derive(Debug, Error)]
pub enum MarketError {
    /// Request to the upstream API failed
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {0}")]
    Status(u16),
}

impl MarketError {
    fn log(&self) {
        match self {
            MarketError::Upstream(e) => {
                tracing::warn!(error = %e, "Market upstream request failed");
            }
            MarketError::Status(code) => {
                tracing::warn!(status = code, "Market upstream returned error status");
            }
        }
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        self.log();
        AppError::service_unavailable("Market data source unavailable").into_response()
    }
}

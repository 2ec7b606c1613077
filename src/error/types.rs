/**
 * API Error Types
 *
 * Typed error taxonomy for the HTTP surface. Handlers return
 * `Result<_, ApiError>`; the conversion module maps each variant to an HTTP
 * status code and JSON body.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Application error taxonomy.
///
/// Every variant maps to exactly one HTTP status code. Authentication
/// failures intentionally share a single variant so the precise reason
/// (missing header, expired token, bad signature, wrong password) is never
/// visible to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, or invalid credentials → 401
    #[error("authentication required")]
    Unauthenticated,

    /// Request payload failed validation → 422
    #[error("validation failed: {0}")]
    Validation(String),

    /// Uniqueness constraint violated at creation time → 422
    #[error("conflict: {0}")]
    Conflict(String),

    /// A non-auth resource does not exist → 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Unexpected store or crypto failure → 500
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the client.
    ///
    /// `Internal` errors return a generic message; the detailed cause is
    /// logged server-side only.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

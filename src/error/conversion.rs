/**
 * Error Conversion
 *
 * `IntoResponse` for the API error taxonomy plus `From` implementations for
 * the error types produced by collaborators (store, password hasher).
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "validation failed: tweet text must not be blank",
 *   "status": 422
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Log the detailed cause server-side, return a generic message
            tracing::error!(error = %self, "Internal server error");
        }

        let body = Json(json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    /// Map store errors into the taxonomy.
    ///
    /// A unique-constraint violation is the store's explicit duplicate
    /// signal and becomes `Conflict`; anything else is `Internal`.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return ApiError::Conflict("username or email already exists".to_string());
            }
        }
        ApiError::Internal(format!("database error: {err}"))
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Internal(format!("password hashing error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Extract status code and JSON body from an ApiError response.
    async fn error_response(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_unauthenticated_response() {
        let (status, body) = error_response(ApiError::Unauthenticated).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], 401);
        assert_eq!(body["error"], "authentication required");
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let (status, body) =
            error_response(ApiError::Conflict("username or email already exists".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("already exists"));
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let (status, body) =
            error_response(ApiError::Internal("database error: socket closed".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(!body["error"].as_str().unwrap().contains("socket"));
    }

    #[test]
    fn test_from_row_not_found_is_internal() {
        // RowNotFound is a programming error here; lookups that may miss use
        // fetch_optional and handle None explicitly.
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::Internal(_)));
    }
}

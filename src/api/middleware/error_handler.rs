//! AppError to HTTP response mapping.
//!
//! Implements `IntoResponse` for `AppError`. Not-found and bad-request map
//! to their own statuses; every store-level failure is logged and surfaced
//! as an undifferentiated, sanitized server fault.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Status mapping:
    /// - NotFound → 404
    /// - BadRequest → 400
    /// - ConnectionPool → 503
    /// - Database / Configuration / Internal → 500
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", &self.to_string()).with_details(json!({
                    "entity": entity,
                    "field": field,
                    "value": value,
                })),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %source, "Database connection unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable"),
                )
            }
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "Database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = %source, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let error = AppError::not_found("customer", 99);
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let error = AppError::bad_request("Path id does not match payload id");
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn connection_pool_maps_to_503() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn store_failures_are_undifferentiated_500s() {
        let database = AppError::Database {
            operation: "insert order".to_string(),
            source: anyhow::anyhow!("constraint violated"),
        };
        let internal = AppError::Internal {
            source: anyhow::anyhow!("connectivity lost"),
        };
        assert_eq!(
            error_to_status_code(&database),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_to_status_code(&internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        // Both render the same sanitized body: callers cannot tell a
        // constraint violation from a connectivity outage.
        assert_eq!(
            database.into_response().status(),
            internal.into_response().status()
        );
    }
}

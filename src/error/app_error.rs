use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type.
///
/// Not-found and bad-request outcomes are recoverable and map to their own
/// HTTP statuses; every store-level failure stays undifferentiated and
/// surfaces as an opaque server fault.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Bad request with a descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Database operation failure with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Not-found error for an entity looked up by id.
    pub fn not_found(entity: &str, id: i32) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: "database operation".to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

impl From<diesel_async::pooled_connection::PoolError> for AppError {
    fn from(error: diesel_async::pooled_connection::PoolError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Configuration {
            key: "configuration".to_string(),
            source: anyhow::Error::from(error),
        }
    }
}

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_helper_fills_id_field() {
        let error = AppError::not_found("customer", 42);
        match error {
            AppError::NotFound {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "customer");
                assert_eq!(field, "id");
                assert_eq!(value, "42");
            }
            other => panic!("Expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let error = AppError::from(diesel::result::Error::NotFound);
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn diesel_rollback_maps_to_database_error() {
        let error = AppError::from(diesel::result::Error::RollbackTransaction);
        assert!(matches!(error, AppError::Database { .. }));
    }

    #[test]
    fn display_omits_source_details() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("secret connection string"),
        };
        assert_eq!(error.to_string(), "Internal error");
    }
}

//! Tracing subscriber initialization.
//!
//! Installs a global `tracing` subscriber configured from [`LoggerConfig`].
//! `RUST_LOG` always wins over the configured level so operators can raise
//! verbosity without touching configuration files.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::config::LoggerConfig;
use crate::error::AppError;

/// Console output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Pretty,
    /// Newline-delimited JSON records
    Json,
}

/// Installs the global tracing subscriber.
///
/// Fails if a subscriber was already installed or the configured level
/// does not parse as a filter directive.
pub fn init_logger(config: &LoggerConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::Configuration {
            key: "logger.level".to_string(),
            source: anyhow::Error::from(e),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.with_ansi(config.colored).try_init(),
    };

    result.map_err(|e| AppError::Configuration {
        key: "logger".to_string(),
        source: anyhow::anyhow!(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_deserializes_from_lowercase() {
        assert_eq!(
            serde_json::from_str::<LogFormat>("\"json\"").unwrap(),
            LogFormat::Json
        );
        assert_eq!(
            serde_json::from_str::<LogFormat>("\"pretty\"").unwrap(),
            LogFormat::Pretty
        );
    }

    #[test]
    fn default_format_is_pretty() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }
}

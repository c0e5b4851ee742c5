//! Configuration management for ordertrack
//!
//! Layered configuration loading:
//! 1. `default.toml` - base defaults
//! 2. `{environment}.toml` - environment-specific overrides
//! 3. `local.toml` - local development overrides (not committed)
//! 4. `ORDERTRACK_*` environment variables (highest priority)

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{DatabaseConfig, LoggerConfig, ServerConfig, Settings};

//! Configuration loader for ordertrack
//!
//! Loads settings from a directory of TOML files layered by environment,
//! with `ORDERTRACK_*` environment variables taking highest priority.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for the configuration directory
const CONFIG_DIR_ENV: &str = "ORDERTRACK_CONFIG_DIR";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ORDERTRACK";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Layered configuration loader.
///
/// Sources, in order of priority:
/// 1. `default.toml` - base defaults (required)
/// 2. `{environment}.toml` - environment-specific overrides (optional)
/// 3. `local.toml` - local development overrides (optional)
/// 4. `ORDERTRACK_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Creates a loader reading `ORDERTRACK_CONFIG_DIR` and
    /// `ORDERTRACK_APP_ENV` for directory and environment selection.
    pub fn new() -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self {
            config_dir,
            environment: AppEnvironment::from_env(),
        }
    }

    /// Creates a loader for an explicit directory and environment.
    pub fn with_dir(config_dir: impl Into<PathBuf>, environment: AppEnvironment) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment,
        }
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Loads and validates settings from all sources.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {e}"))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        if !default_path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                default_path.display()
            )));
        }

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let local_path = self.config_dir.join("local.toml");

        // ORDERTRACK_DATABASE__URL -> database.url
        Config::builder()
            .add_source(toml_file(&default_path).required(true))
            .add_source(toml_file(&env_path).required(false))
            .add_source(toml_file(&local_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR),
            )
            .build()
            .map_err(ConfigError::from)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::new(path.to_str().unwrap_or_default(), FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn load_fails_without_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::with_dir(dir.path(), AppEnvironment::Test);
        assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_reads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [database]
            url = "postgres://localhost/ordertrack"
            "#,
        );

        let loader = ConfigLoader::with_dir(dir.path(), AppEnvironment::Test);
        let settings = loader.load().unwrap();
        assert_eq!(settings.database.url, "postgres://localhost/ordertrack");
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn environment_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [server]
            port = 3000

            [database]
            url = "postgres://localhost/ordertrack"
            "#,
        );
        write_config(
            dir.path(),
            "test.toml",
            r#"
            [server]
            port = 4000
            "#,
        );

        let loader = ConfigLoader::with_dir(dir.path(), AppEnvironment::Test);
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 4000);
    }

    #[test]
    fn local_file_wins_over_environment_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [database]
            url = "postgres://localhost/ordertrack"
            "#,
        );
        write_config(dir.path(), "test.toml", "[server]\nport = 4000\n");
        write_config(dir.path(), "local.toml", "[server]\nport = 5000\n");

        let loader = ConfigLoader::with_dir(dir.path(), AppEnvironment::Test);
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 5000);
    }

    #[test]
    fn invalid_settings_are_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [database]
            url = ""
            "#,
        );

        let loader = ConfigLoader::with_dir(dir.path(), AppEnvironment::Test);
        assert!(matches!(
            loader.load(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}

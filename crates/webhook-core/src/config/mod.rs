//! Runtime settings.
//!
//! Settings come from `WEBHOOK_`-prefixed environment variables via the
//! `config` crate, with nested sections separated by `__`
//! (`WEBHOOK_LOGGING__LEVEL=debug`). Every field has a default, so an
//! empty environment yields a usable [`Settings`].

pub mod logging;
pub mod paths;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "WEBHOOK";

/// Root runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Hook config file to use instead of the platform default.
    #[serde(default)]
    pub config_path: Option<PathBuf>,
    /// Timeout for the outbound webhook request, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: None,
            timeout_seconds: default_timeout_seconds(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn load() -> Result<Self, AppError> {
        Self::from_environment(environment())
    }

    /// Load settings from an explicit environment source.
    pub fn from_environment(env: config::Environment) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(env)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build settings: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize settings: {e}")))
    }

    /// Outbound request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// The `WEBHOOK_*` environment source.
pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn default_timeout_seconds() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Settings, AppError> {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_environment(environment().source(Some(source)))
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let settings = from_vars(&[]).expect("settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert_eq!(settings.logging.level, "warn");
        assert!(!settings.logging.is_json());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = from_vars(&[
            ("WEBHOOK_CONFIG_PATH", "/tmp/hooks.yml"),
            ("WEBHOOK_TIMEOUT_SECONDS", "5"),
            ("WEBHOOK_LOGGING__LEVEL", "debug"),
            ("WEBHOOK_LOGGING__FORMAT", "json"),
        ])
        .expect("settings");

        assert_eq!(settings.config_path, Some(PathBuf::from("/tmp/hooks.yml")));
        assert_eq!(settings.timeout_seconds, 5);
        assert_eq!(settings.logging.level, "debug");
        assert!(settings.logging.is_json());
    }

    #[test]
    fn test_invalid_timeout_is_configuration_error() {
        let err = from_vars(&[("WEBHOOK_TIMEOUT_SECONDS", "soon")]).expect_err("not a number");
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}

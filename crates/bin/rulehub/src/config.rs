//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `rulehub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rules file settings.
    pub rules: RulesConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Rules document configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Path of the JSON trigger document loaded when none is given on the
    /// command line.
    pub file: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `rulehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("rulehub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RULEHUB_RULES") {
            self.rules.file = val;
        }
        if let Ok(val) = std::env::var("RULEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.file.is_empty() {
            return Err(ConfigError::Validation(
                "rules file path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            file: "rules.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rulehub=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.rules.file, "rules.json");
        assert_eq!(config.logging.filter, "rulehub=info");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.rules.file, "rules.json");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [rules]
            file = 'triggers.json'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.rules.file, "triggers.json");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.rules.file, "rules.json");
    }

    #[test]
    fn should_reject_empty_rules_file_path() {
        let mut config = Config::default();
        config.rules.file = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'trace'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "trace");
        assert_eq!(config.rules.file, "rules.json");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}

//! CLI configuration

use serde::Deserialize;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Plain,
            pretty: false,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `WORKFLOW_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("WORKFLOW"))
            .build()?
            .try_deserialize()
    }

    /// Loads configuration, falling back to defaults when the environment is
    /// invalid. The error is handed back so it can be logged once tracing is up.
    pub fn load() -> (Self, Option<config::ConfigError>) {
        Self::or_default(Self::from_env())
    }

    fn or_default(
        loaded: Result<Self, config::ConfigError>,
    ) -> (Self, Option<config::ConfigError>) {
        match loaded {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Plain);
        assert!(!config.pretty);
    }

    #[test]
    fn test_overrides_deserialize() {
        let config: CliConfig = config::Config::builder()
            .set_override("log_format", "json")
            .unwrap()
            .set_override("pretty", true)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.pretty);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_config_falls_back_and_keeps_error() {
        let (config, err) =
            CliConfig::or_default(Err(config::ConfigError::Message("bad pretty".into())));

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Plain);
        assert!(err.is_some_and(|err| err.to_string().contains("bad pretty")));
    }

    #[test]
    fn test_valid_config_reports_no_error() {
        let loaded = CliConfig {
            pretty: true,
            ..CliConfig::default()
        };
        let (config, err) = CliConfig::or_default(Ok(loaded));

        assert!(config.pretty);
        assert!(err.is_none());
    }
}

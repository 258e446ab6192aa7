use core::str::FromStr;

use thiserror::Error;

pub const FILTER_VAR: &str = "RUST_LOG";
pub const FORMAT_VAR: &str = "RENTLEDGER_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid RENTLEDGER_LOG_FORMAT value: {0:?} (expected \"json\" or \"pretty\")")]
    InvalidLogFormat(String),
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,rentledger_members=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup; unset or blank
    /// variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());

        let filter = set(FILTER_VAR).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = set(FORMAT_VAR)
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { filter, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn variables_override_defaults() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (FILTER_VAR, "rentledger_members=debug"),
            (FORMAT_VAR, "Pretty"),
        ]))
        .unwrap();

        assert_eq!(config.filter, "rentledger_members=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_variables_count_as_unset() {
        let config =
            ObservabilityConfig::from_lookup(lookup_from(&[(FILTER_VAR, "  "), (FORMAT_VAR, "")]))
                .unwrap();
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = ObservabilityConfig::from_lookup(lookup_from(&[(FORMAT_VAR, "xml")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogFormat("xml".to_string()));
        assert!(err.to_string().contains(FORMAT_VAR));
    }
}

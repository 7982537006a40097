//! Configuration loading from the environment.

use std::net::SocketAddr;

use thiserror::Error;

use chainsight_observability::LogFormat;

pub const ENV_BIND_ADDR: &str = "CHAINSIGHT_BIND_ADDR";
pub const ENV_SEED_SAMPLE_DATA: &str = "CHAINSIGHT_SEED_SAMPLE_DATA";
pub const ENV_HISTORY_LIMIT: &str = "CHAINSIGHT_HISTORY_LIMIT";
pub const ENV_LOG_FORMAT: &str = "CHAINSIGHT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Process configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Load the bundled sample data set at startup.
    pub seed_sample_data: bool,
    /// Default page size for query history.
    pub history_limit: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_sample_data: true,
            history_limit: 20,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ENV_BIND_ADDR) {
            cfg.bind_addr = v
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(ENV_BIND_ADDR, &v, e))?;
        }

        if let Some(v) = lookup(ENV_SEED_SAMPLE_DATA) {
            cfg.seed_sample_data = parse_bool(&v)
                .ok_or_else(|| ConfigError::invalid(ENV_SEED_SAMPLE_DATA, &v, "expected true/false"))?;
        }

        if let Some(v) = lookup(ENV_HISTORY_LIMIT) {
            let limit: usize = v
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(ENV_HISTORY_LIMIT, &v, e))?;
            if limit == 0 {
                return Err(ConfigError::invalid(ENV_HISTORY_LIMIT, &v, "must be positive"));
            }
            cfg.history_limit = limit;
        }

        if let Some(v) = lookup(ENV_LOG_FORMAT) {
            cfg.log_format = v.parse().map_err(|e| ConfigError::invalid(ENV_LOG_FORMAT, &v, e))?;
        }

        Ok(cfg)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_every_key() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "127.0.0.1:9000"),
            (ENV_SEED_SAMPLE_DATA, "off"),
            (ENV_HISTORY_LIMIT, "50"),
            (ENV_LOG_FORMAT, "pretty"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert!(!cfg.seed_sample_data);
        assert_eq!(cfg.history_limit, 50);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_values_naming_the_key() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_HISTORY_LIMIT, "0")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, ENV_HISTORY_LIMIT),
        }

        assert!(AppConfig::from_lookup(lookup(&[(ENV_BIND_ADDR, "nowhere")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(ENV_SEED_SAMPLE_DATA, "maybe")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).is_err());
    }
}

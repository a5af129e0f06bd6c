// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    submit_delay: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://posts.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer, got {value:?}"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let submit_delay_ms = parse_number(
            "SUBMIT_DELAY_MS",
            lookup("SUBMIT_DELAY_MS"),
            DEFAULT_SUBMIT_DELAY_MS,
        )?;

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            submit_delay: Duration::from_millis(submit_delay_ms),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Pause applied before a submitted post form is processed.
    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url(), "sqlite://posts.db");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.database_max_connections(), 16);
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
    }

    #[test]
    fn submit_delay_can_be_disabled() {
        let config = config_from(&[("SUBMIT_DELAY_MS", "0")]).unwrap();
        assert!(config.submit_delay().is_zero());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = config_from(&[("SUBMIT_DELAY_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("SUBMIT_DELAY_MS"));

        let err = config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }
}

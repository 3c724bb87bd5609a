// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::errors::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Adres bazowy backendu, bez końcowego `/` (np. `http://localhost:5000/api`).
    pub api_url: String,
    pub bind_addr: SocketAddr,
    pub api_timeout: Duration,
}

impl AppConfig {
    /// Wczytuje konfigurację ze zmiennych środowiskowych (po `dotenv()`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("API_URL"))?;

        let bind_addr_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_addr_raw.clone(),
            })?;

        let api_timeout = match lookup("API_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    key: "API_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        };

        Ok(AppConfig {
            api_url,
            bind_addr,
            api_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[("API_URL", "http://backend/api/")]))
            .expect("config");
        assert_eq!(config.api_url, "http://backend/api");
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.api_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_api_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("API_URL"));

        let err = AppConfig::from_lookup(lookup_from(&[("API_URL", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("API_URL"));
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("API_URL", "http://backend"),
            ("BIND_ADDR", "nie-adres"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));

        let err = AppConfig::from_lookup(lookup_from(&[
            ("API_URL", "http://backend"),
            ("API_TIMEOUT_SECS", "dziesięć"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "API_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn overrides_are_honoured() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_URL", "http://backend"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("API_TIMEOUT_SECS", "3"),
        ]))
        .expect("config");
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.api_timeout, Duration::from_secs(3));
    }
}

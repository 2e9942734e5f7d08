use std::env;
use std::net::SocketAddr;

use crate::error::{config_error, Error};

const DEFAULT_DATABASE_URL: &str = "sqlite://places.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAPS_API_BASE: &str = "https://maps.googleapis.com";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub listen_addr: SocketAddr,
    pub maps: GoogleMapsConfig,
}

/// Credentials and endpoint for the maps provider.
#[derive(Clone, Debug)]
pub struct GoogleMapsConfig {
    /// Scheme and host, e.g. `https://maps.googleapis.com`.
    pub api_base: String,
    pub api_key: String,
    /// When set, reverse geocoding still checks the upstream response but
    /// answers with this address instead of the one returned.
    pub placeholder_address: Option<String>,
}

impl GoogleMapsConfig {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            placeholder_address: None,
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `PLACES_LISTEN_ADDR`,
    /// `GOOGLE_MAPS_API_BASE`, `GOOGLE_MAPS_API_KEY` and
    /// `GEOCODE_PLACEHOLDER_ADDRESS`. Only the API key is required.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| env::var(key))
    }

    pub fn from_vars<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let optional = |key: &str| var(key).ok().filter(|value| !value.trim().is_empty());

        let max_connections = match optional("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| config_error("DATABASE_MAX_CONNECTIONS must be a positive integer"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let listen_addr = optional("PLACES_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into())
            .parse::<SocketAddr>()
            .map_err(|_| config_error("PLACES_LISTEN_ADDR must be a socket address"))?;

        let maps = GoogleMapsConfig {
            api_base: optional("GOOGLE_MAPS_API_BASE")
                .unwrap_or_else(|| DEFAULT_MAPS_API_BASE.into())
                .trim_end_matches('/')
                .to_string(),
            api_key: var("GOOGLE_MAPS_API_KEY")?,
            placeholder_address: optional("GEOCODE_PLACEHOLDER_ADDRESS"),
        };

        Ok(Self {
            database_url: optional("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            max_connections,
            listen_addr,
            maps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_vars(lookup(&[("GOOGLE_MAPS_API_KEY", "test-key")])).unwrap();

        assert_eq!(config.database_url, "sqlite://places.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.maps.api_base, "https://maps.googleapis.com");
        assert_eq!(config.maps.api_key, "test-key");
        assert_eq!(config.maps.placeholder_address, None);
    }

    #[test]
    fn missing_api_key_is_an_env_error() {
        let err = Config::from_vars(lookup(&[])).unwrap_err();
        assert_eq!(err.code, 1);
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_vars(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "k"),
            ("GOOGLE_MAPS_API_BASE", "http://localhost:8080/"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "1"),
            ("PLACES_LISTEN_ADDR", "0.0.0.0:8000"),
            ("GEOCODE_PLACEHOLDER_ADDRESS", "Kara, Tg Lama P."),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.listen_addr.port(), 8000);
        assert_eq!(config.maps.api_base, "http://localhost:8080");
        assert_eq!(
            config.maps.placeholder_address.as_deref(),
            Some("Kara, Tg Lama P.")
        );
    }

    #[test]
    fn blank_placeholder_counts_as_unset() {
        let config = Config::from_vars(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "k"),
            ("GEOCODE_PLACEHOLDER_ADDRESS", "  "),
        ]))
        .unwrap();

        assert_eq!(config.maps.placeholder_address, None);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = Config::from_vars(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "k"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert_eq!(err.code, 7);

        let err = Config::from_vars(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "k"),
            ("PLACES_LISTEN_ADDR", "not an address"),
        ]))
        .unwrap_err();
        assert_eq!(err.code, 7);
    }
}

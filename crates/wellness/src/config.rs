//! Server configuration loaded from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{WellnessError, WellnessResult};

pub const DEFAULT_PORT: u16 = 5000;
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_SEED_FIXTURES: &str = "WELLNESS_SEED_FIXTURES";
pub const ENV_CORS_ANY: &str = "WELLNESS_CORS_ANY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Seed the in-memory stores with the built-in sample content.
    pub seed_fixtures: bool,
    /// Attach a permissive CORS layer.
    pub cors_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            seed_fixtures: true,
            cors_any: true,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> WellnessResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> WellnessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = match lookup(ENV_HOST) {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|error| {
                WellnessError::InvalidInput(format!("{ENV_HOST}={raw}: {error}"))
            })?,
            None => defaults.host,
        };
        let port = match lookup(ENV_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|error| {
                WellnessError::InvalidInput(format!("{ENV_PORT}={raw}: {error}"))
            })?,
            None => defaults.port,
        };
        let seed_fixtures = match lookup(ENV_SEED_FIXTURES) {
            Some(raw) => parse_flag(ENV_SEED_FIXTURES, &raw)?,
            None => defaults.seed_fixtures,
        };
        let cors_any = match lookup(ENV_CORS_ANY) {
            Some(raw) => parse_flag(ENV_CORS_ANY, &raw)?,
            None => defaults.cors_any,
        };

        Ok(Self {
            host,
            port,
            seed_fixtures,
            cors_any,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(key: &str, raw: &str) -> WellnessResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WellnessError::InvalidInput(format!(
            "{key}={other}: expected a boolean"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("WELLNESS_SEED_FIXTURES", "false"),
            ("WELLNESS_CORS_ANY", "0"),
        ]))
        .unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert!(!config.seed_fixtures);
        assert!(!config.cors_any);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, WellnessError::InvalidInput(_)));

        let err =
            ServerConfig::from_lookup(lookup(&[("WELLNESS_SEED_FIXTURES", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("WELLNESS_SEED_FIXTURES"));
    }
}

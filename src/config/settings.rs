//! Runtime settings read from the environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::{AddrParseError, SocketAddr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5555";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// `DATABASE_URL`. `sqlite::memory:` gives a throwaway single-connection store.
    pub database_url: String,
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `DB_MAX_CONNECTIONS`
    pub max_connections: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = raw_addr.trim().parse().map_err(|e: AddrParseError| {
            ConfigError::Invalid {
                key: "BIND_ADDR",
                value: raw_addr.clone(),
                reason: e.to_string(),
            }
        })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => parse_max_connections(&raw)?,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        key: "DB_MAX_CONNECTIONS",
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let n: u32 = raw.trim().parse().map_err(|_| invalid("not an unsigned integer"))?;
    if n == 0 {
        return Err(invalid("must be at least 1"));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, "sqlite://app.db");
        assert_eq!(s.bind_addr, "127.0.0.1:5555".parse().unwrap());
        assert_eq!(s.max_connections, 5);
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DB_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(s.database_url, "sqlite::memory:");
        assert_eq!(s.bind_addr.port(), 8080);
        assert_eq!(s.max_connections, 12);
    }

    #[test]
    fn blank_database_url_uses_default() {
        let s = settings(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = settings(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
    }

    #[test]
    fn rejects_zero_connections() {
        let err = settings(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. }));
        assert!(settings(&[("DB_MAX_CONNECTIONS", "many")]).is_err());
    }
}

//! Load [`ServiceConfig`] from environment variables (optionally seeded from `.env`).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const ENV_MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";

impl ServiceConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(ENV_DATABASE_URL)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_var(&lookup, ENV_BIND_ADDR, DEFAULT_BIND_ADDR)?;
        let max_connections: u32 = parse_var(&lookup, ENV_MAX_CONNECTIONS, &DEFAULT_MAX_CONNECTIONS.to_string())?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_MAX_CONNECTIONS,
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        let max_body_bytes = parse_var(&lookup, ENV_MAX_BODY_BYTES, &DEFAULT_MAX_BODY_BYTES.to_string())?;

        Ok(ServiceConfig {
            database_url,
            bind_addr,
            max_connections,
            max_body_bytes,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string());
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.clone(),
        reason: e.to_string(),
    })
}

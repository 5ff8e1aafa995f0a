use std::env;

use anyhow::{Result, bail};

use crate::auth::tokens::{DEFAULT_ACCESS_TTL_SECS, DEFAULT_REFRESH_TTL_SECS};

const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub secret_key: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. The signing key has no default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret_key = match lookup("JWT_SECRET_KEY") {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!("JWT_SECRET_KEY must be set in .env file or environment variables"),
        };

        Ok(Self {
            secret_key,
            access_token_ttl_secs: value_or(&lookup, "ACCESS_TOKEN_TTL_SECS", DEFAULT_ACCESS_TTL_SECS),
            refresh_token_ttl_secs: value_or(&lookup, "REFRESH_TOKEN_TTL_SECS", DEFAULT_REFRESH_TTL_SECS),
            port: value_or(&lookup, "PORT", DEFAULT_PORT),
        })
    }
}

fn value_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

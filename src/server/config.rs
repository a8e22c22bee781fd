use std::net::SocketAddr;

use crate::server::{ddragon, error::config::ConfigError};

/// Address the server binds when `LOLDEX_ADDRESS` is unset.
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";

/// Runtime configuration sourced from environment variables.
///
/// Only `DATABASE_URL` is required; everything else falls back to a
/// default.
pub struct Config {
    pub database_url: String,
    pub address: SocketAddr,
    pub ddragon_url: String,
    pub ddragon_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;

        let address = std::env::var("LOLDEX_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_ADDRESS.to_string())
            .parse()
            .map_err(|err| ConfigError::InvalidEnvValue {
                var: "LOLDEX_ADDRESS".to_string(),
                reason: format!("{err}"),
            })?;

        let ddragon_url =
            std::env::var("DDRAGON_URL").unwrap_or_else(|_| ddragon::DEFAULT_URL.to_string());
        let ddragon_version = std::env::var("DDRAGON_VERSION")
            .unwrap_or_else(|_| ddragon::DEFAULT_VERSION.to_string());

        Ok(Self {
            database_url,
            address,
            ddragon_url,
            ddragon_version,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

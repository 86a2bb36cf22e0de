//! Environment-based server configuration.

use std::time::Duration;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

/// Server configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Connection URL of the relational store.
    pub database_url: String,
    /// Base URL substituted for the placeholder host in stored image URLs.
    pub external_catalog_base_url: String,
    /// Socket address the HTTP server listens on.
    pub bind_address: String,
    /// Upper bound for each store round-trip.
    pub query_timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Required
    /// - `DATABASE_URL`
    /// - `EXTERNAL_CATALOG_BASE_URL`
    ///
    /// # Optional
    /// - `BIND_ADDRESS` (default `0.0.0.0:8080`)
    /// - `QUERY_TIMEOUT_SECS` (default `30`, must be greater than zero)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            external_catalog_base_url: required("EXTERNAL_CATALOG_BASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            query_timeout: Duration::from_secs(query_timeout_secs(
                std::env::var("QUERY_TIMEOUT_SECS").ok(),
            )?),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}

fn query_timeout_secs(value: Option<String>) -> Result<u64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_QUERY_TIMEOUT_SECS);
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: "QUERY_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(secs),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: "QUERY_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        }),
    }
}

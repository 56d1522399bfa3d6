// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Environment-based runtime configuration.

use brella_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Default city used when a request names none.
pub const DEFAULT_CITY: &str = "Redmond";

/// Default Open-Meteo forecast endpoint.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Default weather cache lifetime in seconds (30 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 1800;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the Brella service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// City assumed when a request names none
    pub default_city: String,
    /// Base URL of the weather forecast API
    pub weather_base_url: String,
    /// Weather cache lifetime in seconds
    pub cache_ttl_secs: u64,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_city: DEFAULT_CITY.into(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.into(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable is set but
    /// cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let default_city = env::var("BRELLA_DEFAULT_CITY").unwrap_or_else(|_| DEFAULT_CITY.into());

        let weather_base_url = env::var("BRELLA_WEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_WEATHER_BASE_URL.into());

        let cache_ttl_secs = parse_env_u64("BRELLA_WEATHER_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let http_timeout_secs =
            parse_env_u64("BRELLA_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        Ok(Self {
            default_city,
            weather_base_url,
            cache_ttl_secs,
            http_timeout_secs,
        })
    }
}

/// Parse an optional numeric environment variable.
fn parse_env_u64(name: &str, default: u64) -> AppResult<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| AppError::config(format!("{name} must be a positive integer: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_platform_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.default_city, "Redmond");
        assert_eq!(config.cache_ttl_secs, 1800);
        assert!(config.weather_base_url.contains("open-meteo"));
    }
}

// ABOUTME: Open-Meteo weather API client for current conditions and forecasts
// ABOUTME: Implements city geocoding fallback, condition mapping, and caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Open-Meteo Weather Client
//!
//! This module provides a client for the Open-Meteo forecast API, which
//! offers current weather conditions without authentication. City names
//! are resolved against a built-in coordinate table; unknown cities fall
//! back to the platform default rather than failing.
//!
//! # Features
//! - Current conditions in Fahrenheit and mph
//! - WMO weather code to condition text mapping
//! - 30-minute caching to minimize API calls
//! - Mock provider for testing
//!
//! # Example
//! ```rust,no_run
//! use brella::external::weather_client::{OpenMeteoClient, WeatherClientConfig, WeatherProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenMeteoClient::new(WeatherClientConfig::default());
//! let snapshot = client.current_weather("Seattle").await?;
//! println!("{}F and {}", snapshot.temperature, snapshot.condition);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use brella_core::errors::{AppError, AppResult};
use brella_core::models::{ForecastData, WeatherSnapshot};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::{DEFAULT_CACHE_TTL_SECS, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_WEATHER_BASE_URL};

/// Known city coordinates as (name, latitude, longitude).
///
/// Lookup is case-insensitive on the name portion before any comma, so
/// "Seattle, WA" resolves the same as "seattle". Unknown cities resolve
/// to the first entry.
const CITY_COORDINATES: &[(&str, f64, f64)] = &[
    ("redmond", 47.6740, -122.1215),
    ("seattle", 47.6062, -122.3321),
    ("denver", 39.7392, -104.9903),
    ("austin", 30.2672, -97.7431),
    ("new york", 40.7128, -74.0060),
    ("los angeles", 34.0522, -118.2437),
];

/// Map a WMO weather interpretation code to a condition description.
fn condition_for_code(code: u32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Partly cloudy",
        2 | 3 => "Overcast",
        45 | 48 => "Foggy",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Partly cloudy",
    }
}

/// Label a temperature with a one-word summary band.
fn temperature_summary(temp: f64) -> &'static str {
    if temp < 32.0 {
        "freezing"
    } else if temp < 50.0 {
        "cold"
    } else if temp < 65.0 {
        "cool"
    } else if temp < 75.0 {
        "mild"
    } else if temp < 85.0 {
        "warm"
    } else {
        "hot"
    }
}

/// Resolve a city name to coordinates, falling back to the default city.
fn resolve_city(city: &str) -> (f64, f64) {
    let normalized = city
        .split(',')
        .next()
        .unwrap_or(city)
        .trim()
        .to_lowercase();

    CITY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == normalized)
        .map_or_else(
            || {
                warn!(city = %city, "unknown city, using default coordinates");
                (CITY_COORDINATES[0].1, CITY_COORDINATES[0].2)
            },
            |(_, lat, lon)| (*lat, *lon),
        )
}

/// A source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for a city.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream service fails or its response
    /// cannot be parsed.
    async fn current_weather(&self, city: &str) -> AppResult<WeatherSnapshot>;

    /// Fetch a day-level forecast wrapping the current conditions.
    ///
    /// The daily range is estimated from the current reading when the
    /// provider has no richer data.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying current-conditions fetch fails.
    async fn forecast(&self, city: &str) -> AppResult<ForecastData> {
        let current = self.current_weather(city).await?;
        let summary = temperature_summary(current.temperature).to_owned();
        Ok(ForecastData {
            city: city.to_owned(),
            min_temp: Some(current.temperature - 5.0),
            max_temp: Some(current.temperature + 8.0),
            summary,
            current,
        })
    }
}

/// Open-Meteo client configuration
#[derive(Debug, Clone)]
pub struct WeatherClientConfig {
    /// Base URL for the forecast API
    pub base_url: String,
    /// Cache TTL in seconds (default: 1800 = 30 minutes)
    pub cache_ttl_secs: u64,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WeatherClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_owned(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Open-Meteo current conditions response
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    apparent_temperature: Option<f64>,
    relative_humidity_2m: Option<f64>,
    precipitation: Option<f64>,
    wind_speed_10m: Option<f64>,
    weather_code: u32,
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: WeatherSnapshot,
    expires_at: Instant,
}

/// Open-Meteo forecast API client
pub struct OpenMeteoClient {
    config: WeatherClientConfig,
    http_client: reqwest::Client,
    cache: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client
    #[must_use]
    pub fn new(config: WeatherClientConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            config,
            http_client,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear the weather cache (useful for testing)
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    /// Number of cached entries (useful for monitoring)
    pub async fn cache_len(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn fetch_current(&self, city: &str) -> AppResult<WeatherSnapshot> {
        let (lat, lon) = resolve_city(city);

        let url = format!(
            "{}?latitude={lat}&longitude={lon}\
             &current=temperature_2m,apparent_temperature,relative_humidity_2m,\
             precipitation,wind_speed_10m,weather_code\
             &temperature_unit=fahrenheit&wind_speed_unit=mph",
            self.config.base_url
        );

        debug!(city = %city, "fetching weather from Open-Meteo");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::external_service("Open-Meteo", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "Open-Meteo",
                format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let forecast: ForecastResponse = response.json().await.map_err(|e| {
            AppError::external_service("Open-Meteo", format!("JSON parse error: {e}"))
        })?;

        let current = forecast.current;
        let temperature = current.temperature_2m;

        // Open-Meteo reports precipitation as an amount in mm; scale it
        // into a rough chance-of-rain percentage.
        let rain_chance = current
            .precipitation
            .map_or(0.0, |prcp| (prcp * 10.0).min(100.0));

        Ok(WeatherSnapshot {
            temperature,
            feels_like: current.apparent_temperature.unwrap_or(temperature - 2.0),
            condition: condition_for_code(current.weather_code).to_owned(),
            rain_chance,
            wind_speed: current.wind_speed_10m.unwrap_or(0.0),
            humidity: current.relative_humidity_2m,
            timestamp: Utc::now(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current_weather(&self, city: &str) -> AppResult<WeatherSnapshot> {
        let cache_key = city.trim().to_lowercase();

        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.get(&cache_key) {
                if Instant::now() < entry.expires_at {
                    debug!(city = %city, "weather cache hit");
                    return Ok(entry.snapshot.clone());
                }
            }
        }

        let snapshot = self.fetch_current(city).await?;

        {
            let mut cache = self.cache.write().await;
            cache.insert(
                cache_key,
                CacheEntry {
                    snapshot: snapshot.clone(),
                    expires_at: Instant::now() + Duration::from_secs(self.config.cache_ttl_secs),
                },
            );
        }

        Ok(snapshot)
    }
}

/// Fixed-response weather provider for tests and offline use.
///
/// Returns mild partly-cloudy conditions for every city.
#[derive(Debug, Clone, Default)]
pub struct MockWeatherProvider;

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current_weather(&self, _city: &str) -> AppResult<WeatherSnapshot> {
        Ok(WeatherSnapshot {
            temperature: 65.0,
            feels_like: 63.0,
            condition: "partly cloudy".to_owned(),
            rain_chance: 20.0,
            wind_speed: 8.0,
            humidity: Some(55.0),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city_resolves_to_its_coordinates() {
        let (lat, lon) = resolve_city("Seattle");
        assert!((lat - 47.6062).abs() < 1e-6);
        assert!((lon - -122.3321).abs() < 1e-6);
    }

    #[test]
    fn city_with_state_suffix_resolves() {
        let (lat, _) = resolve_city("Denver, CO");
        assert!((lat - 39.7392).abs() < 1e-6);
    }

    #[test]
    fn unknown_city_falls_back_to_default() {
        let (lat, lon) = resolve_city("Atlantis");
        assert!((lat - 47.6740).abs() < 1e-6);
        assert!((lon - -122.1215).abs() < 1e-6);
    }

    #[test]
    fn weather_codes_map_to_conditions() {
        assert_eq!(condition_for_code(0), "Clear sky");
        assert_eq!(condition_for_code(65), "Heavy rain");
        assert_eq!(condition_for_code(75), "Heavy snow");
        assert_eq!(condition_for_code(95), "Thunderstorm");
        assert_eq!(condition_for_code(42), "Partly cloudy");
    }

    #[test]
    fn temperature_summary_bands() {
        assert_eq!(temperature_summary(20.0), "freezing");
        assert_eq!(temperature_summary(40.0), "cold");
        assert_eq!(temperature_summary(60.0), "cool");
        assert_eq!(temperature_summary(70.0), "mild");
        assert_eq!(temperature_summary(80.0), "warm");
        assert_eq!(temperature_summary(95.0), "hot");
    }
}

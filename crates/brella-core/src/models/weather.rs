// ABOUTME: Weather snapshot and forecast data models
// ABOUTME: Immutable value types consumed by the outfit composition engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time weather reading.
///
/// This is an immutable input to the composition engine: it has no identity
/// beyond its values and the engine never mutates it. Temperatures are in
/// Fahrenheit, wind speeds in mph, and `rain_chance` is a percentage in
/// [0, 100]. Out-of-range values are not rejected; they propagate into
/// threshold checks and descriptive text unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Fahrenheit
    pub temperature: f64,
    /// Perceived temperature in Fahrenheit
    pub feels_like: f64,
    /// Free-text condition description (e.g. "clear", "light rain")
    pub condition: String,
    /// Chance of rain as a percentage (0-100)
    pub rain_chance: f64,
    /// Wind speed in mph
    pub wind_speed: f64,
    /// Humidity percentage, when the source reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Time of the reading
    pub timestamp: DateTime<Utc>,
}

/// A city-level forecast wrapping the current conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    /// City name as resolved by the weather provider
    pub city: String,
    /// Current weather conditions
    pub current: WeatherSnapshot,
    /// Minimum temperature for the day, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<f64>,
    /// Maximum temperature for the day, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<f64>,
    /// Brief weather summary (e.g. "mild", "cold", "hot")
    pub summary: String,
}

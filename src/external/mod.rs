// ABOUTME: External API client modules (Open-Meteo weather)
// ABOUTME: Provides live weather data integration and caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! External API Clients
//!
//! This module contains clients for external APIs used by the Brella
//! platform.

pub mod weather_client;

// Re-export commonly used types
pub use weather_client::{
    MockWeatherProvider, OpenMeteoClient, WeatherClientConfig, WeatherProvider,
};

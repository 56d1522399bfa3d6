// ABOUTME: Threshold configuration for the composer, planner, and safety checker
// ABOUTME: Config structs with defaults carrying the platform's decision thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Threshold configuration.
//!
//! Each engine component takes its tunable thresholds from a config struct
//! whose `Default` carries the platform values. Callers that need
//! different cut-offs construct a custom config; everything else uses the
//! defaults.

use brella_core::constants::limits::{MAX_OUTFIT_ITEMS, MIN_OUTFIT_ITEMS};
use serde::{Deserialize, Serialize};

/// Item budget for the wardrobe composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Maximum items in a composed list
    pub max_items: usize,
    /// Base wardrobe items kept verbatim before the activity merge
    pub core_items: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_items: MAX_OUTFIT_ITEMS,
            core_items: MIN_OUTFIT_ITEMS,
        }
    }
}

/// Thresholds for the slot-based outfit planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Comfort-profile temperature shift in Fahrenheit
    pub comfort_shift_f: f64,
    /// Adjusted temperature at or above which no outer layer is needed
    pub no_layer_min_temp: f64,
    /// Wind speed below which no outer layer is needed (mph)
    pub no_layer_max_wind: f64,
    /// Rain chance below which no outer layer is needed (percent)
    pub no_layer_max_rain: f64,
    /// Adjusted temperature below which warmth is needed
    pub warmth_threshold: f64,
    /// Wind speed above which wind protection is needed (mph)
    pub wind_threshold: f64,
    /// Rain chance above which rain protection is needed (percent)
    pub rain_threshold: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            comfort_shift_f: 5.0,
            no_layer_min_temp: 75.0,
            no_layer_max_wind: 15.0,
            no_layer_max_rain: 30.0,
            warmth_threshold: 50.0,
            wind_threshold: 15.0,
            rain_threshold: 40.0,
        }
    }
}

/// Thresholds for the weather safety checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Temperature below which cold risk is high (F)
    pub extreme_cold_temp: f64,
    /// Temperature below which cold risk is medium (F)
    pub freezing_temp: f64,
    /// Temperature above which heat risk is high (F)
    pub extreme_heat_temp: f64,
    /// Temperature above which heat risk is medium (F)
    pub hot_temp: f64,
    /// Wind speed above which wind risk is high (mph)
    pub strong_wind_speed: f64,
    /// Wind speed above which wind risk is low (mph)
    pub windy_speed: f64,
    /// Rain chance above which storm risk is high (percent)
    pub storm_rain_chance: f64,
    /// Rain chance above which rain risk is low (percent)
    pub likely_rain_chance: f64,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            extreme_cold_temp: 20.0,
            freezing_temp: 32.0,
            extreme_heat_temp: 95.0,
            hot_temp: 85.0,
            strong_wind_speed: 25.0,
            windy_speed: 15.0,
            storm_rain_chance: 70.0,
            likely_rain_chance: 50.0,
        }
    }
}

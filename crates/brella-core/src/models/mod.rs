// ABOUTME: Core data models shared across the Brella platform
// ABOUTME: Re-exports weather, outfit, safety, and preference types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Core data models for weather, outfits, safety, and user preferences.

/// Clothing items, activity context, and planned outfits
pub mod outfit;

/// User personas, comfort profiles, and stored preferences
pub mod preferences;

/// Weather risk levels and safety reports
pub mod safety;

/// Weather snapshots and forecast data
pub mod weather;

pub use outfit::{ActivityContext, ClothingItem, OutfitPlan};
pub use preferences::{ComfortProfile, Persona, UserPreferences};
pub use safety::{RiskLevel, SafetyReport};
pub use weather::{ForecastData, WeatherSnapshot};

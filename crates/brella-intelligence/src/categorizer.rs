// ABOUTME: Weather categorization into seven coarse buckets
// ABOUTME: Ordered, short-circuiting predicates over temperature and condition text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Weather categorization.
//!
//! Maps a numeric/textual weather snapshot to one of a fixed set of
//! categories using ordered, first-match-wins predicates. Pure and total:
//! every (temperature, condition) pair yields exactly one category.

use serde::{Deserialize, Serialize};

/// Coarse weather bucket driving base wardrobe selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    /// Above 80F with humid/muggy/sticky conditions
    HotHumid,
    /// Warm and clear (above 80F otherwise, or above 70F)
    SunnyWarm,
    /// Below 45F without snow
    Cold,
    /// Snow in the condition text, or below freezing
    Snowy,
    /// Rain, drizzle, showers, or precipitation
    Rainy,
    /// Wind, gusts, or breezy conditions
    Windy,
    /// Moderate conditions (45-70F)
    Mild,
}

impl WeatherCategory {
    /// The snake_case string form used in serialized responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HotHumid => "hot_humid",
            Self::SunnyWarm => "sunny_warm",
            Self::Cold => "cold",
            Self::Snowy => "snowy",
            Self::Rainy => "rainy",
            Self::Windy => "windy",
            Self::Mild => "mild",
        }
    }
}

/// Case-insensitive substring test against a keyword set.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

/// Categorize weather conditions.
///
/// The predicates are evaluated in order and the first match wins, so a
/// snowy 85F reading is still `HotHumid`/`SunnyWarm` (temperature check
/// runs first) while a snowy 50F reading is `Snowy` regardless of the rest
/// of the condition text.
#[must_use]
pub fn categorize(temperature: f64, condition: &str) -> WeatherCategory {
    if temperature > 80.0 {
        return if contains_any(condition, &["humid", "muggy", "sticky"]) {
            WeatherCategory::HotHumid
        } else {
            WeatherCategory::SunnyWarm
        };
    }
    if contains_any(condition, &["snow"]) || temperature < 32.0 {
        return WeatherCategory::Snowy;
    }
    if contains_any(condition, &["rain", "drizzle", "shower", "precipitation"]) {
        return WeatherCategory::Rainy;
    }
    if contains_any(condition, &["wind", "gust", "breezy"]) {
        return WeatherCategory::Windy;
    }
    if temperature < 45.0 {
        return WeatherCategory::Cold;
    }
    if temperature > 70.0 {
        return WeatherCategory::SunnyWarm;
    }
    WeatherCategory::Mild
}

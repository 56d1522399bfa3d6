// ABOUTME: Color preference bucket resolution and description palettes
// ABOUTME: First-match-wins substring search over free-text color preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

use serde::{Deserialize, Serialize};

/// Resolved color preference bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    /// Whites, blacks, and grays
    #[default]
    Neutral,
    /// Navy and blue tones
    Blues,
    /// Tans, browns, and olives
    Earth,
}

/// Three-slot palette used to color item descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Light slot (shirts, light suits)
    pub light: &'static str,
    /// Dark slot (outerwear, bottoms, footwear)
    pub dark: &'static str,
    /// Accent slot (hats, scarves, layering pieces)
    pub accent: &'static str,
}

impl Palette {
    /// The fixed palette for a resolved color bucket.
    #[must_use]
    pub const fn for_bucket(bucket: ColorBucket) -> Self {
        match bucket {
            ColorBucket::Neutral => Self {
                light: "white",
                dark: "black",
                accent: "gray",
            },
            ColorBucket::Blues => Self {
                light: "light blue",
                dark: "navy",
                accent: "blue",
            },
            ColorBucket::Earth => Self {
                light: "tan",
                dark: "brown",
                accent: "olive",
            },
        }
    }
}

/// Resolve a color bucket from free-text color preferences.
///
/// First-match-wins substring search in the fixed order neutral, blues,
/// earth; anything unrecognized falls back to neutral. Note the blues test
/// matches the bare substring "blue", so "navy blue" and "blues" both hit.
#[must_use]
pub fn resolve_color_bucket(color_preferences: &[String]) -> ColorBucket {
    let matches = |needle: &str| {
        color_preferences
            .iter()
            .any(|pref| pref.to_lowercase().contains(needle))
    };

    if matches("neutral") {
        ColorBucket::Neutral
    } else if matches("blue") {
        ColorBucket::Blues
    } else if matches("earth") {
        ColorBucket::Earth
    } else {
        ColorBucket::Neutral
    }
}

/// Capitalize the first letter of a color word for description text.
#[must_use]
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

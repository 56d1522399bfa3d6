// ABOUTME: Style preference flags derived from free-text style strings
// ABOUTME: Non-exclusive keyword tests used by the layered composer variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

/// Style modifiers derived from free-text style preferences.
///
/// Each flag is an independent substring test; several can be true at
/// once ("formal minimalist" sets both).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleFlags {
    /// "minimalist" appears in any style preference
    pub is_minimalist: bool,
    /// "formal" appears in any style preference
    pub is_formal: bool,
    /// "casual" appears in any style preference
    pub is_casual: bool,
    /// "sporty" or "athletic" appears in any style preference
    pub is_sporty: bool,
}

impl StyleFlags {
    /// Derive flags from free-text style preference strings.
    #[must_use]
    pub fn from_preferences(style_preferences: &[String]) -> Self {
        let any_contains = |needles: &[&str]| {
            style_preferences.iter().any(|pref| {
                let lower = pref.to_lowercase();
                needles.iter().any(|needle| lower.contains(needle))
            })
        };

        Self {
            is_minimalist: any_contains(&["minimalist"]),
            is_formal: any_contains(&["formal"]),
            is_casual: any_contains(&["casual"]),
            is_sporty: any_contains(&["sporty", "athletic"]),
        }
    }
}

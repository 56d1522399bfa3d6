// ABOUTME: Weather safety threshold checker with escalate-only risk levels
// ABOUTME: Ordered cold, heat, wind, rain/storm, and snow checks producing warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Weather safety assessment.
//!
//! Independent threshold checks run in a fixed order: cold, heat, wind,
//! rain/storm, snow. The risk level starts at none and is only ever
//! escalated within one evaluation. The wind and rain checks assign their
//! "low" severity only while the level is still none, so the evaluation
//! order is part of the observable contract.

use brella_core::models::{RiskLevel, SafetyReport};
use tracing::debug;

use crate::config::SafetyConfig;

/// The safety threshold checker.
#[derive(Debug, Clone, Default)]
pub struct SafetyChecker {
    config: SafetyConfig,
}

impl SafetyChecker {
    /// Create a checker with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checker with custom thresholds.
    #[must_use]
    pub const fn with_config(config: SafetyConfig) -> Self {
        Self { config }
    }

    /// Check weather conditions for safety concerns.
    #[must_use]
    pub fn check(
        &self,
        temperature: f64,
        wind_speed: f64,
        rain_chance: f64,
        condition: &str,
    ) -> SafetyReport {
        let cfg = &self.config;
        let condition_lower = condition.to_lowercase();
        let mut risk_level = RiskLevel::None;
        let mut warnings: Vec<&str> = Vec::new();

        if temperature < cfg.extreme_cold_temp {
            risk_level = risk_level.escalate(RiskLevel::High);
            warnings.push(
                "\u{26a0}\u{fe0f} Extreme cold warning: Protect your ears, hands, and face. \
                 Limit outdoor exposure.",
            );
        } else if temperature < cfg.freezing_temp {
            risk_level = risk_level.escalate(RiskLevel::Medium);
            warnings.push(
                "\u{2744}\u{fe0f} Freezing temperatures: Wear warm layers and watch for ice on \
                 walkways.",
            );
        }

        if temperature > cfg.extreme_heat_temp {
            risk_level = risk_level.escalate(RiskLevel::High);
            warnings.push(
                "\u{1f321}\u{fe0f} Extreme heat warning: Stay hydrated, wear light colors, and \
                 avoid prolonged sun exposure.",
            );
        } else if temperature > cfg.hot_temp {
            risk_level = risk_level.escalate(RiskLevel::Medium);
            warnings
                .push("\u{2600}\u{fe0f} Hot weather: Drink plenty of water and take breaks in shade.");
        }

        if wind_speed > cfg.strong_wind_speed {
            risk_level = risk_level.escalate(RiskLevel::High);
            warnings.push("\u{1f4a8} Strong winds: Secure loose items and avoid using umbrellas.");
        } else if wind_speed > cfg.windy_speed {
            // Low severity only while nothing has fired yet.
            risk_level = risk_level.escalate(RiskLevel::Low);
            warnings.push("\u{1f32c}\u{fe0f} Windy conditions: Consider a windproof jacket.");
        }

        if rain_chance > cfg.storm_rain_chance
            || condition_lower.contains("storm")
            || condition_lower.contains("thunder")
        {
            risk_level = risk_level.escalate(RiskLevel::High);
            warnings.push(
                "\u{26c8}\u{fe0f} Storm warning: Carry rain gear and avoid open areas during \
                 lightning.",
            );
        } else if rain_chance > cfg.likely_rain_chance {
            risk_level = risk_level.escalate(RiskLevel::Low);
            warnings.push(
                "\u{1f327}\u{fe0f} High chance of rain: Bring an umbrella or rain jacket.",
            );
        }

        if condition_lower.contains("snow") {
            // Snow upgrades any existing concern to high; on its own it is medium.
            risk_level = if risk_level == RiskLevel::None {
                RiskLevel::Medium
            } else {
                RiskLevel::High
            };
            warnings.push(
                "\u{1f328}\u{fe0f} Snow expected: Dress warmly and watch for slippery conditions.",
            );
        }

        let has_warnings = !warnings.is_empty();
        let safety_message = has_warnings.then(|| warnings.join(" "));

        debug!(
            risk_level = risk_level.as_str(),
            warnings = warnings.len(),
            "safety check complete"
        );

        SafetyReport {
            risk_level,
            safety_message,
            has_warnings,
        }
    }
}

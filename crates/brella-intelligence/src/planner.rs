// ABOUTME: Slot-based outfit planner with comfort-profile temperature adjustment
// ABOUTME: Per-slot selection over adjusted temperature, wind, rain, and activity context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! The slot-based outfit planner.
//!
//! Produces a single structured outfit (top / bottom / outer layer /
//! footwear / accessories / notes) rather than an item list. The
//! comfort-profile shift is applied to the temperature first and every
//! slot decision uses the adjusted value; the notes quote the original
//! reading.
//!
//! Unrecognized strings for persona, comfort profile, or activity fall
//! through to the else branch of each decision. That is graceful
//! degradation, not an error path.

use brella_core::models::OutfitPlan;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PlannerConfig;

// Slot band edges, in Fahrenheit (applied to the adjusted temperature).
const TOP_THERMAL_MAX: f64 = 40.0;
const TOP_LONG_SLEEVE_MAX: f64 = 60.0;
const TOP_TSHIRT_MAX: f64 = 75.0;
const BOTTOM_WARM_MAX: f64 = 40.0;
const BOTTOM_JEANS_MAX: f64 = 65.0;
const BOTTOM_LIGHT_MAX: f64 = 80.0;
const SPORTS_LEGGINGS_MAX: f64 = 50.0;
const HEAVY_COAT_MAX: f64 = 32.0;
const MEDIUM_JACKET_MAX: f64 = 50.0;
const FORMAL_SWEATER_MAX: f64 = 60.0;
const ACCESSORY_COLD_MAX: f64 = 40.0;
const ACCESSORY_GLOVES_MAX: f64 = 30.0;
const ACCESSORY_SUN_MIN: f64 = 80.0;
const SPORTS_CAP_WIND_MIN: f64 = 20.0;
const NOTES_COLD_MAX: f64 = 50.0;
const NOTES_MILD_MAX: f64 = 70.0;

/// Inputs to a planning run.
///
/// The string fields are enum-like but deliberately open: any
/// unrecognized value selects the default branch of the decisions that
/// consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Temperature in Fahrenheit, before comfort adjustment
    pub temperature: f64,
    /// Rain probability (0-100)
    pub rain_chance: f64,
    /// Wind speed in mph
    pub wind_speed: f64,
    /// Activity category: work, casual, sports, formal
    pub activity_category: String,
    /// Required formality: casual, business_casual, formal
    pub formality_level: String,
    /// Movement intensity: low, medium, high. Accepted for contract
    /// compatibility; the current rules do not branch on it.
    pub movement_level: String,
    /// Style persona: practical, fashion, kid_friendly
    pub persona: String,
    /// Temperature sensitivity: runs_cold, neutral, runs_hot
    pub comfort_profile: String,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            rain_chance: 0.0,
            wind_speed: 0.0,
            activity_category: "casual".to_owned(),
            formality_level: "casual".to_owned(),
            movement_level: "medium".to_owned(),
            persona: "practical".to_owned(),
            comfort_profile: "neutral".to_owned(),
        }
    }
}

/// The slot-based planner.
#[derive(Debug, Clone, Default)]
pub struct OutfitPlanner {
    config: PlannerConfig,
}

impl OutfitPlanner {
    /// Create a planner with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner with custom thresholds.
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Compute an outfit plan for the given weather and context.
    #[must_use]
    pub fn plan(&self, request: &PlanRequest) -> OutfitPlan {
        let adjusted = self.adjust_for_comfort(request.temperature, &request.comfort_profile);
        let formal = request.formality_level == "formal";
        let sports = request.activity_category == "sports";

        let plan = OutfitPlan {
            top: Self::select_top(adjusted, sports, formal),
            bottom: Self::select_bottom(adjusted, sports),
            outer_layer: self.select_outer_layer(
                adjusted,
                request.wind_speed,
                request.rain_chance,
                formal,
            ),
            footwear: Self::select_footwear(
                &request.activity_category,
                formal,
                request.rain_chance,
                self.config.rain_threshold,
            ),
            accessories: Self::select_accessories(
                request.rain_chance,
                request.wind_speed,
                adjusted,
                sports,
                self.config.rain_threshold,
            ),
            notes: Self::generate_notes(request, adjusted),
        };
        debug!(
            adjusted_temp = adjusted,
            has_outer_layer = plan.outer_layer.is_some(),
            accessories = plan.accessories.len(),
            "planned outfit"
        );
        plan
    }

    /// Shift the perceived temperature for the comfort profile.
    fn adjust_for_comfort(&self, temperature: f64, comfort_profile: &str) -> f64 {
        match comfort_profile {
            "runs_cold" => temperature - self.config.comfort_shift_f,
            "runs_hot" => temperature + self.config.comfort_shift_f,
            _ => temperature,
        }
    }

    fn select_top(adjusted: f64, sports: bool, formal: bool) -> String {
        if formal {
            return if adjusted < FORMAL_SWEATER_MAX {
                "dress shirt or blouse with sweater".to_owned()
            } else {
                "dress shirt or blouse".to_owned()
            };
        }
        if sports {
            return "moisture-wicking athletic shirt or tank".to_owned();
        }
        if adjusted < TOP_THERMAL_MAX {
            "long-sleeve thermal or henley".to_owned()
        } else if adjusted < TOP_LONG_SLEEVE_MAX {
            "long-sleeve shirt or light sweater".to_owned()
        } else if adjusted < TOP_TSHIRT_MAX {
            "t-shirt or short-sleeve shirt".to_owned()
        } else {
            "light t-shirt or tank top".to_owned()
        }
    }

    fn select_bottom(adjusted: f64, sports: bool) -> String {
        if sports {
            return if adjusted < SPORTS_LEGGINGS_MAX {
                "athletic leggings or joggers".to_owned()
            } else {
                "athletic shorts or breathable pants".to_owned()
            };
        }
        if adjusted < BOTTOM_WARM_MAX {
            "warm pants or jeans".to_owned()
        } else if adjusted < BOTTOM_JEANS_MAX {
            "jeans or casual pants".to_owned()
        } else if adjusted < BOTTOM_LIGHT_MAX {
            "light pants or shorts".to_owned()
        } else {
            "shorts or light skirt".to_owned()
        }
    }

    /// Select the outer layer, or `None` when no layer is needed.
    ///
    /// Rain protection takes priority over warmth, which takes priority
    /// over wind. The no-layer short-circuit fires before any of those.
    fn select_outer_layer(
        &self,
        adjusted: f64,
        wind: f64,
        rain: f64,
        formal: bool,
    ) -> Option<String> {
        if adjusted >= self.config.no_layer_min_temp
            && wind < self.config.no_layer_max_wind
            && rain < self.config.no_layer_max_rain
        {
            return None;
        }

        let needs_warmth = adjusted < self.config.warmth_threshold;
        let needs_wind_protection = wind > self.config.wind_threshold;
        let needs_rain_protection = rain > self.config.rain_threshold;

        if formal {
            if needs_rain_protection {
                return Some("dress coat with rain protection".to_owned());
            }
            if needs_warmth {
                return Some("wool coat or blazer".to_owned());
            }
            return None;
        }

        if needs_rain_protection {
            return Some(if needs_warmth {
                "insulated rain jacket".to_owned()
            } else {
                "light rain jacket or windbreaker".to_owned()
            });
        }

        if needs_warmth {
            return Some(if adjusted < HEAVY_COAT_MAX {
                "heavy winter coat".to_owned()
            } else if adjusted < MEDIUM_JACKET_MAX {
                "medium jacket or fleece".to_owned()
            } else {
                "light jacket".to_owned()
            });
        }

        if needs_wind_protection {
            return Some("windbreaker".to_owned());
        }

        None
    }

    fn select_footwear(activity: &str, formal: bool, rain: f64, rain_threshold: f64) -> String {
        if formal {
            return if rain > rain_threshold {
                "dress shoes (waterproof if possible)".to_owned()
            } else {
                "dress shoes or heels".to_owned()
            };
        }
        if activity == "sports" {
            return "athletic shoes or trail shoes".to_owned();
        }
        if rain > rain_threshold {
            "waterproof boots or rain boots".to_owned()
        } else if activity == "work" {
            "comfortable work shoes or loafers".to_owned()
        } else {
            "sneakers or casual shoes".to_owned()
        }
    }

    /// Accessories are additive and uncapped, in rule-firing order.
    fn select_accessories(
        rain: f64,
        wind: f64,
        adjusted: f64,
        sports: bool,
        rain_threshold: f64,
    ) -> Vec<String> {
        let mut accessories = Vec::new();

        if rain > rain_threshold {
            accessories.push("umbrella".to_owned());
        }

        if adjusted < ACCESSORY_COLD_MAX {
            accessories.push("warm hat or beanie".to_owned());
            accessories.push("scarf".to_owned());
            if adjusted < ACCESSORY_GLOVES_MAX {
                accessories.push("gloves".to_owned());
            }
        }

        if wind > SPORTS_CAP_WIND_MIN && sports {
            accessories.push("windproof cap".to_owned());
        }

        if adjusted > ACCESSORY_SUN_MIN {
            accessories.push("sunglasses".to_owned());
            accessories.push("sunscreen".to_owned());
        }

        accessories
    }

    fn generate_notes(request: &PlanRequest, adjusted: f64) -> String {
        let mut notes: Vec<String> = Vec::new();

        match request.persona.as_str() {
            "kid_friendly" => {
                if adjusted < NOTES_COLD_MAX {
                    notes.push("Bundle up warm - it's chilly out there!".to_owned());
                } else if request.rain_chance > 40.0 {
                    notes.push("Don't forget your rain gear for puddle jumping!".to_owned());
                } else {
                    notes.push("Perfect weather for fun outside!".to_owned());
                }
            }
            "fashion" => {
                notes.push("Layer colors and textures for a stylish look.".to_owned());
                if request.rain_chance > 40.0 {
                    notes.push(
                        "Rain doesn't mean sacrificing style - try a trendy rain jacket."
                            .to_owned(),
                    );
                }
            }
            _ => {
                let temp_desc = if adjusted < NOTES_COLD_MAX {
                    "cold"
                } else if adjusted < NOTES_MILD_MAX {
                    "mild"
                } else {
                    "warm"
                };
                // Quote the unadjusted reading, truncated like a display int.
                notes.push(format!(
                    "Weather is {temp_desc} at {}\u{b0}F.",
                    request.temperature.trunc() as i64
                ));
            }
        }

        match request.comfort_profile.as_str() {
            "runs_cold" => notes.push(
                "Since you tend to feel cold, adding extra layers is recommended.".to_owned(),
            ),
            "runs_hot" => {
                notes.push("Since you tend to feel warm, lighter options are better.".to_owned());
            }
            _ => {}
        }

        match request.activity_category.as_str() {
            "sports" => {
                notes.push("Choose breathable, flexible clothing for movement.".to_owned());
            }
            "formal" => notes.push("Dress to impress while staying comfortable.".to_owned()),
            _ => {}
        }

        notes.join(" ")
    }
}

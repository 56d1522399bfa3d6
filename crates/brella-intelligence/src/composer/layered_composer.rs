// ABOUTME: Layered composer variant with fine-grained incremental layering rules
// ABOUTME: Per-slot temperature bands, conditional accessories, and style extras capped at eight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

use brella_core::constants::limits::LAYERED_ITEM_CAP;
use brella_core::models::ClothingItem;
use tracing::debug;

use super::{ComposeRequest, OutfitComposer};
use crate::style::StyleFlags;

/// Color preference flags for the layered variant.
///
/// Unlike the wardrobe composer's single resolved bucket, this variant
/// keeps the flags independent and recognizes a bold/bright preference of
/// its own.
#[derive(Debug, Clone, Copy, Default)]
struct ColorFlags {
    neutral: bool,
    blues: bool,
    earth: bool,
    bold: bool,
}

impl ColorFlags {
    fn from_preferences(color_preferences: &[String]) -> Self {
        let joined = color_preferences.concat().to_lowercase();
        Self {
            neutral: joined.contains("neutral"),
            blues: joined.contains("blue"),
            earth: joined.contains("earth"),
            bold: joined.contains("bold") || joined.contains("bright"),
        }
    }

    /// Generic "in your preferred colors" phrasing for descriptions.
    const fn phrase(self) -> &'static str {
        if self.blues {
            "in navy or blue tones"
        } else if self.earth {
            "in earth tones"
        } else if self.bold {
            "in vibrant colors"
        } else if self.neutral {
            "in neutral tones"
        } else {
            "in your preferred colors"
        }
    }

    /// Pick a concrete color word by preference order.
    const fn pick(
        self,
        blues: &'static str,
        neutral: &'static str,
        earth: &'static str,
        fallback: &'static str,
    ) -> &'static str {
        if self.blues {
            blues
        } else if self.neutral {
            neutral
        } else if self.earth {
            earth
        } else {
            fallback
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Incremental layering composer used by the route-serving path.
///
/// Builds the outfit slot by slot (outerwear, top, bottoms, footwear),
/// then applies conditional accessory rules and style-driven extras with
/// count guards at each step, capped at eight items. Does not branch on
/// the request's activity; that concern belongs to the wardrobe variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredComposer;

impl LayeredComposer {
    /// Create the layered composer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutfitComposer for LayeredComposer {
    fn name(&self) -> &'static str {
        "layered"
    }

    #[allow(clippy::too_many_lines)] // One rule block per slot, in evaluation order
    fn compose(&self, request: &ComposeRequest) -> Vec<ClothingItem> {
        let style = StyleFlags::from_preferences(&request.style_preferences);
        let colors = ColorFlags::from_preferences(&request.color_preferences);
        let condition = request.condition.to_lowercase();
        let clothing_types = request.clothing_types.concat().to_lowercase();
        let temperature = request.temperature;
        let rainy = condition.contains("rain");

        let mut items: Vec<ClothingItem> = Vec::new();

        // Outerwear
        if temperature < 40.0 {
            if style.is_formal {
                items.push(ClothingItem::new(
                    "Outerwear",
                    "Wool Coat",
                    format!("Tailored {}", colors.phrase()),
                ));
            } else {
                let coat = colors.pick("navy", "charcoal", "brown", "black");
                items.push(ClothingItem::new(
                    "Outerwear",
                    "Heavy Coat",
                    format!("{} winter coat", capitalize(coat)),
                ));
            }
        } else if temperature < 60.0 {
            if clothing_types.contains("denim") || clothing_types.contains("jackets") {
                let jacket = if style.is_formal { "khaki" } else { "denim" };
                items.push(ClothingItem::new(
                    "Outerwear",
                    "Light Jacket",
                    format!("{} jacket", capitalize(jacket)),
                ));
            } else {
                items.push(ClothingItem::new(
                    "Outerwear",
                    "Light Jacket",
                    format!("Casual layer {}", colors.phrase()),
                ));
            }
        } else if !style.is_minimalist {
            let cardigan = colors.pick("blue", "beige", "olive", "gray");
            items.push(ClothingItem::new(
                "Outerwear",
                "Light Cardigan",
                format!("{} cardigan", capitalize(cardigan)),
            ));
        }

        // Top
        if temperature < 50.0 {
            let shirt = colors.pick("navy", "white or gray", "olive", "colorful");
            items.push(ClothingItem::new(
                "Top",
                "Long-Sleeve Shirt",
                format!("{} cotton", capitalize(shirt)),
            ));
        } else {
            let tee = colors.pick("blue", "white or black", "rust or tan", "any color");
            items.push(ClothingItem::new(
                "Top",
                "T-Shirt",
                format!("{} tee", capitalize(tee)),
            ));
        }

        // Bottoms
        if clothing_types.contains("jeans") {
            let wash = if colors.blues || style.is_formal {
                "dark wash"
            } else if colors.neutral {
                "medium wash"
            } else {
                "light wash"
            };
            items.push(ClothingItem::new(
                "Bottoms",
                "Jeans",
                format!("{} denim", capitalize(wash)),
            ));
        } else if temperature < 45.0 {
            let pants = colors.pick("navy", "gray or black", "brown", "dark");
            items.push(ClothingItem::new(
                "Bottoms",
                "Warm Pants",
                format!("{} insulated", capitalize(pants)),
            ));
        } else {
            let pants = if colors.earth || colors.neutral {
                "khaki"
            } else if colors.blues {
                "navy"
            } else {
                "chino"
            };
            items.push(ClothingItem::new(
                "Bottoms",
                "Casual Pants",
                format!("{} comfort", capitalize(pants)),
            ));
        }

        // Footwear
        if rainy || temperature < 40.0 {
            let boot = if colors.earth { "brown" } else { "black" };
            items.push(ClothingItem::new(
                "Footwear",
                "Waterproof Boots",
                format!("{} boots", capitalize(boot)),
            ));
        } else if clothing_types.contains("sneakers") {
            let sneaker = if colors.neutral || style.is_minimalist {
                "white"
            } else if colors.blues {
                "navy"
            } else {
                "any color"
            };
            items.push(ClothingItem::new(
                "Footwear",
                "Sneakers",
                format!("{} sneakers", capitalize(sneaker)),
            ));
        } else {
            let shoe = if colors.earth {
                "brown"
            } else if colors.neutral {
                "black"
            } else if colors.blues {
                "navy"
            } else {
                "casual"
            };
            items.push(ClothingItem::new(
                "Footwear",
                "Casual Shoes",
                format!("{} shoes", capitalize(shoe)),
            ));
        }

        // Conditional accessories
        if temperature > 70.0 || condition.contains("sunny") || condition.contains("clear") {
            let sunglasses = if colors.neutral {
                "aviators"
            } else if colors.bold {
                "wayfarers"
            } else {
                "classic"
            };
            items.push(ClothingItem::new(
                "Sunglasses",
                "Sunglasses",
                format!("{} for sun protection", capitalize(sunglasses)),
            ));
        }

        if temperature < 45.0 {
            // This site tests neutral before blues, unlike the slot picks.
            let hat = if colors.neutral {
                "gray"
            } else if colors.blues {
                "navy"
            } else if colors.earth {
                "brown"
            } else {
                "warm"
            };
            items.push(ClothingItem::new(
                "Accessory",
                "Winter Hat",
                format!("{} beanie or cap", capitalize(hat)),
            ));
        }

        if temperature < 50.0 {
            let scarf = if colors.neutral {
                "neutral"
            } else if colors.blues {
                "blue"
            } else if colors.earth {
                "earth tone"
            } else {
                "colorful"
            };
            items.push(ClothingItem::new(
                "Accessory",
                "Scarf",
                format!("{} knit scarf", capitalize(scarf)),
            ));
        }

        if rainy {
            items.push(ClothingItem::new(
                "Accessory",
                "Umbrella",
                "Compact waterproof umbrella",
            ));
        }

        if !rainy && (50.0..=75.0).contains(&temperature) {
            let accent = if colors.neutral {
                "silver"
            } else if colors.earth || colors.bold {
                "gold"
            } else {
                "minimal"
            };
            items.push(ClothingItem::new(
                "Accessory",
                "Watch or Bracelet",
                format!("{} accent", capitalize(accent)),
            ));
        }

        if temperature < 35.0 {
            let glove = if colors.neutral {
                "black"
            } else if colors.earth {
                "brown"
            } else {
                "warm"
            };
            items.push(ClothingItem::new(
                "Accessory",
                "Gloves",
                format!("{} insulated gloves", capitalize(glove)),
            ));
        }

        // Style-driven extras, each guarded against the running count
        let mut current_count = items.len();

        if (style.is_casual || style.is_sporty) && current_count < LAYERED_ITEM_CAP - 1 {
            let bag = if colors.blues {
                "navy"
            } else if colors.earth {
                "brown"
            } else if colors.neutral {
                "black"
            } else {
                "canvas"
            };
            items.push(ClothingItem::new(
                "Accessory",
                "Backpack or Bag",
                format!("{} crossbody or backpack", capitalize(bag)),
            ));
            current_count += 1;
        }

        if (style.is_formal || style.is_minimalist) && current_count < LAYERED_ITEM_CAP - 1 {
            let belt = if colors.earth { "brown" } else { "black" };
            items.push(ClothingItem::new(
                "Accessory",
                "Belt",
                format!("{} leather belt", capitalize(belt)),
            ));
            current_count += 1;
        }

        if temperature < 55.0 && current_count < LAYERED_ITEM_CAP - 1 {
            let layer = if colors.neutral {
                "gray"
            } else if colors.blues {
                "navy"
            } else if colors.earth {
                "olive"
            } else {
                "neutral"
            };
            items.push(ClothingItem::new(
                "Top",
                "Base Layer",
                format!("{} thermal or cotton layer", capitalize(layer)),
            ));
            current_count += 1;
        }

        if current_count < LAYERED_ITEM_CAP {
            let sock_style = if temperature < 50.0 {
                "wool"
            } else if temperature < 70.0 {
                "cotton"
            } else {
                "athletic"
            };
            let sock_color = if colors.neutral || colors.blues {
                "dark"
            } else if colors.earth {
                "earth tone"
            } else {
                "casual"
            };
            items.push(ClothingItem::new(
                "Accessory",
                "Socks",
                format!("{} {sock_style} socks", capitalize(sock_color)),
            ));
        }

        debug!(variant = self.name(), items = items.len(), "composed outfit");
        items
    }
}

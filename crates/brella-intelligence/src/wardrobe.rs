// ABOUTME: Static wardrobe item tables for the wardrobe composer variant
// ABOUTME: Base wardrobes per weather category, formal weather bands, activity additions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Static wardrobe tables.
//!
//! The composer's domain knowledge lives here as read-only template
//! arrays: one base wardrobe per weather category (6-9 items each, so the
//! 6-item floor holds before any activity merge), four mutually exclusive
//! formal weather bands, and per-activity addition lists. Templates are
//! rendered against the resolved color palette at composition time; the
//! tables themselves are never recomputed.

use brella_core::models::ClothingItem;

use crate::categorizer::{contains_any, WeatherCategory};
use crate::palette::{capitalize, Palette};

/// Which palette slot colors a rendered description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorRole {
    Light,
    Dark,
    Accent,
}

/// One row of a wardrobe table.
///
/// `detail` is the description tail; when a color role is present the
/// rendered description is the capitalized palette color followed by the
/// detail ("Navy cotton shorts"), otherwise the detail stands alone.
#[derive(Debug, Clone, Copy)]
pub struct ItemTemplate {
    /// Item category label
    pub category: &'static str,
    /// Item name (dedup key together with category)
    pub name: &'static str,
    pub(crate) color: Option<ColorRole>,
    /// Description tail, colored by the palette slot when one is set
    pub detail: &'static str,
}

impl ItemTemplate {
    const fn colored(
        category: &'static str,
        name: &'static str,
        color: ColorRole,
        detail: &'static str,
    ) -> Self {
        Self {
            category,
            name,
            color: Some(color),
            detail,
        }
    }

    const fn plain(category: &'static str, name: &'static str, detail: &'static str) -> Self {
        Self {
            category,
            name,
            color: None,
            detail,
        }
    }

    /// Render this template against a resolved palette.
    #[must_use]
    pub fn render(&self, palette: &Palette) -> ClothingItem {
        let description = match self.color {
            Some(ColorRole::Light) => format!("{} {}", capitalize(palette.light), self.detail),
            Some(ColorRole::Dark) => format!("{} {}", capitalize(palette.dark), self.detail),
            Some(ColorRole::Accent) => format!("{} {}", capitalize(palette.accent), self.detail),
            None => self.detail.to_owned(),
        };
        ClothingItem::new(self.category, self.name, description)
    }
}

use ColorRole::{Accent, Dark, Light};

/// Sunny and warm (70-80F)
static SUNNY_WARM: &[ItemTemplate] = &[
    ItemTemplate::colored("Top", "Light Cotton Shirt", Light, "breathable cotton"),
    ItemTemplate::colored("Bottoms", "Shorts", Dark, "cotton shorts"),
    ItemTemplate::colored("Footwear", "Breathable Sneakers", Light, "mesh sneakers or sandals"),
    ItemTemplate::plain("Accessory", "Sunglasses", "UV protection sunglasses"),
    ItemTemplate::colored("Accessory", "Sun Hat", Accent, "wide-brim hat"),
    ItemTemplate::plain("Accessory", "Sunscreen", "SPF 30+ light sunscreen"),
    ItemTemplate::plain("Accessory", "Water Bottle", "Reusable insulated bottle"),
];

/// Hot and humid (>80F)
static HOT_HUMID: &[ItemTemplate] = &[
    ItemTemplate::colored("Top", "Sleeveless Top", Light, "moisture-wicking tank"),
    ItemTemplate::colored("Bottoms", "Loose Shorts", Dark, "lightweight shorts"),
    ItemTemplate::colored("Footwear", "Open Sandals", Dark, "comfortable sandals"),
    ItemTemplate::plain("Accessory", "Sweat-Resistant Sunscreen", "SPF 50+ sport sunscreen"),
    ItemTemplate::colored("Accessory", "Light Hat", Accent, "breathable cap"),
    ItemTemplate::plain("Accessory", "Cooling Towel", "Microfiber cooling towel"),
    ItemTemplate::plain("Accessory", "Water Bottle", "Large hydration bottle"),
];

/// Cold (<45F)
static COLD: &[ItemTemplate] = &[
    ItemTemplate::colored("Base Layer", "Thermal Top", Dark, "thermal undershirt"),
    ItemTemplate::colored("Top", "Wool Sweater", Accent, "warm sweater"),
    ItemTemplate::colored("Outerwear", "Thick Jacket", Dark, "insulated jacket"),
    ItemTemplate::colored("Bottoms", "Warm Pants", Dark, "lined pants"),
    ItemTemplate::colored("Footwear", "Insulated Boots", Dark, "winter boots"),
    ItemTemplate::colored("Accessory", "Wool Socks", Dark, "thick wool socks"),
    ItemTemplate::colored("Accessory", "Gloves", Dark, "insulated gloves"),
    ItemTemplate::colored("Accessory", "Scarf", Accent, "warm scarf"),
    ItemTemplate::colored("Accessory", "Warm Hat", Accent, "wool beanie"),
];

/// Rainy
static RAINY: &[ItemTemplate] = &[
    ItemTemplate::colored("Outerwear", "Waterproof Jacket", Dark, "rain jacket with hood"),
    ItemTemplate::colored("Bottoms", "Quick-Dry Pants", Dark, "water-resistant pants"),
    ItemTemplate::colored("Footwear", "Water-Resistant Shoes", Dark, "waterproof boots"),
    ItemTemplate::plain("Accessory", "Umbrella", "Compact windproof umbrella"),
    ItemTemplate::colored("Accessory", "Waterproof Hat", Accent, "rain hat"),
    ItemTemplate::plain("Accessory", "Backpack Rain Cover", "Waterproof pack cover"),
];

/// Snowy (<32F or snow in the condition)
static SNOWY: &[ItemTemplate] = &[
    ItemTemplate::colored("Outerwear", "Insulated Coat", Dark, "heavy winter coat"),
    ItemTemplate::colored("Base Layer", "Thermal Layers", Dark, "full thermal set"),
    ItemTemplate::colored("Bottoms", "Snow Pants", Dark, "waterproof snow pants"),
    ItemTemplate::colored("Footwear", "Snow Boots", Dark, "insulated snow boots"),
    ItemTemplate::colored("Accessory", "Waterproof Gloves", Dark, "ski gloves"),
    ItemTemplate::colored("Accessory", "Warm Hat", Accent, "lined winter hat"),
    ItemTemplate::colored("Accessory", "Face Covering", Dark, "neck warmer or balaclava"),
    ItemTemplate::plain("Accessory", "Snow Goggles", "UV protection snow goggles"),
];

/// Windy
static WINDY: &[ItemTemplate] = &[
    ItemTemplate::colored("Outerwear", "Wind-Resistant Jacket", Dark, "windbreaker"),
    ItemTemplate::colored("Base Layer", "Windproof Base Layer", Dark, "thermal layer"),
    ItemTemplate::colored("Bottoms", "Secure Pants", Dark, "fitted pants"),
    ItemTemplate::colored("Footwear", "Closed Shoes", Dark, "secure sneakers"),
    ItemTemplate::colored("Accessory", "Secure Hat", Accent, "fitted cap or headband"),
    ItemTemplate::plain("Accessory", "Windproof Sunglasses", "Secure wrap-around eyewear"),
    ItemTemplate::plain("Accessory", "Lip Balm", "Moisturizing lip protection"),
];

/// Mild (45-70F default)
static MILD: &[ItemTemplate] = &[
    ItemTemplate::colored("Top", "Long-Sleeve Shirt", Accent, "cotton shirt"),
    ItemTemplate::colored("Bottoms", "Jeans", Dark, "comfortable jeans"),
    ItemTemplate::colored("Footwear", "Sneakers", Light, "casual sneakers"),
    ItemTemplate::colored("Outerwear", "Light Jacket", Accent, "versatile jacket"),
    ItemTemplate::colored("Accessory", "Watch", Accent, "timepiece"),
    ItemTemplate::colored("Accessory", "Socks", Dark, "cotton socks"),
    ItemTemplate::colored("Accessory", "Belt", Dark, "casual belt"),
];

/// Formal in cold weather (<50F)
static FORMAL_COLD: &[ItemTemplate] = &[
    ItemTemplate::colored("Suit", "Wool Suit", Dark, "wool suit"),
    ItemTemplate::colored("Top", "Long-Sleeve Button Shirt", Light, "dress shirt"),
    ItemTemplate::colored("Base Layer", "Knit Sweater", Accent, "thin thermal layer"),
    ItemTemplate::colored("Outerwear", "Overcoat", Dark, "thick overcoat"),
    ItemTemplate::colored("Accessory", "Warm Scarf", Accent, "formal scarf"),
    ItemTemplate::colored("Accessory", "Leather Gloves", Dark, "dress gloves"),
    ItemTemplate::colored("Footwear", "Dress Shoes", Dark, "leather with warm socks"),
];

/// Formal in rainy weather
static FORMAL_RAIN: &[ItemTemplate] = &[
    ItemTemplate::colored("Outerwear", "Water-Resistant Coat", Dark, "formal raincoat"),
    ItemTemplate::colored("Footwear", "Water-Resistant Dress Shoes", Dark, "waterproof leather"),
    ItemTemplate::plain("Accessory", "Compact Umbrella", "Professional black umbrella"),
    ItemTemplate::colored("Bottoms", "Quick-Dry Dress Pants", Dark, "water-resistant"),
    ItemTemplate::colored("Top", "Button Shirt", Light, "formal shirt"),
    ItemTemplate::colored("Outerwear", "Blazer", Dark, "smooth finish blazer"),
];

/// Formal in sunny or warm weather (>70F or sunny/clear)
static FORMAL_WARM: &[ItemTemplate] = &[
    ItemTemplate::colored("Suit", "Light-Colored Suit", Light, "linen or cotton"),
    ItemTemplate::colored("Top", "Cotton Shirt", Light, "breathable dress shirt"),
    ItemTemplate::colored("Outerwear", "Light Blazer", Accent, "breathable blazer"),
    ItemTemplate::plain("Accessory", "Polarized Sunglasses", "Professional eyewear"),
    ItemTemplate::colored("Footwear", "Dress Shoes", Dark, "with breathable socks"),
    ItemTemplate::colored("Accessory", "Dress Hat", Accent, "optional formal hat"),
];

/// Formal in moderate weather (50-70F default band)
static FORMAL_DEFAULT: &[ItemTemplate] = &[
    ItemTemplate::colored("Suit", "Lightweight Suit", Dark, "breathable fabric"),
    ItemTemplate::colored("Top", "Cotton Button Shirt", Light, "dress shirt"),
    ItemTemplate::plain("Base Layer", "Moisture-Wicking Undershirt", "Thin breathable layer"),
    ItemTemplate::colored("Outerwear", "Light Blazer", Accent, "versatile jacket"),
    ItemTemplate::colored("Footwear", "Dress Shoes", Dark, "with thin socks"),
    ItemTemplate::plain("Accessory", "Watch", "Classic dress watch"),
];

static HIKING: &[ItemTemplate] = &[
    ItemTemplate::colored("Top", "Moisture-Wicking Shirt", Accent, "breathable long-sleeve"),
    ItemTemplate::colored("Footwear", "Trail Boots", Dark, "sturdy hiking boots"),
    ItemTemplate::colored("Bottoms", "Trekking Pants", Dark, "light hiking pants"),
    ItemTemplate::colored("Accessory", "Backpack", Accent, "20L day pack"),
    ItemTemplate::plain("Accessory", "Water Reservoir", "2L hydration bladder"),
    ItemTemplate::colored("Accessory", "Trail Hat", Accent, "sun protection hat"),
    ItemTemplate::plain("Accessory", "Bug Spray", "DEET insect repellent"),
    ItemTemplate::colored("Accessory", "Trail Gloves", Dark, "light gloves"),
    ItemTemplate::plain("Accessory", "Trail Snacks", "Energy bars and nuts"),
];

static TRAVEL: &[ItemTemplate] = &[
    ItemTemplate::colored("Top", "Comfortable Travel Top", Accent, "soft cotton"),
    ItemTemplate::colored("Bottoms", "Stretch Pants", Dark, "flexible travel pants"),
    ItemTemplate::colored("Outerwear", "Light Travel Jacket", Accent, "packable jacket"),
    ItemTemplate::colored("Footwear", "Slip-On Shoes", Dark, "easy security shoes"),
    ItemTemplate::plain("Accessory", "Neck Pillow", "Travel comfort pillow"),
    ItemTemplate::plain("Accessory", "Eye Mask", "Sleep mask"),
    ItemTemplate::plain("Accessory", "Compact Toiletries", "TSA-approved kit"),
    ItemTemplate::plain("Accessory", "Water Bottle", "Collapsible bottle"),
    ItemTemplate::colored("Accessory", "Day Bag", Dark, "lightweight backpack"),
    ItemTemplate::plain("Accessory", "Document Holder", "Travel organizer"),
];

static SPORTS: &[ItemTemplate] = &[
    ItemTemplate::colored("Top", "Athletic Shirt", Accent, "moisture-wicking top"),
    ItemTemplate::colored("Bottoms", "Sport Shorts", Dark, "flexible athletic shorts"),
    ItemTemplate::colored("Footwear", "Sport Shoes", Accent, "activity-specific shoes"),
    ItemTemplate::colored("Accessory", "Sports Visor", Accent, "sun visor"),
    ItemTemplate::colored("Accessory", "Sweatband", Accent, "moisture control band"),
    ItemTemplate::plain("Accessory", "Sports Sunglasses", "Wrap-around protection"),
    ItemTemplate::plain("Accessory", "Hydration Bottle", "Sports water bottle"),
];

static BEACH: &[ItemTemplate] = &[
    ItemTemplate::colored("Swimwear", "Swimsuit", Accent, "swim attire"),
    ItemTemplate::colored("Top", "Light Cover-Up", Light, "beach cover"),
    ItemTemplate::colored("Footwear", "Flip-Flops", Accent, "beach sandals"),
    ItemTemplate::colored("Accessory", "Beach Hat", Accent, "straw sun hat"),
    ItemTemplate::plain("Accessory", "Sunscreen", "SPF 50+ waterproof"),
    ItemTemplate::plain("Accessory", "Sunglasses", "Polarized beach glasses"),
    ItemTemplate::colored("Accessory", "Beach Towel", Accent, "large towel"),
    ItemTemplate::plain("Accessory", "Waterproof Bag", "Beach tote"),
];

static COMMUTE: &[ItemTemplate] = &[
    ItemTemplate::colored("Footwear", "Comfortable Walking Shoes", Dark, "supportive shoes"),
    ItemTemplate::colored("Outerwear", "Weather Layer", Accent, "appropriate outer layer"),
    ItemTemplate::colored("Accessory", "Commute Bag", Dark, "light tote or backpack"),
    ItemTemplate::plain("Accessory", "Compact Umbrella", "Travel umbrella"),
    ItemTemplate::plain("Accessory", "Phone Power Bank", "Portable charger"),
    ItemTemplate::plain("Accessory", "Reusable Bottle", "Eco-friendly bottle"),
];

/// Activity keyword table, evaluated in order; first match wins.
/// "commut" deliberately matches both "commute" and "commuting".
static ACTIVITY_TABLES: &[(&[&str], &[ItemTemplate])] = &[
    (&["hiking", "camping"], HIKING),
    (&["travel"], TRAVEL),
    (&["sport", "gym", "exercise"], SPORTS),
    (&["beach", "pool"], BEACH),
    (&["commut", "work", "city"], COMMUTE),
];

fn render_all(templates: &[ItemTemplate], palette: &Palette) -> Vec<ClothingItem> {
    templates
        .iter()
        .map(|template| template.render(palette))
        .collect()
}

/// The base wardrobe for a weather category, colored by the palette.
#[must_use]
pub fn base_wardrobe(category: WeatherCategory, palette: &Palette) -> Vec<ClothingItem> {
    let templates = match category {
        WeatherCategory::SunnyWarm => SUNNY_WARM,
        WeatherCategory::HotHumid => HOT_HUMID,
        WeatherCategory::Cold => COLD,
        WeatherCategory::Rainy => RAINY,
        WeatherCategory::Snowy => SNOWY,
        WeatherCategory::Windy => WINDY,
        WeatherCategory::Mild => MILD,
    };
    render_all(templates, palette)
}

/// The weather-aware formal wardrobe.
///
/// Four mutually exclusive bands evaluated in order: cold, rain, warm,
/// then the 50-70F default. A rainy 40F evening is dressed from the cold
/// band, not the rain band.
#[must_use]
pub fn formal_wardrobe(temperature: f64, condition: &str, palette: &Palette) -> Vec<ClothingItem> {
    let templates = if temperature < 50.0 {
        FORMAL_COLD
    } else if contains_any(condition, &["rain"]) {
        FORMAL_RAIN
    } else if temperature > 70.0 || contains_any(condition, &["sunny", "clear"]) {
        FORMAL_WARM
    } else {
        FORMAL_DEFAULT
    };
    render_all(templates, palette)
}

/// Activity-specific additions for a free-text activity description.
///
/// Returns an empty list when no keyword matches.
#[must_use]
pub fn activity_additions(activity: &str, palette: &Palette) -> Vec<ClothingItem> {
    let lower = activity.to_lowercase();
    for (keywords, templates) in ACTIVITY_TABLES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return render_all(templates, palette);
        }
    }
    Vec::new()
}

// ABOUTME: Outfit composer capability trait and its two strategy variants
// ABOUTME: Weather-and-preference input, bounded de-duplicated item list output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Outfit composition.
//!
//! Two independently specified composer implementations share one
//! capability interface: weather plus style preferences in, a bounded,
//! de-duplicated clothing item list out. Their rule sets overlap but their
//! outputs are observably different, and each has its own callers, so they
//! are deliberately not reconciled into a single algorithm.

use brella_core::models::ClothingItem;
use serde::{Deserialize, Serialize};

mod layered_composer;
mod wardrobe_composer;

pub use layered_composer::LayeredComposer;
pub use wardrobe_composer::WardrobeComposer;

/// Inputs to either composer variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComposeRequest {
    /// Temperature in Fahrenheit
    pub temperature: f64,
    /// Free-text weather condition
    pub condition: String,
    /// Free-text style preferences ("minimalist", "sporty casual", ...)
    #[serde(default)]
    pub style_preferences: Vec<String>,
    /// Free-text clothing type hints ("jeans", "sneakers", "denim jackets")
    #[serde(default)]
    pub clothing_types: Vec<String>,
    /// Free-text color preferences, resolved to a single bucket
    #[serde(default)]
    pub color_preferences: Vec<String>,
    /// Free-text activity description, when one is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
}

/// Capability interface shared by the composer variants.
pub trait OutfitComposer {
    /// Stable variant name used for dispatch and logging.
    fn name(&self) -> &'static str;

    /// Produce a bounded, de-duplicated clothing item list.
    fn compose(&self, request: &ComposeRequest) -> Vec<ClothingItem>;
}

// ABOUTME: Clothing item, activity context, and outfit plan models
// ABOUTME: Output shapes for both composer variants and the slot-based planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

use serde::{Deserialize, Serialize};

/// A single recommended clothing item.
///
/// `category` is a free-text label rather than an enum: the composer
/// variants produce ad hoc categories ("Sunglasses", "Base Layer",
/// "Swimwear", "Suit") alongside the common ones. Identity for
/// de-duplication purposes is the `(category, name)` pair, compared
/// case-sensitively as produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Item category label (e.g. "Outerwear", "Top", "Accessory")
    pub category: String,
    /// Item name; together with `category` this is the dedup key
    pub name: String,
    /// Description including the resolved color
    pub description: String,
}

impl ClothingItem {
    /// Build an item from string-ish parts.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// The `(category, name)` de-duplication key for this item.
    #[must_use]
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.category, &self.name)
    }
}

/// Structured classification of a user's described activity.
///
/// Values are snake_case strings rather than enums; unrecognized values
/// degrade to the default branch of every downstream decision instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityContext {
    /// Activity category: work, casual, sports, formal
    pub category: String,
    /// Required formality: casual, business_casual, formal
    pub formality_level: String,
    /// Movement intensity: low, medium, high
    pub movement_level: String,
    /// Additional context for the stylist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single structured outfit produced by the slot-based planner.
///
/// One plan per invocation; the planner is stateless. `outer_layer` is
/// `None` exactly when the no-layer thresholds hold for non-formal wear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitPlan {
    /// Top layer recommendation (e.g. "t-shirt or short-sleeve shirt")
    pub top: String,
    /// Bottom recommendation (e.g. "jeans or casual pants")
    pub bottom: String,
    /// Jacket or coat, when conditions call for one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_layer: Option<String>,
    /// Footwear recommendation
    pub footwear: String,
    /// Accessories in the order their rules fired (umbrella, hat, ...)
    pub accessories: Vec<String>,
    /// Persona-flavored explanation for the outfit
    pub notes: String,
}

// ABOUTME: Wardrobe composer variant using static per-weather item tables
// ABOUTME: Formal bypass, base wardrobe selection, and activity merge under the item budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

use std::collections::HashSet;

use brella_core::models::ClothingItem;
use tracing::debug;

use super::{ComposeRequest, OutfitComposer};
use crate::categorizer::categorize;
use crate::config::ComposerConfig;
use crate::palette::{resolve_color_bucket, Palette};
use crate::wardrobe::{activity_additions, base_wardrobe, formal_wardrobe};

/// Table-driven composer used by the agent integration path.
///
/// Selects a full base wardrobe for the categorized weather, then blends
/// in activity-specific items without exceeding the item budget or
/// duplicating `(category, name)` pairs. A formal activity bypasses the
/// base wardrobe entirely in favor of the weather-aware formal bands.
#[derive(Debug, Clone, Default)]
pub struct WardrobeComposer {
    config: ComposerConfig,
}

impl WardrobeComposer {
    /// Create a composer with the default item budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with a custom item budget.
    #[must_use]
    pub const fn with_config(config: ComposerConfig) -> Self {
        Self { config }
    }

    /// Merge activity items into the wardrobe core.
    ///
    /// The first `core_items` base items are kept verbatim; activity items
    /// whose `(category, name)` key is not already present are appended
    /// until the budget is reached or the additions run out. With an
    /// unmatched activity the additions are empty, so the result is the
    /// bare core.
    fn merge_activity_items(
        &self,
        base: Vec<ClothingItem>,
        additions: Vec<ClothingItem>,
    ) -> Vec<ClothingItem> {
        let mut combined: Vec<ClothingItem> =
            base.into_iter().take(self.config.core_items).collect();
        let mut seen: HashSet<(String, String)> = combined
            .iter()
            .map(|item| (item.category.clone(), item.name.clone()))
            .collect();

        for item in additions {
            if combined.len() >= self.config.max_items {
                break;
            }
            let key = (item.category.clone(), item.name.clone());
            if seen.insert(key) {
                combined.push(item);
            }
        }
        combined
    }
}

impl OutfitComposer for WardrobeComposer {
    fn name(&self) -> &'static str {
        "wardrobe"
    }

    fn compose(&self, request: &ComposeRequest) -> Vec<ClothingItem> {
        let bucket = resolve_color_bucket(&request.color_preferences);
        let palette = Palette::for_bucket(bucket);

        // A formal activity is dressed from the weather-aware formal bands
        // only; the general wardrobe logic is bypassed completely.
        if let Some(activity) = &request.activity {
            if activity.to_lowercase().contains("formal") {
                let mut items = formal_wardrobe(request.temperature, &request.condition, &palette);
                items.truncate(self.config.max_items);
                debug!(variant = self.name(), items = items.len(), "composed formal outfit");
                return items;
            }
        }

        let category = categorize(request.temperature, &request.condition);
        let mut items = base_wardrobe(category, &palette);

        if let Some(activity) = &request.activity {
            let additions = activity_additions(activity, &palette);
            items = self.merge_activity_items(items, additions);
        }

        // No backfill below the six-item floor: the base tables all carry
        // at least six items, and the merge only ever shrinks the list to
        // the core. A core smaller than six cannot occur with the current
        // tables; if it did, the list would simply be short.
        items.truncate(self.config.max_items);
        debug!(
            variant = self.name(),
            category = category.as_str(),
            items = items.len(),
            "composed outfit"
        );
        items
    }
}

// ABOUTME: Keyword-based activity classification into structured context
// ABOUTME: Ordered rule table, first match wins, defaults to a casual outing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

use brella_core::models::ActivityContext;

struct ActivityRule {
    category: &'static str,
    keywords: &'static [&'static str],
    formality: &'static str,
    movement: &'static str,
    notes: &'static str,
}

/// Classification rules in evaluation order; first matching rule wins,
/// so "business dinner" classifies as work, not formal.
static ACTIVITY_RULES: &[ActivityRule] = &[
    ActivityRule {
        category: "work",
        keywords: &["work", "office", "meeting", "presentation", "business"],
        formality: "business_casual",
        movement: "low",
        notes: "Balance comfort and professionalism",
    },
    ActivityRule {
        category: "sports",
        keywords: &[
            "hike", "hiking", "bike", "biking", "cycling", "run", "running", "gym", "workout",
            "exercise",
        ],
        formality: "casual",
        movement: "high",
        notes: "Recommend flexible, breathable clothing",
    },
    ActivityRule {
        category: "formal",
        keywords: &["date", "dinner", "restaurant", "party", "event", "wedding", "formal"],
        formality: "formal",
        movement: "low",
        notes: "Prioritize style and appearance",
    },
    ActivityRule {
        category: "casual",
        keywords: &["walk", "walking", "shopping", "errands", "casual", "coffee", "hanging out"],
        formality: "casual",
        movement: "medium",
        notes: "",
    },
];

const DEFAULT_NOTES: &str = "General outdoor activity";

/// Classify a free-text activity description into structured context.
///
/// Pure keyword matching with no failure modes: unmatched text yields the
/// default casual context.
#[must_use]
pub fn classify_activity(activity_text: &str) -> ActivityContext {
    let lower = activity_text.to_lowercase();

    for rule in ACTIVITY_RULES {
        if rule.keywords.iter().any(|keyword| lower.contains(keyword)) {
            let notes = if rule.notes.is_empty() {
                DEFAULT_NOTES
            } else {
                rule.notes
            };
            return ActivityContext {
                category: rule.category.to_owned(),
                formality_level: rule.formality.to_owned(),
                movement_level: rule.movement.to_owned(),
                notes: Some(notes.to_owned()),
            };
        }
    }

    ActivityContext {
        category: "casual".to_owned(),
        formality_level: "casual".to_owned(),
        movement_level: "medium".to_owned(),
        notes: Some(DEFAULT_NOTES.to_owned()),
    }
}

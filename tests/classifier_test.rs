// ABOUTME: Integration tests for the keyword-based activity classifier
// ABOUTME: Validates rule order, first-match semantics, and the default context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use brella_intelligence::classify_activity;

#[test]
fn work_keywords_classify_as_work() {
    let context = classify_activity("client meeting at the office");
    assert_eq!(context.category, "work");
    assert_eq!(context.formality_level, "business_casual");
    assert_eq!(context.movement_level, "low");
    assert_eq!(
        context.notes.as_deref(),
        Some("Balance comfort and professionalism")
    );
}

#[test]
fn sports_keywords_classify_as_sports() {
    let context = classify_activity("morning trail run");
    assert_eq!(context.category, "sports");
    assert_eq!(context.movement_level, "high");
}

#[test]
fn formal_keywords_classify_as_formal() {
    let context = classify_activity("wedding reception");
    assert_eq!(context.category, "formal");
    assert_eq!(context.formality_level, "formal");
    assert_eq!(
        context.notes.as_deref(),
        Some("Prioritize style and appearance")
    );
}

#[test]
fn first_matching_rule_wins() {
    // "business dinner" hits the work rule before the formal rule.
    let context = classify_activity("business dinner downtown");
    assert_eq!(context.category, "work");
}

#[test]
fn casual_rule_uses_the_fallback_note() {
    let context = classify_activity("coffee with friends");
    assert_eq!(context.category, "casual");
    assert_eq!(context.notes.as_deref(), Some("General outdoor activity"));
}

#[test]
fn unmatched_text_yields_the_default_context() {
    let context = classify_activity("watching clouds");
    assert_eq!(context.category, "casual");
    assert_eq!(context.formality_level, "casual");
    assert_eq!(context.movement_level, "medium");
    assert_eq!(context.notes.as_deref(), Some("General outdoor activity"));
}

#[test]
fn matching_is_case_insensitive() {
    let context = classify_activity("GYM Session");
    assert_eq!(context.category, "sports");
}

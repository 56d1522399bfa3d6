// ABOUTME: Integration tests for the JSON tool registry
// ABOUTME: Validates tool dispatch, parameter errors, and preference round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use brella::tools::{ToolRegistry, TOOL_NAMES};
use brella_core::errors::ToolError;
use serde_json::json;

#[test]
fn every_registered_tool_name_dispatches() {
    let registry = ToolRegistry::new();
    for name in TOOL_NAMES {
        // Calling each tool without parameters must hit the tool itself,
        // not the unknown-tool branch.
        let result = registry.execute(name, &json!({}));
        assert!(
            !matches!(result, Err(ToolError::NotFound { .. })),
            "{name} fell through to NotFound"
        );
    }
}

#[test]
fn unknown_tool_is_not_found() {
    let registry = ToolRegistry::new();
    let err = registry
        .execute("summon_sunshine", &json!({}))
        .expect_err("unknown tool");
    assert_eq!(err, ToolError::not_found("summon_sunshine"));
}

#[test]
fn recommend_outfit_returns_bounded_items() {
    let registry = ToolRegistry::new();
    let result = registry
        .execute(
            "recommend_outfit",
            &json!({
                "temperature": 60.0,
                "condition": "partly cloudy",
                "activity": "hiking",
                "color_preferences": ["earth"],
            }),
        )
        .unwrap();

    assert_eq!(result["variant"], "wardrobe");
    let items = result["items"].as_array().unwrap();
    assert!((6..=10).contains(&items.len()));
}

#[test]
fn recommend_outfit_selects_the_layered_variant() {
    let registry = ToolRegistry::new();
    let result = registry
        .execute(
            "recommend_outfit",
            &json!({
                "temperature": 30.0,
                "condition": "rain",
                "variant": "layered",
            }),
        )
        .unwrap();

    assert_eq!(result["variant"], "layered");
    assert!(result["items"].as_array().unwrap().len() <= 8);
}

#[test]
fn recommend_outfit_rejects_unknown_variants() {
    let registry = ToolRegistry::new();
    let err = registry
        .execute(
            "recommend_outfit",
            &json!({
                "temperature": 60.0,
                "condition": "clear",
                "variant": "oracle",
            }),
        )
        .expect_err("invalid variant");
    assert!(matches!(
        err,
        ToolError::InvalidParameter { parameter, .. } if parameter == "variant"
    ));
}

#[test]
fn recommend_outfit_requires_temperature() {
    let registry = ToolRegistry::new();
    let err = registry
        .execute("recommend_outfit", &json!({ "condition": "clear" }))
        .expect_err("missing temperature");
    assert_eq!(
        err,
        ToolError::missing_parameter("recommend_outfit", "temperature")
    );
}

#[test]
fn recommend_outfit_rejects_non_numeric_temperature() {
    let registry = ToolRegistry::new();
    let err = registry
        .execute(
            "recommend_outfit",
            &json!({ "temperature": "warm", "condition": "clear" }),
        )
        .expect_err("invalid temperature");
    assert!(matches!(err, ToolError::InvalidParameter { .. }));
}

#[test]
fn plan_outfit_classifies_free_text_activity() {
    let registry = ToolRegistry::new();
    let result = registry
        .execute(
            "plan_outfit",
            &json!({
                "temperature": 58.0,
                "rain_chance": 45.0,
                "wind_speed": 12.0,
                "activity": "morning run",
            }),
        )
        .unwrap();

    // "morning run" classifies as sports, which drives the top slot.
    assert_eq!(result["top"], "moisture-wicking athletic shirt or tank");
    assert!(result["outer_layer"]
        .as_str()
        .unwrap()
        .contains("rain jacket"));
}

#[test]
fn plan_outfit_uses_stored_preferences() {
    let registry = ToolRegistry::new();
    registry
        .execute(
            "update_preferences",
            &json!({
                "user_id": "dana",
                "persona": "kid_friendly",
                "comfort_profile": "runs_cold",
            }),
        )
        .unwrap();

    let result = registry
        .execute(
            "plan_outfit",
            &json!({ "temperature": 52.0, "user_id": "dana" }),
        )
        .unwrap();

    // runs_cold shifts 52F to 47F, and the kid persona changes the voice.
    assert!(result["notes"]
        .as_str()
        .unwrap()
        .contains("Bundle up warm - it's chilly out there!"));
}

#[test]
fn check_safety_reports_combined_risk() {
    let registry = ToolRegistry::new();
    let result = registry
        .execute(
            "check_safety",
            &json!({ "temperature": 18.0, "wind_speed": 26.0, "rain_chance": 10.0 }),
        )
        .unwrap();

    assert_eq!(result["risk_level"], "high");
    let message = result["safety_message"].as_str().unwrap();
    assert!(message.contains("Extreme cold warning"));
    assert!(message.contains("Strong winds"));
}

#[test]
fn classify_activity_round_trips_json() {
    let registry = ToolRegistry::new();
    let result = registry
        .execute("classify_activity", &json!({ "activity": "beach walk" }))
        .unwrap();

    assert_eq!(result["category"], "casual");
    assert_eq!(result["movement_level"], "medium");
}

#[test]
fn preferences_default_then_update_partially() {
    let registry = ToolRegistry::new();

    let initial = registry
        .execute("get_preferences", &json!({ "user_id": "eve" }))
        .unwrap();
    assert_eq!(initial["persona"], "practical");
    assert_eq!(initial["comfort_profile"], "neutral");

    let updated = registry
        .execute(
            "update_preferences",
            &json!({ "user_id": "eve", "default_city": "Denver" }),
        )
        .unwrap();
    assert_eq!(updated["persona"], "practical");
    assert_eq!(updated["default_city"], "Denver");

    let fetched = registry
        .execute("get_preferences", &json!({ "user_id": "eve" }))
        .unwrap();
    assert_eq!(fetched["default_city"], "Denver");
}

#[test]
fn update_preferences_rejects_unknown_personas() {
    let registry = ToolRegistry::new();
    let err = registry
        .execute(
            "update_preferences",
            &json!({ "user_id": "eve", "persona": "chaotic" }),
        )
        .expect_err("invalid persona");
    assert!(matches!(
        err,
        ToolError::InvalidParameter { parameter, .. } if parameter == "persona"
    ));
}

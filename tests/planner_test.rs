// ABOUTME: Integration tests for the slot-based outfit planner
// ABOUTME: Validates slot priorities, comfort-profile shift, and note generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use brella_intelligence::{OutfitPlanner, PlanRequest};

#[test]
fn rain_protection_dominates_the_outer_layer() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 58.0,
        rain_chance: 45.0,
        wind_speed: 12.0,
        activity_category: "sports".to_owned(),
        formality_level: "casual".to_owned(),
        movement_level: "high".to_owned(),
        persona: "practical".to_owned(),
        comfort_profile: "neutral".to_owned(),
    };

    let plan = planner.plan(&request);

    let outer = plan.outer_layer.expect("rain demands an outer layer");
    assert!(outer.contains("rain jacket"), "got {outer}");
    assert!(plan.accessories.iter().any(|a| a == "umbrella"));
}

#[test]
fn cold_rain_gets_the_insulated_jacket() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 42.0,
        rain_chance: 60.0,
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request);
    assert_eq!(plan.outer_layer.as_deref(), Some("insulated rain jacket"));
}

#[test]
fn no_outer_layer_when_warm_calm_and_dry() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 78.0,
        rain_chance: 10.0,
        wind_speed: 5.0,
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request);
    assert!(plan.outer_layer.is_none());
}

#[test]
fn wind_alone_still_forces_a_windbreaker() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 78.0,
        rain_chance: 10.0,
        wind_speed: 20.0,
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request);
    assert_eq!(plan.outer_layer.as_deref(), Some("windbreaker"));
}

#[test]
fn comfort_shift_matches_an_unadjusted_colder_reading() {
    let planner = OutfitPlanner::new();

    let runs_cold = planner.plan(&PlanRequest {
        temperature: 50.0,
        comfort_profile: "runs_cold".to_owned(),
        ..PlanRequest::default()
    });
    let baseline = planner.plan(&PlanRequest {
        temperature: 45.0,
        ..PlanRequest::default()
    });

    assert_eq!(runs_cold.top, baseline.top);
    assert_eq!(runs_cold.bottom, baseline.bottom);
    assert_eq!(runs_cold.outer_layer, baseline.outer_layer);
    assert_eq!(runs_cold.footwear, baseline.footwear);
    assert_eq!(runs_cold.accessories, baseline.accessories);
}

#[test]
fn formal_requests_select_dress_slots() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 45.0,
        rain_chance: 50.0,
        formality_level: "formal".to_owned(),
        activity_category: "formal".to_owned(),
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request);
    assert_eq!(plan.top, "dress shirt or blouse with sweater");
    assert_eq!(plan.outer_layer.as_deref(), Some("dress coat with rain protection"));
    assert_eq!(plan.footwear, "dress shoes (waterproof if possible)");
    assert!(plan.notes.contains("Dress to impress while staying comfortable."));
}

#[test]
fn cold_accessories_stack_additively() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 25.0,
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request);
    assert_eq!(
        plan.accessories,
        vec!["warm hat or beanie", "scarf", "gloves"]
    );
}

#[test]
fn practical_notes_quote_the_unadjusted_temperature() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 58.7,
        comfort_profile: "runs_cold".to_owned(),
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request);
    // Band text reflects the adjusted 53.7F, the quoted reading does not.
    assert!(plan.notes.starts_with("Weather is mild at 58\u{b0}F."));
    assert!(plan
        .notes
        .contains("Since you tend to feel cold, adding extra layers is recommended."));
}

#[test]
fn kid_friendly_persona_changes_the_voice() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 40.0,
        persona: "kid_friendly".to_owned(),
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request);
    assert!(plan.notes.contains("Bundle up warm - it's chilly out there!"));
}

#[test]
fn unrecognized_strings_degrade_to_defaults() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 60.0,
        activity_category: "interpretive dance".to_owned(),
        formality_level: "smart-ish".to_owned(),
        persona: "stoic".to_owned(),
        comfort_profile: "volcanic".to_owned(),
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request);
    assert_eq!(plan.top, "t-shirt or short-sleeve shirt");
    assert!(plan.notes.starts_with("Weather is mild at 60\u{b0}F."));
}

#[test]
fn plan_is_deterministic() {
    let planner = OutfitPlanner::new();
    let request = PlanRequest {
        temperature: 33.0,
        rain_chance: 55.0,
        wind_speed: 18.0,
        activity_category: "work".to_owned(),
        ..PlanRequest::default()
    };

    assert_eq!(planner.plan(&request), planner.plan(&request));
}

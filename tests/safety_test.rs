// ABOUTME: Integration tests for the weather safety checker
// ABOUTME: Validates risk escalation, evaluation order, and warning composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use brella_core::models::RiskLevel;
use brella_intelligence::SafetyChecker;

#[test]
fn calm_weather_raises_no_warnings() {
    let checker = SafetyChecker::new();
    let report = checker.check(65.0, 8.0, 20.0, "partly cloudy");

    assert_eq!(report.risk_level, RiskLevel::None);
    assert!(report.safety_message.is_none());
    assert!(!report.has_warnings);
}

#[test]
fn extreme_cold_with_strong_wind_stays_high_with_both_phrases() {
    let checker = SafetyChecker::new();
    let report = checker.check(18.0, 25.5, 10.0, "clear");

    assert_eq!(report.risk_level, RiskLevel::High);
    let message = report.safety_message.expect("two warnings fired");
    assert!(message.contains("Extreme cold warning"));
    assert!(message.contains("Strong winds"));
}

#[test]
fn freezing_band_is_medium() {
    let checker = SafetyChecker::new();
    let report = checker.check(28.0, 5.0, 0.0, "overcast");

    assert_eq!(report.risk_level, RiskLevel::Medium);
    assert!(report
        .safety_message
        .unwrap()
        .contains("Freezing temperatures"));
}

#[test]
fn heat_bands_escalate() {
    let checker = SafetyChecker::new();

    let hot = checker.check(88.0, 5.0, 0.0, "sunny");
    assert_eq!(hot.risk_level, RiskLevel::Medium);

    let extreme = checker.check(98.0, 5.0, 0.0, "sunny");
    assert_eq!(extreme.risk_level, RiskLevel::High);
    assert!(extreme
        .safety_message
        .unwrap()
        .contains("Extreme heat warning"));
}

#[test]
fn moderate_wind_alone_is_low() {
    let checker = SafetyChecker::new();
    let report = checker.check(60.0, 18.0, 0.0, "breezy");

    assert_eq!(report.risk_level, RiskLevel::Low);
    assert!(report.safety_message.unwrap().contains("Windy conditions"));
}

#[test]
fn storm_keywords_are_high_regardless_of_rain_chance() {
    let checker = SafetyChecker::new();
    let report = checker.check(70.0, 5.0, 10.0, "thunderstorm");

    assert_eq!(report.risk_level, RiskLevel::High);
    assert!(report.safety_message.unwrap().contains("Storm warning"));
}

#[test]
fn likely_rain_is_low() {
    let checker = SafetyChecker::new();
    let report = checker.check(60.0, 5.0, 55.0, "cloudy");

    assert_eq!(report.risk_level, RiskLevel::Low);
    assert!(report
        .safety_message
        .unwrap()
        .contains("High chance of rain"));
}

#[test]
fn snow_alone_is_medium() {
    let checker = SafetyChecker::new();
    let report = checker.check(40.0, 5.0, 0.0, "light snow");

    assert_eq!(report.risk_level, RiskLevel::Medium);
    assert!(report.safety_message.unwrap().contains("Snow expected"));
}

#[test]
fn snow_upgrades_any_prior_concern_to_high() {
    let checker = SafetyChecker::new();
    // Freezing (medium) plus snow upgrades to high; so does low wind plus snow.
    let freezing_snow = checker.check(28.0, 5.0, 0.0, "snow");
    assert_eq!(freezing_snow.risk_level, RiskLevel::High);

    let windy_snow = checker.check(40.0, 18.0, 0.0, "snow flurries");
    assert_eq!(windy_snow.risk_level, RiskLevel::High);
}

#[test]
fn warnings_join_in_evaluation_order() {
    let checker = SafetyChecker::new();
    let report = checker.check(28.0, 18.0, 55.0, "cloudy");

    let message = report.safety_message.expect("three warnings fired");
    let freezing = message.find("Freezing temperatures").unwrap();
    let windy = message.find("Windy conditions").unwrap();
    let rain = message.find("High chance of rain").unwrap();
    assert!(freezing < windy && windy < rain);
    assert_eq!(report.risk_level, RiskLevel::Medium);
}

#[test]
fn check_is_deterministic() {
    let checker = SafetyChecker::new();
    let first = checker.check(18.0, 25.5, 80.0, "thunderstorm with snow");
    let second = checker.check(18.0, 25.5, 80.0, "thunderstorm with snow");
    assert_eq!(first, second);
}

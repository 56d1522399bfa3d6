// ABOUTME: Integration tests for the weather categorizer
// ABOUTME: Validates boundary temperatures and condition-driven category assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use brella_intelligence::{categorize, WeatherCategory};

#[test]
fn hot_boundary_splits_on_humidity_keywords() {
    assert_eq!(categorize(80.1, "humid"), WeatherCategory::HotHumid);
    assert_eq!(categorize(80.1, "muggy afternoon"), WeatherCategory::HotHumid);
    assert_eq!(categorize(80.1, "clear"), WeatherCategory::SunnyWarm);
}

#[test]
fn exactly_eighty_is_not_hot() {
    // The hot branch is strictly above 80.
    assert_eq!(categorize(80.0, "clear"), WeatherCategory::SunnyWarm);
}

#[test]
fn below_freezing_is_snowy_regardless_of_condition() {
    assert_eq!(categorize(31.9, "clear"), WeatherCategory::Snowy);
    assert_eq!(categorize(31.9, "sunny"), WeatherCategory::Snowy);
    assert_eq!(categorize(31.9, ""), WeatherCategory::Snowy);
}

#[test]
fn snow_condition_is_snowy_at_any_temperature() {
    assert_eq!(categorize(50.0, "light snow"), WeatherCategory::Snowy);
}

#[test]
fn snow_takes_priority_over_rain_keywords() {
    // "snow showers" contains a rain keyword too; the snow check runs first.
    assert_eq!(categorize(30.0, "snow showers"), WeatherCategory::Snowy);
}

#[test]
fn rain_keywords_categorize_as_rainy() {
    assert_eq!(categorize(55.0, "light rain"), WeatherCategory::Rainy);
    assert_eq!(categorize(55.0, "drizzle"), WeatherCategory::Rainy);
    assert_eq!(categorize(55.0, "scattered showers"), WeatherCategory::Rainy);
}

#[test]
fn wind_keywords_categorize_as_windy() {
    assert_eq!(categorize(55.0, "gusty"), WeatherCategory::Windy);
    assert_eq!(categorize(55.0, "breezy"), WeatherCategory::Windy);
}

#[test]
fn cold_band_below_forty_five() {
    assert_eq!(categorize(40.0, "overcast"), WeatherCategory::Cold);
    assert_eq!(categorize(44.9, "cloudy"), WeatherCategory::Cold);
}

#[test]
fn warm_band_above_seventy() {
    assert_eq!(categorize(70.1, "overcast"), WeatherCategory::SunnyWarm);
}

#[test]
fn middle_band_defaults_to_mild() {
    assert_eq!(categorize(60.0, "partly cloudy"), WeatherCategory::Mild);
    assert_eq!(categorize(45.0, "overcast"), WeatherCategory::Mild);
    assert_eq!(categorize(70.0, "overcast"), WeatherCategory::Mild);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(categorize(55.0, "Light RAIN"), WeatherCategory::Rainy);
    assert_eq!(categorize(85.0, "HUMID"), WeatherCategory::HotHumid);
}

// ABOUTME: Integration tests for both outfit composer variants
// ABOUTME: Validates item bounds, dedup, formal band exclusivity, and the layered cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use brella_core::models::ClothingItem;
use brella_intelligence::{ComposeRequest, LayeredComposer, OutfitComposer, WardrobeComposer};

fn request(temperature: f64, condition: &str) -> ComposeRequest {
    ComposeRequest {
        temperature,
        condition: condition.to_owned(),
        ..ComposeRequest::default()
    }
}

fn assert_unique_keys(items: &[ClothingItem]) {
    let keys: HashSet<(&str, &str)> = items
        .iter()
        .map(|item| (item.category.as_str(), item.name.as_str()))
        .collect();
    assert_eq!(keys.len(), items.len(), "duplicate (category, name) pair");
}

#[test]
fn wardrobe_item_count_stays_within_bounds() {
    let composer = WardrobeComposer::new();

    let scenarios = [
        (85.0, "humid", None),
        (75.0, "sunny", None),
        (40.0, "overcast", None),
        (25.0, "snow", None),
        (55.0, "light rain", None),
        (55.0, "windy", None),
        (60.0, "partly cloudy", None),
        (60.0, "partly cloudy", Some("hiking")),
        (60.0, "partly cloudy", Some("beach day")),
        (60.0, "partly cloudy", Some("commute to work")),
        (75.0, "sunny", Some("formal dinner")),
    ];

    for (temperature, condition, activity) in scenarios {
        let mut req = request(temperature, condition);
        req.activity = activity.map(str::to_owned);

        let items = composer.compose(&req);
        assert!(
            (6..=10).contains(&items.len()),
            "{condition} / {activity:?} produced {} items",
            items.len()
        );
        assert_unique_keys(&items);
    }
}

#[test]
fn wardrobe_activity_merge_caps_at_ten() {
    let composer = WardrobeComposer::new();
    let mut req = request(60.0, "partly cloudy");
    req.activity = Some("hiking".to_owned());

    let items = composer.compose(&req);
    assert_eq!(items.len(), 10);

    // The first six items come from the mild base wardrobe verbatim.
    assert_eq!(items[0].name, "Long-Sleeve Shirt");
    assert_eq!(items[5].name, "Socks");
    // The rest are hiking additions.
    assert_eq!(items[6].name, "Moisture-Wicking Shirt");
}

#[test]
fn wardrobe_unmatched_activity_keeps_the_bare_core() {
    let composer = WardrobeComposer::new();
    let mut req = request(60.0, "partly cloudy");
    req.activity = Some("stargazing".to_owned());

    let items = composer.compose(&req);
    assert_eq!(items.len(), 6);
}

#[test]
fn formal_warm_band_is_exclusive() {
    let composer = WardrobeComposer::new();
    let mut req = request(75.0, "sunny");
    req.style_preferences = vec!["formal".to_owned()];
    req.activity = Some("formal".to_owned());

    let items = composer.compose(&req);
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();

    assert!(names.contains(&"Light-Colored Suit"));
    assert!(names.contains(&"Light Blazer"));
    // Nothing leaks in from the cold, rain, or default bands.
    assert!(!names.contains(&"Wool Suit"));
    assert!(!names.contains(&"Overcoat"));
    assert!(!names.contains(&"Water-Resistant Coat"));
    assert!(!names.contains(&"Lightweight Suit"));
}

#[test]
fn formal_cold_band_beats_rain() {
    // A rainy 40F formal event dresses from the cold band; the band
    // checks are ordered and mutually exclusive.
    let composer = WardrobeComposer::new();
    let mut req = request(40.0, "light rain");
    req.activity = Some("formal event".to_owned());

    let items = composer.compose(&req);
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();

    assert!(names.contains(&"Overcoat"));
    assert!(!names.contains(&"Water-Resistant Coat"));
}

#[test]
fn color_preference_flows_into_descriptions() {
    let composer = WardrobeComposer::new();
    let mut req = request(75.0, "sunny");
    req.color_preferences = vec!["blue".to_owned()];

    let items = composer.compose(&req);
    assert_eq!(items[0].description, "Light blue breathable cotton");
}

#[test]
fn layered_respects_the_eight_item_cap() {
    // Cold rain fires every slot and accessory rule that can coexist.
    let composer = LayeredComposer::new();
    let req = request(30.0, "rain");

    let items = composer.compose(&req);
    assert_eq!(items.len(), 8);
    assert_unique_keys(&items);
}

#[test]
fn layered_mild_casual_fills_with_style_extras() {
    let composer = LayeredComposer::new();
    let mut req = request(65.0, "clear");
    req.style_preferences = vec!["casual".to_owned()];

    let items = composer.compose(&req);
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();

    assert!(names.contains(&"Light Cardigan"));
    assert!(names.contains(&"Sunglasses"));
    assert!(names.contains(&"Watch or Bracelet"));
    assert!(names.contains(&"Backpack or Bag"));
    assert!(names.contains(&"Socks"));
    assert!(items.len() <= 8);
}

#[test]
fn layered_minimalist_skips_the_cardigan() {
    let composer = LayeredComposer::new();
    let mut req = request(65.0, "overcast");
    req.style_preferences = vec!["minimalist".to_owned()];

    let items = composer.compose(&req);
    assert!(!items.iter().any(|item| item.name == "Light Cardigan"));
}

#[test]
fn layered_recognizes_the_bold_bucket() {
    let composer = LayeredComposer::new();
    let mut req = request(65.0, "clear");
    req.color_preferences = vec!["bold".to_owned()];

    let items = composer.compose(&req);
    let sunglasses = items
        .iter()
        .find(|item| item.name == "Sunglasses")
        .expect("sun accessory fires on clear conditions");
    assert_eq!(sunglasses.description, "Wayfarers for sun protection");
}

#[test]
fn composers_dispatch_through_the_trait() {
    let composers: Vec<Box<dyn OutfitComposer>> = vec![
        Box::new(WardrobeComposer::new()),
        Box::new(LayeredComposer::new()),
    ];
    let names: Vec<&str> = composers.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["wardrobe", "layered"]);

    for composer in &composers {
        let items = composer.compose(&request(55.0, "partly cloudy"));
        assert!(!items.is_empty());
    }
}

#[test]
fn compose_is_deterministic() {
    let composer = WardrobeComposer::new();
    let mut req = request(58.0, "light rain");
    req.activity = Some("hiking".to_owned());
    req.color_preferences = vec!["earth".to_owned()];

    assert_eq!(composer.compose(&req), composer.compose(&req));
}

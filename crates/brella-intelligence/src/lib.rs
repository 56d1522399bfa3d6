// ABOUTME: Outfit intelligence rules engine for the Brella platform
// ABOUTME: Pure, deterministic weather-to-wardrobe decision logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![deny(unsafe_code)]

//! # Brella Intelligence
//!
//! The outfit composition rules engine. Every component here is a pure,
//! synchronous function over its inputs: no I/O, no shared mutable state,
//! and bounded, input-independent running time. Callers may invoke any of
//! them concurrently without locking.
//!
//! ## Components
//!
//! - **categorizer**: maps a weather snapshot to one of seven coarse
//!   weather categories
//! - **composer**: two strategy variants producing a bounded,
//!   de-duplicated clothing item list
//! - **planner**: slot-based single-outfit planner with comfort-profile
//!   temperature adjustment
//! - **safety**: escalate-only weather risk assessment
//! - **classifier**: keyword-based activity classification

/// Weather category bucketing with ordered, short-circuiting predicates
pub mod categorizer;

/// Keyword-based activity classification
pub mod classifier;

/// Outfit composer trait and its two strategy variants
pub mod composer;

/// Threshold configuration for the planner and safety checker
pub mod config;

/// Color-preference bucket resolution and description palettes
pub mod palette;

/// Slot-based outfit planner with comfort-profile adjustment
pub mod planner;

/// Weather safety threshold checker
pub mod safety;

/// Style preference flags derived from free-text preferences
pub mod style;

/// Static wardrobe item tables
pub mod wardrobe;

pub use categorizer::{categorize, WeatherCategory};
pub use classifier::classify_activity;
pub use composer::{ComposeRequest, LayeredComposer, OutfitComposer, WardrobeComposer};
pub use config::{ComposerConfig, PlannerConfig, SafetyConfig};
pub use palette::{resolve_color_bucket, ColorBucket, Palette};
pub use planner::{OutfitPlanner, PlanRequest};
pub use safety::SafetyChecker;
pub use style::StyleFlags;

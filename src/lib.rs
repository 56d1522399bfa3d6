// ABOUTME: Main library entry point for the Brella outfit recommendation platform
// ABOUTME: Wires the rules engine to weather data, user memory, and the JSON tool surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![deny(unsafe_code)]

//! # Brella
//!
//! A weather-aware outfit recommendation engine. Brella turns weather
//! conditions and user context into concrete clothing recommendations
//! through a deterministic rules engine, exposed as JSON agent tools and
//! a command-line interface.
//!
//! ## Features
//!
//! - **Weather categorization**: Seven ordered weather buckets driving wardrobe selection
//! - **Outfit composition**: Two composer strategies behind a common trait
//! - **Slot-based planning**: Structured outfit plans with comfort-profile adjustment
//! - **Safety checks**: Threshold-based weather risk warnings
//! - **Live weather**: Open-Meteo forecast client with per-city caching
//!
//! ## Architecture
//!
//! The platform is split across three crates:
//! - `brella-core`: Data models, error types, and shared constants
//! - `brella-intelligence`: The deterministic rules engine
//! - `brella` (this crate): Weather client, preference memory, tool registry, and CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use brella::config::ServerConfig;
//! use brella_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Brella configured for default city: {}", config.default_city);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crate (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Runtime configuration loaded from the environment
pub mod config;

/// External weather data clients
pub mod external;

/// Logging configuration and structured logging setup
pub mod logging;

/// In-memory user preference store
pub mod memory;

/// JSON tool registry for agent integrations
pub mod tools;

// Re-export the workspace crates so binaries and tests can reach the
// engine through a single dependency.
pub use brella_core;
pub use brella_intelligence;

// ABOUTME: Core types and constants for the Brella outfit recommendation platform
// ABOUTME: Foundation crate with data models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

#![deny(unsafe_code)]

//! # Brella Core
//!
//! Foundation crate providing shared types for the Brella outfit
//! recommendation platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Weather snapshots, clothing items, outfit plans, safety
//!   reports, and user preferences
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and
//!   tool-specific errors
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (weather, outfit, preferences, safety)
pub mod models;

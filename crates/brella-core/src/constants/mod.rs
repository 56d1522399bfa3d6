// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Outfit item budgets and service identity strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Application constants organized by domain.

/// Outfit item-count budgets shared by the composer variants
pub mod limits {
    /// Minimum items in a composed item list
    pub const MIN_OUTFIT_ITEMS: usize = 6;

    /// Maximum items in a composed item list
    pub const MAX_OUTFIT_ITEMS: usize = 10;

    /// Item cap for the layered (route-path) composer variant
    pub const LAYERED_ITEM_CAP: usize = 8;
}

/// Service identity strings for logging and tool metadata
pub mod service_names {
    /// Primary service name
    pub const BRELLA: &str = "brella";

    /// Intelligence engine component name
    pub const BRELLA_INTELLIGENCE: &str = "brella-intelligence";
}

// ABOUTME: Weather risk levels and safety report models
// ABOUTME: Monotonic severity tags produced by the safety threshold checker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

use serde::{Deserialize, Serialize};

/// Severity of current weather conditions.
///
/// Ordered `None < Low < Medium < High`. Within one safety evaluation the
/// level is only ever escalated, never downgraded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No safety concerns
    #[default]
    None,
    /// Minor concerns worth a mention (e.g. breezy, likely rain)
    Low,
    /// Conditions that call for preparation (freezing, hot, snow)
    Medium,
    /// Conditions that limit safe outdoor exposure
    High,
}

impl RiskLevel {
    /// Escalate to `other` if it is more severe; never downgrade.
    #[must_use]
    pub fn escalate(self, other: Self) -> Self {
        self.max(other)
    }

    /// The wire representation used in tool results.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Result of a safety threshold evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    /// Highest risk level reached by any threshold check
    pub risk_level: RiskLevel,
    /// All matched warnings joined by single spaces, `None` if nothing fired
    pub safety_message: Option<String>,
    /// Whether any warning fired
    pub has_warnings: bool,
}

// ABOUTME: User persona, comfort profile, and stored preference models
// ABOUTME: Keyed by user id in the volatile in-process preference store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

use serde::{Deserialize, Serialize};

/// Style persona driving the tone of planner notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Function, comfort, and simplicity
    #[default]
    Practical,
    /// Style tips, color coordination, and trends
    Fashion,
    /// Fun language with safety first
    KidFriendly,
}

impl Persona {
    /// The snake_case string form used in tool parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Practical => "practical",
            Self::Fashion => "fashion",
            Self::KidFriendly => "kid_friendly",
        }
    }
}

/// Temperature sensitivity applied as a fixed shift before slot selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortProfile {
    /// Feels colder than the thermometer says: -5F
    RunsCold,
    /// No adjustment
    #[default]
    Neutral,
    /// Feels warmer than the thermometer says: +5F
    RunsHot,
}

impl ComfortProfile {
    /// The snake_case string form used in tool parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RunsCold => "runs_cold",
            Self::Neutral => "neutral",
            Self::RunsHot => "runs_hot",
        }
    }
}

/// Long-term preferences for a single user.
///
/// Created with defaults on first read, mutated in place on update, and
/// never explicitly destroyed (process lifetime).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Style persona (default: practical)
    pub persona: Persona,
    /// Temperature sensitivity (default: neutral)
    pub comfort_profile: ComfortProfile,
    /// Default city for weather queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_city: Option<String>,
    /// Free-text style preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_notes: Option<String>,
}

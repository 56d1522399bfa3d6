// ABOUTME: In-memory user preference store keyed by user id
// ABOUTME: Concurrent map with defaults on first read and partial updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Long-term user preference storage.
//!
//! Preferences live in a concurrent in-process map for the lifetime of
//! the process. A production deployment would back this with a database;
//! the store's contract is deliberately small so that swap stays cheap.

use brella_core::models::{ComfortProfile, Persona, UserPreferences};
use dashmap::DashMap;
use tracing::debug;

/// Partial preference update; `None` fields leave the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct PreferenceUpdate {
    /// New style persona, if changing
    pub persona: Option<Persona>,
    /// New temperature sensitivity, if changing
    pub comfort_profile: Option<ComfortProfile>,
    /// New default city, if changing
    pub default_city: Option<String>,
    /// New free-text style notes, if changing
    pub style_notes: Option<String>,
}

/// Concurrent store of per-user preferences.
#[derive(Debug, Default)]
pub struct UserMemory {
    store: DashMap<String, UserPreferences>,
}

impl UserMemory {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve preferences for a user, inserting defaults on first read.
    #[must_use]
    pub fn get_preferences(&self, user_id: &str) -> UserPreferences {
        self.store
            .entry(user_id.to_owned())
            .or_default()
            .value()
            .clone()
    }

    /// Apply a partial update and return the stored preferences.
    pub fn update_preferences(&self, user_id: &str, update: PreferenceUpdate) -> UserPreferences {
        let mut entry = self.store.entry(user_id.to_owned()).or_default();
        let prefs = entry.value_mut();

        if let Some(persona) = update.persona {
            prefs.persona = persona;
        }
        if let Some(comfort_profile) = update.comfort_profile {
            prefs.comfort_profile = comfort_profile;
        }
        if let Some(default_city) = update.default_city {
            prefs.default_city = Some(default_city);
        }
        if let Some(style_notes) = update.style_notes {
            prefs.style_notes = Some(style_notes);
        }

        debug!(user_id = %user_id, "preferences updated");
        prefs.clone()
    }

    /// Remove stored preferences for a user.
    pub fn clear_preferences(&self, user_id: &str) {
        self.store.remove(user_id);
    }

    /// Number of users with stored preferences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_read_inserts_defaults() {
        let memory = UserMemory::new();
        let prefs = memory.get_preferences("alice");
        assert_eq!(prefs, UserPreferences::default());
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn partial_update_keeps_untouched_fields() {
        let memory = UserMemory::new();
        memory.update_preferences(
            "bob",
            PreferenceUpdate {
                persona: Some(Persona::Fashion),
                ..PreferenceUpdate::default()
            },
        );
        let updated = memory.update_preferences(
            "bob",
            PreferenceUpdate {
                default_city: Some("Seattle".into()),
                ..PreferenceUpdate::default()
            },
        );

        assert_eq!(updated.persona, Persona::Fashion);
        assert_eq!(updated.default_city.as_deref(), Some("Seattle"));
        assert_eq!(updated.comfort_profile, ComfortProfile::Neutral);
    }

    #[test]
    fn clear_then_read_returns_defaults() {
        let memory = UserMemory::new();
        memory.update_preferences(
            "carol",
            PreferenceUpdate {
                comfort_profile: Some(ComfortProfile::RunsCold),
                ..PreferenceUpdate::default()
            },
        );
        memory.clear_preferences("carol");

        let prefs = memory.get_preferences("carol");
        assert_eq!(prefs.comfort_profile, ComfortProfile::Neutral);
    }
}

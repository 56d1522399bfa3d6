// ABOUTME: JSON tool registry dispatching agent tool calls to the rules engine
// ABOUTME: Parameter extraction, tool execution, and JSON response shaping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! Unified tool execution for agent integrations.
//!
//! Tools take a JSON parameter object and return a JSON value, so the
//! same surface serves MCP-style agents, the CLI, and tests. Parameter
//! extraction failures surface as structured [`ToolError`]s; the engine
//! itself cannot fail on typed inputs.

use brella_core::errors::ToolError;
use brella_core::models::{ComfortProfile, Persona};
use brella_intelligence::{
    classify_activity, ComposeRequest, LayeredComposer, OutfitComposer, OutfitPlanner,
    PlanRequest, SafetyChecker, WardrobeComposer,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::memory::{PreferenceUpdate, UserMemory};

/// Names of the tools the registry can execute.
pub const TOOL_NAMES: &[&str] = &[
    "recommend_outfit",
    "plan_outfit",
    "check_safety",
    "classify_activity",
    "get_preferences",
    "update_preferences",
];

/// Registry owning the engine components and the preference store.
#[derive(Default)]
pub struct ToolRegistry {
    wardrobe_composer: WardrobeComposer,
    layered_composer: LayeredComposer,
    planner: OutfitPlanner,
    safety_checker: SafetyChecker,
    memory: UserMemory,
}

impl ToolRegistry {
    /// Create a registry with default engine configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the preference store, for callers that manage users directly.
    #[must_use]
    pub const fn memory(&self) -> &UserMemory {
        &self.memory
    }

    /// Execute a tool by name against a JSON parameter object.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::NotFound`] for unknown tool names and
    /// [`ToolError::MissingParameter`] / [`ToolError::InvalidParameter`]
    /// when the parameter object does not satisfy the tool's contract.
    pub fn execute(&self, tool_name: &str, params: &Value) -> Result<Value, ToolError> {
        debug!(tool = %tool_name, "executing tool");

        match tool_name {
            "recommend_outfit" => self.recommend_outfit(params),
            "plan_outfit" => self.plan_outfit(params),
            "check_safety" => self.check_safety(params),
            "classify_activity" => Self::classify_activity(params),
            "get_preferences" => self.get_preferences(params),
            "update_preferences" => self.update_preferences(params),
            _ => Err(ToolError::not_found(tool_name)),
        }
    }

    fn recommend_outfit(&self, params: &Value) -> Result<Value, ToolError> {
        const TOOL: &str = "recommend_outfit";

        let request = ComposeRequest {
            temperature: require_f64(TOOL, params, "temperature")?,
            condition: require_str(TOOL, params, "condition")?.to_owned(),
            style_preferences: optional_string_list(TOOL, params, "style_preferences")?,
            clothing_types: optional_string_list(TOOL, params, "clothing_types")?,
            color_preferences: optional_string_list(TOOL, params, "color_preferences")?,
            activity: optional_str(TOOL, params, "activity")?.map(str::to_owned),
        };

        let composer: &dyn OutfitComposer = match optional_str(TOOL, params, "variant")? {
            None | Some("wardrobe") => &self.wardrobe_composer,
            Some("layered") => &self.layered_composer,
            Some(other) => {
                return Err(ToolError::invalid_parameter(
                    TOOL,
                    "variant",
                    format!("unknown composer variant '{other}'"),
                ))
            }
        };

        let items = composer.compose(&request);
        serialize_response(TOOL, &json!({ "variant": composer.name(), "items": items }))
    }

    fn plan_outfit(&self, params: &Value) -> Result<Value, ToolError> {
        const TOOL: &str = "plan_outfit";

        // Free-text activity is classified; explicit context fields win
        // over the classification when both are present.
        let context = optional_str(TOOL, params, "activity")?.map(classify_activity);

        // Stored preferences supply persona and comfort defaults when a
        // user id is given.
        let prefs = optional_str(TOOL, params, "user_id")?
            .map(|user_id| self.memory.get_preferences(user_id));

        let mut request = PlanRequest {
            temperature: require_f64(TOOL, params, "temperature")?,
            rain_chance: optional_f64(TOOL, params, "rain_chance")?.unwrap_or(0.0),
            wind_speed: optional_f64(TOOL, params, "wind_speed")?.unwrap_or(0.0),
            ..PlanRequest::default()
        };

        if let Some(context) = context {
            request.activity_category = context.category;
            request.formality_level = context.formality_level;
            request.movement_level = context.movement_level;
        }
        if let Some(prefs) = prefs {
            request.persona = prefs.persona.as_str().to_owned();
            request.comfort_profile = prefs.comfort_profile.as_str().to_owned();
        }
        if let Some(category) = optional_str(TOOL, params, "activity_category")? {
            request.activity_category = category.to_owned();
        }
        if let Some(formality) = optional_str(TOOL, params, "formality_level")? {
            request.formality_level = formality.to_owned();
        }
        if let Some(persona) = optional_str(TOOL, params, "persona")? {
            request.persona = persona.to_owned();
        }
        if let Some(comfort) = optional_str(TOOL, params, "comfort_profile")? {
            request.comfort_profile = comfort.to_owned();
        }

        let plan = self.planner.plan(&request);
        serialize_response(TOOL, &plan)
    }

    fn check_safety(&self, params: &Value) -> Result<Value, ToolError> {
        const TOOL: &str = "check_safety";

        let report = self.safety_checker.check(
            require_f64(TOOL, params, "temperature")?,
            optional_f64(TOOL, params, "wind_speed")?.unwrap_or(0.0),
            optional_f64(TOOL, params, "rain_chance")?.unwrap_or(0.0),
            optional_str(TOOL, params, "condition")?.unwrap_or(""),
        );

        serialize_response(TOOL, &report)
    }

    fn classify_activity(params: &Value) -> Result<Value, ToolError> {
        const TOOL: &str = "classify_activity";

        let context = classify_activity(require_str(TOOL, params, "activity")?);
        serialize_response(TOOL, &context)
    }

    fn get_preferences(&self, params: &Value) -> Result<Value, ToolError> {
        const TOOL: &str = "get_preferences";

        let prefs = self
            .memory
            .get_preferences(require_str(TOOL, params, "user_id")?);
        serialize_response(TOOL, &prefs)
    }

    fn update_preferences(&self, params: &Value) -> Result<Value, ToolError> {
        const TOOL: &str = "update_preferences";

        let user_id = require_str(TOOL, params, "user_id")?;

        let update = PreferenceUpdate {
            persona: optional_enum::<Persona>(TOOL, params, "persona")?,
            comfort_profile: optional_enum::<ComfortProfile>(TOOL, params, "comfort_profile")?,
            default_city: optional_str(TOOL, params, "default_city")?.map(str::to_owned),
            style_notes: optional_str(TOOL, params, "style_notes")?.map(str::to_owned),
        };

        let prefs = self.memory.update_preferences(user_id, update);
        serialize_response(TOOL, &prefs)
    }
}

// ── Parameter extraction helpers ────────────────────────────────────────

fn require_f64(tool: &str, params: &Value, key: &str) -> Result<f64, ToolError> {
    match params.get(key) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool, key)),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| ToolError::invalid_parameter(tool, key, "expected a number")),
    }
}

fn optional_f64(tool: &str, params: &Value, key: &str) -> Result<Option<f64>, ToolError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| ToolError::invalid_parameter(tool, key, "expected a number")),
    }
}

fn require_str<'a>(tool: &str, params: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    match params.get(key) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool, key)),
        Some(value) => value
            .as_str()
            .ok_or_else(|| ToolError::invalid_parameter(tool, key, "expected a string")),
    }
}

fn optional_str<'a>(tool: &str, params: &'a Value, key: &str) -> Result<Option<&'a str>, ToolError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| ToolError::invalid_parameter(tool, key, "expected a string")),
    }
}

fn optional_string_list(tool: &str, params: &Value, key: &str) -> Result<Vec<String>, ToolError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    ToolError::invalid_parameter(tool, key, "expected an array of strings")
                })
            })
            .collect(),
        Some(_) => Err(ToolError::invalid_parameter(
            tool,
            key,
            "expected an array of strings",
        )),
    }
}

fn optional_enum<T: serde::de::DeserializeOwned>(
    tool: &str,
    params: &Value,
    key: &str,
) -> Result<Option<T>, ToolError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| ToolError::invalid_parameter(tool, key, e.to_string())),
    }
}

fn serialize_response<T: serde::Serialize>(tool: &str, value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::execution_failed(tool, e.to_string()))
}

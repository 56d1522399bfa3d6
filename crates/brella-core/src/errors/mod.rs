// ABOUTME: Unified error handling system for the Brella platform
// ABOUTME: Standard error codes and the AppError type shared by all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brella Weather Intelligence

//! # Unified Error Handling System
//!
//! Centralized error handling for the Brella platform: standard error
//! codes, the `AppError` type, and tool-specific errors. The intelligence
//! core itself is infallible on typed inputs; these errors belong to the
//! integration layer (weather fetch, JSON parameter extraction,
//! configuration).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tool-specific error types for the JSON tool surface
pub mod tool;

pub use tool::ToolError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

/// Application-level error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required field or parameter was missing
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A requested resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// An upstream service (weather provider) failed
    #[error("external service error: {0}")]
    ExternalService(String),

    /// Configuration was missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create an external service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService(format!("{}: {}", service.into(), message.into()))
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The standard error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::MissingField(_) => ErrorCode::MissingRequiredField,
            Self::NotFound(_) => ErrorCode::ResourceNotFound,
            Self::ExternalService(_) => ErrorCode::ExternalServiceError,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Serialization(_) => ErrorCode::SerializationError,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Convenience result alias used across the platform
pub type AppResult<T> = Result<T, AppError>;

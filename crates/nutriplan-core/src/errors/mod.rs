// ABOUTME: Unified error type and stable error codes for the body-composition engine
// ABOUTME: Maps validation, dispatch and configuration failures onto AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible engine operation returns [`AppResult`]. The results assembler
//! never lets an [`AppError`] escape the public `calculate` entry point: it turns
//! the error into a "not computed" reason on the affected metric instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic malformed input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// One of sex, age, weight or height is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A field violates a physiological bound
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Measurement required by a formula is absent
    #[serde(rename = "MISSING_MEASUREMENT")]
    MissingMeasurement = 3004,

    // Inference (4000-4999)
    /// No formula is validated for the subject's age bracket
    #[serde(rename = "UNSUPPORTED_AGE")]
    UnsupportedAge = 4000,
    /// Metabolic-age dispatch matched none of its scenarios
    #[serde(rename = "NO_APPLICABLE_SCENARIO")]
    NoApplicableScenario = 4001,
    /// A formula produced a non-finite or non-physiological value
    #[serde(rename = "DEGENERATE_RESULT")]
    DegenerateResult = 4002,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::MissingMeasurement => "A measurement required by the formula is missing",
            Self::UnsupportedAge => "No validated formula exists for this age",
            Self::NoApplicableScenario => "No applicable calculation scenario",
            Self::DegenerateResult => "The formula produced a non-physiological value",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Input field the error refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Attach the offending input field
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Mandatory field absent
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("'{field}' is required"),
        )
        .with_field(field)
    }

    /// Field outside its physiological bounds
    pub fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("'{field}' must be between {min} and {max}, got {value}"),
        )
        .with_field(field)
    }

    /// Measurement group incomplete for a formula
    pub fn missing_measurement(formula: &str, field: &str) -> Self {
        Self::new(
            ErrorCode::MissingMeasurement,
            format!("{formula} requires '{field}'"),
        )
        .with_field(field)
    }

    /// Age bracket without a validated formula
    pub fn unsupported_age(age: f64, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnsupportedAge,
            format!("age {age}: {}", reason.into()),
        )
        .with_field("age")
    }

    /// Metabolic-age dispatch found no scenario
    pub fn no_applicable_scenario(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoApplicableScenario, message)
    }

    /// Formula output is not usable
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DegenerateResult, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

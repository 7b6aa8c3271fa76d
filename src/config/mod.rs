// ABOUTME: Configuration management module for the body-composition engine
// ABOUTME: Re-exports engine configuration, validation bounds and metabolic-age rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the `NutriPlan` engine
//!
//! - **Intelligence**: validation bounds, metabolic-age rules, abdominal-fat gates

/// Engine configuration with defaults, validation and environment overrides
pub mod intelligence;

pub use intelligence::{
    AbdominalFatConfig, ConfigError, EngineConfig, LeanObesityRule, MetabolicAgeConfig,
    ValidationConfig,
};

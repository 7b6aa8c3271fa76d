// ABOUTME: Engine configuration container with defaults, environment overrides and validation
// ABOUTME: Aggregates validation bounds, metabolic-age rules and abdominal-fat method gates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Provides type-safe configuration for the inference engine. Every engine
//! function receives `&EngineConfig` explicitly; the engine never reads the
//! environment itself. Outer collaborators (the CLI) call
//! [`EngineConfig::from_env`] to apply overrides.
//!
//! # Module Structure
//!
//! - `validation` - Physiological bounds for raw input
//! - `metabolic_age` - Obesity gates, lean-obesity rule, Method 2 deltas
//! - `error` - Configuration error type

pub mod error;
pub mod metabolic_age;
pub mod validation;

pub use error::ConfigError;
pub use metabolic_age::{ActivityDeltas, LeanObesityRule, MetabolicAgeConfig, WaistDeltaConfig};
pub use validation::{CircumferenceMinimums, ValidationConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Environment variable toggling the lean-obesity athlete rule
pub const ENV_LEAN_OBESITY_RULE: &str = "NUTRIPLAN_LEAN_OBESITY_RULE";
/// Environment variable overriding the bone-diameter mm heuristic threshold
pub const ENV_BONE_MM_THRESHOLD: &str = "NUTRIPLAN_BONE_MM_THRESHOLD";
/// Environment variable overriding the waist-delta cap
pub const ENV_WAIST_DELTA_CAP: &str = "NUTRIPLAN_WAIST_DELTA_CAP";
/// Environment variable overriding the Method A skinfold ceiling
pub const ENV_METHOD_A_MAX_SKINFOLD: &str = "NUTRIPLAN_METHOD_A_MAX_SKINFOLD_MM";

/// Abdominal-fat method gates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbdominalFatConfig {
    /// Largest abdominal skinfold accepted by Method A (mm): 40
    pub method_a_max_skinfold_mm: f64,
}

impl Default for AbdominalFatConfig {
    fn default() -> Self {
        Self {
            method_a_max_skinfold_mm: 40.0,
        }
    }
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Input validation bounds
    pub validation: ValidationConfig,
    /// Metabolic-age scenario engine parameters
    pub metabolic_age: MetabolicAgeConfig,
    /// Abdominal-fat method selection
    pub abdominal_fat: AbdominalFatConfig,
}

impl EngineConfig {
    /// Load defaults, apply environment overrides and validate
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            lean_obesity_rule = config.metabolic_age.lean_obesity_rule.enabled,
            bone_mm_threshold = config.validation.bone_mm_threshold,
            "Engine configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for inverted bounds and
    /// `ConfigError::ValueOutOfRange` for non-positive parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        let validation = &self.validation;
        if validation.skinfold_min_mm <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "skinfold_min_mm must be positive",
            ));
        }
        if validation.skinfold_min_mm >= validation.skinfold_max_mm {
            return Err(ConfigError::InvalidRange(
                "skinfold_min_mm must be < skinfold_max_mm",
            ));
        }
        let (pediatric_min, pediatric_max) = validation.pediatric_height_cm;
        let (adult_min, adult_max) = validation.adult_height_cm;
        if pediatric_min >= pediatric_max || adult_min >= adult_max {
            return Err(ConfigError::InvalidRange(
                "height bounds must be ascending",
            ));
        }
        if validation.bone_mm_threshold <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "bone_mm_threshold must be positive",
            ));
        }

        let metabolic = &self.metabolic_age;
        let rule = &metabolic.lean_obesity_rule;
        if rule.lean_fat_male >= metabolic.obese_fat_male
            || rule.lean_fat_female >= metabolic.obese_fat_female
        {
            return Err(ConfigError::InvalidRange(
                "lean-obesity thresholds must be below the obese body-fat thresholds",
            ));
        }
        let (athlete_min_age, athlete_max_age) = metabolic.athlete_skinfold_age;
        if athlete_min_age > athlete_max_age {
            return Err(ConfigError::InvalidRange(
                "athlete_skinfold_age must be ascending",
            ));
        }
        if metabolic.waist.cap_years < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "waist cap_years must not be negative",
            ));
        }
        if metabolic.bmr_delta_divisor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "bmr_delta_divisor must be positive",
            ));
        }

        if self.abdominal_fat.method_a_max_skinfold_mm > validation.skinfold_max_mm {
            return Err(ConfigError::InvalidRange(
                "method_a_max_skinfold_mm must not exceed skinfold_max_mm",
            ));
        }

        Ok(())
    }

    /// Parse an environment variable into a target if it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            ENV_LEAN_OBESITY_RULE,
            &mut self.metabolic_age.lean_obesity_rule.enabled,
        )?;
        Self::apply_env_var(
            ENV_BONE_MM_THRESHOLD,
            &mut self.validation.bone_mm_threshold,
        )?;
        Self::apply_env_var(ENV_WAIST_DELTA_CAP, &mut self.metabolic_age.waist.cap_years)?;
        Self::apply_env_var(
            ENV_METHOD_A_MAX_SKINFOLD,
            &mut self.abdominal_fat.method_a_max_skinfold_mm,
        )?;
        Ok(self)
    }
}

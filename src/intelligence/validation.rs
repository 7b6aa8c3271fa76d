// ABOUTME: Validation and normalization of the raw measurement record
// ABOUTME: Fail-fast on mandatory fields, fail-soft with field issues on optional measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Validation
//!
//! Turns a [`RawMeasurements`] record into a [`ValidatedInput`].
//!
//! - Sex, age, weight and height are mandatory; any problem with them aborts
//!   the request with an [`AppError`].
//! - Every optional measurement outside its bounds is dropped and reported as
//!   a [`FieldIssue`]; formulas that needed it become "not computed".
//! - Bone diameters that look like millimeters are rescaled to centimeters and
//!   reported as a note.

use crate::config::intelligence::ValidationConfig;
use nutriplan_core::errors::{AppError, AppResult, ErrorCode};
use nutriplan_core::models::{
    ActivityLevel, BoneDiameters, Circumferences, MeasurementSet, RawMeasurements, Sex,
    Skinfolds, SubjectProfile,
};
use serde::Serialize;
use tracing::{debug, warn};

/// A dropped optional field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    /// Input field name
    pub field: String,
    /// Error category
    pub code: ErrorCode,
    /// Human-readable description
    pub message: String,
}

impl From<AppError> for FieldIssue {
    fn from(error: AppError) -> Self {
        Self {
            field: error.field.clone().unwrap_or_default(),
            code: error.code,
            message: error.message,
        }
    }
}

/// Typed, bounds-checked request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedInput {
    /// Mandatory profile
    pub profile: SubjectProfile,
    /// Optional measurements that passed their bounds
    pub measurements: MeasurementSet,
    /// Optional fields that were dropped
    pub issues: Vec<FieldIssue>,
    /// Non-fatal remarks (unit rescaling)
    pub notes: Vec<String>,
}

/// Validate a raw record
///
/// # Errors
///
/// Returns `MissingRequiredField`, `InvalidInput` or `ValueOutOfRange` when
/// sex, age, weight or height is absent or implausible
pub fn validate(raw: &RawMeasurements, config: &ValidationConfig) -> AppResult<ValidatedInput> {
    let profile = validate_profile(raw, config)?;
    let mut validator = OptionalFields::new(config);

    let activity_level = raw.activity_level.as_deref().and_then(|level| {
        level
            .parse::<ActivityLevel>()
            .map_err(|error| validator.reject(error))
            .ok()
    });

    let skinfolds = Skinfolds {
        triceps: validator.skinfold("triceps_mm", raw.triceps_mm),
        subscapular: validator.skinfold("subscapular_mm", raw.subscapular_mm),
        suprailiac: validator.skinfold("suprailiac_mm", raw.suprailiac_mm),
        bicep: validator.skinfold("bicep_mm", raw.bicep_mm),
        calf: validator.skinfold("calf_skinfold_mm", raw.calf_skinfold_mm),
        abdominal: validator.skinfold("abdominal_mm", raw.abdominal_mm),
    };

    let minimums = &config.circumference_minimums;
    let circumferences = Circumferences {
        waist: validator.girth("waist_cm", raw.waist_cm, minimums.waist),
        hip: validator.girth("hip_cm", raw.hip_cm, minimums.hip),
        neck: validator.girth("neck_cm", raw.neck_cm, minimums.neck),
        arm: validator.girth("arm_cm", raw.arm_cm, minimums.arm),
        arm_contracted: validator.girth(
            "arm_contracted_cm",
            raw.arm_contracted_cm,
            minimums.arm_contracted,
        ),
        calf: validator.girth("calf_circumference_cm", raw.calf_circumference_cm, minimums.calf),
    };

    let diameters = BoneDiameters {
        wrist: validator.diameter("wrist_diameter_cm", raw.wrist_diameter_cm),
        humerus: validator.diameter("humerus_diameter_cm", raw.humerus_diameter_cm),
        femur: validator.diameter("femur_diameter_cm", raw.femur_diameter_cm),
    };

    let measurements = MeasurementSet {
        skinfolds,
        circumferences,
        diameters,
        known_body_fat_percent: validator
            .percentage("known_body_fat_percent", raw.known_body_fat_percent),
        desired_body_fat_percent: validator
            .percentage("desired_body_fat_percent", raw.desired_body_fat_percent),
    };

    debug!(
        sex = %profile.sex,
        age = profile.age,
        athlete = profile.athlete,
        dropped = validator.issues.len(),
        "Input validated"
    );

    Ok(ValidatedInput {
        profile: SubjectProfile {
            activity_level,
            ..profile
        },
        measurements,
        issues: validator.issues,
        notes: validator.notes,
    })
}

fn validate_profile(raw: &RawMeasurements, config: &ValidationConfig) -> AppResult<SubjectProfile> {
    let sex: Sex = raw
        .sex
        .as_deref()
        .ok_or_else(|| AppError::missing_field("sex"))?
        .parse()?;

    let age = required("age", raw.age)?;
    if age <= 0.0 || age > config.max_age_years {
        return Err(AppError::out_of_range("age", age, 0.0, config.max_age_years));
    }

    let weight_kg = required("weight_kg", raw.weight_kg)?;
    if weight_kg <= 0.0 || weight_kg > config.max_weight_kg {
        return Err(AppError::out_of_range(
            "weight_kg",
            weight_kg,
            0.0,
            config.max_weight_kg,
        ));
    }

    let height_cm = required("height_cm", raw.height_cm)?;
    let (min_height, max_height) = config.height_bounds(age);
    if !(min_height..=max_height).contains(&height_cm) {
        return Err(AppError::out_of_range(
            "height_cm",
            height_cm,
            min_height,
            max_height,
        ));
    }

    Ok(SubjectProfile {
        sex,
        age,
        weight_kg,
        height_cm,
        athlete: raw.athlete.unwrap_or(false),
        activity_level: None,
    })
}

fn required(field: &str, value: Option<f64>) -> AppResult<f64> {
    let value = value.ok_or_else(|| AppError::missing_field(field))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::invalid_input(format!("'{field}' must be a finite number")).with_field(field))
    }
}

/// Accumulates issues while checking optional fields
struct OptionalFields<'a> {
    config: &'a ValidationConfig,
    issues: Vec<FieldIssue>,
    notes: Vec<String>,
}

impl<'a> OptionalFields<'a> {
    const fn new(config: &'a ValidationConfig) -> Self {
        Self {
            config,
            issues: Vec::new(),
            notes: Vec::new(),
        }
    }

    fn reject(&mut self, error: AppError) {
        warn!(
            field = error.field.as_deref().unwrap_or_default(),
            reason = %error.message,
            "Dropping optional field"
        );
        self.issues.push(error.into());
    }

    fn bounded(&mut self, field: &str, value: Option<f64>, min: f64, max: f64) -> Option<f64> {
        let value = value?;
        if value.is_finite() && (min..=max).contains(&value) {
            Some(value)
        } else {
            self.reject(AppError::out_of_range(field, value, min, max));
            None
        }
    }

    fn skinfold(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        self.bounded(
            field,
            value,
            self.config.skinfold_min_mm,
            self.config.skinfold_max_mm,
        )
    }

    fn girth(&mut self, field: &str, value: Option<f64>, min: f64) -> Option<f64> {
        self.bounded(field, value, min, self.config.circumference_max_cm)
    }

    fn diameter(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        let value = value?;
        if !value.is_finite() || value <= 0.0 {
            self.reject(
                AppError::invalid_input(format!("'{field}' must be positive, got {value}"))
                    .with_field(field),
            );
            return None;
        }
        if value > self.config.bone_mm_threshold {
            let rescaled = value / 10.0;
            warn!(
                field,
                value,
                rescaled, "Bone diameter looks like millimeters, converting to centimeters"
            );
            self.notes.push(format!(
                "{field}: {value} interpreted as millimeters and converted to {rescaled} cm"
            ));
            return Some(rescaled);
        }
        Some(value)
    }

    fn percentage(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        let value = value?;
        if value.is_finite() && value > 0.0 && value < 100.0 {
            Some(value)
        } else {
            self.reject(
                AppError::new(
                    ErrorCode::ValueOutOfRange,
                    format!("'{field}' must be strictly between 0 and 100, got {value}"),
                )
                .with_field(field),
            );
            None
        }
    }
}

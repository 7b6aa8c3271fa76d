// ABOUTME: Secondary anthropometric metrics: ratios, mass fractionation and targets
// ABOUTME: Bone, residual and muscle mass, arm muscle area, ideal weight, fallback BMR and TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Secondary Anthropometrics
//!
//! # Scientific References
//!
//! - Von Döbeln, W. (1964), modified by Rocha, M.S.L. (1975): bone mass from wrist and femur breadths.
//! - Würch, A. (1974): residual mass fractions.
//! - Frisancho, A.R. (1981). "New norms of upper limb fat and muscle areas." *Am J Clin Nutr*, 34(11), 2540-2545.

use super::algorithms::BmrAlgorithm;
use super::composition::Composition;
use super::physiological_constants::anthropometrics::{
    ARM_BONE_CORRECTION_FEMALE, ARM_BONE_CORRECTION_MALE, BONE_MASS, MAX_WEIGHT_CHANGE_FRACTION,
    REFERENCE_BMI, RESIDUAL_FEMALE, RESIDUAL_MALE,
};
use super::physiological_constants::energy::{ACTIVITY_FEMALE, ACTIVITY_MALE};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{ActivityLevel, MeasurementSet, Sex, SubjectProfile};
use serde::Serialize;
use std::f64::consts::PI;

/// Waist-hip ratio
///
/// # Errors
///
/// Returns `MissingMeasurement` without waist or hip
pub fn waist_hip_ratio(measurements: &MeasurementSet) -> AppResult<f64> {
    let girths = &measurements.circumferences;
    let waist = girths
        .waist
        .ok_or_else(|| AppError::missing_measurement("waist-hip ratio", "waist_cm"))?;
    let hip = girths
        .hip
        .ok_or_else(|| AppError::missing_measurement("waist-hip ratio", "hip_cm"))?;
    Ok(waist / hip)
}

/// Rocha bone mass (kg): `3.02 × (H² × R × F × 400)^0.712`, lengths in meters
///
/// # Errors
///
/// Returns `MissingMeasurement` without wrist or femur breadth
pub fn bone_mass(profile: &SubjectProfile, measurements: &MeasurementSet) -> AppResult<f64> {
    let diameters = &measurements.diameters;
    let wrist_m = diameters
        .wrist
        .ok_or_else(|| AppError::missing_measurement("bone mass", "wrist_diameter_cm"))?
        / 100.0;
    let femur_m = diameters
        .femur
        .ok_or_else(|| AppError::missing_measurement("bone mass", "femur_diameter_cm"))?
        / 100.0;
    let height_m = profile.height_m();
    let (factor, scale, exponent) = BONE_MASS;
    Ok(factor * (height_m * height_m * wrist_m * femur_m * scale).powf(exponent))
}

/// Würch residual mass (kg)
#[must_use]
pub fn residual_mass(profile: &SubjectProfile) -> f64 {
    let fraction = match profile.sex {
        Sex::Male => RESIDUAL_MALE,
        Sex::Female => RESIDUAL_FEMALE,
    };
    profile.weight_kg * fraction
}

/// Total muscle mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuscleMass {
    /// Muscle mass (kg)
    pub kg: f64,
    /// Share of body weight (%)
    pub percent: f64,
}

/// Muscle mass as what remains after fat, bone and residual mass
///
/// # Errors
///
/// Returns `DegenerateResult` if the remainder is not positive
pub fn muscle_mass(
    profile: &SubjectProfile,
    composition: &Composition,
    bone_mass_kg: f64,
) -> AppResult<MuscleMass> {
    let kg = profile.weight_kg - (composition.fat_mass_kg + bone_mass_kg + residual_mass(profile));
    if kg <= 0.0 {
        return Err(AppError::degenerate(format!(
            "fat, bone and residual mass exceed body weight by {:.1} kg",
            -kg
        )));
    }
    Ok(MuscleMass {
        kg,
        percent: kg / profile.weight_kg * 100.0,
    })
}

/// Bone-corrected arm muscle area (cm²)
///
/// # Errors
///
/// Returns `MissingMeasurement` without relaxed arm girth or triceps
/// skinfold, `DegenerateResult` if the corrected area is not positive
pub fn arm_muscle_area(profile: &SubjectProfile, measurements: &MeasurementSet) -> AppResult<f64> {
    let arm = measurements
        .circumferences
        .arm
        .ok_or_else(|| AppError::missing_measurement("arm muscle area", "arm_cm"))?;
    let triceps_cm = measurements
        .skinfolds
        .triceps
        .ok_or_else(|| AppError::missing_measurement("arm muscle area", "triceps_mm"))?
        / 10.0;
    let correction = match profile.sex {
        Sex::Male => ARM_BONE_CORRECTION_MALE,
        Sex::Female => ARM_BONE_CORRECTION_FEMALE,
    };
    let muscle_circumference = PI.mul_add(-triceps_cm, arm);
    let area = muscle_circumference * muscle_circumference / (4.0 * PI) - correction;
    if area <= 0.0 {
        return Err(AppError::degenerate(format!(
            "arm muscle area is not positive ({area:.1} cm²)"
        )));
    }
    Ok(area)
}

/// How the ideal weight was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealWeightMethod {
    /// Lean mass at the desired body-fat percentage
    DesiredBodyFat,
    /// Weight at the reference BMI
    ReferenceBmi,
}

impl IdealWeightMethod {
    /// Method label for output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DesiredBodyFat => "desired_body_fat",
            Self::ReferenceBmi => "reference_bmi_22",
        }
    }
}

/// Target weight and the change needed to reach it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealWeight {
    /// Target weight (kg)
    pub kg: f64,
    /// Target minus current weight (kg)
    pub delta_kg: f64,
    /// Derivation
    pub method: IdealWeightMethod,
    /// Largest plausible change from the current weight (kg)
    pub max_change_kg: f64,
}

impl IdealWeight {
    /// Whether reaching the target stays within the plausible change
    #[must_use]
    pub fn is_plausible(&self) -> bool {
        self.delta_kg.abs() <= self.max_change_kg
    }
}

/// Ideal weight from the desired body fat when both it and lean mass are known,
/// otherwise from the reference BMI
#[must_use]
pub fn ideal_weight(
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
    composition: Option<&Composition>,
) -> IdealWeight {
    let (kg, method) = match (measurements.desired_body_fat_percent, composition) {
        (Some(desired), Some(composition)) => (
            composition.lean_mass_kg / (1.0 - desired / 100.0),
            IdealWeightMethod::DesiredBodyFat,
        ),
        _ => {
            let height_m = profile.height_m();
            (
                REFERENCE_BMI * height_m * height_m,
                IdealWeightMethod::ReferenceBmi,
            )
        }
    };
    IdealWeight {
        kg,
        delta_kg: kg - profile.weight_kg,
        method,
        max_change_kg: profile.weight_kg * MAX_WEIGHT_CHANGE_FRACTION,
    }
}

/// BMR when no metabolic-age scenario produced one: Katch-McArdle from lean
/// mass, else Mifflin-St Jeor
///
/// # Errors
///
/// Returns `DegenerateResult` if the estimate is not positive
pub fn fallback_bmr(
    profile: &SubjectProfile,
    composition: Option<&Composition>,
) -> AppResult<(f64, BmrAlgorithm)> {
    let algorithm = if composition.is_some() {
        BmrAlgorithm::KatchMcArdle
    } else {
        BmrAlgorithm::MifflinStJeor
    };
    let bmr = algorithm.estimate(profile, composition.map(|composition| composition.lean_mass_kg))?;
    Ok((bmr, algorithm))
}

/// Total daily energy expenditure (kcal/day, whole kilocalories): BMR times the
/// sex-specific multiplier for the declared activity level
///
/// # Errors
///
/// Returns `MissingMeasurement` without an activity level
pub fn total_energy_expenditure(profile: &SubjectProfile, bmr: f64) -> AppResult<f64> {
    let level = profile
        .activity_level
        .ok_or_else(|| AppError::missing_measurement("TDEE", "activity_level"))?;
    let [sedentary, light, moderate, intense, athlete] = match profile.sex {
        Sex::Male => ACTIVITY_MALE,
        Sex::Female => ACTIVITY_FEMALE,
    };
    let multiplier = match level {
        ActivityLevel::Sedentary => sedentary,
        ActivityLevel::Light => light,
        ActivityLevel::Moderate => moderate,
        ActivityLevel::Intense => intense,
        ActivityLevel::Athlete => athlete,
    };
    Ok((bmr * multiplier).round())
}

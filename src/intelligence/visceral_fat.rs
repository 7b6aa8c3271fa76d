// ABOUTME: Visceral index and abdominal fat area, thickness and mass estimation
// ABOUTME: Skinfold-based Method A for athletes, body-fat based Method B otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Visceral / Abdominal-Fat Engine
//!
//! ## Visceral index
//!
//! - Non-athletes: waist-to-height ratio (IAV), rounded to two decimals.
//! - Athletes: `0.4 × fat fraction + 0.6 × IAV`; without a body-fat
//!   percentage the IAV table is used.
//!
//! ## Abdominal fat
//!
//! - Method A (athlete, abdominal skinfold <= 40 mm): area from waist and
//!   skinfold geometry.
//! - Method B (everyone else): area from body-fat percentage and waist, plus an
//!   unscaled area reported against the Method A table as an advisory value.
//!
//! # Scientific References
//!
//! - Ashwell, M. et al. (2012). "Waist-to-height ratio is a better screening tool than waist circumference and BMI." *Obes Rev*, 13(3), 275-286.
//! - Kvist, H. et al. (1988). "Total and visceral adipose-tissue volumes derived from measurements with computed tomography." *Am J Clin Nutr*, 48(6), 1351-1361.

use super::classification::{AgeBand, Classification};
use super::physiological_constants::abdominal::{
    KVIST_FEMALE, KVIST_MALE, MASS_FACTOR, METHOD_B_AREA_FACTOR, METHOD_B_UNSCALED,
    MIXED_INDEX_FAT_WEIGHT, MIXED_INDEX_IAV_WEIGHT, THICKNESS_K_FEMALE, THICKNESS_K_MALE,
    THICKNESS_SKINFOLD_COEF, THICKNESS_WAIST_COEF,
};
use super::physiological_constants::reference_ranges::{
    ABDOMINAL_AREA_METHOD_A, ABDOMINAL_AREA_METHOD_B, ABDOMINAL_MASS, ABDOMINAL_THICKNESS,
    MIXED_INDEX, VISCERAL_INDEX,
};
use crate::config::intelligence::AbdominalFatConfig;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{MeasurementSet, Sex, SubjectProfile};
use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

/// Which visceral index was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisceralIndexKind {
    /// Waist-to-height ratio
    WaistToHeight,
    /// Athlete mixed index
    Mixed,
}

impl VisceralIndexKind {
    /// Method label for output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WaistToHeight => "waist_to_height_ratio",
            Self::Mixed => "athlete_mixed_index",
        }
    }
}

/// Visceral index with its risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisceralIndex {
    /// Index kind
    pub kind: VisceralIndexKind,
    /// Index value
    pub value: f64,
    /// Risk classification
    pub classification: Option<Classification>,
}

/// Abdominal-fat method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbdominalFatMethod {
    /// Abdominal skinfold and waist
    SkinfoldMethodA,
    /// Body-fat percentage and waist
    BodyFatMethodB,
}

impl AbdominalFatMethod {
    /// Method label for output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SkinfoldMethodA => "method_a_skinfold",
            Self::BodyFatMethodB => "method_b_body_fat",
        }
    }
}

/// A value with its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classified {
    /// Value
    pub value: f64,
    /// Classification against the method's table
    pub classification: Option<Classification>,
}

/// Abdominal fat estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbdominalFat {
    /// Method used
    pub method: AbdominalFatMethod,
    /// Abdominal fat area (cm²)
    pub area: Classified,
    /// Abdominal fat thickness (cm)
    pub thickness: Classified,
    /// Visceral fat mass (kg)
    pub mass: Classified,
    /// Method B only: area rescaled to the Method A table, advisory
    pub unscaled_area: Option<Classified>,
}

/// Waist-to-height ratio rounded to two decimals
#[must_use]
pub fn waist_to_height_ratio(waist_cm: f64, height_cm: f64) -> f64 {
    (waist_cm / height_cm * 100.0).round() / 100.0
}

/// Visceral index for the subject
///
/// # Errors
///
/// Returns `MissingMeasurement` without a waist circumference
pub fn calculate_visceral_index(
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
    body_fat_percent: Option<f64>,
) -> AppResult<VisceralIndex> {
    let waist = waist(measurements, "visceral index")?;
    let iav = waist_to_height_ratio(waist, profile.height_cm);

    let index = match body_fat_percent {
        Some(percent) if profile.athlete => {
            let value =
                MIXED_INDEX_FAT_WEIGHT.mul_add(percent / 100.0, MIXED_INDEX_IAV_WEIGHT * iav);
            VisceralIndex {
                kind: VisceralIndexKind::Mixed,
                value,
                classification: MIXED_INDEX.classify(profile.sex, value),
            }
        }
        _ => VisceralIndex {
            kind: VisceralIndexKind::WaistToHeight,
            value: iav,
            classification: VISCERAL_INDEX.classify(profile.sex, profile.age, iav),
        },
    };
    debug!(kind = index.kind.name(), value = index.value, "Visceral index computed");
    Ok(index)
}

/// Abdominal fat area, thickness and mass
///
/// # Errors
///
/// Returns `MissingMeasurement` without a waist circumference, or without a
/// body-fat percentage when Method B applies
pub fn calculate_abdominal_fat(
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
    body_fat_percent: Option<f64>,
    config: &AbdominalFatConfig,
) -> AppResult<AbdominalFat> {
    let waist = waist(measurements, "abdominal fat")?;
    let k = thickness_correction(profile.sex, profile.age);

    let method_a_skinfold = measurements
        .skinfolds
        .abdominal
        .filter(|skinfold| profile.athlete && *skinfold <= config.method_a_max_skinfold_mm);

    let result = if let Some(skinfold) = method_a_skinfold {
        let area = 2.0f64.mul_add(waist * skinfold, -(PI * skinfold * skinfold / 4.0)) / 10.0;
        let thickness = THICKNESS_SKINFOLD_COEF
            .mul_add(skinfold, THICKNESS_WAIST_COEF * waist)
            - k;
        let thickness = thickness.max(0.0);
        let mass = thickness * area * MASS_FACTOR;
        AbdominalFat {
            method: AbdominalFatMethod::SkinfoldMethodA,
            area: classified(area, ABDOMINAL_AREA_METHOD_A.classify(profile.sex, profile.age, area)),
            thickness: classify_thickness(profile, thickness),
            mass: classify_mass(profile, mass),
            unscaled_area: None,
        }
    } else {
        let percent = body_fat_percent
            .ok_or_else(|| AppError::missing_measurement("abdominal fat method B", "body_fat_percent"))?;
        let area = percent / 10.0 * METHOD_B_AREA_FACTOR * waist;
        let unscaled = area
            * match profile.sex {
                Sex::Male => METHOD_B_UNSCALED.0,
                Sex::Female => METHOD_B_UNSCALED.1,
            };
        let thickness = THICKNESS_SKINFOLD_COEF
            .mul_add(percent, THICKNESS_WAIST_COEF * waist)
            - k;
        let [intercept, waist_coef, bmi_coef] = match profile.sex {
            Sex::Male => KVIST_MALE,
            Sex::Female => KVIST_FEMALE,
        };
        let mass = bmi_coef.mul_add(profile.bmi(), waist_coef.mul_add(waist, intercept));
        AbdominalFat {
            method: AbdominalFatMethod::BodyFatMethodB,
            area: classified(area, ABDOMINAL_AREA_METHOD_B.classify(profile.sex, profile.age, area)),
            thickness: classify_thickness(profile, thickness.max(0.0)),
            mass: classify_mass(profile, mass.max(0.0)),
            unscaled_area: Some(classified(
                unscaled,
                ABDOMINAL_AREA_METHOD_A.classify(profile.sex, profile.age, unscaled),
            )),
        }
    };

    debug!(
        method = result.method.name(),
        area = result.area.value,
        thickness = result.thickness.value,
        mass = result.mass.value,
        "Abdominal fat computed"
    );
    Ok(result)
}

fn waist(measurements: &MeasurementSet, formula: &str) -> AppResult<f64> {
    measurements
        .circumferences
        .waist
        .ok_or_else(|| AppError::missing_measurement(formula, "waist_cm"))
}

const fn classified(value: f64, classification: Option<Classification>) -> Classified {
    Classified {
        value,
        classification,
    }
}

fn classify_thickness(profile: &SubjectProfile, thickness: f64) -> Classified {
    classified(
        thickness,
        ABDOMINAL_THICKNESS.classify(profile.sex, profile.age, thickness),
    )
}

fn classify_mass(profile: &SubjectProfile, mass: f64) -> Classified {
    classified(mass, ABDOMINAL_MASS.classify(profile.sex, profile.age, mass))
}

fn thickness_correction(sex: Sex, age: f64) -> f64 {
    let table = match sex {
        Sex::Male => THICKNESS_K_MALE,
        Sex::Female => THICKNESS_K_FEMALE,
    };
    match AgeBand::from_age(age) {
        AgeBand::Young => table[0],
        AgeBand::Middle => table[1],
        AgeBand::Senior => table[2],
    }
}

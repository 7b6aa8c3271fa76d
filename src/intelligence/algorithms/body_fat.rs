// ABOUTME: Body-fat percentage estimators from skinfolds, girths and BMI
// ABOUTME: Implements Slaughter, Jackson-Pollock, Durnin-Womersley, US Navy and Deurenberg equations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::density::DensityConversion;
use crate::intelligence::physiological_constants::body_fat::{
    CIRCUMFERENCE_FEMALE, CIRCUMFERENCE_MALE, DEURENBERG, DURNIN_WOMERSLEY_FEMALE,
    DURNIN_WOMERSLEY_MALE, JACKSON_POLLOCK_FEMALE, JACKSON_POLLOCK_MALE, MIN_SUPPORTED_AGE,
    SLAUGHTER_FEMALE, SLAUGHTER_MALE,
};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{is_pediatric_age, MeasurementSet, Sex, SubjectProfile};
use serde::{Deserialize, Serialize};

/// Body-fat estimation algorithm
///
/// - `Slaughter`: two-skinfold linear equation for ages 6-17
/// - `JacksonPollock`: three-skinfold quadratic density with age term, adults
/// - `DurninWomersley`: four-skinfold log density, sex and age banded, adults
/// - `Circumference`: US Navy log-linear density from girths and height, adults
/// - `Deurenberg`: BMI regression, adults, advisory only
///
/// Density-based algorithms convert through a [`DensityConversion`], Siri by default.
///
/// # Scientific References
///
/// - Slaughter, M.H. et al. (1988). "Skinfold equations for estimation of body fatness in children and youth." *Hum Biol*, 60(5), 709-723.
/// - Jackson, A.S. & Pollock, M.L. (1978). "Generalized equations for predicting body density of men." *Br J Nutr*, 40(3), 497-504.
/// - Durnin, J.V. & Womersley, J. (1974). "Body fat assessed from total body density." *Br J Nutr*, 32(1), 77-97.
/// - Hodgdon, J.A. & Beckett, M.B. (1984). "Prediction of percent body fat for U.S. Navy men and women." NHRC Report 84-11.
/// - Deurenberg, P. et al. (1991). "Body mass index as a measure of body fatness." *Br J Nutr*, 65(2), 105-114.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatAlgorithm {
    /// Slaughter et al. (1988): triceps + calf
    Slaughter,
    /// Jackson-Pollock: triceps + subscapular + suprailiac + age
    JacksonPollock,
    /// Durnin-Womersley: triceps + subscapular + suprailiac + biceps
    DurninWomersley,
    /// US Navy circumference method
    Circumference,
    /// Deurenberg BMI equation
    Deurenberg,
}

/// A body-fat estimate with the density it came from, if any
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFatEstimate {
    /// Body fat (% of weight)
    pub percent: f64,
    /// Body density (g/cm³) for density-based algorithms
    pub density: Option<f64>,
    /// Algorithm that produced the estimate
    pub algorithm: BodyFatAlgorithm,
    /// Density conversion applied
    pub conversion: Option<DensityConversion>,
}

impl BodyFatAlgorithm {
    /// Estimate body fat with the default Siri conversion
    ///
    /// # Errors
    ///
    /// Returns `MissingMeasurement` when a required site is absent,
    /// `UnsupportedAge` outside the validated age range and `DegenerateResult`
    /// when the equation leaves (0, 100)
    pub fn estimate(
        self,
        profile: &SubjectProfile,
        measurements: &MeasurementSet,
    ) -> AppResult<BodyFatEstimate> {
        self.estimate_with(profile, measurements, DensityConversion::Siri)
    }

    /// Estimate body fat with an explicit density conversion
    ///
    /// The conversion is ignored by the non-density algorithms.
    ///
    /// # Errors
    ///
    /// Same as [`BodyFatAlgorithm::estimate`]
    pub fn estimate_with(
        self,
        profile: &SubjectProfile,
        measurements: &MeasurementSet,
        conversion: DensityConversion,
    ) -> AppResult<BodyFatEstimate> {
        self.check_age(profile.age)?;

        if !self.is_density_based() {
            let percent = match self {
                Self::Slaughter => Self::calculate_slaughter(profile.sex, measurements)?,
                _ => Self::calculate_deurenberg(profile),
            };
            return Ok(BodyFatEstimate {
                percent: checked_percent(self, percent)?,
                density: None,
                algorithm: self,
                conversion: None,
            });
        }

        let density = self.body_density(profile, measurements)?;
        Ok(BodyFatEstimate {
            percent: conversion.to_body_fat(density)?,
            density: Some(density),
            algorithm: self,
            conversion: Some(conversion),
        })
    }

    /// Body density (g/cm³) for the density-based algorithms
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for `Slaughter` and `Deurenberg`, otherwise the
    /// same errors as [`BodyFatAlgorithm::estimate`]
    pub fn body_density(
        self,
        profile: &SubjectProfile,
        measurements: &MeasurementSet,
    ) -> AppResult<f64> {
        self.check_age(profile.age)?;
        match self {
            Self::JacksonPollock => Self::jackson_pollock_density(profile, measurements),
            Self::DurninWomersley => Self::durnin_womersley_density(profile, measurements),
            Self::Circumference => Self::circumference_density(profile, measurements),
            Self::Slaughter | Self::Deurenberg => Err(AppError::invalid_input(format!(
                "{} does not estimate body density",
                self.name()
            ))),
        }
    }

    /// Whether the algorithm goes through a body-density equation
    #[must_use]
    pub const fn is_density_based(self) -> bool {
        matches!(
            self,
            Self::JacksonPollock | Self::DurninWomersley | Self::Circumference
        )
    }

    /// Whether the algorithm is validated for an age
    #[must_use]
    pub fn supports_age(self, age: f64) -> bool {
        match self {
            Self::Slaughter => age >= MIN_SUPPORTED_AGE && is_pediatric_age(age),
            _ => !is_pediatric_age(age),
        }
    }

    fn check_age(self, age: f64) -> AppResult<()> {
        if self.supports_age(age) {
            Ok(())
        } else {
            Err(AppError::unsupported_age(
                age,
                format!("{} is not validated for this age", self.name()),
            ))
        }
    }

    fn calculate_slaughter(sex: Sex, measurements: &MeasurementSet) -> AppResult<f64> {
        let [triceps, calf] = require(
            Self::Slaughter,
            ["triceps_mm", "calf_skinfold_mm"],
            [measurements.skinfolds.triceps, measurements.skinfolds.calf],
        )?;
        let (slope, intercept) = match sex {
            Sex::Male => SLAUGHTER_MALE,
            Sex::Female => SLAUGHTER_FEMALE,
        };
        Ok(slope.mul_add(triceps + calf, intercept))
    }

    fn calculate_deurenberg(profile: &SubjectProfile) -> f64 {
        let [bmi_coef, age_coef, sex_coef, constant] = DEURENBERG;
        bmi_coef.mul_add(profile.bmi(), age_coef * profile.age)
            - sex_coef * profile.sex.indicator()
            - constant
    }

    fn jackson_pollock_density(
        profile: &SubjectProfile,
        measurements: &MeasurementSet,
    ) -> AppResult<f64> {
        let skinfolds = &measurements.skinfolds;
        let sites = require(
            Self::JacksonPollock,
            ["triceps_mm", "subscapular_mm", "suprailiac_mm"],
            [skinfolds.triceps, skinfolds.subscapular, skinfolds.suprailiac],
        )?;
        let sum: f64 = sites.iter().sum();
        let [intercept, linear, quadratic, age_coef] = match profile.sex {
            Sex::Male => JACKSON_POLLOCK_MALE,
            Sex::Female => JACKSON_POLLOCK_FEMALE,
        };
        let polynomial = quadratic.mul_add(sum, linear).mul_add(sum, intercept);
        Ok(age_coef.mul_add(profile.age, polynomial))
    }

    fn durnin_womersley_density(
        profile: &SubjectProfile,
        measurements: &MeasurementSet,
    ) -> AppResult<f64> {
        let skinfolds = &measurements.skinfolds;
        let sites = require(
            Self::DurninWomersley,
            ["triceps_mm", "subscapular_mm", "suprailiac_mm", "bicep_mm"],
            [
                skinfolds.triceps,
                skinfolds.subscapular,
                skinfolds.suprailiac,
                skinfolds.bicep,
            ],
        )?;
        let sum: f64 = sites.iter().sum();
        let (intercept, slope) = durnin_womersley_coefficients(profile.sex, profile.age);
        Ok(slope.mul_add(-sum.log10(), intercept))
    }

    fn circumference_density(
        profile: &SubjectProfile,
        measurements: &MeasurementSet,
    ) -> AppResult<f64> {
        let girths = &measurements.circumferences;
        let (girth, [intercept, girth_coef, height_coef]) = match profile.sex {
            Sex::Male => {
                let [waist, neck] = require(
                    Self::Circumference,
                    ["waist_cm", "neck_cm"],
                    [girths.waist, girths.neck],
                )?;
                (waist - neck, CIRCUMFERENCE_MALE)
            }
            Sex::Female => {
                let [waist, hip, neck] = require(
                    Self::Circumference,
                    ["waist_cm", "hip_cm", "neck_cm"],
                    [girths.waist, girths.hip, girths.neck],
                )?;
                (waist + hip - neck, CIRCUMFERENCE_FEMALE)
            }
        };
        if girth <= 0.0 {
            return Err(AppError::degenerate(format!(
                "Circumference method needs a positive girth difference, got {girth:.1} cm"
            )));
        }
        Ok(height_coef.mul_add(profile.height_cm.log10(), girth_coef.mul_add(-girth.log10(), intercept)))
    }

    /// Get algorithm name for logging and output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slaughter => "slaughter",
            Self::JacksonPollock => "jackson_pollock",
            Self::DurninWomersley => "durnin_womersley",
            Self::Circumference => "circumference",
            Self::Deurenberg => "deurenberg",
        }
    }
}

/// Durnin-Womersley `(c, m)` for a sex and age (bands 17-19, 20-29, 30-39, 40-49, 50+)
#[must_use]
pub fn durnin_womersley_coefficients(sex: Sex, age: f64) -> (f64, f64) {
    let table = match sex {
        Sex::Male => &DURNIN_WOMERSLEY_MALE,
        Sex::Female => &DURNIN_WOMERSLEY_FEMALE,
    };
    let band = if age < 20.0 {
        0
    } else if age < 30.0 {
        1
    } else if age < 40.0 {
        2
    } else if age < 50.0 {
        3
    } else {
        4
    };
    table[band]
}

fn require<const N: usize>(
    algorithm: BodyFatAlgorithm,
    fields: [&str; N],
    values: [Option<f64>; N],
) -> AppResult<[f64; N]> {
    let mut sites = [0.0; N];
    for ((site, field), value) in sites.iter_mut().zip(fields).zip(values) {
        *site = value.ok_or_else(|| AppError::missing_measurement(algorithm.name(), field))?;
    }
    Ok(sites)
}

fn checked_percent(algorithm: BodyFatAlgorithm, percent: f64) -> AppResult<f64> {
    if percent.is_finite() && percent > 0.0 && percent < 100.0 {
        Ok(percent)
    } else {
        Err(AppError::degenerate(format!(
            "{} gives {percent:.2}% body fat",
            algorithm.name()
        )))
    }
}

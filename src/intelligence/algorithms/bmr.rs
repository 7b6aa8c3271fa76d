// ABOUTME: Basal metabolic rate equations and the inverted Harris-Benedict age solver
// ABOUTME: Implements Katch-McArdle, revised Harris-Benedict and Mifflin-St Jeor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::physiological_constants::energy::{
    HARRIS_BENEDICT_FEMALE, HARRIS_BENEDICT_MALE, KATCH_MCARDLE, MIFFLIN_ST_JEOR,
};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{Sex, SubjectProfile};
use serde::{Deserialize, Serialize};

/// Basal metabolic rate algorithm
///
/// - `KatchMcArdle`: 370 + 21.6 x lean mass, needs a body-fat estimate
/// - `HarrisBenedict`: revised 1984 equation from weight, height, age and sex
/// - `MifflinStJeor`: 10w + 6.25h - 5a + s, the fallback without body composition
///
/// # Scientific References
///
/// - `McArdle`, W.D., Katch, F.I. & Katch, V.L. (2010). *Exercise Physiology* (7th ed.).
/// - Roza, A.M. & Shizgal, H.M. (1984). "The Harris Benedict equation reevaluated." *Am J Clin Nutr*, 40(1), 168-182.
/// - Mifflin, M.D. et al. (1990). "A new predictive equation for resting energy expenditure." *Am J Clin Nutr*, 51(2), 241-247.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmrAlgorithm {
    /// Katch-McArdle (lean mass)
    KatchMcArdle,
    /// Harris-Benedict revised (Roza & Shizgal)
    HarrisBenedict,
    /// Mifflin-St Jeor
    MifflinStJeor,
}

impl BmrAlgorithm {
    /// Estimate BMR (kcal/day)
    ///
    /// # Errors
    ///
    /// Returns `MissingMeasurement` if Katch-McArdle is asked without a lean
    /// mass and `DegenerateResult` if the estimate is not positive
    pub fn estimate(self, profile: &SubjectProfile, lean_mass_kg: Option<f64>) -> AppResult<f64> {
        let bmr = match self {
            Self::KatchMcArdle => {
                let lean = lean_mass_kg
                    .ok_or_else(|| AppError::missing_measurement(self.name(), "lean_mass_kg"))?;
                calculate_katch_mcardle(lean)
            }
            Self::HarrisBenedict => calculate_harris_benedict(
                profile.sex,
                profile.weight_kg,
                profile.height_cm,
                profile.age,
            ),
            Self::MifflinStJeor => calculate_mifflin_st_jeor(
                profile.sex,
                profile.weight_kg,
                profile.height_cm,
                profile.age,
            ),
        };
        if bmr.is_finite() && bmr > 0.0 {
            Ok(bmr)
        } else {
            Err(AppError::degenerate(format!(
                "{} gives a non-positive BMR ({bmr:.1} kcal)",
                self.name()
            )))
        }
    }

    /// Get algorithm name for logging and output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::KatchMcArdle => "katch_mcardle",
            Self::HarrisBenedict => "harris_benedict",
            Self::MifflinStJeor => "mifflin_st_jeor",
        }
    }
}

/// Katch-McArdle BMR from lean mass (kg)
#[must_use]
pub fn calculate_katch_mcardle(lean_mass_kg: f64) -> f64 {
    let (constant, per_kg) = KATCH_MCARDLE;
    per_kg.mul_add(lean_mass_kg, constant)
}

/// Revised Harris-Benedict BMR
#[must_use]
pub fn calculate_harris_benedict(sex: Sex, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    let [constant, weight_coef, height_coef, age_coef] = harris_benedict_coefficients(sex);
    age_coef.mul_add(
        -age,
        height_coef.mul_add(height_cm, weight_coef.mul_add(weight_kg, constant)),
    )
}

/// Age at which Harris-Benedict predicts `bmr` for this weight and height
///
/// Solves `bmr = c + w·weight + h·height − a·age` for `age`.
#[must_use]
pub fn harris_benedict_age_for_bmr(sex: Sex, weight_kg: f64, height_cm: f64, bmr: f64) -> f64 {
    let [constant, weight_coef, height_coef, age_coef] = harris_benedict_coefficients(sex);
    (height_coef.mul_add(height_cm, weight_coef.mul_add(weight_kg, constant)) - bmr) / age_coef
}

/// Mifflin-St Jeor BMR
#[must_use]
pub fn calculate_mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    let [weight_coef, height_coef, age_coef, male_constant, female_constant] = MIFFLIN_ST_JEOR;
    let constant = match sex {
        Sex::Male => male_constant,
        Sex::Female => female_constant,
    };
    age_coef.mul_add(
        -age,
        height_coef.mul_add(height_cm, weight_coef.mul_add(weight_kg, constant)),
    )
}

const fn harris_benedict_coefficients(sex: Sex) -> [f64; 4] {
    match sex {
        Sex::Male => HARRIS_BENEDICT_MALE,
        Sex::Female => HARRIS_BENEDICT_FEMALE,
    }
}

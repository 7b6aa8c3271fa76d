// ABOUTME: Metabolic-age engine dispatching exactly one of six measurement scenarios
// ABOUTME: Method 1 inverts Harris-Benedict, Method 2 adds BMR, waist and activity deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Metabolic-Age Engine
//!
//! ## Pre-step
//!
//! The composition body-fat percentage decides obesity (BMI >= 30 and body fat
//! above 25% male / 32% female). The lean-obesity rule re-routes BMI >= 30
//! subjects with low body fat to the athlete scenarios.
//!
//! ## Scenarios (checked top-down, first match wins)
//!
//! | # | Condition | Method |
//! |---|---|---|
//! | 1 | athlete, Jackson-Pollock skinfolds, 18 <= age <= 61 | Method 1, Siri |
//! | 2 | athlete, known body fat | Method 1 |
//! | 3 | non-athlete, Durnin-Womersley skinfolds, not obese | Method 2, Brozek |
//! | 4 | non-athlete, known body fat, not obese, waist | Method 2 |
//! | 5 | non-athlete, Durnin-Womersley skinfolds, obese | Method 2, obesity-adjusted |
//! | 6 | non-athlete, known body fat, obese, waist | Method 2 |
//!
//! ## Methods
//!
//! - Method 1: BMR by Katch-McArdle, metabolic age is the age at which
//!   Harris-Benedict predicts that BMR.
//! - Method 2: chronological age plus `(BMR_expected - BMR) / 15`, a capped
//!   waist term and an activity term.

use super::algorithms::bmr::{calculate_harris_benedict, calculate_katch_mcardle, harris_benedict_age_for_bmr};
use super::algorithms::{BodyFatAlgorithm, DensityConversion};
use super::composition::Composition;
use crate::config::intelligence::{MetabolicAgeConfig, WaistDeltaConfig};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{MeasurementSet, SubjectProfile};
use serde::Serialize;
use tracing::{debug, info};

/// Computation method shared by several scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetabolicMethod {
    /// Inverted Harris-Benedict from Katch-McArdle BMR
    InverseHarrisBenedict,
    /// Chronological age plus deltas
    AgeAdjustment,
}

/// The six mutually exclusive metabolic-age scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetabolicScenario {
    /// S1: athlete with Jackson-Pollock skinfolds in the validated age window
    AthleteSkinfolds,
    /// S2: athlete with a known body-fat percentage
    AthleteKnownBodyFat,
    /// S3: non-obese non-athlete with Durnin-Womersley skinfolds
    Skinfolds,
    /// S4: non-obese non-athlete with known body fat and waist
    KnownBodyFat,
    /// S5: obese non-athlete with Durnin-Womersley skinfolds
    ObeseSkinfolds,
    /// S6: obese non-athlete with known body fat and waist
    ObeseKnownBodyFat,
}

/// Dispatch order
pub const SCENARIOS: [MetabolicScenario; 6] = [
    MetabolicScenario::AthleteSkinfolds,
    MetabolicScenario::AthleteKnownBodyFat,
    MetabolicScenario::Skinfolds,
    MetabolicScenario::KnownBodyFat,
    MetabolicScenario::ObeseSkinfolds,
    MetabolicScenario::ObeseKnownBodyFat,
];

/// Boolean facts the dispatch reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[allow(clippy::struct_excessive_bools)] // One flag per dispatch condition
pub struct ScenarioFacts {
    /// Athlete after the lean-obesity rule
    pub athlete: bool,
    /// Jackson-Pollock (Siri) evaluates for this subject
    pub jackson_pollock_skinfolds: bool,
    /// Age inside the athlete skinfold window
    pub athlete_skinfold_age: bool,
    /// Durnin-Womersley evaluates with the conversion its scenario uses
    pub durnin_womersley_skinfolds: bool,
    /// User-supplied body-fat percentage present
    pub known_body_fat: bool,
    /// Obesity pre-step result
    pub obese: bool,
    /// Waist circumference present
    pub waist: bool,
}

impl MetabolicScenario {
    /// Whether the scenario's own condition holds, ignoring earlier scenarios
    #[must_use]
    pub const fn matches(self, facts: &ScenarioFacts) -> bool {
        match self {
            Self::AthleteSkinfolds => {
                facts.athlete && facts.jackson_pollock_skinfolds && facts.athlete_skinfold_age
            }
            Self::AthleteKnownBodyFat => facts.athlete && facts.known_body_fat,
            Self::Skinfolds => !facts.athlete && facts.durnin_womersley_skinfolds && !facts.obese,
            Self::KnownBodyFat => {
                !facts.athlete && facts.known_body_fat && !facts.obese && facts.waist
            }
            Self::ObeseSkinfolds => {
                !facts.athlete && facts.durnin_womersley_skinfolds && facts.obese
            }
            Self::ObeseKnownBodyFat => {
                !facts.athlete && facts.known_body_fat && facts.obese && facts.waist
            }
        }
    }

    /// First scenario whose condition holds
    #[must_use]
    pub fn dispatch(facts: &ScenarioFacts) -> Option<Self> {
        SCENARIOS.into_iter().find(|scenario| scenario.matches(facts))
    }

    /// Scenario number (1-6)
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::AthleteSkinfolds => 1,
            Self::AthleteKnownBodyFat => 2,
            Self::Skinfolds => 3,
            Self::KnownBodyFat => 4,
            Self::ObeseSkinfolds => 5,
            Self::ObeseKnownBodyFat => 6,
        }
    }

    /// Method the scenario uses
    #[must_use]
    pub const fn method(self) -> MetabolicMethod {
        match self {
            Self::AthleteSkinfolds | Self::AthleteKnownBodyFat => {
                MetabolicMethod::InverseHarrisBenedict
            }
            Self::Skinfolds
            | Self::KnownBodyFat
            | Self::ObeseSkinfolds
            | Self::ObeseKnownBodyFat => MetabolicMethod::AgeAdjustment,
        }
    }

    /// Method label for output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AthleteSkinfolds => "method_1_jackson_pollock_siri",
            Self::AthleteKnownBodyFat => "method_1_known_body_fat",
            Self::Skinfolds => "method_2_durnin_womersley_brozek",
            Self::KnownBodyFat => "method_2_known_body_fat",
            Self::ObeseSkinfolds => "method_2_durnin_womersley_obesity_adjusted",
            Self::ObeseKnownBodyFat => "method_2_known_body_fat_obese",
        }
    }
}

/// Method 2 components (years)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeDeltas {
    /// `(BMR_expected - BMR) / divisor`
    pub bmr: f64,
    /// Capped waist term
    pub waist: f64,
    /// Activity term
    pub activity: f64,
}

/// Metabolic-age outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetabolicResult {
    /// Scenario that fired
    pub scenario: MetabolicScenario,
    /// Metabolic age (years)
    pub metabolic_age: f64,
    /// Katch-McArdle BMR (kcal/day)
    pub bmr: f64,
    /// Body fat used by the scenario (%)
    pub body_fat_percent: f64,
    /// Density conversion, skinfold scenarios only
    pub conversion: Option<DensityConversion>,
    /// Method 2 breakdown
    pub deltas: Option<AgeDeltas>,
    /// Whether the lean-obesity rule turned the subject into an athlete
    pub lean_obesity_rule_applied: bool,
}

/// Obesity pre-step: BMI at the gate and body fat above the sex threshold.
///
/// Without a body-fat percentage the subject is not considered obese.
#[must_use]
pub fn is_obese(profile: &SubjectProfile, body_fat_percent: Option<f64>, config: &MetabolicAgeConfig) -> bool {
    profile.bmi() >= config.obesity_bmi
        && body_fat_percent.is_some_and(|percent| percent > config.obese_fat_threshold(profile.sex))
}

/// Whether the lean-obesity rule fires for this subject
#[must_use]
pub fn lean_obesity_applies(
    profile: &SubjectProfile,
    body_fat_percent: Option<f64>,
    config: &MetabolicAgeConfig,
) -> bool {
    let rule = &config.lean_obesity_rule;
    rule.enabled
        && !profile.athlete
        && profile.bmi() >= config.obesity_bmi
        && body_fat_percent.is_some_and(|percent| percent < rule.lean_threshold(profile.sex))
}

/// Gather the dispatch facts.
///
/// A skinfold fact holds only when the equation actually evaluates for the
/// subject (sites present, age supported, density convertible), so an
/// unusable skinfold set never shadows the known-body-fat scenarios.
#[must_use]
pub fn scenario_facts(
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
    body_fat_percent: Option<f64>,
    config: &MetabolicAgeConfig,
) -> ScenarioFacts {
    let (min_age, max_age) = config.athlete_skinfold_age;
    let obese = is_obese(profile, body_fat_percent, config);
    let durnin_womersley_conversion = if obese {
        DensityConversion::ObesityAdjusted
    } else {
        DensityConversion::Brozek
    };
    ScenarioFacts {
        athlete: profile.athlete || lean_obesity_applies(profile, body_fat_percent, config),
        jackson_pollock_skinfolds: BodyFatAlgorithm::JacksonPollock
            .estimate_with(profile, measurements, DensityConversion::Siri)
            .is_ok(),
        athlete_skinfold_age: (min_age..=max_age).contains(&profile.age),
        durnin_womersley_skinfolds: BodyFatAlgorithm::DurninWomersley
            .estimate_with(profile, measurements, durnin_womersley_conversion)
            .is_ok(),
        known_body_fat: measurements.known_body_fat_percent.is_some(),
        obese,
        waist: measurements.circumferences.waist.is_some(),
    }
}

/// Estimate the metabolic age
///
/// # Errors
///
/// Returns `NoApplicableScenario` when no scenario matches, or the formula
/// error when the selected scenario cannot evaluate its body fat
pub fn estimate_metabolic_age(
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
    composition: Option<&Composition>,
    config: &MetabolicAgeConfig,
) -> AppResult<MetabolicResult> {
    let composition_fat = composition.map(|composition| composition.body_fat.percent);
    let lean_obesity_rule_applied = lean_obesity_applies(profile, composition_fat, config);
    if lean_obesity_rule_applied {
        info!(
            bmi = profile.bmi(),
            body_fat = composition_fat,
            "Lean-obesity rule applied, using athlete scenarios"
        );
    }
    let profile = profile.with_athlete(profile.athlete || lean_obesity_rule_applied);

    let facts = scenario_facts(&profile, measurements, composition_fat, config);
    let Some(scenario) = MetabolicScenario::dispatch(&facts) else {
        return Err(AppError::no_applicable_scenario(describe_missing(&facts)));
    };
    info!(
        scenario = scenario.number(),
        method = scenario.name(),
        "Metabolic-age scenario selected"
    );

    let (body_fat_percent, conversion) = match scenario {
        MetabolicScenario::AthleteSkinfolds => (
            skinfold_body_fat(BodyFatAlgorithm::JacksonPollock, &profile, measurements, DensityConversion::Siri)?,
            Some(DensityConversion::Siri),
        ),
        MetabolicScenario::Skinfolds => (
            skinfold_body_fat(BodyFatAlgorithm::DurninWomersley, &profile, measurements, DensityConversion::Brozek)?,
            Some(DensityConversion::Brozek),
        ),
        MetabolicScenario::ObeseSkinfolds => (
            skinfold_body_fat(
                BodyFatAlgorithm::DurninWomersley,
                &profile,
                measurements,
                DensityConversion::ObesityAdjusted,
            )?,
            Some(DensityConversion::ObesityAdjusted),
        ),
        MetabolicScenario::AthleteKnownBodyFat
        | MetabolicScenario::KnownBodyFat
        | MetabolicScenario::ObeseKnownBodyFat => (known_body_fat(measurements)?, None),
    };

    let lean_mass_kg = profile.weight_kg * (1.0 - body_fat_percent / 100.0);
    let bmr = calculate_katch_mcardle(lean_mass_kg);

    let (metabolic_age, deltas) = match scenario.method() {
        MetabolicMethod::InverseHarrisBenedict => (
            harris_benedict_age_for_bmr(profile.sex, profile.weight_kg, profile.height_cm, bmr),
            None,
        ),
        MetabolicMethod::AgeAdjustment => {
            let deltas = age_deltas(&profile, measurements, bmr, config);
            (
                profile.age + deltas.bmr + deltas.waist + deltas.activity,
                Some(deltas),
            )
        }
    };

    if !metabolic_age.is_finite() {
        return Err(AppError::degenerate("metabolic age is not a finite number"));
    }
    debug!(metabolic_age, bmr, body_fat_percent, "Metabolic age computed");

    Ok(MetabolicResult {
        scenario,
        metabolic_age,
        bmr,
        body_fat_percent,
        conversion,
        deltas,
        lean_obesity_rule_applied,
    })
}

fn skinfold_body_fat(
    algorithm: BodyFatAlgorithm,
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
    conversion: DensityConversion,
) -> AppResult<f64> {
    Ok(algorithm
        .estimate_with(profile, measurements, conversion)?
        .percent)
}

fn known_body_fat(measurements: &MeasurementSet) -> AppResult<f64> {
    measurements
        .known_body_fat_percent
        .ok_or_else(|| AppError::missing_measurement("metabolic age", "known_body_fat_percent"))
}

/// Method 2 deltas for a Katch-McArdle BMR
#[must_use]
pub fn age_deltas(
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
    bmr: f64,
    config: &MetabolicAgeConfig,
) -> AgeDeltas {
    let expected = calculate_harris_benedict(profile.sex, profile.weight_kg, profile.height_cm, profile.age);
    AgeDeltas {
        bmr: (expected - bmr) / config.bmr_delta_divisor,
        waist: measurements
            .circumferences
            .waist
            .map_or(0.0, |waist| waist_delta(profile, waist, &config.waist)),
        activity: profile
            .activity_level
            .map_or(0.0, |level| config.activity_deltas.for_level(level)),
    }
}

/// Waist term: zero up to the sex threshold, then scaled by WHtR and age, capped
#[must_use]
pub fn waist_delta(profile: &SubjectProfile, waist_cm: f64, config: &WaistDeltaConfig) -> f64 {
    let threshold = config.threshold(profile.sex);
    if waist_cm < threshold {
        return 0.0;
    }
    let whtr = waist_cm / profile.height_cm;
    let whtr_factor = (whtr / config.reference_whtr).max(1.0);
    let age_factor = config
        .age_acceleration
        .mul_add((profile.age - config.age_acceleration_from).max(0.0), 1.0);
    (config.years_per_cm * (waist_cm - threshold) * whtr_factor * age_factor).min(config.cap_years)
}

fn describe_missing(facts: &ScenarioFacts) -> String {
    if facts.athlete {
        "athlete metabolic age needs triceps, subscapular and suprailiac skinfolds (ages 18-61) or a known body-fat percentage".into()
    } else if facts.known_body_fat && !facts.waist {
        "metabolic age from a known body-fat percentage also needs the waist circumference".into()
    } else {
        "metabolic age needs triceps, subscapular, suprailiac and biceps skinfolds, or a known body-fat percentage with waist circumference".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::Sex;

    fn profile(age: f64) -> SubjectProfile {
        SubjectProfile {
            sex: Sex::Male,
            age,
            weight_kg: 80.0,
            height_cm: 175.0,
            athlete: false,
            activity_level: None,
        }
    }

    #[test]
    fn test_waist_delta_zero_below_threshold() {
        let config = WaistDeltaConfig::default();
        assert!(waist_delta(&profile(40.0), 93.9, &config).abs() < f64::EPSILON);
    }

    #[test]
    fn test_waist_delta_scales_and_caps() {
        let config = WaistDeltaConfig::default();
        // 104 cm on 175 cm: WHtR 0.594 -> factor 1.189
        let delta = waist_delta(&profile(40.0), 104.0, &config);
        assert!((delta - 0.2 * 10.0 * (104.0 / 175.0 / 0.5)).abs() < 1e-9);
        let capped = waist_delta(&profile(70.0), 160.0, &config);
        assert!((capped - config.cap_years).abs() < f64::EPSILON);
    }

    #[test]
    fn test_age_acceleration_after_fifty() {
        let config = WaistDeltaConfig::default();
        let at_fifty = waist_delta(&profile(50.0), 100.0, &config);
        let at_sixty = waist_delta(&profile(60.0), 100.0, &config);
        assert!((at_sixty / at_fifty - 1.1).abs() < 1e-9);
    }
}

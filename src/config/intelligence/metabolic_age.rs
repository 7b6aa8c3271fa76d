// ABOUTME: Metabolic-age configuration: obesity gates, lean-obesity rule and Method 2 deltas
// ABOUTME: Waist, activity and BMR adjustment parameters for the scenario engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metabolic-Age Configuration
//!
//! # Scientific References
//!
//! - Katch-McArdle BMR: `McArdle`, Katch & Katch (2010) Exercise Physiology
//! - Harris-Benedict revised: Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
//! - Waist thresholds: IDF Consensus Worldwide Definition of the Metabolic Syndrome (2006)

use nutriplan_core::models::{ActivityLevel, Sex};
use serde::{Deserialize, Serialize};

/// Parameters of the metabolic-age scenario engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetabolicAgeConfig {
    /// BMI from which a subject can be considered obese: 30
    pub obesity_bmi: f64,
    /// Body-fat % above which an obese-BMI male is obese: 25
    pub obese_fat_male: f64,
    /// Body-fat % above which an obese-BMI female is obese: 32
    pub obese_fat_female: f64,
    /// Bodybuilder heuristic forcing the athlete path
    pub lean_obesity_rule: LeanObesityRule,
    /// Age window for the athlete skinfold scenario (inclusive): 18-61
    pub athlete_skinfold_age: (f64, f64),
    /// Waist adjustment parameters
    pub waist: WaistDeltaConfig,
    /// Divisor turning a BMR gap (kcal) into years: 15
    pub bmr_delta_divisor: f64,
    /// Years added per activity level
    pub activity_deltas: ActivityDeltas,
}

/// Heavy but lean subjects (BMI over the obesity gate with low body fat)
/// are re-routed to the athlete scenarios.
///
/// The thresholds are a judgment call pending domain-expert review; set
/// `enabled` to false to keep the declared athlete flag untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeanObesityRule {
    /// Whether the rule is applied
    pub enabled: bool,
    /// Male body-fat % below which the rule fires: 18
    pub lean_fat_male: f64,
    /// Female body-fat % below which the rule fires: 25
    pub lean_fat_female: f64,
}

/// Waist term of Method 2
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaistDeltaConfig {
    /// Male waist threshold (cm): 94
    pub threshold_male_cm: f64,
    /// Female waist threshold (cm): 80
    pub threshold_female_cm: f64,
    /// Years per cm over the threshold: 0.2
    pub years_per_cm: f64,
    /// Waist-to-height ratio reference: 0.5
    pub reference_whtr: f64,
    /// Extra fraction per year over `age_acceleration_from`: 0.01
    pub age_acceleration: f64,
    /// Age from which the waist term accelerates: 50
    pub age_acceleration_from: f64,
    /// Cap on the waist term (years): 10
    pub cap_years: f64,
}

/// Activity term of Method 2 (years)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDeltas {
    /// +3
    pub sedentary: f64,
    /// +1
    pub light: f64,
    /// -1
    pub moderate: f64,
    /// -4
    pub intense: f64,
    /// -5
    pub athlete: f64,
}

impl ActivityDeltas {
    /// Delta for a level
    #[must_use]
    pub const fn for_level(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Intense => self.intense,
            ActivityLevel::Athlete => self.athlete,
        }
    }
}

impl MetabolicAgeConfig {
    /// Body-fat % obesity threshold for a sex
    #[must_use]
    pub const fn obese_fat_threshold(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.obese_fat_male,
            Sex::Female => self.obese_fat_female,
        }
    }
}

impl LeanObesityRule {
    /// Body-fat % below which the rule fires for a sex
    #[must_use]
    pub const fn lean_threshold(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.lean_fat_male,
            Sex::Female => self.lean_fat_female,
        }
    }
}

impl WaistDeltaConfig {
    /// Waist threshold for a sex (cm)
    #[must_use]
    pub const fn threshold(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.threshold_male_cm,
            Sex::Female => self.threshold_female_cm,
        }
    }
}

impl Default for MetabolicAgeConfig {
    fn default() -> Self {
        Self {
            obesity_bmi: 30.0,
            obese_fat_male: 25.0,
            obese_fat_female: 32.0,
            lean_obesity_rule: LeanObesityRule::default(),
            athlete_skinfold_age: (18.0, 61.0),
            waist: WaistDeltaConfig::default(),
            bmr_delta_divisor: 15.0,
            activity_deltas: ActivityDeltas::default(),
        }
    }
}

impl Default for LeanObesityRule {
    fn default() -> Self {
        Self {
            enabled: true,
            lean_fat_male: 18.0,
            lean_fat_female: 25.0,
        }
    }
}

impl Default for WaistDeltaConfig {
    fn default() -> Self {
        Self {
            threshold_male_cm: 94.0,
            threshold_female_cm: 80.0,
            years_per_cm: 0.2,
            reference_whtr: 0.5,
            age_acceleration: 0.01,
            age_acceleration_from: 50.0,
            cap_years: 10.0,
        }
    }
}

impl Default for ActivityDeltas {
    fn default() -> Self {
        Self {
            sedentary: 3.0,
            light: 1.0,
            moderate: -1.0,
            intense: -4.0,
            athlete: -5.0,
        }
    }
}

// ABOUTME: Reference-range classification of computed metrics into labelled risk tiers
// ABOUTME: Band lookups over sex, age band and activity tables defined as constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classification against reference tables.
//!
//! A table is an ordered list of [`Band`]s; a value falls in the first band whose
//! exclusive `upper` bound it is below. The last band of every table is open
//! ended. Tables are `const` data in
//! [`physiological_constants`](super::physiological_constants) and are shared by
//! every request without synchronisation.

use super::physiological_constants::reference_ranges;
use nutriplan_core::models::{Sex, SubjectProfile};
use serde::Serialize;

/// Health risk attached to a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No elevated risk
    Low,
    /// Borderline, worth monitoring
    Moderate,
    /// Elevated risk
    High,
}

/// Label and risk for one classified value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Human-readable reference category
    pub label: &'static str,
    /// Associated risk tier
    pub risk: RiskLevel,
}

/// One row of a reference table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Exclusive upper bound of the band
    pub upper: f64,
    /// Category name
    pub label: &'static str,
    /// Risk for values in this band
    pub risk: RiskLevel,
}

impl Band {
    /// Build a band row
    #[must_use]
    pub const fn new(upper: f64, label: &'static str, risk: RiskLevel) -> Self {
        Self { upper, label, risk }
    }

    /// Open-ended final row
    #[must_use]
    pub const fn open(label: &'static str, risk: RiskLevel) -> Self {
        Self::new(f64::INFINITY, label, risk)
    }

    /// Classification carried by this band
    #[must_use]
    pub const fn classification(&self) -> Classification {
        Classification {
            label: self.label,
            risk: self.risk,
        }
    }
}

/// Age bands shared by the risk tables (18-39, 40-59, 60+).
///
/// Minors are classified with the youngest band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Up to 39 years
    Young,
    /// 40 to 59 years
    Middle,
    /// 60 years and older
    Senior,
}

impl AgeBand {
    /// Band for an age in years
    #[must_use]
    pub fn from_age(age: f64) -> Self {
        if age >= 60.0 {
            Self::Senior
        } else if age >= 40.0 {
            Self::Middle
        } else {
            Self::Young
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Young => 0,
            Self::Middle => 1,
            Self::Senior => 2,
        }
    }
}

/// Table keyed by sex
#[derive(Debug, Clone, Copy)]
pub struct SexTable<const N: usize> {
    /// Male rows
    pub male: [Band; N],
    /// Female rows
    pub female: [Band; N],
}

impl<const N: usize> SexTable<N> {
    /// Rows for a sex
    #[must_use]
    pub const fn rows(&self, sex: Sex) -> &[Band; N] {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }

    /// Classify a value for a sex
    #[must_use]
    pub fn classify(&self, sex: Sex, value: f64) -> Option<Classification> {
        classify(value, self.rows(sex))
    }
}

/// Table keyed by sex and [`AgeBand`]
#[derive(Debug, Clone, Copy)]
pub struct SexAgeTable<const N: usize> {
    /// Male rows per age band
    pub male: [[Band; N]; 3],
    /// Female rows per age band
    pub female: [[Band; N]; 3],
}

impl<const N: usize> SexAgeTable<N> {
    /// Rows for a sex and age band
    #[must_use]
    pub const fn rows(&self, sex: Sex, band: AgeBand) -> &[Band; N] {
        match sex {
            Sex::Male => &self.male[band.index()],
            Sex::Female => &self.female[band.index()],
        }
    }

    /// Classify a value for a sex and age
    #[must_use]
    pub fn classify(&self, sex: Sex, age: f64, value: f64) -> Option<Classification> {
        classify(value, self.rows(sex, AgeBand::from_age(age)))
    }
}

/// Classify a value against ordered bands.
///
/// Returns `None` for non-finite values or an empty table.
#[must_use]
pub fn classify(value: f64, bands: &[Band]) -> Option<Classification> {
    if !value.is_finite() {
        return None;
    }
    bands
        .iter()
        .find(|band| value < band.upper)
        .map(Band::classification)
}

/// BMI against the WHO adult categories
#[must_use]
pub fn classify_bmi(bmi: f64) -> Option<Classification> {
    classify(bmi, &reference_ranges::BMI)
}

/// Waist-hip ratio against WHO sex-specific cutoffs
#[must_use]
pub fn classify_waist_hip_ratio(sex: Sex, ratio: f64) -> Option<Classification> {
    reference_ranges::WAIST_HIP_RATIO.classify(sex, ratio)
}

/// Body-fat percentage against the table matching the subject's age and activity
#[must_use]
pub fn classify_body_fat(profile: &SubjectProfile, percent: f64) -> Option<Classification> {
    if profile.is_pediatric() {
        reference_ranges::BODY_FAT_PEDIATRIC.classify(profile.sex, percent)
    } else if profile.athlete {
        reference_ranges::BODY_FAT_ATHLETE.classify(profile.sex, percent)
    } else {
        reference_ranges::BODY_FAT_GENERAL.classify(profile.sex, profile.age, percent)
    }
}

/// Metabolic age relative to chronological age
#[must_use]
pub fn classify_metabolic_age(metabolic_age: f64, age: f64) -> Option<Classification> {
    classify(metabolic_age - age, &reference_ranges::METABOLIC_AGE_GAP)
}

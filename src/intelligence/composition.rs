// ABOUTME: Fat and lean mass derivation from the single body-fat percentage
// ABOUTME: FFMI/FMI bucketing and the 3x3 body-typology table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Composition Derivation
//!
//! Everything downstream of the body-fat selector reads from one
//! [`Composition`], so fat mass and lean mass always add up to body weight.
//!
//! # Scientific References
//!
//! - Kyle, U.G. et al. (2003). "Body composition interpretation: contributions of the fat-free mass index and the body fat mass index." *Nutrition*, 19(7-8), 597-604.
//! - `VanItallie`, T.B. et al. (1990). "Height-normalized indices of the body's fat-free mass and fat mass." *Am J Clin Nutr*, 52(6), 953-959.

use super::classification::{Classification, RiskLevel};
use super::method_selector::BodyFat;
use super::physiological_constants::composition::{FFMI_FEMALE, FFMI_MALE, FMI_FEMALE, FMI_MALE};
use super::physiological_constants::reference_ranges::{FFMI_LABELS, FMI_LABELS};
use nutriplan_core::models::{Sex, SubjectProfile};
use serde::Serialize;

/// Position of an index against its two sex-specific thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexBucket {
    /// Below the lower threshold
    Low,
    /// Between the thresholds, inclusive
    Medium,
    /// Above the upper threshold
    High,
}

impl IndexBucket {
    /// Bucket a value against `(lower, upper)`
    #[must_use]
    pub fn from_thresholds(value: f64, (lower, upper): (f64, f64)) -> Self {
        if value < lower {
            Self::Low
        } else if value > upper {
            Self::High
        } else {
            Self::Medium
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

/// Body typology from the FFMI x FMI grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Typology {
    /// Low lean, low fat
    #[serde(rename = "Ectomorfo")]
    Ectomorph,
    /// Low lean, medium fat
    #[serde(rename = "Delgado con adiposidad")]
    SkinnyFat,
    /// Low lean, high fat
    #[serde(rename = "Obeso sarcopénico")]
    SarcopenicObese,
    /// Medium lean, low fat
    #[serde(rename = "Atlético delgado")]
    LeanAthletic,
    /// Medium lean, medium fat
    #[serde(rename = "Balanceado")]
    Balanced,
    /// Medium lean, high fat
    #[serde(rename = "Sobrepeso adiposo")]
    AdiposeOverweight,
    /// High lean, low fat
    #[serde(rename = "Mesomorfo puro")]
    PureMesomorph,
    /// High lean, medium fat
    #[serde(rename = "Mesomorfo robusto")]
    RobustMesomorph,
    /// High lean, high fat
    #[serde(rename = "Endomesomorfo")]
    Endomesomorph,
    /// Body-fat percentage unavailable
    #[serde(rename = "Indefinido")]
    Undefined,
}

/// Rows are FFMI buckets, columns FMI buckets
const TYPOLOGY_GRID: [[Typology; 3]; 3] = [
    [
        Typology::Ectomorph,
        Typology::SkinnyFat,
        Typology::SarcopenicObese,
    ],
    [
        Typology::LeanAthletic,
        Typology::Balanced,
        Typology::AdiposeOverweight,
    ],
    [
        Typology::PureMesomorph,
        Typology::RobustMesomorph,
        Typology::Endomesomorph,
    ],
];

impl Typology {
    /// Look up the grid
    #[must_use]
    pub const fn from_buckets(ffmi: IndexBucket, fmi: IndexBucket) -> Self {
        TYPOLOGY_GRID[ffmi.index()][fmi.index()]
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ectomorph => "Ectomorfo",
            Self::SkinnyFat => "Delgado con adiposidad",
            Self::SarcopenicObese => "Obeso sarcopénico",
            Self::LeanAthletic => "Atlético delgado",
            Self::Balanced => "Balanceado",
            Self::AdiposeOverweight => "Sobrepeso adiposo",
            Self::PureMesomorph => "Mesomorfo puro",
            Self::RobustMesomorph => "Mesomorfo robusto",
            Self::Endomesomorph => "Endomesomorfo",
            Self::Undefined => "Indefinido",
        }
    }
}

/// Masses and indices derived from the body-fat percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Composition {
    /// Source-of-truth body fat
    pub body_fat: BodyFat,
    /// Fat mass (kg)
    pub fat_mass_kg: f64,
    /// Lean (fat-free) mass (kg)
    pub lean_mass_kg: f64,
    /// Fat-free mass index (kg/m²)
    pub ffmi: f64,
    /// Fat mass index (kg/m²)
    pub fmi: f64,
    /// FFMI bucket
    pub ffmi_bucket: IndexBucket,
    /// FMI bucket
    pub fmi_bucket: IndexBucket,
    /// Typology from the two buckets
    pub typology: Typology,
}

impl Composition {
    /// Derive masses, indices and typology
    #[must_use]
    pub fn derive(profile: &SubjectProfile, body_fat: BodyFat) -> Self {
        let fat_mass_kg = body_fat.percent / 100.0 * profile.weight_kg;
        let lean_mass_kg = profile.weight_kg - fat_mass_kg;
        let height_m = profile.height_m();
        let height_sq = height_m * height_m;
        let ffmi = lean_mass_kg / height_sq;
        let fmi = fat_mass_kg / height_sq;
        let (ffmi_thresholds, fmi_thresholds) = match profile.sex {
            Sex::Male => (FFMI_MALE, FMI_MALE),
            Sex::Female => (FFMI_FEMALE, FMI_FEMALE),
        };
        let ffmi_bucket = IndexBucket::from_thresholds(ffmi, ffmi_thresholds);
        let fmi_bucket = IndexBucket::from_thresholds(fmi, fmi_thresholds);

        Self {
            body_fat,
            fat_mass_kg,
            lean_mass_kg,
            ffmi,
            fmi,
            ffmi_bucket,
            fmi_bucket,
            typology: Typology::from_buckets(ffmi_bucket, fmi_bucket),
        }
    }

    /// FFMI bucket as a labelled classification
    #[must_use]
    pub const fn ffmi_classification(&self) -> Classification {
        let risk = match self.ffmi_bucket {
            IndexBucket::Low => RiskLevel::Moderate,
            IndexBucket::Medium | IndexBucket::High => RiskLevel::Low,
        };
        Classification {
            label: FFMI_LABELS[self.ffmi_bucket.index()],
            risk,
        }
    }

    /// FMI bucket as a labelled classification
    #[must_use]
    pub const fn fmi_classification(&self) -> Classification {
        let risk = match self.fmi_bucket {
            IndexBucket::Low | IndexBucket::Medium => RiskLevel::Low,
            IndexBucket::High => RiskLevel::High,
        };
        Classification {
            label: FMI_LABELS[self.fmi_bucket.index()],
            risk,
        }
    }
}

/// Typology of an optional composition, `Undefined` without one
#[must_use]
pub fn typology_of(composition: Option<&Composition>) -> Typology {
    composition.map_or(Typology::Undefined, |composition| composition.typology)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries_are_medium() {
        assert_eq!(IndexBucket::from_thresholds(18.0, FFMI_MALE), IndexBucket::Medium);
        assert_eq!(IndexBucket::from_thresholds(20.0, FFMI_MALE), IndexBucket::Medium);
        assert_eq!(IndexBucket::from_thresholds(17.99, FFMI_MALE), IndexBucket::Low);
        assert_eq!(IndexBucket::from_thresholds(20.01, FFMI_MALE), IndexBucket::High);
    }

    #[test]
    fn test_grid_corners() {
        assert_eq!(
            Typology::from_buckets(IndexBucket::Low, IndexBucket::Low),
            Typology::Ectomorph
        );
        assert_eq!(
            Typology::from_buckets(IndexBucket::High, IndexBucket::High),
            Typology::Endomesomorph
        );
        assert_eq!(
            Typology::from_buckets(IndexBucket::Low, IndexBucket::High).label(),
            "Obeso sarcopénico"
        );
    }
}

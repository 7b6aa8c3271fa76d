// ABOUTME: Heath-Carter anthropometric somatotype from skinfolds, girths and bone breadths
// ABOUTME: Endomorphy, mesomorphy and ectomorphy ratings with somatochart coordinates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Somatotype Engine
//!
//! All three components need the full measurement set; a single missing
//! site leaves the whole triple uncomputed.
//!
//! # Scientific References
//!
//! - Carter, J.E.L. & Heath, B.H. (1990). *Somatotyping: Development and Applications*. Cambridge University Press.

use super::physiological_constants::somatotype::{
    ECTOMORPHY_LOWER_HWR, ECTOMORPHY_SHALLOW, ECTOMORPHY_STEEP, ECTOMORPHY_UPPER_HWR, ENDOMORPHY,
    ENDOMORPHY_REFERENCE_HEIGHT, MESOMORPHY, MESOMORPHY_SCALE, MIN_RATING,
};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{MeasurementSet, SubjectProfile};
use serde::Serialize;
use tracing::debug;

const FORMULA: &str = "heath_carter";

/// Somatotype component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SomatotypeComponent {
    /// Relative fatness
    #[serde(rename = "Endomorfo")]
    Endomorphy,
    /// Relative musculoskeletal robustness
    #[serde(rename = "Mesomorfo")]
    Mesomorphy,
    /// Relative linearity
    #[serde(rename = "Ectomorfo")]
    Ectomorphy,
}

impl SomatotypeComponent {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Endomorphy => "Endomorfo",
            Self::Mesomorphy => "Mesomorfo",
            Self::Ectomorphy => "Ectomorfo",
        }
    }
}

/// Heath-Carter ratings
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Somatotype {
    /// Endomorphy rating (>= 0.1)
    pub endomorphy: f64,
    /// Mesomorphy rating (>= 0.1)
    pub mesomorphy: f64,
    /// Ectomorphy rating (>= 0.1)
    pub ectomorphy: f64,
}

impl Somatotype {
    /// Highest-rated component
    #[must_use]
    pub fn dominant(&self) -> SomatotypeComponent {
        if self.mesomorphy >= self.endomorphy && self.mesomorphy >= self.ectomorphy {
            SomatotypeComponent::Mesomorphy
        } else if self.endomorphy >= self.ectomorphy {
            SomatotypeComponent::Endomorphy
        } else {
            SomatotypeComponent::Ectomorphy
        }
    }

    /// Somatochart coordinates `(ecto - endo, 2·meso - endo - ecto)`
    #[must_use]
    pub fn somatochart(&self) -> (f64, f64) {
        (
            self.ectomorphy - self.endomorphy,
            2.0f64.mul_add(self.mesomorphy, -self.endomorphy) - self.ectomorphy,
        )
    }
}

/// Compute the three ratings
///
/// # Errors
///
/// Returns `MissingMeasurement` naming the first absent site
pub fn calculate_somatotype(
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
) -> AppResult<Somatotype> {
    let skinfolds = &measurements.skinfolds;
    let girths = &measurements.circumferences;
    let diameters = &measurements.diameters;

    let triceps = site("triceps_mm", skinfolds.triceps)?;
    let subscapular = site("subscapular_mm", skinfolds.subscapular)?;
    let suprailiac = site("suprailiac_mm", skinfolds.suprailiac)?;
    let calf_skinfold = site("calf_skinfold_mm", skinfolds.calf)?;
    let humerus = site("humerus_diameter_cm", diameters.humerus)?;
    let femur = site("femur_diameter_cm", diameters.femur)?;
    let arm_contracted = site("arm_contracted_cm", girths.arm_contracted)?;
    let calf_girth = site("calf_circumference_cm", girths.calf)?;

    let somatotype = Somatotype {
        endomorphy: endomorphy(triceps + subscapular + suprailiac, profile.height_cm),
        mesomorphy: mesomorphy(
            humerus,
            femur,
            arm_contracted - triceps / 10.0,
            calf_girth - calf_skinfold / 10.0,
            profile.height_m(),
        ),
        ectomorphy: ectomorphy(profile.height_cm, profile.weight_kg),
    };
    debug!(
        endomorphy = somatotype.endomorphy,
        mesomorphy = somatotype.mesomorphy,
        ectomorphy = somatotype.ectomorphy,
        "Somatotype computed"
    );
    Ok(somatotype)
}

fn site(field: &str, value: Option<f64>) -> AppResult<f64> {
    value.ok_or_else(|| AppError::missing_measurement(FORMULA, field))
}

/// Endomorphy from the three-site skinfold sum (mm) corrected to 170.18 cm
#[must_use]
pub fn endomorphy(skinfold_sum_mm: f64, height_cm: f64) -> f64 {
    let x = skinfold_sum_mm * ENDOMORPHY_REFERENCE_HEIGHT / height_cm;
    let [intercept, linear, quadratic, cubic] = ENDOMORPHY;
    let rating = cubic
        .mul_add(x, quadratic)
        .mul_add(x, linear)
        .mul_add(x, intercept);
    rating.max(MIN_RATING)
}

/// Mesomorphy from breadths (cm), skinfold-corrected girths (cm) and height (m)
#[must_use]
pub fn mesomorphy(
    humerus_cm: f64,
    femur_cm: f64,
    corrected_arm_cm: f64,
    corrected_calf_cm: f64,
    height_m: f64,
) -> f64 {
    let [humerus_coef, femur_coef, arm_coef, calf_coef, height_coef, constant] = MESOMORPHY;
    let raw = humerus_coef * humerus_cm
        + femur_coef * femur_cm
        + arm_coef * corrected_arm_cm
        + calf_coef * corrected_calf_cm
        + height_coef * height_m
        + constant;
    (raw / MESOMORPHY_SCALE).max(MIN_RATING)
}

/// Ectomorphy from the height-weight ratio
#[must_use]
pub fn ectomorphy(height_cm: f64, weight_kg: f64) -> f64 {
    let hwr = height_cm / weight_kg.cbrt();
    let rating = if hwr > ECTOMORPHY_UPPER_HWR {
        let (slope, intercept) = ECTOMORPHY_STEEP;
        slope.mul_add(hwr, -intercept)
    } else if hwr >= ECTOMORPHY_LOWER_HWR {
        let (slope, intercept) = ECTOMORPHY_SHALLOW;
        slope.mul_add(hwr, -intercept)
    } else {
        MIN_RATING
    };
    rating.max(MIN_RATING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ectomorphy_branches() {
        // 180 cm, 60 kg: HWR = 180 / 3.915 = 45.98
        let lean = ectomorphy(180.0, 60.0);
        assert!((lean - (0.732 * (180.0 / 60.0f64.cbrt()) - 28.58)).abs() < 1e-9);
        // 170 cm, 100 kg: HWR = 36.6, below both lines
        assert!((ectomorphy(170.0, 100.0) - MIN_RATING).abs() < f64::EPSILON);
    }

    #[test]
    fn test_endomorphy_floor() {
        assert!((endomorphy(1.0, 170.18) - MIN_RATING).abs() < f64::EPSILON);
    }

    #[test]
    fn test_somatochart() {
        let somatotype = Somatotype {
            endomorphy: 3.0,
            mesomorphy: 5.0,
            ectomorphy: 2.0,
        };
        assert_eq!(somatotype.somatochart(), (-1.0, 5.0));
        assert_eq!(somatotype.dominant(), SomatotypeComponent::Mesomorphy);
    }
}

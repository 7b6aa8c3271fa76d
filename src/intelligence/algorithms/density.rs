// ABOUTME: Two-compartment conversions from body density to body-fat percentage
// ABOUTME: Implements Siri, Brozek and an obesity-adjusted constant with range checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::physiological_constants::body_fat::{BROZEK, OBESITY_ADJUSTED, SIRI};
use nutriplan_core::errors::AppError;
use serde::{Deserialize, Serialize};

/// Density-to-fat conversion
///
/// All three are of the form `%fat = a/d - b`:
///
/// - `Siri`: 495/d - 450, default for every body-fat estimate
/// - `Brozek`: 457/d - 414.2, used by non-obese Method 2 metabolic age
/// - `ObesityAdjusted`: 498/d - 451, used by obese Method 2 metabolic age
///
/// # Scientific References
///
/// - Siri, W.E. (1961). "Body composition from fluid spaces and density." *Techniques for Measuring Body Composition*, 223-244.
/// - Brozek, J. et al. (1963). "Densitometric analysis of body composition." *Ann N Y Acad Sci*, 110, 113-140.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DensityConversion {
    /// Siri (1961)
    #[default]
    Siri,
    /// Brozek et al. (1963)
    Brozek,
    /// Obesity-adjusted constant
    ObesityAdjusted,
}

impl DensityConversion {
    /// Convert a body density (g/cm³) into a body-fat percentage
    ///
    /// # Errors
    ///
    /// Returns `DegenerateResult` when the density is not positive or the
    /// resulting percentage falls outside (0, 100)
    pub fn to_body_fat(self, density: f64) -> Result<f64, AppError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(AppError::degenerate(format!(
                "Body density must be positive, got {density}"
            )));
        }
        let (numerator, offset) = self.coefficients();
        let percent = numerator / density - offset;
        if !percent.is_finite() || percent <= 0.0 || percent >= 100.0 {
            return Err(AppError::degenerate(format!(
                "{} conversion of density {density:.4} gives {percent:.2}% body fat",
                self.name()
            )));
        }
        Ok(percent)
    }

    const fn coefficients(self) -> (f64, f64) {
        match self {
            Self::Siri => SIRI,
            Self::Brozek => BROZEK,
            Self::ObesityAdjusted => OBESITY_ADJUSTED,
        }
    }

    /// Get conversion name for logging and output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Siri => "siri",
            Self::Brozek => "brozek",
            Self::ObesityAdjusted => "obesity_adjusted",
        }
    }
}

// ABOUTME: Body-fat method selection by age bracket, athletic status and available data
// ABOUTME: Priority chain with circumference fallback plus advisory alternative estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Body-Fat Method Selector
//!
//! First admissible method wins:
//!
//! 1. A known body-fat percentage
//! 2. Under 6 years: unsupported
//! 3. 6 to 17 years: Slaughter (no fallback)
//! 4. Adult athlete: Jackson-Pollock, else circumference
//! 5. Adult non-athlete: Durnin-Womersley, else circumference
//!
//! Every other adult estimator that can run is reported as an alternative.

use crate::intelligence::algorithms::{BodyFatAlgorithm, BodyFatEstimate};
use crate::intelligence::physiological_constants::body_fat::MIN_SUPPORTED_AGE;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{MeasurementSet, SubjectProfile};
use serde::Serialize;
use tracing::debug;

/// Most alternatives reported next to the primary estimate
pub const MAX_ALTERNATIVES: usize = 3;

const ADULT_CANDIDATES: [BodyFatAlgorithm; 4] = [
    BodyFatAlgorithm::JacksonPollock,
    BodyFatAlgorithm::DurninWomersley,
    BodyFatAlgorithm::Circumference,
    BodyFatAlgorithm::Deurenberg,
];

/// Where the primary body-fat percentage came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatSource {
    /// Supplied by the user
    Known,
    /// Estimated by a formula
    Formula(BodyFatAlgorithm),
}

impl BodyFatSource {
    /// Method name for output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Known => "known",
            Self::Formula(algorithm) => algorithm.name(),
        }
    }

    const fn algorithm(self) -> Option<BodyFatAlgorithm> {
        match self {
            Self::Known => None,
            Self::Formula(algorithm) => Some(algorithm),
        }
    }
}

/// Single source-of-truth body-fat percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFat {
    /// Body fat (% of weight)
    pub percent: f64,
    /// Method that produced it
    pub source: BodyFatSource,
}

/// Outcome of the selector
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFatSelection {
    /// Primary estimate or the reason it could not be computed
    pub primary: AppResult<BodyFat>,
    /// Advisory estimates from other admissible methods
    pub alternatives: Vec<BodyFatEstimate>,
}

/// Run the priority chain and collect alternatives
#[must_use]
pub fn select_body_fat(profile: &SubjectProfile, measurements: &MeasurementSet) -> BodyFatSelection {
    let primary = select_primary(profile, measurements);
    let primary_algorithm = primary.as_ref().ok().and_then(|fat| fat.source.algorithm());

    let alternatives = if !profile.is_pediatric() {
        ADULT_CANDIDATES
            .iter()
            .filter(|algorithm| Some(**algorithm) != primary_algorithm)
            .filter_map(|algorithm| algorithm.estimate(profile, measurements).ok())
            .take(MAX_ALTERNATIVES)
            .collect()
    } else {
        Vec::new()
    };

    BodyFatSelection {
        primary,
        alternatives,
    }
}

/// Primary body-fat percentage only
///
/// # Errors
///
/// Returns `UnsupportedAge` under 6 years and the error of the last method
/// tried when no admissible method has its measurements
pub fn select_primary(profile: &SubjectProfile, measurements: &MeasurementSet) -> AppResult<BodyFat> {
    if let Some(percent) = measurements.known_body_fat_percent {
        debug!(percent, "Using known body-fat percentage");
        return Ok(BodyFat {
            percent,
            source: BodyFatSource::Known,
        });
    }

    if profile.age < MIN_SUPPORTED_AGE {
        return Err(AppError::unsupported_age(
            profile.age,
            "no body-fat equation is validated under 6 years",
        ));
    }

    if profile.is_pediatric() {
        return estimate(BodyFatAlgorithm::Slaughter, profile, measurements);
    }

    let skinfold_method = if profile.athlete {
        BodyFatAlgorithm::JacksonPollock
    } else {
        BodyFatAlgorithm::DurninWomersley
    };

    estimate(skinfold_method, profile, measurements).or_else(|error| {
        debug!(
            method = skinfold_method.name(),
            reason = %error,
            "Skinfold method unavailable, falling back to circumference"
        );
        estimate(BodyFatAlgorithm::Circumference, profile, measurements)
    })
}

fn estimate(
    algorithm: BodyFatAlgorithm,
    profile: &SubjectProfile,
    measurements: &MeasurementSet,
) -> AppResult<BodyFat> {
    let estimate = algorithm.estimate(profile, measurements)?;
    debug!(
        method = algorithm.name(),
        percent = estimate.percent,
        "Body-fat method selected"
    );
    Ok(BodyFat {
        percent: estimate.percent,
        source: BodyFatSource::Formula(algorithm),
    })
}

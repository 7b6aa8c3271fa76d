// ABOUTME: Input validation bounds for anthropometric fields
// ABOUTME: Skinfold range, per-girth minimums, height brackets and bone unit heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation bounds applied before any formula runs.
//!
//! Reference: ISAK International Standards for Anthropometric Assessment (2011)

use nutriplan_core::models::is_pediatric_age;
use serde::{Deserialize, Serialize};

/// Physiological bounds for the raw input record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum accepted age (years)
    pub max_age_years: f64,
    /// Maximum accepted body weight (kg)
    pub max_weight_kg: f64,
    /// Pediatric height bounds (cm), ages up to `PEDIATRIC_MAX_AGE`
    pub pediatric_height_cm: (f64, f64),
    /// Adult height bounds (cm)
    pub adult_height_cm: (f64, f64),
    /// Smallest caliper reading accepted (mm)
    pub skinfold_min_mm: f64,
    /// Largest caliper reading accepted (mm)
    pub skinfold_max_mm: f64,
    /// Per-girth minimums (cm)
    pub circumference_minimums: CircumferenceMinimums,
    /// Upper bound for any girth (cm)
    pub circumference_max_cm: f64,
    /// Bone diameters above this are assumed to be millimeters
    pub bone_mm_threshold: f64,
}

/// Minimum plausible girth per site (cm)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircumferenceMinimums {
    /// Waist: 40
    pub waist: f64,
    /// Hip: 50
    pub hip: f64,
    /// Neck: 20
    pub neck: f64,
    /// Relaxed arm: 15
    pub arm: f64,
    /// Contracted arm: 15
    pub arm_contracted: f64,
    /// Calf: 20
    pub calf: f64,
}

impl Default for CircumferenceMinimums {
    fn default() -> Self {
        Self {
            waist: 40.0,
            hip: 50.0,
            neck: 20.0,
            arm: 15.0,
            arm_contracted: 15.0,
            calf: 20.0,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_age_years: 120.0,
            max_weight_kg: 400.0,
            pediatric_height_cm: (85.0, 175.0),
            adult_height_cm: (120.0, 220.0),
            skinfold_min_mm: 2.0,
            skinfold_max_mm: 50.0,
            circumference_minimums: CircumferenceMinimums::default(),
            circumference_max_cm: 250.0,
            bone_mm_threshold: 20.0,
        }
    }
}

impl ValidationConfig {
    /// Height bounds for an age
    #[must_use]
    pub fn height_bounds(&self, age: f64) -> (f64, f64) {
        if is_pediatric_age(age) {
            self.pediatric_height_cm
        } else {
            self.adult_height_cm
        }
    }
}

// ABOUTME: Flat pre-typed input record produced by the form collection layer
// ABOUTME: Every field is optional so validation can report per-field problems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Raw field map handed over by the form layer.
///
/// Values are already typed (numbers are numbers) but nothing is checked yet;
/// the validation stage turns this record into a `SubjectProfile` plus a
/// `MeasurementSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMeasurements {
    /// "male" / "female" (aliases accepted)
    pub sex: Option<String>,
    /// Age in years
    pub age: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Athlete flag, defaults to false
    pub athlete: Option<bool>,
    /// Activity level name
    pub activity_level: Option<String>,

    /// Triceps skinfold (mm)
    pub triceps_mm: Option<f64>,
    /// Subscapular skinfold (mm)
    pub subscapular_mm: Option<f64>,
    /// Suprailiac skinfold (mm)
    pub suprailiac_mm: Option<f64>,
    /// Biceps skinfold (mm)
    pub bicep_mm: Option<f64>,
    /// Calf skinfold (mm)
    pub calf_skinfold_mm: Option<f64>,
    /// Abdominal skinfold (mm)
    pub abdominal_mm: Option<f64>,

    /// Waist circumference (cm)
    pub waist_cm: Option<f64>,
    /// Hip circumference (cm)
    pub hip_cm: Option<f64>,
    /// Neck circumference (cm)
    pub neck_cm: Option<f64>,
    /// Relaxed arm circumference (cm)
    pub arm_cm: Option<f64>,
    /// Contracted arm circumference (cm)
    pub arm_contracted_cm: Option<f64>,
    /// Calf circumference (cm)
    pub calf_circumference_cm: Option<f64>,

    /// Wrist diameter (cm, mm tolerated)
    pub wrist_diameter_cm: Option<f64>,
    /// Humerus diameter (cm, mm tolerated)
    pub humerus_diameter_cm: Option<f64>,
    /// Femur diameter (cm, mm tolerated)
    pub femur_diameter_cm: Option<f64>,

    /// Body-fat percentage known from another source
    pub known_body_fat_percent: Option<f64>,
    /// Desired body-fat percentage
    pub desired_body_fat_percent: Option<f64>,
}

// ABOUTME: Optional measurement groups: skinfolds, circumferences and bone diameters
// ABOUTME: Every site is optional; formulas check the sites they need when they run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Caliper skinfolds in millimeters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Skinfolds {
    /// Triceps skinfold (mm)
    pub triceps: Option<f64>,
    /// Subscapular skinfold (mm)
    pub subscapular: Option<f64>,
    /// Suprailiac skinfold (mm)
    pub suprailiac: Option<f64>,
    /// Biceps skinfold (mm)
    pub bicep: Option<f64>,
    /// Medial calf skinfold (mm)
    pub calf: Option<f64>,
    /// Abdominal skinfold (mm)
    pub abdominal: Option<f64>,
}

/// Girths in centimeters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circumferences {
    /// Waist circumference (cm)
    pub waist: Option<f64>,
    /// Hip circumference (cm)
    pub hip: Option<f64>,
    /// Neck circumference (cm)
    pub neck: Option<f64>,
    /// Relaxed arm circumference (cm)
    pub arm: Option<f64>,
    /// Flexed and tensed arm circumference (cm)
    pub arm_contracted: Option<f64>,
    /// Maximal calf circumference (cm)
    pub calf: Option<f64>,
}

/// Bone breadths in centimeters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoneDiameters {
    /// Bistyloid wrist breadth (cm)
    pub wrist: Option<f64>,
    /// Biepicondylar humerus breadth (cm)
    pub humerus: Option<f64>,
    /// Biepicondylar femur breadth (cm)
    pub femur: Option<f64>,
}

/// Every optional measurement of a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    /// Skinfolds (mm)
    pub skinfolds: Skinfolds,
    /// Circumferences (cm)
    pub circumferences: Circumferences,
    /// Bone diameters (cm)
    pub diameters: BoneDiameters,
    /// Body-fat percentage the user already knows (e.g. from DEXA)
    pub known_body_fat_percent: Option<f64>,
    /// Target body-fat percentage for the ideal-weight estimate
    pub desired_body_fat_percent: Option<f64>,
}

// ABOUTME: Shared test utilities and measurement fixtures for integration tests
// ABOUTME: Provides quiet logging setup and representative subject records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutriplan_engine`
//!
//! Fixtures are complete records; tests knock fields out with struct update
//! syntax to reach the branch they exercise.

use nutriplan_engine::config::EngineConfig;
use nutriplan_engine::intelligence::{validate, ValidatedInput};
use nutriplan_engine::models::{MeasurementSet, RawMeasurements, Sex, SubjectProfile};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Absolute tolerance for floating-point comparisons
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// 30-year-old non-athlete man, 80 kg, 180 cm, with every site measured
pub fn adult_male() -> RawMeasurements {
    RawMeasurements {
        sex: Some("male".to_owned()),
        age: Some(30.0),
        weight_kg: Some(80.0),
        height_cm: Some(180.0),
        athlete: Some(false),
        activity_level: Some("moderate".to_owned()),
        triceps_mm: Some(12.0),
        subscapular_mm: Some(15.0),
        suprailiac_mm: Some(18.0),
        bicep_mm: Some(6.0),
        calf_skinfold_mm: Some(10.0),
        abdominal_mm: Some(20.0),
        waist_cm: Some(85.0),
        hip_cm: Some(95.0),
        neck_cm: Some(38.0),
        arm_cm: Some(31.0),
        arm_contracted_cm: Some(34.0),
        calf_circumference_cm: Some(37.0),
        wrist_diameter_cm: Some(5.8),
        humerus_diameter_cm: Some(7.0),
        femur_diameter_cm: Some(9.8),
        known_body_fat_percent: None,
        desired_body_fat_percent: None,
    }
}

/// 25-year-old non-athlete woman, 60 kg, 165 cm, with every site measured
pub fn adult_female() -> RawMeasurements {
    RawMeasurements {
        sex: Some("female".to_owned()),
        age: Some(25.0),
        weight_kg: Some(60.0),
        height_cm: Some(165.0),
        athlete: Some(false),
        activity_level: Some("light".to_owned()),
        triceps_mm: Some(18.0),
        subscapular_mm: Some(14.0),
        suprailiac_mm: Some(16.0),
        bicep_mm: Some(8.0),
        calf_skinfold_mm: Some(15.0),
        abdominal_mm: Some(22.0),
        waist_cm: Some(70.0),
        hip_cm: Some(96.0),
        neck_cm: Some(32.0),
        arm_cm: Some(27.0),
        arm_contracted_cm: Some(28.5),
        calf_circumference_cm: Some(35.0),
        wrist_diameter_cm: Some(5.0),
        humerus_diameter_cm: Some(6.0),
        femur_diameter_cm: Some(8.8),
        known_body_fat_percent: None,
        desired_body_fat_percent: None,
    }
}

/// 28-year-old male athlete with the Jackson-Pollock sites and an abdominal skinfold
pub fn male_athlete() -> RawMeasurements {
    RawMeasurements {
        sex: Some("male".to_owned()),
        age: Some(28.0),
        weight_kg: Some(82.0),
        height_cm: Some(182.0),
        athlete: Some(true),
        activity_level: Some("athlete".to_owned()),
        triceps_mm: Some(7.0),
        subscapular_mm: Some(9.0),
        suprailiac_mm: Some(8.0),
        abdominal_mm: Some(12.0),
        waist_cm: Some(80.0),
        hip_cm: Some(96.0),
        neck_cm: Some(40.0),
        ..RawMeasurements::default()
    }
}

/// 10-year-old girl with triceps and calf skinfolds
pub fn girl() -> RawMeasurements {
    RawMeasurements {
        sex: Some("female".to_owned()),
        age: Some(10.0),
        weight_kg: Some(32.0),
        height_cm: Some(138.0),
        triceps_mm: Some(12.0),
        calf_skinfold_mm: Some(10.0),
        ..RawMeasurements::default()
    }
}

/// Only the four mandatory fields
pub fn mandatory_only(sex: &str, age: f64, weight_kg: f64, height_cm: f64) -> RawMeasurements {
    RawMeasurements {
        sex: Some(sex.to_owned()),
        age: Some(age),
        weight_kg: Some(weight_kg),
        height_cm: Some(height_cm),
        ..RawMeasurements::default()
    }
}

/// Validate a fixture with the default configuration
pub fn validated(raw: &RawMeasurements) -> ValidatedInput {
    validate(raw, &EngineConfig::default().validation).expect("fixture must validate")
}

/// Profile and measurement set of a fixture
pub fn split(raw: &RawMeasurements) -> (SubjectProfile, MeasurementSet) {
    let input = validated(raw);
    (input.profile, input.measurements)
}

/// Bare profile for formula-level tests
pub fn profile(sex: Sex, age: f64, weight_kg: f64, height_cm: f64) -> SubjectProfile {
    SubjectProfile {
        sex,
        age,
        weight_kg,
        height_cm,
        athlete: false,
        activity_level: None,
    }
}

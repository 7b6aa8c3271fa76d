// ABOUTME: Integration tests for the visceral index and abdominal fat engines
// ABOUTME: Covers IAV versus mixed index, Method A versus Method B and the advisory area
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{adult_male, assert_close, male_athlete, split};
use nutriplan_engine::config::{AbdominalFatConfig, EngineConfig};
use nutriplan_engine::errors::ErrorCode;
use nutriplan_engine::intelligence::visceral_fat::{
    calculate_abdominal_fat, calculate_visceral_index, waist_to_height_ratio, AbdominalFatMethod,
    VisceralIndexKind,
};
use nutriplan_engine::intelligence::RiskLevel;
use nutriplan_engine::models::RawMeasurements;

const ADULT_MALE_FAT: f64 = 21.739_388;
const ATHLETE_FAT: f64 = 9.465_618;

fn abdominal_config() -> AbdominalFatConfig {
    EngineConfig::default().abdominal_fat
}

// === Visceral index ===

#[test]
fn test_non_athlete_gets_waist_to_height() {
    let (profile, measurements) = split(&adult_male());
    let index = calculate_visceral_index(&profile, &measurements, Some(ADULT_MALE_FAT)).unwrap();
    assert_eq!(index.kind, VisceralIndexKind::WaistToHeight);
    // 85 / 180 = 0.472 rounded to 0.47
    assert_close(index.value, 0.47, 1e-12);
    assert_eq!(index.classification.unwrap().risk, RiskLevel::Low);
}

#[test]
fn test_athlete_with_body_fat_gets_mixed_index() {
    let (profile, measurements) = split(&male_athlete());
    let index = calculate_visceral_index(&profile, &measurements, Some(ATHLETE_FAT)).unwrap();
    assert_eq!(index.kind, VisceralIndexKind::Mixed);
    // 0.4 x 0.0947 + 0.6 x 0.44
    assert_close(index.value, 0.301_862, 1e-5);
    assert_eq!(index.classification.unwrap().label, "Low risk");
}

#[test]
fn test_athlete_without_body_fat_falls_back_to_iav() {
    let (profile, measurements) = split(&male_athlete());
    let index = calculate_visceral_index(&profile, &measurements, None).unwrap();
    assert_eq!(index.kind, VisceralIndexKind::WaistToHeight);
    assert_close(index.value, 0.44, 1e-12);
}

#[test]
fn test_visceral_index_needs_waist() {
    let raw = RawMeasurements {
        waist_cm: None,
        ..adult_male()
    };
    let (profile, measurements) = split(&raw);
    let error = calculate_visceral_index(&profile, &measurements, Some(ADULT_MALE_FAT)).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingMeasurement);
    assert_eq!(error.field.as_deref(), Some("waist_cm"));
}

#[test]
fn test_high_waist_to_height_is_high_risk() {
    let raw = RawMeasurements {
        waist_cm: Some(120.0),
        weight_kg: Some(115.0),
        ..adult_male()
    };
    let (profile, measurements) = split(&raw);
    let index = calculate_visceral_index(&profile, &measurements, None).unwrap();
    assert_close(index.value, waist_to_height_ratio(120.0, 180.0), 1e-12);
    assert_eq!(index.classification.unwrap().risk, RiskLevel::High);
}

// === Abdominal fat ===

#[test]
fn test_athlete_with_abdominal_skinfold_uses_method_a() {
    let (profile, measurements) = split(&male_athlete());
    let fat = calculate_abdominal_fat(&profile, &measurements, Some(ATHLETE_FAT), &abdominal_config())
        .unwrap();
    assert_eq!(fat.method, AbdominalFatMethod::SkinfoldMethodA);
    assert_close(fat.area.value, 180.690_266, 1e-5);
    assert_close(fat.thickness.value, 2.2, 1e-9);
    assert_close(fat.mass.value, 0.365_717, 1e-5);
    assert_eq!(fat.area.classification.unwrap().label, "Low");
    assert!(fat.unscaled_area.is_none());
}

#[test]
fn test_non_athlete_uses_method_b() {
    let (profile, measurements) = split(&adult_male());
    let fat = calculate_abdominal_fat(&profile, &measurements, Some(ADULT_MALE_FAT), &abdominal_config())
        .unwrap();
    assert_eq!(fat.method, AbdominalFatMethod::BodyFatMethodB);
    assert_close(fat.area.value, 83.153_159, 1e-4);
    assert_close(fat.thickness.value, 3.423_939, 1e-5);
    assert_close(fat.mass.value, 1.956_481, 1e-5);
    assert_eq!(fat.area.classification.unwrap().label, "Moderate");

    // Advisory area is the x10 rescaling read against the Method A table
    let unscaled = fat.unscaled_area.unwrap();
    assert_close(unscaled.value, fat.area.value * 10.0, 1e-9);
    assert_eq!(unscaled.classification.unwrap().label, "High");
}

#[test]
fn test_thick_abdominal_skinfold_switches_athlete_to_method_b() {
    let raw = RawMeasurements {
        abdominal_mm: Some(45.0),
        ..male_athlete()
    };
    let (profile, measurements) = split(&raw);
    let fat = calculate_abdominal_fat(&profile, &measurements, Some(ATHLETE_FAT), &abdominal_config())
        .unwrap();
    assert_eq!(fat.method, AbdominalFatMethod::BodyFatMethodB);
}

#[test]
fn test_method_a_ceiling_is_configurable() {
    let (profile, measurements) = split(&male_athlete());
    let strict = AbdominalFatConfig {
        method_a_max_skinfold_mm: 10.0,
    };
    let fat = calculate_abdominal_fat(&profile, &measurements, Some(ATHLETE_FAT), &strict).unwrap();
    assert_eq!(fat.method, AbdominalFatMethod::BodyFatMethodB);
}

#[test]
fn test_method_b_needs_body_fat() {
    let (profile, measurements) = split(&adult_male());
    let error = calculate_abdominal_fat(&profile, &measurements, None, &abdominal_config()).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingMeasurement);
}

#[test]
fn test_thickness_and_mass_are_never_negative() {
    // Minimal waist and body fat drive the raw thickness below zero
    let raw = RawMeasurements {
        waist_cm: Some(40.0),
        ..adult_male()
    };
    let (profile, measurements) = split(&raw);
    let fat = calculate_abdominal_fat(&profile, &measurements, Some(2.0), &abdominal_config()).unwrap();
    assert!(fat.thickness.value >= 0.0);
    assert!(fat.mass.value >= 0.0);
}

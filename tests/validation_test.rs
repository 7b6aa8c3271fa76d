// ABOUTME: Integration tests for input validation and normalization
// ABOUTME: Covers fail-fast mandatory fields, dropped optional fields and bone-unit rescaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{adult_male, assert_close, girl, init_test_logging, mandatory_only, EPSILON};
use nutriplan_engine::config::ValidationConfig;
use nutriplan_engine::errors::ErrorCode;
use nutriplan_engine::intelligence::algorithms::BodyFatAlgorithm;
use nutriplan_engine::intelligence::method_selector::{select_primary, BodyFatSource};
use nutriplan_engine::intelligence::validate;
use nutriplan_engine::models::{ActivityLevel, RawMeasurements, Sex, Skinfolds};

fn config() -> ValidationConfig {
    ValidationConfig::default()
}

// === Mandatory fields ===

#[test]
fn test_complete_record_validates() {
    init_test_logging();
    let input = validate(&adult_male(), &config()).unwrap();

    assert_eq!(input.profile.sex, Sex::Male);
    assert_close(input.profile.age, 30.0, EPSILON);
    assert!(!input.profile.athlete);
    assert_eq!(input.profile.activity_level, Some(ActivityLevel::Moderate));
    assert_eq!(input.measurements.skinfolds.triceps, Some(12.0));
    assert_eq!(input.measurements.diameters.femur, Some(9.8));
    assert!(input.issues.is_empty());
    assert!(input.notes.is_empty());
}

#[test]
fn test_missing_sex_is_fatal() {
    let raw = RawMeasurements {
        sex: None,
        ..adult_male()
    };
    let error = validate(&raw, &config()).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.field.as_deref(), Some("sex"));
}

#[test]
fn test_unknown_sex_is_fatal() {
    let raw = RawMeasurements {
        sex: Some("other".to_owned()),
        ..adult_male()
    };
    let error = validate(&raw, &config()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.field.as_deref(), Some("sex"));
}

#[test]
fn test_sex_aliases_accepted() {
    for (alias, expected) in [("M", Sex::Male), ("mujer", Sex::Female), ("Female", Sex::Female)] {
        let input = validate(&mandatory_only(alias, 40.0, 70.0, 170.0), &config()).unwrap();
        assert_eq!(input.profile.sex, expected, "alias {alias}");
    }
}

#[test]
fn test_missing_weight_and_height_are_fatal() {
    let no_weight = RawMeasurements {
        weight_kg: None,
        ..adult_male()
    };
    assert_eq!(
        validate(&no_weight, &config()).unwrap_err().field.as_deref(),
        Some("weight_kg")
    );

    let no_height = RawMeasurements {
        height_cm: None,
        ..adult_male()
    };
    assert_eq!(
        validate(&no_height, &config()).unwrap_err().field.as_deref(),
        Some("height_cm")
    );
}

#[test]
fn test_non_positive_age_is_out_of_range() {
    let raw = RawMeasurements {
        age: Some(0.0),
        ..adult_male()
    };
    let error = validate(&raw, &config()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.field.as_deref(), Some("age"));
}

#[test]
fn test_non_finite_weight_is_invalid() {
    let raw = RawMeasurements {
        weight_kg: Some(f64::NAN),
        ..adult_male()
    };
    let error = validate(&raw, &config()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.field.as_deref(), Some("weight_kg"));
}

#[test]
fn test_height_bounds_depend_on_age() {
    // 110 cm is below the adult minimum
    let short_adult = RawMeasurements {
        height_cm: Some(110.0),
        ..adult_male()
    };
    let error = validate(&short_adult, &config()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.field.as_deref(), Some("height_cm"));

    // ...but fine for a child
    let short_child = RawMeasurements {
        height_cm: Some(110.0),
        ..girl()
    };
    assert!(validate(&short_child, &config()).is_ok());

    // 180 cm exceeds the pediatric maximum
    let tall_child = RawMeasurements {
        height_cm: Some(180.0),
        ..girl()
    };
    assert_eq!(
        validate(&tall_child, &config()).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}

#[test]
fn test_late_teen_uses_adult_bracket_throughout() {
    // 17.5 years is past the pediatric bracket for both height and equations
    let late_teen = RawMeasurements {
        age: Some(17.5),
        height_cm: Some(178.0),
        ..adult_male()
    };
    let input = validate(&late_teen, &config()).unwrap();
    assert!(!input.profile.is_pediatric());

    let fat = select_primary(&input.profile, &input.measurements).unwrap();
    assert_eq!(
        fat.source,
        BodyFatSource::Formula(BodyFatAlgorithm::DurninWomersley)
    );

    // 17 years is still pediatric, so the same height is rejected
    let seventeen = RawMeasurements {
        age: Some(17.0),
        ..late_teen
    };
    assert_eq!(
        validate(&seventeen, &config()).unwrap_err().field.as_deref(),
        Some("height_cm")
    );
}

#[test]
fn test_athlete_defaults_to_false() {
    let input = validate(&mandatory_only("male", 30.0, 80.0, 180.0), &config()).unwrap();
    assert!(!input.profile.athlete);
    assert!(input.profile.activity_level.is_none());
}

// === Optional fields ===

#[test]
fn test_skinfold_outside_caliper_range_is_dropped() {
    init_test_logging();
    let raw = RawMeasurements {
        triceps_mm: Some(1.5),
        subscapular_mm: Some(55.0),
        ..adult_male()
    };
    let input = validate(&raw, &config()).unwrap();

    assert!(input.measurements.skinfolds.triceps.is_none());
    assert!(input.measurements.skinfolds.subscapular.is_none());
    assert_eq!(input.measurements.skinfolds.suprailiac, Some(18.0));

    let fields: Vec<&str> = input.issues.iter().map(|issue| issue.field.as_str()).collect();
    assert_eq!(fields, ["triceps_mm", "subscapular_mm"]);
    assert!(input
        .issues
        .iter()
        .all(|issue| issue.code == ErrorCode::ValueOutOfRange));
}

#[test]
fn test_skinfold_bounds_are_inclusive() {
    let raw = RawMeasurements {
        triceps_mm: Some(2.0),
        subscapular_mm: Some(50.0),
        ..adult_male()
    };
    let input = validate(&raw, &config()).unwrap();
    assert_eq!(input.measurements.skinfolds.triceps, Some(2.0));
    assert_eq!(input.measurements.skinfolds.subscapular, Some(50.0));
    assert!(input.issues.is_empty());
}

#[test]
fn test_girth_below_site_minimum_is_dropped() {
    let raw = RawMeasurements {
        waist_cm: Some(35.0),
        neck_cm: Some(260.0),
        ..adult_male()
    };
    let input = validate(&raw, &config()).unwrap();
    assert!(input.measurements.circumferences.waist.is_none());
    assert!(input.measurements.circumferences.neck.is_none());
    assert_eq!(input.measurements.circumferences.hip, Some(95.0));
    assert_eq!(input.issues.len(), 2);
}

#[test]
fn test_bone_diameter_in_millimeters_is_rescaled() {
    init_test_logging();
    let raw = RawMeasurements {
        wrist_diameter_cm: Some(58.0),
        ..adult_male()
    };
    let input = validate(&raw, &config()).unwrap();

    assert_close(input.measurements.diameters.wrist.unwrap(), 5.8, EPSILON);
    assert!(input.issues.is_empty());
    assert_eq!(input.notes.len(), 1);
    assert!(input.notes[0].contains("wrist_diameter_cm"));
}

#[test]
fn test_bone_threshold_is_configurable() {
    let raw = RawMeasurements {
        femur_diameter_cm: Some(25.0),
        ..adult_male()
    };
    let default = validate(&raw, &config()).unwrap();
    assert_close(default.measurements.diameters.femur.unwrap(), 2.5, EPSILON);

    let relaxed = ValidationConfig {
        bone_mm_threshold: 30.0,
        ..config()
    };
    let kept = validate(&raw, &relaxed).unwrap();
    assert_close(kept.measurements.diameters.femur.unwrap(), 25.0, EPSILON);
    assert!(kept.notes.is_empty());
}

#[test]
fn test_non_positive_diameter_is_dropped() {
    let raw = RawMeasurements {
        humerus_diameter_cm: Some(0.0),
        ..adult_male()
    };
    let input = validate(&raw, &config()).unwrap();
    assert!(input.measurements.diameters.humerus.is_none());
    assert_eq!(input.issues[0].field, "humerus_diameter_cm");
}

#[test]
fn test_percentages_must_be_strictly_inside_zero_and_hundred() {
    for bad in [0.0, 100.0, -3.0] {
        let raw = RawMeasurements {
            known_body_fat_percent: Some(bad),
            ..adult_male()
        };
        let input = validate(&raw, &config()).unwrap();
        assert!(input.measurements.known_body_fat_percent.is_none(), "{bad}");
        assert_eq!(input.issues[0].field, "known_body_fat_percent");
    }

    let raw = RawMeasurements {
        known_body_fat_percent: Some(0.5),
        desired_body_fat_percent: Some(99.5),
        ..adult_male()
    };
    let input = validate(&raw, &config()).unwrap();
    assert_eq!(input.measurements.known_body_fat_percent, Some(0.5));
    assert_eq!(input.measurements.desired_body_fat_percent, Some(99.5));
}

#[test]
fn test_unknown_activity_level_is_dropped() {
    let raw = RawMeasurements {
        activity_level: Some("couch".to_owned()),
        ..adult_male()
    };
    let input = validate(&raw, &config()).unwrap();
    assert!(input.profile.activity_level.is_none());
    assert_eq!(input.issues.len(), 1);
    assert_eq!(input.issues[0].field, "activity_level");
    assert_eq!(input.issues[0].code, ErrorCode::InvalidInput);
}

#[test]
fn test_raw_record_deserializes_with_missing_fields() {
    let raw: RawMeasurements = serde_json::from_str(
        r#"{"sex": "female", "age": 41, "weight_kg": 66.5, "height_cm": 163, "waist_cm": 78}"#,
    )
    .unwrap();
    let input = validate(&raw, &config()).unwrap();
    assert_eq!(input.profile.sex, Sex::Female);
    assert_eq!(input.measurements.circumferences.waist, Some(78.0));
    assert_eq!(input.measurements.skinfolds, Skinfolds::default());
}

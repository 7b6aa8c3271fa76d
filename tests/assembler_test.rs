// ABOUTME: End-to-end tests for the results assembler and batch calculation
// ABOUTME: Verifies the full record, "not computed" handling, notes and parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    adult_female, adult_male, assert_close, girl, init_test_logging, male_athlete, mandatory_only,
    EPSILON,
};
use nutriplan_engine::config::EngineConfig;
use nutriplan_engine::errors::ErrorCode;
use nutriplan_engine::intelligence::{
    calculate, calculate_batch, Metric, MetricValue, ResultsRecord, NOT_COMPUTED,
};
use nutriplan_engine::models::RawMeasurements;
use serde_json::Value;

fn number(metric: &Metric) -> f64 {
    metric
        .value
        .as_number()
        .unwrap_or_else(|| panic!("not a number: {metric:?}"))
}

fn record(raw: &RawMeasurements) -> ResultsRecord {
    init_test_logging();
    calculate(raw, &EngineConfig::default())
}

#[test]
fn test_complete_adult_record() {
    let record = record(&adult_male());

    assert_close(number(&record.bmi), 80.0 / 3.24, EPSILON);
    assert_eq!(record.bmi.classification.unwrap().label, "Normal weight");
    assert_close(number(&record.waist_hip_ratio), 85.0 / 95.0, EPSILON);

    assert_close(number(&record.body_fat_percent), 21.739_388, 1e-5);
    assert_eq!(record.body_fat_percent.method.as_deref(), Some("durnin_womersley"));
    assert_eq!(record.body_fat_alternatives.len(), 3);

    let fat = number(&record.fat_mass_kg);
    let lean = number(&record.lean_mass_kg);
    assert_close(fat + lean, 80.0, EPSILON);
    assert_eq!(record.typology.value, MetricValue::Text("Balanceado".to_owned()));

    assert_close(number(&record.metabolic_age), 37.275_259, 1e-5);
    assert_eq!(
        record.metabolic_age.method.as_deref(),
        Some("method_2_durnin_womersley_brozek")
    );
    assert_close(number(&record.bmr), 1729.503_113, 1e-4);
    assert_eq!(record.bmr.method.as_deref(), Some("katch_mcardle"));
    // Moderate activity, male multiplier 1.78
    assert_close(number(&record.tdee_kcal), 3079.0, EPSILON);

    assert_close(number(&record.bone_mass_kg), 12.516_860, 1e-4);
    assert_close(number(&record.residual_mass_kg), 19.28, 1e-9);
    assert_close(number(&record.muscle_mass_kg), 30.811_629, 1e-4);
    assert!(number(&record.arm_muscle_area_cm2) > 0.0);

    assert_close(number(&record.ideal_weight_kg), 71.28, 1e-9);
    assert_close(number(&record.weight_delta_kg), -8.72, 1e-9);
    assert_eq!(record.ideal_weight_kg.method.as_deref(), Some("reference_bmi_22"));

    assert_close(number(&record.visceral_index), 0.47, 1e-12);
    assert_eq!(
        record.abdominal_fat_area_cm2.method.as_deref(),
        Some("method_b_body_fat")
    );
    assert!(record.abdominal_fat_area_unscaled.value.is_computed());
    assert!(record.somatotype.somatochart.is_some());

    assert!(record.issues.is_empty());
    assert!(record.notes.is_empty());
}

#[test]
fn test_female_and_athlete_records_compute_core_metrics() {
    for raw in [adult_female(), male_athlete()] {
        let record = record(&raw);
        assert!(record.body_fat_percent.value.is_computed());
        assert!(record.metabolic_age.value.is_computed());
        assert!(record.visceral_index.value.is_computed());
        assert_ne!(record.typology.value, MetricValue::Text("Indefinido".to_owned()));
    }
}

#[test]
fn test_athlete_record_uses_method_a() {
    let record = record(&male_athlete());
    assert_eq!(
        record.abdominal_fat_area_cm2.method.as_deref(),
        Some("method_a_skinfold")
    );
    assert_eq!(record.abdominal_fat_area_unscaled.value, MetricValue::NotComputed);
    assert_eq!(record.visceral_index.method.as_deref(), Some("athlete_mixed_index"));
}

#[test]
fn test_pediatric_record() {
    let record = record(&girl());
    assert_close(number(&record.body_fat_percent), 18.52, 1e-9);
    assert!(record.body_fat_alternatives.is_empty());
    // No skinfold or known-body-fat scenario fits a child without waist
    assert_eq!(record.metabolic_age.value, MetricValue::NotComputed);
    assert_eq!(record.bmr.method.as_deref(), Some("katch_mcardle"));
}

#[test]
fn test_missing_mandatory_field_yields_all_not_computed() {
    let raw = RawMeasurements {
        sex: None,
        ..adult_male()
    };
    let record = record(&raw);

    for metric in [
        &record.bmi,
        &record.body_fat_percent,
        &record.fat_mass_kg,
        &record.metabolic_age,
        &record.bmr,
        &record.ideal_weight_kg,
        &record.visceral_index,
        &record.somatotype.endomorphy,
    ] {
        assert_eq!(metric.value, MetricValue::NotComputed);
        assert!(metric.reason.is_some());
    }
    assert_eq!(record.typology.value, MetricValue::Text("Indefinido".to_owned()));
    assert_eq!(record.issues.len(), 1);
    assert_eq!(record.issues[0].field, "sex");
    assert_eq!(record.issues[0].code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_mandatory_only_record() {
    let record = record(&mandatory_only("male", 40.0, 90.0, 175.0));

    assert!(record.bmi.value.is_computed());
    assert_eq!(record.body_fat_percent.value, MetricValue::NotComputed);
    assert_eq!(record.fat_mass_kg.value, MetricValue::NotComputed);
    assert_eq!(record.typology.value, MetricValue::Text("Indefinido".to_owned()));
    assert!(record.typology.reason.is_some());
    assert_eq!(record.metabolic_age.value, MetricValue::NotComputed);

    // Mifflin-St Jeor without lean mass
    assert_close(number(&record.bmr), 1798.75, 1e-9);
    assert_eq!(record.bmr.method.as_deref(), Some("mifflin_st_jeor"));
    assert_close(number(&record.tdee_kcal), 4137.0, EPSILON);

    assert!(record.ideal_weight_kg.value.is_computed());
    assert_close(number(&record.residual_mass_kg), 90.0 * 0.241, 1e-9);
    assert_eq!(record.muscle_mass_kg.value, MetricValue::NotComputed);
    assert_eq!(record.body_fat_alternatives.len(), 1);
}

#[test]
fn test_desired_body_fat_sets_ideal_weight() {
    let raw = RawMeasurements {
        desired_body_fat_percent: Some(15.0),
        ..adult_male()
    };
    let record = record(&raw);
    assert_close(number(&record.ideal_weight_kg), 73.657_046, 1e-5);
    assert_eq!(record.ideal_weight_kg.method.as_deref(), Some("desired_body_fat"));
}

#[test]
fn test_tdee_uses_sex_specific_multipliers() {
    let female = record(&adult_female());
    // Light activity: 1.55 for women against 1.56 for men
    assert_close(
        number(&female.tdee_kcal),
        (number(&female.bmr) * 1.55).round(),
        EPSILON,
    );

    let intense = record(&RawMeasurements {
        activity_level: Some("intense".to_owned()),
        ..mandatory_only("male", 40.0, 70.0, 170.0)
    });
    // Mifflin-St Jeor 1567.5 without lean mass
    assert_close(number(&intense.bmr), 1567.5, EPSILON);
    assert_close(number(&intense.tdee_kcal), 3292.0, EPSILON);
}

#[test]
fn test_tdee_needs_an_activity_level() {
    let record = record(&mandatory_only("female", 35.0, 62.0, 166.0));
    assert!(record.bmr.value.is_computed());
    assert_eq!(record.tdee_kcal.value, MetricValue::NotComputed);
    assert!(record.tdee_kcal.reason.as_deref().unwrap().contains("activity_level"));
}

#[test]
fn test_implausible_weight_change_is_noted() {
    // Reference BMI 22 at 160 cm is 56.32 kg, more than half of 160 kg away
    let record = record(&mandatory_only("male", 40.0, 160.0, 160.0));
    assert_close(number(&record.weight_delta_kg), -103.68, 1e-9);
    assert_eq!(record.notes.len(), 1);
    assert!(record.notes[0].contains("-103.7 kg"));
    assert!(record.notes[0].contains("80.0 kg"));

    let modest = calculate(
        &mandatory_only("male", 40.0, 100.0, 175.0),
        &EngineConfig::default(),
    );
    assert!(modest.notes.is_empty());
}

#[test]
fn test_dropped_fields_and_notes_reach_the_record() {
    let raw = RawMeasurements {
        neck_cm: Some(10.0),
        wrist_diameter_cm: Some(58.0),
        ..adult_male()
    };
    let record = record(&raw);
    assert_eq!(record.issues.len(), 1);
    assert_eq!(record.issues[0].field, "neck_cm");
    assert_eq!(record.notes.len(), 1);
    assert!(record.bone_mass_kg.value.is_computed());
}

#[test]
fn test_lean_obesity_note() {
    let raw = RawMeasurements {
        known_body_fat_percent: Some(15.0),
        waist_cm: Some(85.0),
        ..mandatory_only("male", 30.0, 100.0, 180.0)
    };
    let record = record(&raw);
    assert_eq!(
        record.metabolic_age.method.as_deref(),
        Some("method_1_known_body_fat")
    );
    assert!(record.notes.iter().any(|note| note.contains("Lean-obesity")));

    let mut config = EngineConfig::default();
    config.metabolic_age.lean_obesity_rule.enabled = false;
    let record = calculate(&raw, &config);
    assert!(record.notes.is_empty());
    assert_eq!(
        record.metabolic_age.method.as_deref(),
        Some("method_2_known_body_fat")
    );
}

// === Serialization ===

#[test]
fn test_not_computed_serializes_as_literal() {
    let record = record(&mandatory_only("female", 35.0, 62.0, 166.0));
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["body_fat_percent"]["value"], Value::from(NOT_COMPUTED));
    assert!(json["body_fat_percent"]["reason"].is_string());
    assert!(json["body_fat_percent"].get("method").is_none());
    assert_eq!(json["typology"]["value"], Value::from("Indefinido"));
    assert!(json["bmi"]["value"].is_f64());
    assert_eq!(json["bmi"]["classification"]["risk"], Value::from("low"));
}

#[test]
fn test_record_serializes_every_section() {
    let json = serde_json::to_value(record(&adult_male())).unwrap();
    for key in [
        "bmi",
        "waist_hip_ratio",
        "body_fat_percent",
        "body_fat_alternatives",
        "fat_mass_kg",
        "lean_mass_kg",
        "ffmi",
        "fmi",
        "typology",
        "metabolic_age",
        "bmr",
        "tdee_kcal",
        "bone_mass_kg",
        "residual_mass_kg",
        "arm_muscle_area_cm2",
        "muscle_mass_kg",
        "muscle_mass_percent",
        "somatotype",
        "ideal_weight_kg",
        "weight_delta_kg",
        "visceral_index",
        "abdominal_fat_area_cm2",
        "abdominal_fat_thickness_cm",
        "abdominal_fat_mass_kg",
        "abdominal_fat_area_unscaled",
        "issues",
        "notes",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["somatotype"]["dominant"]["value"], Value::from("Mesomorfo"));
}

// === Batch ===

#[test]
fn test_batch_matches_sequential() {
    init_test_logging();
    let config = EngineConfig::default();
    let subjects = vec![
        adult_male(),
        adult_female(),
        male_athlete(),
        girl(),
        mandatory_only("male", 40.0, 90.0, 175.0),
        RawMeasurements::default(),
    ];

    let batch = calculate_batch(&subjects, &config);
    let sequential: Vec<ResultsRecord> =
        subjects.iter().map(|raw| calculate(raw, &config)).collect();

    assert_eq!(batch.len(), subjects.len());
    assert_eq!(batch, sequential);
}

#[test]
fn test_batch_of_nothing() {
    assert!(calculate_batch(&[], &EngineConfig::default()).is_empty());
}

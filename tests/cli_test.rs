// ABOUTME: Tests for the nutriplan-cli binary reading measurement files
// ABOUTME: Runs the built executable against temporary JSON inputs and parses its stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{adult_female, adult_male};
use nutriplan_engine::config::intelligence::ENV_LEAN_OBESITY_RULE;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nutriplan-cli"))
        .args(args)
        .env_remove(ENV_LEAN_OBESITY_RULE)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run nutriplan-cli")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "cli failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_calculate_reads_a_subject_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("subject.json");
    fs::write(&input, serde_json::to_string(&adult_male()).unwrap()).unwrap();

    let json = stdout_json(&run_cli(&["calculate", path_arg(&input)]));

    let bmi = json["bmi"]["value"].as_f64().unwrap();
    assert!((bmi - 80.0 / 3.24).abs() < 1e-9);
    assert_eq!(json["bmr"]["method"], Value::from("katch_mcardle"));
    assert!(json["issues"].as_array().unwrap().is_empty());
}

#[test]
fn test_batch_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cohort.json");
    let cohort = vec![adult_male(), adult_female()];
    fs::write(&input, serde_json::to_string(&cohort).unwrap()).unwrap();

    let json = stdout_json(&run_cli(&["batch", path_arg(&input), "--pretty"]));
    let records = json.as_array().unwrap();

    assert_eq!(records.len(), 2);
    let male_ratio = records[0]["waist_hip_ratio"]["value"].as_f64().unwrap();
    let female_ratio = records[1]["waist_hip_ratio"]["value"].as_f64().unwrap();
    assert!((male_ratio - 85.0 / 95.0).abs() < 1e-9);
    assert!((female_ratio - 70.0 / 96.0).abs() < 1e-9);
}

#[test]
fn test_invalid_subject_still_produces_a_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, "{}").unwrap();

    let json = stdout_json(&run_cli(&["calculate", path_arg(&input)]));
    assert_eq!(json["bmi"]["value"], Value::from("not computed"));
    assert_eq!(json["issues"].as_array().unwrap().len(), 1);
}

#[test]
fn test_malformed_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "{ \"sex\": ").unwrap();

    let output = run_cli(&["calculate", path_arg(&input)]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(&["calculate", path_arg(&dir.path().join("absent.json"))]);
    assert!(!output.status.success());
}

#[test]
fn test_config_command_prints_defaults() {
    let json = stdout_json(&run_cli(&["config"]));
    assert_eq!(
        json["metabolic_age"]["lean_obesity_rule"]["enabled"],
        Value::Bool(true)
    );
}

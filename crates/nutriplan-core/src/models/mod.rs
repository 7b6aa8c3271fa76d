// ABOUTME: Anthropometric data models shared by the engine and its collaborators
// ABOUTME: Re-exports subject profile, measurement groups and the raw input record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `RawMeasurements`: flat, pre-typed field map handed over by the form layer
//! - `SubjectProfile`: the four mandatory fields plus athletic status
//! - `MeasurementSet`: optional skinfolds, circumferences and bone diameters
//!
//! Every model is immutable once validated and lives only for one request.

mod input;
mod measurements;
mod subject;

pub use input::RawMeasurements;
pub use measurements::{BoneDiameters, Circumferences, MeasurementSet, Skinfolds};
pub use subject::{is_pediatric_age, ActivityLevel, Sex, SubjectProfile, PEDIATRIC_MAX_AGE};

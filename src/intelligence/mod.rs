// ABOUTME: Body-composition inference engine: formulas, selection, engines and assembly
// ABOUTME: Re-exports the pipeline entry points and the result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Leaves first:
//!
//! - `validation` - raw record to typed input
//! - `algorithms` - formula library
//! - `method_selector` - body-fat priority chain
//! - `composition` - masses, indices, typology
//! - `metabolic_age`, `somatotype`, `visceral_fat`, `anthropometrics` - engines
//! - `classification` + `physiological_constants` - reference tables
//! - `assembler` - stage pipeline and results record

/// Formula library
pub mod algorithms;
/// Secondary anthropometric metrics
pub mod anthropometrics;
/// Stage pipeline and results record
pub mod assembler;
/// Reference-range classification
pub mod classification;
/// Composition derivation and typology
pub mod composition;
/// Metabolic-age scenario engine
pub mod metabolic_age;
/// Body-fat method selector
pub mod method_selector;
/// Equation coefficients and reference tables
pub mod physiological_constants;
/// Heath-Carter somatotype
pub mod somatotype;
/// Input validation and normalization
pub mod validation;
/// Visceral index and abdominal fat
pub mod visceral_fat;

pub use assembler::{calculate, calculate_batch, Metric, MetricValue, ResultsRecord, NOT_COMPUTED};
pub use classification::{Classification, RiskLevel};
pub use composition::{Composition, Typology};
pub use metabolic_age::{MetabolicResult, MetabolicScenario};
pub use method_selector::{BodyFat, BodyFatSource};
pub use somatotype::Somatotype;
pub use validation::{validate, FieldIssue, ValidatedInput};

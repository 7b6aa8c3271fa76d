// ABOUTME: Immutable stage pipeline from validated input to the structured results record
// ABOUTME: Converts engine failures into "not computed" metrics and runs batches in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Results Assembler
//!
//! ```text
//! RawMeasurements
//!   -> ValidatedInput      (validation)
//!   -> BodyFatStage        (method selector)
//!   -> CompositionStage    (masses, indices, typology)
//!   -> EngineStage         (metabolic age, somatotype, visceral and abdominal fat)
//!   -> ResultsRecord
//! ```
//!
//! Each stage owns the previous one, so nothing is mutated after it is
//! produced. No error crosses [`calculate`]: a failed metric carries a
//! "not computed" value and the reason.

use super::anthropometrics::{
    arm_muscle_area, bone_mass, fallback_bmr, ideal_weight, muscle_mass, residual_mass,
    total_energy_expenditure, waist_hip_ratio,
};
use super::classification::{
    classify_bmi, classify_body_fat, classify_metabolic_age, classify_waist_hip_ratio,
    Classification,
};
use super::composition::{typology_of, Composition, Typology};
use super::metabolic_age::{estimate_metabolic_age, MetabolicResult};
use super::method_selector::{select_body_fat, BodyFatSelection};
use super::somatotype::{calculate_somatotype, Somatotype};
use super::validation::{validate, FieldIssue, ValidatedInput};
use super::visceral_fat::{
    calculate_abdominal_fat, calculate_visceral_index, AbdominalFat, Classified, VisceralIndex,
};
use crate::config::intelligence::EngineConfig;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::RawMeasurements;
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use tracing::{debug, info, warn};

/// Literal written for metrics that could not be computed
pub const NOT_COMPUTED: &str = "not computed";

// ============================================================================
// Output types
// ============================================================================

/// Value of a metric
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// Numeric result
    Number(f64),
    /// Categorical result
    Text(String),
    /// Missing inputs or no applicable method
    NotComputed,
}

impl MetricValue {
    /// Numeric value, if any
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::NotComputed => None,
        }
    }

    /// Whether the metric was computed
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        !matches!(self, Self::NotComputed)
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::NotComputed => serializer.serialize_str(NOT_COMPUTED),
        }
    }
}

/// One output metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    /// Value or "not computed"
    pub value: MetricValue,
    /// Method that produced the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Reference-range classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    /// Why the metric is not computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Metric {
    /// Computed numeric metric
    #[must_use]
    pub fn number(value: f64, method: impl Into<String>) -> Self {
        Self {
            value: MetricValue::Number(value),
            method: Some(method.into()),
            classification: None,
            reason: None,
        }
    }

    /// Computed categorical metric
    #[must_use]
    pub fn text(value: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            value: MetricValue::Text(value.into()),
            method: Some(method.into()),
            classification: None,
            reason: None,
        }
    }

    /// Metric that could not be computed
    #[must_use]
    pub fn not_computed(reason: impl Into<String>) -> Self {
        Self {
            value: MetricValue::NotComputed,
            method: None,
            classification: None,
            reason: Some(reason.into()),
        }
    }

    /// Attach a classification
    #[must_use]
    pub fn classified(mut self, classification: Option<Classification>) -> Self {
        self.classification = classification;
        self
    }

    fn from_result<T>(result: &AppResult<T>, to_metric: impl FnOnce(&T) -> Self) -> Self {
        match result {
            Ok(value) => to_metric(value),
            Err(error) => Self::from_error(error),
        }
    }

    fn from_error(error: &AppError) -> Self {
        Self::not_computed(error.to_string())
    }
}

/// Advisory body-fat estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeEstimate {
    /// Algorithm name
    pub method: &'static str,
    /// Body fat (%)
    pub value: f64,
    /// Classification against the subject's body-fat table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

/// 2-D somatochart point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SomatochartPoint {
    /// Ectomorphy minus endomorphy
    pub x: f64,
    /// Twice mesomorphy minus the other two
    pub y: f64,
}

/// Heath-Carter section of the record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SomatotypeMetrics {
    /// Endomorphy rating
    pub endomorphy: Metric,
    /// Mesomorphy rating
    pub mesomorphy: Metric,
    /// Ectomorphy rating
    pub ectomorphy: Metric,
    /// Dominant component
    pub dominant: Metric,
    /// Somatochart coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub somatochart: Option<SomatochartPoint>,
}

/// Structured results for one subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsRecord {
    /// Body mass index (kg/m²)
    pub bmi: Metric,
    /// Waist-hip ratio
    pub waist_hip_ratio: Metric,
    /// Source-of-truth body fat (%)
    pub body_fat_percent: Metric,
    /// Other admissible body-fat estimates
    pub body_fat_alternatives: Vec<AlternativeEstimate>,
    /// Fat mass (kg)
    pub fat_mass_kg: Metric,
    /// Lean mass (kg)
    pub lean_mass_kg: Metric,
    /// Fat-free mass index (kg/m²)
    pub ffmi: Metric,
    /// Fat mass index (kg/m²)
    pub fmi: Metric,
    /// Body typology
    pub typology: Metric,
    /// Metabolic age (years)
    pub metabolic_age: Metric,
    /// Basal metabolic rate (kcal/day)
    pub bmr: Metric,
    /// Total daily energy expenditure (kcal/day)
    pub tdee_kcal: Metric,
    /// Bone mass (kg)
    pub bone_mass_kg: Metric,
    /// Residual mass (kg)
    pub residual_mass_kg: Metric,
    /// Arm muscle area (cm²)
    pub arm_muscle_area_cm2: Metric,
    /// Total muscle mass (kg)
    pub muscle_mass_kg: Metric,
    /// Total muscle mass (% of weight)
    pub muscle_mass_percent: Metric,
    /// Heath-Carter somatotype
    pub somatotype: SomatotypeMetrics,
    /// Ideal weight (kg)
    pub ideal_weight_kg: Metric,
    /// Ideal minus current weight (kg)
    pub weight_delta_kg: Metric,
    /// Visceral index
    pub visceral_index: Metric,
    /// Abdominal fat area (cm²)
    pub abdominal_fat_area_cm2: Metric,
    /// Abdominal fat thickness (cm)
    pub abdominal_fat_thickness_cm: Metric,
    /// Visceral fat mass (kg)
    pub abdominal_fat_mass_kg: Metric,
    /// Advisory unscaled abdominal area (Method B only)
    pub abdominal_fat_area_unscaled: Metric,
    /// Optional fields dropped by validation
    pub issues: Vec<FieldIssue>,
    /// Non-fatal remarks
    pub notes: Vec<String>,
}

impl ResultsRecord {
    /// Record with every metric "not computed" for the same reason
    #[must_use]
    pub fn not_computed(reason: &str) -> Self {
        let metric = || Metric::not_computed(reason);
        Self {
            bmi: metric(),
            waist_hip_ratio: metric(),
            body_fat_percent: metric(),
            body_fat_alternatives: Vec::new(),
            fat_mass_kg: metric(),
            lean_mass_kg: metric(),
            ffmi: metric(),
            fmi: metric(),
            typology: Metric::text(Typology::Undefined.label(), "ffmi_fmi_grid"),
            metabolic_age: metric(),
            bmr: metric(),
            tdee_kcal: metric(),
            bone_mass_kg: metric(),
            residual_mass_kg: metric(),
            arm_muscle_area_cm2: metric(),
            muscle_mass_kg: metric(),
            muscle_mass_percent: metric(),
            somatotype: SomatotypeMetrics {
                endomorphy: metric(),
                mesomorphy: metric(),
                ectomorphy: metric(),
                dominant: metric(),
                somatochart: None,
            },
            ideal_weight_kg: metric(),
            weight_delta_kg: metric(),
            visceral_index: metric(),
            abdominal_fat_area_cm2: metric(),
            abdominal_fat_thickness_cm: metric(),
            abdominal_fat_mass_kg: metric(),
            abdominal_fat_area_unscaled: metric(),
            issues: Vec::new(),
            notes: Vec::new(),
        }
    }
}

// ============================================================================
// Stages
// ============================================================================

/// Validated input plus the body-fat selection
#[derive(Debug, Clone)]
pub struct BodyFatStage {
    /// Validated request
    pub input: ValidatedInput,
    /// Selector outcome
    pub selection: BodyFatSelection,
}

impl From<ValidatedInput> for BodyFatStage {
    fn from(input: ValidatedInput) -> Self {
        let selection = select_body_fat(&input.profile, &input.measurements);
        Self { input, selection }
    }
}

/// Body-fat stage plus the derived composition
#[derive(Debug, Clone)]
pub struct CompositionStage {
    /// Previous stage
    pub body_fat: BodyFatStage,
    /// Masses, indices and typology, or why they are missing
    pub composition: AppResult<Composition>,
}

impl From<BodyFatStage> for CompositionStage {
    fn from(body_fat: BodyFatStage) -> Self {
        let profile = &body_fat.input.profile;
        let composition = body_fat
            .selection
            .primary
            .clone()
            .map(|fat| Composition::derive(profile, fat));
        Self {
            body_fat,
            composition,
        }
    }
}

impl CompositionStage {
    fn composition(&self) -> Option<&Composition> {
        self.composition.as_ref().ok()
    }
}

/// Composition stage plus the independent engines
#[derive(Debug, Clone)]
pub struct EngineStage {
    /// Previous stage
    pub composition: CompositionStage,
    /// Metabolic-age engine outcome
    pub metabolic: AppResult<MetabolicResult>,
    /// Somatotype outcome
    pub somatotype: AppResult<Somatotype>,
    /// Visceral index outcome
    pub visceral: AppResult<VisceralIndex>,
    /// Abdominal fat outcome
    pub abdominal: AppResult<AbdominalFat>,
}

impl EngineStage {
    /// Run the engines on a composition stage
    #[must_use]
    pub fn run(composition: CompositionStage, config: &EngineConfig) -> Self {
        let input = &composition.body_fat.input;
        let profile = &input.profile;
        let measurements = &input.measurements;
        let derived = composition.composition();
        let body_fat_percent = derived.map(|composition| composition.body_fat.percent);

        let metabolic =
            estimate_metabolic_age(profile, measurements, derived, &config.metabolic_age);
        let somatotype = calculate_somatotype(profile, measurements);
        let visceral = calculate_visceral_index(profile, measurements, body_fat_percent);
        let abdominal = calculate_abdominal_fat(
            profile,
            measurements,
            body_fat_percent,
            &config.abdominal_fat,
        );

        Self {
            composition,
            metabolic,
            somatotype,
            visceral,
            abdominal,
        }
    }
}

impl From<EngineStage> for ResultsRecord {
    fn from(stage: EngineStage) -> Self {
        let EngineStage {
            composition: composition_stage,
            metabolic,
            somatotype,
            visceral,
            abdominal,
        } = stage;
        let composition = composition_stage.composition();
        let BodyFatStage { input, selection } = &composition_stage.body_fat;
        let profile = &input.profile;
        let measurements = &input.measurements;

        let mut notes = input.notes.clone();
        if let Ok(result) = &metabolic {
            if result.lean_obesity_rule_applied {
                notes.push(
                    "Lean-obesity rule applied: BMI in the obese range with low body fat, metabolic age uses athlete scenarios".into(),
                );
            }
        }

        let bmi = profile.bmi();
        let body_fat_percent = Metric::from_result(&selection.primary, |fat| {
            Metric::number(fat.percent, fat.source.name())
                .classified(classify_body_fat(profile, fat.percent))
        });
        let body_fat_alternatives = selection
            .alternatives
            .iter()
            .map(|estimate| AlternativeEstimate {
                method: estimate.algorithm.name(),
                value: estimate.percent,
                classification: classify_body_fat(profile, estimate.percent),
            })
            .collect();

        let composition_metric = |to_metric: fn(&Composition) -> Metric| {
            Metric::from_result(&composition_stage.composition, to_metric)
        };

        let typology = match &composition_stage.composition {
            Ok(composition) => Metric::text(composition.typology.label(), "ffmi_fmi_grid"),
            Err(error) => Metric {
                reason: Some(error.to_string()),
                ..Metric::text(typology_of(None).label(), "ffmi_fmi_grid")
            },
        };

        let bmr = match &metabolic {
            Ok(result) => Metric::number(result.bmr, "katch_mcardle"),
            Err(_) => match fallback_bmr(profile, composition) {
                Ok((value, algorithm)) => Metric::number(value, algorithm.name()),
                Err(error) => Metric::from_error(&error),
            },
        };

        let tdee_kcal = match bmr.value.as_number() {
            Some(value) => Metric::from_result(&total_energy_expenditure(profile, value), |kcal| {
                Metric::number(*kcal, "bmr × activity multiplier")
            }),
            None => Metric::not_computed("TDEE requires a basal metabolic rate"),
        };

        let bone = bone_mass(profile, measurements);
        let muscle = match (composition, &bone) {
            (Some(composition), Ok(bone_kg)) => muscle_mass(profile, composition, *bone_kg),
            (None, _) => Err(AppError::missing_measurement(
                "muscle mass",
                "body_fat_percent",
            )),
            (_, Err(error)) => Err(error.clone()),
        };

        let ideal = ideal_weight(profile, measurements, composition);
        if !ideal.is_plausible() {
            notes.push(format!(
                "Weight change to the ideal weight ({:+.1} kg) exceeds the recommended maximum of {:.1} kg",
                ideal.delta_kg, ideal.max_change_kg
            ));
        }

        Self {
            bmi: Metric::number(bmi, "weight / height²").classified(classify_bmi(bmi)),
            waist_hip_ratio: Metric::from_result(&waist_hip_ratio(measurements), |ratio| {
                Metric::number(*ratio, "waist / hip")
                    .classified(classify_waist_hip_ratio(profile.sex, *ratio))
            }),
            body_fat_percent,
            body_fat_alternatives,
            fat_mass_kg: composition_metric(|c| Metric::number(c.fat_mass_kg, c.body_fat.source.name())),
            lean_mass_kg: composition_metric(|c| Metric::number(c.lean_mass_kg, c.body_fat.source.name())),
            ffmi: composition_metric(|c| {
                Metric::number(c.ffmi, "lean mass / height²").classified(Some(c.ffmi_classification()))
            }),
            fmi: composition_metric(|c| {
                Metric::number(c.fmi, "fat mass / height²").classified(Some(c.fmi_classification()))
            }),
            typology,
            metabolic_age: Metric::from_result(&metabolic, |result| {
                Metric::number(result.metabolic_age, result.scenario.name())
                    .classified(classify_metabolic_age(result.metabolic_age, profile.age))
            }),
            bmr,
            tdee_kcal,
            bone_mass_kg: Metric::from_result(&bone, |kg| Metric::number(*kg, "rocha")),
            residual_mass_kg: Metric::number(residual_mass(profile), "wurch"),
            arm_muscle_area_cm2: Metric::from_result(
                &arm_muscle_area(profile, measurements),
                |area| Metric::number(*area, "frisancho_bone_corrected"),
            ),
            muscle_mass_kg: Metric::from_result(&muscle, |muscle| {
                Metric::number(muscle.kg, "weight - (fat + bone + residual)")
            }),
            muscle_mass_percent: Metric::from_result(&muscle, |muscle| {
                Metric::number(muscle.percent, "muscle mass / weight")
            }),
            somatotype: somatotype_metrics(&somatotype),
            ideal_weight_kg: Metric::number(ideal.kg, ideal.method.name()),
            weight_delta_kg: Metric::number(ideal.delta_kg, ideal.method.name()),
            visceral_index: Metric::from_result(&visceral, |index| {
                Metric::number(index.value, index.kind.name()).classified(index.classification)
            }),
            abdominal_fat_area_cm2: Metric::from_result(&abdominal, |fat| {
                classified_metric(fat.area, fat.method.name())
            }),
            abdominal_fat_thickness_cm: Metric::from_result(&abdominal, |fat| {
                classified_metric(fat.thickness, fat.method.name())
            }),
            abdominal_fat_mass_kg: Metric::from_result(&abdominal, |fat| {
                classified_metric(fat.mass, fat.method.name())
            }),
            abdominal_fat_area_unscaled: Metric::from_result(&abdominal, |fat| {
                fat.unscaled_area.map_or_else(
                    || Metric::not_computed("unscaled area is only reported by method B"),
                    |area| classified_metric(area, "method_b_unscaled_advisory"),
                )
            }),
            issues: input.issues.clone(),
            notes,
        }
    }
}

fn classified_metric(value: Classified, method: &str) -> Metric {
    Metric::number(value.value, method).classified(value.classification)
}

fn somatotype_metrics(result: &AppResult<Somatotype>) -> SomatotypeMetrics {
    match result {
        Ok(somatotype) => {
            let (x, y) = somatotype.somatochart();
            SomatotypeMetrics {
                endomorphy: Metric::number(somatotype.endomorphy, "heath_carter"),
                mesomorphy: Metric::number(somatotype.mesomorphy, "heath_carter"),
                ectomorphy: Metric::number(somatotype.ectomorphy, "heath_carter"),
                dominant: Metric::text(somatotype.dominant().label(), "heath_carter"),
                somatochart: Some(SomatochartPoint { x, y }),
            }
        }
        Err(error) => SomatotypeMetrics {
            endomorphy: Metric::from_error(error),
            mesomorphy: Metric::from_error(error),
            ectomorphy: Metric::from_error(error),
            dominant: Metric::from_error(error),
            somatochart: None,
        },
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Run the stages on an already validated input
#[must_use]
pub fn assemble(input: ValidatedInput, config: &EngineConfig) -> ResultsRecord {
    let body_fat = BodyFatStage::from(input);
    let composition = CompositionStage::from(body_fat);
    let engines = EngineStage::run(composition, config);
    ResultsRecord::from(engines)
}

/// Calculate every metric for one subject
///
/// Never fails: a mandatory-field problem yields a record where every metric
/// is "not computed" and the problem is listed in `issues`.
#[must_use]
pub fn calculate(raw: &RawMeasurements, config: &EngineConfig) -> ResultsRecord {
    match validate(raw, &config.validation) {
        Ok(input) => {
            let record = assemble(input, config);
            debug!(
                body_fat = ?record.body_fat_percent.value.as_number(),
                metabolic_age = ?record.metabolic_age.value.as_number(),
                issues = record.issues.len(),
                "Results assembled"
            );
            record
        }
        Err(error) => {
            warn!(code = ?error.code, reason = %error.message, "Mandatory input rejected");
            let mut record = ResultsRecord::not_computed(&error.to_string());
            record.issues.push(FieldIssue::from(error));
            record
        }
    }
}

/// Calculate independent subjects in parallel
#[must_use]
pub fn calculate_batch(subjects: &[RawMeasurements], config: &EngineConfig) -> Vec<ResultsRecord> {
    info!(subjects = subjects.len(), "Calculating batch");
    subjects
        .par_iter()
        .map(|raw| calculate(raw, config))
        .collect()
}

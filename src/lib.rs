// ABOUTME: Main library entry point for the NutriPlan body-composition engine
// ABOUTME: Exposes validation, formula selection, metric engines and results assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriPlan` Engine
//!
//! Self-assessment inference engine that turns anthropometric measurements
//! into body-composition and metabolic indicators.
//!
//! ## Architecture
//!
//! - **Intelligence**: validation, formula library, method selection, engines
//!   and the results assembler
//! - **Config**: engine configuration with defaults and environment overrides
//! - **Logging**: structured `tracing` setup for binaries
//! - **Errors**: re-exported from `nutriplan-core`
//!
//! The library performs no I/O; a request is a pure function of its input and
//! the configuration.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan_engine::config::EngineConfig;
//! use nutriplan_engine::intelligence::calculate;
//! use nutriplan_engine::models::RawMeasurements;
//!
//! let raw = RawMeasurements {
//!     sex: Some("female".into()),
//!     age: Some(34.0),
//!     weight_kg: Some(62.0),
//!     height_cm: Some(166.0),
//!     waist_cm: Some(74.0),
//!     hip_cm: Some(98.0),
//!     neck_cm: Some(32.0),
//!     ..RawMeasurements::default()
//! };
//! let record = calculate(&raw, &EngineConfig::default());
//! println!("{}", serde_json::to_string_pretty(&record).unwrap_or_default());
//! ```

/// Engine configuration
pub mod config;

/// Error types re-exported from `nutriplan-core`
pub mod errors;

/// Body-composition inference engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models re-exported from `nutriplan-core`
pub mod models {
    pub use nutriplan_core::models::*;
}

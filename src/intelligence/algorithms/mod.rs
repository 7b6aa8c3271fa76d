// ABOUTME: Formula library for body composition and energy expenditure
// ABOUTME: Enum-based dispatch over body-fat, density-conversion and BMR equations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Each family of competing equations is an enum with an estimator and a
//! `name()` used as the output method label. The method selector and the
//! metabolic-age engine pick a variant; they never evaluate coefficients
//! themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use nutriplan_engine::intelligence::algorithms::{BodyFatAlgorithm, DensityConversion};
//!
//! let estimate = BodyFatAlgorithm::DurninWomersley
//!     .estimate_with(&profile, &measurements, DensityConversion::Brozek)?;
//! ```

pub mod bmr;
pub mod body_fat;
pub mod density;

pub use bmr::BmrAlgorithm;
pub use body_fat::{BodyFatAlgorithm, BodyFatEstimate};
pub use density::DensityConversion;

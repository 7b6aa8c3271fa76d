// ABOUTME: Core types for the NutriPlan body-composition engine
// ABOUTME: Foundation crate with error handling and anthropometric domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriPlan` Core
//!
//! Foundation crate providing shared types for the `NutriPlan` body-composition
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **models**: Subject profile, measurement set and the raw input record

/// Unified error handling system with stable error codes
pub mod errors;

/// Anthropometric data models (subject, skinfolds, circumferences, diameters)
pub mod models;

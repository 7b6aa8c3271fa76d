// ABOUTME: Error handling re-exports from nutriplan-core
// ABOUTME: Keeps crate::errors import paths for the engine modules and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError`, `ErrorCode` and `AppResult` live in `nutriplan-core`; this
//! module re-exports them together with the configuration error.

pub use crate::config::intelligence::ConfigError;
pub use nutriplan_core::errors::*;

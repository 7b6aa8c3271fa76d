// ABOUTME: NutriPlan CLI - runs the body-composition engine on JSON measurement records
// ABOUTME: Reads a file or stdin, applies environment configuration and prints the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # One subject from a file
//! nutriplan-cli calculate subject.json --pretty
//!
//! # One subject from stdin
//! cat subject.json | nutriplan-cli calculate -
//!
//! # A JSON array of subjects, computed in parallel
//! nutriplan-cli batch cohort.json
//!
//! # Show the effective configuration
//! NUTRIPLAN_LEAN_OBESITY_RULE=false nutriplan-cli config
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nutriplan_engine::config::EngineConfig;
use nutriplan_engine::intelligence::{calculate, calculate_batch};
use nutriplan_engine::logging::LoggingConfig;
use nutriplan_engine::models::RawMeasurements;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "NutriPlan body-composition engine",
    long_about = "Computes body-composition and metabolic indicators from anthropometric measurements."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate the results record for one subject
    Calculate {
        /// JSON file with the measurements, `-` for stdin
        input: PathBuf,
    },

    /// Calculate results for a JSON array of subjects
    Batch {
        /// JSON file with an array of measurements, `-` for stdin
        input: PathBuf,
    },

    /// Print the effective engine configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = EngineConfig::from_env().context("invalid engine configuration")?;

    match cli.command {
        Command::Calculate { input } => {
            let raw: RawMeasurements = serde_json::from_str(&read_input(&input)?)
                .with_context(|| format!("{} is not a measurement record", input.display()))?;
            let record = calculate(&raw, &config);
            print_json(&record, cli.pretty)?;
        }
        Command::Batch { input } => {
            let subjects: Vec<RawMeasurements> = serde_json::from_str(&read_input(&input)?)
                .with_context(|| format!("{} is not an array of measurement records", input.display()))?;
            info!(subjects = subjects.len(), "Running batch");
            let records = calculate_batch(&subjects, &config);
            print_json(&records, cli.pretty)?;
        }
        Command::Config => print_json(&config, true)?,
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

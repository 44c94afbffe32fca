// ABOUTME: FoodFlow CLI - command-line front end for the nutrition plan engine
// ABOUTME: Generates calorie and macro plans and reports daily intake progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors
//!
//! Usage:
//! ```bash
//! # Three plans for a profile given as flags
//! foodflow-cli plans --sex male --age 30 --weight-kg 80 --height-cm 180 \
//!     --activity moderate --goal maintain
//!
//! # Same, from a saved profile, as JSON
//! foodflow-cli plans --profile profile.json --format json
//!
//! # Progress of today's meals against the balanced plan
//! foodflow-cli progress --profile profile.json --plan balanced --meals meals.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use foodflow::logging::{self, LoggingConfig};
use foodflow::models::PlanIntensity;

use helpers::display::OutputFormat;
use helpers::input::ProfileArgs;

#[derive(Parser)]
#[command(
    name = "foodflow-cli",
    version,
    about = "FoodFlow nutrition plan calculator",
    long_about = "Computes daily calorie and macronutrient plans from a physical profile and tracks logged meals against them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the flexible, balanced and aggressive plans
    Plans {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Measure a day of logged meals against one plan
    Progress {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Plan to measure against (flexible, balanced, aggressive)
        #[arg(long)]
        plan: PlanIntensity,

        /// JSON file holding an array of meal entries
        #[arg(long)]
        meals: PathBuf,

        /// Day to report (YYYY-MM-DD, defaults to today in UTC)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Plans { .. } => "plans",
            Self::Progress { .. } => "progress",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = if cli.verbose { 2 } else { 0 };
    LoggingConfig::from_env().with_verbosity(verbosity).init()?;

    let command_name = cli.command.name();
    let started = Instant::now();

    let outcome = match cli.command {
        Command::Plans { profile, format } => commands::plans::run(&profile, format),
        Command::Progress {
            profile,
            plan,
            meals,
            date,
            format,
        } => commands::progress::run(&profile, plan, &meals, date, format),
    };

    logging::log_command(command_name, outcome.is_ok(), started.elapsed().as_millis());
    outcome
}

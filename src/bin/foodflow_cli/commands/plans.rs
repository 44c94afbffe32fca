// ABOUTME: Plan generation command for foodflow-cli
// ABOUTME: Builds the three nutrition plans for a profile and prints them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

use anyhow::Result;
use foodflow::intelligence::generate_nutrition_plans;
use tracing::info;

use crate::helpers::display::{display_plans, print_json, OutputFormat};
use crate::helpers::input::ProfileArgs;

/// Generate and print the plans
pub fn run(profile: &ProfileArgs, format: OutputFormat) -> Result<()> {
    let user = profile.resolve()?;
    let plans = generate_nutrition_plans(&user)?;

    info!(
        goal = %user.goal,
        calories = ?plans.each_ref().map(|p| p.calories),
        "Generated nutrition plans"
    );

    match format {
        OutputFormat::Table => display_plans(&user, &plans),
        OutputFormat::Json => print_json(&plans)?,
    }
    Ok(())
}

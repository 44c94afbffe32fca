// ABOUTME: Daily progress command for foodflow-cli
// ABOUTME: Accumulates a day of logged meals and compares it with the chosen plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

use std::path::Path;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use foodflow::config::NutritionConfig;
use foodflow::intelligence::{daily_progress, generate_plan};
use foodflow::models::{DailyNutrition, PlanIntensity};
use serde_json::json;
use tracing::info;

use crate::helpers::display::{display_progress, print_json, OutputFormat};
use crate::helpers::input::{read_meals, ProfileArgs};

/// Report progress of the meals logged on `date` (today in UTC by default)
pub fn run(
    profile: &ProfileArgs,
    intensity: PlanIntensity,
    meals_path: &Path,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    let user = profile.resolve()?;
    let plan = generate_plan(&user, intensity, NutritionConfig::global())?;

    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let day = DailyNutrition::from_meals(date, read_meals(meals_path)?);
    let progress = daily_progress(&day, &plan);

    info!(
        %date,
        plan = %intensity,
        meals = progress.meal_count,
        calories_percent = progress.calories.percent,
        "Computed daily progress"
    );

    match format {
        OutputFormat::Table => display_progress(&progress, &plan),
        OutputFormat::Json => print_json(&json!({ "plan": plan, "progress": progress }))?,
    }
    Ok(())
}

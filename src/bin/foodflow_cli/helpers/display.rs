// ABOUTME: Output formatting helpers for foodflow-cli
// ABOUTME: Renders nutrition plans and daily progress as text tables or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

use anyhow::Result;
use clap::ValueEnum;
use foodflow::intelligence::{DailyProgress, MacroProgress};
use foodflow::models::{NutritionPlan, UserPhysicalData};
use serde::Serialize;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for a terminal
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the three plans for a profile
pub fn display_plans(user: &UserPhysicalData, plans: &[NutritionPlan]) {
    println!(
        "\nNutrition plans for {} {}y, {} kg, {} cm, {} activity, goal: {}",
        user.sex, user.age, user.weight_kg, user.height_cm, user.activity_level, user.goal
    );
    println!("{}", "=".repeat(72));
    println!(
        "{:<16} {:>9} {:>12} {:>10} {:>8}",
        "Plan", "Calories", "Protein (g)", "Carbs (g)", "Fat (g)"
    );
    println!("{}", "-".repeat(72));
    for plan in plans {
        println!(
            "{:<16} {:>9} {:>12} {:>10} {:>8}",
            plan.label, plan.calories, plan.protein, plan.carbs, plan.fat
        );
    }
    println!("{}", "=".repeat(72));
    for plan in plans {
        println!("{}: {}", plan.label, plan.description);
    }
}

/// Display a day's progress against a plan
pub fn display_progress(progress: &DailyProgress, plan: &NutritionPlan) {
    println!(
        "\nProgress for {} against the {} plan ({} meals logged)",
        progress.date, plan.label, progress.meal_count
    );
    println!("{}", "=".repeat(72));
    println!(
        "{:<10} {:>10} {:>10} {:>8} {:>11}",
        "", "Consumed", "Goal", "Percent", "Remaining"
    );
    println!("{}", "-".repeat(72));
    display_row("Calories", &progress.calories);
    display_row("Protein", &progress.protein);
    display_row("Carbs", &progress.carbs);
    display_row("Fat", &progress.fat);
    println!("{}", "=".repeat(72));

    if progress.any_over_goal() {
        println!("Over goal on at least one target.");
    }
}

fn display_row(name: &str, row: &MacroProgress) {
    let marker = if row.over_goal { " (over)" } else { "" };
    println!(
        "{name:<10} {:>10.1} {:>10.0} {:>7}% {:>11.1}{marker}",
        row.consumed, row.goal, row.percent, row.remaining
    );
}

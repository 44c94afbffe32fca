// ABOUTME: Daily intake progress against a chosen nutrition plan
// ABOUTME: Percent-of-goal, over-goal detection, and per-macro daily progress reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

use chrono::NaiveDate;
use foodflow_core::models::{DailyNutrition, NutritionPlan, PlanIntensity};
use serde::{Deserialize, Serialize};

/// Percentage of a goal reached, rounded and capped at 100
///
/// A zero or negative goal reports 0 rather than dividing by it.
#[must_use]
pub fn macro_progress(consumed: f64, goal: f64) -> u32 {
    if goal <= 0.0 {
        return 0;
    }
    // saturating cast: negative intake reports 0
    ((consumed / goal) * 100.0).round().min(100.0) as u32
}

/// Whether intake went past the goal
#[must_use]
pub fn is_over_goal(consumed: f64, goal: f64) -> bool {
    consumed > goal
}

/// Progress of a single quantity (calories or one macro)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroProgress {
    /// Amount consumed so far
    pub consumed: f64,
    /// Plan target
    pub goal: f64,
    /// Percent of target, capped at 100
    pub percent: u32,
    /// Consumption exceeded the target
    pub over_goal: bool,
    /// Amount left before reaching the target, never negative
    pub remaining: f64,
}

impl MacroProgress {
    /// Compare consumption with a target
    #[must_use]
    pub fn new(consumed: f64, goal: f64) -> Self {
        Self {
            consumed,
            goal,
            percent: macro_progress(consumed, goal),
            over_goal: is_over_goal(consumed, goal),
            remaining: (goal - consumed).max(0.0),
        }
    }
}

/// A day's intake measured against one plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyProgress {
    /// Calendar day
    pub date: NaiveDate,
    /// Plan the day is measured against
    pub plan: PlanIntensity,
    /// Number of meals logged
    pub meal_count: usize,
    /// Calories
    pub calories: MacroProgress,
    /// Protein
    pub protein: MacroProgress,
    /// Carbohydrates
    pub carbs: MacroProgress,
    /// Fat
    pub fat: MacroProgress,
}

impl DailyProgress {
    /// Whether any tracked quantity went past its target
    #[must_use]
    pub const fn any_over_goal(&self) -> bool {
        self.calories.over_goal || self.protein.over_goal || self.carbs.over_goal || self.fat.over_goal
    }
}

/// Build the progress report of a day against a plan
#[must_use]
pub fn daily_progress(day: &DailyNutrition, plan: &NutritionPlan) -> DailyProgress {
    DailyProgress {
        date: day.date,
        plan: plan.name,
        meal_count: day.meals.len(),
        calories: MacroProgress::new(day.calories, f64::from(plan.calories)),
        protein: MacroProgress::new(day.protein, f64::from(plan.protein)),
        carbs: MacroProgress::new(day.carbs, f64::from(plan.carbs)),
        fat: MacroProgress::new(day.fat, f64::from(plan.fat)),
    }
}

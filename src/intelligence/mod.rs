// ABOUTME: Nutrition intelligence for FoodFlow
// ABOUTME: Plan generation pipeline and daily intake progress tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

//! # Intelligence Module
//!
//! Turns a physical profile into three calorie and macronutrient plans and
//! measures logged intake against the plan the user picked.

/// BMR, TDEE, calorie adjustment and macro split
pub mod nutrition_calculator;
/// Percent-of-goal tracking for a day of meals
pub mod progress;

pub use nutrition_calculator::{
    activity_factor, adjust_calories, calculate_bmr, calculate_macros, calculate_tdee,
    calorie_adjustment, clamp_calories, fat_share, generate_nutrition_plans,
    generate_nutrition_plans_with_config, generate_plan, plan_description, plan_label,
    protein_per_kg,
};
pub use progress::{daily_progress, is_over_goal, macro_progress, DailyProgress, MacroProgress};

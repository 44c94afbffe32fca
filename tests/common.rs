// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, profile builders, and meal entry helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `foodflow`

use std::env;
use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use foodflow::models::{ActivityLevel, MealEntry, MealType, Sex, UserGoal, UserPhysicalData};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("ERROR") => Level::ERROR,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a profile
pub const fn profile(
    sex: Sex,
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    activity_level: ActivityLevel,
    goal: UserGoal,
) -> UserPhysicalData {
    UserPhysicalData {
        sex,
        age,
        weight_kg,
        height_cm,
        activity_level,
        goal,
    }
}

/// Male, 30 years, 80 kg, 180 cm, moderate activity, maintain (TDEE 2759)
pub const fn male_maintain() -> UserPhysicalData {
    profile(Sex::Male, 30, 80.0, 180.0, ActivityLevel::Moderate, UserGoal::Maintain)
}

/// Female, 25 years, 60 kg, 165 cm, sedentary, lose (TDEE 1614.3)
pub const fn female_lose() -> UserPhysicalData {
    profile(Sex::Female, 25, 60.0, 165.0, ActivityLevel::Sedentary, UserGoal::Lose)
}

/// Same body as `male_maintain` with another goal
pub const fn male_with_goal(goal: UserGoal) -> UserPhysicalData {
    profile(Sex::Male, 30, 80.0, 180.0, ActivityLevel::Moderate, goal)
}

/// UTC timestamp on 2025-03-04 at the given hour
pub fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 4, hour, 0, 0).unwrap()
}

/// Meal entry with explicit macros
pub fn meal(
    food_name: &str,
    meal_type: MealType,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    logged_at: DateTime<Utc>,
) -> MealEntry {
    MealEntry {
        food_name: food_name.to_owned(),
        meal_type,
        quantity_g: 100.0,
        calories,
        protein,
        carbs,
        fat,
        logged_at,
    }
}

// ABOUTME: Main library entry point for the FoodFlow nutrition engine
// ABOUTME: Exposes plan generation, intake progress, configuration, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

#![deny(unsafe_code)]

//! # FoodFlow
//!
//! Personalized daily calorie and macronutrient plans.
//!
//! Given a physical profile (sex, age, weight, height, activity level, goal)
//! the engine estimates basal metabolic rate with the Mifflin-St Jeor
//! equation, scales it into total daily energy expenditure, and derives three
//! plans of increasing intensity: flexible, balanced and aggressive.
//!
//! ## Example Usage
//!
//! ```rust
//! use foodflow::intelligence::generate_nutrition_plans;
//! use foodflow::models::{ActivityLevel, Sex, UserGoal, UserPhysicalData};
//!
//! let user = UserPhysicalData {
//!     sex: Sex::Male,
//!     age: 30,
//!     weight_kg: 80.0,
//!     height_cm: 180.0,
//!     activity_level: ActivityLevel::Moderate,
//!     goal: UserGoal::Maintain,
//! };
//!
//! let plans = generate_nutrition_plans(&user)?;
//! assert_eq!(plans[1].calories, 2759);
//! # Ok::<(), foodflow::errors::AppError>(())
//! ```

/// Configuration for the nutrition engine
pub mod config;

/// Plan generation and progress tracking
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use foodflow_core::{constants, errors, models};

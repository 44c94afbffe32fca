// ABOUTME: Configuration management module for the nutrition plan engine
// ABOUTME: Exposes the nutrition tables, safety limits, and their environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors
//! Configuration module for `FoodFlow`
//!
//! - **Nutrition**: BMR coefficients, activity factors, calorie safety limits
//!   and macronutrient floors, with environment variable overrides
//! - **Errors**: Typed configuration errors

/// Configuration error types
pub mod error;
/// Nutrition calculation configuration
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieLimitsConfig, MacronutrientConfig, NutritionConfig,
};

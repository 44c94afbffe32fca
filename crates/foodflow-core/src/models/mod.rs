// ABOUTME: Domain models for the FoodFlow nutrition engine
// ABOUTME: Re-exports profile, nutrition plan, and meal tracking types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

/// Implements `Display` (via `as_str`) and a case-insensitive `FromStr` for a
/// closed enum. Unknown values fail with `ErrorCode::InvalidFormat`.
macro_rules! impl_display_from_str {
    ($ty:ty, $kind:literal, [$($text:literal => $variant:expr),+ $(,)?]) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::errors::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    other => Err($crate::errors::AppError::invalid_format(format!(
                        concat!("Unknown ", $kind, ": {}"),
                        other
                    ))),
                }
            }
        }
    };
}

/// Physical profile supplied at onboarding
pub mod profile;

/// Nutrition plans, meal entries and daily intake
pub mod nutrition;

pub use nutrition::{
    DailyNutrition, MacroSplit, MealEntry, MealType, NutritionPlan, PlanIntensity,
};
pub use profile::{ActivityLevel, Sex, UserGoal, UserPhysicalData};

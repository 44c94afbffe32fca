// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, calorie safety limits, and macro floors for plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. Values that operators may tune at
//! runtime are only the *defaults* here; the live values come from the main
//! crate's `NutritionConfig`.

/// Atwater energy densities (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Daily calorie safety limits applied after the goal adjustment
pub mod calorie_limits {
    /// Minimum daily calories for male profiles
    pub const MALE_MIN_KCAL: u32 = 1500;
    /// Minimum daily calories for female and other profiles
    pub const FEMALE_MIN_KCAL: u32 = 1200;
    /// Maximum daily calories for every profile
    pub const MAX_KCAL: u32 = 6000;
}

/// Macronutrient floors
pub mod macros {
    /// Minimum daily carbohydrates (grams), avoids unintended ketosis
    pub const MIN_CARBS_G: f64 = 100.0;
}

/// Mifflin-St Jeor coefficients (Mifflin et al. 1990, DOI: 10.1093/ajcn/51.2.241)
pub mod mifflin_st_jeor {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant, also used for `Sex::Other`
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity multipliers for TDEE (Harris-Benedict activity factors)
pub mod activity_factors {
    /// Office work, little exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-2x/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5x/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7x/week
    pub const ACTIVE: f64 = 1.725;
    /// Athlete, training twice a day
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line tool
    pub const FOODFLOW_CLI: &str = "foodflow-cli";
}

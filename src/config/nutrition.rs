// ABOUTME: Nutrition configuration for plan generation
// ABOUTME: Configures BMR coefficients, activity factors, calorie safety limits, and macro floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

//! Nutrition Plan Configuration
//!
//! Immutable lookup tables used by the nutrition calculator. Defaults hold the
//! published values; operators can override the safety limits and activity
//! factors through environment variables:
//!
//! ```bash
//! export FOODFLOW_MIN_CALORIES_MALE=1500
//! export FOODFLOW_MIN_CALORIES_FEMALE=1200
//! export FOODFLOW_MAX_CALORIES=6000
//! export FOODFLOW_MIN_CARBS_G=100
//! export FOODFLOW_ACTIVITY_FACTOR_MODERATE=1.55
//! ```
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: Harris-Benedict activity multipliers

use crate::config::error::ConfigError;
use foodflow_core::constants::{activity_factors, calorie_limits, energy, macros, mifflin_st_jeor};
use foodflow_core::models::{ActivityLevel, Sex};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Environment variable names understood by [`NutritionConfig::load`]
pub mod env_vars {
    /// Minimum daily calories for male profiles
    pub const MIN_CALORIES_MALE: &str = "FOODFLOW_MIN_CALORIES_MALE";
    /// Minimum daily calories for female and other profiles
    pub const MIN_CALORIES_FEMALE: &str = "FOODFLOW_MIN_CALORIES_FEMALE";
    /// Maximum daily calories
    pub const MAX_CALORIES: &str = "FOODFLOW_MAX_CALORIES";
    /// Carbohydrate floor (grams)
    pub const MIN_CARBS_G: &str = "FOODFLOW_MIN_CARBS_G";
    /// Sedentary multiplier
    pub const ACTIVITY_FACTOR_SEDENTARY: &str = "FOODFLOW_ACTIVITY_FACTOR_SEDENTARY";
    /// Light activity multiplier
    pub const ACTIVITY_FACTOR_LIGHT: &str = "FOODFLOW_ACTIVITY_FACTOR_LIGHT";
    /// Moderate activity multiplier
    pub const ACTIVITY_FACTOR_MODERATE: &str = "FOODFLOW_ACTIVITY_FACTOR_MODERATE";
    /// Active multiplier
    pub const ACTIVITY_FACTOR_ACTIVE: &str = "FOODFLOW_ACTIVITY_FACTOR_ACTIVE";
    /// Very active multiplier
    pub const ACTIVITY_FACTOR_VERY_ACTIVE: &str = "FOODFLOW_ACTIVITY_FACTOR_VERY_ACTIVE";
}

/// Nutrition Plan Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Daily calorie floor and ceiling
    pub calorie_limits: CalorieLimitsConfig,
    /// Energy densities and macro floors
    pub macronutrients: MacronutrientConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161), also applied to `Sex::Other`
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant of the equation
    #[must_use]
    pub const fn constant_for(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.msj_male_constant,
            Sex::Female | Sex::Other => self.msj_female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Office work, little exercise: 1.2
    pub sedentary: f64,
    /// Light exercise 1-2x/week: 1.375
    pub light: f64,
    /// Moderate exercise 3-5x/week: 1.55
    pub moderate: f64,
    /// Intense exercise 6-7x/week: 1.725
    pub active: f64,
    /// Athlete, training twice a day: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
        }
    }
}

/// Daily calorie safety limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieLimitsConfig {
    /// Floor for male profiles (kcal)
    pub male_min_kcal: u32,
    /// Floor for female and other profiles (kcal)
    pub female_min_kcal: u32,
    /// Ceiling for every profile (kcal)
    pub max_kcal: u32,
}

impl CalorieLimitsConfig {
    /// Calorie floor for a sex
    #[must_use]
    pub const fn min_for(&self, sex: Sex) -> u32 {
        match sex {
            Sex::Male => self.male_min_kcal,
            Sex::Female | Sex::Other => self.female_min_kcal,
        }
    }
}

impl Default for CalorieLimitsConfig {
    fn default() -> Self {
        Self {
            male_min_kcal: calorie_limits::MALE_MIN_KCAL,
            female_min_kcal: calorie_limits::FEMALE_MIN_KCAL,
            max_kcal: calorie_limits::MAX_KCAL,
        }
    }
}

/// Energy densities and macronutrient floors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein energy density (kcal/g): 4
    pub protein_kcal_per_g: f64,
    /// Carbohydrate energy density (kcal/g): 4
    pub carbs_kcal_per_g: f64,
    /// Fat energy density (kcal/g): 9
    pub fat_kcal_per_g: f64,
    /// Carbohydrate floor (g): 100
    pub min_carbs_g: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_kcal_per_g: energy::PROTEIN_KCAL_PER_G,
            carbs_kcal_per_g: energy::CARBS_KCAL_PER_G,
            fat_kcal_per_g: energy::FAT_KCAL_PER_G,
            min_carbs_g: macros::MIN_CARBS_G,
        }
    }
}

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once per process; falls back to defaults when the environment
    /// holds invalid overrides.
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Nutrition configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Overrides may only tighten the published safety limits: calorie floors
    /// and the carbohydrate floor can be raised, the calorie ceiling lowered.
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is looser than the published one, limits are
    /// inverted, a factor or density is not finite, factors are not
    /// increasing, or an energy density is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.calorie_limits;
        if limits.male_min_kcal < calorie_limits::MALE_MIN_KCAL
            || limits.female_min_kcal < calorie_limits::FEMALE_MIN_KCAL
        {
            return Err(ConfigError::ValueOutOfRange(
                "minimum calories must not be below 1500 (male) / 1200 (female, other)",
            ));
        }
        if limits.max_kcal > calorie_limits::MAX_KCAL {
            return Err(ConfigError::ValueOutOfRange(
                "maximum calories must not exceed 6000",
            ));
        }
        if limits.male_min_kcal >= limits.max_kcal || limits.female_min_kcal >= limits.max_kcal {
            return Err(ConfigError::InvalidRange(
                "minimum calories must be < maximum calories",
            ));
        }

        let factors = ActivityLevel::ALL.map(|level| self.activity_factors.factor_for(level));
        if factors.iter().any(|factor| !factor.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be finite numbers",
            ));
        }
        if factors[0] < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sedentary activity factor must be >= 1.0",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must increase from sedentary to very_active",
            ));
        }

        let macro_config = &self.macronutrients;
        if !(macro_config.min_carbs_g.is_finite() && macro_config.min_carbs_g >= macros::MIN_CARBS_G)
        {
            return Err(ConfigError::ValueOutOfRange(
                "carbohydrate floor must be a number >= 100 g",
            ));
        }
        if [
            macro_config.protein_kcal_per_g,
            macro_config.carbs_kcal_per_g,
            macro_config.fat_kcal_per_g,
        ]
        .iter()
        .any(|density| !(density.is_finite() && *density > 0.0))
        {
            return Err(ConfigError::ValueOutOfRange(
                "energy densities must be positive finite numbers",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override(env_vars::MIN_CALORIES_MALE)? {
            self.calorie_limits.male_min_kcal = val;
        }
        if let Some(val) = env_override(env_vars::MIN_CALORIES_FEMALE)? {
            self.calorie_limits.female_min_kcal = val;
        }
        if let Some(val) = env_override(env_vars::MAX_CALORIES)? {
            self.calorie_limits.max_kcal = val;
        }
        if let Some(val) = env_override(env_vars::MIN_CARBS_G)? {
            self.macronutrients.min_carbs_g = val;
        }

        let factors = &mut self.activity_factors;
        for (name, slot) in [
            (env_vars::ACTIVITY_FACTOR_SEDENTARY, &mut factors.sedentary),
            (env_vars::ACTIVITY_FACTOR_LIGHT, &mut factors.light),
            (env_vars::ACTIVITY_FACTOR_MODERATE, &mut factors.moderate),
            (env_vars::ACTIVITY_FACTOR_ACTIVE, &mut factors.active),
            (env_vars::ACTIVITY_FACTOR_VERY_ACTIVE, &mut factors.very_active),
        ] {
            if let Some(val) = env_override(name)? {
                *slot = val;
            }
        }

        Ok(self)
    }
}

/// Read and parse an optional environment variable
fn env_override<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {val}"))),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_tables() {
        let config = NutritionConfig::default();
        assert!(
            (config.activity_factors.factor_for(ActivityLevel::Moderate) - 1.55).abs()
                < f64::EPSILON
        );
        assert!((config.bmr.constant_for(Sex::Other) - -161.0).abs() < f64::EPSILON);
        assert_eq!(config.calorie_limits.min_for(Sex::Male), 1500);
        assert_eq!(config.calorie_limits.min_for(Sex::Female), 1200);
        assert_eq!(config.calorie_limits.min_for(Sex::Other), 1200);
        assert_eq!(config.calorie_limits.max_kcal, 6000);
        assert!((config.macronutrients.min_carbs_g - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let mut config = NutritionConfig::default();
        config.calorie_limits.male_min_kcal = 7000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_increasing_factors() {
        let mut config = NutritionConfig::default();
        config.activity_factors.active = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_carb_floor() {
        let mut config = NutritionConfig::default();
        config.macronutrients.min_carbs_g = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let mut config = NutritionConfig::default();
        config.activity_factors.active = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = NutritionConfig::default();
        config.activity_factors.very_active = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = NutritionConfig::default();
        config.macronutrients.fat_kcal_per_g = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_looser_safety_limits() {
        let mut config = NutritionConfig::default();
        config.calorie_limits.female_min_kcal = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = NutritionConfig::default();
        config.calorie_limits.max_kcal = 6001;
        assert!(config.validate().is_err());

        let mut config = NutritionConfig::default();
        config.macronutrients.min_carbs_g = 99.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_tighter_limits() {
        let mut config = NutritionConfig::default();
        config.calorie_limits.female_min_kcal = 1400;
        config.calorie_limits.max_kcal = 4500;
        config.macronutrients.min_carbs_g = 130.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_error_converts_to_app_error() {
        use foodflow_core::errors::{AppError, ErrorCode};

        let error: AppError =
            ConfigError::Parse("Invalid FOODFLOW_MAX_CALORIES: lots".into()).into();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("FOODFLOW_MAX_CALORIES"));
    }
}

// ABOUTME: Nutrition plan calculator using the Mifflin-St Jeor equation and activity factors
// ABOUTME: BMR, TDEE, goal adjustment, calorie safety clamp, macro split, and the three-plan assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

//! Nutrition Plan Calculator
//!
//! Converts a physical profile into three nutrition plans (flexible, balanced,
//! aggressive). The pipeline is linear and stateless:
//!
//! ```text
//! profile -> BMR -> TDEE -> for each intensity:
//!     adjusted kcal -> clamped kcal -> macro split -> plan
//! ```
//!
//! TDEE is computed once and carried unrounded into every intensity branch;
//! only the adjusted calories are rounded.
//!
//! # Rounding
//!
//! All roundings use [`f64::round`] (half away from zero).
//!
//! # Carbohydrate floor
//!
//! Carbohydrates are the residual after protein and fat. When the residual is
//! below the configured floor (100 g) carbs are raised to the floor without
//! reducing protein or fat, so the macro calories of such a plan exceed its
//! `calories` target. This keeps the published plan numbers stable.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieLimitsConfig, MacronutrientConfig, NutritionConfig,
};
use foodflow_core::errors::AppResult;
use foodflow_core::models::{
    ActivityLevel, MacroSplit, NutritionPlan, PlanIntensity, Sex, UserGoal, UserPhysicalData,
};
use tracing::{debug, warn};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + constant
/// - Male: +5
/// - Female and other: -161
///
/// Total over its inputs: implausible profiles yield implausible (possibly
/// negative) values rather than an error.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32, config: &BmrConfig) -> f64 {
    // Fused and grouped right to left; may differ from left-to-right evaluation
    // by one ulp, which only shows up on an exact .5 tie when rounding calories.
    config.msj_weight_coef.mul_add(
        weight_kg,
        config.msj_height_coef.mul_add(
            height_cm,
            config
                .msj_age_coef
                .mul_add(f64::from(age), config.constant_for(sex)),
        ),
    )
}

/// Activity multiplier for a level
///
/// Defaults: sedentary 1.2, light 1.375, moderate 1.55, active 1.725,
/// very active 1.9.
#[must_use]
pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    config.factor_for(level)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor. The result is not rounded.
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Fractional calorie adjustment for a goal and intensity
///
/// | intensity  | lose | maintain | gain |
/// |------------|------|----------|------|
/// | flexible   | -10% | 0%       | +10% |
/// | balanced   | -20% | 0%       | +15% |
/// | aggressive | -30% | 0%       | +25% |
#[must_use]
pub const fn calorie_adjustment(goal: UserGoal, intensity: PlanIntensity) -> f64 {
    match (goal, intensity) {
        (UserGoal::Maintain, _) => 0.0,
        (UserGoal::Lose, PlanIntensity::Flexible) => -0.10,
        (UserGoal::Lose, PlanIntensity::Balanced) => -0.20,
        (UserGoal::Lose, PlanIntensity::Aggressive) => -0.30,
        (UserGoal::Gain, PlanIntensity::Flexible) => 0.10,
        (UserGoal::Gain, PlanIntensity::Balanced) => 0.15,
        (UserGoal::Gain, PlanIntensity::Aggressive) => 0.25,
    }
}

/// Protein density (g per kg of body weight) for a goal and intensity
///
/// Weight loss gets more protein to preserve lean mass; maintenance uses a
/// constant 1.6 g/kg.
#[must_use]
pub const fn protein_per_kg(goal: UserGoal, intensity: PlanIntensity) -> f64 {
    match (goal, intensity) {
        (UserGoal::Maintain, _) | (UserGoal::Gain, PlanIntensity::Flexible) => 1.6,
        (UserGoal::Lose, PlanIntensity::Flexible) => 1.8,
        (UserGoal::Lose | UserGoal::Gain, PlanIntensity::Balanced) => 2.0,
        (UserGoal::Lose, PlanIntensity::Aggressive) => 2.5,
        (UserGoal::Gain, PlanIntensity::Aggressive) => 2.2,
    }
}

/// Share of total calories allocated to fat, by intensity only
#[must_use]
pub const fn fat_share(intensity: PlanIntensity) -> f64 {
    match intensity {
        PlanIntensity::Aggressive => 0.20,
        PlanIntensity::Flexible => 0.25,
        PlanIntensity::Balanced => 0.30,
    }
}

/// Display name of an intensity tier
#[must_use]
pub const fn plan_label(intensity: PlanIntensity) -> &'static str {
    match intensity {
        PlanIntensity::Flexible => "More Flexible",
        PlanIntensity::Balanced => "Balanced",
        PlanIntensity::Aggressive => "More Aggressive",
    }
}

/// Canned explanation shown under a plan
#[must_use]
pub const fn plan_description(goal: UserGoal, intensity: PlanIntensity) -> &'static str {
    match (intensity, goal) {
        (PlanIntensity::Flexible, UserGoal::Lose) => "Gradual, sustainable loss (~0.5 kg/week)",
        (PlanIntensity::Flexible, UserGoal::Gain) => "Slow, lean muscle gain",
        (PlanIntensity::Flexible, UserGoal::Maintain) => "Comfortable maintenance",
        (PlanIntensity::Balanced, UserGoal::Lose) => "Moderate loss pace (~0.5-0.75 kg/week)",
        (PlanIntensity::Balanced, UserGoal::Gain) => "Moderate gain with minimal fat",
        (PlanIntensity::Balanced, UserGoal::Maintain) => "Perfect balance",
        (PlanIntensity::Aggressive, UserGoal::Lose) => "Accelerated loss (~0.75-1 kg/week)",
        (PlanIntensity::Aggressive, UserGoal::Gain) => "Fast gain (may add some fat)",
        (PlanIntensity::Aggressive, UserGoal::Maintain) => "Strict maintenance",
    }
}

/// Apply the goal/intensity adjustment to TDEE
///
/// Formula: round(TDEE x (1 + adjustment))
#[must_use]
pub fn adjust_calories(tdee: f64, goal: UserGoal, intensity: PlanIntensity) -> i64 {
    (tdee * (1.0 + calorie_adjustment(goal, intensity))).round() as i64
}

/// Clamp calories into the safety range for a sex
///
/// Returns max(floor, min(ceiling, calories)); out-of-range input is
/// corrected silently.
#[must_use]
pub fn clamp_calories(calories: i64, sex: Sex, limits: &CalorieLimitsConfig) -> u32 {
    let floor = i64::from(limits.min_for(sex));
    let ceiling = i64::from(limits.max_kcal);
    let clamped = floor.max(ceiling.min(calories));
    u32::try_from(clamped).unwrap_or(limits.max_kcal)
}

/// Split a calorie target into protein, fat and carbohydrate grams
///
/// 1. protein = round(density x weight)
/// 2. fat = round(calories x fat share / 9)
/// 3. carbs = round((calories - protein kcal - fat kcal) / 4), raised to the
///    carbohydrate floor when below it
///
/// Fat kcal in step 3 is the unrounded share, not `fat x 9`.
#[must_use]
pub fn calculate_macros(
    calories: u32,
    weight_kg: f64,
    goal: UserGoal,
    intensity: PlanIntensity,
    config: &MacronutrientConfig,
) -> MacroSplit {
    let calories = f64::from(calories);

    let protein_g = (protein_per_kg(goal, intensity) * weight_kg).round();
    let protein_kcal = protein_g * config.protein_kcal_per_g;

    let fat_kcal = calories * fat_share(intensity);
    let fat_g = (fat_kcal / config.fat_kcal_per_g).round();

    let residual_carbs_g = ((calories - protein_kcal - fat_kcal) / config.carbs_kcal_per_g).round();
    let carbs_g = if residual_carbs_g < config.min_carbs_g {
        warn!(
            residual_carbs_g,
            floor_g = config.min_carbs_g,
            %intensity,
            "Carbohydrate floor applied; macro calories exceed plan target"
        );
        config.min_carbs_g
    } else {
        residual_carbs_g
    };

    MacroSplit {
        protein: to_grams(protein_g),
        carbs: to_grams(carbs_g),
        fat: to_grams(fat_g),
    }
}

/// Whole grams; saturating, so negative or NaN values become 0
fn to_grams(value: f64) -> u32 {
    value.round() as u32
}

/// Generate the three nutrition plans using the global configuration
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if the profile has a zero age or a
/// non-positive weight or height
pub fn generate_nutrition_plans(user: &UserPhysicalData) -> AppResult<[NutritionPlan; 3]> {
    generate_nutrition_plans_with_config(user, NutritionConfig::global())
}

/// Generate the three nutrition plans with an explicit configuration
///
/// Plans are returned in the fixed order flexible, balanced, aggressive.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if the profile has a zero age or a
/// non-positive weight or height
pub fn generate_nutrition_plans_with_config(
    user: &UserPhysicalData,
    config: &NutritionConfig,
) -> AppResult<[NutritionPlan; 3]> {
    user.validate()?;

    let bmr = calculate_bmr(
        user.sex,
        user.weight_kg,
        user.height_cm,
        user.age,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, activity_factor(user.activity_level, &config.activity_factors));

    debug!(
        sex = %user.sex,
        activity_level = %user.activity_level,
        goal = %user.goal,
        bmr,
        tdee,
        "Computed energy expenditure"
    );

    Ok(PlanIntensity::ALL.map(|intensity| build_plan(user, tdee, intensity, config)))
}

/// Look up a single plan of the three
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if the profile is invalid
pub fn generate_plan(
    user: &UserPhysicalData,
    intensity: PlanIntensity,
    config: &NutritionConfig,
) -> AppResult<NutritionPlan> {
    let [flexible, balanced, aggressive] = generate_nutrition_plans_with_config(user, config)?;
    Ok(match intensity {
        PlanIntensity::Flexible => flexible,
        PlanIntensity::Balanced => balanced,
        PlanIntensity::Aggressive => aggressive,
    })
}

fn build_plan(
    user: &UserPhysicalData,
    tdee: f64,
    intensity: PlanIntensity,
    config: &NutritionConfig,
) -> NutritionPlan {
    let adjusted = adjust_calories(tdee, user.goal, intensity);
    let calories = clamp_calories(adjusted, user.sex, &config.calorie_limits);
    let macros = calculate_macros(
        calories,
        user.weight_kg,
        user.goal,
        intensity,
        &config.macronutrients,
    );

    debug!(
        %intensity,
        adjusted,
        calories,
        protein = macros.protein,
        carbs = macros.carbs,
        fat = macros.fat,
        "Assembled nutrition plan"
    );

    NutritionPlan {
        name: intensity,
        label: plan_label(intensity).to_owned(),
        calories,
        protein: macros.protein,
        carbs: macros.carbs,
        fat: macros.fat,
        description: plan_description(user.goal, intensity).to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_and_female_constants_differ_by_166() {
        let config = BmrConfig::default();
        let male = calculate_bmr(Sex::Male, 70.0, 175.0, 40, &config);
        let female = calculate_bmr(Sex::Female, 70.0, 175.0, 40, &config);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_other_uses_female_equation() {
        let config = BmrConfig::default();
        let other = calculate_bmr(Sex::Other, 55.0, 160.0, 33, &config);
        let female = calculate_bmr(Sex::Female, 55.0, 160.0, 33, &config);
        assert!((other - female).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_is_total_for_implausible_input() {
        let bmr = calculate_bmr(Sex::Female, 1.0, 1.0, 110, &BmrConfig::default());
        assert!(bmr < 0.0);
    }

    #[test]
    fn test_adjustment_table() {
        assert!((calorie_adjustment(UserGoal::Lose, PlanIntensity::Aggressive) + 0.30).abs() < f64::EPSILON);
        assert!((calorie_adjustment(UserGoal::Gain, PlanIntensity::Balanced) - 0.15).abs() < f64::EPSILON);
        for intensity in PlanIntensity::ALL {
            assert!(calorie_adjustment(UserGoal::Maintain, intensity).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_adjust_calories_rounds_half_away_from_zero() {
        // 2000.5 x 1.0 = 2000.5 -> 2001
        assert_eq!(adjust_calories(2000.5, UserGoal::Maintain, PlanIntensity::Balanced), 2001);
        // 2000 x 0.9 = 1800
        assert_eq!(adjust_calories(2000.0, UserGoal::Lose, PlanIntensity::Flexible), 1800);
    }

    #[test]
    fn test_clamp_calories_bounds() {
        let limits = CalorieLimitsConfig::default();
        assert_eq!(clamp_calories(900, Sex::Male, &limits), 1500);
        assert_eq!(clamp_calories(900, Sex::Female, &limits), 1200);
        assert_eq!(clamp_calories(900, Sex::Other, &limits), 1200);
        assert_eq!(clamp_calories(-400, Sex::Female, &limits), 1200);
        assert_eq!(clamp_calories(7200, Sex::Male, &limits), 6000);
        assert_eq!(clamp_calories(2345, Sex::Male, &limits), 2345);
    }

    #[test]
    fn test_macros_without_floor() {
        // protein 128 g, fat round(689.75 / 9) = 77 g,
        // carbs round((2759 - 512 - 689.75) / 4) = round(389.3125) = 389 g
        let split = calculate_macros(
            2759,
            80.0,
            UserGoal::Maintain,
            PlanIntensity::Flexible,
            &MacronutrientConfig::default(),
        );
        assert_eq!(
            split,
            MacroSplit {
                protein: 128,
                carbs: 389,
                fat: 77
            }
        );
    }

    #[test]
    fn test_macros_floor_overrides_residual() {
        // protein 150 g (600 kcal), fat kcal 240 -> residual 360 kcal = 90 g < 100 g
        let split = calculate_macros(
            1200,
            60.0,
            UserGoal::Lose,
            PlanIntensity::Aggressive,
            &MacronutrientConfig::default(),
        );
        assert_eq!(split.protein, 150);
        assert_eq!(split.fat, 27);
        assert_eq!(split.carbs, 100);
    }

    #[test]
    fn test_macros_negative_residual_still_floored() {
        // 200 kg at 2.5 g/kg = 500 g protein = 2000 kcal, already above 1200 kcal
        let split = calculate_macros(
            1200,
            200.0,
            UserGoal::Lose,
            PlanIntensity::Aggressive,
            &MacronutrientConfig::default(),
        );
        assert_eq!(split.protein, 500);
        assert_eq!(split.carbs, 100);
    }

    #[test]
    fn test_descriptions_cover_every_goal_and_intensity() {
        for goal in UserGoal::ALL {
            for intensity in PlanIntensity::ALL {
                assert!(!plan_description(goal, intensity).is_empty());
            }
        }
    }

    #[test]
    fn test_generate_plan_picks_requested_tier() {
        let user = UserPhysicalData {
            sex: Sex::Male,
            age: 30,
            weight_kg: 80.0,
            height_cm: 180.0,
            activity_level: ActivityLevel::Moderate,
            goal: UserGoal::Lose,
        };
        let plan = generate_plan(&user, PlanIntensity::Balanced, &NutritionConfig::default()).unwrap();
        assert_eq!(plan.name, PlanIntensity::Balanced);
        assert_eq!(plan.label, "Balanced");
    }
}

// ABOUTME: Nutrition plan and intake tracking models
// ABOUTME: PlanIntensity, MacroSplit, NutritionPlan, MealType, MealEntry, and DailyNutrition definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};

/// Intensity tier of a generated plan
///
/// Also the stable identity and sort key of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PlanIntensity {
    /// Smallest adjustment from TDEE
    Flexible,
    /// Moderate adjustment (recommended)
    Balanced,
    /// Largest adjustment from TDEE
    Aggressive,
}

impl PlanIntensity {
    /// Output order of generated plans
    pub const ALL: [Self; 3] = [Self::Flexible, Self::Balanced, Self::Aggressive];

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flexible => "flexible",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }
}

impl_display_from_str!(PlanIntensity, "plan intensity", [
    "flexible" => PlanIntensity::Flexible,
    "balanced" => PlanIntensity::Balanced,
    "aggressive" => PlanIntensity::Aggressive,
]);

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MacroSplit {
    /// Protein (g)
    pub protein: u32,
    /// Carbohydrates (g)
    pub carbs: u32,
    /// Fat (g)
    pub fat: u32,
}

impl MacroSplit {
    /// Energy of the split using Atwater factors (4/4/9 kcal per gram)
    #[must_use]
    pub fn kcal(&self) -> f64 {
        f64::from(self.fat).mul_add(
            FAT_KCAL_PER_G,
            f64::from(self.protein)
                .mul_add(PROTEIN_KCAL_PER_G, f64::from(self.carbs) * CARBS_KCAL_PER_G),
        )
    }
}

/// One of the three generated nutrition plans
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionPlan {
    /// Intensity tier, also the plan's identity
    pub name: PlanIntensity,
    /// Human-readable tier name
    pub label: String,
    /// Daily calorie target (kcal), always within the safety limits
    pub calories: u32,
    /// Protein (g)
    pub protein: u32,
    /// Carbohydrates (g)
    pub carbs: u32,
    /// Fat (g)
    pub fat: u32,
    /// Goal- and intensity-specific explanation
    pub description: String,
}

impl NutritionPlan {
    /// Macro grams of this plan
    #[must_use]
    pub const fn macros(&self) -> MacroSplit {
        MacroSplit {
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    /// Calories implied by the macro grams
    ///
    /// Can exceed `calories` when the carbohydrate floor was applied.
    #[must_use]
    pub fn macro_kcal(&self) -> f64 {
        self.macros().kcal()
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl_display_from_str!(MealType, "meal type", [
    "breakfast" => MealType::Breakfast,
    "lunch" => MealType::Lunch,
    "dinner" => MealType::Dinner,
    "snack" => MealType::Snack,
]);

/// A logged food item with its estimated nutrition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Food name as entered or transcribed
    pub food_name: String,
    /// Meal slot
    pub meal_type: MealType,
    /// Quantity consumed (g)
    pub quantity_g: f64,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
}

/// Running intake totals for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyNutrition {
    /// Calendar day (UTC)
    pub date: NaiveDate,
    /// Total calories (kcal)
    pub calories: f64,
    /// Total protein (g)
    pub protein: f64,
    /// Total carbohydrates (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fat: f64,
    /// Meals in logging order
    pub meals: Vec<MealEntry>,
}

impl DailyNutrition {
    /// Empty day
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            meals: Vec::new(),
        }
    }

    /// Build a day from a meal list, keeping only meals logged on `date` (UTC)
    #[must_use]
    pub fn from_meals(date: NaiveDate, meals: impl IntoIterator<Item = MealEntry>) -> Self {
        let mut day = Self::new(date);
        for meal in meals {
            if meal.logged_at.date_naive() == date {
                day.add_meal(meal);
            } else {
                debug!(
                    food = %meal.food_name,
                    logged_at = %meal.logged_at,
                    day = %date,
                    "Skipping meal logged on another day"
                );
            }
        }
        day
    }

    /// Append a meal and add its values to the totals
    pub fn add_meal(&mut self, meal: MealEntry) {
        self.calories += meal.calories;
        self.protein += meal.protein;
        self.carbs += meal.carbs;
        self.fat += meal.fat;
        self.meals.push(meal);
    }

    /// Meals logged in the given slot
    pub fn meals_of_type(&self, meal_type: MealType) -> impl Iterator<Item = &MealEntry> {
        self.meals.iter().filter(move |m| m.meal_type == meal_type)
    }
}

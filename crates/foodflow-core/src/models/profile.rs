// ABOUTME: Physical profile model used as input for nutrition plan generation
// ABOUTME: Sex, ActivityLevel, UserGoal enums and the UserPhysicalData record with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
    /// Other, calculated with the female constant
    Other,
}

impl Sex {
    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Self-reported activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Office work, little exercise
    Sedentary,
    /// Light exercise 1-2x/week
    Light,
    /// Moderate exercise 3-5x/week
    Moderate,
    /// Intense exercise 6-7x/week
    Active,
    /// Athlete, training twice a day
    VeryActive,
}

impl ActivityLevel {
    /// All levels from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

/// Body-weight goal chosen at onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl UserGoal {
    /// Every goal
    pub const ALL: [Self; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl_display_from_str!(Sex, "sex", [
    "male" => Sex::Male,
    "female" => Sex::Female,
    "other" => Sex::Other,
]);

impl_display_from_str!(ActivityLevel, "activity level", [
    "sedentary" => ActivityLevel::Sedentary,
    "light" => ActivityLevel::Light,
    "moderate" => ActivityLevel::Moderate,
    "active" => ActivityLevel::Active,
    "very_active" => ActivityLevel::VeryActive,
    "very-active" => ActivityLevel::VeryActive,
]);

impl_display_from_str!(UserGoal, "goal", [
    "lose" => UserGoal::Lose,
    "maintain" => UserGoal::Maintain,
    "gain" => UserGoal::Gain,
]);

/// Physical profile for a single plan calculation
///
/// Constructed once per calculation and never mutated. Field names follow
/// the `snake_case` JSON form used by callers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserPhysicalData {
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: UserGoal,
}

impl UserPhysicalData {
    /// Reject profiles that would produce physically meaningless plans
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when the age is zero or the weight
    /// or height is not a positive finite number.
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_input("Age must be positive")
                .with_details(json!({ "field": "age", "value": self.age })));
        }
        validate_positive("weight_kg", "Weight", self.weight_kg)?;
        validate_positive("height_cm", "Height", self.height_cm)?;
        Ok(())
    }
}

fn validate_positive(field: &str, label: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(
        AppError::invalid_input(format!("{label} must be a positive number"))
            .with_details(json!({ "field": field, "value": value.to_string() })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn profile() -> UserPhysicalData {
        UserPhysicalData {
            sex: Sex::Female,
            age: 25,
            weight_kg: 60.0,
            height_cm: 165.0,
            activity_level: ActivityLevel::Sedentary,
            goal: UserGoal::Lose,
        }
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" Other ".parse::<Sex>().unwrap(), Sex::Other);
        assert_eq!(
            "very_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!("GAIN".parse::<UserGoal>().unwrap(), UserGoal::Gain);
    }

    #[test]
    fn test_parse_unknown_value_is_format_error() {
        let err = "athletic".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.contains("athletic"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.to_string().parse::<ActivityLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_profile_json_uses_snake_case() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["sex"], "female");
        assert_eq!(json["activity_level"], "sedentary");
        assert_eq!(json["weight_kg"], 60.0);

        let parsed: UserPhysicalData = serde_json::from_str(
            r#"{"sex":"male","age":30,"weight_kg":80,"height_cm":180,
                "activity_level":"very_active","goal":"maintain"}"#,
        )
        .unwrap();
        assert_eq!(parsed.activity_level, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_validate_accepts_typical_profile() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_profiles() {
        let zero_age = UserPhysicalData { age: 0, ..profile() };
        let err = zero_age.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.details.unwrap()["field"], "age");

        let negative_weight = UserPhysicalData {
            weight_kg: -60.0,
            ..profile()
        };
        assert!(negative_weight.validate().is_err());

        let nan_height = UserPhysicalData {
            height_cm: f64::NAN,
            ..profile()
        };
        let err = nan_height.validate().unwrap_err();
        assert_eq!(err.details.unwrap()["field"], "height_cm");
    }
}

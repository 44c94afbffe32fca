// ABOUTME: Input loading helpers for foodflow-cli
// ABOUTME: Builds the physical profile from flags or a JSON file and reads meal logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Args;
use foodflow::errors::AppError;
use foodflow::models::{ActivityLevel, MealEntry, Sex, UserGoal, UserPhysicalData};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Physical profile, given either as individual flags or as a JSON file
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// JSON file holding the whole profile
    #[arg(long, conflicts_with_all = ["sex", "age", "weight_kg", "height_cm", "activity", "goal"])]
    profile: Option<PathBuf>,

    /// Biological sex (male, female, other)
    #[arg(long, required_unless_present = "profile")]
    sex: Option<Sex>,

    /// Age in years
    #[arg(long, required_unless_present = "profile")]
    age: Option<u32>,

    /// Body weight in kilograms
    #[arg(long, required_unless_present = "profile")]
    weight_kg: Option<f64>,

    /// Height in centimetres
    #[arg(long, required_unless_present = "profile")]
    height_cm: Option<f64>,

    /// Activity level (sedentary, light, moderate, active, very_active)
    #[arg(long, required_unless_present = "profile")]
    activity: Option<ActivityLevel>,

    /// Goal (lose, maintain, gain)
    #[arg(long, required_unless_present = "profile")]
    goal: Option<UserGoal>,
}

impl ProfileArgs {
    /// Resolve the profile from the file or the flags
    pub fn resolve(&self) -> Result<UserPhysicalData> {
        if let Some(path) = &self.profile {
            return read_json(path);
        }

        Ok(UserPhysicalData {
            sex: required(self.sex, "--sex")?,
            age: required(self.age, "--age")?,
            weight_kg: required(self.weight_kg, "--weight-kg")?,
            height_cm: required(self.height_cm, "--height-cm")?,
            activity_level: required(self.activity, "--activity")?,
            goal: required(self.goal, "--goal")?,
        })
    }
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| anyhow!(AppError::missing_field(flag)))
}

/// Read the meal log: a JSON array of meal entries
pub fn read_meals(path: &Path) -> Result<Vec<MealEntry>> {
    let meals: Vec<MealEntry> = read_json(path)?;
    debug!(path = %path.display(), count = meals.len(), "Loaded meal log");
    Ok(meals)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))?;
    let value = serde_json::from_str(&raw).map_err(AppError::from)?;
    Ok(value)
}

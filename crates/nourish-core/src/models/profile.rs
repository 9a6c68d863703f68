// ABOUTME: User profile model with gender, activity level, and goal enumerations
// ABOUTME: Parses the dashboard labels into typed enums and rejects unknown values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male gender (+5 Mifflin-St Jeor constant)
    Male,
    /// Female gender (-161 Mifflin-St Jeor constant)
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_configuration(format!(
                "unrecognized gender '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    /// Sedentary (office work, little exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    Lightly,
    /// Moderately active (3-5 days/week)
    Moderately,
    /// Very active (6-7 days/week)
    Very,
    /// Super active (physical job or twice-daily training)
    Super,
}

impl ActivityLevel {
    /// All activity levels from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Lightly,
        Self::Moderately,
        Self::Very,
        Self::Super,
    ];
}

/// Accepts the bare keyword ("Lightly") as well as the full dashboard label
/// ("Lightly Active", "Sedentary (Office)"): only the first word is significant.
impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let keyword = normalized
            .split(|c: char| c.is_whitespace() || c == '(' || c == '_' || c == '-')
            .next()
            .unwrap_or_default();
        match keyword {
            "sedentary" => Ok(Self::Sedentary),
            "lightly" | "light" => Ok(Self::Lightly),
            "moderately" | "moderate" => Ok(Self::Moderately),
            "very" => Ok(Self::Very),
            "super" | "extra" => Ok(Self::Super),
            _ => Err(AppError::invalid_configuration(format!(
                "unrecognized activity level '{}'",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sedentary => "Sedentary",
            Self::Lightly => "Lightly Active",
            Self::Moderately => "Moderately Active",
            Self::Very => "Very Active",
            Self::Super => "Super Active",
        })
    }
}

/// Body composition goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Calorie deficit with high protein
    WeightLoss,
    /// Calorie surplus
    WeightGain,
    /// Moderate surplus with elevated protein
    MuscleGain,
    /// Eat at maintenance
    #[default]
    Maintain,
}

impl Goal {
    /// All goals in declaration order
    pub const ALL: [Self; 4] = [
        Self::WeightLoss,
        Self::WeightGain,
        Self::MuscleGain,
        Self::Maintain,
    ];
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match compact.as_str() {
            "weightloss" | "loss" | "lose" => Ok(Self::WeightLoss),
            "weightgain" | "gain" => Ok(Self::WeightGain),
            "musclegain" | "muscle" => Ok(Self::MuscleGain),
            "maintain" | "maintenance" | "maintainweight" => Ok(Self::Maintain),
            _ => Err(AppError::invalid_configuration(format!(
                "unrecognized goal '{}'",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WeightLoss => "Weight Loss",
            Self::WeightGain => "Weight Gain",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintain => "Maintain",
        })
    }
}

/// Single active user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender used for the BMR constant
    pub gender: Gender,
    /// Height in centimetres
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub weight_kg: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Body composition goal
    pub goal: Goal,
    /// Daily water goal in millilitres
    pub water_goal_ml: u32,
    /// Vegetarian preference used by the meal planner
    #[serde(default)]
    pub vegetarian: bool,
}

/// Profile as persisted, with the onboarding weight kept for progress tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Current profile values
    #[serde(flatten)]
    pub profile: Profile,
    /// Weight recorded at onboarding; absent in documents written before it existed
    #[serde(default)]
    pub start_weight_kg: Option<f64>,
}

impl StoredProfile {
    /// Wrap a freshly onboarded profile, using its weight as the starting point
    #[must_use]
    pub fn onboard(profile: Profile) -> Self {
        let start = profile.weight_kg;
        Self {
            profile,
            start_weight_kg: Some(start),
        }
    }

    /// Onboarding weight, falling back to the current weight
    #[must_use]
    pub fn start_weight(&self) -> f64 {
        self.start_weight_kg.unwrap_or(self.profile.weight_kg)
    }

    /// Change since onboarding (negative means weight lost)
    #[must_use]
    pub fn weight_change(&self) -> f64 {
        self.profile.weight_kg - self.start_weight()
    }
}

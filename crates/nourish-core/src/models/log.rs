// ABOUTME: Append-only log records for food, exercise, water, and weight entries
// ABOUTME: Every record exposes its calendar date so logs can be filtered per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use super::sample::DailySample;
use crate::errors::AppError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Records that belong to a calendar day
pub trait Dated {
    /// Day the record was logged
    fn date(&self) -> NaiveDate;
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Anything between meals
    Snack,
}

impl MealType {
    /// All meal slots in serving order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!(
                "unrecognized meal type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        })
    }
}

/// A dish eaten, with nutrients already scaled by quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Day eaten
    pub date: NaiveDate,
    /// Time logged
    pub time: NaiveTime,
    /// Dish name
    pub dish: String,
    /// Meal slot
    pub meal_type: MealType,
    /// Servings eaten
    pub quantity: f64,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// A workout with its estimated energy cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Day performed
    pub date: NaiveDate,
    /// Time logged
    pub time: NaiveTime,
    /// Activity description
    pub activity: String,
    /// Duration in minutes
    pub duration_min: f64,
    /// Estimated calories burnt (kcal)
    pub calories_burnt: f64,
}

/// A drink with its hydration-adjusted volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    /// Day consumed
    pub date: NaiveDate,
    /// Time logged
    pub time: NaiveTime,
    /// Beverage name
    pub beverage: String,
    /// Raw volume (ml)
    pub volume_ml: f64,
    /// Volume counted toward hydration (ml)
    pub effective_ml: f64,
}

/// A body weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Day weighed
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl Dated for FoodEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ExerciseEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for WaterEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for WeightEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for DailySample {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

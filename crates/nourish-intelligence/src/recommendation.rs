// ABOUTME: Recommendation selector mapping BMI bands to fixed dietary tips
// ABOUTME: Also assembles the daily nutrition plan shown alongside the tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Recommendation Selector
//!
//! A three-way step function over BMI with strict comparisons: exactly 18.5 and
//! exactly 25 both land in the healthy band.

use crate::config::BmiThresholds;
use crate::nutrition_calculator::{calculate_macro_grams, validate_body_metrics};
use nourish_core::constants::advice::{TIP_HEALTHY, TIP_OVERWEIGHT, TIP_UNDERWEIGHT};
use nourish_core::errors::AppResult;
use nourish_core::models::Targets;
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// Below the underweight threshold
    Underweight,
    /// Between the thresholds, inclusive
    Healthy,
    /// Above the overweight threshold
    Overweight,
}

impl BmiCategory {
    /// Fixed tip for this band
    #[must_use]
    pub const fn tip(self) -> &'static str {
        match self {
            Self::Underweight => TIP_UNDERWEIGHT,
            Self::Healthy => TIP_HEALTHY,
            Self::Overweight => TIP_OVERWEIGHT,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Underweight => "Underweight",
            Self::Healthy => "Healthy",
            Self::Overweight => "Overweight",
        })
    }
}

/// Body mass index: weight (kg) / height (m) squared
///
/// # Errors
///
/// Returns `DivisionDomain` for a non-positive height and `InvalidInput` for a non-positive weight
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    validate_body_metrics(weight_kg, height_cm)?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Place a BMI value in its band
#[must_use]
pub fn classify_bmi(bmi: f64, thresholds: &BmiThresholds) -> BmiCategory {
    if bmi < thresholds.underweight_below {
        BmiCategory::Underweight
    } else if bmi > thresholds.overweight_above {
        BmiCategory::Overweight
    } else {
        BmiCategory::Healthy
    }
}

/// One-element tip list for a BMI value
#[must_use]
pub fn select_tips(bmi: f64, thresholds: &BmiThresholds) -> Vec<String> {
    vec![classify_bmi(bmi, thresholds).tip().to_owned()]
}

/// Daily plan combining targets, macro grams, and BMI advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Calorie target (kcal)
    pub calories: i32,
    /// Protein (g)
    pub protein_g: i32,
    /// Carbohydrates (g)
    pub carbs_g: i32,
    /// Fat (g)
    pub fat_g: i32,
    /// Body mass index
    pub bmi: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
    /// Dietary tips
    pub tips: Vec<String>,
}

/// Build the daily nutrition plan for a set of targets and body metrics
///
/// # Errors
///
/// Returns an error if the body metrics cannot produce a BMI
pub fn build_nutrition_plan(
    targets: &Targets,
    weight_kg: f64,
    height_cm: f64,
    thresholds: &BmiThresholds,
) -> AppResult<NutritionPlan> {
    let bmi = calculate_bmi(weight_kg, height_cm)?;
    let grams = calculate_macro_grams(targets);
    let bmi_category = classify_bmi(bmi, thresholds);
    Ok(NutritionPlan {
        calories: targets.calories,
        protein_g: grams.protein_g,
        carbs_g: grams.carbs_g,
        fat_g: grams.fat_g,
        bmi,
        bmi_category,
        tips: vec![bmi_category.tip().to_owned()],
    })
}

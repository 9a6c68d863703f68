// ABOUTME: Metabolic target calculator using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal adjustment, macro split, protein target, and exercise burn
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Metabolic Target Calculator
//!
//! Turns body metrics and a goal into daily calorie and macro targets:
//!
//! 1. `bmr = 10w + 6.25h - 5a + 5` (male) or `- 161` (female)
//! 2. `tdee = bmr * activity factor`
//! 3. `target = tdee + goal adjustment`, rounded half to even
//! 4. `protein_g = round(target * protein% / 100 / 4)`
//!
//! Every function is pure; callers may invoke them concurrently.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Ainsworth, B.E., et al. (2011). Compendium of Physical Activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.

use crate::config::{ActivityFactorsConfig, BmrConfig, GoalPlan, GoalPlansConfig, NutritionConfig};
use nourish_core::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{ActivityLevel, Gender, Goal, Profile, Targets};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Intermediate values of a target calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetabolicBreakdown {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Targets derived from the TDEE and goal
    pub targets: Targets,
}

/// Daily macronutrient amounts in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein_g: i32,
    /// Carbohydrates (g)
    pub carbs_g: i32,
    /// Fat (g)
    pub fat_g: i32,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor formula
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive weight or zero age and
/// `DivisionDomain` for a non-positive height
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    validate_body_metrics(weight_kg, height_cm)?;
    if age == 0 {
        return Err(AppError::invalid_input("Age must be at least 1 year"));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + gender_constant)
}

/// Calculate Total Daily Energy Expenditure (TDEE = BMR x activity factor)
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor(activity_level)
}

/// Look up the activity multiplier for a free-text activity label
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the label names no known activity level
pub fn activity_multiplier(label: &str, config: &ActivityFactorsConfig) -> AppResult<f64> {
    let level: ActivityLevel = label.parse()?;
    Ok(config.factor(level))
}

/// Calorie adjustment and macro split for a goal
#[must_use]
pub fn goal_plan(goal: Goal, config: &GoalPlansConfig) -> GoalPlan {
    config.plan(goal)
}

/// Derive daily targets from a TDEE and goal
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Safe: calorie targets fit in i32
pub fn targets_from_tdee(tdee: f64, goal: Goal, water_ml: u32, config: &GoalPlansConfig) -> Targets {
    let plan = config.plan(goal);
    let calories = (tdee + plan.calorie_adjustment).round_ties_even() as i32;
    let protein_g = (f64::from(calories) * f64::from(plan.split.protein_pct)
        / 100.0
        / KCAL_PER_GRAM_PROTEIN)
        .round_ties_even() as i32;

    Targets {
        calories,
        protein_g,
        water_ml,
        macro_split: plan.split,
    }
}

/// Calculate BMR, TDEE, and targets for a profile
///
/// # Errors
///
/// Returns an error if the profile's body metrics fail validation
pub fn calculate_metabolic_breakdown(
    profile: &Profile,
    config: &NutritionConfig,
) -> AppResult<MetabolicBreakdown> {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let targets = targets_from_tdee(tdee, profile.goal, profile.water_goal_ml, &config.goal_plans);

    debug!(
        bmr,
        tdee,
        calories = targets.calories,
        protein_g = targets.protein_g,
        goal = %profile.goal,
        "Calculated metabolic targets"
    );

    Ok(MetabolicBreakdown { bmr, tdee, targets })
}

/// Calculate daily targets for a profile
///
/// # Errors
///
/// Returns an error if the profile's body metrics fail validation
pub fn calculate_targets(profile: &Profile, config: &NutritionConfig) -> AppResult<Targets> {
    calculate_metabolic_breakdown(profile, config).map(|breakdown| breakdown.targets)
}

/// Split the calorie target into grams of each macronutrient
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Safe: gram targets fit in i32
pub fn calculate_macro_grams(targets: &Targets) -> MacroGrams {
    let calories = f64::from(targets.calories);
    let grams = |pct: u8, kcal_per_gram: f64| {
        (calories * f64::from(pct) / 100.0 / kcal_per_gram).round_ties_even() as i32
    };
    MacroGrams {
        protein_g: grams(targets.macro_split.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs_g: grams(targets.macro_split.carb_pct, KCAL_PER_GRAM_CARBS),
        fat_g: grams(targets.macro_split.fat_pct, KCAL_PER_GRAM_FAT),
    }
}

/// Estimate calories burnt during exercise: MET x weight (kg) x duration (h)
///
/// # Errors
///
/// Returns `InvalidInput` for a negative MET or duration, or a non-positive weight
pub fn calculate_exercise_calories(met: f64, weight_kg: f64, duration_min: f64) -> AppResult<f64> {
    if !met.is_finite() || met < 0.0 {
        return Err(AppError::invalid_input("MET value must not be negative"));
    }
    if !duration_min.is_finite() || duration_min < 0.0 {
        return Err(AppError::invalid_input(
            "Exercise duration must not be negative",
        ));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    Ok(met * weight_kg * (duration_min / 60.0))
}

/// Reject weights and heights the formulas cannot use
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive weight and `DivisionDomain` for a non-positive height
pub fn validate_body_metrics(weight_kg: f64, height_cm: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be a positive number of kg"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::division_domain(
            "Height must be a positive number of cm",
        ));
    }
    Ok(())
}

// ABOUTME: Nutrition configuration for metabolic targets and meal planning
// ABOUTME: Configures BMR coefficients, activity factors, goal plans, and meal budgets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Nutrition Target Configuration
//!
//! Provides the coefficient tables behind the metabolic target calculator and
//! the meal planner.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use super::error::ConfigError;
use nourish_core::models::{ActivityLevel, Goal, MacroSplit, MealType};
use serde::{Deserialize, Serialize};

/// Nutrition Target Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment and macro split per goal
    pub goal_plans: GoalPlansConfig,
    /// Meal planner budgets and portion limits
    pub meal_plan: MealPlanConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (office): 1.2
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub lightly_active: f64,
    /// Moderately active: 1.55
    pub moderately_active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Super active: 1.9
    pub super_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            super_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Lightly => self.lightly_active,
            ActivityLevel::Moderately => self.moderately_active,
            ActivityLevel::Very => self.very_active,
            ActivityLevel::Super => self.super_active,
        }
    }

    fn in_order(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.super_active,
        ]
    }
}

/// Calorie adjustment and macro split applied for one goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalPlan {
    /// Added to TDEE (kcal, negative for a deficit)
    pub calorie_adjustment: f64,
    /// Share of calories per macronutrient
    pub split: MacroSplit,
}

/// Goal plan table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalPlansConfig {
    /// Weight loss: -500 kcal, 40/40/20
    pub weight_loss: GoalPlan,
    /// Weight gain: +500 kcal, 50/25/25
    pub weight_gain: GoalPlan,
    /// Muscle gain: +250 kcal, 45/35/20
    pub muscle_gain: GoalPlan,
    /// Maintenance: 0 kcal, 50/20/30
    pub maintain: GoalPlan,
}

impl Default for GoalPlansConfig {
    fn default() -> Self {
        Self {
            weight_loss: GoalPlan {
                calorie_adjustment: -500.0,
                split: MacroSplit::new(40, 40, 20),
            },
            weight_gain: GoalPlan {
                calorie_adjustment: 500.0,
                split: MacroSplit::new(50, 25, 25),
            },
            muscle_gain: GoalPlan {
                calorie_adjustment: 250.0,
                split: MacroSplit::new(45, 35, 20),
            },
            maintain: GoalPlan {
                calorie_adjustment: 0.0,
                split: MacroSplit::new(50, 20, 30),
            },
        }
    }
}

impl GoalPlansConfig {
    /// Plan for a goal
    #[must_use]
    pub const fn plan(&self, goal: Goal) -> GoalPlan {
        match goal {
            Goal::WeightLoss => self.weight_loss,
            Goal::WeightGain => self.weight_gain,
            Goal::MuscleGain => self.muscle_gain,
            Goal::Maintain => self.maintain,
        }
    }

    /// Validate that every split sums to 100 and adjustments are ordered
    ///
    /// # Errors
    ///
    /// Returns an error if any macro split does not total 100 or the loss plan
    /// does not sit below maintenance and the gain plans above it
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in Goal::ALL {
            if self.plan(goal).split.total() != 100 {
                return Err(ConfigError::InvalidWeights(
                    "Goal macro split percentages must sum to 100",
                ));
            }
        }
        if self.weight_loss.calorie_adjustment >= self.maintain.calorie_adjustment
            || self.maintain.calorie_adjustment >= self.weight_gain.calorie_adjustment
            || self.maintain.calorie_adjustment >= self.muscle_gain.calorie_adjustment
        {
            return Err(ConfigError::InvalidRange(
                "Calorie adjustments must order weight loss < maintain < gain",
            ));
        }
        Ok(())
    }
}

/// Meal planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Breakfast share of daily calories: 0.25
    pub breakfast_share: f64,
    /// Lunch share of daily calories: 0.35
    pub lunch_share: f64,
    /// Dinner share of daily calories: 0.30
    pub dinner_share: f64,
    /// Snack share of daily calories: 0.10
    pub snack_share: f64,
    /// Dishes within this distance of the meal budget are candidates (kcal): 150
    pub candidate_window_kcal: f64,
    /// Smallest portion suggested (servings): 0.5
    pub min_servings: f64,
    /// Largest portion suggested (servings): 3.0
    pub max_servings: f64,
    /// When set, goals with a dish preference pick only among this many top-ranked dishes
    #[serde(default)]
    pub preferred_pool_size: Option<usize>,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            breakfast_share: 0.25,
            lunch_share: 0.35,
            dinner_share: 0.30,
            snack_share: 0.10,
            candidate_window_kcal: 150.0,
            min_servings: 0.5,
            max_servings: 3.0,
            preferred_pool_size: None,
        }
    }
}

impl MealPlanConfig {
    /// Share of daily calories assigned to a meal slot
    #[must_use]
    pub const fn share(&self, meal: MealType) -> f64 {
        match meal {
            MealType::Breakfast => self.breakfast_share,
            MealType::Lunch => self.lunch_share,
            MealType::Dinner => self.dinner_share,
            MealType::Snack => self.snack_share,
        }
    }
}

impl NutritionConfig {
    /// Validate nutrition configuration
    ///
    /// # Errors
    ///
    /// Returns an error if coefficients, factors, plans, or meal shares are inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = self.activity_factors.in_order();
        if factors[0] < 1.0 || factors[4] > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        self.goal_plans.validate()?;

        let meal = &self.meal_plan;
        let share_total = MealType::ALL.iter().map(|m| meal.share(*m)).sum::<f64>();
        if (share_total - 1.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidWeights(
                "Meal calorie shares must sum to 1.0",
            ));
        }
        if meal.min_servings <= 0.0 || meal.min_servings > meal.max_servings {
            return Err(ConfigError::InvalidRange(
                "min_servings must be positive and <= max_servings",
            ));
        }
        if meal.preferred_pool_size == Some(0) {
            return Err(ConfigError::ValueOutOfRange(
                "Preferred dish pool must hold at least one dish",
            ));
        }
        if meal.candidate_window_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Meal candidate window must not be negative",
            ));
        }

        Ok(())
    }
}

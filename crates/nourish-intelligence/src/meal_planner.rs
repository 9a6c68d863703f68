// ABOUTME: Multi-day meal planner splitting the calorie target across meal slots
// ABOUTME: Picks dishes near each slot's budget and scales portions to fit it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Meal Planner
//!
//! For every day and meal slot the planner:
//!
//! 1. assigns the slot its share of the calorie target (25/35/30/10%),
//! 2. keeps dishes within the candidate window of that budget, or every dish if none fit,
//! 3. ranks candidates by protein for muscle gain or by calories for weight loss,
//!    optionally keeping only the top of that ranking,
//! 4. picks one uniformly at random and scales it to `clamp(round(budget / kcal, 1), 0.5, 3.0)` servings.
//!
//! The random source is supplied by the caller so plans are reproducible under a seeded RNG.

use crate::config::MealPlanConfig;
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{Diet, FoodItem, Goal, MealType};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Parameters for a meal plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    /// Daily calorie target (kcal)
    pub target_calories: i32,
    /// Goal used to rank dishes
    pub goal: Goal,
    /// Restrict to vegetarian dishes
    pub vegetarian: bool,
    /// Number of days to plan
    pub days: u32,
}

/// One dish assigned to a meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Meal slot
    pub meal_type: MealType,
    /// Dish name
    pub dish: String,
    /// Servings to eat
    pub servings: f64,
    /// Serving description
    pub serving_unit: String,
    /// Energy of the portion (kcal, truncated)
    pub calories: i32,
    /// Dietary classification
    pub diet: Diet,
}

/// Meals for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day number starting at 1
    pub day: u32,
    /// Meals in serving order
    pub meals: Vec<PlannedMeal>,
    /// Sum of the portion calories (kcal)
    pub total_calories: i32,
}

/// Generate a plan for `request.days` days
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive calorie target and `ResourceNotFound`
/// when no dish with a positive calorie count matches the diet preference
pub fn generate_meal_plan<R: Rng + ?Sized>(
    foods: &[FoodItem],
    request: &MealPlanRequest,
    config: &MealPlanConfig,
    rng: &mut R,
) -> AppResult<Vec<DayPlan>> {
    if request.target_calories <= 0 {
        return Err(AppError::invalid_input(
            "Calorie target must be positive to plan meals",
        ));
    }

    let eligible: Vec<&FoodItem> = foods
        .iter()
        .filter(|food| food.calories > 0.0)
        .filter(|food| !request.vegetarian || food.diet == Diet::Veg)
        .collect();
    if eligible.is_empty() {
        return Err(AppError::not_found("Dish matching the diet preference"));
    }

    let mut plan = Vec::new();
    for day in 1..=request.days {
        let mut meals = Vec::with_capacity(MealType::ALL.len());
        for meal_type in MealType::ALL {
            let budget = f64::from(request.target_calories) * config.share(meal_type);
            let pool = candidate_pool(&eligible, budget, request.goal, config);
            let Some(food) = pool.choose(rng) else {
                continue;
            };
            meals.push(portion(food, meal_type, budget, config));
        }
        let total_calories = meals.iter().map(|meal| meal.calories).sum();
        plan.push(DayPlan {
            day,
            meals,
            total_calories,
        });
    }

    debug!(
        days = request.days,
        target = request.target_calories,
        goal = %request.goal,
        "Generated meal plan"
    );
    Ok(plan)
}

/// Dishes eligible for a slot, ranked and trimmed according to the goal
fn candidate_pool<'a>(
    eligible: &[&'a FoodItem],
    budget: f64,
    goal: Goal,
    config: &MealPlanConfig,
) -> Vec<&'a FoodItem> {
    let window = config.candidate_window_kcal;
    let mut pool: Vec<&FoodItem> = eligible
        .iter()
        .copied()
        .filter(|food| (food.calories - budget).abs() <= window)
        .collect();
    if pool.is_empty() {
        pool = eligible.to_vec();
    }

    let ranking: Option<fn(&&FoodItem, &&FoodItem) -> Ordering> = match goal {
        Goal::MuscleGain => Some(|a, b| b.protein_g.total_cmp(&a.protein_g)),
        Goal::WeightLoss => Some(|a, b| a.calories.total_cmp(&b.calories)),
        Goal::WeightGain | Goal::Maintain => None,
    };
    if let Some(compare) = ranking {
        pool.sort_by(compare);
        if let Some(size) = config.preferred_pool_size {
            pool.truncate(size.max(1));
        }
    }
    pool
}

#[allow(clippy::cast_possible_truncation)] // Safe: servings are capped
fn portion(food: &FoodItem, meal_type: MealType, budget: f64, config: &MealPlanConfig) -> PlannedMeal {
    let servings = ((budget / food.calories) * 10.0).round_ties_even() / 10.0;
    let servings = servings.clamp(config.min_servings, config.max_servings);
    PlannedMeal {
        meal_type,
        dish: food.name.clone(),
        servings,
        serving_unit: food.serving_unit.clone(),
        calories: (food.calories * servings).trunc() as i32,
        diet: food.diet,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(goal: Goal, vegetarian: bool) -> MealPlanRequest {
        MealPlanRequest {
            target_calories: 2000,
            goal,
            vegetarian,
            days: 3,
        }
    }

    #[test]
    fn test_plan_has_every_slot_each_day() {
        let mut rng = StdRng::seed_from_u64(7);
        let plan = generate_meal_plan(
            &FoodItem::defaults(),
            &request(Goal::Maintain, false),
            &MealPlanConfig::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(plan.len(), 3);
        for (index, day) in plan.iter().enumerate() {
            assert_eq!(day.day as usize, index + 1);
            let slots: Vec<MealType> = day.meals.iter().map(|m| m.meal_type).collect();
            assert_eq!(slots, MealType::ALL.to_vec());
            assert_eq!(day.total_calories, day.meals.iter().map(|m| m.calories).sum::<i32>());
        }
    }

    #[test]
    fn test_servings_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = MealPlanConfig::default();
        let plan = generate_meal_plan(
            &FoodItem::defaults(),
            &request(Goal::WeightGain, false),
            &config,
            &mut rng,
        )
        .unwrap();
        for meal in plan.iter().flat_map(|d| &d.meals) {
            assert!(meal.servings >= config.min_servings);
            assert!(meal.servings <= config.max_servings);
        }
    }

    #[test]
    fn test_vegetarian_plan_excludes_non_veg() {
        let mut rng = StdRng::seed_from_u64(3);
        let plan = generate_meal_plan(
            &FoodItem::defaults(),
            &request(Goal::MuscleGain, true),
            &MealPlanConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert!(plan
            .iter()
            .flat_map(|d| &d.meals)
            .all(|meal| meal.diet == Diet::Veg));
    }

    #[test]
    fn test_weight_loss_picks_from_lightest_dishes() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = MealPlanConfig {
            preferred_pool_size: Some(1),
            ..MealPlanConfig::default()
        };
        // A 400 kcal target leaves every slot under 150 kcal, so all dishes within the window
        // compete and the lightest one (Idli, 60 kcal) is always chosen.
        let plan = generate_meal_plan(
            &FoodItem::defaults(),
            &MealPlanRequest {
                target_calories: 400,
                goal: Goal::WeightLoss,
                vegetarian: false,
                days: 1,
            },
            &config,
            &mut rng,
        )
        .unwrap();
        assert!(plan[0].meals.iter().all(|meal| meal.dish == "Idli"));
    }

    #[test]
    fn test_empty_catalog_is_not_found() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_meal_plan(
            &[],
            &request(Goal::Maintain, false),
            &MealPlanConfig::default(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err.code, nourish_core::errors::ErrorCode::ResourceNotFound);
    }
}

// ABOUTME: Health and nutrition scoring engine: targets, daily scores, and recommendations
// ABOUTME: Pure computation over core models with tunable coefficients and thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![deny(unsafe_code)]

//! # Nourish Intelligence
//!
//! Every function in this crate is a pure computation over the models in
//! `nourish-core`. Nothing here touches files or sensors; the application crate
//! supplies profiles, samples, catalogs, and heart-rate readings.
//!
//! ## Modules
//!
//! - **`nutrition_calculator`**: BMR, TDEE, goal-adjusted calorie and protein targets
//! - **`metric_scorer`**: Sleep and screen-time scores, nutrient status, supplements
//! - **`recommendation`**: BMI bands and dietary tips
//! - **`meal_planner`**: Multi-day meal plans sized to the calorie target
//! - **`remedy_matcher`**: Fuzzy lookup of home-care remedies
//! - **`progress`**: Daily totals, hydration, logging streaks, weekly calories
//! - **`config`**: Coefficient tables with environment overrides

/// Coefficients and thresholds for every algorithm in this crate
pub mod config;

/// Metabolic target calculator
pub mod nutrition_calculator;

/// Daily metric scorer
pub mod metric_scorer;

/// BMI-based recommendation selector
pub mod recommendation;

/// Meal plan generation
pub mod meal_planner;

/// Remedy lookup and teaching
pub mod remedy_matcher;

/// Progress aggregation over logged records
pub mod progress;

pub use config::IntelligenceConfig;
pub use meal_planner::{generate_meal_plan, DayPlan, MealPlanRequest, PlannedMeal};
pub use metric_scorer::{score_daily, NutritionGoals, SleepScore};
pub use nutrition_calculator::{calculate_targets, MacroGrams, MetabolicBreakdown};
pub use recommendation::{BmiCategory, NutritionPlan};
pub use remedy_matcher::{find_best_match, RemedyMatch};
pub use progress::DailyStats;

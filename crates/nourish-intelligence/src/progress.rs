// ABOUTME: Progress tracking over logged records: daily totals, streaks, and hydration
// ABOUTME: Pure aggregation over food, exercise, and water entries supplied by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Progress tracking
//!
//! Aggregations behind the dashboard header: what was eaten and burnt today,
//! how long the logging streak is, and how much of the water goal is met.

use chrono::{Datelike, Days, NaiveDate};
use nourish_core::constants::hydration::{BEVERAGE_FACTORS, DEFAULT_FACTOR};
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{Dated, ExerciseEntry, FoodEntry, WaterEntry};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Totals for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Day the totals cover
    pub date: NaiveDate,
    /// Calories eaten (kcal)
    pub calories_eaten: f64,
    /// Protein eaten (g)
    pub protein_g: f64,
    /// Calories burnt through exercise (kcal)
    pub calories_burnt: f64,
    /// Hydration-adjusted water intake (ml)
    pub water_ml: f64,
}

impl DailyStats {
    /// Eaten minus burnt
    #[must_use]
    pub fn net_calories(&self) -> f64 {
        self.calories_eaten - self.calories_burnt
    }

    /// Calories left before reaching the target, never negative
    #[must_use]
    pub fn remaining_calories(&self, target_calories: i32) -> f64 {
        (f64::from(target_calories) - self.net_calories()).max(0.0)
    }
}

/// Fraction of a beverage's volume that counts toward hydration
#[must_use]
pub fn hydration_factor(beverage: &str) -> f64 {
    let wanted = beverage.trim();
    BEVERAGE_FACTORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map_or(DEFAULT_FACTOR, |(_, factor)| *factor)
}

/// Volume of a drink that counts toward hydration
///
/// # Errors
///
/// Returns `InvalidInput` for a negative or non-numeric volume
pub fn effective_hydration_ml(beverage: &str, volume_ml: f64) -> AppResult<f64> {
    if !volume_ml.is_finite() || volume_ml < 0.0 {
        return Err(AppError::invalid_input("Volume must not be negative"));
    }
    Ok(volume_ml * hydration_factor(beverage))
}

/// Share of the water goal reached, capped at 1.0
#[must_use]
pub fn hydration_progress(water_ml: f64, goal_ml: u32) -> f64 {
    if goal_ml == 0 {
        return 1.0;
    }
    (water_ml / f64::from(goal_ml)).clamp(0.0, 1.0)
}

/// Totals for one day across the three logs
#[must_use]
pub fn daily_stats(
    date: NaiveDate,
    foods: &[FoodEntry],
    exercises: &[ExerciseEntry],
    drinks: &[WaterEntry],
) -> DailyStats {
    let (calories_eaten, protein_g) = foods
        .iter()
        .filter(|f| f.date == date)
        .fold((0.0, 0.0), |(kcal, protein), f| {
            (kcal + f.calories, protein + f.protein_g)
        });
    let calories_burnt = exercises
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.calories_burnt)
        .sum::<f64>();
    let water_ml = drinks
        .iter()
        .filter(|w| w.date == date)
        .map(|w| w.effective_ml)
        .sum::<f64>();

    DailyStats {
        date,
        calories_eaten,
        protein_g,
        calories_burnt,
        water_ml,
    }
}

/// Consecutive logged days ending today, or ending yesterday when today has no entry yet
#[must_use]
pub fn logging_streak<T: Dated>(entries: &[T], today: NaiveDate) -> u32 {
    let logged: BTreeSet<NaiveDate> = entries.iter().map(Dated::date).collect();

    let mut cursor = if logged.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if logged.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    while logged.contains(&cursor) {
        streak += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}

/// Calories eaten per week, keyed by the Monday that starts the week
#[must_use]
pub fn weekly_calories(foods: &[FoodEntry]) -> BTreeMap<NaiveDate, f64> {
    let mut weeks = BTreeMap::new();
    for food in foods {
        let offset = u64::from(food.date.weekday().num_days_from_monday());
        let week_start = food
            .date
            .checked_sub_days(Days::new(offset))
            .unwrap_or(food.date);
        *weeks.entry(week_start).or_insert(0.0) += food.calories;
    }
    weeks
}

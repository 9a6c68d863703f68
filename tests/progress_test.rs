// ABOUTME: Integration tests for logging streaks, weekly calories, and hydration helpers
// ABOUTME: Exercises the pure progress functions on hand-built log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, NaiveTime};
use nourish::intelligence::progress::{
    daily_stats, effective_hydration_ml, hydration_progress, logging_streak, weekly_calories,
};
use nourish::models::{FoodEntry, MealType, WaterEntry};

fn food(date: NaiveDate, calories: f64) -> FoodEntry {
    FoodEntry {
        date,
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        dish: "Upma".to_owned(),
        meal_type: MealType::Breakfast,
        quantity: 1.0,
        calories,
        protein_g: 5.0,
        carbs_g: 30.0,
        fat_g: 7.0,
    }
}

#[test]
fn test_streak_counts_back_from_today() {
    let entries = vec![
        food(common::day(2025, 6, 10), 200.0),
        food(common::day(2025, 6, 9), 200.0),
        food(common::day(2025, 6, 9), 150.0),
        food(common::day(2025, 6, 8), 200.0),
        food(common::day(2025, 6, 5), 200.0),
    ];

    assert_eq!(logging_streak(&entries, common::day(2025, 6, 10)), 3);
    // Today not logged yet: the streak ending yesterday still counts
    assert_eq!(logging_streak(&entries, common::day(2025, 6, 11)), 3);
    assert_eq!(logging_streak(&entries, common::day(2025, 6, 12)), 0);
    assert_eq!(logging_streak::<FoodEntry>(&[], common::day(2025, 6, 12)), 0);
}

#[test]
fn test_weekly_calories_group_by_monday() {
    // 2025-06-09 is a Monday
    let entries = vec![
        food(common::day(2025, 6, 9), 500.0),
        food(common::day(2025, 6, 15), 300.0),
        food(common::day(2025, 6, 16), 250.0),
    ];

    let weeks = weekly_calories(&entries);

    assert_eq!(weeks.len(), 2);
    assert!((weeks[&common::day(2025, 6, 9)] - 800.0).abs() < f64::EPSILON);
    assert!((weeks[&common::day(2025, 6, 16)] - 250.0).abs() < f64::EPSILON);
}

#[test]
fn test_daily_stats_filter_by_date() {
    let date = common::day(2025, 6, 9);
    let foods = vec![food(date, 500.0), food(common::day(2025, 6, 10), 900.0)];
    let drinks = vec![WaterEntry {
        date,
        time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        beverage: "Coffee".to_owned(),
        volume_ml: 200.0,
        effective_ml: effective_hydration_ml("coffee", 200.0).unwrap(),
    }];

    let stats = daily_stats(date, &foods, &[], &drinks);

    assert!((stats.calories_eaten - 500.0).abs() < f64::EPSILON);
    assert!((stats.protein_g - 5.0).abs() < f64::EPSILON);
    assert!((stats.water_ml - 180.0).abs() < 1e-9);
    assert!((stats.remaining_calories(400) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_hydration_progress_is_capped() {
    assert!((hydration_progress(1250.0, 2500) - 0.5).abs() < f64::EPSILON);
    assert!((hydration_progress(4000.0, 2500) - 1.0).abs() < f64::EPSILON);
    assert!((hydration_progress(0.0, 0) - 1.0).abs() < f64::EPSILON);
    // Unknown beverages count in full
    assert!((effective_hydration_ml("Coconut water", 300.0).unwrap() - 300.0).abs() < f64::EPSILON);
}

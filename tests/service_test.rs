// ABOUTME: End-to-end tests for the health service over a temporary data directory
// ABOUTME: Covers onboarding, logging, weigh-ins, daily reports, meal plans, and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveTime;
use nourish::errors::ErrorCode;
use nourish::models::{Goal, MealType, NutrientLevel, SleepQuality};
use nourish::services::ProfileUpdate;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

// ============================================================================
// Profile
// ============================================================================

#[test]
fn test_profile_required_before_onboarding() {
    let (_dir, service) = common::create_test_service();
    let err = service.profile().unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = service.nutrition_plan().unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_onboarding_seeds_weight_history() {
    let (_dir, service) = common::create_test_service();
    let today = common::day(2025, 5, 1);

    let summary = service.onboard(common::sample_profile(170.0), today).unwrap();

    assert_eq!(summary.breakdown.targets.calories, 1971);
    assert_eq!(summary.stored.start_weight_kg, Some(70.0));
    let history = service.weight_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, today);
    assert_eq!(service.profile().unwrap(), summary);
}

#[test]
fn test_onboarding_rejects_invalid_height() {
    let (_dir, service) = common::create_test_service();
    let err = service
        .onboard(common::sample_profile(0.0), common::day(2025, 5, 1))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DivisionDomain);
    assert!(service.profile().is_err());
}

#[test]
fn test_weigh_in_recomputes_targets() {
    let (_dir, service) = common::create_test_service();
    service
        .onboard(common::sample_profile(170.0), common::day(2025, 5, 1))
        .unwrap();

    let summary = service.log_weight(common::day(2025, 5, 8), 75.0).unwrap();

    // BMR grows by 10 * 5 kg
    assert!(close(summary.breakdown.bmr, 1692.5));
    assert_eq!(summary.breakdown.targets.calories, 2031);
    assert!(close(summary.stored.weight_change(), 5.0));
    assert_eq!(service.weight_history().unwrap().len(), 2);

    let err = service.log_weight(common::day(2025, 5, 9), 0.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_profile_update_keeps_start_weight() {
    let (_dir, service) = common::create_test_service();
    service
        .onboard(common::sample_profile(170.0), common::day(2025, 5, 1))
        .unwrap();

    let summary = service
        .update_profile(ProfileUpdate {
            goal: Some(Goal::WeightLoss),
            weight_kg: Some(68.0),
            ..ProfileUpdate::default()
        })
        .unwrap();

    assert_eq!(summary.stored.profile.goal, Goal::WeightLoss);
    assert_eq!(summary.stored.start_weight_kg, Some(70.0));
    assert_eq!(summary.breakdown.targets.macro_split.as_tuple(), (40, 40, 20));
}

// ============================================================================
// Daily logging
// ============================================================================

#[test]
fn test_daily_snapshot_totals() {
    let (_dir, service) = common::create_test_service();
    let today = common::day(2025, 5, 2);
    service.onboard(common::sample_profile(170.0), today).unwrap();

    let food = service
        .log_food(today, noon(), "poha", MealType::Breakfast, 1.5)
        .unwrap();
    assert_eq!(food.dish, "Poha");
    assert!(close(food.calories, 270.0));

    let run = service
        .log_exercise(today, noon(), "Running (6mph)", 30.0)
        .unwrap();
    assert!(close(run.calories_burnt, 343.0));

    let tea = service.log_water(today, noon(), "Tea", 250.0).unwrap();
    assert!(close(tea.effective_ml, 245.0));

    let snapshot = service.daily_snapshot(today).unwrap();
    assert!(close(snapshot.stats.calories_eaten, 270.0));
    assert!(close(snapshot.net_calories, -73.0));
    assert!(close(snapshot.remaining_calories, 2044.0));
    assert!(close(snapshot.stats.water_ml, 245.0));
    assert!(close(snapshot.hydration_progress, 245.0 / 2500.0));
    assert_eq!(snapshot.streak_days, 1);
}

#[test]
fn test_log_rejects_unknown_entries() {
    let (_dir, service) = common::create_test_service();
    let today = common::day(2025, 5, 2);

    // Exercise needs a weight from the profile
    let err = service.log_exercise(today, noon(), "Yoga", 30.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    service.onboard(common::sample_profile(170.0), today).unwrap();
    let err = service
        .log_food(today, noon(), "Pizza", MealType::Dinner, 1.0)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = service
        .log_food(today, noon(), "Roti", MealType::Dinner, 0.0)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    assert!(service.log_water(today, noon(), "Water", -10.0).is_err());
}

// ============================================================================
// Daily report
// ============================================================================

#[test]
fn test_daily_report_merges_samples() {
    let (_dir, service) = common::create_test_service();
    let today = common::day(2025, 5, 3);
    service.onboard(common::sample_profile(170.0), today).unwrap();

    let mut morning = common::sample_day(today, 8.0, 2.0, 90, 1.0);
    morning.meals.insert("protein".to_owned(), 30.0);
    let mut evening = common::sample_day(today, 6.0, 1.0, 75, 10.0);
    evening.meals.insert("protein".to_owned(), 20.0);
    service.record_sample(&morning).unwrap();
    service.record_sample(&evening).unwrap();

    let report = service.daily_report(today).unwrap();

    // Measurements come from the later sample
    assert_eq!(report.sleep_score, 65);
    assert_eq!(report.sleep_quality, SleepQuality::Poor);
    assert!(close(report.screen_score, 40.0));
    // Intake adds up: 50 g against a 99 g goal
    let protein = &report.nutrition_status["protein"];
    assert!(close(protein.intake, 50.0));
    assert!(close(protein.goal, 99.0));
    assert_eq!(protein.status, NutrientLevel::Low);
    assert_eq!(report.nutrition_status["fat"].status, NutrientLevel::Low);
}

#[test]
fn test_repeated_resting_readings_keep_full_sleep_score() {
    let (_dir, service) = common::create_test_service();
    let today = common::day(2025, 5, 3);
    let reading = common::sample_day(today, 8.0, 2.0, 60, 2.0);
    service.record_sample(&reading).unwrap();
    service.record_sample(&reading).unwrap();

    let report = service.daily_report(today).unwrap();

    assert_eq!(report.sleep_score, 100);
    assert_eq!(report.sleep_quality, SleepQuality::Good);
    assert!(close(report.screen_score, 120.0));
}

#[test]
fn test_daily_report_without_profile_skips_nutrients() {
    let (_dir, service) = common::create_test_service();
    let today = common::day(2025, 5, 3);
    service
        .record_sample(&common::sample_day(today, 8.0, 2.0, 60, 3.0))
        .unwrap();

    let report = service.daily_report(today).unwrap();

    assert!(report.nutrition_status.is_empty());
    assert_eq!(report.sleep_score, 100);
    assert_eq!(
        report.supplement_recommendations,
        vec!["Protein supplement".to_owned()]
    );
}

#[test]
fn test_daily_report_needs_a_sample() {
    let (_dir, service) = common::create_test_service();
    let err = service.daily_report(common::day(2025, 5, 3)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_invalid_sample_is_not_recorded() {
    let (_dir, service) = common::create_test_service();
    let today = common::day(2025, 5, 3);
    let err = service
        .record_sample(&common::sample_day(today, 5.0, 6.0, 60, 1.0))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(service.daily_report(today).is_err());
}

// ============================================================================
// Planning and reset
// ============================================================================

#[test]
fn test_meal_plan_uses_profile_preference() {
    let (_dir, service) = common::create_test_service();
    let mut profile = common::sample_profile(170.0);
    profile.vegetarian = true;
    service.onboard(profile, common::day(2025, 5, 4)).unwrap();

    let plan = service
        .meal_plan(3, None, &mut StdRng::seed_from_u64(11))
        .unwrap();

    assert_eq!(plan.len(), 3);
    for day in &plan {
        assert_eq!(day.meals.len(), 4);
        assert!(day
            .meals
            .iter()
            .all(|meal| meal.diet == nourish::models::Diet::Veg));
    }
}

#[test]
fn test_reset_keeps_catalogs() {
    let (_dir, service) = common::create_test_service();
    let today = common::day(2025, 5, 5);
    service.onboard(common::sample_profile(170.0), today).unwrap();
    service
        .log_food(today, noon(), "Idli", MealType::Breakfast, 3.0)
        .unwrap();
    service
        .teach_remedy(
            "back pain",
            nourish::models::Remedy {
                detected_disease: "Muscle strain".to_owned(),
                ..nourish::models::Remedy::default()
            },
        )
        .unwrap();

    service.reset().unwrap();

    assert_eq!(service.profile().unwrap_err().code, ErrorCode::ResourceNotFound);
    assert!(service.weight_history().unwrap().is_empty());
    assert!(service.weekly_calories().unwrap().is_empty());
    assert!(service.lookup_remedy("back pain").unwrap().is_some());
    assert!(service.food_catalog().find("Idli").is_ok());
}

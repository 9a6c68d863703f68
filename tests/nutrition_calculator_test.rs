// ABOUTME: Integration tests for the metabolic target calculator
// ABOUTME: Covers Mifflin-St Jeor BMR, activity factors, goal plans, and macro grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nourish::errors::ErrorCode;
use nourish::intelligence::config::NutritionConfig;
use nourish::intelligence::nutrition_calculator::{
    activity_multiplier, calculate_exercise_calories, calculate_macro_grams,
    calculate_metabolic_breakdown, calculate_mifflin_st_jeor, calculate_targets,
};
use nourish::models::{ActivityLevel, Gender, Goal};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// BMR and TDEE
// ============================================================================

#[test]
fn test_maintain_profile_follows_formula() {
    let config = NutritionConfig::default();
    let breakdown = calculate_metabolic_breakdown(&common::sample_profile(170.0), &config).unwrap();

    // 10 * 70 + 6.25 * 170 - 5 * 25 + 5
    approx(breakdown.bmr, 1642.5);
    approx(breakdown.tdee, 1971.0);
    assert_eq!(breakdown.targets.calories, 1971);
    assert_eq!(breakdown.targets.macro_split.as_tuple(), (50, 20, 30));
    // 1971 * 0.20 / 4 = 98.55
    assert_eq!(breakdown.targets.protein_g, 99);
}

#[test]
fn test_tdee_half_rounds_to_even() {
    let config = NutritionConfig::default();
    let breakdown = calculate_metabolic_breakdown(&common::sample_profile(175.0), &config).unwrap();

    approx(breakdown.bmr, 1673.75);
    approx(breakdown.tdee, 2008.5);
    assert_eq!(breakdown.targets.calories, 2008);
    assert_eq!(breakdown.targets.protein_g, 100);
}

#[test]
fn test_female_constant() {
    let config = NutritionConfig::default();
    let bmr = calculate_mifflin_st_jeor(60.0, 160.0, 30, Gender::Female, &config.bmr).unwrap();
    // 600 + 1000 - 150 - 161
    approx(bmr, 1289.0);
}

#[test]
fn test_activity_factor_scales_tdee() {
    let config = NutritionConfig::default();
    let mut profile = common::sample_profile(170.0);

    let mut previous = 0.0;
    for level in ActivityLevel::ALL {
        profile.activity_level = level;
        let tdee = calculate_metabolic_breakdown(&profile, &config).unwrap().tdee;
        assert!(tdee > previous, "{level} should burn more than the level below");
        previous = tdee;
    }

    profile.activity_level = ActivityLevel::Very;
    approx(
        calculate_metabolic_breakdown(&profile, &config).unwrap().tdee,
        1642.5 * 1.725,
    );
}

#[test]
fn test_activity_multiplier_labels() {
    let config = NutritionConfig::default();
    approx(
        activity_multiplier("Sedentary (Office)", &config.activity_factors).unwrap(),
        1.2,
    );
    approx(
        activity_multiplier("Moderately Active", &config.activity_factors).unwrap(),
        1.55,
    );

    let err = activity_multiplier("Couch", &config.activity_factors).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidConfiguration);
}

// ============================================================================
// Goals
// ============================================================================

#[test]
fn test_goal_adjustments_order_targets() {
    let config = NutritionConfig::default();
    let mut profile = common::sample_profile(170.0);
    let mut calories = |goal: Goal| {
        profile.goal = goal;
        calculate_targets(&profile, &config).unwrap().calories
    };

    let loss = calories(Goal::WeightLoss);
    let maintain = calories(Goal::Maintain);
    let muscle = calories(Goal::MuscleGain);
    let gain = calories(Goal::WeightGain);

    assert_eq!(loss, 1471);
    assert_eq!(maintain, 1971);
    assert_eq!(muscle, 2221);
    assert_eq!(gain, 2471);
    assert!(loss < maintain && maintain < muscle && muscle < gain);
}

#[test]
fn test_goal_splits_sum_to_one_hundred() {
    let config = NutritionConfig::default();
    let mut profile = common::sample_profile(170.0);
    let expected = [
        (Goal::WeightLoss, (40, 40, 20)),
        (Goal::WeightGain, (50, 25, 25)),
        (Goal::MuscleGain, (45, 35, 20)),
        (Goal::Maintain, (50, 20, 30)),
    ];

    for (goal, split) in expected {
        profile.goal = goal;
        let targets = calculate_targets(&profile, &config).unwrap();
        assert_eq!(targets.macro_split.as_tuple(), split, "{goal}");
        assert_eq!(targets.macro_split.total(), 100);
    }
}

#[test]
fn test_macro_grams_for_weight_loss() {
    let config = NutritionConfig::default();
    let mut profile = common::sample_profile(170.0);
    profile.goal = Goal::WeightLoss;
    let targets = calculate_targets(&profile, &config).unwrap();
    let grams = calculate_macro_grams(&targets);

    // 1471 kcal at 40/40/20
    assert_eq!(grams.protein_g, 147);
    assert_eq!(grams.carbs_g, 147);
    assert_eq!(grams.fat_g, 33);
    assert_eq!(grams.protein_g, targets.protein_g);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_invalid_body_metrics_are_rejected() {
    let config = NutritionConfig::default();

    let mut profile = common::sample_profile(0.0);
    let err = calculate_targets(&profile, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::DivisionDomain);

    profile.height_cm = 170.0;
    profile.weight_kg = -5.0;
    let err = calculate_targets(&profile, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    profile.weight_kg = 70.0;
    profile.age = 0;
    assert!(calculate_targets(&profile, &config).is_err());
}

#[test]
fn test_exercise_calories_use_met_hours() {
    // 9.8 MET * 70 kg * 0.5 h
    approx(calculate_exercise_calories(9.8, 70.0, 30.0).unwrap(), 343.0);
    assert!(calculate_exercise_calories(9.8, 70.0, -1.0).is_err());
}

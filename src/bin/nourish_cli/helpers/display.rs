// ABOUTME: Output formatting helpers for nourish-cli
// ABOUTME: Renders profiles, log entries, reports, meal plans, remedies, and readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use chrono::NaiveDate;
use nourish::errors::AppResult;
use nourish::intelligence::{DayPlan, NutritionPlan, RemedyMatch};
use nourish::models::{ExerciseEntry, FoodEntry, Remedy, ScoreReport, WaterEntry};
use nourish::sensors::{HeartRateReading, ReadingSource};
use nourish::services::{DailySnapshot, ProfileSummary};
use serde::Serialize;
use std::collections::BTreeMap;

/// Print any value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the profile with its computed targets
pub fn display_profile(summary: &ProfileSummary) {
    let profile = &summary.stored.profile;
    let targets = &summary.breakdown.targets;
    println!("\nProfile: {}", profile.name);
    println!("{}", "=".repeat(50));
    println!("   Age: {}", profile.age);
    println!("   Gender: {}", profile.gender);
    println!("   Height: {:.1} cm", profile.height_cm);
    println!(
        "   Weight: {:.1} kg (change {:+.1} kg)",
        profile.weight_kg,
        summary.stored.weight_change()
    );
    println!("   Activity: {}", profile.activity_level);
    println!("   Goal: {}", profile.goal);
    if profile.vegetarian {
        println!("   Diet: Vegetarian");
    }

    println!("\nDaily targets:");
    println!("   BMR: {:.2} kcal", summary.breakdown.bmr);
    println!("   TDEE: {:.2} kcal", summary.breakdown.tdee);
    println!("   Calories: {} kcal", targets.calories);
    println!("   Protein: {} g", targets.protein_g);
    println!("   Water: {} ml", targets.water_ml);
    let (carbs, protein, fat) = targets.macro_split.as_tuple();
    println!("   Split: {carbs}% carbs / {protein}% protein / {fat}% fat");
}

/// Display a logged dish
pub fn display_food_entry(entry: &FoodEntry) {
    println!(
        "Logged {} x{} for {} on {}: {:.0} kcal, {:.1} g protein, {:.1} g carbs, {:.1} g fat",
        entry.dish,
        entry.quantity,
        entry.meal_type,
        entry.date,
        entry.calories,
        entry.protein_g,
        entry.carbs_g,
        entry.fat_g
    );
}

/// Display a logged activity
pub fn display_exercise_entry(entry: &ExerciseEntry) {
    println!(
        "Logged {} for {} min on {}: {:.0} kcal burnt",
        entry.activity, entry.duration_min, entry.date, entry.calories_burnt
    );
}

/// Display a logged drink
pub fn display_water_entry(entry: &WaterEntry) {
    println!(
        "Logged {:.0} ml of {} on {} ({:.0} ml hydration)",
        entry.volume_ml, entry.beverage, entry.date, entry.effective_ml
    );
}

/// Display the daily calorie and hydration snapshot
pub fn display_snapshot(snapshot: &DailySnapshot) {
    println!("\nToday: {}", snapshot.stats.date);
    println!("{}", "=".repeat(50));
    println!("   Eaten: {:.0} kcal", snapshot.stats.calories_eaten);
    println!("   Burnt: {:.0} kcal", snapshot.stats.calories_burnt);
    println!("   Net: {:.0} kcal", snapshot.net_calories);
    println!(
        "   Remaining: {:.0} of {} kcal",
        snapshot.remaining_calories, snapshot.target_calories
    );
    println!("   Protein: {:.1} g", snapshot.stats.protein_g);
    println!(
        "   Hydration: {:.0} / {} ml ({:.0}%)",
        snapshot.stats.water_ml,
        snapshot.water_goal_ml,
        snapshot.hydration_progress * 100.0
    );
    println!("   Streak: {} day(s)", snapshot.streak_days);
    println!("   Weight change: {:+.1} kg", snapshot.weight_change_kg);
}

/// Display sleep, screen, and nutrition scores for a day
pub fn display_score_report(date: NaiveDate, report: &ScoreReport) {
    println!("\nDaily report: {date}");
    println!("{}", "=".repeat(50));
    println!(
        "   Sleep: {} ({})",
        report.sleep_score, report.sleep_quality
    );
    println!("   Screen time score: {:.1}", report.screen_score);

    if report.nutrition_status.is_empty() {
        println!("   Nutrition: no goals set");
    } else {
        println!("   Nutrition:");
        for (nutrient, status) in &report.nutrition_status {
            println!(
                "      {nutrient}: {:.1} / {:.1} g ({})",
                status.intake, status.goal, status.status
            );
        }
    }

    if report.supplement_recommendations.is_empty() {
        println!("   Supplements: none needed");
    } else {
        println!("   Supplements:");
        for supplement in &report.supplement_recommendations {
            println!("      - {supplement}");
        }
    }
}

/// Display targets in grams with BMI advice
pub fn display_nutrition_plan(plan: &NutritionPlan) {
    println!("\nNutrition plan");
    println!("{}", "=".repeat(50));
    println!("   Calories: {} kcal", plan.calories);
    println!("   Protein: {} g", plan.protein_g);
    println!("   Carbs: {} g", plan.carbs_g);
    println!("   Fat: {} g", plan.fat_g);
    println!("   BMI: {:.1} ({})", plan.bmi, plan.bmi_category);
    for tip in &plan.tips {
        println!("   Tip: {tip}");
    }
}

/// Display calories per week
pub fn display_weekly(weeks: &BTreeMap<NaiveDate, f64>) {
    if weeks.is_empty() {
        println!("No meals logged yet.");
        return;
    }
    println!("\nWeekly calories");
    println!("{}", "=".repeat(50));
    for (week_start, calories) in weeks {
        println!("   Week of {week_start}: {calories:.0} kcal");
    }
}

/// Display a multi-day meal plan
pub fn display_meal_plan(days: &[DayPlan]) {
    for day in days {
        println!("\nDay {} ({} kcal)", day.day, day.total_calories);
        println!("{}", "=".repeat(50));
        for meal in &day.meals {
            println!(
                "   {}: {} x{} {} ({} kcal)",
                meal.meal_type, meal.dish, meal.servings, meal.serving_unit, meal.calories
            );
        }
    }
}

/// Display a stored remedy
pub fn display_remedy(remedy: &Remedy) {
    println!("\n{} ({})", remedy.detected_disease, remedy.condition);
    println!("{}", "=".repeat(50));
    let rows = [
        ("Home remedy", &remedy.home_remedy),
        ("Meal", &remedy.meal),
        ("Avoid", &remedy.what_not_to_eat),
        ("Sleep", &remedy.sleep),
        ("Doctor", &remedy.doctor_advice),
        ("Possible causes", &remedy.possible_causes),
        ("Screen time", &remedy.screen_time_guide),
        ("Sleep cycle", &remedy.sleep_cycle_guide),
        ("Preferred meal", &remedy.preferred_indian_meal),
        ("Severity", &remedy.severity_level),
        ("Relief in", &remedy.time_to_relief),
    ];
    for (label, value) in rows.iter().filter(|(_, value)| !value.is_empty()) {
        println!("   {label}: {value}");
    }
}

/// Display a fuzzy remedy match with its similarity
pub fn display_remedy_match(found: &RemedyMatch) {
    display_remedy(&found.remedy);
    println!("   Match: {:.0}%", found.score);
}

/// Display a heart-rate reading and where it came from
pub fn display_heart_rate(reading: &HeartRateReading) {
    match reading.source {
        ReadingSource::Sensor => println!(
            "Heart rate: {} bpm from {}",
            reading.bpm,
            reading.device.as_deref().unwrap_or("sensor")
        ),
        ReadingSource::Fallback => {
            println!("Heart rate: {} bpm (fallback)", reading.bpm);
            if let Some(error) = &reading.error {
                println!("   Reason: {error}");
            }
        }
    }
}

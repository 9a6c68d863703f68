// ABOUTME: Daily metric scorer converting raw sleep, screen, and meal samples into scores
// ABOUTME: Produces sleep score and label, screen score, nutrient status, and supplement list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Daily Metric Scorer
//!
//! - Sleep: start at 100, subtract 20 for short sleep, 10 for little deep sleep,
//!   5 for an elevated resting heart rate. "Good" strictly above 70.
//! - Screen time: `max(0, 100 - (hours - 4) * 10)`.
//! - Nutrition: each nutrient with a goal is "ok" at 80% of the goal, else "low".
//!   Nutrients without a goal are not evaluated.
//! - Supplements: magnesium, protein, and vitamin A triggers evaluated in that order.

use crate::config::{
    NutritionStatusConfig, ScoringConfig, ScreenTimeScoringConfig, SleepScoringConfig,
    SupplementConfig,
};
use crate::nutrition_calculator::calculate_macro_grams;
use nourish_core::constants::advice::{
    SUPPLEMENT_MAGNESIUM, SUPPLEMENT_PROTEIN, SUPPLEMENT_VITAMIN_A,
};
use nourish_core::constants::nutrients;
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{
    DailySample, NutrientLevel, NutrientStatus, ScoreReport, SleepQuality, Targets,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Daily nutrient goals in grams keyed by nutrient name
pub type NutritionGoals = BTreeMap<String, f64>;

/// Sleep score with its quality label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepScore {
    /// Score after penalties
    pub score: i32,
    /// Quality label
    pub quality: SleepQuality,
}

/// Score one night of sleep
///
/// # Errors
///
/// Returns `InvalidInput` if either duration is negative or not a number
pub fn score_sleep(
    sleep_hours: f64,
    deep_sleep_hours: f64,
    heart_rate_bpm: u16,
    config: &SleepScoringConfig,
) -> AppResult<SleepScore> {
    ensure_hours("sleep_hours", sleep_hours)?;
    ensure_hours("deep_sleep_hours", deep_sleep_hours)?;

    let mut score = config.base_score;
    if sleep_hours < config.min_sleep_hours {
        score -= config.short_sleep_penalty;
    }
    if deep_sleep_hours < config.min_deep_sleep_hours {
        score -= config.low_deep_sleep_penalty;
    }
    if heart_rate_bpm > config.max_resting_heart_rate {
        score -= config.elevated_heart_rate_penalty;
    }
    if config.clamp_to_range {
        score = score.clamp(0, 100);
    }

    Ok(SleepScore {
        score,
        quality: sleep_quality(score, config),
    })
}

/// Quality label for a sleep score
#[must_use]
pub const fn sleep_quality(score: i32, config: &SleepScoringConfig) -> SleepQuality {
    if score > config.good_quality_threshold {
        SleepQuality::Good
    } else {
        SleepQuality::Poor
    }
}

/// Score a day's screen exposure
///
/// # Errors
///
/// Returns `InvalidInput` if the duration is negative or not a number
pub fn score_screen_time(screen_time_hours: f64, config: &ScreenTimeScoringConfig) -> AppResult<f64> {
    ensure_hours("screen_time_hours", screen_time_hours)?;

    let raw = config.base_score - (screen_time_hours - config.baseline_hours) * config.penalty_per_hour;
    let score = raw.max(config.floor);
    Ok(if config.cap_at_base {
        score.min(config.base_score)
    } else {
        score
    })
}

/// Compare intake against every configured goal; missing intake counts as zero
#[must_use]
pub fn evaluate_nutrition(
    meals: &BTreeMap<String, f64>,
    goals: &NutritionGoals,
    config: &NutritionStatusConfig,
) -> BTreeMap<String, NutrientStatus> {
    goals
        .iter()
        .map(|(nutrient, &goal)| {
            let intake = meals.get(nutrient).copied().unwrap_or(0.0);
            let status = if intake >= config.ok_ratio * goal {
                NutrientLevel::Ok
            } else {
                NutrientLevel::Low
            };
            (
                nutrient.clone(),
                NutrientStatus {
                    intake,
                    goal,
                    status,
                },
            )
        })
        .collect()
}

/// Supplement suggestions in evaluation order; any combination may apply
#[must_use]
pub fn recommend_supplements(
    sample: &DailySample,
    goals: &NutritionGoals,
    config: &SupplementConfig,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if sample.sleep_hours < config.magnesium_sleep_hours {
        recommendations.push(SUPPLEMENT_MAGNESIUM.to_owned());
    }

    let protein_goal = goals
        .get(nutrients::PROTEIN)
        .copied()
        .unwrap_or(config.default_protein_goal_g);
    if sample.intake(nutrients::PROTEIN) < protein_goal {
        recommendations.push(SUPPLEMENT_PROTEIN.to_owned());
    }

    if sample.screen_time_hours > config.vitamin_a_screen_hours {
        recommendations.push(SUPPLEMENT_VITAMIN_A.to_owned());
    }

    recommendations
}

/// Score a full day
///
/// # Errors
///
/// Returns `InvalidInput` if any duration in the sample is negative
pub fn score_daily(
    sample: &DailySample,
    goals: &NutritionGoals,
    config: &ScoringConfig,
) -> AppResult<ScoreReport> {
    let sleep = score_sleep(
        sample.sleep_hours,
        sample.deep_sleep_hours,
        sample.heart_rate_bpm,
        &config.sleep,
    )?;
    let screen_score = score_screen_time(sample.screen_time_hours, &config.screen_time)?;
    let nutrition_status = evaluate_nutrition(&sample.meals, goals, &config.nutrition);
    let supplement_recommendations = recommend_supplements(sample, goals, &config.supplements);

    debug!(
        date = %sample.date,
        sleep_score = sleep.score,
        screen_score,
        supplements = supplement_recommendations.len(),
        "Scored daily sample"
    );

    Ok(ScoreReport {
        sleep_score: sleep.score,
        sleep_quality: sleep.quality,
        screen_score,
        nutrition_status,
        supplement_recommendations,
    })
}

/// Protein, carbohydrate, and fat goals implied by a set of targets
#[must_use]
pub fn goals_from_targets(targets: &Targets) -> NutritionGoals {
    let grams = calculate_macro_grams(targets);
    BTreeMap::from([
        (nutrients::PROTEIN.to_owned(), f64::from(targets.protein_g)),
        (nutrients::CARBS.to_owned(), f64::from(grams.carbs_g)),
        (nutrients::FAT.to_owned(), f64::from(grams.fat_g)),
    ])
}

fn ensure_hours(field: &str, hours: f64) -> AppResult<()> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a non-negative number of hours"
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_scores_in_range() {
        let config = SleepScoringConfig {
            short_sleep_penalty: 90,
            low_deep_sleep_penalty: 30,
            clamp_to_range: true,
            ..SleepScoringConfig::default()
        };
        let sleep = score_sleep(3.0, 0.2, 90, &config).unwrap();
        assert_eq!(sleep.score, 0);
        assert_eq!(sleep.quality, SleepQuality::Poor);
    }

    #[test]
    fn test_screen_cap_limits_light_days() {
        let config = ScreenTimeScoringConfig {
            cap_at_base: true,
            ..ScreenTimeScoringConfig::default()
        };
        let score = score_screen_time(1.0, &config).unwrap();
        assert!((score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_hours_rejected() {
        assert!(score_screen_time(-1.0, &ScreenTimeScoringConfig::default()).is_err());
        assert!(score_sleep(f64::NAN, 2.0, 60, &SleepScoringConfig::default()).is_err());
    }
}

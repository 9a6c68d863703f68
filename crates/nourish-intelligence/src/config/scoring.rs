// ABOUTME: Scoring configuration for sleep, screen time, nutrition status, and supplements
// ABOUTME: Holds the penalty table and thresholds used by the daily metric scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Daily Metric Scoring Configuration

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Daily metric scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Sleep score penalties
    pub sleep: SleepScoringConfig,
    /// Screen-time score curve
    pub screen_time: ScreenTimeScoringConfig,
    /// Nutrition status threshold
    pub nutrition: NutritionStatusConfig,
    /// Supplement trigger thresholds
    pub supplements: SupplementConfig,
}

/// Sleep score penalty table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepScoringConfig {
    /// Starting score: 100
    pub base_score: i32,
    /// Sleep below this many hours is penalized: 7.0
    pub min_sleep_hours: f64,
    /// Short sleep penalty: 20
    pub short_sleep_penalty: i32,
    /// Deep sleep below this many hours is penalized: 1.5
    pub min_deep_sleep_hours: f64,
    /// Shallow sleep penalty: 10
    pub low_deep_sleep_penalty: i32,
    /// Resting heart rate above this is penalized (bpm): 70
    pub max_resting_heart_rate: u16,
    /// Elevated heart rate penalty: 5
    pub elevated_heart_rate_penalty: i32,
    /// Scores strictly above this are "Good": 70
    pub good_quality_threshold: i32,
    /// Clamp the score to [0, 100]
    pub clamp_to_range: bool,
}

impl Default for SleepScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 100,
            min_sleep_hours: 7.0,
            short_sleep_penalty: 20,
            min_deep_sleep_hours: 1.5,
            low_deep_sleep_penalty: 10,
            max_resting_heart_rate: 70,
            elevated_heart_rate_penalty: 5,
            good_quality_threshold: 70,
            clamp_to_range: false,
        }
    }
}

/// Screen-time score curve: `max(floor, base - (hours - baseline) * per_hour)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenTimeScoringConfig {
    /// Score at the baseline: 100
    pub base_score: f64,
    /// Hours of screen time that cost nothing: 4.0
    pub baseline_hours: f64,
    /// Points lost per hour past the baseline: 10.0
    pub penalty_per_hour: f64,
    /// Lowest possible score: 0.0
    pub floor: f64,
    /// Cap the score at `base_score` for light screen days
    pub cap_at_base: bool,
}

impl Default for ScreenTimeScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 100.0,
            baseline_hours: 4.0,
            penalty_per_hour: 10.0,
            floor: 0.0,
            cap_at_base: false,
        }
    }
}

/// Nutrition status threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionStatusConfig {
    /// Intake at or above this share of the goal is "ok": 0.8
    pub ok_ratio: f64,
}

impl Default for NutritionStatusConfig {
    fn default() -> Self {
        Self { ok_ratio: 0.8 }
    }
}

/// Supplement trigger thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementConfig {
    /// Magnesium when sleep is below this (hours): 7.0
    pub magnesium_sleep_hours: f64,
    /// Protein goal used when none is configured (g): 50.0
    pub default_protein_goal_g: f64,
    /// Vitamin A when screen time is above this (hours): 6.0
    pub vitamin_a_screen_hours: f64,
}

impl Default for SupplementConfig {
    fn default() -> Self {
        Self {
            magnesium_sleep_hours: 7.0,
            default_protein_goal_g: 50.0,
            vitamin_a_screen_hours: 6.0,
        }
    }
}

impl ScoringConfig {
    /// Validate scoring configuration
    ///
    /// # Errors
    ///
    /// Returns an error if penalties are negative or thresholds fall outside their domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sleep = &self.sleep;
        if sleep.short_sleep_penalty < 0
            || sleep.low_deep_sleep_penalty < 0
            || sleep.elevated_heart_rate_penalty < 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Sleep penalties must not be negative",
            ));
        }
        if sleep.min_deep_sleep_hours > sleep.min_sleep_hours {
            return Err(ConfigError::InvalidRange(
                "Deep sleep minimum must not exceed total sleep minimum",
            ));
        }
        if !(0..=sleep.base_score).contains(&sleep.good_quality_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "Good sleep threshold must lie between 0 and the base score",
            ));
        }

        let screen = &self.screen_time;
        if screen.penalty_per_hour < 0.0 || screen.baseline_hours < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Screen time baseline and penalty must not be negative",
            ));
        }
        if screen.floor > screen.base_score {
            return Err(ConfigError::InvalidRange(
                "Screen score floor must not exceed base score",
            ));
        }

        if !(0.0..=1.0).contains(&self.nutrition.ok_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "Nutrition ok ratio must be between 0 and 1",
            ));
        }

        if self.supplements.default_protein_goal_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default protein goal must not be negative",
            ));
        }

        Ok(())
    }
}

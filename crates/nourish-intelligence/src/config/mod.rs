// ABOUTME: Intelligence configuration for target calculation, scoring, and recommendations
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Intelligence Configuration Module
//!
//! Every coefficient and threshold the engine uses lives here, so the pure
//! functions take a config reference instead of embedding literals.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, goal plans, meal budgets
//! - `scoring` - Sleep, screen-time, nutrition status, and supplement thresholds
//! - `recommendation` - BMI bands and remedy similarity cut-off
//!
//! # Environment Overrides
//!
//! [`IntelligenceConfig::load`] starts from the defaults and applies `NOURISH_*`
//! variables, e.g. `NOURISH_SLEEP_MIN_HOURS=6.5` or `NOURISH_SCREEN_CAP_AT_BASE=true`.

/// Configuration validation errors
pub mod error;
/// BMR, activity, goal plan, and meal planner settings
pub mod nutrition;
/// BMI bands and remedy matching thresholds
pub mod recommendation;
/// Daily metric scoring thresholds and penalties
pub mod scoring;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalPlan, GoalPlansConfig, MealPlanConfig, NutritionConfig,
};
pub use recommendation::{BmiThresholds, RecommendationConfig, RemedyMatchConfig};
pub use scoring::{
    NutritionStatusConfig, ScoringConfig, ScreenTimeScoringConfig, SleepScoringConfig,
    SupplementConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Metabolic target and meal planning tables
    pub nutrition: NutritionConfig,
    /// Daily metric scoring thresholds
    pub scoring: ScoringConfig,
    /// BMI tips and remedy lookup
    pub recommendation: RecommendationConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found in any subsystem
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.scoring.validate()?;
        self.recommendation.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity factors
        let factors = &mut self.nutrition.activity_factors;
        Self::apply_env_var("NOURISH_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("NOURISH_ACTIVITY_LIGHTLY", &mut factors.lightly_active)?;
        Self::apply_env_var("NOURISH_ACTIVITY_MODERATELY", &mut factors.moderately_active)?;
        Self::apply_env_var("NOURISH_ACTIVITY_VERY", &mut factors.very_active)?;
        Self::apply_env_var("NOURISH_ACTIVITY_SUPER", &mut factors.super_active)?;

        // Goal calorie adjustments
        let plans = &mut self.nutrition.goal_plans;
        Self::apply_env_var(
            "NOURISH_GOAL_WEIGHT_LOSS_KCAL",
            &mut plans.weight_loss.calorie_adjustment,
        )?;
        Self::apply_env_var(
            "NOURISH_GOAL_WEIGHT_GAIN_KCAL",
            &mut plans.weight_gain.calorie_adjustment,
        )?;
        Self::apply_env_var(
            "NOURISH_GOAL_MUSCLE_GAIN_KCAL",
            &mut plans.muscle_gain.calorie_adjustment,
        )?;

        // Sleep scoring
        let sleep = &mut self.scoring.sleep;
        Self::apply_env_var("NOURISH_SLEEP_MIN_HOURS", &mut sleep.min_sleep_hours)?;
        Self::apply_env_var("NOURISH_SLEEP_MIN_DEEP_HOURS", &mut sleep.min_deep_sleep_hours)?;
        Self::apply_env_var(
            "NOURISH_SLEEP_MAX_RESTING_HR",
            &mut sleep.max_resting_heart_rate,
        )?;
        Self::apply_env_var("NOURISH_SLEEP_CLAMP", &mut sleep.clamp_to_range)?;

        // Screen time scoring
        let screen = &mut self.scoring.screen_time;
        Self::apply_env_var("NOURISH_SCREEN_BASELINE_HOURS", &mut screen.baseline_hours)?;
        Self::apply_env_var("NOURISH_SCREEN_PENALTY_PER_HOUR", &mut screen.penalty_per_hour)?;
        Self::apply_env_var("NOURISH_SCREEN_CAP_AT_BASE", &mut screen.cap_at_base)?;

        // Nutrition and supplements
        Self::apply_env_var("NOURISH_NUTRITION_OK_RATIO", &mut self.scoring.nutrition.ok_ratio)?;
        Self::apply_env_var(
            "NOURISH_DEFAULT_PROTEIN_GOAL_G",
            &mut self.scoring.supplements.default_protein_goal_g,
        )?;

        // Recommendations
        let recommendation = &mut self.recommendation;
        Self::apply_env_var(
            "NOURISH_BMI_UNDERWEIGHT",
            &mut recommendation.bmi.underweight_below,
        )?;
        Self::apply_env_var(
            "NOURISH_BMI_OVERWEIGHT",
            &mut recommendation.bmi.overweight_above,
        )?;
        Self::apply_env_var(
            "NOURISH_REMEDY_MIN_SIMILARITY",
            &mut recommendation.remedy.min_similarity,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unbalanced_macro_split_rejected() {
        let mut config = IntelligenceConfig::default();
        config.nutrition.goal_plans.maintain.split.fat_pct = 35;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_inverted_bmi_bands_rejected() {
        let mut config = IntelligenceConfig::default();
        config.recommendation.bmi.underweight_below = 30.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_descending_activity_factors_rejected() {
        let mut config = IntelligenceConfig::default();
        config.nutrition.activity_factors.very_active = 1.3;
        assert!(config.validate().is_err());
    }
}

// ABOUTME: Recommendation configuration for BMI bands and remedy matching
// ABOUTME: Thresholds for the tip selector and the similarity cut-off for condition lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Recommendation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// BMI band boundaries
    pub bmi: BmiThresholds,
    /// Remedy lookup settings
    pub remedy: RemedyMatchConfig,
}

/// BMI band boundaries; both comparisons are strict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// BMI strictly below this is underweight: 18.5
    pub underweight_below: f64,
    /// BMI strictly above this is overweight: 25.0
    pub overweight_above: f64,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            overweight_above: 25.0,
        }
    }
}

/// Remedy lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemedyMatchConfig {
    /// Minimum similarity (0-100) for a condition to match: 70
    pub min_similarity: u8,
}

impl Default for RemedyMatchConfig {
    fn default() -> Self {
        Self { min_similarity: 70 }
    }
}

impl RecommendationConfig {
    /// Validate recommendation configuration
    ///
    /// # Errors
    ///
    /// Returns an error if BMI bands are inverted or the similarity cut-off exceeds 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmi.underweight_below <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Underweight BMI threshold must be positive",
            ));
        }
        if self.bmi.underweight_below > self.bmi.overweight_above {
            return Err(ConfigError::InvalidRange(
                "Underweight BMI threshold must not exceed overweight threshold",
            ));
        }
        if self.remedy.min_similarity > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Remedy similarity threshold must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

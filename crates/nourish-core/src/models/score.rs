// ABOUTME: Score report model produced by the daily metric scorer
// ABOUTME: Sleep and screen scores, per-nutrient status, and supplement suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Categorical sleep quality label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepQuality {
    /// Score above the quality threshold
    Good,
    /// Score at or below the quality threshold
    Poor,
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Good => "Good",
            Self::Poor => "Poor",
        })
    }
}

/// Whether a nutrient intake reached its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientLevel {
    /// Intake reached the accepted share of the goal
    Ok,
    /// Intake fell short
    Low,
}

impl fmt::Display for NutrientLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "ok",
            Self::Low => "low",
        })
    }
}

/// Intake compared against its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientStatus {
    /// Grams consumed
    pub intake: f64,
    /// Goal in grams
    pub goal: f64,
    /// Resulting level
    pub status: NutrientLevel,
}

/// Ephemeral scoring result, recomputed per query and never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Sleep score (100 minus penalties)
    pub sleep_score: i32,
    /// Quality label derived from the sleep score
    pub sleep_quality: SleepQuality,
    /// Screen-time score
    pub screen_score: f64,
    /// Status of every nutrient that has a goal
    pub nutrition_status: BTreeMap<String, NutrientStatus>,
    /// Supplement suggestions in evaluation order
    pub supplement_recommendations: Vec<String>,
}

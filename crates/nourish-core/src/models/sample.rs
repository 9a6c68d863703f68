// ABOUTME: Daily raw health measurements (sleep, heart rate, screen time, meals)
// ABOUTME: Later samples for a date replace measurements and add to meal intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of raw measurements as collected by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    /// Calendar day of the measurements
    pub date: NaiveDate,
    /// Time of entry, when known
    #[serde(default)]
    pub time: Option<NaiveTime>,
    /// Total sleep (hours)
    pub sleep_hours: f64,
    /// Deep sleep (hours)
    pub deep_sleep_hours: f64,
    /// REM sleep (hours)
    #[serde(default)]
    pub rem_sleep_hours: f64,
    /// Resting heart rate (beats per minute)
    pub heart_rate_bpm: u16,
    /// Screen exposure (hours)
    pub screen_time_hours: f64,
    /// Phone pickups
    #[serde(default)]
    pub pickups: u32,
    /// Screen breaks taken
    #[serde(default)]
    pub breaks: u32,
    /// Nutrient intake in grams keyed by nutrient name
    #[serde(default)]
    pub meals: BTreeMap<String, f64>,
}

impl DailySample {
    /// Empty sample for a date
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            time: None,
            sleep_hours: 0.0,
            deep_sleep_hours: 0.0,
            rem_sleep_hours: 0.0,
            heart_rate_bpm: 0,
            screen_time_hours: 0.0,
            pickups: 0,
            breaks: 0,
            meals: BTreeMap::new(),
        }
    }

    /// Reject durations and intakes that cannot be measured
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first negative or non-numeric field
    pub fn validate(&self) -> AppResult<()> {
        let hours = [
            ("sleep_hours", self.sleep_hours),
            ("deep_sleep_hours", self.deep_sleep_hours),
            ("rem_sleep_hours", self.rem_sleep_hours),
            ("screen_time_hours", self.screen_time_hours),
        ];
        let meals = self.meals.iter().map(|(name, grams)| (name.as_str(), *grams));
        for (field, value) in hours.into_iter().chain(meals) {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }
        if self.deep_sleep_hours > self.sleep_hours {
            return Err(AppError::invalid_input(
                "deep_sleep_hours cannot exceed sleep_hours",
            ));
        }
        Ok(())
    }

    /// Intake of a nutrient, zero when absent
    #[must_use]
    pub fn intake(&self, nutrient: &str) -> f64 {
        self.meals.get(nutrient).copied().unwrap_or(0.0)
    }

    /// Fold a later entry for the same day into this one
    ///
    /// Measurements (sleep, heart rate, screen time) take the later entry's
    /// values; counters and meal intakes accumulate.
    pub fn absorb(&mut self, other: &Self) {
        self.sleep_hours = other.sleep_hours;
        self.deep_sleep_hours = other.deep_sleep_hours;
        self.rem_sleep_hours = other.rem_sleep_hours;
        self.heart_rate_bpm = other.heart_rate_bpm;
        self.screen_time_hours = other.screen_time_hours;
        self.pickups = self.pickups.saturating_add(other.pickups);
        self.breaks = self.breaks.saturating_add(other.breaks);
        for (nutrient, grams) in &other.meals {
            *self.meals.entry(nutrient.clone()).or_insert(0.0) += grams;
        }
        if other.time > self.time {
            self.time = other.time;
        }
    }

    /// Aggregate samples by date in log order
    #[must_use]
    pub fn aggregate_by_date(samples: &[Self]) -> BTreeMap<NaiveDate, Self> {
        let mut by_date: BTreeMap<NaiveDate, Self> = BTreeMap::new();
        for sample in samples {
            by_date
                .entry(sample.date)
                .and_modify(|existing| existing.absorb(sample))
                .or_insert_with(|| sample.clone());
        }
        by_date
    }
}

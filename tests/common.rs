// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, temporary data directories, and sample profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nourish`

use chrono::NaiveDate;
use nourish::config::{IntelligenceConfig, StorageConfig};
use nourish::models::{ActivityLevel, DailySample, Gender, Goal, Profile};
use nourish::services::HealthService;
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar day helper
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Storage rooted in a fresh temporary directory; keep the `TempDir` alive
pub fn temp_storage() -> (TempDir, StorageConfig) {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageConfig {
        data_dir: dir.path().to_path_buf(),
    };
    (dir, storage)
}

/// Service with default engine settings over a fresh temporary directory
pub fn create_test_service() -> (TempDir, HealthService) {
    init_test_logging();
    let (dir, storage) = temp_storage();
    let service = HealthService::new(&storage, IntelligenceConfig::default());
    (dir, service)
}

/// Sedentary 25 year old male maintaining weight
pub fn sample_profile(height_cm: f64) -> Profile {
    Profile {
        name: "Ravi".to_owned(),
        age: 25,
        gender: Gender::Male,
        height_cm,
        weight_kg: 70.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Maintain,
        water_goal_ml: 2500,
        vegetarian: false,
    }
}

/// Sample with the given sleep, heart rate, and screen figures and no meals
pub fn sample_day(
    date: NaiveDate,
    sleep_hours: f64,
    deep_sleep_hours: f64,
    heart_rate_bpm: u16,
    screen_time_hours: f64,
) -> DailySample {
    DailySample {
        sleep_hours,
        deep_sleep_hours,
        heart_rate_bpm,
        screen_time_hours,
        ..DailySample::empty(date)
    }
}

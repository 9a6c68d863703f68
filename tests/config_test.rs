// ABOUTME: Tests for environment-driven engine and application configuration
// ABOUTME: Runs serially because every case mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nourish::config::{AppConfig, ConfigError, IntelligenceConfig};
use nourish::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::time::Duration;

fn clear_env(names: &[&str]) {
    for name in names {
        env::remove_var(name);
    }
}

// ============================================================================
// Engine configuration
// ============================================================================

#[test]
#[serial]
fn test_defaults_load_without_overrides() {
    clear_env(&["NOURISH_SLEEP_MIN_HOURS", "NOURISH_SCREEN_CAP_AT_BASE"]);
    let config = IntelligenceConfig::load().unwrap();

    assert!((config.scoring.sleep.min_sleep_hours - 7.0).abs() < f64::EPSILON);
    assert!(!config.scoring.screen_time.cap_at_base);
    assert!(!config.scoring.sleep.clamp_to_range);
    assert_eq!(config.recommendation.remedy.min_similarity, 70);
}

#[test]
#[serial]
fn test_env_overrides_apply() {
    env::set_var("NOURISH_SLEEP_MIN_HOURS", "6.5");
    env::set_var("NOURISH_SCREEN_CAP_AT_BASE", "true");
    let config = IntelligenceConfig::load();
    clear_env(&["NOURISH_SLEEP_MIN_HOURS", "NOURISH_SCREEN_CAP_AT_BASE"]);

    let config = config.unwrap();
    assert!((config.scoring.sleep.min_sleep_hours - 6.5).abs() < f64::EPSILON);
    assert!(config.scoring.screen_time.cap_at_base);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    env::set_var("NOURISH_ACTIVITY_VERY", "lots");
    let result = IntelligenceConfig::load();
    clear_env(&["NOURISH_ACTIVITY_VERY"]);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_inverted_bmi_bands_fail_validation() {
    env::set_var("NOURISH_BMI_UNDERWEIGHT", "30");
    let result = IntelligenceConfig::load();
    clear_env(&["NOURISH_BMI_UNDERWEIGHT"]);

    assert!(result.is_err());
}

// ============================================================================
// Application configuration
// ============================================================================

#[test]
#[serial]
fn test_app_config_reads_data_dir_and_sensor_settings() {
    let (dir, _) = common::temp_storage();
    env::set_var("NOURISH_DATA_DIR", dir.path());
    env::set_var("NOURISH_HR_DISCOVERY_TIMEOUT_SECS", "2");
    env::set_var("NOURISH_HR_FALLBACK_BPM", "65");
    let config = AppConfig::from_env();
    clear_env(&[
        "NOURISH_DATA_DIR",
        "NOURISH_HR_DISCOVERY_TIMEOUT_SECS",
        "NOURISH_HR_FALLBACK_BPM",
    ]);

    let config = config.unwrap();
    assert_eq!(config.storage.data_dir, dir.path());
    assert_eq!(config.storage.profile_path(), dir.path().join("profile.json"));
    assert_eq!(config.heart_rate.discovery_timeout(), Duration::from_secs(2));
    assert_eq!(config.heart_rate.fallback_bpm, 65);
}

#[test]
#[serial]
fn test_app_config_defaults_match_sensor_constants() {
    clear_env(&["NOURISH_HR_DISCOVERY_TIMEOUT_SECS", "NOURISH_HR_FALLBACK_BPM"]);
    let config = AppConfig::with_data_dir("/tmp/nourish-test");

    assert_eq!(config.heart_rate.discovery_timeout(), Duration::from_secs(5));
    assert_eq!(config.heart_rate.fallback_bpm, 70);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_zero_discovery_timeout_is_rejected() {
    env::set_var("NOURISH_HR_DISCOVERY_TIMEOUT_SECS", "0");
    let result = AppConfig::from_env();
    clear_env(&["NOURISH_HR_DISCOVERY_TIMEOUT_SECS"]);

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigError);
}

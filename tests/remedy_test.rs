// ABOUTME: Integration tests for fuzzy remedy lookup and teaching new conditions
// ABOUTME: Runs through the health service so learned remedies persist on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nourish::config::{IntelligenceConfig, StorageConfig};
use nourish::errors::ErrorCode;
use nourish::intelligence::remedy_matcher::similarity_ratio;
use nourish::models::Remedy;
use nourish::services::HealthService;

#[test]
fn test_identical_strings_score_one_hundred() {
    assert!((similarity_ratio("fever", "fever") - 100.0).abs() < f64::EPSILON);
    assert!(similarity_ratio("abc", "xyz").abs() < f64::EPSILON);
}

#[test]
fn test_typos_still_find_a_remedy() {
    let (_dir, service) = common::create_test_service();

    let found = service.lookup_remedy("Head ache").unwrap().unwrap();
    assert_eq!(found.remedy.detected_disease, "Tension Headache");
    assert!(found.score >= 70.0);

    let found = service.lookup_remedy("acidty").unwrap().unwrap();
    assert_eq!(found.remedy.condition, "acidity");
}

#[test]
fn test_unknown_condition_is_none() {
    let (_dir, service) = common::create_test_service();
    assert!(service.lookup_remedy("sprained ankle").unwrap().is_none());
}

#[test]
fn test_taught_remedy_survives_restart() {
    let (dir, service) = common::create_test_service();
    let details = Remedy {
        detected_disease: "Sunburn".to_owned(),
        home_remedy: "Aloe vera gel".to_owned(),
        ..Remedy::default()
    };

    let learned = service.teach_remedy("  Sun Burn ", details).unwrap();
    assert_eq!(learned.condition, "sun burn");

    let storage = StorageConfig {
        data_dir: dir.path().to_path_buf(),
    };
    let reopened = HealthService::new(&storage, IntelligenceConfig::default());
    let found = reopened.lookup_remedy("sun burn").unwrap().unwrap();
    assert_eq!(found.remedy.home_remedy, "Aloe vera gel");
    assert!((found.score - 100.0).abs() < f64::EPSILON);

    // Built-in remedies are still there
    assert!(reopened.lookup_remedy("fever").unwrap().is_some());
}

#[test]
fn test_blank_condition_cannot_be_taught() {
    let (_dir, service) = common::create_test_service();
    let err = service.teach_remedy("   ", Remedy::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

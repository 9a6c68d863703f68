// ABOUTME: Integration tests for heart-rate discovery, decoding, and the fallback reading
// ABOUTME: Drives the monitor with a static source so no Bluetooth hardware is required
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nourish::config::HeartRateConfig;
use nourish::errors::ErrorCode;
use nourish::sensors::{
    parse_heart_rate_measurement, ConnectionStatus, HeartRateMonitor, ReadingSource,
    StaticHeartRateSource,
};
use std::time::Duration;

fn quick_config() -> HeartRateConfig {
    HeartRateConfig {
        discovery_timeout_secs: 1,
        fallback_bpm: 70,
    }
}

#[test]
fn test_decode_both_value_formats() {
    assert_eq!(parse_heart_rate_measurement(&[0x00, 64]), Some(64));
    assert_eq!(parse_heart_rate_measurement(&[0x01, 0x2C, 0x01]), Some(300));
    assert_eq!(parse_heart_rate_measurement(&[0x01, 0x2C]), None);
    assert_eq!(parse_heart_rate_measurement(&[]), None);
}

#[tokio::test]
async fn test_sensor_reading_is_used() {
    common::init_test_logging();
    let source = StaticHeartRateSource::empty().with_device("Chest strap", "AA:BB", vec![0x00, 58]);
    let monitor = HeartRateMonitor::new(source, quick_config());

    let reading = monitor.read_first_available().await;

    assert_eq!(reading.bpm, 58);
    assert_eq!(reading.source, ReadingSource::Sensor);
    assert_eq!(reading.status, ConnectionStatus::Connected);
    assert_eq!(reading.device.as_deref(), Some("AA:BB"));
    assert!(reading.error.is_none());
}

#[tokio::test]
async fn test_no_device_falls_back() {
    common::init_test_logging();
    let monitor = HeartRateMonitor::new(StaticHeartRateSource::empty(), quick_config());

    let reading = monitor.read_first_available().await;

    assert_eq!(reading.bpm, 70);
    assert_eq!(reading.source, ReadingSource::Fallback);
    assert_eq!(reading.status, ConnectionStatus::Disconnected);
    assert!(reading.error.is_some());
}

#[tokio::test]
async fn test_zero_and_short_payloads_fall_back() {
    common::init_test_logging();
    let source = StaticHeartRateSource::empty()
        .with_device("Zero", "00:01", vec![0x00, 0])
        .with_device("Short", "00:02", vec![0x01]);
    let monitor = HeartRateMonitor::new(source, quick_config());

    for address in ["00:01", "00:02"] {
        let reading = monitor.read_or_fallback(address).await;
        assert_eq!(reading.bpm, 70);
        assert_eq!(reading.source, ReadingSource::Fallback);
        assert_eq!(reading.status, ConnectionStatus::Connected);
    }
}

#[tokio::test]
async fn test_unreachable_device_reports_error() {
    common::init_test_logging();
    let monitor = HeartRateMonitor::new(StaticHeartRateSource::empty(), quick_config());

    let reading = monitor.read_or_fallback("FF:FF").await;

    assert_eq!(reading.bpm, 70);
    assert_eq!(reading.status, ConnectionStatus::Disconnected);
    assert!(reading.error.unwrap().contains("FF:FF"));
}

#[tokio::test]
async fn test_slow_discovery_times_out() {
    common::init_test_logging();
    let source = StaticHeartRateSource::empty()
        .with_device("Slow", "00:03", vec![0x00, 90])
        .with_scan_delay(Duration::from_secs(5));
    let monitor = HeartRateMonitor::new(source, quick_config());

    let err = monitor.discover().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);

    let reading = monitor.read_first_available().await;
    assert_eq!(reading.source, ReadingSource::Fallback);
    assert_eq!(reading.bpm, 70);
}

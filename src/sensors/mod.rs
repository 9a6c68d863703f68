// ABOUTME: Sensor collaborators feeding measurements into daily samples
// ABOUTME: Currently the heart-rate source with its timeout and fallback handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

/// Heart-rate discovery and reading
pub mod heart_rate;

pub use heart_rate::{
    parse_heart_rate_measurement, ConnectionStatus, DiscoveredDevice, HeartRateMonitor,
    HeartRateReading, HeartRateSource, ReadingSource, StaticHeartRateSource,
};

// ABOUTME: Configuration management module for application and engine settings
// ABOUTME: Re-exports environment-driven app config and the engine coefficient tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Configuration module for Nourish
//!
//! - **Environment**: data directory, file paths, and sensor settings from `NOURISH_*` variables
//! - **Intelligence**: scoring coefficients and thresholds, re-exported from `nourish-intelligence`

/// Environment and storage configuration
pub mod environment;

pub use environment::{AppConfig, HeartRateConfig, StorageConfig};
pub use nourish_intelligence::config::{ConfigError, IntelligenceConfig};

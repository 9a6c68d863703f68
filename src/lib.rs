// ABOUTME: Main library entry point for the Nourish health and nutrition engine
// ABOUTME: Wires storage, sensors, configuration, and logging around the scoring crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![deny(unsafe_code)]

//! # Nourish
//!
//! A personal health and nutrition engine. Given a profile it computes daily
//! calorie and protein targets; given a day of raw measurements it produces sleep
//! and screen-time scores, nutrient status, and supplement suggestions; given a BMI
//! it selects dietary tips.
//!
//! ## Architecture
//!
//! - **`nourish-core`**: error type, data models, fixed constants
//! - **`nourish-intelligence`**: the pure scoring engine and its configuration
//! - **this crate**: file-backed storage, the heart-rate collaborator,
//!   environment configuration, logging, and the [`services::HealthService`] facade
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nourish::config::{AppConfig, IntelligenceConfig};
//! use nourish::services::HealthService;
//! use nourish_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let service = HealthService::new(&config.storage, IntelligenceConfig::global().clone());
//!     let summary = service.profile()?;
//!     println!("Target: {} kcal", summary.breakdown.targets.calories);
//!     Ok(())
//! }
//! ```

/// Application configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Sensor collaborators
pub mod sensors;

/// Domain services
pub mod services;

/// File-backed repositories
pub mod storage;

pub use nourish_core::errors;
pub use nourish_core::models;
pub use nourish_intelligence as intelligence;

// ABOUTME: Domain service layer combining storage and the scoring engine
// ABOUTME: Keeps business rules out of the CLI so every entry point behaves the same
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

/// Profile, logging, reporting, planning, and remedy operations
pub mod health_service;

pub use health_service::{DailySnapshot, HealthService, ProfileSummary, ProfileUpdate};

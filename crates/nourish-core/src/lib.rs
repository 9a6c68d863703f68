// ABOUTME: Core types and constants for the Nourish health and nutrition engine
// ABOUTME: Foundation crate with error handling, typed data models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

#![deny(unsafe_code)]

//! # Nourish Core
//!
//! Foundation crate providing shared types and constants for the Nourish health
//! and nutrition engine. This crate is designed to change infrequently, so the
//! scoring engine and the storage layer can both depend on it without pulling
//! in each other.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Fixed advice strings, beverage factors, and sensor defaults
//! - **models**: Profile, targets, daily samples, score reports, and log records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, Targets, `DailySample`, `ScoreReport`, log entries)
pub mod models;

// ABOUTME: Core data models shared by the engine, storage, and CLI layers
// ABOUTME: Re-exports profile, target, sample, score, log record, and catalog types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Core data models
//!
//! A single typed model replaces ad hoc key lookups: [`Profile`] holds the body
//! metrics, [`Targets`] is derived from it, [`DailySample`] captures one day of
//! raw measurements, and [`ScoreReport`] is the ephemeral result of scoring.

/// Food, exercise, and remedy reference catalogs
pub mod catalog;
/// Append-only log records (food, exercise, water, weight)
pub mod log;
/// User profile and its enumerations
pub mod profile;
/// Daily raw measurements
pub mod sample;
/// Score report produced by the daily metric scorer
pub mod score;
/// Derived calorie and macro targets
pub mod targets;

pub use catalog::{Diet, ExerciseType, FoodItem, Remedy};
pub use log::{Dated, ExerciseEntry, FoodEntry, MealType, WaterEntry, WeightEntry};
pub use profile::{ActivityLevel, Gender, Goal, Profile, StoredProfile};
pub use sample::DailySample;
pub use score::{NutrientLevel, NutrientStatus, ScoreReport, SleepQuality};
pub use targets::{MacroSplit, Targets};

// ABOUTME: Logging commands for nourish-cli
// ABOUTME: Records meals, exercise, drinks, weigh-ins, and daily wellness samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use chrono::NaiveDate;
use clap::Args;
use nourish::errors::AppResult;
use nourish::models::{DailySample, MealType};
use nourish::sensors::{HeartRateMonitor, StaticHeartRateSource};
use nourish_core::constants::nutrients;
use std::collections::BTreeMap;
use tracing::info;

use super::{now, today, Context};
use crate::helpers::display::{
    display_exercise_entry, display_food_entry, display_profile, display_water_entry,
};

/// Dish to log
#[derive(Args)]
pub struct FoodArgs {
    /// Dish name from the catalog, e.g. "Poha"
    #[arg(long)]
    pub dish: String,
    /// Meal slot: breakfast, lunch, dinner, or snack
    #[arg(long)]
    pub meal: MealType,
    /// Servings eaten
    #[arg(long, default_value = "1.0")]
    pub quantity: f64,
    /// Day of the meal (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Daily sample fields
#[derive(Args)]
pub struct SampleArgs {
    /// Total sleep in hours
    #[arg(long)]
    pub sleep: f64,
    /// Deep sleep in hours
    #[arg(long)]
    pub deep_sleep: f64,
    /// REM sleep in hours
    #[arg(long, default_value = "0")]
    pub rem_sleep: f64,
    /// Resting heart rate; read from the sensor when omitted
    #[arg(long)]
    pub heart_rate: Option<u16>,
    /// Screen time in hours
    #[arg(long, default_value = "0")]
    pub screen_time: f64,
    /// Phone pickups
    #[arg(long, default_value = "0")]
    pub pickups: u32,
    /// Screen breaks taken
    #[arg(long, default_value = "0")]
    pub breaks: u32,
    /// Protein eaten (g)
    #[arg(long)]
    pub protein: Option<f64>,
    /// Carbohydrates eaten (g)
    #[arg(long)]
    pub carbs: Option<f64>,
    /// Fat eaten (g)
    #[arg(long)]
    pub fat: Option<f64>,
    /// Day of the sample (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Log a dish
pub fn food(ctx: &Context, args: &FoodArgs) -> AppResult<()> {
    let entry = ctx.service.log_food(
        args.date.unwrap_or_else(today),
        now(),
        &args.dish,
        args.meal,
        args.quantity,
    )?;
    ctx.emit(&entry, display_food_entry)
}

/// Log an activity
pub fn exercise(
    ctx: &Context,
    activity: &str,
    minutes: f64,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let entry = ctx
        .service
        .log_exercise(date.unwrap_or_else(today), now(), activity, minutes)?;
    ctx.emit(&entry, display_exercise_entry)
}

/// Log a drink
pub fn water(ctx: &Context, beverage: &str, volume: f64, date: Option<NaiveDate>) -> AppResult<()> {
    let entry = ctx
        .service
        .log_water(date.unwrap_or_else(today), now(), beverage, volume)?;
    ctx.emit(&entry, display_water_entry)
}

/// Record a weigh-in
pub fn weight(ctx: &Context, kg: f64, date: Option<NaiveDate>) -> AppResult<()> {
    let summary = ctx.service.log_weight(date.unwrap_or_else(today), kg)?;
    ctx.emit(&summary, display_profile)
}

/// Record a daily sample, reading the heart rate when it was not given
pub async fn sample(ctx: &Context, args: SampleArgs) -> AppResult<()> {
    let heart_rate_bpm = match args.heart_rate {
        Some(bpm) => bpm,
        None => {
            let monitor =
                HeartRateMonitor::new(StaticHeartRateSource::empty(), ctx.app.heart_rate);
            let reading = monitor.read_first_available().await;
            info!(bpm = reading.bpm, source = ?reading.source, "Resting heart rate");
            reading.bpm
        }
    };

    let meals: BTreeMap<String, f64> = [
        (nutrients::PROTEIN, args.protein),
        (nutrients::CARBS, args.carbs),
        (nutrients::FAT, args.fat),
    ]
    .into_iter()
    .filter_map(|(name, grams)| grams.map(|g| (name.to_owned(), g)))
    .collect();

    let sample = DailySample {
        date: args.date.unwrap_or_else(today),
        time: Some(now()),
        sleep_hours: args.sleep,
        deep_sleep_hours: args.deep_sleep,
        rem_sleep_hours: args.rem_sleep,
        heart_rate_bpm,
        screen_time_hours: args.screen_time,
        pickups: args.pickups,
        breaks: args.breaks,
        meals,
    };
    ctx.service.record_sample(&sample)?;
    ctx.emit(&sample, |s| {
        println!(
            "Recorded sample for {} (heart rate {} bpm)",
            s.date, s.heart_rate_bpm
        );
    })
}

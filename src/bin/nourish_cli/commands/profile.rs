// ABOUTME: Profile commands for nourish-cli
// ABOUTME: Creates, shows, and updates the stored profile with its computed targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use clap::Args;
use nourish::errors::AppResult;
use nourish::models::{ActivityLevel, Gender, Goal, Profile};
use nourish::services::ProfileUpdate;
use nourish_core::constants::hydration::DEFAULT_WATER_GOAL_ML;

use super::{today, Context};
use crate::helpers::display::display_profile;

/// Fields for a new profile
#[derive(Args)]
pub struct ProfileArgs {
    /// Display name
    #[arg(long)]
    pub name: String,
    /// Age in years
    #[arg(long)]
    pub age: u32,
    /// "male" or "female"
    #[arg(long)]
    pub gender: Gender,
    /// Height in centimetres
    #[arg(long)]
    pub height: f64,
    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,
    /// Activity level, e.g. "Sedentary", "Lightly Active", "Very Active"
    #[arg(long, default_value = "Sedentary")]
    pub activity: ActivityLevel,
    /// Goal: "Weight Loss", "Weight Gain", "Muscle Gain", or "Maintain"
    #[arg(long, default_value = "Maintain")]
    pub goal: Goal,
    /// Daily water goal in millilitres
    #[arg(long, default_value_t = DEFAULT_WATER_GOAL_ML)]
    pub water_goal: u32,
    /// Prefer vegetarian dishes in meal plans
    #[arg(long)]
    pub vegetarian: bool,
}

/// Fields to change; omitted fields keep their stored value
#[derive(Args)]
pub struct ProfileUpdateArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,
    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,
    /// "male" or "female"
    #[arg(long)]
    pub gender: Option<Gender>,
    /// Height in centimetres
    #[arg(long)]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,
    /// Activity level
    #[arg(long)]
    pub activity: Option<ActivityLevel>,
    /// Goal
    #[arg(long)]
    pub goal: Option<Goal>,
    /// Daily water goal in millilitres
    #[arg(long)]
    pub water_goal: Option<u32>,
    /// Vegetarian preference
    #[arg(long)]
    pub vegetarian: Option<bool>,
}

/// Create the profile
pub fn create(ctx: &Context, args: ProfileArgs) -> AppResult<()> {
    let profile = Profile {
        name: args.name,
        age: args.age,
        gender: args.gender,
        height_cm: args.height,
        weight_kg: args.weight,
        activity_level: args.activity,
        goal: args.goal,
        water_goal_ml: args.water_goal,
        vegetarian: args.vegetarian,
    };
    let summary = ctx.service.onboard(profile, today())?;
    ctx.emit(&summary, display_profile)
}

/// Show the profile
pub fn show(ctx: &Context) -> AppResult<()> {
    let summary = ctx.service.profile()?;
    ctx.emit(&summary, display_profile)
}

/// Update profile fields
pub fn update(ctx: &Context, args: ProfileUpdateArgs) -> AppResult<()> {
    let summary = ctx.service.update_profile(ProfileUpdate {
        name: args.name,
        age: args.age,
        gender: args.gender,
        height_cm: args.height,
        weight_kg: args.weight,
        activity_level: args.activity,
        goal: args.goal,
        water_goal_ml: args.water_goal,
        vegetarian: args.vegetarian,
    })?;
    ctx.emit(&summary, display_profile)
}

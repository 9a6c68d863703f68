// ABOUTME: Meal plan command for nourish-cli
// ABOUTME: Builds a seeded or random multi-day plan from the food catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use nourish::errors::AppResult;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::Context;
use crate::helpers::display::display_meal_plan;

/// Generate and print a meal plan
pub fn meal_plan(ctx: &Context, days: u32, vegetarian: bool, seed: Option<u64>) -> AppResult<()> {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let plan = ctx
        .service
        .meal_plan(days.max(1), vegetarian.then_some(true), &mut rng)?;
    ctx.emit(&plan, |days| display_meal_plan(days))
}

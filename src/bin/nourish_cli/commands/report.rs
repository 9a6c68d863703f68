// ABOUTME: Report commands for nourish-cli
// ABOUTME: Daily snapshot, daily score report, nutrition plan, and weekly calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use chrono::NaiveDate;
use nourish::errors::AppResult;

use super::{today, Context};
use crate::helpers::display::{
    display_nutrition_plan, display_score_report, display_snapshot, display_weekly,
};

/// Calories, hydration, and streak for a day
pub fn snapshot(ctx: &Context, date: Option<NaiveDate>) -> AppResult<()> {
    let snapshot = ctx.service.daily_snapshot(date.unwrap_or_else(today))?;
    ctx.emit(&snapshot, display_snapshot)
}

/// Scores for a day's samples
pub fn daily(ctx: &Context, date: Option<NaiveDate>) -> AppResult<()> {
    let date = date.unwrap_or_else(today);
    let report = ctx.service.daily_report(date)?;
    ctx.emit(&report, |r| display_score_report(date, r))
}

/// Targets in grams with BMI advice
pub fn plan(ctx: &Context) -> AppResult<()> {
    let plan = ctx.service.nutrition_plan()?;
    ctx.emit(&plan, display_nutrition_plan)
}

/// Calories per week
pub fn weekly(ctx: &Context) -> AppResult<()> {
    let weeks = ctx.service.weekly_calories()?;
    ctx.emit(&weeks, display_weekly)
}

// ABOUTME: Command modules for nourish-cli and the context they share
// ABOUTME: Provides profile, logging, report, planning, remedy, and sensor commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

pub mod log;
pub mod plan;
pub mod profile;
pub mod remedy;
pub mod report;
pub mod sensor;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use nourish::config::AppConfig;
use nourish::errors::{AppError, AppResult};
use nourish::services::HealthService;
use serde::Serialize;

use crate::helpers::display::print_json;

/// State shared by every command
pub struct Context {
    /// Service over the selected data directory
    pub service: HealthService,
    /// Resolved application configuration
    pub app: AppConfig,
    /// Emit JSON instead of text
    pub json: bool,
}

impl Context {
    /// Print `value` as JSON when requested, otherwise run the text renderer
    pub fn emit<T: Serialize>(&self, value: &T, render: impl FnOnce(&T)) -> AppResult<()> {
        if self.json {
            print_json(value)
        } else {
            render(value);
            Ok(())
        }
    }
}

/// Local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local wall-clock time to the second
pub fn now() -> NaiveTime {
    let time = Local::now().time();
    time.with_nanosecond(0).unwrap_or(time)
}

/// Delete the profile and logs after explicit confirmation
pub fn reset(ctx: &Context, confirmed: bool) -> AppResult<()> {
    if !confirmed {
        return Err(AppError::invalid_input(
            "Refusing to delete data without --yes",
        ));
    }
    ctx.service.reset()?;
    if !ctx.json {
        println!(
            "Profile and logs removed from {}",
            ctx.app.storage.data_dir.display()
        );
    }
    Ok(())
}

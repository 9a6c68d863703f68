// ABOUTME: Nourish CLI - command-line front end for the health and nutrition engine
// ABOUTME: Handles profile setup, daily logging, reports, meal plans, remedies, and sensors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers
//!
//! Usage:
//! ```bash
//! # Create a profile
//! nourish-cli profile create --name Asha --age 30 --gender male --height 175 --weight 70 \
//!     --activity "Lightly Active" --goal "Weight Loss"
//!
//! # Log what happened today
//! nourish-cli log food --dish Poha --meal breakfast --quantity 1.5
//! nourish-cli log water --beverage Tea --volume 250
//! nourish-cli log sample --sleep 6.5 --deep-sleep 1.2 --screen-time 6 --protein 60
//!
//! # Reports
//! nourish-cli report daily
//! nourish-cli --json report snapshot
//!
//! # Plan meals and look up remedies
//! nourish-cli meal-plan --days 3 --vegetarian
//! nourish-cli remedy ask "cannot sleep"
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use commands::{
    log::{FoodArgs, SampleArgs},
    profile::{ProfileArgs, ProfileUpdateArgs},
    remedy::TeachArgs,
    Context,
};
use nourish::config::{AppConfig, IntelligenceConfig};
use nourish::errors::{AppError, AppResult};
use nourish::logging::LoggingConfig;
use nourish::services::HealthService;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nourish-cli",
    about = "Nourish health and nutrition CLI",
    long_about = "Compute calorie targets, score daily sleep, screen time and nutrition, and keep a personal food, exercise, water and weight log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to NOURISH_DATA_DIR or the platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Record meals, exercise, drinks, weight, and daily samples
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Daily and weekly reports
    Report {
        #[command(subcommand)]
        action: ReportCommand,
    },

    /// Generate a meal plan sized to the calorie target
    MealPlan {
        /// Number of days to plan
        #[arg(long, default_value = "1")]
        days: u32,

        /// Only vegetarian dishes (defaults to the profile preference)
        #[arg(long)]
        vegetarian: bool,

        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Home-care remedy lookup
    Remedy {
        #[command(subcommand)]
        action: RemedyCommand,
    },

    /// Read the resting heart rate from a sensor, falling back to the default
    HeartRate {
        /// Raw Heart Rate Measurement payload as hex bytes, e.g. "00 48"
        #[arg(long)]
        payload: Option<String>,
    },

    /// Delete the profile and every log (catalogs are kept)
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Create the profile and compute targets
    Create(ProfileArgs),
    /// Show the profile and current targets
    Show,
    /// Change profile fields and recompute targets
    Update(ProfileUpdateArgs),
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LogCommand {
    /// Log a dish from the catalog
    Food(FoodArgs),

    /// Log an activity
    Exercise {
        /// Activity name from the catalog, e.g. "Yoga" or "Running (6mph)"
        #[arg(long)]
        activity: String,

        /// Duration in minutes
        #[arg(long)]
        minutes: f64,

        /// Day of the activity (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log a drink
    Water {
        /// Beverage, e.g. "Water", "Tea", "Coffee"
        #[arg(long, default_value = "Water")]
        beverage: String,

        /// Volume in millilitres
        #[arg(long)]
        volume: f64,

        /// Day of the drink (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Record a weigh-in and recompute targets
    Weight {
        /// Weight in kilograms
        #[arg(long)]
        kg: f64,

        /// Day of the weigh-in (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Record sleep, screen time, and nutrient intake for a day
    Sample(SampleArgs),
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ReportCommand {
    /// Calories, hydration, and streak for a day
    Snapshot {
        /// Day to report (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Sleep, screen, nutrition, and supplement scores for a day
    Daily {
        /// Day to report (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Targets in grams with BMI advice
    Plan,
    /// Calories eaten per week
    Weekly,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RemedyCommand {
    /// Describe how you feel and get a matching remedy
    Ask {
        /// Free-text description, e.g. "headache"
        condition: String,
    },
    /// Teach a remedy for a condition that is not recognized yet
    Teach(TeachArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .verbose(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let mut app_config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        app_config.storage.data_dir = data_dir;
    }
    debug!(data_dir = %app_config.storage.data_dir.display(), "Using data directory");

    let intelligence = IntelligenceConfig::global().clone();
    let ctx = Context {
        service: HealthService::new(&app_config.storage, intelligence),
        app: app_config,
        json: cli.json,
    };

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Create(args) => commands::profile::create(&ctx, args)?,
            ProfileCommand::Show => commands::profile::show(&ctx)?,
            ProfileCommand::Update(args) => commands::profile::update(&ctx, args)?,
        },
        Command::Log { action } => match action {
            LogCommand::Food(args) => commands::log::food(&ctx, &args)?,
            LogCommand::Exercise {
                activity,
                minutes,
                date,
            } => commands::log::exercise(&ctx, &activity, minutes, date)?,
            LogCommand::Water {
                beverage,
                volume,
                date,
            } => commands::log::water(&ctx, &beverage, volume, date)?,
            LogCommand::Weight { kg, date } => commands::log::weight(&ctx, kg, date)?,
            LogCommand::Sample(args) => commands::log::sample(&ctx, args).await?,
        },
        Command::Report { action } => match action {
            ReportCommand::Snapshot { date } => commands::report::snapshot(&ctx, date)?,
            ReportCommand::Daily { date } => commands::report::daily(&ctx, date)?,
            ReportCommand::Plan => commands::report::plan(&ctx)?,
            ReportCommand::Weekly => commands::report::weekly(&ctx)?,
        },
        Command::MealPlan {
            days,
            vegetarian,
            seed,
        } => commands::plan::meal_plan(&ctx, days, vegetarian, seed)?,
        Command::Remedy { action } => match action {
            RemedyCommand::Ask { condition } => commands::remedy::ask(&ctx, &condition)?,
            RemedyCommand::Teach(args) => commands::remedy::teach(&ctx, args)?,
        },
        Command::HeartRate { payload } => {
            commands::sensor::heart_rate(&ctx, payload.as_deref()).await?;
        }
        Command::Reset { yes } => commands::reset(&ctx, yes)?,
    }

    Ok(())
}

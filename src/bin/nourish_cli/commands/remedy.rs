// ABOUTME: Remedy commands for nourish-cli
// ABOUTME: Looks up home-care advice for a symptom and teaches new conditions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use clap::Args;
use nourish::errors::AppResult;
use nourish::models::Remedy;

use super::Context;
use crate::helpers::display::{display_remedy, display_remedy_match};

/// Remedy details for a new condition
#[derive(Args)]
pub struct TeachArgs {
    /// Condition as you would describe it, e.g. "sore throat"
    pub condition: String,
    /// Likely ailment
    #[arg(long)]
    pub disease: String,
    /// Home remedy
    #[arg(long)]
    pub remedy: String,
    /// Meal advice
    #[arg(long, default_value = "")]
    pub meal: String,
    /// Foods to avoid
    #[arg(long, default_value = "")]
    pub avoid: String,
    /// Sleep advice
    #[arg(long, default_value = "")]
    pub sleep: String,
    /// When to see a doctor
    #[arg(long, default_value = "")]
    pub doctor: String,
    /// Possible causes
    #[arg(long, default_value = "")]
    pub causes: String,
    /// Severity, e.g. "Mild"
    #[arg(long, default_value = "")]
    pub severity: String,
    /// Expected time to relief
    #[arg(long, default_value = "")]
    pub relief: String,
}

/// Look up a remedy
pub fn ask(ctx: &Context, condition: &str) -> AppResult<()> {
    let found = ctx.service.lookup_remedy(condition)?;
    ctx.emit(&found, |found| match found {
        Some(m) => display_remedy_match(m),
        None => {
            println!("I don't recognize that condition yet.");
            println!("Teach me with: nourish-cli remedy teach \"{condition}\" --disease ... --remedy ...");
        }
    })
}

/// Store a remedy for a new condition
pub fn teach(ctx: &Context, args: TeachArgs) -> AppResult<()> {
    let details = Remedy {
        detected_disease: args.disease,
        home_remedy: args.remedy,
        meal: args.meal,
        what_not_to_eat: args.avoid,
        sleep: args.sleep,
        doctor_advice: args.doctor,
        possible_causes: args.causes,
        severity_level: args.severity,
        time_to_relief: args.relief,
        ..Remedy::default()
    };
    let learned = ctx.service.teach_remedy(&args.condition, details)?;
    ctx.emit(&learned, |remedy| {
        println!("Thanks! I'll remember that.");
        display_remedy(remedy);
    })
}

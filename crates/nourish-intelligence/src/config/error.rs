// ABOUTME: Configuration error types for scoring engine validation
// ABOUTME: Covers inverted thresholds, macro splits off 100, and unparseable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Configuration error types for scoring engine validation.

use nourish_core::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lower and upper bounds are inverted
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Override value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shares don't sum to the required total (macro split not 100%)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::invalid_configuration(error.to_string()).with_source(error)
    }
}

// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Resolves the data directory, record file paths, and heart-rate sensor settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use nourish_core::constants::heart_rate;
use nourish_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Directory name under the platform data directory
const DATA_DIR_NAME: &str = "nourish";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where profile, logs, and catalogs live
    pub storage: StorageConfig,
    /// Heart-rate sensor settings
    pub heart_rate: HeartRateConfig,
}

/// File layout under the data directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root data directory
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Stored profile document
    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join("profile.json")
    }

    /// Food log
    #[must_use]
    pub fn food_log_path(&self) -> PathBuf {
        self.data_dir.join("food_log.jsonl")
    }

    /// Exercise log
    #[must_use]
    pub fn exercise_log_path(&self) -> PathBuf {
        self.data_dir.join("exercise_log.jsonl")
    }

    /// Water log
    #[must_use]
    pub fn water_log_path(&self) -> PathBuf {
        self.data_dir.join("water_log.jsonl")
    }

    /// Weight history
    #[must_use]
    pub fn weight_log_path(&self) -> PathBuf {
        self.data_dir.join("weight_log.jsonl")
    }

    /// Daily wellness samples
    #[must_use]
    pub fn samples_path(&self) -> PathBuf {
        self.data_dir.join("samples.jsonl")
    }

    /// Food catalog
    #[must_use]
    pub fn food_catalog_path(&self) -> PathBuf {
        self.data_dir.join("food_catalog.json")
    }

    /// Foods added by the user
    #[must_use]
    pub fn custom_foods_path(&self) -> PathBuf {
        self.data_dir.join("custom_foods.json")
    }

    /// Exercise catalog
    #[must_use]
    pub fn exercise_catalog_path(&self) -> PathBuf {
        self.data_dir.join("exercise_catalog.json")
    }

    /// Remedy catalog
    #[must_use]
    pub fn remedy_catalog_path(&self) -> PathBuf {
        self.data_dir.join("remedies.json")
    }

    /// Files removed by a reset; catalogs are never listed
    #[must_use]
    pub fn user_record_paths(&self) -> Vec<PathBuf> {
        vec![
            self.profile_path(),
            self.food_log_path(),
            self.exercise_log_path(),
            self.water_log_path(),
            self.weight_log_path(),
            self.samples_path(),
        ]
    }
}

/// Heart-rate sensor settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeartRateConfig {
    /// How long discovery may run (seconds)
    pub discovery_timeout_secs: u64,
    /// Reading used when no sensor answers (bpm)
    pub fallback_bpm: u16,
}

impl HeartRateConfig {
    /// Discovery timeout as a duration
    #[must_use]
    pub const fn discovery_timeout(&self) -> Duration {
        Duration::from_secs(self.discovery_timeout_secs)
    }
}

impl Default for HeartRateConfig {
    fn default() -> Self {
        Self {
            discovery_timeout_secs: heart_rate::DISCOVERY_TIMEOUT_SECS,
            fallback_bpm: heart_rate::FALLBACK_BPM,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable is set but cannot be parsed or is out of range
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var("NOURISH_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let defaults = HeartRateConfig::default();
        let config = Self {
            storage: StorageConfig { data_dir },
            heart_rate: HeartRateConfig {
                discovery_timeout_secs: env_parse_or(
                    "NOURISH_HR_DISCOVERY_TIMEOUT_SECS",
                    defaults.discovery_timeout_secs,
                )?,
                fallback_bpm: env_parse_or("NOURISH_HR_FALLBACK_BPM", defaults.fallback_bpm)?,
            },
        };
        config.validate()?;

        info!(data_dir = %config.storage.data_dir.display(), "Configuration loaded");
        Ok(config)
    }

    /// Configuration rooted at an explicit data directory
    #[must_use]
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            storage: StorageConfig {
                data_dir: data_dir.as_ref().to_path_buf(),
            },
            heart_rate: HeartRateConfig::default(),
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a zero discovery timeout or an implausible fallback rate
    pub fn validate(&self) -> AppResult<()> {
        if self.heart_rate.discovery_timeout_secs == 0 {
            return Err(AppError::config(
                "NOURISH_HR_DISCOVERY_TIMEOUT_SECS must be at least 1 second",
            ));
        }
        if !(30..=220).contains(&self.heart_rate.fallback_bpm) {
            return Err(AppError::config(
                "NOURISH_HR_FALLBACK_BPM must be between 30 and 220",
            ));
        }
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("data"),
        |base| base.join(DATA_DIR_NAME),
    )
}

fn env_parse_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => {
            debug!(key, value = %raw, "Environment override");
            raw.trim()
                .parse()
                .map_err(|_| AppError::config(format!("{key} has an invalid value: {raw}")))
        }
        Err(_) => Ok(default),
    }
}

// ABOUTME: Profile repository trait and its single-document JSON implementation
// ABOUTME: Upgrades documents written without a starting weight when they are loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use super::{read_json, remove_if_exists, write_json};
use nourish_core::errors::AppResult;
use nourish_core::models::StoredProfile;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persistence for the single user profile
pub trait ProfileRepository: Send + Sync {
    /// Stored profile, `None` before onboarding
    ///
    /// # Errors
    ///
    /// Returns an error if the stored document cannot be read or parsed
    fn load(&self) -> AppResult<Option<StoredProfile>>;

    /// Replace the stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written
    fn save(&self, profile: &StoredProfile) -> AppResult<()>;

    /// Delete the stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be removed
    fn clear(&self) -> AppResult<()>;
}

/// Profile kept as one JSON document
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileRepository for JsonProfileStore {
    fn load(&self) -> AppResult<Option<StoredProfile>> {
        let Some(mut stored) = read_json::<StoredProfile>(&self.path)? else {
            return Ok(None);
        };
        if stored.start_weight_kg.is_none() {
            stored.start_weight_kg = Some(stored.profile.weight_kg);
            info!(path = %self.path.display(), "Upgraded profile without a starting weight");
            self.save(&stored)?;
        }
        Ok(Some(stored))
    }

    fn save(&self, profile: &StoredProfile) -> AppResult<()> {
        write_json(&self.path, profile)?;
        debug!(name = %profile.profile.name, "Saved profile");
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        remove_if_exists(&self.path)
    }
}

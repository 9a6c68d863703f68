// ABOUTME: File-backed storage for the profile, append-only record logs, and catalogs
// ABOUTME: Shared JSON document helpers used by every repository in this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Storage layer
//!
//! The profile is a single JSON document, logs are JSON Lines files that only
//! ever grow, and catalogs are JSON arrays seeded from built-in tables when absent.

/// Food, exercise, and remedy catalogs
pub mod catalogs;
/// Profile repository
pub mod profile_store;
/// Append-only JSON Lines record log
pub mod record_log;

pub use catalogs::{ExerciseCatalog, FoodCatalog, RemedyCatalog};
pub use profile_store::{JsonProfileStore, ProfileRepository};
pub use record_log::RecordLog;

use nourish_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a JSON document, `None` when the file does not exist
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    match fs::read_to_string(path) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write a JSON document, creating parent directories as needed
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    ensure_parent(path)?;
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body)?;
    Ok(())
}

/// Remove a file, treating an absent file as already removed
pub(crate) fn remove_if_exists(path: &Path) -> AppResult<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

pub(crate) fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

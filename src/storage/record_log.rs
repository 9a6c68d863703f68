// ABOUTME: Append-only JSON Lines log for dated records such as meals, drinks, and samples
// ABOUTME: Reads tolerate missing files and skip corrupt lines instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use super::{ensure_parent, remove_if_exists};
use chrono::NaiveDate;
use nourish_core::errors::AppResult;
use nourish_core::models::Dated;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One JSON document per line; records are never rewritten in place
#[derive(Debug, Clone)]
pub struct RecordLog<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> RecordLog<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Log backed by `path`
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _record: PhantomData,
        }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or the file cannot be written
    pub fn append(&self, record: &T) -> AppResult<()> {
        ensure_parent(&self.path)?;
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        debug!(path = %self.path.display(), "Appended record");
        Ok(())
    }

    /// Every readable record in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read
    pub fn read_all(&self) -> AppResult<Vec<T>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    error = %e,
                    "Skipping unreadable record"
                ),
            }
        }
        Ok(records)
    }

    /// Delete every record
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed
    pub fn clear(&self) -> AppResult<()> {
        remove_if_exists(&self.path)
    }
}

impl<T> RecordLog<T>
where
    T: Serialize + DeserializeOwned + Dated,
{
    /// Records for one calendar day
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read
    pub fn read_on(&self, date: NaiveDate) -> AppResult<Vec<T>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|record| record.date() == date)
            .collect())
    }
}

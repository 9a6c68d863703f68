// ABOUTME: Food, exercise, and remedy catalogs stored as JSON arrays
// ABOUTME: Missing files fall back to the built-in tables; user additions are persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use super::{read_json, write_json};
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{ExerciseType, FoodItem, Remedy};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dishes available for logging and meal planning
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    catalog_path: PathBuf,
    custom_path: PathBuf,
}

impl FoodCatalog {
    /// Catalog with built-in dishes at `catalog_path` and user dishes at `custom_path`
    #[must_use]
    pub fn new(catalog_path: impl AsRef<Path>, custom_path: impl AsRef<Path>) -> Self {
        Self {
            catalog_path: catalog_path.as_ref().to_path_buf(),
            custom_path: custom_path.as_ref().to_path_buf(),
        }
    }

    /// Custom dishes first, then the catalog (or the built-in table when none is stored)
    ///
    /// # Errors
    ///
    /// Returns an error if a stored catalog cannot be read or parsed
    pub fn all(&self) -> AppResult<Vec<FoodItem>> {
        let mut foods = self.custom()?;
        foods.extend(read_json(&self.catalog_path)?.unwrap_or_else(FoodItem::defaults));
        Ok(foods)
    }

    /// Dishes added by the user
    ///
    /// # Errors
    ///
    /// Returns an error if the stored list cannot be read or parsed
    pub fn custom(&self) -> AppResult<Vec<FoodItem>> {
        Ok(read_json(&self.custom_path)?.unwrap_or_default())
    }

    /// Find a dish by name, ignoring case; custom dishes shadow catalog entries
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no dish has that name
    pub fn find(&self, name: &str) -> AppResult<FoodItem> {
        let wanted = name.trim();
        self.all()?
            .into_iter()
            .find(|food| food.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::not_found(format!("Dish '{wanted}'")))
    }

    /// Persist a user dish
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or non-positive calories, or a storage error
    pub fn add_custom(&self, food: FoodItem) -> AppResult<()> {
        if food.name.trim().is_empty() {
            return Err(AppError::invalid_input("Dish name must not be empty"));
        }
        if food.calories <= 0.0 {
            return Err(AppError::invalid_input("Dish calories must be positive"));
        }
        let mut custom = self.custom()?;
        custom.retain(|existing| !existing.name.eq_ignore_ascii_case(&food.name));
        debug!(dish = %food.name, "Added custom dish");
        custom.push(food);
        write_json(&self.custom_path, &custom)
    }
}

/// Activities with their MET values
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    path: PathBuf,
}

impl ExerciseCatalog {
    /// Catalog stored at `path`
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Stored activities, or the built-in table
    ///
    /// # Errors
    ///
    /// Returns an error if a stored catalog cannot be read or parsed
    pub fn all(&self) -> AppResult<Vec<ExerciseType>> {
        Ok(read_json(&self.path)?.unwrap_or_else(ExerciseType::defaults))
    }

    /// Find an activity by description, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no activity matches
    pub fn find(&self, description: &str) -> AppResult<ExerciseType> {
        let wanted = description.trim();
        self.all()?
            .into_iter()
            .find(|exercise| exercise.description.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::not_found(format!("Activity '{wanted}'")))
    }
}

/// Home-care remedies, including those taught by the user
#[derive(Debug, Clone)]
pub struct RemedyCatalog {
    path: PathBuf,
}

impl RemedyCatalog {
    /// Catalog stored at `path`
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Stored remedies, or the built-in table
    ///
    /// # Errors
    ///
    /// Returns an error if a stored catalog cannot be read or parsed
    pub fn all(&self) -> AppResult<Vec<Remedy>> {
        Ok(read_json(&self.path)?.unwrap_or_else(Remedy::defaults))
    }

    /// Replace the stored catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be written
    pub fn save(&self, remedies: &[Remedy]) -> AppResult<()> {
        write_json(&self.path, remedies)?;
        debug!(count = remedies.len(), "Saved remedy catalog");
        Ok(())
    }
}

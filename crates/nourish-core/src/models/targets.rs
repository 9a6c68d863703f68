// ABOUTME: Derived daily calorie, protein, water, and macro split targets
// ABOUTME: MacroSplit enforces that carbohydrate, protein, and fat shares total 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use serde::{Deserialize, Serialize};

/// Percentage of daily calories from carbohydrate, protein, and fat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Carbohydrate percentage (0-100)
    pub carb_pct: u8,
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroSplit {
    /// Create a new macro split
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(carb_pct: u8, protein_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            carb_pct.saturating_add(protein_pct).saturating_add(fat_pct) == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            carb_pct,
            protein_pct,
            fat_pct,
        }
    }

    /// Sum of the three shares
    #[must_use]
    #[allow(clippy::cast_lossless)] // From is not const
    pub const fn total(&self) -> u16 {
        self.carb_pct as u16 + self.protein_pct as u16 + self.fat_pct as u16
    }

    /// Get as a tuple (carb, protein, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.carb_pct, self.protein_pct, self.fat_pct)
    }
}

/// Daily targets derived from a profile; recomputed whenever the profile changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    /// Daily calorie target (kcal)
    pub calories: i32,
    /// Daily protein target (g)
    pub protein_g: i32,
    /// Daily water target (ml)
    pub water_ml: u32,
    /// Calorie share per macronutrient
    pub macro_split: MacroSplit,
}

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Advice catalog, beverage hydration factors, energy densities, and sensor defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable thresholds live in the
//! intelligence configuration; the values here are fixed vocabulary and
//! physical constants that callers compare against.

/// Fixed advice strings returned by the recommendation selector and scorer
pub mod advice {
    /// Tip for BMI below the underweight threshold
    pub const TIP_UNDERWEIGHT: &str = "Increase calorie intake with nutrient-dense foods.";
    /// Tip for BMI above the overweight threshold
    pub const TIP_OVERWEIGHT: &str = "Include more vegetables and lean protein for fat loss.";
    /// Tip for BMI within the healthy band
    pub const TIP_HEALTHY: &str = "Maintain balanced meals & steady exercise.";

    /// Supplement suggested when sleep falls short
    pub const SUPPLEMENT_MAGNESIUM: &str = "Magnesium for better sleep";
    /// Supplement suggested when protein intake is under goal
    pub const SUPPLEMENT_PROTEIN: &str = "Protein supplement";
    /// Supplement suggested after long screen exposure
    pub const SUPPLEMENT_VITAMIN_A: &str = "Vitamin A for eye health";
}

/// Energy density of macronutrients
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Nutrient keys used in intake and goal maps
pub mod nutrients {
    /// Protein in grams
    pub const PROTEIN: &str = "protein";
    /// Carbohydrates in grams
    pub const CARBS: &str = "carbs";
    /// Fat in grams
    pub const FAT: &str = "fat";
    /// Energy in kilocalories
    pub const CALORIES: &str = "calories";
}

/// Beverage hydration factors (fraction of volume counted as water)
pub mod hydration {
    /// Factor used for beverages missing from the table
    pub const DEFAULT_FACTOR: f64 = 1.0;

    /// Known beverages and their hydration factor
    pub const BEVERAGE_FACTORS: &[(&str, f64)] = &[
        ("Water", 1.0),
        ("Milk", 0.99),
        ("Tea", 0.98),
        ("Coffee", 0.90),
        ("Juice", 0.95),
        ("Soda", 0.90),
        ("Alcohol", 0.80),
        ("Sports Drink", 1.0),
    ];

    /// Default daily water goal in millilitres
    pub const DEFAULT_WATER_GOAL_ML: u32 = 2500;
}

/// Bluetooth heart-rate sensor defaults
pub mod heart_rate {
    /// GATT Heart Rate Measurement characteristic
    pub const MEASUREMENT_CHARACTERISTIC_UUID: &str = "00002a37-0000-1000-8000-00805f9b34fb";
    /// Value reported when no sensor reading is available
    pub const FALLBACK_BPM: u16 = 70;
    /// Device discovery window in seconds
    pub const DISCOVERY_TIMEOUT_SECS: u64 = 5;
    /// Flags bit signalling a 16-bit heart-rate value
    pub const FLAG_VALUE_FORMAT_U16: u8 = 0x01;
}

/// Service names used in structured logging
pub mod service_names {
    /// Default service name for log records
    pub const NOURISH: &str = "nourish";
    /// Heart-rate collaborator name used in error messages
    pub const HEART_RATE_SENSOR: &str = "heart-rate-sensor";
}

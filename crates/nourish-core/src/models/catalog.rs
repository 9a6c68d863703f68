// ABOUTME: Reference catalogs for foods, exercises, and home remedies
// ABOUTME: Built-in seed tables are used when no catalog file has been provided
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use serde::{Deserialize, Serialize};

/// Dietary classification of a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    /// Vegetarian
    Veg,
    /// Contains meat, fish, or egg
    NonVeg,
}

/// Nutrition facts for one serving of a dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Dish name
    pub name: String,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Carbohydrates per serving (g)
    pub carbs_g: f64,
    /// Fat per serving (g)
    pub fat_g: f64,
    /// Dietary classification
    pub diet: Diet,
    /// Serving description, e.g. "1 bowl"
    pub serving_unit: String,
    /// Serving weight (g)
    pub serving_weight_g: f64,
}

impl FoodItem {
    #[allow(clippy::too_many_arguments)]
    fn seed(
        name: &str,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        diet: Diet,
        serving_unit: &str,
        serving_weight_g: f64,
    ) -> Self {
        Self {
            name: name.to_owned(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            diet,
            serving_unit: serving_unit.to_owned(),
            serving_weight_g,
        }
    }

    /// Built-in food table
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::seed("Roti", 120.0, 3.0, 20.0, 1.0, Diet::Veg, "1 piece", 40.0),
            Self::seed("Dal Fry", 150.0, 8.0, 15.0, 5.0, Diet::Veg, "1 bowl", 150.0),
            Self::seed("Rice", 130.0, 2.0, 28.0, 0.0, Diet::Veg, "1 bowl", 150.0),
            Self::seed("Paneer Butter Masala", 350.0, 12.0, 10.0, 25.0, Diet::Veg, "1 bowl", 200.0),
            Self::seed("Chicken Curry", 400.0, 25.0, 5.0, 20.0, Diet::NonVeg, "1 bowl", 250.0),
            Self::seed("Egg Curry", 250.0, 14.0, 3.0, 18.0, Diet::NonVeg, "1 bowl", 200.0),
            Self::seed("Dosa", 180.0, 4.0, 25.0, 6.0, Diet::Veg, "1 piece", 80.0),
            Self::seed("Idli", 60.0, 2.0, 12.0, 0.0, Diet::Veg, "1 piece", 40.0),
            Self::seed("Upma", 200.0, 5.0, 30.0, 7.0, Diet::Veg, "1 plate", 150.0),
            Self::seed("Poha", 180.0, 4.0, 35.0, 5.0, Diet::Veg, "1 plate", 150.0),
            Self::seed("Sandwich (Veg)", 220.0, 6.0, 30.0, 8.0, Diet::Veg, "1 piece", 120.0),
            Self::seed("Oats", 150.0, 5.0, 25.0, 3.0, Diet::Veg, "1 bowl", 150.0),
        ]
    }
}

/// Exercise with its metabolic equivalent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseType {
    /// Activity description
    pub description: String,
    /// Metabolic equivalent of task
    pub met: f64,
}

impl ExerciseType {
    /// Built-in exercise table
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        [
            ("Running (6mph)", 9.8),
            ("Walking (brisk)", 3.5),
            ("Yoga", 2.5),
            ("Cycling", 7.5),
            ("Weight Lifting", 3.5),
            ("Swimming", 8.0),
        ]
        .into_iter()
        .map(|(description, met)| Self {
            description: description.to_owned(),
            met,
        })
        .collect()
    }
}

/// Home-care guidance for a reported condition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remedy {
    /// Lowercase phrase the user is matched against
    pub condition: String,
    /// Likely ailment
    pub detected_disease: String,
    /// Home remedy
    pub home_remedy: String,
    /// Meal advice
    pub meal: String,
    /// Foods to avoid
    pub what_not_to_eat: String,
    /// Sleep advice
    pub sleep: String,
    /// When to see a doctor
    pub doctor_advice: String,
    /// Possible causes
    #[serde(default)]
    pub possible_causes: String,
    /// Screen time guidance
    #[serde(default)]
    pub screen_time_guide: String,
    /// Sleep cycle guidance
    #[serde(default)]
    pub sleep_cycle_guide: String,
    /// Preferred Indian meal
    #[serde(default)]
    pub preferred_indian_meal: String,
    /// Severity, e.g. "Mild"
    #[serde(default)]
    pub severity_level: String,
    /// Expected time to relief
    #[serde(default)]
    pub time_to_relief: String,
}

impl Remedy {
    /// Built-in remedy table
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        let rows: [[&str; 13]; 6] = [
            [
                "headache", "Tension Headache", "Lemon water", "Light khichdi",
                "Caffeine", "Rest in a dark room", "See a doctor if it lasts over 2 days",
                "Dehydration, Stress", "High impact (Eye strain)",
                "Keep a fixed bedtime", "Khichdi", "Mild", "2-4 hours",
            ],
            [
                "fever", "Viral Fever", "Tulsi Tea", "Moong dal soup",
                "Cold Water", "Sleep 8-9 hours", "Consult a doctor above 102F",
                "Viral Infection", "No direct link",
                "Extra naps are fine", "Moong Dal Soup", "Moderate", "3-5 days",
            ],
            [
                "cold and cough", "Common Cold", "Turmeric Milk", "Hot soup",
                "Ice Cream", "Keep warm while sleeping", "See a doctor if breathing is hard",
                "Virus", "No direct link",
                "Sleep with head raised", "Hot Soup", "Mild", "1 week",
            ],
            [
                "indigestion", "Indigestion", "Ajwain Water", "Curd rice",
                "Oily Food", "Avoid lying down after meals", "Consult if pain persists",
                "Overeating", "Snacking while watching TV",
                "Eat dinner 3 hours before bed", "Curd Rice", "Mild", "1 day",
            ],
            [
                "cannot sleep", "Insomnia", "Chamomile Tea", "Warm milk at night",
                "Caffeine at night", "No screens 1hr before bed", "See a doctor after 2 weeks",
                "Stress/Screen Time", "Blue light blocks melatonin",
                "Keep 90 minute cycles", "Warm Milk", "Moderate", "Varies",
            ],
            [
                "acidity", "Acid Reflux", "Fennel Seeds", "Small frequent meals",
                "Fried Food", "Sleep on the left side", "Consult if it recurs daily",
                "Spicy Food", "Sedentary lifestyle",
                "Avoid late dinners", "Banana/Toast", "Mild", "2 hours",
            ],
        ];
        rows.iter().map(Self::from_row).collect()
    }

    fn from_row(row: &[&str; 13]) -> Self {
        Self {
            condition: row[0].to_owned(),
            detected_disease: row[1].to_owned(),
            home_remedy: row[2].to_owned(),
            meal: row[3].to_owned(),
            what_not_to_eat: row[4].to_owned(),
            sleep: row[5].to_owned(),
            doctor_advice: row[6].to_owned(),
            possible_causes: row[7].to_owned(),
            screen_time_guide: row[8].to_owned(),
            sleep_cycle_guide: row[9].to_owned(),
            preferred_indian_meal: row[10].to_owned(),
            severity_level: row[11].to_owned(),
            time_to_relief: row[12].to_owned(),
        }
    }
}

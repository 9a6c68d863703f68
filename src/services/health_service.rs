// ABOUTME: Health service facade wiring configuration, storage, and the scoring engine
// ABOUTME: Every CLI command goes through here so storage rules live in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Health service
//!
//! Owns the repositories for one data directory and applies the engine to what
//! they hold. Callers pass dates and times in explicitly so the service never
//! reads the clock.

use crate::config::StorageConfig;
use crate::storage::{
    ExerciseCatalog, FoodCatalog, JsonProfileStore, ProfileRepository, RecordLog, RemedyCatalog,
};
use chrono::{NaiveDate, NaiveTime};
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{
    ActivityLevel, DailySample, ExerciseEntry, FoodEntry, FoodItem, Gender, Goal, MealType,
    Profile, Remedy, ScoreReport, StoredProfile, WaterEntry, WeightEntry,
};
use nourish_intelligence::config::IntelligenceConfig;
use nourish_intelligence::meal_planner::{generate_meal_plan, DayPlan, MealPlanRequest};
use nourish_intelligence::metric_scorer::{goals_from_targets, score_daily, NutritionGoals};
use nourish_intelligence::nutrition_calculator::{
    calculate_exercise_calories, calculate_metabolic_breakdown, MetabolicBreakdown,
};
use nourish_intelligence::progress::{
    daily_stats, effective_hydration_ml, hydration_progress, logging_streak, weekly_calories,
    DailyStats,
};
use nourish_intelligence::recommendation::{build_nutrition_plan, NutritionPlan};
use nourish_intelligence::remedy_matcher::{find_best_match, teach, RemedyMatch};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Stored profile with the targets it currently implies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Stored profile
    pub stored: StoredProfile,
    /// BMR, TDEE, and targets
    pub breakdown: MetabolicBreakdown,
}

/// Partial profile update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    pub name: Option<String>,
    /// New age
    pub age: Option<u32>,
    /// New gender
    pub gender: Option<Gender>,
    /// New height (cm)
    pub height_cm: Option<f64>,
    /// New weight (kg)
    pub weight_kg: Option<f64>,
    /// New activity level
    pub activity_level: Option<ActivityLevel>,
    /// New goal
    pub goal: Option<Goal>,
    /// New water goal (ml)
    pub water_goal_ml: Option<u32>,
    /// New vegetarian preference
    pub vegetarian: Option<bool>,
}

impl ProfileUpdate {
    fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        if let Some(height_cm) = self.height_cm {
            profile.height_cm = height_cm;
        }
        if let Some(weight_kg) = self.weight_kg {
            profile.weight_kg = weight_kg;
        }
        if let Some(activity_level) = self.activity_level {
            profile.activity_level = activity_level;
        }
        if let Some(goal) = self.goal {
            profile.goal = goal;
        }
        if let Some(water_goal_ml) = self.water_goal_ml {
            profile.water_goal_ml = water_goal_ml;
        }
        if let Some(vegetarian) = self.vegetarian {
            profile.vegetarian = vegetarian;
        }
    }
}

/// Dashboard header for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    /// Totals for the day
    pub stats: DailyStats,
    /// Calorie target (kcal)
    pub target_calories: i32,
    /// Eaten minus burnt (kcal)
    pub net_calories: f64,
    /// Calories left under the target (kcal)
    pub remaining_calories: f64,
    /// Water goal (ml)
    pub water_goal_ml: u32,
    /// Share of the water goal reached (0-1)
    pub hydration_progress: f64,
    /// Consecutive days with food logged
    pub streak_days: u32,
    /// Change since onboarding (kg)
    pub weight_change_kg: f64,
}

/// Facade over storage and the engine for one data directory
pub struct HealthService {
    config: IntelligenceConfig,
    profiles: Box<dyn ProfileRepository>,
    food_log: RecordLog<FoodEntry>,
    exercise_log: RecordLog<ExerciseEntry>,
    water_log: RecordLog<WaterEntry>,
    weight_log: RecordLog<WeightEntry>,
    samples: RecordLog<DailySample>,
    food_catalog: FoodCatalog,
    exercise_catalog: ExerciseCatalog,
    remedies: RemedyCatalog,
}

impl HealthService {
    /// Service over the files laid out by `storage`
    #[must_use]
    pub fn new(storage: &StorageConfig, config: IntelligenceConfig) -> Self {
        Self::with_profile_repository(
            storage,
            config,
            Box::new(JsonProfileStore::new(storage.profile_path())),
        )
    }

    /// Service with a caller-supplied profile repository
    #[must_use]
    pub fn with_profile_repository(
        storage: &StorageConfig,
        config: IntelligenceConfig,
        profiles: Box<dyn ProfileRepository>,
    ) -> Self {
        Self {
            config,
            profiles,
            food_log: RecordLog::new(storage.food_log_path()),
            exercise_log: RecordLog::new(storage.exercise_log_path()),
            water_log: RecordLog::new(storage.water_log_path()),
            weight_log: RecordLog::new(storage.weight_log_path()),
            samples: RecordLog::new(storage.samples_path()),
            food_catalog: FoodCatalog::new(
                storage.food_catalog_path(),
                storage.custom_foods_path(),
            ),
            exercise_catalog: ExerciseCatalog::new(storage.exercise_catalog_path()),
            remedies: RemedyCatalog::new(storage.remedy_catalog_path()),
        }
    }

    /// Engine configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Food catalog, including custom dishes
    #[must_use]
    pub const fn food_catalog(&self) -> &FoodCatalog {
        &self.food_catalog
    }

    /// Exercise catalog
    #[must_use]
    pub const fn exercise_catalog(&self) -> &ExerciseCatalog {
        &self.exercise_catalog
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    /// Create the profile, replacing any existing one, and seed the weight history
    ///
    /// # Errors
    ///
    /// Returns an error if the profile's body metrics are invalid or storage fails
    pub fn onboard(&self, profile: Profile, today: NaiveDate) -> AppResult<ProfileSummary> {
        let breakdown = calculate_metabolic_breakdown(&profile, &self.config.nutrition)?;
        let stored = StoredProfile::onboard(profile);
        self.profiles.save(&stored)?;

        if self.weight_log.read_all()?.is_empty() {
            self.weight_log.append(&WeightEntry {
                date: today,
                weight_kg: stored.profile.weight_kg,
            })?;
        }

        info!(
            name = %stored.profile.name,
            calories = breakdown.targets.calories,
            "Onboarded profile"
        );
        Ok(ProfileSummary { stored, breakdown })
    }

    /// Change profile fields and recompute targets; the starting weight is kept
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` before onboarding, or an error if the result is invalid
    pub fn update_profile(&self, update: ProfileUpdate) -> AppResult<ProfileSummary> {
        let mut stored = self.stored_profile()?;
        update.apply(&mut stored.profile);
        let breakdown = calculate_metabolic_breakdown(&stored.profile, &self.config.nutrition)?;
        self.profiles.save(&stored)?;
        Ok(ProfileSummary { stored, breakdown })
    }

    /// Stored profile with its current targets
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` before onboarding
    pub fn profile(&self) -> AppResult<ProfileSummary> {
        let stored = self.stored_profile()?;
        let breakdown = calculate_metabolic_breakdown(&stored.profile, &self.config.nutrition)?;
        Ok(ProfileSummary { stored, breakdown })
    }

    fn stored_profile(&self) -> AppResult<StoredProfile> {
        self.profiles
            .load()?
            .ok_or_else(|| AppError::not_found("Profile"))
    }

    // ------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------

    /// Log a catalog dish, scaling its nutrients by `quantity` servings
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive quantity and `ResourceNotFound` for an unknown dish
    pub fn log_food(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        dish: &str,
        meal_type: MealType,
        quantity: f64,
    ) -> AppResult<FoodEntry> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::invalid_input("Quantity must be positive"));
        }
        let food = self.food_catalog.find(dish)?;
        let entry = FoodEntry {
            date,
            time,
            dish: food.name,
            meal_type,
            quantity,
            calories: food.calories * quantity,
            protein_g: food.protein_g * quantity,
            carbs_g: food.carbs_g * quantity,
            fat_g: food.fat_g * quantity,
        };
        self.food_log.append(&entry)?;
        Ok(entry)
    }

    /// Add a dish to the custom catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the dish is invalid or storage fails
    pub fn add_custom_food(&self, food: FoodItem) -> AppResult<()> {
        self.food_catalog.add_custom(food)
    }

    /// Log an activity, estimating calories from its MET and the current weight
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` before onboarding or for an unknown activity
    pub fn log_exercise(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        activity: &str,
        duration_min: f64,
    ) -> AppResult<ExerciseEntry> {
        let stored = self.stored_profile()?;
        let exercise = self.exercise_catalog.find(activity)?;
        let calories_burnt =
            calculate_exercise_calories(exercise.met, stored.profile.weight_kg, duration_min)?;
        let entry = ExerciseEntry {
            date,
            time,
            activity: exercise.description,
            duration_min,
            calories_burnt,
        };
        self.exercise_log.append(&entry)?;
        Ok(entry)
    }

    /// Log a drink with its hydration-adjusted volume
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative volume
    pub fn log_water(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        beverage: &str,
        volume_ml: f64,
    ) -> AppResult<WaterEntry> {
        let effective_ml = effective_hydration_ml(beverage, volume_ml)?;
        let entry = WaterEntry {
            date,
            time,
            beverage: beverage.trim().to_owned(),
            volume_ml,
            effective_ml,
        };
        self.water_log.append(&entry)?;
        Ok(entry)
    }

    /// Record a weigh-in, update the profile's current weight, and recompute targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive weight and `ResourceNotFound` before onboarding
    pub fn log_weight(&self, date: NaiveDate, weight_kg: f64) -> AppResult<ProfileSummary> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive"));
        }
        let summary = self.update_profile(ProfileUpdate {
            weight_kg: Some(weight_kg),
            ..ProfileUpdate::default()
        })?;
        self.weight_log.append(&WeightEntry { date, weight_kg })?;
        debug!(weight_kg, calories = summary.breakdown.targets.calories, "Logged weight");
        Ok(summary)
    }

    /// Weight history in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read
    pub fn weight_history(&self) -> AppResult<Vec<WeightEntry>> {
        self.weight_log.read_all()
    }

    /// Append a daily sample after validating it
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative durations or intakes
    pub fn record_sample(&self, sample: &DailySample) -> AppResult<()> {
        sample.validate()?;
        self.samples.append(sample)
    }

    // ------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------

    /// Totals, targets, hydration, and streak for a day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` before onboarding, or an error if a log cannot be read
    pub fn daily_snapshot(&self, date: NaiveDate) -> AppResult<DailySnapshot> {
        let summary = self.profile()?;
        let foods = self.food_log.read_all()?;
        let stats = daily_stats(
            date,
            &foods,
            &self.exercise_log.read_on(date)?,
            &self.water_log.read_on(date)?,
        );
        let targets = summary.breakdown.targets;

        Ok(DailySnapshot {
            target_calories: targets.calories,
            net_calories: stats.net_calories(),
            remaining_calories: stats.remaining_calories(targets.calories),
            water_goal_ml: targets.water_ml,
            hydration_progress: hydration_progress(stats.water_ml, targets.water_ml),
            streak_days: logging_streak(&foods, date),
            weight_change_kg: summary.stored.weight_change(),
            stats,
        })
    }

    /// Score the samples recorded on `date`, merged into one day
    ///
    /// The latest sample supplies the measurements; meal intakes add up.
    ///
    /// Nutrient goals come from the profile's targets; without a profile no nutrient
    /// is evaluated and the protein supplement check uses its default goal.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no sample exists for the date
    pub fn daily_report(&self, date: NaiveDate) -> AppResult<ScoreReport> {
        let samples = self.samples.read_on(date)?;
        let day = DailySample::aggregate_by_date(&samples)
            .remove(&date)
            .ok_or_else(|| AppError::not_found(format!("Daily sample for {date}")))?;
        let goals = self.nutrition_goals()?;
        score_daily(&day, &goals, &self.config.scoring)
    }

    fn nutrition_goals(&self) -> AppResult<NutritionGoals> {
        Ok(self
            .profiles
            .load()?
            .map(|stored| calculate_metabolic_breakdown(&stored.profile, &self.config.nutrition))
            .transpose()?
            .map(|breakdown| goals_from_targets(&breakdown.targets))
            .unwrap_or_default())
    }

    /// Targets in grams with BMI advice
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` before onboarding
    pub fn nutrition_plan(&self) -> AppResult<NutritionPlan> {
        let summary = self.profile()?;
        let profile = &summary.stored.profile;
        build_nutrition_plan(
            &summary.breakdown.targets,
            profile.weight_kg,
            profile.height_cm,
            &self.config.recommendation.bmi,
        )
    }

    /// Calories eaten per week keyed by the week's Monday
    ///
    /// # Errors
    ///
    /// Returns an error if the food log cannot be read
    pub fn weekly_calories(&self) -> AppResult<BTreeMap<NaiveDate, f64>> {
        Ok(weekly_calories(&self.food_log.read_all()?))
    }

    /// Consecutive days with food logged, ending `today` or yesterday
    ///
    /// # Errors
    ///
    /// Returns an error if the food log cannot be read
    pub fn streak(&self, today: NaiveDate) -> AppResult<u32> {
        Ok(logging_streak(&self.food_log.read_all()?, today))
    }

    /// Plan meals for `days` days; `vegetarian` overrides the profile preference
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` before onboarding or when no dish fits the diet
    pub fn meal_plan<R: Rng + ?Sized>(
        &self,
        days: u32,
        vegetarian: Option<bool>,
        rng: &mut R,
    ) -> AppResult<Vec<DayPlan>> {
        let summary = self.profile()?;
        let profile = &summary.stored.profile;
        let request = MealPlanRequest {
            target_calories: summary.breakdown.targets.calories,
            goal: profile.goal,
            vegetarian: vegetarian.unwrap_or(profile.vegetarian),
            days,
        };
        generate_meal_plan(
            &self.food_catalog.all()?,
            &request,
            &self.config.nutrition.meal_plan,
            rng,
        )
    }

    // ------------------------------------------------------------------
    // Remedies
    // ------------------------------------------------------------------

    /// Closest remedy for a free-text description
    ///
    /// # Errors
    ///
    /// Returns an error if the remedy catalog cannot be read
    pub fn lookup_remedy(&self, input: &str) -> AppResult<Option<RemedyMatch>> {
        let remedies = self.remedies.all()?;
        Ok(find_best_match(
            input,
            &remedies,
            self.config.recommendation.remedy.min_similarity,
        ))
    }

    /// Store a remedy for a condition the lookup did not recognize
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank condition, or a storage error
    pub fn teach_remedy(&self, input: &str, details: Remedy) -> AppResult<Remedy> {
        let mut remedies = self.remedies.all()?;
        let learned = teach(&mut remedies, input, details)?;
        self.remedies.save(&remedies)?;
        info!(condition = %learned.condition, "Learned remedy");
        Ok(learned)
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Delete the profile and every log; catalogs and learned remedies stay
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be removed
    pub fn reset(&self) -> AppResult<()> {
        self.profiles.clear()?;
        self.food_log.clear()?;
        self.exercise_log.clear()?;
        self.water_log.clear()?;
        self.weight_log.clear()?;
        self.samples.clear()?;
        info!("Cleared profile and logs");
        Ok(())
    }
}

//! Data model - records persisted to the store and plan types

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// Anything stored in a persistent collection, addressed by a caller-generated id
pub trait Record {
    fn id(&self) -> &str;
}

/// Numbers written by earlier versions may be any JSON number, or `null` for NaN
fn number_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Workout split a log entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    Push,
    Pull,
    Legs,
}

impl WorkoutCategory {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutCategory::Push => "Push",
            WorkoutCategory::Pull => "Pull",
            WorkoutCategory::Legs => "Legs",
        }
    }

    pub fn all() -> &'static [WorkoutCategory] {
        &[WorkoutCategory::Push, WorkoutCategory::Pull, WorkoutCategory::Legs]
    }
}

/// Exercise log entry (namespace `exerciseLogs`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: String,
    pub date: String,
    pub workout_type: WorkoutCategory,
    /// Catalog exercise name, not checked against the catalog
    pub exercise: String,
    /// Stored as entered, not validated
    #[serde(deserialize_with = "number_or_nan")]
    pub sets: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub reps: f64,
    /// Working weight in kg
    #[serde(deserialize_with = "number_or_nan")]
    pub weight: f64,
}

impl LogRecord {
    /// New entry dated today with a generated id
    pub fn new(workout_type: WorkoutCategory, exercise: &str, sets: f64, reps: f64, weight: f64) -> Self {
        Self::at(Local::now(), workout_type, exercise, sets, reps, weight)
    }

    fn at(
        now: DateTime<Local>,
        workout_type: WorkoutCategory,
        exercise: &str,
        sets: f64,
        reps: f64,
        weight: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            workout_type,
            exercise: exercise.to_string(),
            sets,
            reps,
            weight,
        }
    }
}

impl Record for LogRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Eaten meal (namespace `meals`). Nutrients are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    #[serde(deserialize_with = "number_or_nan")]
    pub calories: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub protein: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub carbs: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub fats: f64,
}

impl MealRecord {
    /// Build a meal from a catalog food and a quantity in grams
    pub fn from_food(food: &FoodItem, grams: f64) -> Self {
        Self::from_food_at(food, grams, Local::now())
    }

    pub(crate) fn from_food_at(food: &FoodItem, grams: f64, now: DateTime<Local>) -> Self {
        let grams = grams.max(0.0);
        let portion = food.portion(grams);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("{} ({}g)", food.name, grams),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            calories: portion.calories,
            protein: portion.protein,
            carbs: portion.carbs,
            fats: portion.fats,
        }
    }
}

impl Record for MealRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Catalog food, values per 100g
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodItem {
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Nutrients of a concrete portion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portion {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl FoodItem {
    /// Scale the per-100g baseline to `grams`.
    /// Calories are rounded to whole kcal, macros to one decimal.
    pub fn portion(&self, grams: f64) -> Portion {
        let multiplier = grams / 100.0;
        Portion {
            calories: (self.calories * multiplier).round(),
            protein: (self.protein * multiplier * 10.0).round() / 10.0,
            carbs: (self.carbs * multiplier * 10.0).round() / 10.0,
            fats: (self.fats * multiplier * 10.0).round() / 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Very,
    Extra,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

/// User goals as entered so far; any field may still be missing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoals {
    pub weight: Option<f64>,
    pub target_weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

impl UserGoals {
    pub fn is_complete(&self) -> bool {
        self.weight.is_some()
            && self.target_weight.is_some()
            && self.height.is_some()
            && self.age.is_some()
            && self.gender.is_some()
            && self.activity_level.is_some()
            && self.goal.is_some()
    }
}

/// One meal slot of a diet plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    pub id: &'static str,
    pub name: &'static str,
    pub time: &'static str,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
    pub suggestions: &'static [&'static str],
}

/// Daily targets plus the meal split
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlan {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
    pub meals: Vec<PlannedMeal>,
}

//! Diet plan calculator
//!
//! Fixed-ratio placeholder: the daily energy target is a configured baseline,
//! not derived from the user's weight, height, age or activity yet.

use tracing::debug;

use crate::models::{DietPlan, PlannedMeal, UserGoals};

/// Default daily calorie baseline
pub const DEFAULT_BASELINE_CALORIES: f64 = 2000.0;

const PROTEIN_SHARE: f64 = 0.3;
const CARBS_SHARE: f64 = 0.4;
const FATS_SHARE: f64 = 0.3;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

struct MealSlot {
    id: &'static str,
    name: &'static str,
    time: &'static str,
    share: f64,
    suggestions: &'static [&'static str],
}

const MEAL_SLOTS: &[MealSlot] = &[
    MealSlot {
        id: "1",
        name: "Breakfast",
        time: "8:00 AM",
        share: 0.3,
        suggestions: &["Oatmeal with protein powder", "Greek yogurt with berries"],
    },
    MealSlot {
        id: "2",
        name: "Lunch",
        time: "1:00 PM",
        share: 0.35,
        suggestions: &["Grilled chicken with rice", "Salmon with quinoa"],
    },
    MealSlot {
        id: "3",
        name: "Dinner",
        time: "7:00 PM",
        share: 0.35,
        suggestions: &["Lean beef with sweet potato", "Turkey with vegetables"],
    },
];

/// Plan calculator with a fixed energy baseline
#[derive(Debug, Clone, Copy)]
pub struct PlanCalculator {
    baseline_calories: f64,
}

impl Default for PlanCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_BASELINE_CALORIES)
    }
}

impl PlanCalculator {
    pub fn new(baseline_calories: f64) -> Self {
        Self { baseline_calories }
    }

    /// Build the plan for `goals`. Total over every input, including empty goals.
    pub fn calculate(&self, goals: &UserGoals) -> DietPlan {
        // TODO: derive the baseline from goals once a BMR formula is chosen
        debug!(
            complete = goals.is_complete(),
            baseline = self.baseline_calories,
            "goals not used yet, planning from baseline"
        );

        let kcal = self.baseline_calories;
        let meals = MEAL_SLOTS
            .iter()
            .map(|slot| {
                let share = kcal * slot.share;
                PlannedMeal {
                    id: slot.id,
                    name: slot.name,
                    time: slot.time,
                    calories: round(share),
                    protein: grams(share, PROTEIN_SHARE, KCAL_PER_G_PROTEIN),
                    carbs: grams(share, CARBS_SHARE, KCAL_PER_G_CARBS),
                    fats: grams(share, FATS_SHARE, KCAL_PER_G_FAT),
                    suggestions: slot.suggestions,
                }
            })
            .collect();

        DietPlan {
            calories: round(kcal),
            protein: grams(kcal, PROTEIN_SHARE, KCAL_PER_G_PROTEIN),
            carbs: grams(kcal, CARBS_SHARE, KCAL_PER_G_CARBS),
            fats: grams(kcal, FATS_SHARE, KCAL_PER_G_FAT),
            meals,
        }
    }
}

fn grams(kcal: f64, share: f64, kcal_per_gram: f64) -> i64 {
    round(kcal * share / kcal_per_gram)
}

/// Round half up
fn round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

//! Stats module - totals derived from the current record collections
//!
//! Nothing here is cached: every figure is folded from the records it is
//! given, so it always matches the collection it came from.

use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

use crate::models::{LogRecord, MealRecord, PlannedMeal};

/// Records carrying energy and macronutrient values
pub trait MacroFields {
    fn calories(&self) -> f64;
    fn protein(&self) -> f64;
    fn carbs(&self) -> f64;
    fn fats(&self) -> f64;
}

impl MacroFields for MealRecord {
    fn calories(&self) -> f64 {
        self.calories
    }
    fn protein(&self) -> f64 {
        self.protein
    }
    fn carbs(&self) -> f64 {
        self.carbs
    }
    fn fats(&self) -> f64 {
        self.fats
    }
}

impl MacroFields for PlannedMeal {
    fn calories(&self) -> f64 {
        self.calories as f64
    }
    fn protein(&self) -> f64 {
        self.protein as f64
    }
    fn carbs(&self) -> f64 {
        self.carbs as f64
    }
    fn fats(&self) -> f64 {
        self.fats as f64
    }
}

/// Unrounded running totals
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Totals {
    pub fn of<T: MacroFields>(record: &T) -> Self {
        Self {
            calories: record.calories(),
            protein: record.protein(),
            carbs: record.carbs(),
            fats: record.fats(),
        }
    }

    /// Rounded for display: whole kcal, macros to one decimal
    pub fn display(&self) -> DisplayTotals {
        DisplayTotals {
            calories: self.calories.round() as i64,
            protein: round_1dp(self.protein),
            carbs: round_1dp(self.carbs),
            fats: round_1dp(self.fats),
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Self {
        iter.fold(Totals::default(), Add::add)
    }
}

/// Totals as shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DisplayTotals {
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sum every macro field over `items`; empty input gives all zeros
pub fn reduce<T: MacroFields>(items: &[T]) -> Totals {
    items.iter().map(Totals::of).sum()
}

/// Whole-log training figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub entries: usize,
    pub sets: f64,
    pub reps: f64,
    /// sets x reps x weight, kg
    pub volume_kg: f64,
}

/// Derived views over the exercise log
pub struct TrainingAnalytics<'a> {
    logs: &'a [LogRecord],
}

impl<'a> TrainingAnalytics<'a> {
    pub fn new(logs: &'a [LogRecord]) -> Self {
        Self { logs }
    }

    pub fn summary(&self) -> TrainingSummary {
        self.logs.iter().fold(TrainingSummary::default(), |acc, log| TrainingSummary {
            entries: acc.entries + 1,
            sets: acc.sets + log.sets,
            reps: acc.reps + log.sets * log.reps,
            volume_kg: acc.volume_kg + entry_volume(log),
        })
    }

    /// Volume for exercises whose name contains `exercise`, case-insensitive
    pub fn total_volume(&self, exercise: &str) -> f64 {
        let needle = exercise.to_lowercase();
        self.logs
            .iter()
            .filter(|l| l.exercise.to_lowercase().contains(&needle))
            .map(entry_volume)
            .sum()
    }

    /// (date, weight) points for one exercise in log order, for the progress chart
    pub fn weight_series(&self, exercise: &str) -> Vec<(&'a str, f64)> {
        self.logs
            .iter()
            .filter(|l| l.exercise == exercise)
            .map(|l| (l.date.as_str(), l.weight))
            .collect()
    }

    /// Heaviest logged weight per exercise, in order of first appearance
    pub fn best_weights(&self) -> Vec<(&'a str, f64)> {
        let mut best: Vec<(&'a str, f64)> = Vec::new();
        for log in self.logs {
            match best.iter_mut().find(|(name, _)| *name == log.exercise) {
                Some(entry) => entry.1 = entry.1.max(log.weight),
                None => best.push((log.exercise.as_str(), log.weight)),
            }
        }
        best
    }
}

fn entry_volume(log: &LogRecord) -> f64 {
    log.sets * log.reps * log.weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutCategory;
    use crate::store::{self, MEALS_NAMESPACE, MemoryStore, PersistentCollection};

    fn create_meal(id: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> MealRecord {
        MealRecord {
            id: id.to_string(),
            name: format!("meal {id}"),
            date: "2024-05-01".to_string(),
            time: "08:00:00".to_string(),
            calories,
            protein,
            carbs,
            fats,
        }
    }

    fn create_log(exercise: &str, sets: f64, reps: f64, weight: f64, date: &str) -> LogRecord {
        LogRecord {
            id: format!("{exercise}-{date}"),
            date: date.to_string(),
            workout_type: WorkoutCategory::Push,
            exercise: exercise.to_string(),
            sets,
            reps,
            weight,
        }
    }

    #[test]
    fn test_reduce_empty() {
        let totals = reduce::<MealRecord>(&[]);
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.display(), DisplayTotals::default());
    }

    #[test]
    fn test_reduce_sums_each_field() {
        let meals = vec![
            create_meal("a", 248.0, 46.5, 0.0, 5.4),
            create_meal("b", 389.0, 16.9, 66.3, 6.9),
        ];
        let totals = reduce(&meals);
        assert_eq!(totals.calories, 637.0);
        assert!((totals.protein - 63.4).abs() < 1e-9);
        assert!((totals.carbs - 66.3).abs() < 1e-9);
        assert!((totals.fats - 12.3).abs() < 1e-9);
    }

    #[test]
    fn test_add_then_reduce_matches_running_total() {
        let mut meals = vec![create_meal("a", 120.0, 3.3, 20.1, 1.2)];
        let before = reduce(&meals);
        let extra = create_meal("b", 95.0, 0.5, 25.0, 0.3);
        meals = store::add(&meals, extra.clone());
        assert_eq!(reduce(&meals), before + Totals::of(&extra));
    }

    #[test]
    fn test_display_rounding_after_summation() {
        // Three portions of 0.04g fat: rounding each first would give 0.0
        let meals = vec![
            create_meal("a", 0.4, 0.0, 0.0, 0.04),
            create_meal("b", 0.4, 0.0, 0.0, 0.04),
            create_meal("c", 0.4, 0.0, 0.0, 0.04),
        ];
        let shown = reduce(&meals).display();
        assert_eq!(shown.calories, 1);
        assert_eq!(shown.fats, 0.1);
    }

    #[test]
    fn test_chicken_breast_add_and_remove() {
        let kv = MemoryStore::new();
        let collection = PersistentCollection::<MealRecord, _>::new(&kv, MEALS_NAMESPACE);
        let meals = collection.load();
        assert!(meals.is_empty());

        let chicken = create_meal("chicken", 248.0, 46.5, 0.0, 5.4);
        let meals = store::add(&meals, chicken);
        collection.save(&meals).unwrap();
        let totals = reduce(&collection.load());
        assert_eq!(
            totals,
            Totals { calories: 248.0, protein: 46.5, carbs: 0.0, fats: 5.4 }
        );

        let meals = store::remove(&meals, "chicken");
        collection.save(&meals).unwrap();
        assert_eq!(reduce(&collection.load()), Totals::default());
    }

    #[test]
    fn test_training_summary() {
        let logs = vec![
            create_log("Flat Barbell Bench Press", 4.0, 8.0, 80.0, "2024-05-01"),
            create_log("Lateral Raises", 3.0, 12.0, 10.0, "2024-05-01"),
        ];
        let summary = TrainingAnalytics::new(&logs).summary();
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.sets, 7.0);
        assert_eq!(summary.reps, 68.0);
        assert_eq!(summary.volume_kg, 2560.0 + 360.0);
    }

    #[test]
    fn test_training_summary_empty() {
        assert_eq!(TrainingAnalytics::new(&[]).summary(), TrainingSummary::default());
    }

    #[test]
    fn test_total_volume_case_insensitive() {
        let logs = vec![
            create_log("Romanian Deadlifts", 4.0, 10.0, 60.0, "2024-05-01"),
            create_log("Deadlifts", 4.0, 5.0, 140.0, "2024-05-02"),
            create_log("Leg Press", 3.0, 10.0, 200.0, "2024-05-03"),
        ];
        let analytics = TrainingAnalytics::new(&logs);
        assert_eq!(analytics.total_volume("deadlift"), 2400.0 + 2800.0);
        assert_eq!(analytics.total_volume("curl"), 0.0);
    }

    #[test]
    fn test_weight_series_keeps_log_order() {
        let logs = vec![
            create_log("Back Squats", 4.0, 6.0, 100.0, "2024-05-03"),
            create_log("Leg Press", 3.0, 10.0, 200.0, "2024-05-01"),
            create_log("Back Squats", 4.0, 6.0, 102.5, "2024-05-01"),
        ];
        let series = TrainingAnalytics::new(&logs).weight_series("Back Squats");
        assert_eq!(series, vec![("2024-05-03", 100.0), ("2024-05-01", 102.5)]);
    }

    #[test]
    fn test_best_weights() {
        let logs = vec![
            create_log("Pull-Ups", 3.0, 8.0, 0.0, "2024-05-01"),
            create_log("Barbell Rows", 4.0, 8.0, 70.0, "2024-05-01"),
            create_log("Pull-Ups", 3.0, 8.0, 10.0, "2024-05-02"),
            create_log("Barbell Rows", 4.0, 8.0, 65.0, "2024-05-02"),
        ];
        let best = TrainingAnalytics::new(&logs).best_weights();
        assert_eq!(best, vec![("Pull-Ups", 10.0), ("Barbell Rows", 70.0)]);
    }
}

//! fitlog - Local workout and nutrition tracker
//!
//! Meals and exercise logs live in a local key-value store; totals and
//! diet plans are computed from them on demand.

pub mod catalog;
pub mod models;
pub mod planner;
pub mod search;
pub mod stats;
pub mod store;
pub mod tracker;
pub mod tui;

pub use models::{DietPlan, FoodItem, LogRecord, MealRecord, Record, UserGoals, WorkoutCategory};
pub use planner::PlanCalculator;
pub use store::{KeyValueStore, MemoryStore, PersistentCollection, SqliteStore};
pub use tracker::{ExerciseLog, Journal, MealJournal};

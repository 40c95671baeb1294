//! Static reference data bundled with the app

pub mod exercises;
pub mod foods;

pub use exercises::{Exercise, MuscleGroup, exercises_for, find_exercise_by_name, get_all_exercises};
pub use foods::{FOOD_DATABASE, find_food};

//! Exercise catalog - push/pull/legs split

use crate::models::WorkoutCategory;

/// Target muscle group of a catalog exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuscleGroup {
    Chest,
    Shoulders,
    Triceps,
    Back,
    Biceps,
    RearDelts,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
}

impl MuscleGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Back => "back",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::RearDelts => "rear delts",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Exercise {
    pub name: &'static str,
    pub category: WorkoutCategory,
    pub sets: u32,
    /// Prescribed rep range, e.g. "6-8"
    pub reps: &'static str,
    pub muscle_group: MuscleGroup,
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
    pub focus: Option<&'static str>,
    pub is_compound: bool,
}

pub const PUSH_EXERCISES: &[Exercise] = &[
    Exercise {
        name: "Flat Barbell Bench Press",
        category: WorkoutCategory::Push,
        sets: 4,
        reps: "6-8",
        muscle_group: MuscleGroup::Chest,
        primary: &["Pectoralis major", "Anterior deltoids", "Triceps"],
        secondary: &["Serratus anterior", "Core"],
        focus: None,
        is_compound: true,
    },
    Exercise {
        name: "Incline Dumbbell Press",
        category: WorkoutCategory::Push,
        sets: 3,
        reps: "8-10",
        muscle_group: MuscleGroup::Chest,
        primary: &["Upper chest"],
        secondary: &[],
        focus: Some("Upper chest (clavicular head)"),
        is_compound: true,
    },
    Exercise {
        name: "Overhead Barbell Press",
        category: WorkoutCategory::Push,
        sets: 4,
        reps: "6-8",
        muscle_group: MuscleGroup::Shoulders,
        primary: &["Front deltoids", "Triceps"],
        secondary: &["Core stabilizers"],
        focus: None,
        is_compound: true,
    },
    Exercise {
        name: "Lateral Raises",
        category: WorkoutCategory::Push,
        sets: 3,
        reps: "12-15",
        muscle_group: MuscleGroup::Shoulders,
        primary: &["Side deltoids"],
        secondary: &[],
        focus: Some("Shoulder width"),
        is_compound: false,
    },
    Exercise {
        name: "Tricep Rope Pushdowns",
        category: WorkoutCategory::Push,
        sets: 3,
        reps: "12-15",
        muscle_group: MuscleGroup::Triceps,
        primary: &["Triceps"],
        secondary: &[],
        focus: Some("Tricep isolation"),
        is_compound: false,
    },
];

pub const PULL_EXERCISES: &[Exercise] = &[
    Exercise {
        name: "Deadlifts",
        category: WorkoutCategory::Pull,
        sets: 4,
        reps: "5-6",
        muscle_group: MuscleGroup::Back,
        primary: &["Erector spinae", "Glutes", "Traps"],
        secondary: &["Hamstrings", "Core"],
        focus: None,
        is_compound: true,
    },
    Exercise {
        name: "Barbell Rows",
        category: WorkoutCategory::Pull,
        sets: 4,
        reps: "8-10",
        muscle_group: MuscleGroup::Back,
        primary: &["Latissimus dorsi", "Rhomboids"],
        secondary: &["Biceps", "Rear deltoids"],
        focus: None,
        is_compound: true,
    },
    Exercise {
        name: "Pull-Ups",
        category: WorkoutCategory::Pull,
        sets: 3,
        reps: "8-12",
        muscle_group: MuscleGroup::Back,
        primary: &["Latissimus dorsi", "Teres major"],
        secondary: &["Biceps"],
        focus: None,
        is_compound: true,
    },
    Exercise {
        name: "Barbell Bicep Curls",
        category: WorkoutCategory::Pull,
        sets: 3,
        reps: "10-12",
        muscle_group: MuscleGroup::Biceps,
        primary: &["Biceps brachii"],
        secondary: &[],
        focus: Some("Bicep peak"),
        is_compound: false,
    },
    Exercise {
        name: "Hammer Curls",
        category: WorkoutCategory::Pull,
        sets: 3,
        reps: "12-15",
        muscle_group: MuscleGroup::Biceps,
        primary: &["Brachialis", "Brachioradialis"],
        secondary: &[],
        focus: Some("Forearm development"),
        is_compound: false,
    },
];

pub const LEG_EXERCISES: &[Exercise] = &[
    Exercise {
        name: "Back Squats",
        category: WorkoutCategory::Legs,
        sets: 4,
        reps: "6-8",
        muscle_group: MuscleGroup::Quads,
        primary: &["Quadriceps", "Glutes"],
        secondary: &["Core", "Lower back"],
        focus: None,
        is_compound: true,
    },
    Exercise {
        name: "Romanian Deadlifts",
        category: WorkoutCategory::Legs,
        sets: 4,
        reps: "8-10",
        muscle_group: MuscleGroup::Hamstrings,
        primary: &["Hamstrings", "Glutes"],
        secondary: &["Lower back"],
        focus: None,
        is_compound: true,
    },
    Exercise {
        name: "Leg Press",
        category: WorkoutCategory::Legs,
        sets: 3,
        reps: "10-12",
        muscle_group: MuscleGroup::Quads,
        primary: &["Quadriceps"],
        secondary: &["Glutes"],
        focus: Some("Quad isolation"),
        is_compound: false,
    },
    Exercise {
        name: "Hip Thrusts",
        category: WorkoutCategory::Legs,
        sets: 3,
        reps: "12-15",
        muscle_group: MuscleGroup::Glutes,
        primary: &["Gluteus maximus"],
        secondary: &["Hamstrings"],
        focus: Some("Glute development"),
        is_compound: false,
    },
    Exercise {
        name: "Standing Calf Raises",
        category: WorkoutCategory::Legs,
        sets: 4,
        reps: "15-20",
        muscle_group: MuscleGroup::Calves,
        primary: &["Gastrocnemius"],
        secondary: &[],
        focus: Some("Calf development"),
        is_compound: false,
    },
];

/// Exercises offered for one workout split
pub fn exercises_for(category: WorkoutCategory) -> &'static [Exercise] {
    match category {
        WorkoutCategory::Push => PUSH_EXERCISES,
        WorkoutCategory::Pull => PULL_EXERCISES,
        WorkoutCategory::Legs => LEG_EXERCISES,
    }
}

pub fn get_all_exercises() -> Vec<&'static Exercise> {
    PUSH_EXERCISES
        .iter()
        .chain(PULL_EXERCISES.iter())
        .chain(LEG_EXERCISES.iter())
        .collect()
}

/// Find exercise by name (for matching log records)
pub fn find_exercise_by_name(name: &str) -> Option<&'static Exercise> {
    get_all_exercises().into_iter().find(|e| e.name == name)
}

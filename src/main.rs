//! fitlog - Local workout and nutrition tracker

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fitlog::catalog::{FOOD_DATABASE, exercises_for, find_exercise_by_name, find_food};
use fitlog::models::{ActivityLevel, Gender, Goal, LogRecord, MealRecord, UserGoals, WorkoutCategory};
use fitlog::planner::{DEFAULT_BASELINE_CALORIES, PlanCalculator};
use fitlog::search;
use fitlog::store::SqliteStore;
use fitlog::tracker::{ExerciseLog, MealJournal};
use fitlog::tui::App;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(author, version, about = "Workout and nutrition tracker")]
struct Cli {
    /// Store file
    #[arg(long, global = true, env = "FITLOG_DB", default_value = "fitlog.db")]
    db: String,

    /// Daily calorie baseline used by the diet planner
    #[arg(long, global = true, env = "FITLOG_BASELINE_KCAL", default_value_t = DEFAULT_BASELINE_CALORIES)]
    baseline_calories: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open TUI dashboard
    Tui,

    /// Log and review meals
    Meal {
        #[command(subcommand)]
        action: MealAction,
    },

    /// Search the food catalog
    Food {
        /// Part of a food name
        query: String,
    },

    /// Log and review exercise entries
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// List catalog exercises
    Exercises {
        /// Only this split
        #[arg(short = 't', long = "type", value_enum)]
        workout_type: Option<WorkoutCategory>,

        /// Filter by name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show nutrition and training totals
    Stats {
        /// Weight progression for one exercise
        exercise: Option<String>,

        /// Print totals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate a diet plan
    Plan {
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        target_weight: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long, value_enum)]
        gender: Option<Gender>,
        #[arg(long, value_enum)]
        activity: Option<ActivityLevel>,
        #[arg(long, value_enum)]
        goal: Option<Goal>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum MealAction {
    /// Add a catalog food
    Add {
        /// Exact food name (e.g. "Chicken Breast")
        food: String,

        /// Quantity in grams
        #[arg(short, long, default_value = "100")]
        grams: f64,
    },
    /// List meals with totals
    List,
    /// Remove a meal by id
    Rm { id: String },
}

#[derive(Subcommand)]
enum LogAction {
    /// Log an exercise
    Add {
        #[arg(short = 't', long = "type", value_enum)]
        workout_type: WorkoutCategory,

        /// Exercise name (e.g. "Back Squats")
        exercise: String,

        #[arg(short, long, default_value = "3")]
        sets: u32,

        #[arg(short, long, default_value = "10")]
        reps: u32,

        /// Weight in kg
        #[arg(short, long, default_value = "0")]
        weight: f64,
    },
    /// List exercise entries
    List {
        /// Number of records to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Remove an entry by id
    Rm { id: String },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = SqliteStore::open(&cli.db)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            let mut app = App::new(MealJournal::meals(&store), ExerciseLog::exercise_logs(&store));
            app.run()?;
        }

        Some(Commands::Meal { action }) => {
            let mut meals = MealJournal::meals(&store);
            match action {
                MealAction::Add { food, grams } => {
                    let Some(item) = find_food(&food) else {
                        let hints = search::filter(FOOD_DATABASE, &food);
                        if hints.is_empty() {
                            bail!("unknown food: {food}");
                        }
                        let names: Vec<&str> = hints.iter().map(|f| f.name).collect();
                        bail!("unknown food: {food} (did you mean: {})", names.join(", "));
                    };
                    let meal = MealRecord::from_food(item, grams);
                    let summary = format!(
                        "Added: {} - {} kcal, {}g protein, {}g carbs, {}g fats (id: {})",
                        meal.name, meal.calories, meal.protein, meal.carbs, meal.fats, meal.id
                    );
                    meals.add(meal)?;
                    println!("{summary}");
                }
                MealAction::List => {
                    println!("Meals:");
                    println!("{:-<72}", "");
                    for m in meals.items() {
                        println!(
                            "{} {} | {:28} | {:>5} kcal | {}/{}/{} g | {}",
                            m.date, m.time, m.name, m.calories, m.protein, m.carbs, m.fats, m.id
                        );
                    }
                    let t = meals.totals().display();
                    println!("{:-<72}", "");
                    println!(
                        "Total: {} kcal | {}g protein | {}g carbs | {}g fats",
                        t.calories, t.protein, t.carbs, t.fats
                    );
                }
                MealAction::Rm { id } => {
                    let removed = meals.remove(&id)?;
                    println!("Removed {removed} meal(s)");
                }
            }
        }

        Some(Commands::Food { query }) => {
            for f in search::filter(FOOD_DATABASE, &query) {
                println!(
                    "{:20} | {:>4} kcal | {}g protein | {}g carbs | {}g fats (per 100g)",
                    f.name, f.calories, f.protein, f.carbs, f.fats
                );
            }
        }

        Some(Commands::Log { action }) => {
            let mut logs = ExerciseLog::exercise_logs(&store);
            match action {
                LogAction::Add { workout_type, exercise, sets, reps, weight } => {
                    if find_exercise_by_name(&exercise).is_none() {
                        tracing::warn!(%exercise, "exercise not in catalog, logging as given");
                    }
                    let log = LogRecord::new(workout_type, &exercise, f64::from(sets), f64::from(reps), weight.max(0.0));
                    let summary = format!("Logged: {} - {}x{} @ {}kg (id: {})", exercise, sets, reps, log.weight, log.id);
                    logs.add(log)?;
                    println!("{summary}");
                }
                LogAction::List { limit } => {
                    println!("Exercise log:");
                    println!("{:-<72}", "");
                    let items = logs.items();
                    let shown = limit.unwrap_or(items.len()).min(items.len());
                    for l in &items[items.len() - shown..] {
                        println!(
                            "{} | {:5} | {:26} | {}x{} @ {}kg | {}",
                            l.date,
                            l.workout_type.label(),
                            l.exercise,
                            l.sets,
                            l.reps,
                            l.weight,
                            l.id
                        );
                    }
                }
                LogAction::Rm { id } => {
                    let removed = logs.remove(&id)?;
                    println!("Removed {removed} entr(y/ies)");
                }
            }
        }

        Some(Commands::Exercises { workout_type, search: query }) => {
            let categories = match workout_type {
                Some(c) => vec![c],
                None => WorkoutCategory::all().to_vec(),
            };
            for category in categories {
                let list = exercises_for(category);
                let shown: Vec<_> = match &query {
                    Some(q) => search::filter(list, q),
                    None => list.iter().collect(),
                };
                if shown.is_empty() {
                    continue;
                }
                println!("{}:", category.label());
                for e in shown {
                    println!(
                        "  {:26} {}x{:6} {}{}",
                        e.name,
                        e.sets,
                        e.reps,
                        e.muscle_group.label(),
                        if e.is_compound { " (compound)" } else { "" }
                    );
                }
            }
        }

        Some(Commands::Stats { exercise, json }) => {
            let meals = MealJournal::meals(&store);
            let logs = ExerciseLog::exercise_logs(&store);
            let analytics = logs.analytics();

            if json {
                let report = serde_json::json!({
                    "nutrition": meals.totals().display(),
                    "training": analytics.summary(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("Statistics");
            println!("{:-<40}", "");

            if let Some(ex) = exercise {
                println!("Exercise: {}", ex);
                println!("Total volume: {:.1} kg", analytics.total_volume(&ex));
                for (date, weight) in analytics.weight_series(&ex) {
                    println!("  {} | {} kg", date, weight);
                }
            } else {
                let t = meals.totals().display();
                println!("Meals: {} | {} kcal | P {}g | C {}g | F {}g", meals.len(), t.calories, t.protein, t.carbs, t.fats);
                let s = analytics.summary();
                println!("Training: {} entries | {} sets | {} reps | {:.1} kg volume", s.entries, s.sets, s.reps, s.volume_kg);
                for (name, best) in analytics.best_weights() {
                    println!("  best {:26} {} kg", name, best);
                }
            }
        }

        Some(Commands::Plan { weight, target_weight, height, age, gender, activity, goal, json }) => {
            let goals = UserGoals {
                weight,
                target_weight,
                height,
                age,
                gender,
                activity_level: activity,
                goal,
            };
            let plan = PlanCalculator::new(cli.baseline_calories).calculate(&goals);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
                return Ok(());
            }
            println!("Daily targets: {} kcal | {}g protein | {}g carbs | {}g fats", plan.calories, plan.protein, plan.carbs, plan.fats);
            for meal in &plan.meals {
                println!(
                    "{:9} {:8} {:>5} kcal | {}g/{}g/{}g | {}",
                    meal.name,
                    meal.time,
                    meal.calories,
                    meal.protein,
                    meal.carbs,
                    meal.fats,
                    meal.suggestions.join(", ")
                );
            }
        }
    }

    Ok(())
}

//! Journal - owns one collection in memory and keeps the store in step with it

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};
use tracing::info;

use crate::models::{LogRecord, MealRecord, Record};
use crate::stats::{self, Totals, TrainingAnalytics};
use crate::store::{self, EXERCISE_LOGS_NAMESPACE, KeyValueStore, MEALS_NAMESPACE, PersistentCollection};

/// Single writer for one namespace. Every mutation is saved before returning.
pub struct Journal<T, S> {
    collection: PersistentCollection<T, S>,
    items: Vec<T>,
}

impl<T, S> Journal<T, S>
where
    T: Record + Clone + Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn open(collection: PersistentCollection<T, S>) -> Self {
        let items = collection.load();
        Self { collection, items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append and persist. Ids are taken as given, duplicates included.
    pub fn add(&mut self, record: T) -> Result<()> {
        let next = store::add(&self.items, record);
        self.commit(next)
    }

    /// Drop records with `id` and persist; returns how many were removed
    pub fn remove(&mut self, id: &str) -> Result<usize> {
        let next = store::remove(&self.items, id);
        let removed = self.items.len() - next.len();
        self.commit(next)?;
        Ok(removed)
    }

    /// Re-read from the store
    pub fn reload(&mut self) {
        self.items = self.collection.load();
    }

    fn commit(&mut self, next: Vec<T>) -> Result<()> {
        self.collection.save(&next)?;
        info!(namespace = self.collection.namespace(), count = next.len(), "journal updated");
        self.items = next;
        Ok(())
    }
}

pub type MealJournal<S> = Journal<MealRecord, S>;
pub type ExerciseLog<S> = Journal<LogRecord, S>;

impl<S: KeyValueStore> Journal<MealRecord, S> {
    pub fn meals(store: S) -> Self {
        Self::open(PersistentCollection::new(store, MEALS_NAMESPACE))
    }

    pub fn totals(&self) -> Totals {
        stats::reduce(&self.items)
    }
}

impl<S: KeyValueStore> Journal<LogRecord, S> {
    pub fn exercise_logs(store: S) -> Self {
        Self::open(PersistentCollection::new(store, EXERCISE_LOGS_NAMESPACE))
    }

    pub fn analytics(&self) -> TrainingAnalytics<'_> {
        TrainingAnalytics::new(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_food;
    use crate::models::WorkoutCategory;
    use crate::store::{KeyValueStore, MemoryStore, SqliteStore};

    #[test]
    fn test_meal_journal_persists_each_mutation() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut journal = MealJournal::meals(&store);
        assert!(journal.is_empty());

        let chicken = find_food("Chicken Breast").unwrap();
        let meal = MealRecord::from_food(chicken, 150.0);
        let id = meal.id.clone();
        journal.add(meal).unwrap();

        let reopened = MealJournal::meals(&store);
        assert_eq!(reopened.items(), journal.items());
        assert_eq!(
            reopened.totals(),
            Totals { calories: 248.0, protein: 46.5, carbs: 0.0, fats: 5.4 }
        );

        assert_eq!(journal.remove(&id).unwrap(), 1);
        assert_eq!(journal.totals(), Totals::default());
        assert!(MealJournal::meals(&store).is_empty());
    }

    #[test]
    fn test_remove_unknown_id() {
        let store = MemoryStore::new();
        let mut journal = ExerciseLog::exercise_logs(&store);
        journal
            .add(LogRecord::new(WorkoutCategory::Pull, "Deadlifts", 4.0, 5.0, 140.0))
            .unwrap();
        assert_eq!(journal.remove("missing").unwrap(), 0);
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_odd_history_survives_next_add() {
        let store = MemoryStore::new();
        store
            .set(
                EXERCISE_LOGS_NAMESPACE,
                r#"[
                    {"id":"1","date":"1/2/2024","workoutType":"pull","exercise":"Deadlifts","sets":4,"reps":5,"weight":140},
                    {"id":"2","date":"1/2/2024","workoutType":"legs","exercise":"Leg Press","sets":-3,"reps":null,"weight":180},
                    {"id":"3","date":"1/2/2024","workoutType":"legs","exercise":"Back Squats","sets":"four","reps":5,"weight":100}
                ]"#,
            )
            .unwrap();

        let mut journal = ExerciseLog::exercise_logs(&store);
        assert_eq!(journal.len(), 2);
        journal
            .add(LogRecord::new(WorkoutCategory::Push, "Lateral Raises", 3.0, 12.0, 8.0))
            .unwrap();

        let reopened = ExerciseLog::exercise_logs(&store);
        let names: Vec<_> = reopened.items().iter().map(|l| l.exercise.as_str()).collect();
        assert_eq!(names, vec!["Deadlifts", "Leg Press", "Lateral Raises"]);
        assert_eq!(reopened.items()[1].sets, -3.0);
        assert!(reopened.items()[1].reps.is_nan());
    }

    #[test]
    fn test_duplicate_ids_are_kept_and_removed_together() {
        let store = MemoryStore::new();
        let mut journal = ExerciseLog::exercise_logs(&store);
        let mut log = LogRecord::new(WorkoutCategory::Legs, "Leg Press", 3.0, 10.0, 180.0);
        log.id = "same".to_string();
        journal.add(log.clone()).unwrap();
        journal.add(log).unwrap();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal.remove("same").unwrap(), 2);
        assert!(journal.is_empty());
    }

    #[test]
    fn test_totals_track_collection() {
        let store = MemoryStore::new();
        let mut journal = MealJournal::meals(&store);
        let oats = find_food("Oatmeal").unwrap();
        let banana = find_food("Banana").unwrap();
        journal.add(MealRecord::from_food(oats, 80.0)).unwrap();
        journal.add(MealRecord::from_food(banana, 120.0)).unwrap();
        assert_eq!(journal.totals(), stats::reduce(journal.items()));

        let first = journal.items()[0].id.clone();
        journal.remove(&first).unwrap();
        assert_eq!(journal.totals(), Totals::of(&journal.items()[0]));
    }

    #[test]
    fn test_reload_sees_other_writer() {
        let store = MemoryStore::new();
        let mut a = ExerciseLog::exercise_logs(&store);
        let mut b = ExerciseLog::exercise_logs(&store);
        b.add(LogRecord::new(WorkoutCategory::Push, "Lateral Raises", 3.0, 15.0, 8.0))
            .unwrap();
        assert!(a.is_empty());
        a.reload();
        assert_eq!(a.len(), 1);
        assert_eq!(a.analytics().summary().sets, 3.0);
    }
}

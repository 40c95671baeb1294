//! Storage module - durable key-value slots holding serialized collections

pub mod collection;

pub use collection::{PersistentCollection, add, remove};

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

/// Namespace holding the meals collection
pub const MEALS_NAMESPACE: &str = "meals";

/// Namespace holding the exercise log collection
pub const EXERCISE_LOGS_NAMESPACE: &str = "exerciseLogs";

/// A store of whole string values keyed by namespace
pub trait KeyValueStore {
    /// Read the value saved under `namespace`, if any
    fn get(&self, namespace: &str) -> Result<Option<String>>;

    /// Replace the value under `namespace`
    fn set(&self, namespace: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, namespace: &str) -> Result<Option<String>> {
        (**self).get(namespace)
    }

    fn set(&self, namespace: &str, value: &str) -> Result<()> {
        (**self).set(namespace, value)
    }
}

/// SQLite-backed store, one row per namespace
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the store file
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open store at {path}"))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Throwaway store for tests
    pub fn open_in_memory() -> Result<Self> {
        let store = Self { conn: Connection::open_in_memory()? };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                namespace TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, namespace: &str) -> Result<Option<String>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE namespace = ?1",
                params![namespace],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, namespace: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (namespace, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(namespace) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![namespace, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

/// In-process store, nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(namespace).cloned())
    }

    fn set(&self, namespace: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(namespace.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealRecord;

    fn meal(id: &str) -> MealRecord {
        MealRecord {
            id: id.to_string(),
            name: "Egg (50g)".to_string(),
            date: "2024-01-01".to_string(),
            time: "07:30:00".to_string(),
            calories: 78.0,
            protein: 6.5,
            carbs: 0.6,
            fats: 5.5,
        }
    }

    #[test]
    fn test_sqlite_missing_namespace() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get(MEALS_NAMESPACE).unwrap(), None);
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set(MEALS_NAMESPACE, "[1]").unwrap();
        store.set(MEALS_NAMESPACE, "[1,2]").unwrap();
        assert_eq!(store.get(MEALS_NAMESPACE).unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_namespaces_independent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set(MEALS_NAMESPACE, "meals").unwrap();
        store.set(EXERCISE_LOGS_NAMESPACE, "logs").unwrap();
        assert_eq!(store.get(MEALS_NAMESPACE).unwrap().as_deref(), Some("meals"));
        assert_eq!(store.get(EXERCISE_LOGS_NAMESPACE).unwrap().as_deref(), Some("logs"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitlog.db");
        let path = path.to_str().unwrap();

        {
            let store = SqliteStore::open(path).unwrap();
            let meals = PersistentCollection::<MealRecord, _>::new(&store, MEALS_NAMESPACE);
            meals.save(&[meal("b"), meal("a")]).unwrap();
        }

        let store = SqliteStore::open(path).unwrap();
        let meals = PersistentCollection::<MealRecord, _>::new(&store, MEALS_NAMESPACE);
        let ids: Vec<_> = meals.load().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.get(EXERCISE_LOGS_NAMESPACE).unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("x").unwrap(), None);
        store.set("x", "1").unwrap();
        store.set("x", "2").unwrap();
        assert_eq!(store.get("x").unwrap().as_deref(), Some("2"));
    }
}

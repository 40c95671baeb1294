//! Ordered record list persisted wholesale under one namespace

use std::marker::PhantomData;

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::models::Record;

/// Load/save wrapper for a list of records kept in a single store slot.
///
/// Insertion order is the display order; nothing is ever sorted.
pub struct PersistentCollection<T, S> {
    store: S,
    namespace: String,
    _record: PhantomData<T>,
}

impl<T, S> PersistentCollection<T, S>
where
    T: Record + Clone + Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(store: S, namespace: &str) -> Self {
        Self {
            store,
            namespace: namespace.to_string(),
            _record: PhantomData,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Previously saved records, or empty when nothing usable is stored.
    /// Read and parse failures are logged and treated as no data; a record
    /// that cannot be read is skipped without losing the rest.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.store.get(&self.namespace) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(namespace = %self.namespace, error = %e, "store read failed, starting empty");
                return Vec::new();
            }
        };

        let values = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!(namespace = %self.namespace, error = %e, "stored value is not a list, starting empty");
                return Vec::new();
            }
        };

        let total = values.len();
        let items: Vec<T> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(namespace = %self.namespace, index, error = %e, "skipping unreadable record");
                    None
                }
            })
            .collect();
        debug!(namespace = %self.namespace, count = items.len(), skipped = total - items.len(), "loaded collection");
        items
    }

    /// Overwrite the stored value with `items`
    pub fn save(&self, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)
            .with_context(|| format!("failed to serialize {}", self.namespace))?;
        self.store
            .set(&self.namespace, &raw)
            .with_context(|| format!("failed to save {}", self.namespace))?;
        debug!(namespace = %self.namespace, count = items.len(), "saved collection");
        Ok(())
    }
}

/// New list with `record` appended
pub fn add<T: Clone>(items: &[T], record: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(record);
    next
}

/// New list without records carrying `id`; unknown ids are a no-op
pub fn remove<T: Record + Clone>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|r| r.id() != id).cloned().collect()
}

//! Incremental name search over static catalogs

use crate::catalog::Exercise;
use crate::models::FoodItem;

/// Shortest query that produces results
pub const MIN_QUERY_CHARS: usize = 2;

/// Catalog entries searchable by name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for FoodItem {
    fn name(&self) -> &str {
        self.name
    }
}

impl Named for Exercise {
    fn name(&self) -> &str {
        self.name
    }
}

/// Entries whose name contains `query`, ignoring case, in catalog order.
/// Queries shorter than two characters match nothing.
pub fn filter<'a, T: Named>(catalog: &'a [T], query: &str) -> Vec<&'a T> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect()
}

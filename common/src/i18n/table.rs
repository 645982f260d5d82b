//! Immutable key-to-text tables for a single locale.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;

/// Translated strings for one locale.
///
/// Tables are frozen once built. Cloning shares the underlying map, so the
/// registry can hand the active table to readers without copying entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: Arc<HashMap<String, String>>,
}

impl StringTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the text for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the table defines `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys in this table, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for StringTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            entries: Arc::new(map),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for StringTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: BuildHasher> From<HashMap<String, String, S>> for StringTable {
    fn from(entries: HashMap<String, String, S>) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_inserted_entries() {
        let table = StringTable::from([("greeting", "Hello"), ("farewell", "Goodbye")]);

        assert_eq!(table.get("greeting"), Some("Hello"));
        assert!(table.contains_key("farewell"));
        assert_eq!(table.get("missing"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn clones_share_entries() {
        let table = StringTable::from([("greeting", "Hello")]);
        let clone = table.clone();

        assert!(Arc::ptr_eq(&table.entries, &clone.entries));
        assert_eq!(table, clone);
    }

    #[test]
    fn empty_table_reports_no_keys() {
        let table = StringTable::new();

        assert!(table.is_empty());
        assert_eq!(table.keys().count(), 0);
    }
}

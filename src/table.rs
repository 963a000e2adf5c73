//! The merged, read-only lookup table
//!
//! Sources are applied strictly in list order and each row is an upsert, so
//! for any key the stored value is the one from the last source (and last
//! row within that source) that defines it.

use crate::error::{Error, Result};
use crate::key::Key;
use crate::source::read_source;
use crate::value::{coerce, Value};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Immutable key/value table built from layered CSV sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayeredTable {
    entries: HashMap<Key, Value>,
}

impl LayeredTable {
    /// Build a table from an ordered list of optional sources.
    ///
    /// `None` entries and paths that do not exist are skipped. The first
    /// malformed or unreadable source aborts construction.
    pub fn from_sources<I, P>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<P>>,
        P: AsRef<Path>,
    {
        let mut entries = HashMap::new();
        let mut applied = 0usize;

        for source in sources {
            let Some(source) = source else {
                tracing::trace!("Skipping empty source entry");
                continue;
            };
            let path = source.as_ref();
            let Some(rows) = read_source(path)? else {
                continue;
            };
            for row in rows {
                let value = coerce(row.value.as_deref());
                entries.insert(Key::from(row.key), value);
            }
            applied += 1;
        }

        tracing::debug!("Built table with {} keys from {} sources", entries.len(), applied);
        Ok(Self { entries })
    }

    /// Build a table from an ordered list of paths.
    pub fn load<I, P>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::from_sources(sources.into_iter().map(Some))
    }

    /// Look up a key. `None` means the key is absent; a stored null is
    /// `Some(&Value::Null)`.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.entries.get(key.as_ref())
    }

    /// Strict lookup: a missing key is [`Error::KeyNotFound`].
    pub fn fetch(&self, key: impl AsRef<str>) -> Result<&Value> {
        let key = key.as_ref();
        self.entries.get(key).ok_or_else(|| Error::KeyNotFound { key: key.to_string() })
    }

    /// Lookup falling back to `default` only when the key is absent.
    pub fn fetch_or<'a>(&'a self, key: impl AsRef<str>, default: &'a Value) -> &'a Value {
        self.entries.get(key.as_ref()).unwrap_or(default)
    }

    /// Like [`fetch_or`](Self::fetch_or) with a computed, owned default.
    pub fn fetch_or_else<F>(&self, key: impl AsRef<str>, default: F) -> Value
    where
        F: FnOnce(&str) -> Value,
    {
        let key = key.as_ref();
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => default(key),
        }
    }

    /// Apply `f` to every entry in iteration order and collect the results.
    pub fn transform<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&Key, &Value) -> T,
    {
        self.entries.iter().map(|(k, v)| f(k, v)).collect()
    }

    /// Entries for which `predicate` holds, as a new mapping.
    pub fn filter<F>(&self, mut predicate: F) -> HashMap<Key, Value>
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.entries
            .iter()
            .filter(|(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Entries ordered by key.
    pub fn sorted(&self) -> BTreeMap<&Key, &Value> {
        self.entries.iter().collect()
    }
}

impl<'a> IntoIterator for &'a LayeredTable {
    type Item = (&'a Key, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for LayeredTable {
    // Use BTreeMap so keys come out in a stable, sorted order.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.sorted().serialize(serializer)
    }
}

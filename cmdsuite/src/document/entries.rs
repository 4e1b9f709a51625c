//! Ordered `tests` mapping.
//!
//! Titles key the mapping, so lookup order carries no meaning, but rendering
//! a suite should reproduce the order it was written in. Entries are kept as
//! an ordered list of `(title, entry)` pairs rather than a hash map.

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::TestEntry;

/// Authored test entries in document order, keyed by unique title.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestEntries(Vec<(String, TestEntry)>);

impl TestEntries {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry, returning `false` without inserting when `title`
    /// is already present.
    pub fn push(&mut self, title: impl Into<String>, entry: TestEntry) -> bool {
        let title = title.into();
        if self.get(&title).is_some() {
            return false;
        }
        self.0.push((title, entry));
        true
    }

    /// Look up an entry by title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&TestEntry> {
        self.0
            .iter()
            .find_map(|(key, entry)| (key == title).then_some(entry))
    }

    /// Iterate over `(title, entry)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TestEntry)> {
        self.0.iter().map(|(title, entry)| (title.as_str(), entry))
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no tests are defined.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for TestEntries {
    type Item = (String, TestEntry);
    type IntoIter = std::vec::IntoIter<(String, TestEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for TestEntries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (title, entry) in &self.0 {
            map.serialize_entry(title, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TestEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = TestEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of test titles to test definitions")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TestEntries::new())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or_default());
        while let Some(title) = map.next_key::<String>()? {
            if !seen.insert(title.clone()) {
                return Err(de::Error::custom(format_args!(
                    "duplicate test title `{title}`"
                )));
            }
            let entry = map.next_value::<TestEntry>()?;
            entries.push((title, entry));
        }
        Ok(TestEntries(entries))
    }
}

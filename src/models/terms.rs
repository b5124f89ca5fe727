//! Term name to catalog identifier mapping.

use std::collections::BTreeMap;

/// Mapping from human-readable term name (e.g. "Fall 2025") to the
/// catalog's internal term identifier.
///
/// Fetched once at startup; search criteria validation takes it as an
/// explicit argument so validation cannot run before the mapping exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCatalog {
    terms: BTreeMap<String, String>,
}

impl TermCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a term name with its catalog identifier.
    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.terms.insert(name.into(), id.into());
    }

    /// Look up the catalog identifier for a term name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.terms.get(name).map(String::as_str)
    }

    /// Known term names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.terms.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

//! The record collection
//!
//! `SearchIndex` is the top-level value of an index file: a mapping with a
//! single key `docs` holding the ordered records. Once built it is read-only;
//! the generator regenerates the whole file on every documentation build, so
//! there is no update or delete path. Records are appended through
//! `SearchIndexBuilder`.
//!
//! # Invariants
//!
//! - Non-page records carry a non-empty location
//! - No two non-page records share a location
//! - Every location parses as `[path][#fragment]`
//! - The empty location belongs to a single root page
//!
//! Page records are exempt from uniqueness: the generator emits one page
//! record per paragraph, all pointing at the page itself.

use crate::category::Category;
use crate::entry::DocEntry;
use crate::error::{Error, Result};
use crate::limits::Limits;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

// ============================================================================
// SearchIndex
// ============================================================================

/// Ordered, immutable collection of search records
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchIndex {
    docs: Vec<DocEntry>,
}

impl SearchIndex {
    /// Wrap records without validation
    ///
    /// Use `SearchIndexBuilder::build()` for untrusted input.
    pub fn from_entries_unchecked(docs: Vec<DocEntry>) -> Self {
        SearchIndex { docs }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True when the index holds no records
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Record at a position
    pub fn get(&self, index: usize) -> Option<&DocEntry> {
        self.docs.get(index)
    }

    /// All records in order
    pub fn entries(&self) -> &[DocEntry] {
        &self.docs
    }

    /// Iterate records in order
    pub fn iter(&self) -> std::slice::Iter<'_, DocEntry> {
        self.docs.iter()
    }

    /// Consume the index and return its records
    pub fn into_entries(self) -> Vec<DocEntry> {
        self.docs
    }

    /// Records of one category, in order
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &DocEntry> + '_ {
        self.docs.iter().filter(move |e| e.category == category)
    }

    /// Records on one page, in order
    pub fn by_page<'a>(&'a self, page: &'a str) -> impl Iterator<Item = &'a DocEntry> + 'a {
        self.docs.iter().filter(move |e| e.page == page)
    }

    /// First record with the given location, with its position
    pub fn find_location(&self, location: &str) -> Option<(usize, &DocEntry)> {
        self.docs
            .iter()
            .enumerate()
            .find(|(_, e)| e.location == location)
    }

    /// Distinct page names in order of first appearance
    pub fn pages(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.docs
            .iter()
            .map(|e| e.page.as_str())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Number of records per category (every category present, possibly zero)
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> =
            Category::all().iter().map(|c| (*c, 0)).collect();
        for entry in &self.docs {
            *counts.entry(entry.category).or_insert(0) += 1;
        }
        counts
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check all invariants with default limits
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&Limits::default())
    }

    /// Check all invariants and the given limits
    ///
    /// Reports the first violation in record order.
    pub fn validate_with(&self, limits: &Limits) -> Result<()> {
        self.check_limits(limits)?;
        self.check_invariants()
    }

    /// Check size limits only
    pub fn check_limits(&self, limits: &Limits) -> Result<()> {
        limits.validate_entry_count(self.docs.len())?;
        for (index, entry) in self.docs.iter().enumerate() {
            limits.validate_entry(index, entry)?;
        }
        Ok(())
    }

    /// Check location invariants only, stopping at the first violation
    pub fn check_invariants(&self) -> Result<()> {
        match self.invariant_violations().into_iter().next() {
            Some(e) => Err(e),
            None => {
                debug!(entries = self.docs.len(), "search index invariants hold");
                Ok(())
            }
        }
    }

    /// Every location invariant violation, in record order
    pub fn invariant_violations(&self) -> Vec<Error> {
        let mut violations = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut root_page: Option<&str> = None;

        for (index, entry) in self.docs.iter().enumerate() {
            if let Err(reason) = entry.parsed_location() {
                violations.push(Error::InvalidLocation {
                    index,
                    location: entry.location.clone(),
                    reason: reason.to_string(),
                });
                continue;
            }

            if entry.is_root_page() {
                match root_page {
                    None => root_page = Some(entry.page.as_str()),
                    Some(root) if root != entry.page => {
                        violations.push(Error::InvalidLocation {
                            index,
                            location: String::new(),
                            reason: "empty location is reserved for the root page".into(),
                        });
                    }
                    Some(_) => {}
                }
                continue;
            }

            if entry.is_page() {
                continue;
            }

            if entry.location.is_empty() {
                violations.push(Error::MissingLocation { index });
                continue;
            }

            match seen.entry(entry.location.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(slot) => violations.push(Error::DuplicateLocation {
                    location: entry.location.clone(),
                    first: *slot.get(),
                    second: index,
                }),
            }
        }

        violations
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a DocEntry;
    type IntoIter = std::slice::Iter<'a, DocEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

// ============================================================================
// SearchIndexBuilder
// ============================================================================

/// Append-only construction of a `SearchIndex`
#[derive(Debug, Clone, Default)]
pub struct SearchIndexBuilder {
    docs: Vec<DocEntry>,
    limits: Limits,
}

impl SearchIndexBuilder {
    /// Create an empty builder with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set limits checked by `build()`
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Append one record
    pub fn push(&mut self, entry: DocEntry) -> &mut Self {
        self.docs.push(entry);
        self
    }

    /// Number of records appended so far
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True when nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Validate and freeze
    pub fn build(self) -> Result<SearchIndex> {
        let index = SearchIndex { docs: self.docs };
        index.validate_with(&self.limits)?;
        Ok(index)
    }

    /// Freeze without validation
    pub fn build_unchecked(self) -> SearchIndex {
        SearchIndex { docs: self.docs }
    }
}

impl Extend<DocEntry> for SearchIndexBuilder {
    fn extend<I: IntoIterator<Item = DocEntry>>(&mut self, iter: I) {
        self.docs.extend(iter);
    }
}

impl FromIterator<DocEntry> for SearchIndexBuilder {
    fn from_iter<I: IntoIterator<Item = DocEntry>>(iter: I) -> Self {
        SearchIndexBuilder {
            docs: iter.into_iter().collect(),
            limits: Limits::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

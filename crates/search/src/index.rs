//! Inverted index over a loaded search index
//!
//! This module provides:
//! - PostingEntry / PostingList: doc ids and term frequencies per term
//! - InvertedIndex: term → postings, document frequencies, length statistics
//!
//! The index is built once from an immutable `SearchIndex` and never updated.
//! Records are tokenized in parallel on rayon's pool and their postings are
//! written into a sharded concurrent map; once every record is in, each
//! posting list is sorted by doc id so lookups do not depend on thread
//! scheduling, and the map is frozen into a plain `HashMap` that queries
//! borrow from without locking.
//!
//! Indexed text is the record title followed by its body.

use crate::tokenizer::tokenize;
use dashmap::DashMap;
use docindex_core::{DocEntry, SearchIndex};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Instant;
use tracing::info;

// ============================================================================
// PostingEntry
// ============================================================================

/// Entry in a posting list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingEntry {
    /// Position of the record in the `SearchIndex`
    pub doc_id: u32,
    /// Term frequency in this record
    pub tf: u32,
}

impl PostingEntry {
    /// Create a new posting entry
    pub fn new(doc_id: u32, tf: u32) -> Self {
        PostingEntry { doc_id, tf }
    }
}

// ============================================================================
// PostingList
// ============================================================================

/// List of records containing a term, sorted by doc id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    /// Record entries
    pub entries: Vec<PostingEntry>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        PostingList { entries: vec![] }
    }

    /// Add an entry to the posting list
    pub fn add(&mut self, entry: PostingEntry) {
        self.entries.push(entry);
    }

    /// Number of records containing this term
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Text that gets tokenized for a record
pub fn indexed_text(entry: &DocEntry) -> String {
    format!("{} {}", entry.title, entry.text)
}

/// Inverted index for keyword search
///
/// # Thread Safety
///
/// Read-only after `build()`. Safe to share behind an `Arc` and query from
/// many threads.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// Term -> PostingList mapping
    postings: HashMap<String, PostingList>,

    /// Token count per record, indexed by doc id
    doc_lengths: Vec<u32>,

    /// Sum of all record lengths (for average calculation)
    total_doc_len: u64,
}

impl InvertedIndex {
    /// Build the index for every record of `index`
    pub fn build(index: &SearchIndex) -> Self {
        let start = Instant::now();
        let postings: DashMap<String, PostingList> = DashMap::new();

        let doc_lengths: Vec<u32> = index
            .entries()
            .par_iter()
            .enumerate()
            .map(|(doc_id, entry)| {
                let tokens = tokenize(&indexed_text(entry));
                let doc_len = tokens.len() as u32;

                let mut tf_map: HashMap<String, u32> = HashMap::new();
                for token in tokens {
                    *tf_map.entry(token).or_insert(0) += 1;
                }

                for (term, tf) in tf_map {
                    postings
                        .entry(term)
                        .or_default()
                        .add(PostingEntry::new(doc_id as u32, tf));
                }

                doc_len
            })
            .collect();

        let postings: HashMap<String, PostingList> = postings
            .into_iter()
            .map(|(term, mut list)| {
                list.entries.sort_unstable_by_key(|e| e.doc_id);
                (term, list)
            })
            .collect();

        let total_doc_len = doc_lengths.iter().map(|&l| u64::from(l)).sum();
        let built = InvertedIndex {
            postings,
            doc_lengths,
            total_doc_len,
        };

        info!(
            docs = built.total_docs(),
            terms = built.term_count(),
            elapsed_micros = start.elapsed().as_micros() as u64,
            "built inverted index"
        );
        built
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Total number of indexed records
    pub fn total_docs(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of records containing a term
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, PostingList::len)
    }

    /// Token count of a record
    pub fn doc_len(&self, doc_id: u32) -> u32 {
        self.doc_lengths.get(doc_id as usize).copied().unwrap_or(0)
    }

    /// Average record length in tokens
    pub fn avg_doc_len(&self) -> f32 {
        let total = self.doc_lengths.len();
        if total == 0 {
            return 0.0;
        }
        self.total_doc_len as f32 / total as f32
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Records containing a term, sorted by doc id
    ///
    /// Returns None if the term does not occur.
    pub fn lookup(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// All terms in the index, sorted
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.postings.keys().cloned().collect();
        terms.sort_unstable();
        terms
    }
}

// ============================================================================
// Tests
// ============================================================================

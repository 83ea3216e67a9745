//! Scoring infrastructure
//!
//! This module provides:
//! - Scorer trait for pluggable scoring algorithms
//! - ScorerContext for corpus-level statistics
//! - SearchDoc, the per-candidate view a scorer sees
//! - BM25LiteScorer default implementation

use crate::index::InvertedIndex;
use crate::tokenizer::tokenize;
use docindex_core::{DocEntry, SearchSettings};
use std::collections::HashMap;

// ============================================================================
// SearchDoc
// ============================================================================

/// A candidate record as seen by a scorer
///
/// Ephemeral: built per query from the posting lists, never stored.
#[derive(Debug, Clone)]
pub struct SearchDoc<'a> {
    /// The record
    pub entry: &'a DocEntry,

    /// Record length in tokens
    pub doc_len: u32,

    /// Frequency of each matched query term in the record
    pub term_freqs: HashMap<String, u32>,
}

impl<'a> SearchDoc<'a> {
    /// Create a candidate with no matched terms yet
    pub fn new(entry: &'a DocEntry, doc_len: u32) -> Self {
        SearchDoc {
            entry,
            doc_len,
            term_freqs: HashMap::new(),
        }
    }

    /// Frequency of a term (0 when absent)
    pub fn tf(&self, term: &str) -> u32 {
        self.term_freqs.get(term).copied().unwrap_or(0)
    }
}

// ============================================================================
// ScorerContext
// ============================================================================

/// Corpus-level statistics needed for BM25
#[derive(Debug, Clone, Default)]
pub struct ScorerContext {
    /// Total records in corpus (for IDF calculation)
    pub total_docs: usize,

    /// Document frequency per term (for IDF calculation)
    pub doc_freqs: HashMap<String, usize>,

    /// Average record length in tokens (for length normalization)
    pub avg_doc_len: f32,
}

impl ScorerContext {
    /// Create a new ScorerContext
    pub fn new(total_docs: usize) -> Self {
        ScorerContext {
            total_docs,
            doc_freqs: HashMap::new(),
            avg_doc_len: 0.0,
        }
    }

    /// Statistics for the given query terms, read from an inverted index
    pub fn from_index(index: &InvertedIndex, terms: &[String]) -> Self {
        let mut ctx = ScorerContext::new(index.total_docs()).with_avg_doc_len(index.avg_doc_len());
        for term in terms {
            ctx.add_doc_freq(term, index.doc_freq(term));
        }
        ctx
    }

    /// Compute IDF for a term
    ///
    /// IDF(t) = ln((N - df + 0.5) / (df + 0.5) + 1)
    pub fn idf(&self, term: &str) -> f32 {
        let df = self.doc_freqs.get(term).copied().unwrap_or(0) as f32;
        let n = self.total_docs as f32;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// Add document frequency for a term
    pub fn add_doc_freq(&mut self, term: &str, count: usize) {
        self.doc_freqs.insert(term.to_string(), count);
    }

    /// Set average record length
    pub fn with_avg_doc_len(mut self, len: f32) -> Self {
        self.avg_doc_len = len;
        self
    }
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scorers take a candidate and the tokenized query and return a relevance
/// score. Higher scores indicate more relevant records.
///
/// Scorers must be Send + Sync so a `DocSearch` can be shared across threads.
pub trait Scorer: Send + Sync {
    /// Score a candidate against the query terms
    fn score(&self, doc: &SearchDoc<'_>, query_terms: &[String], ctx: &ScorerContext) -> f32;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// BM25LiteScorer
// ============================================================================

/// BM25-Lite: BM25 with title boosts
///
/// For each query term t:
/// score += IDF(t) * (tf * (k1 + 1)) / (tf + k1 * (1 - b + b * dl/avgdl))
///
/// Then:
/// - if any query term appears in the title, score *= title_boost
/// - if the title ends with the whole query (`PaintCanvas` against
///   `MakieDraw.PaintCanvas`), score *= exact_title_boost
#[derive(Debug, Clone)]
pub struct BM25LiteScorer {
    /// k1 parameter: term frequency saturation (default 1.2)
    k1: f32,
    /// b parameter: length normalization (default 0.75)
    b: f32,
    /// Multiplier when a query term is in the title (default 1.2)
    title_boost: f32,
    /// Multiplier when the title ends with the full query (default 1.5)
    exact_title_boost: f32,
}

impl Default for BM25LiteScorer {
    fn default() -> Self {
        BM25LiteScorer {
            k1: 1.2,
            b: 0.75,
            title_boost: 1.2,
            exact_title_boost: 1.5,
        }
    }
}

impl BM25LiteScorer {
    /// Create a new BM25LiteScorer with custom parameters
    pub fn new(k1: f32, b: f32) -> Self {
        BM25LiteScorer {
            k1,
            b,
            ..Self::default()
        }
    }

    /// Scorer configured from the `[search]` config section
    pub fn from_settings(settings: &SearchSettings) -> Self {
        BM25LiteScorer::new(settings.k1, settings.b).with_title_boost(settings.title_boost)
    }

    /// Builder: set title boost factor
    pub fn with_title_boost(mut self, factor: f32) -> Self {
        self.title_boost = factor;
        self
    }

    /// Builder: set exact-title boost factor
    pub fn with_exact_title_boost(mut self, factor: f32) -> Self {
        self.exact_title_boost = factor;
        self
    }
}

impl Scorer for BM25LiteScorer {
    fn score(&self, doc: &SearchDoc<'_>, query_terms: &[String], ctx: &ScorerContext) -> f32 {
        if query_terms.is_empty() || doc.doc_len == 0 {
            return 0.0;
        }

        let doc_len = doc.doc_len as f32;
        let avg_len = ctx.avg_doc_len.max(1.0);
        let mut score = 0.0;

        for term in query_terms {
            let tf = doc.tf(term) as f32;
            if tf == 0.0 {
                continue;
            }

            let tf_component = (tf * (self.k1 + 1.0))
                / (tf + self.k1 * (1.0 - self.b + self.b * doc_len / avg_len));

            score += ctx.idf(term) * tf_component;
        }

        if score == 0.0 {
            return 0.0;
        }

        let title_terms = tokenize(&doc.entry.title);
        if query_terms.iter().any(|t| title_terms.contains(t)) {
            score *= self.title_boost;
        }
        if title_terms.ends_with(query_terms) {
            score *= self.exact_title_boost;
        }

        score
    }

    fn name(&self) -> &str {
        "bm25-lite"
    }
}

// ============================================================================
// Tests
// ============================================================================

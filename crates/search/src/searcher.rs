//! Keyword search over a loaded index
//!
//! `DocSearch` owns the inverted index for one `SearchIndex` and answers
//! `SearchRequest`s against it.
//!
//! # Flow
//!
//! ```text
//! SearchRequest
//!      │
//!      ▼
//!  tokenize query ──(no terms)──► empty response
//!      │
//!      ▼
//!  posting lists ──► k-way merge by doc id (filtered, stops at budget)
//!      │
//!      ▼
//!  Scorer (BM25-lite) ──► sort (score desc, doc id asc) ──► top-k
//!      │
//!      ▼
//! SearchResponse
//! ```
//!
//! DocSearch is read-only after construction and cheap to clone.

use crate::index::{InvertedIndex, PostingEntry};
use crate::scorer::{BM25LiteScorer, Scorer, ScorerContext, SearchDoc};
use crate::tokenizer::tokenize_unique;
use crate::types::{SearchHit, SearchRequest, SearchResponse, SearchStats};
use docindex_core::{SearchIndex, SearchSettings};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Keyword search engine for one index
#[derive(Clone)]
pub struct DocSearch {
    docs: Arc<SearchIndex>,
    inverted: Arc<InvertedIndex>,
    scorer: Arc<dyn Scorer>,
}

impl std::fmt::Debug for DocSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocSearch")
            .field("docs", &self.docs.len())
            .field("terms", &self.inverted.term_count())
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl DocSearch {
    /// Index `docs` and search it with the default BM25-lite scorer
    pub fn new(docs: Arc<SearchIndex>) -> Self {
        let inverted = Arc::new(InvertedIndex::build(&docs));
        DocSearch {
            docs,
            inverted,
            scorer: Arc::new(BM25LiteScorer::default()),
        }
    }

    /// Index `docs` with scorer parameters from config
    pub fn with_settings(docs: Arc<SearchIndex>, settings: &SearchSettings) -> Self {
        Self::new(docs).with_scorer(Arc::new(BM25LiteScorer::from_settings(settings)))
    }

    /// Builder: set custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// The records being searched
    pub fn docs(&self) -> &SearchIndex {
        &self.docs
    }

    /// The inverted index
    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    /// Name of the active scorer
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Run a query
    ///
    /// Never fails: an empty or stopword-only query returns no hits.
    pub fn search(&self, req: &SearchRequest) -> SearchResponse {
        let start = Instant::now();
        let terms = tokenize_unique(&req.query);

        if terms.is_empty() || req.k == 0 {
            return SearchResponse::empty(SearchStats::new(start.elapsed().as_micros() as u64, 0));
        }

        let (candidates, budget_truncated) = self.gather(&terms, req);

        let ctx = ScorerContext::from_index(&self.inverted, &terms);
        let mut scored: Vec<(u32, f32)> = candidates
            .iter()
            .map(|(doc_id, doc)| (*doc_id, self.scorer.score(doc, &terms, &ctx)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        let truncated = budget_truncated || scored.len() > req.k;
        let hits: Vec<SearchHit> = scored
            .into_iter()
            .take(req.k)
            .enumerate()
            .filter_map(|(i, (doc_id, score))| {
                self.docs
                    .get(doc_id as usize)
                    .map(|entry| SearchHit::new(doc_id, entry, score, (i + 1) as u32))
            })
            .collect();

        let considered = candidates.len();
        let stats = SearchStats::new(start.elapsed().as_micros() as u64, considered);
        debug!(
            query = %req.query,
            candidates = considered,
            hits = hits.len(),
            truncated,
            "search complete"
        );

        SearchResponse {
            hits,
            truncated,
            stats,
        }
    }

    /// Merge the query terms' posting lists in doc-id order, keeping records
    /// that pass the request filters
    ///
    /// Stops at `max_candidates` records. The flag is set when a further
    /// matching record was left unread.
    fn gather(
        &self,
        terms: &[String],
        req: &SearchRequest,
    ) -> (Vec<(u32, SearchDoc<'_>)>, bool) {
        let lists: Vec<(&String, &[PostingEntry])> = terms
            .iter()
            .filter_map(|term| {
                self.inverted
                    .lookup(term)
                    .map(|list| (term, list.entries.as_slice()))
            })
            .collect();
        let mut cursors = vec![0usize; lists.len()];
        let mut candidates = Vec::new();

        loop {
            let next = lists
                .iter()
                .zip(&cursors)
                .filter_map(|((_, list), &at)| list.get(at).map(|p| p.doc_id))
                .min();
            let Some(doc_id) = next else {
                return (candidates, false);
            };

            let mut freqs = Vec::with_capacity(lists.len());
            for ((term, list), at) in lists.iter().zip(cursors.iter_mut()) {
                if let Some(posting) = list.get(*at).filter(|p| p.doc_id == doc_id) {
                    freqs.push((*term, posting.tf));
                    *at += 1;
                }
            }

            let Some(entry) = self.docs.get(doc_id as usize).filter(|e| req.matches(e)) else {
                continue;
            };
            if candidates.len() >= req.budget.max_candidates {
                return (candidates, true);
            }

            let mut doc = SearchDoc::new(entry, self.inverted.doc_len(doc_id));
            for (term, tf) in freqs {
                doc.term_freqs.insert(term.clone(), tf);
            }
            candidates.push((doc_id, doc));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Keyword search for documentation search indexes
//!
//! This crate provides:
//! - Tokenizer tuned for qualified symbol names
//! - InvertedIndex built in parallel from a loaded `SearchIndex`
//! - Scorer trait, ScorerContext and the BM25LiteScorer default
//! - DocSearch, which answers SearchRequests with ranked SearchHits
//! - SearchIndexExt extension trait for the `index.searcher()` accessor
//!
//! # Usage
//!
//! ```
//! use docindex_core::SearchIndex;
//! use docindex_search::{SearchIndexExt, SearchRequest};
//! use std::sync::Arc;
//!
//! let index = Arc::new(SearchIndex::parse(
//!     r##"{"docs":[{"location":"#Foo","page":"Home","title":"Foo","text":"a foo widget","category":"type"}]}"##,
//! ).unwrap());
//!
//! let response = index.searcher().search(&SearchRequest::new("widget"));
//! assert_eq!(response.hits[0].title, "Foo");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod scorer;
pub mod searcher;
pub mod tokenizer;
pub mod types;

use docindex_core::SearchIndex;
use std::sync::Arc;

// Re-export commonly used types
pub use index::{InvertedIndex, PostingEntry, PostingList};
pub use scorer::{BM25LiteScorer, Scorer, ScorerContext, SearchDoc};
pub use searcher::DocSearch;
pub use tokenizer::{tokenize, tokenize_unique};
pub use types::{SearchBudget, SearchHit, SearchRequest, SearchResponse, SearchStats};

// ============================================================================
// SearchIndex Extension
// ============================================================================

/// Extension trait adding `.searcher()` to a shared `SearchIndex`
pub trait SearchIndexExt {
    /// Build the inverted index and return a search engine over it
    fn searcher(&self) -> DocSearch;
}

impl SearchIndexExt for Arc<SearchIndex> {
    fn searcher(&self) -> DocSearch {
        DocSearch::new(Arc::clone(self))
    }
}

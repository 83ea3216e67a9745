//! docindex - Loader, validator and keyword search for documentation search indexes
//!
//! Documentation generators emit a `search_index.js` file: an ordered list of
//! records mapping a page/anchor location to display text and a category tag
//! (`page`, `type`, `method`, `section`). docindex loads that file (script or
//! bare JSON form), checks its invariants, writes it back out, and answers
//! keyword queries over it.
//!
//! # Quick Start
//!
//! ```ignore
//! use docindex::{SearchIndex, SearchIndexExt, SearchRequest};
//! use std::sync::Arc;
//!
//! let index = Arc::new(SearchIndex::load("docs/build/search_index.js")?);
//! let home = index.find_location("").map(|(_, e)| e);
//!
//! let response = index.searcher().search(&SearchRequest::new("PaintCanvas").with_k(5));
//! for hit in &response.hits {
//!     println!("{} {}", hit.rank, hit.location);
//! }
//! ```
//!
//! # Architecture
//!
//! - `docindex-core`: records, locations, loader, invariants, config
//! - `docindex-search`: tokenizer, inverted index, BM25 scoring
//!
//! The `docindex` binary lives in `docindex-cli`.

pub use docindex_core::*;
pub use docindex_search::*;

// Both crates have an `index` module; the record collection wins.
pub use docindex_core::index;

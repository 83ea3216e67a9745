//! Search request/response types
//!
//! - SearchRequest: query, top-k, filters and budget
//! - SearchBudget: candidate limit for one query
//! - SearchHit: one ranked record with its score
//! - SearchResponse: ranked hits plus execution statistics

use docindex_core::{Category, DocEntry};
use serde::Serialize;

// ============================================================================
// SearchBudget
// ============================================================================

/// Limits on search execution
///
/// Searches that hit the limit return the hits found so far with
/// `truncated` set, rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Maximum candidate records to score
    pub max_candidates: usize,
}

impl Default for SearchBudget {
    fn default() -> Self {
        SearchBudget {
            max_candidates: 10_000,
        }
    }
}

impl SearchBudget {
    /// Create a budget with a candidate limit
    pub fn new(max_candidates: usize) -> Self {
        SearchBudget { max_candidates }
    }
}

// ============================================================================
// SearchRequest
// ============================================================================

/// Keyword query against a search index
///
/// # Examples
///
/// ```
/// use docindex_core::Category;
/// use docindex_search::SearchRequest;
///
/// let req = SearchRequest::new("canvas")
///     .with_k(5)
///     .with_categories(vec![Category::Type]);
///
/// assert_eq!(req.k, 5);
/// assert!(req.includes_category(Category::Type));
/// assert!(!req.includes_category(Category::Page));
/// ```
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Query string
    pub query: String,

    /// Maximum results to return (top-k)
    pub k: usize,

    /// Optional: only these categories
    pub categories: Option<Vec<Category>>,

    /// Optional: only records on this page
    pub page: Option<String>,

    /// Work limits
    pub budget: SearchBudget,
}

impl SearchRequest {
    /// Create a new request with k = 10, no filters and the default budget
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            k: 10,
            categories: None,
            page: None,
            budget: SearchBudget::default(),
        }
    }

    /// Builder: set top-k results count
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Builder: restrict to categories
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Builder: restrict to one page
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Builder: set search budget
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Check if a category passes the filter
    pub fn includes_category(&self, category: Category) -> bool {
        match &self.categories {
            Some(filter) => filter.contains(&category),
            None => true,
        }
    }

    /// Check if a record passes all filters
    pub fn matches(&self, entry: &DocEntry) -> bool {
        self.includes_category(entry.category)
            && self.page.as_deref().map_or(true, |p| entry.page == p)
    }
}

// ============================================================================
// SearchHit
// ============================================================================

/// A single search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Position of the record in the index
    pub doc_id: u32,

    /// Record location (what the UI links to)
    pub location: String,

    /// Record title
    pub title: String,

    /// Page the record lives on
    pub page: String,

    /// Record category
    pub category: Category,

    /// Score from scorer (higher = more relevant)
    pub score: f32,

    /// Rank in result set (1-indexed)
    pub rank: u32,
}

impl SearchHit {
    /// Build a hit for a record
    pub fn new(doc_id: u32, entry: &DocEntry, score: f32, rank: u32) -> Self {
        SearchHit {
            doc_id,
            location: entry.location.clone(),
            title: entry.title.clone(),
            page: entry.page.clone(),
            category: entry.category,
            score,
            rank,
        }
    }
}

// ============================================================================
// SearchStats / SearchResponse
// ============================================================================

/// Execution statistics for one query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Wall time spent (microseconds)
    pub elapsed_micros: u64,

    /// Records scored
    pub candidates_considered: usize,
}

impl SearchStats {
    /// Create new stats
    pub fn new(elapsed_micros: u64, candidates_considered: usize) -> Self {
        SearchStats {
            elapsed_micros,
            candidates_considered,
        }
    }
}

/// Result of a search
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResponse {
    /// Ranked hits, best first
    pub hits: Vec<SearchHit>,

    /// More records matched than were returned (top-k cut or budget)
    pub truncated: bool,

    /// Execution statistics
    pub stats: SearchStats,
}

impl SearchResponse {
    /// Response with no hits
    pub fn empty(stats: SearchStats) -> Self {
        SearchResponse {
            hits: vec![],
            truncated: false,
            stats,
        }
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of hits returned
    pub fn len(&self) -> usize {
        self.hits.len()
    }
}

//! Test utilities for docindex comprehensive tests

#![allow(dead_code)]

use docindex::{Category, DocEntry, SearchIndex, SearchResponse};
use std::path::PathBuf;
use std::sync::Arc;

/// Entries in the fixture
pub const FIXTURE_ENTRIES: usize = 9;

/// Path of the generator artifact used as fixture
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("search_index.js")
}

/// Raw fixture text
pub fn fixture_text() -> String {
    std::fs::read_to_string(fixture_path()).expect("fixture should be readable")
}

/// Fixture loaded with default (strict) options
pub fn load_fixture() -> SearchIndex {
    SearchIndex::load(fixture_path()).expect("fixture should load")
}

/// Fixture behind an Arc, ready for searching
pub fn shared_fixture() -> Arc<SearchIndex> {
    Arc::new(load_fixture())
}

/// Small hand-built index spanning two pages and every category
pub fn two_page_index() -> SearchIndex {
    vec![
        DocEntry::page("", "Home", "Drawing canvases for Makie"),
        DocEntry::new("#Canvases", "Home", "Canvases", "", Category::Section),
        DocEntry::new(
            "#MakieDraw.PaintCanvas",
            "Home",
            "MakieDraw.PaintCanvas",
            "A canvas for painting into a Matrix.",
            Category::Type,
        ),
        DocEntry::page("api/", "API", "Function reference"),
        DocEntry::new(
            "api/#MakieDraw.draw!-Tuple{Any}",
            "API",
            "MakieDraw.draw!",
            "Draw onto a canvas.",
            Category::Method,
        ),
        DocEntry::new(
            "api/#MakieDraw.reset!-Tuple{Any}",
            "API",
            "MakieDraw.reset!",
            "Clear a paint canvas back to its initial data.",
            Category::Method,
        ),
    ]
    .into_iter()
    .collect()
}

/// Wrap a list of JSON record literals in the script form
pub fn script_of(records: &[&str]) -> String {
    format!(
        "var documenterSearchIndex = {{\"docs\":\n[{}]\n}}\n",
        records.join(",")
    )
}

/// Run the same search several times and assert identical results
pub fn verify_deterministic(run: impl Fn() -> SearchResponse) {
    let first = run();
    for i in 1..5 {
        let again = run();
        assert_eq!(again.hits, first.hits, "iteration {} should match", i);
        assert_eq!(again.truncated, first.truncated);
    }
}

/// Assert ranks are 1..=n and scores never increase
pub fn assert_well_ranked(resp: &SearchResponse) {
    for (i, hit) in resp.hits.iter().enumerate() {
        assert_eq!(hit.rank as usize, i + 1, "ranks must be sequential");
        assert!(hit.score > 0.0, "hits must have positive scores");
    }
    for pair in resp.hits.windows(2) {
        assert!(pair[0].score >= pair[1].score, "scores must not increase");
    }
}

//! Tier 2: Invariants
//!
//! Category vocabulary, location syntax, location uniqueness and the single
//! root page, checked on the fixture and on hand-built violations.

use super::test_utils::*;
use docindex::{
    Category, DocEntry, Error, LoadOptions, Location, SearchIndex, SearchIndexBuilder,
};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Fixture Properties
// ============================================================================

/// Every record's category is one of the recognized set
#[test]
fn test_tier2_categories_recognized() {
    for entry in &load_fixture() {
        assert!(Category::ALL.contains(&entry.category));
        assert!(["page", "type", "method", "section"].contains(&entry.category.as_str()));
    }
}

/// Page records have a valid location or the empty root
#[test]
fn test_tier2_page_locations_valid() {
    let index = load_fixture();
    for entry in index.by_category(Category::Page) {
        let loc = entry.parsed_location().unwrap();
        assert!(entry.location.is_empty() || loc.fragment().is_some() || !loc.path().is_empty());
    }
}

/// Non-page locations are present and unique
#[test]
fn test_tier2_non_page_locations_unique() {
    let index = load_fixture();
    let mut seen = std::collections::HashSet::new();
    for entry in index.iter().filter(|e| !e.is_page()) {
        assert!(!entry.location.is_empty());
        assert!(seen.insert(entry.location.as_str()), "{} repeated", entry.location);
    }
    assert!(index.validate().is_ok());
}

/// Repeated page records at the root are allowed
#[test]
fn test_tier2_page_records_may_repeat() {
    let index = load_fixture();
    let roots = index.iter().filter(|e| e.is_root_page()).count();
    assert_eq!(roots, 4);
    assert!(index.validate().is_ok());
}

// ============================================================================
// Violations
// ============================================================================

/// Duplicate type location is rejected by the builder
#[test]
fn test_tier2_builder_rejects_duplicate() {
    let mut builder = SearchIndexBuilder::new();
    builder
        .push(DocEntry::new("#A", "Home", "A", "", Category::Type))
        .push(DocEntry::new("#B", "Home", "B", "", Category::Type))
        .push(DocEntry::new("#A", "Home", "A again", "", Category::Method));
    match builder.build().unwrap_err() {
        Error::DuplicateLocation {
            location,
            first,
            second,
        } => {
            assert_eq!(location, "#A");
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("expected duplicate, got {:?}", other),
    }
}

/// Non-page record without a location
#[test]
fn test_tier2_missing_location() {
    let index: SearchIndex = vec![
        DocEntry::page("", "Home", ""),
        DocEntry::new("", "Home", "Orphan", "", Category::Section),
    ]
    .into_iter()
    .collect();
    let err = index.validate().unwrap_err();
    assert!(matches!(err, Error::MissingLocation { index: 1 }));
    assert_eq!(err.entry_index(), Some(1));
}

/// Malformed locations are named with their reason
#[test]
fn test_tier2_invalid_locations() {
    for bad in ["/abs#x", "https://example.com#x", "#", "a b#x", "page?q=1#x"] {
        let index: SearchIndex = vec![DocEntry::new(bad, "Home", "t", "", Category::Type)]
            .into_iter()
            .collect();
        match index.validate() {
            Err(Error::InvalidLocation { index, location, .. }) => {
                assert_eq!(index, 0);
                assert_eq!(location, bad);
            }
            other => panic!("{:?} should be invalid, got {:?}", bad, other),
        }
        assert!(Location::parse(bad).is_err());
    }
}

/// Only one page may claim the empty root location
#[test]
fn test_tier2_root_location_single_page() {
    let index: SearchIndex = vec![
        DocEntry::page("", "Home", "CurrentModule = MakieDraw"),
        DocEntry::page("", "Home", "Documentation for MakieDraw."),
        DocEntry::page("", "API", "Function reference"),
    ]
    .into_iter()
    .collect();
    match index.validate() {
        Err(Error::InvalidLocation {
            index,
            location,
            reason,
        }) => {
            assert_eq!(index, 2);
            assert!(location.is_empty());
            assert_eq!(reason, "empty location is reserved for the root page");
        }
        other => panic!("expected InvalidLocation, got {:?}", other),
    }

    let fixed: SearchIndex = vec![
        DocEntry::page("", "Home", "CurrentModule = MakieDraw"),
        DocEntry::page("api/", "API", "Function reference"),
    ]
    .into_iter()
    .collect();
    assert!(fixed.validate().is_ok());
}

/// The first violation in record order is reported
#[test]
fn test_tier2_first_violation_wins() {
    let index: SearchIndex = vec![
        DocEntry::new("#A", "Home", "A", "", Category::Type),
        DocEntry::new("/bad", "Home", "bad", "", Category::Type),
        DocEntry::new("#A", "Home", "A", "", Category::Type),
    ]
    .into_iter()
    .collect();
    assert!(matches!(
        index.validate(),
        Err(Error::InvalidLocation { index: 1, .. })
    ));
}

/// Strict loads fail on violations, lenient loads keep the records
#[test]
fn test_tier2_lenient_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search_index.js");
    fs::write(
        &path,
        script_of(&[
            r##"{"location":"#A","page":"Home","title":"A","text":"","category":"type"}"##,
            r##"{"location":"#A","page":"Home","title":"A","text":"","category":"method"}"##,
        ]),
    )
    .unwrap();

    assert!(matches!(
        SearchIndex::load(&path),
        Err(Error::DuplicateLocation { .. })
    ));

    let index = SearchIndex::load_with(&path, &LoadOptions::lenient()).unwrap();
    assert_eq!(index.len(), 2);
    assert!(index.validate().is_err());
}

/// Lenient loads surface every violation, not just the first
#[test]
fn test_tier2_lenient_load_reports_all_violations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search_index.js");
    fs::write(
        &path,
        script_of(&[
            r##"{"location":"","page":"Home","title":"Home","text":"","category":"page"}"##,
            r##"{"location":"#A","page":"Home","title":"A","text":"","category":"type"}"##,
            r##"{"location":"#A","page":"Home","title":"A","text":"","category":"method"}"##,
            r##"{"location":"/abs#B","page":"Home","title":"B","text":"","category":"type"}"##,
            r##"{"location":"","page":"API","title":"API","text":"","category":"page"}"##,
        ]),
    )
    .unwrap();

    let index = SearchIndex::load_with(&path, &LoadOptions::lenient()).unwrap();
    assert_eq!(index.len(), 5);
    let violations = index.invariant_violations();
    assert_eq!(violations.len(), 3);
    assert!(matches!(violations[0], Error::DuplicateLocation { first: 1, second: 2, .. }));
    assert!(matches!(violations[1], Error::InvalidLocation { index: 3, .. }));
    assert!(matches!(violations[2], Error::InvalidLocation { index: 4, .. }));
    assert!(load_fixture().invariant_violations().is_empty());
}

/// Hand-built index with two pages satisfies every invariant
#[test]
fn test_tier2_two_page_index_valid() {
    let index = two_page_index();
    assert!(index.validate().is_ok());
    assert_eq!(index.pages(), vec!["Home", "API"]);
    let mut builder = SearchIndexBuilder::new();
    builder.extend(index.iter().cloned());
    assert_eq!(builder.len(), index.len());
    assert_eq!(builder.build().unwrap(), index);
}

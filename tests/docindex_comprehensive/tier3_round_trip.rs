//! Tier 3: Round Trip
//!
//! Serializing a collection and re-parsing it yields the identical ordered
//! sequence, in both file forms.

use super::test_utils::*;
use docindex::{Category, DocEntry, IndexFormat, SearchIndex};
use proptest::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Fixture
// ============================================================================

/// Script form round trip preserves order and content
#[test]
fn test_tier3_fixture_script_round_trip() {
    let index = load_fixture();
    let js = index.to_js_string().unwrap();
    assert!(js.starts_with("var documenterSearchIndex = {\"docs\":\n["));
    assert_eq!(SearchIndex::from_js_str(&js).unwrap(), index);
}

/// Regenerated script is byte-identical to what the generator wrote
#[test]
fn test_tier3_fixture_script_matches_generator() {
    let js = load_fixture().to_js_string().unwrap();
    assert_eq!(js, fixture_text());
}

/// Pretty JSON parses back to the same records
#[test]
fn test_tier3_fixture_pretty_json_round_trip() {
    let index = load_fixture();
    let pretty = index.to_json_string_pretty().unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(SearchIndex::parse(&pretty).unwrap(), index);
}

/// Files written in each form load back unchanged
#[test]
fn test_tier3_write_to_each_format() {
    let dir = TempDir::new().unwrap();
    let index = load_fixture();
    for (format, pretty) in [
        (IndexFormat::Json, false),
        (IndexFormat::Json, true),
        (IndexFormat::Script, false),
    ] {
        let path = dir.path().join(format!("out-{}-{}", format, pretty));
        index.write_to(&path, format, pretty).unwrap();
        assert_eq!(SearchIndex::load(&path).unwrap(), index, "{} pretty={}", format, pretty);
    }
}

/// Text with quotes, backslashes, newlines and non-ASCII survives
#[test]
fn test_tier3_escaping() {
    let index: SearchIndex = vec![DocEntry::new(
        "#Base.:∘",
        "Home",
        "Base.:∘",
        "f ∘ g\n\"composed\"\t\\ ok",
        Category::Method,
    )]
    .into_iter()
    .collect();
    let back = SearchIndex::from_js_str(&index.to_js_string().unwrap()).unwrap();
    assert_eq!(back, index);
    assert_eq!(back.get(0).unwrap().text, "f ∘ g\n\"composed\"\t\\ ok");
}

// ============================================================================
// Property-Based
// ============================================================================

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Page),
        Just(Category::Type),
        Just(Category::Method),
        Just(Category::Section),
    ]
}

/// Records with unique non-page locations and a single root page, so the
/// result is valid
fn entries() -> impl Strategy<Value = Vec<DocEntry>> {
    prop::collection::vec(
        (
            category(),
            "[A-Za-z][A-Za-z0-9_.]{0,12}",
            "\\PC{0,16}",
            "\\PC{0,16}",
            any::<String>(),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, symbol, page, title, text))| {
                let (location, page) = match category {
                    Category::Page if i % 2 == 0 => (String::new(), "Home".to_string()),
                    Category::Page => (format!("page{}/", i), page),
                    _ => (format!("#{}-{}", symbol, i), page),
                };
                DocEntry::new(location, page, title, text, category)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_tier3_script_round_trip(docs in entries()) {
        let index: SearchIndex = docs.clone().into_iter().collect();
        prop_assert!(index.validate().is_ok());
        let back = SearchIndex::parse(&index.to_js_string().unwrap()).unwrap();
        prop_assert_eq!(back.entries(), &docs[..]);
    }

    #[test]
    fn prop_tier3_json_round_trip(docs in entries()) {
        let index: SearchIndex = docs.clone().into_iter().collect();
        let back = SearchIndex::parse(&index.to_json_string().unwrap()).unwrap();
        prop_assert_eq!(back.into_entries(), docs);
    }
}

//! Tier 5: Config and Limits
//!
//! `docindex.toml` drives loading and ranking; size limits are enforced on
//! every load, strict or not.

use super::test_utils::*;
use docindex::{
    Config, DocSearch, Error, Limits, LoadOptions, SearchIndex, SearchRequest, CONFIG_FILE_NAME,
};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Config
// ============================================================================

/// The commented default file parses to the defaults
#[test]
fn test_tier5_default_toml() {
    assert_eq!(Config::from_toml_str(Config::default_toml()).unwrap(), Config::default());
}

/// Missing file means defaults
#[test]
fn test_tier5_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config, Config::default());
}

/// Partial file keeps defaults for the rest
#[test]
fn test_tier5_partial_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "strict = false\n[search]\ndefault_k = 3\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(!config.strict);
    assert_eq!(config.search.default_k, 3);
    assert_eq!(config.search.k1, 1.2);
    assert_eq!(config.limits, Limits::default());
}

/// Written config reads back unchanged
#[test]
fn test_tier5_config_write_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let mut config = Config::default();
    config.search.title_boost = 2.0;
    config.limits.max_entries = 50;
    config.write_to_file(&path).unwrap();
    assert_eq!(Config::from_file(&path).unwrap(), config);
}

/// Bad values are config errors
#[test]
fn test_tier5_invalid_config() {
    for bad in [
        "[search]\ndefault_k = 0\n",
        "[search]\nmax_candidates = 0\n",
        "[search]\nb = 1.5\n",
        "[search]\ntitle_boost = 0.5\n",
        "strict = \"yes\"\n",
        "not toml at all = = =",
    ] {
        assert!(
            matches!(Config::from_toml_str(bad), Err(Error::Config(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

/// A non-strict config loads an index with duplicate locations
#[test]
fn test_tier5_config_drives_strictness() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search_index.js");
    fs::write(
        &path,
        script_of(&[
            r##"{"location":"#A","page":"Home","title":"A","text":"","category":"type"}"##,
            r##"{"location":"#A","page":"Home","title":"A","text":"","category":"type"}"##,
        ]),
    )
    .unwrap();

    let strict = Config::default();
    assert!(SearchIndex::load_with(&path, &strict.load_options()).is_err());

    let lenient = Config::from_toml_str("strict = false").unwrap();
    assert_eq!(
        SearchIndex::load_with(&path, &lenient.load_options()).unwrap().len(),
        2
    );
}

/// Search settings flow into results
#[test]
fn test_tier5_search_settings() {
    let config = Config::from_toml_str("[search]\ndefault_k = 2\nk1 = 1.5\n").unwrap();
    let search = DocSearch::with_settings(shared_fixture(), &config.search);
    let resp = search.search(&SearchRequest::new("makiedraw").with_k(config.search.default_k));
    assert_eq!(resp.len(), 2);
    assert!(resp.truncated);
}

// ============================================================================
// Limits
// ============================================================================

/// Oversized file is rejected before parsing
#[test]
fn test_tier5_file_size_limit() {
    let opts = LoadOptions::default().with_limits(Limits::with_small_limits());
    match SearchIndex::load_with(fixture_path(), &opts) {
        Err(Error::LimitExceeded { what, limit, .. }) => {
            assert_eq!(what, "file size");
            assert_eq!(limit, 4096);
        }
        other => panic!("expected file size limit, got {:?}", other),
    }
}

/// Limits apply even in lenient mode
#[test]
fn test_tier5_limits_ignore_leniency() {
    let limits = Limits {
        max_entries: 5,
        ..Limits::default()
    };
    let opts = LoadOptions::lenient().with_limits(limits);
    assert!(matches!(
        SearchIndex::load_with(fixture_path(), &opts),
        Err(Error::LimitExceeded { limit: 5, actual: 9, .. })
    ));
}

/// Per-record text and location sizes
#[test]
fn test_tier5_entry_limits() {
    let index = load_fixture();
    let tight_text = Limits {
        max_text_bytes: 64,
        ..Limits::default()
    };
    match index.validate_with(&tight_text) {
        Err(Error::LimitExceeded { what, .. }) => assert!(what.starts_with("text length")),
        other => panic!("expected text limit, got {:?}", other),
    }

    let tight_location = Limits {
        max_location_bytes: 16,
        ..Limits::default()
    };
    match index.validate_with(&tight_location) {
        Err(Error::LimitExceeded { what, .. }) => {
            assert!(what.starts_with("location length"))
        }
        other => panic!("expected location limit, got {:?}", other),
    }
}

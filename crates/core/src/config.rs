//! Configuration via `docindex.toml`
//!
//! Every key is optional; a missing file means defaults. Command-line flags
//! override whatever the file says.

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::loader::LoadOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "docindex.toml";

/// Ranking and result-size settings, `[search]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Results returned when the caller does not ask for a count
    pub default_k: usize,
    /// BM25 term-frequency saturation
    pub k1: f32,
    /// BM25 length normalization
    pub b: f32,
    /// Multiplier applied when a query term appears in the title
    pub title_boost: f32,
    /// Candidate budget per query
    pub max_candidates: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            default_k: 10,
            k1: 1.2,
            b: 0.75,
            title_boost: 1.2,
            max_candidates: 10_000,
        }
    }
}

/// Configuration loaded from `docindex.toml`.
///
/// # Example
///
/// ```toml
/// strict = true
///
/// [limits]
/// max_entries = 1000000
///
/// [search]
/// default_k = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fail loads on invariant violations
    pub strict: bool,
    /// Size limits
    pub limits: Limits,
    /// Search settings
    pub search: SearchSettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict: true,
            limits: Limits::default(),
            search: SearchSettings::default(),
        }
    }
}

impl Config {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docindex configuration
#
# Validate location invariants on load (default: true).
# When false, violations are logged and the index is still loaded.
strict = true

[limits]
max_file_bytes = 67108864     # 64MB
max_entries = 1000000
max_text_bytes = 1048576      # 1MB per record body
max_location_bytes = 2048

[search]
default_k = 10
k1 = 1.2                      # BM25 term saturation
b = 0.75                      # BM25 length normalization
title_boost = 1.2             # multiplier for title matches
max_candidates = 10000
"#
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Read the file if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings that would make searches meaningless
    pub fn validate(&self) -> Result<()> {
        let s = &self.search;
        if s.default_k == 0 {
            return Err(Error::Config("search.default_k must be at least 1".into()));
        }
        if s.max_candidates == 0 {
            return Err(Error::Config("search.max_candidates must be at least 1".into()));
        }
        if !(s.k1.is_finite() && s.k1 >= 0.0) {
            return Err(Error::Config(format!("search.k1 must be >= 0, got {}", s.k1)));
        }
        if !(0.0..=1.0).contains(&s.b) {
            return Err(Error::Config(format!("search.b must be in [0, 1], got {}", s.b)));
        }
        if !(s.title_boost.is_finite() && s.title_boost >= 1.0) {
            return Err(Error::Config(format!(
                "search.title_boost must be >= 1, got {}",
                s.title_boost
            )));
        }
        Ok(())
    }

    /// Loader options derived from this config
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict: self.strict,
            limits: self.limits.clone(),
        }
    }
}

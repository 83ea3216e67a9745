//! Size limits for index files and records
//!
//! Limits are enforced on every load, strict or not. Violations result in
//! `Error::LimitExceeded`. They can be overridden in the `[limits]` section of
//! `docindex.toml`.

use crate::entry::DocEntry;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Size limits applied while loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum index file size in bytes (default: 64MB)
    pub max_file_bytes: usize,

    /// Maximum number of records (default: 1M)
    pub max_entries: usize,

    /// Maximum record body length in bytes (default: 1MB)
    pub max_text_bytes: usize,

    /// Maximum location length in bytes (default: 2048)
    pub max_location_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_file_bytes: 64 * 1024 * 1024, // 64MB
            max_entries: 1_000_000,
            max_text_bytes: 1024 * 1024, // 1MB
            max_location_bytes: 2048,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_file_bytes: 4096,
            max_entries: 10,
            max_text_bytes: 256,
            max_location_bytes: 64,
        }
    }

    /// Validate the size of an index file before reading it
    pub fn validate_file_size(&self, bytes: u64) -> Result<()> {
        let actual = usize::try_from(bytes).unwrap_or(usize::MAX);
        check("file size", actual, self.max_file_bytes)
    }

    /// Validate the number of records
    pub fn validate_entry_count(&self, count: usize) -> Result<()> {
        check("entry count", count, self.max_entries)
    }

    /// Validate a single record's field sizes
    pub fn validate_entry(&self, index: usize, entry: &DocEntry) -> Result<()> {
        if entry.text.len() > self.max_text_bytes {
            return Err(Error::LimitExceeded {
                what: format!("text length of entry {}", index),
                limit: self.max_text_bytes,
                actual: entry.text.len(),
            });
        }
        if entry.location.len() > self.max_location_bytes {
            return Err(Error::LimitExceeded {
                what: format!("location length of entry {}", index),
                limit: self.max_location_bytes,
                actual: entry.location.len(),
            });
        }
        Ok(())
    }
}

fn check(what: &str, actual: usize, limit: usize) -> Result<()> {
    if actual > limit {
        return Err(Error::LimitExceeded {
            what: what.to_string(),
            limit,
            actual,
        });
    }
    Ok(())
}

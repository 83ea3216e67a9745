//! Entry category enumeration
//!
//! Every record in a search index is tagged with the role it plays on the
//! documentation site. The search UI recognizes exactly four:
//!
//! | Category | Produced for |
//! |----------|--------------|
//! | Page | A paragraph of page prose |
//! | Type | A type docstring |
//! | Method | A function/method docstring |
//! | Section | A heading anchor |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a record in the search index
///
/// Serialized as the lowercase tag (`"page"`, `"type"`, ...). Any other tag
/// fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Page prose
    Page,
    /// Type docstring
    Type,
    /// Method docstring
    Method,
    /// Section heading
    Section,
}

impl Category {
    /// All categories (for iteration)
    pub const ALL: [Category; 4] = [
        Category::Page,
        Category::Type,
        Category::Method,
        Category::Section,
    ];

    /// Get all categories as a slice
    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    /// Tag as written in the index
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Type => "type",
            Category::Method => "method",
            Category::Section => "section",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}' (expected page, type, method or section)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Category::Page),
            "type" => Ok(Category::Type),
            "method" => Ok(Category::Method),
            "section" => Ok(Category::Section),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

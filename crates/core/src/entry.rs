//! Search index record
//!
//! One `DocEntry` per searchable unit of the documentation site. The JSON
//! shape is fixed by the search UI:
//!
//! ```json
//! {"location":"#MakieDraw","page":"Home","title":"MakieDraw","text":"","category":"section"}
//! ```
//!
//! All five fields are required. Unknown extra fields are ignored.

use crate::category::Category;
use crate::location::{Location, LocationError};
use serde::{Deserialize, Serialize};

/// One record of the search index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// Anchor or URL fragment (empty for the root page)
    pub location: String,
    /// Display name of the page the record lives on
    pub page: String,
    /// Symbol or section name
    pub title: String,
    /// Documentation body, possibly empty
    pub text: String,
    /// Role of the record
    pub category: Category,
}

impl DocEntry {
    /// Create a new record
    pub fn new(
        location: impl Into<String>,
        page: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        category: Category,
    ) -> Self {
        DocEntry {
            location: location.into(),
            page: page.into(),
            title: title.into(),
            text: text.into(),
            category,
        }
    }

    /// Page prose record
    pub fn page(location: impl Into<String>, page: impl Into<String>, text: impl Into<String>) -> Self {
        let page = page.into();
        DocEntry::new(location, page.clone(), page, text, Category::Page)
    }

    /// Parse the location string
    pub fn parsed_location(&self) -> Result<Location, LocationError> {
        Location::parse(&self.location)
    }

    /// True for page prose records
    pub fn is_page(&self) -> bool {
        self.category == Category::Page
    }

    /// True for page records on the site root
    pub fn is_root_page(&self) -> bool {
        self.is_page() && self.location.is_empty()
    }

    /// True when the body is empty (headings, placeholder paragraphs)
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// First non-empty line of the body, used as a one-line summary
    pub fn summary(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("")
    }
}

//! Core types for documentation search indexes
//!
//! This crate defines the data side of a generated documentation search index:
//! - Category: fixed vocabulary of record roles ("page", "type", "method", "section")
//! - DocEntry: one record mapping an anchor to page, title, text and category
//! - Location: parsed `[path][#fragment]` form of a record's location
//! - SearchIndex: the ordered, immutable record collection (`{"docs": [...]}`)
//! - SearchIndexBuilder: append-only construction at documentation-build time
//! - Loader: raw JSON and `var documenterSearchIndex = ...` script forms
//! - Limits / Config: size limits and `docindex.toml` settings
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod config;
pub mod entry;
pub mod error;
pub mod index;
pub mod limits;
pub mod loader;
pub mod location;

pub use category::Category;
pub use config::{Config, SearchSettings, CONFIG_FILE_NAME};
pub use entry::DocEntry;
pub use error::{Error, Result};
pub use index::{SearchIndex, SearchIndexBuilder};
pub use limits::Limits;
pub use loader::{IndexFormat, LoadOptions, SCRIPT_VARIABLE};
pub use location::{Location, LocationError};

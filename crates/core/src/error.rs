//! Error types for docindex
//!
//! This module defines all error types used when loading, validating and
//! writing search indexes. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for docindex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading and validating a search index
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading or writing index files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON or a record with missing/mistyped fields
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
        /// Description from the JSON decoder
        message: String,
    },

    /// Script form without a `documenterSearchIndex` assignment
    #[error("Script does not assign documenterSearchIndex")]
    MissingWrapper,

    /// Location is not a valid fragment identifier
    #[error("Invalid location {location:?} in entry {index}: {reason}")]
    InvalidLocation {
        /// Position of the offending entry
        index: usize,
        /// The location as found
        location: String,
        /// Why it was rejected
        reason: String,
    },

    /// Non-page entry without a location
    #[error("Entry {index} has an empty location but is not a page entry")]
    MissingLocation {
        /// Position of the offending entry
        index: usize,
    },

    /// Two non-page entries share a location
    #[error("Duplicate location {location:?} in entries {first} and {second}")]
    DuplicateLocation {
        /// The shared location
        location: String,
        /// Position of the first entry
        first: usize,
        /// Position of the second entry
        second: usize,
    },

    /// A size limit was exceeded
    #[error("Limit exceeded: {what} is {actual} (max {limit})")]
    LimitExceeded {
        /// What was measured
        what: String,
        /// Configured maximum
        limit: usize,
        /// Measured value
        actual: usize,
    },

    /// Config file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Output encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Build a parse error from a JSON decoder error
    ///
    /// `line_offset` and `column_offset` describe where the JSON body starts
    /// in the original text, so positions inside a script wrapper point at
    /// the file the user actually has.
    pub(crate) fn from_json(e: serde_json::Error, line_offset: usize, column_offset: usize) -> Self {
        let line = e.line() + line_offset;
        let column = if e.line() == 1 {
            e.column() + column_offset
        } else {
            e.column()
        };
        let message = match e.to_string().rsplit_once(" at line ") {
            Some((msg, _)) => msg.to_string(),
            None => e.to_string(),
        };
        Error::Parse {
            line,
            column,
            message,
        }
    }

    /// Entry position this error refers to, if any
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            Error::InvalidLocation { index, .. } | Error::MissingLocation { index } => Some(*index),
            Error::DuplicateLocation { second, .. } => Some(*second),
            _ => None,
        }
    }
}

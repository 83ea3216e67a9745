//! Reading and writing index files
//!
//! The generator writes the index as a script that assigns the collection to
//! a global the search widget reads:
//!
//! ```text
//! var documenterSearchIndex = {"docs":
//! [{"location":"","page":"Home",...}, ...]
//! }
//! ```
//!
//! Both that script form and the bare JSON object are accepted. Parsing
//! reports malformed JSON and malformed records as `Error::Parse` with a
//! position in the original text.

use crate::entry::DocEntry;
use crate::error::{Error, Result};
use crate::index::SearchIndex;
use crate::limits::Limits;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Global the generator assigns the collection to
pub const SCRIPT_VARIABLE: &str = "documenterSearchIndex";

/// On-disk form of an index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    /// Bare `{"docs": [...]}` object
    Json,
    /// `var documenterSearchIndex = {...}` script
    Script,
}

impl IndexFormat {
    /// Guess the form from the first non-whitespace character
    pub fn detect(text: &str) -> Self {
        if strip_bom(text).trim_start().starts_with('{') {
            IndexFormat::Json
        } else {
            IndexFormat::Script
        }
    }

    /// Short identifier (for CLI flags)
    pub const fn id(&self) -> &'static str {
        match self {
            IndexFormat::Json => "json",
            IndexFormat::Script => "js",
        }
    }
}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IndexFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(IndexFormat::Json),
            "js" | "script" => Ok(IndexFormat::Script),
            other => Err(Error::Config(format!(
                "unknown index format '{}' (expected json or js)",
                other
            ))),
        }
    }
}

/// Options for `SearchIndex::load_with`
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Reject invariant violations instead of logging them
    pub strict: bool,
    /// Size limits (always enforced)
    pub limits: Limits,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            strict: true,
            limits: Limits::default(),
        }
    }
}

impl LoadOptions {
    /// Lenient options: invariant violations are logged, not returned
    pub fn lenient() -> Self {
        LoadOptions {
            strict: false,
            ..Self::default()
        }
    }

    /// Builder: set limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Locate the JSON body of a script, returning it with its line/column offset
fn script_body(text: &str) -> Result<(&str, usize, usize)> {
    let var_pos = text.find(SCRIPT_VARIABLE).ok_or(Error::MissingWrapper)?;
    let after_var = var_pos + SCRIPT_VARIABLE.len();
    let rest = &text[after_var..];
    let eq_rel = rest
        .find(|c: char| !c.is_whitespace())
        .filter(|&i| rest[i..].starts_with('='))
        .ok_or(Error::MissingWrapper)?;
    let body_start = after_var + eq_rel + 1;

    let body = text[body_start..].trim_end();
    let body = body.strip_suffix(';').unwrap_or(body);

    let prefix = &text[..body_start];
    let line_offset = prefix.matches('\n').count();
    let column_offset = match prefix.rfind('\n') {
        Some(nl) => prefix[nl + 1..].chars().count(),
        None => prefix.chars().count(),
    };
    Ok((body, line_offset, column_offset))
}

impl SearchIndex {
    // ========================================================================
    // Parsing
    // ========================================================================

    /// Parse the bare JSON form
    pub fn from_json_str(text: &str) -> Result<Self> {
        let index: SearchIndex =
            serde_json::from_str(strip_bom(text)).map_err(|e| Error::from_json(e, 0, 0))?;
        debug!(entries = index.len(), "parsed JSON search index");
        Ok(index)
    }

    /// Parse the `var documenterSearchIndex = ...` script form
    pub fn from_js_str(text: &str) -> Result<Self> {
        let (body, line_offset, column_offset) = script_body(strip_bom(text))?;
        let index: SearchIndex = serde_json::from_str(body)
            .map_err(|e| Error::from_json(e, line_offset, column_offset))?;
        debug!(entries = index.len(), "parsed script search index");
        Ok(index)
    }

    /// Parse either form, detected from the content
    pub fn parse(text: &str) -> Result<Self> {
        match IndexFormat::detect(text) {
            IndexFormat::Json => Self::from_json_str(text),
            IndexFormat::Script => Self::from_js_str(text),
        }
    }

    /// Read, parse and strictly validate a file with default limits
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &LoadOptions::default())
    }

    /// Read, parse and validate a file
    ///
    /// Limits are always enforced. Invariant violations fail the load when
    /// `opts.strict` is set. Otherwise each one is logged and the load goes on.
    pub fn load_with(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let size = std::fs::metadata(path)?.len();
        opts.limits.validate_file_size(size)?;

        let text = std::fs::read_to_string(path)?;
        let index = Self::parse(&text)?;
        index.check_limits(&opts.limits)?;

        if opts.strict {
            index.check_invariants()?;
        } else {
            let violations = index.invariant_violations();
            for e in &violations {
                warn!(path = %path.display(), error = %e, "search index violates invariants");
            }
            if !violations.is_empty() {
                warn!(
                    path = %path.display(),
                    count = violations.len(),
                    "loaded search index with invariant violations"
                );
            }
        }

        debug!(path = %path.display(), entries = index.len(), "loaded search index");
        Ok(index)
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Compact JSON form
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Indented JSON form
    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Script form, laid out the way the generator writes it
    pub fn to_js_string(&self) -> Result<String> {
        let docs = serde_json::to_string(self.entries())
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(format!(
            "var {} = {{\"docs\":\n{}\n}}\n",
            SCRIPT_VARIABLE, docs
        ))
    }

    /// Serialize in the given form
    ///
    /// `pretty` only affects JSON; the script form keeps the generator's layout.
    pub fn to_format_string(&self, format: IndexFormat, pretty: bool) -> Result<String> {
        match (format, pretty) {
            (IndexFormat::Json, false) => self.to_json_string(),
            (IndexFormat::Json, true) => self.to_json_string_pretty(),
            (IndexFormat::Script, _) => self.to_js_string(),
        }
    }

    /// Write the index to a file in the given form
    pub fn write_to(&self, path: impl AsRef<Path>, format: IndexFormat, pretty: bool) -> Result<()> {
        let content = self.to_format_string(format, pretty)?;
        std::fs::write(path.as_ref(), content)?;
        debug!(path = %path.as_ref().display(), %format, "wrote search index");
        Ok(())
    }
}

impl FromStr for SearchIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SearchIndex::parse(s)
    }
}

impl FromIterator<DocEntry> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = DocEntry>>(iter: I) -> Self {
        SearchIndex::from_entries_unchecked(iter.into_iter().collect())
    }
}

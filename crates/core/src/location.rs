//! Entry location type
//!
//! A location is what the search UI appends to the site root to jump to a
//! hit. The generator writes it as `[path][#fragment]`:
//!
//! - `""` for the root page
//! - `"#MakieDraw.CanvasSelect"` for an anchor on the root page
//! - `"api/"` or `"api/#Foo.bar-Tuple{Int}"` on multi-page sites
//!
//! ## Validation
//!
//! - The path is relative: no leading `/`, no URL scheme, no `?`, no whitespace
//! - A `#` must be followed by a non-empty fragment
//! - Fragments may contain spaces and punctuation, but no control characters

use std::fmt;
use thiserror::Error;

/// Why a location string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// `#` with nothing after it
    #[error("fragment after '#' is empty")]
    EmptyFragment,

    /// Path starts with `/`
    #[error("path must be relative")]
    AbsolutePath,

    /// Path carries a URL scheme such as `https:`
    #[error("path must not carry a URL scheme")]
    HasScheme,

    /// Character not allowed in the path
    #[error("invalid character {char:?} in path at position {position}")]
    InvalidPathChar {
        /// The invalid character
        char: char,
        /// Character position within the path
        position: usize,
    },

    /// Control character inside the fragment
    #[error("control character {char:?} in fragment at position {position}")]
    InvalidFragmentChar {
        /// The invalid character
        char: char,
        /// Character position within the fragment
        position: usize,
    },
}

/// Parsed `[path][#fragment]` location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    path: String,
    fragment: Option<String>,
}

impl Location {
    /// Location of the root page (the empty string)
    pub fn root() -> Self {
        Location::default()
    }

    /// Parse and validate a location string
    pub fn parse(s: &str) -> Result<Self, LocationError> {
        let (path, fragment) = match s.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (s, None),
        };

        Self::validate_path(path)?;
        if let Some(fragment) = fragment {
            Self::validate_fragment(fragment)?;
        }

        Ok(Location {
            path: path.to_string(),
            fragment: fragment.map(String::from),
        })
    }

    fn validate_path(path: &str) -> Result<(), LocationError> {
        if path.starts_with('/') {
            return Err(LocationError::AbsolutePath);
        }

        // A ':' before the first '/' reads as "scheme:"
        let head = path.split('/').next().unwrap_or("");
        if head.contains(':') {
            return Err(LocationError::HasScheme);
        }

        for (position, ch) in path.chars().enumerate() {
            if ch.is_whitespace() || ch.is_control() || ch == '?' {
                return Err(LocationError::InvalidPathChar { char: ch, position });
            }
        }
        Ok(())
    }

    fn validate_fragment(fragment: &str) -> Result<(), LocationError> {
        if fragment.is_empty() {
            return Err(LocationError::EmptyFragment);
        }
        for (position, ch) in fragment.chars().enumerate() {
            if ch.is_control() {
                return Err(LocationError::InvalidFragmentChar { char: ch, position });
            }
        }
        Ok(())
    }

    /// Page path (empty for the root page)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Anchor without the leading `#`
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// True for the empty location
    pub fn is_root(&self) -> bool {
        self.path.is_empty() && self.fragment.is_none()
    }

    /// True when the location points at the top of a page rather than an anchor
    pub fn is_page_level(&self) -> bool {
        self.fragment.is_none()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::parse(s)
    }
}

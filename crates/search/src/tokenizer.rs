//! Text tokenizer for search operations
//!
//! Pipeline: UAX#29 word boundaries → split identifiers on non-alphanumerics
//!           → lowercase → filter short tokens → remove stopwords
//!
//! Documentation text is full of qualified names (`MakieDraw.GeometryCanvas`,
//! `fill_left`, `Base::show`). UAX#29 keeps those as a single word, so each
//! word is split again on anything that is not a letter or digit.

use unicode_segmentation::UnicodeSegmentation;

/// Standard English stopwords (Lucene's default set).
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

#[inline]
fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Tokenize text into searchable terms
///
/// # Example
///
/// ```
/// use docindex_search::tokenizer::tokenize;
///
/// let tokens = tokenize("The MakieDraw.PaintCanvas widget");
/// assert_eq!(tokens, vec!["makiedraw", "paintcanvas", "widget"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .flat_map(|w| w.split(|c: char| !c.is_alphanumeric()))
        .map(|w| w.to_lowercase())
        .filter(|s| s.chars().count() >= 2)
        .filter(|s| !is_stopword(s))
        .collect()
}

/// Tokenize and deduplicate for query processing
///
/// # Example
///
/// ```
/// use docindex_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("canvas Canvas CANVAS");
/// assert_eq!(tokens, vec!["canvas"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

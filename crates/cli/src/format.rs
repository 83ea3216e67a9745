//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): aligned, labelled lines
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): tab-separated fields, no labels

use serde::Serialize;
use serde_json::json;

use docindex_core::{Category, DocEntry};
use docindex_search::SearchResponse;

use crate::state::{IndexStats, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match output {
        Output::Validated { entries } => match mode {
            OutputMode::Json => to_json(&json!({ "ok": true, "entries": entries })),
            OutputMode::Raw => entries.to_string(),
            OutputMode::Human => format!("OK ({} entries)", entries),
        },
        Output::Stats(stats) => format_stats(stats, mode),
        Output::Entries(entries) => format_entries(entries, mode),
        Output::Entry { index, entry } => format_entry(*index, entry, mode),
        Output::Search(resp) => format_search(resp, mode),
        Output::Converted(text) => text.trim_end_matches('\n').to_string(),
        Output::Written { path, entries } => match mode {
            OutputMode::Json => to_json(&json!({
                "path": path.display().to_string(),
                "entries": entries
            })),
            OutputMode::Raw => path.display().to_string(),
            OutputMode::Human => format!("Wrote {} entries to {}", entries, path.display()),
        },
    }
}

/// Format an error.
pub fn format_error(err: &anyhow::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&json!({
            "error": format!("{:#}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{:#}", err),
        OutputMode::Human => format!("(error) {:#}", err),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn format_stats(stats: &IndexStats, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(stats),
        OutputMode::Raw => {
            let mut lines = vec![
                format!("entries\t{}", stats.entries),
                format!("pages\t{}", stats.pages),
            ];
            lines.extend(
                stats
                    .categories
                    .iter()
                    .map(|(c, n)| format!("{}\t{}", c, n)),
            );
            lines.join("\n")
        }
        OutputMode::Human => {
            let mut lines = vec![
                format!("entries:  {}", stats.entries),
                format!("pages:    {}", stats.pages),
            ];
            for category in Category::ALL {
                let n = stats.categories.get(&category).copied().unwrap_or(0);
                lines.push(format!("  {:<8}{}", category.as_str(), n));
            }
            lines.join("\n")
        }
    }
}

fn format_entries(entries: &[DocEntry], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(&entries),
        OutputMode::Raw => entries
            .iter()
            .map(|e| format!("{}\t{}\t{}\t{}", e.category, e.location, e.page, e.title))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Human => {
            if entries.is_empty() {
                return "(empty list)".to_string();
            }
            entries
                .iter()
                .enumerate()
                .map(|(i, e)| {
                    format!(
                        "{}) [{}] {}  {}",
                        i + 1,
                        e.category,
                        e.title,
                        display_location(&e.location)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

fn format_entry(index: usize, entry: &DocEntry, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(entry),
        OutputMode::Raw => entry.text.clone(),
        OutputMode::Human => {
            let mut out = format!(
                "entry:    {}\nlocation: {}\npage:     {}\ntitle:    {}\ncategory: {}",
                index,
                display_location(&entry.location),
                entry.page,
                entry.title,
                entry.category
            );
            if entry.has_text() {
                out.push_str("\n\n");
                out.push_str(&entry.text);
            }
            out
        }
    }
}

fn format_search(resp: &SearchResponse, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(resp),
        OutputMode::Raw => resp
            .hits
            .iter()
            .map(|h| format!("{}\t{:.4}\t{}\t{}", h.rank, h.score, h.location, h.title))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Human => {
            if resp.hits.is_empty() {
                return "(no results)".to_string();
            }
            let mut lines: Vec<String> = resp
                .hits
                .iter()
                .map(|h| {
                    format!(
                        "{}) {} [{}] score={:.4}  {}",
                        h.rank,
                        h.title,
                        h.category,
                        h.score,
                        display_location(&h.location)
                    )
                })
                .collect();
            if resp.truncated {
                lines.push("(more results available)".to_string());
            }
            lines.join("\n")
        }
    }
}

fn display_location(location: &str) -> &str {
    if location.is_empty() {
        "(root)"
    } else {
        location
    }
}

//! Session: effective config plus action execution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context};
use serde::Serialize;
use tracing::{debug, info};

use docindex_core::{Category, Config, DocEntry, LoadOptions, SearchIndex, CONFIG_FILE_NAME};
use docindex_search::{DocSearch, SearchBudget, SearchRequest, SearchResponse};

use crate::parse::CliAction;

/// Summary printed by `stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub entries: usize,
    pub pages: usize,
    pub categories: BTreeMap<Category, usize>,
}

/// Result of executing one action.
#[derive(Debug, Clone)]
pub enum Output {
    Validated {
        entries: usize,
    },
    Stats(IndexStats),
    Entries(Vec<DocEntry>),
    Entry {
        index: usize,
        entry: DocEntry,
    },
    Search(SearchResponse),
    /// Converted text, when no output file was given.
    Converted(String),
    Written {
        path: PathBuf,
        entries: usize,
    },
}

/// Per-invocation state: the config every action runs under.
pub struct SessionState {
    config: Config,
}

impl SessionState {
    pub fn new(config: Config) -> Self {
        SessionState { config }
    }

    /// Resolve the config from `--config`, `./docindex.toml`, or defaults,
    /// then apply `--lenient`.
    pub fn from_flags(config_path: Option<&str>, lenient: bool) -> anyhow::Result<Self> {
        let mut config = match config_path {
            Some(path) => Config::from_file(Path::new(path))?,
            None => Config::load_or_default(Path::new(CONFIG_FILE_NAME))?,
        };
        if lenient {
            config.strict = false;
        }
        debug!(strict = config.strict, "config resolved");
        Ok(SessionState::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn load_options(&self) -> LoadOptions {
        self.config.load_options()
    }

    fn load(&self, file: &Path) -> anyhow::Result<SearchIndex> {
        SearchIndex::load_with(file, &self.load_options())
            .with_context(|| format!("failed to load {}", file.display()))
    }

    pub fn execute(&self, action: CliAction) -> anyhow::Result<Output> {
        debug!(file = %action.file().display(), "executing");
        match action {
            CliAction::Validate { file } => {
                // validate always checks invariants, whatever the config says
                let opts = LoadOptions {
                    strict: true,
                    ..self.load_options()
                };
                let index = SearchIndex::load_with(&file, &opts)
                    .with_context(|| format!("{} is not a valid index", file.display()))?;
                Ok(Output::Validated {
                    entries: index.len(),
                })
            }
            CliAction::Stats { file } => {
                let index = self.load(&file)?;
                Ok(Output::Stats(IndexStats {
                    entries: index.len(),
                    pages: index.pages().len(),
                    categories: index.category_counts(),
                }))
            }
            CliAction::List {
                file,
                category,
                page,
            } => {
                let index = self.load(&file)?;
                let entries = index
                    .into_entries()
                    .into_iter()
                    .filter(|e| category.map_or(true, |c| e.category == c))
                    .filter(|e| page.as_deref().map_or(true, |p| e.page == p))
                    .collect();
                Ok(Output::Entries(entries))
            }
            CliAction::Show { file, location } => {
                let index = self.load(&file)?;
                let (i, entry) = index
                    .find_location(&location)
                    .ok_or_else(|| anyhow!("No entry at location {:?}", location))?;
                Ok(Output::Entry {
                    index: i,
                    entry: entry.clone(),
                })
            }
            CliAction::Search {
                file,
                query,
                k,
                categories,
                page,
            } => {
                let index = Arc::new(self.load(&file)?);
                let settings = &self.config().search;
                let search = DocSearch::with_settings(index, settings);

                let mut req = SearchRequest::new(query)
                    .with_k(k.unwrap_or(settings.default_k))
                    .with_budget(SearchBudget::new(settings.max_candidates));
                if !categories.is_empty() {
                    req = req.with_categories(categories);
                }
                if let Some(page) = page {
                    req = req.with_page(page);
                }
                Ok(Output::Search(search.search(&req)))
            }
            CliAction::Convert {
                file,
                to,
                pretty,
                output,
            } => {
                let index = self.load(&file)?;
                match output {
                    Some(path) => {
                        index
                            .write_to(&path, to, pretty)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        info!(path = %path.display(), format = %to, "index written");
                        Ok(Output::Written {
                            path,
                            entries: index.len(),
                        })
                    }
                    None => Ok(Output::Converted(index.to_format_string(to, pretty)?)),
                }
            }
        }
    }
}

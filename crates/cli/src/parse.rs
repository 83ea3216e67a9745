//! ArgMatches → CliAction conversion.
//!
//! Clap has already enforced required arguments and value sets, so the only
//! failures here are values clap cannot check on its own.

use std::path::PathBuf;

use clap::ArgMatches;
use docindex_core::{Category, IndexFormat};

/// What the user asked for, independent of how it was spelled.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Validate {
        file: PathBuf,
    },
    Stats {
        file: PathBuf,
    },
    List {
        file: PathBuf,
        category: Option<Category>,
        page: Option<String>,
    },
    Show {
        file: PathBuf,
        location: String,
    },
    Search {
        file: PathBuf,
        query: String,
        k: Option<usize>,
        categories: Vec<Category>,
        page: Option<String>,
    },
    Convert {
        file: PathBuf,
        to: IndexFormat,
        pretty: bool,
        output: Option<PathBuf>,
    },
}

impl CliAction {
    /// The index file every subcommand reads.
    pub fn file(&self) -> &PathBuf {
        match self {
            CliAction::Validate { file }
            | CliAction::Stats { file }
            | CliAction::List { file, .. }
            | CliAction::Show { file, .. }
            | CliAction::Search { file, .. }
            | CliAction::Convert { file, .. } => file,
        }
    }
}

/// Convert top-level matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command given".to_string())?;
    let file = PathBuf::from(required(sub, "file")?);

    match name {
        "validate" => Ok(CliAction::Validate { file }),
        "stats" => Ok(CliAction::Stats { file }),
        "list" => Ok(CliAction::List {
            file,
            category: sub
                .get_one::<String>("category")
                .map(|c| parse_category(c))
                .transpose()?,
            page: sub.get_one::<String>("page").cloned(),
        }),
        "show" => Ok(CliAction::Show {
            file,
            location: required(sub, "location")?.to_string(),
        }),
        "search" => Ok(CliAction::Search {
            file,
            query: required(sub, "query")?.to_string(),
            k: sub.get_one::<usize>("k").copied(),
            categories: sub
                .get_many::<String>("category")
                .map(|vals| vals.map(|c| parse_category(c)).collect::<Result<Vec<_>, _>>())
                .transpose()?
                .unwrap_or_default(),
            page: sub.get_one::<String>("page").cloned(),
        }),
        "convert" => {
            let to = required(sub, "to")?
                .parse::<IndexFormat>()
                .map_err(|e| e.to_string())?;
            let pretty = sub.get_flag("pretty");
            if pretty && to != IndexFormat::Json {
                return Err("--pretty only applies to --to json".to_string());
            }
            Ok(CliAction::Convert {
                file,
                to,
                pretty,
                output: sub.get_one::<String>("output").map(PathBuf::from),
            })
        }
        other => Err(format!("Unknown command '{}'", other)),
    }
}

fn required<'a>(m: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    m.get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing argument <{}>", name))
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}

//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("docindex")
        .about("Validate, inspect, convert and search documentation search indexes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: ./docindex.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (tab-separated, no decoration)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .help("Log invariant violations instead of failing the load")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(build_validate())
        .subcommand(build_stats())
        .subcommand(build_list())
        .subcommand(build_show())
        .subcommand(build_search())
        .subcommand(build_convert())
}

fn file_arg() -> Arg {
    Arg::new("file")
        .help("Index file (search_index.js or JSON)")
        .required(true)
}

fn category_arg() -> Arg {
    Arg::new("category")
        .long("category")
        .short('c')
        .help("Only records of this category (page, type, method, section)")
        .value_parser(["page", "type", "method", "section"])
}

fn page_arg() -> Arg {
    Arg::new("page")
        .long("page")
        .short('p')
        .help("Only records on this page")
}

fn build_validate() -> Command {
    Command::new("validate")
        .about("Load an index and check every invariant")
        .arg(file_arg())
}

fn build_stats() -> Command {
    Command::new("stats")
        .about("Entry, page and category counts")
        .arg(file_arg())
}

fn build_list() -> Command {
    Command::new("list")
        .about("List records in order")
        .arg(file_arg())
        .arg(category_arg())
        .arg(page_arg())
}

fn build_show() -> Command {
    Command::new("show")
        .about("Print the first record at a location")
        .arg(file_arg())
        .arg(
            Arg::new("location")
                .help("Location, e.g. '#MakieDraw.PaintCanvas' (empty string for the root page)")
                .required(true),
        )
}

fn build_search() -> Command {
    Command::new("search")
        .about("Keyword search with BM25 ranking")
        .arg(file_arg())
        .arg(Arg::new("query").help("Search terms").required(true))
        .arg(
            Arg::new("k")
                .short('k')
                .long("limit")
                .help("Maximum results (default from config, 10)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(category_arg().action(ArgAction::Append))
        .arg(page_arg())
}

fn build_convert() -> Command {
    Command::new("convert")
        .about("Rewrite an index as JSON or as a search_index.js script")
        .arg(file_arg())
        .arg(
            Arg::new("to")
                .long("to")
                .help("Output form")
                .value_parser(["json", "js"])
                .required(true),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Indent JSON output (only with --to json)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write to a file instead of stdout"),
        )
}

//! docindex CLI: inspect and search documentation search indexes.
//!
//! `docindex [flags] COMMAND FILE ...` runs one command and exits with 0 on
//! success or 1 on any error. Results go to stdout, errors and logs to
//! stderr.

mod commands;
mod format;
mod logging;
mod parse;
mod state;

use std::process;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_action;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();

    logging::init(matches.get_count("verbose"));

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    process::exit(run(&matches, output_mode));
}

fn run(matches: &clap::ArgMatches, mode: OutputMode) -> i32 {
    let action = match matches_to_action(matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_error(&anyhow::anyhow!(e), mode));
            return 1;
        }
    };

    let state = match SessionState::from_flags(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_flag("lenient"),
    ) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            return 1;
        }
    };

    match state.execute(action) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}

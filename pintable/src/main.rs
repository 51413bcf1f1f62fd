//! # pintable
//!
//! Replays interactions against a table document and prints the result.
//!
//! ## Overview
//!
//! pintable is built on top of pintablelib. It loads a JSON table document
//! (columns, rows and options), applies header clicks and cell clicks in the
//! order given, and prints the resulting view either as a terminal table or as
//! the JSON projection a renderer would consume.
//!
//! ## Usage
//!
//! ```bash
//! # Print a document as laid out
//! pintable table.json
//!
//! # Click the header of column 2 twice (ascend, then descend)
//! pintable table.json --click 2 --click 2
//!
//! # Sort by two columns at once
//! pintable table.json --multiple-sort --click 0 --click 1
//!
//! # Emit the resolved view as JSON, in px units
//! # (other modes: auto, term, text, term-debug)
//! pintable table.json --output json --units px
//!
//! # Read the document from stdin
//! cat table.json | pintable -
//! ```

mod render;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use pintablelib::{CellClick, HeaderClick, PxFormatter, TableController, TableProps};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("pintable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Sort, pin and lay out a table document")
        .arg(
            Arg::new("document")
                .help("Path to a JSON table document (\"-\" reads stdin)")
                .required(true),
        )
        .arg(
            Arg::new("click")
                .short('c')
                .long("click")
                .value_name("COLUMN")
                .value_parser(clap::value_parser!(usize))
                .action(ArgAction::Append)
                .help("Click a column header (repeatable, applied in order)"),
        )
        .arg(
            Arg::new("expand")
                .short('e')
                .long("expand")
                .value_name("COLUMN")
                .value_parser(clap::value_parser!(usize))
                .action(ArgAction::Append)
                .help("Click a cell of the first row in this column"),
        )
        .arg(
            Arg::new("multiple-sort")
                .short('m')
                .long("multiple-sort")
                .action(ArgAction::SetTrue)
                .help("Keep other columns sorted when a header is clicked"),
        )
        .arg(
            Arg::new("loading")
                .long("loading")
                .action(ArgAction::SetTrue)
                .help("Render the table in its loading state"),
        )
        .arg(
            Arg::new("row-key")
                .short('k')
                .long("row-key")
                .value_name("FIELD")
                .help("Row field used as the reconciliation key"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["auto", "term", "text", "term-debug", "json"])
                .default_value("auto")
                .help("Output mode: auto, term, text, term-debug or json"),
        )
        .arg(
            Arg::new("units")
                .short('u')
                .long("units")
                .value_parser(["rpx", "px"])
                .default_value("rpx")
                .help("Units for formatted widths and offsets"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .help("Log level for diagnostics on stderr (default: warn)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (repeatable)"),
        )
}

/// Resolve the log level from `--log-level` or the `-v` count
fn log_level(matches: &ArgMatches) -> LevelFilter {
    if let Some(level) = matches.get_one::<String>("log-level") {
        return match level.as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Warn,
        };
    }
    match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Load the table document and apply option overrides from flags
fn load_props(matches: &ArgMatches) -> anyhow::Result<TableProps> {
    let document = matches
        .get_one::<String>("document")
        .map(|s| s.as_str())
        .unwrap_or("-");

    let mut props = if document == "-" {
        TableProps::from_reader(io::stdin().lock())
            .context("failed to read document from stdin")?
    } else {
        TableProps::from_path(document)?
    };

    if matches.get_flag("multiple-sort") {
        props.options.multiple_sort = true;
    }
    if matches.get_flag("loading") {
        props.options.loading = true;
    }
    if let Some(row_key) = matches.get_one::<String>("row-key") {
        props.options.row_key = row_key.clone();
    }

    Ok(props)
}

/// Load, replay interactions and render
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let props = load_props(matches)?;

    let mut table = TableController::new(props);
    if matches.get_one::<String>("units").map(|s| s.as_str()) == Some("px") {
        table = table.with_formatter(PxFormatter);
    }

    if let Some(clicks) = matches.get_many::<usize>("click") {
        for &column in clicks {
            if let HeaderClick::Ignored(reason) = table.on_header_click(column) {
                log::warn!("header click on column {} ignored: {:?}", column, reason);
            }
        }
    }

    if let Some(expands) = matches.get_many::<usize>("expand") {
        for &column in expands {
            if let CellClick::Ignored(reason) = table.on_cell_click(column, 0) {
                log::warn!("cell click on column {} ignored: {:?}", column, reason);
            }
        }
    }

    let output_mode = matches
        .get_one::<String>("output")
        .map(|s| match s.as_str() {
            "json" => render::OutputMode::Json,
            "text" => render::OutputMode::Text,
            "term-debug" => render::OutputMode::TermDebug,
            "term" => render::OutputMode::Term,
            _ => render::OutputMode::Auto,
        })
        .unwrap_or(render::OutputMode::Auto);

    let mut output = render::render_view(&table.view(), output_mode)
        .map_err(|e| anyhow::anyhow!("rendering failed: {e}"))?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    if let Err(e) = WriteLogger::init(log_level(&matches), Config::default(), io::stderr()) {
        eprintln!("Warning: logging unavailable: {e}");
    }

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

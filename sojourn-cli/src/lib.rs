//! Command-line interface for planning Sojourn itineraries.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod catalog;
mod error;
mod fs;
mod plan;
mod report;
mod tags;

pub use error::CliError;

use plan::{PlanArgs, run_plan};
use tags::{TagsArgs, run_tags};

const ARG_BUDGET: &str = "budget";
const ARG_HOURS: &str = "hours";
const ARG_START_HOUR: &str = "start-hour";
const ARG_INTERESTS: &str = "interests";
const ARG_CATALOG: &str = "catalog";
const ARG_SEARCH_CAP: &str = "search-cap";
const ARG_DEADLINE_MS: &str = "deadline-ms";
const ARG_PARALLEL: &str = "parallel";
const ARG_FORMAT: &str = "format";

/// Run the Sojourn CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration or the catalog are
/// invalid, or when the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Plan(args) => run_plan(args, writer),
        Command::Tags(args) => run_tags(args, writer),
    }
}

fn init_logging(verbose: u8) -> Result<(), CliError> {
    TermLogger::init(
        level_filter(verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// Map repeated `-v` flags onto a log level; warnings only by default.
const fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sojourn",
    about = "Plan sightseeing itineraries and compare greedy and exhaustive plans",
    version
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan an itinerary and compare greedy and exhaustive results.
    Plan(PlanArgs),
    /// List the tags available as interests.
    Tags(TagsArgs),
}

#[cfg(test)]
mod tests;

//! Plan command implementation for the Sojourn CLI.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sojourn_core::{InterestSet, PlanningRequest};
use sojourn_planner::{DEFAULT_SEARCH_CAP, ExhaustiveConfig, TripOptions, plan_trip_with};

use crate::catalog::{load_catalog, require_existing};
use crate::report::{ReportFormat, write_report};
use crate::{
    ARG_BUDGET, ARG_CATALOG, ARG_DEADLINE_MS, ARG_FORMAT, ARG_HOURS, ARG_INTERESTS,
    ARG_PARALLEL, ARG_SEARCH_CAP, ARG_START_HOUR, CliError,
};

/// Budget used when none is configured.
pub(crate) const DEFAULT_BUDGET: f64 = 1500.0;
/// Time horizon used when none is configured.
pub(crate) const DEFAULT_HOURS: f64 = 8.0;
/// Start hour used when none is configured.
pub(crate) const DEFAULT_START_HOUR: f64 = 9.0;
/// Interests used when none are configured.
pub(crate) const DEFAULT_INTERESTS: &str = "culture,nature";
/// Largest accepted search cap; the search visits up to `cap!` orderings.
pub(crate) const MAX_SEARCH_CAP: usize = 10;

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a day of sightseeing with the greedy planner, check it \
                 against an exhaustive search over the head of the catalog \
                 and print both itineraries with a comparison. Values can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Plan an itinerary and compare greedy and exhaustive results"
)]
#[ortho_config(prefix = "SOJOURN")]
pub(crate) struct PlanArgs {
    /// Maximum total entry fees (default 1500).
    #[arg(long = ARG_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Hours available from the start hour (default 8).
    #[arg(long = ARG_HOURS, value_name = "hours")]
    #[serde(default)]
    pub(crate) hours: Option<f64>,
    /// Clock hour of the first visit, 0 to 24 (default 9).
    #[arg(long = ARG_START_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) start_hour: Option<f64>,
    /// Comma-separated interest tags (default "culture,nature").
    #[arg(long = ARG_INTERESTS, value_name = "tags")]
    #[serde(default)]
    pub(crate) interests: Option<String>,
    /// JSON catalog of sites; the built-in Kathmandu catalog when omitted.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of leading catalog sites the exhaustive search considers.
    #[arg(long = ARG_SEARCH_CAP, value_name = "count")]
    #[serde(default)]
    pub(crate) search_cap: Option<usize>,
    /// Stop the exhaustive search after this many milliseconds.
    #[arg(long = ARG_DEADLINE_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) deadline_ms: Option<u64>,
    /// Split the exhaustive search across threads.
    #[arg(long = ARG_PARALLEL, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) parallel: Option<bool>,
    /// Report format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<ReportFormat>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Validated planning request.
    pub(crate) request: PlanningRequest,
    /// Catalog file, if any.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Planner options.
    pub(crate) options: TripOptions,
    /// Report format.
    pub(crate) format: ReportFormat,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.catalog {
            Some(path) => require_existing(path, ARG_CATALOG),
            None => Ok(()),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let interests: InterestSet = args
            .interests
            .as_deref()
            .unwrap_or(DEFAULT_INTERESTS)
            .split(',')
            .collect();
        let request = PlanningRequest {
            budget: args.budget.unwrap_or(DEFAULT_BUDGET),
            total_hours: args.hours.unwrap_or(DEFAULT_HOURS),
            start_hour: args.start_hour.unwrap_or(DEFAULT_START_HOUR),
            interests,
        };
        request.validate()?;

        let cap = args.search_cap.unwrap_or(DEFAULT_SEARCH_CAP);
        if !(1..=MAX_SEARCH_CAP).contains(&cap) {
            return Err(CliError::SearchCapOutOfRange {
                field: ARG_SEARCH_CAP,
                cap,
                max: MAX_SEARCH_CAP,
            });
        }
        let exhaustive = ExhaustiveConfig {
            cap,
            deadline: args.deadline_ms.map(Duration::from_millis),
            parallel: args.parallel.unwrap_or(false),
        };

        Ok(Self {
            request,
            catalog: args.catalog,
            options: TripOptions {
                exhaustive,
                ..TripOptions::default()
            },
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    run_plan_with(&config, writer)
}

/// Plan and report for an already resolved configuration.
pub(crate) fn run_plan_with(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    let plan = plan_trip_with(&catalog, &config.request, &config.options);
    write_report(writer, config.format, &config.request, &plan)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}

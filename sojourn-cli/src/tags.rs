//! Tags command: list the tags a catalog offers.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::{ARG_CATALOG, CliError};

/// CLI arguments for the `tags` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "tags",
    about = "List the tags available as interests, one per line"
)]
#[ortho_config(prefix = "SOJOURN")]
pub(crate) struct TagsArgs {
    /// JSON catalog of sites; the built-in Kathmandu catalog when omitted.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(crate) fn run_tags(args: TagsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let catalog = load_catalog(merged.catalog.as_deref())?;
    for tag in catalog.all_tags() {
        writeln!(writer, "{tag}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

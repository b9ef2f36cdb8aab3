//! Catalog selection shared by the `plan` and `tags` commands.

use std::io::{BufReader, ErrorKind};

use camino::Utf8Path;
use log::info;
use sojourn_core::Catalog;

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_CATALOG, CliError};

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == ErrorKind::NotFound => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the catalog at `path`, or the built-in Kathmandu catalog when no
/// path is given.
pub(crate) fn load_catalog(catalog_path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    let Some(path) = catalog_path else {
        return Ok(Catalog::kathmandu());
    };
    require_existing(path, ARG_CATALOG)?;
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::LoadCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("loaded {} sites from {path}", catalog.len());
    Ok(catalog)
}

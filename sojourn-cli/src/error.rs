//! Error types emitted by the Sojourn CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use sojourn_core::{CatalogError, PlanningRequestError};
use thiserror::Error;

/// Errors emitted by the Sojourn CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The terminal logger could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] log::SetLoggerError),
    /// The merged values do not form a valid planning request.
    #[error("invalid planning request: {0}")]
    InvalidRequest(#[from] PlanningRequestError),
    /// The exhaustive search cap is outside the supported range.
    #[error("{field} must be between 1 and {max}, got {cap}")]
    SearchCapOutOfRange {
        /// Flag that carried the value.
        field: &'static str,
        /// Requested cap.
        cap: usize,
        /// Largest supported cap.
        max: usize,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file was malformed or held invalid sites.
    #[error("failed to load catalog from {path:?}: {source}")]
    LoadCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: CatalogError,
    },
    /// Serializing the JSON report failed.
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

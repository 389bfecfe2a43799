//! Error types for the `yaml-merge` binary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use yaml_merger::MergerError;

/// Failures surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Resolving, parsing or rendering documents failed.
    #[error(transparent)]
    Merge(#[from] MergerError),
    /// A `--strict --from path` source does not exist.
    #[error("document {} does not exist", .0.display())]
    MissingDocument(PathBuf),
    /// The merged document could not be written.
    #[error("failed to write {target}: {source}")]
    Write {
        /// Output file path or standard output.
        target: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Result alias for the binary.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

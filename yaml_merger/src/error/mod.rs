//! Error types produced while resolving, loading and rendering documents.
//!
//! Merging itself never fails; every error here originates at the I/O
//! boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type MergerResult<T> = Result<T, MergerError>;

/// Reasons a named document source could not be resolved.
///
/// In lenient mode these are reported to the diagnostics sink and the source
/// is skipped; in strict mode they abort the pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceError {
    /// The source name has no value, or an empty one.
    #[error("environment variable {name} is not defined")]
    UnboundSource {
        /// Name of the unset source.
        name: String,
    },

    /// The source has a value, but it does not point at a readable document.
    #[error("path {} declared in environment variable {name} does not exist", .path.display())]
    UnresolvableLocation {
        /// Name of the source whose value was checked.
        name: String,
        /// Location the source pointed to.
        path: PathBuf,
    },
}

impl SourceError {
    /// Name of the offending source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UnboundSource { name } | Self::UnresolvableLocation { name, .. } => name,
        }
    }
}

/// Errors surfaced by the document pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergerError {
    /// A source could not be resolved while running in strict mode.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A document could not be read or parsed.
    #[error("document error in '{}': {source}", .path.display())]
    Document {
        /// Path of the failing document.
        path: PathBuf,
        /// Underlying read or parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The merged value could not be rendered in the requested format.
    #[error("failed to render {format} document: {message}")]
    Render {
        /// Name of the output format.
        format: &'static str,
        /// Explanation reported by the serializer.
        message: String,
    },
}

impl MergerError {
    /// Construct a [`MergerError::Document`] for `path`.
    pub fn document(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Document {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns the source error when this failure came from resolution.
    #[must_use]
    pub const fn as_source_error(&self) -> Option<&SourceError> {
        match self {
            Self::Source(err) => Some(err),
            Self::Document { .. } | Self::Render { .. } => None,
        }
    }
}

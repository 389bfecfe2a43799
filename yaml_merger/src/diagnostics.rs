//! Reporting hooks for non-fatal pipeline events.
//!
//! Lenient resolution and file loading skip problem sources instead of
//! failing. Those decisions are passed to a [`DiagnosticReporter`] supplied by
//! the caller; [`default_reporter`] forwards them to `tracing`.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::SourceError;

/// Event emitted while assembling the documents to merge.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum Diagnostic<'a> {
    /// A named source could not be resolved and was left out.
    SourceSkipped {
        /// Why the source was skipped.
        error: &'a SourceError,
    },
    /// A document path does not exist and was left out.
    MissingDocument {
        /// The path that was requested.
        path: &'a Path,
    },
    /// The first loaded document, which every later document overlays.
    BaseDocument {
        /// Path of the base document.
        path: &'a Path,
    },
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceSkipped { error } => write!(f, "skipping source: {error}"),
            Self::MissingDocument { path } => {
                write!(f, "given path {} does not exist; skipping it", path.display())
            }
            Self::BaseDocument { path } => {
                write!(f, "base document is taken from {}", path.display())
            }
        }
    }
}

/// Callback receiving [`Diagnostic`] events.
pub type DiagnosticReporter = Arc<dyn Fn(&Diagnostic<'_>) + Send + Sync>;

/// Reporter that logs every event through `tracing`.
///
/// Skips are logged at `warn`, the base document selection at `info`.
#[must_use]
pub fn default_reporter() -> DiagnosticReporter {
    Arc::new(|diagnostic: &Diagnostic<'_>| match diagnostic {
        Diagnostic::SourceSkipped { error } => tracing::warn!(
            source = error.name(),
            error = %error,
            "skipping unresolvable document source"
        ),
        Diagnostic::MissingDocument { path } => tracing::warn!(
            path = %path.display(),
            "skipping missing document"
        ),
        Diagnostic::BaseDocument { path } => tracing::info!(
            path = %path.display(),
            "base document selected"
        ),
    })
}

/// Reporter that discards every event.
#[must_use]
pub fn silent_reporter() -> DiagnosticReporter {
    Arc::new(|_: &Diagnostic<'_>| {})
}

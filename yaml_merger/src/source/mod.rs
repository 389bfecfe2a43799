//! Resolution of named document sources to validated paths.
//!
//! A source name (typically an environment variable) is looked up through a
//! [`SourceLookup`]. Its value must be non-empty and must name an existing,
//! readable regular file. In strict mode the first failure aborts resolution;
//! otherwise failures are reported to the [`DiagnosticReporter`] and the
//! source is skipped.

mod lookup;

pub use lookup::{ProcessEnv, SourceLookup};

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::diagnostics::{Diagnostic, DiagnosticReporter, default_reporter};
use crate::error::{MergerResult, SourceError};

/// A source name together with the document path it resolved to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedSource {
    name: String,
    path: PathBuf,
}

impl ResolvedSource {
    /// Name of the source that was looked up.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated path of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the source, returning its path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Resolves source names to document paths.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use yaml_merger::{SourceError, SourceResolver};
///
/// let table = HashMap::from([("APP_CONFIG".to_owned(), String::new())]);
/// let resolver = SourceResolver::new(table).strict(true);
///
/// let err = resolver.resolve("APP_CONFIG").expect_err("empty values are unbound");
/// assert!(matches!(
///     err.as_source_error(),
///     Some(SourceError::UnboundSource { .. })
/// ));
/// ```
pub struct SourceResolver<L = ProcessEnv> {
    lookup: L,
    is_strict: bool,
    reporter: DiagnosticReporter,
}

impl SourceResolver<ProcessEnv> {
    /// Lenient resolver reading the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl Default for SourceResolver<ProcessEnv> {
    fn default() -> Self {
        Self::from_env()
    }
}

impl<L: SourceLookup> SourceResolver<L> {
    /// Lenient resolver using `lookup` and the tracing reporter.
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            is_strict: false,
            reporter: default_reporter(),
        }
    }

    /// Sets whether unresolvable sources are errors (`true`) or skipped.
    #[must_use]
    pub fn strict(mut self, is_strict: bool) -> Self {
        self.is_strict = is_strict;
        self
    }

    /// Replaces the reporter receiving skip notifications.
    #[must_use]
    pub fn with_reporter(mut self, reporter: DiagnosticReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Whether this resolver runs in strict mode.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.is_strict
    }

    /// The reporter used for skip notifications.
    #[must_use]
    pub const fn reporter(&self) -> &DiagnosticReporter {
        &self.reporter
    }

    /// Resolves a single source.
    ///
    /// Returns `Ok(None)` when the source is unresolvable in lenient mode.
    ///
    /// # Errors
    ///
    /// In strict mode returns [`SourceError::UnboundSource`] when the name has
    /// no non-empty value and [`SourceError::UnresolvableLocation`] when the
    /// value does not point at a readable file.
    pub fn resolve(&self, name: &str) -> MergerResult<Option<ResolvedSource>> {
        match self.validate(name) {
            Ok(path) => Ok(Some(ResolvedSource {
                name: name.to_owned(),
                path,
            })),
            Err(error) if self.is_strict => Err(error.into()),
            Err(error) => {
                (self.reporter)(&Diagnostic::SourceSkipped { error: &error });
                Ok(None)
            }
        }
    }

    /// Resolves every name in order, dropping skipped sources.
    ///
    /// # Errors
    ///
    /// In strict mode returns the first resolution failure.
    pub fn resolve_all<I, S>(&self, names: I) -> MergerResult<Vec<ResolvedSource>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for name in names {
            if let Some(source) = self.resolve(name.as_ref())? {
                resolved.push(source);
            }
        }
        Ok(resolved)
    }

    fn validate(&self, name: &str) -> Result<PathBuf, SourceError> {
        let value = self
            .lookup
            .lookup(name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| SourceError::UnboundSource {
                name: name.to_owned(),
            })?;
        let path = PathBuf::from(value);
        if is_readable_file(&path) {
            Ok(path)
        } else {
            Err(SourceError::UnresolvableLocation {
                name: name.to_owned(),
                path,
            })
        }
    }
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

impl<L: fmt::Debug> fmt::Debug for SourceResolver<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceResolver")
            .field("lookup", &self.lookup)
            .field("is_strict", &self.is_strict)
            .field("reporter", &"<reporter>")
            .finish()
    }
}

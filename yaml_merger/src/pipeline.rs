//! Folding ordered documents into one merged value.
//!
//! The first document is the base; each later document is merged over the
//! accumulated result, so later sources override earlier ones.

use std::fmt;
use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticReporter, default_reporter};
use crate::document::load_document;
use crate::error::MergerResult;
use crate::merge::merge;
use crate::source::{SourceLookup, SourceResolver};
use crate::value::Value;

/// Merge `documents` left to right.
///
/// Returns `None` for an empty input and the sole element unchanged for a
/// single document.
///
/// ```
/// use yaml_merger::{Value, merge_values};
///
/// assert_eq!(merge_values(Vec::<Value>::new()), None);
/// assert_eq!(
///     merge_values([Value::from(1), Value::from(2)]),
///     Some(Value::from(2))
/// );
/// ```
pub fn merge_values<I>(documents: I) -> Option<Value>
where
    I: IntoIterator<Item = Value>,
{
    documents.into_iter().reduce(merge)
}

/// Loads documents from disk and merges them in order.
///
/// Missing paths are reported and skipped rather than treated as errors.
pub struct Pipeline {
    reporter: DiagnosticReporter,
}

impl Pipeline {
    /// Pipeline reporting through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reporter: default_reporter(),
        }
    }

    /// Pipeline reporting through `reporter`.
    #[must_use]
    pub fn with_reporter(reporter: DiagnosticReporter) -> Self {
        Self { reporter }
    }

    /// Merge the documents at `paths`, in order.
    ///
    /// Returns `Ok(None)` when no path yields a document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergerError::Document`] when an existing file cannot
    /// be read or parsed.
    pub fn merge_files<I, P>(&self, paths: I) -> MergerResult<Option<Value>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut merged: Option<Value> = None;
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                (self.reporter)(&Diagnostic::MissingDocument { path });
                continue;
            }
            let document = load_document(path)?;
            merged = Some(match merged {
                None => {
                    (self.reporter)(&Diagnostic::BaseDocument { path });
                    document
                }
                Some(main) => {
                    tracing::debug!(path = %path.display(), "merging document");
                    merge(main, document)
                }
            });
        }
        Ok(merged)
    }

    /// Resolve `names` with `resolver`, then merge the resolved documents.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error in strict mode, or a
    /// [`crate::MergerError::Document`] for unreadable documents.
    pub fn merge_sources<L, I, S>(
        &self,
        resolver: &SourceResolver<L>,
        names: I,
    ) -> MergerResult<Option<Value>>
    where
        L: SourceLookup,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sources = resolver.resolve_all(names)?;
        self.merge_files(sources.iter().map(|source| source.path()))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("reporter", &"<reporter>")
            .finish()
    }
}

/// Merge the documents named by the environment variables in `names`.
///
/// Each variable must hold the path of a document. With `is_strict`, an unset
/// variable or a path that does not exist aborts the merge; otherwise such
/// variables are logged and skipped.
///
/// # Errors
///
/// Returns a [`crate::SourceError`] in strict mode, or a document error when a
/// resolved file cannot be parsed.
pub fn merge_config_files_from_envvars<I, S>(names: I, is_strict: bool) -> MergerResult<Option<Value>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let resolver = SourceResolver::from_env().strict(is_strict);
    Pipeline::new().merge_sources(&resolver, names)
}

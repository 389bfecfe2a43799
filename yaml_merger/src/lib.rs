//! Type-directed merging of layered configuration documents.
//!
//! Documents are parsed into a [`Value`] tree and combined with [`merge`],
//! whose rule depends on the kinds of the two values: mappings merge key by
//! key, sequences absorb primitives and overlay sequences element by element,
//! a mapping overlays the single list item it shares exactly one key with, and
//! null never overrides anything.
//!
//! ```
//! use yaml_merger::{DocumentFormat, merge_values, parse_as};
//! use std::path::Path;
//!
//! # fn main() -> yaml_merger::MergerResult<()> {
//! let base = parse_as(
//!     DocumentFormat::Json,
//!     Path::new("base.json"),
//!     r#"{"hobbies": ["basketball"], "age": 20}"#,
//! )?;
//! let local = parse_as(
//!     DocumentFormat::Json,
//!     Path::new("local.json"),
//!     r#"{"hobbies": ["spearfishing"], "age": null}"#,
//! )?;
//!
//! let merged = merge_values([base, local]).unwrap_or_default();
//! assert_eq!(merged.get("age").and_then(|age| age.as_number()?.as_u64()), Some(20));
//! assert_eq!(merged.get("hobbies").and_then(|h| h.as_sequence()).map(<[_]>::len), Some(2));
//! # Ok(())
//! # }
//! ```
//!
//! Sources are usually named by environment variables; see
//! [`merge_config_files_from_envvars`] and [`SourceResolver`].

pub mod diagnostics;
pub mod document;
mod error;
mod merge;
mod pipeline;
pub mod source;
pub mod value;

pub use diagnostics::{Diagnostic, DiagnosticReporter};
pub use document::{DocumentFormat, load_document, parse_as, parse_document, render_document};
pub use error::{MergerError, MergerResult, SourceError};
pub use merge::merge;
pub use pipeline::{Pipeline, merge_config_files_from_envvars, merge_values};
pub use source::{ProcessEnv, ResolvedSource, SourceLookup, SourceResolver};
pub use value::{Kind, Mapping, Number, Value};

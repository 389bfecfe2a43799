//! Library facade for the `yaml-merge` binary so tests can drive the merge
//! without spawning a process.

pub mod cli;
pub mod error;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use yaml_merger::{Pipeline, SourceResolver, render_document};

use crate::cli::{Args, SourceKind};
use crate::error::{CliError, Result};

/// Merge the sources named in `args` and render the result.
///
/// Returns `Ok(None)` when every source was skipped.
///
/// # Errors
///
/// Returns [`CliError`] when a strict source is unresolvable or a document
/// cannot be parsed or rendered.
pub fn merge(args: &Args) -> Result<Option<String>> {
    let pipeline = Pipeline::new();
    let merged = match args.from {
        SourceKind::Env => {
            let resolver = SourceResolver::from_env().strict(args.strict);
            pipeline.merge_sources(&resolver, &args.sources)?
        }
        SourceKind::Path => {
            if args.strict
                && let Some(missing) = args.sources.iter().find(|path| !Path::new(path).is_file())
            {
                return Err(CliError::MissingDocument(missing.into()));
            }
            pipeline.merge_files(&args.sources)?
        }
    };
    Ok(merged
        .map(|value| render_document(&value, args.format.into()))
        .transpose()?)
}

/// Merge per `args` and write the rendered document to its destination.
///
/// # Errors
///
/// Propagates merge failures and returns [`CliError::Write`] when the output
/// cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let Some(rendered) = merge(args)? else {
        tracing::info!("no documents resolved; nothing to write");
        return Ok(());
    };
    match &args.output {
        Some(path) => fs::write(path, rendered).map_err(|source| CliError::Write {
            target: path.display().to_string(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(|source| CliError::Write {
                target: String::from("standard output"),
                source,
            }),
    }
}

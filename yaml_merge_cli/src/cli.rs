//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use yaml_merger::DocumentFormat;

/// Merge layered configuration documents, later sources overriding earlier ones.
#[derive(Debug, Parser)]
#[command(name = "yaml-merge", version, about)]
pub struct Args {
    /// Fail instead of skipping a source that cannot be resolved.
    #[arg(long)]
    pub strict: bool,

    /// How to interpret each SOURCE.
    #[arg(long, value_enum, default_value_t = SourceKind::Env)]
    pub from: SourceKind,

    /// Format of the merged document.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Write the merged document here instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Sources in merge order; the first is the base.
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,
}

/// What a SOURCE argument names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// An environment variable holding a document path.
    Env,
    /// A document path.
    Path,
}

/// Output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML.
    Yaml,
    /// Pretty-printed JSON.
    Json,
    /// TOML; the merged document must be a mapping.
    Toml,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => Self::Yaml,
            OutputFormat::Json => Self::Json,
            OutputFormat::Toml => Self::Toml,
        }
    }
}

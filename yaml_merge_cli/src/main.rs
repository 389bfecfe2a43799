//! `yaml-merge` entry point: parse arguments, merge sources, write the result.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use yaml_merge_cli::cli::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    let args = Args::parse();
    yaml_merge_cli::run(&args).map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

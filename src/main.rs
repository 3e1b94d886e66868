mod cli;
mod config;
mod domain;
mod infra;
mod workflows;

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use workflows::inspect;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config()?;
    let source = config::resolve_source(&cli, config);
    tracing::debug!(?source, "resolved record source");

    let factory = source.factory();
    let mut stdout = io::stdout().lock();
    inspect::inspect(&mut stdout, factory.as_ref())?;

    Ok(())
}

//! Credbook command line interface.

mod cli;
mod commands;
mod output;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::accounts;

/// `RUST_LOG` directives plus info-level logs for the credbook crates.
fn log_filter() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    Ok(EnvFilter::from_default_env().add_directive("credbook=info".parse()?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = store::open_store(&cli.store)?;

    match &cli.command {
        Commands::List => accounts::list(&store, cli.format),
        Commands::Add(args) => accounts::add(&mut store, args, cli.format),
        Commands::Remove { id } => accounts::remove(&mut store, id, cli.format),
        Commands::SetType { id, kind } => accounts::set_type(&mut store, id, *kind, cli.format),
        Commands::Update(args) => accounts::update(&mut store, args, cli.format),
        Commands::Check => accounts::check(&store, cli.format),
    }
}

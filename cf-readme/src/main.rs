//! cf-readme - keep a Codeforces solutions README in sync
//!
//! Fetches the accepted submissions of a handle, scans the local
//! `<rating>_rated` directories and rewrites the generated sections of the
//! archive's README.md.

mod cli;
mod config;
mod error;
mod filename;
mod fragments;
mod output;
mod patcher;
mod pipeline;
mod scanner;
mod stats;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, level from RUST_LOG (default info)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let client = config.client()?;
    let formatter = OutputFormatter::new();

    let date = chrono::Local::now().format("%B %Y").to_string();
    let summary = pipeline::run(&config, &client, &date, &formatter)?;

    formatter.print_summary(&summary);
    Ok(())
}

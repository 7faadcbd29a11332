//! polyiamond - enumerate and draw polyiamonds
//!
//! Usage:
//!   polyiamond generate [COUNT]     Write one image per shape into COUNT/
//!   polyiamond list COUNT           Print the shapes of COUNT triangles
//!   polyiamond benchmark            Time the enumeration for growing counts
//!   polyiamond render COUNT INDEX   Draw a single shape
//!   polyiamond browse [COUNT]       Interactive viewer

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod tui;

use cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The browser owns the terminal; keep stderr quiet under it.
    let default_level = match cli.command {
        Commands::Browse(_) => "warn",
        _ => "info",
    };
    init_logging(cli.verbose, default_level);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => cli::generate::run(&config, args),
        Commands::List(args) => cli::list::run(&config, args),
        Commands::Benchmark(args) => cli::benchmark::run(&config, args),
        Commands::Render(args) => cli::render::run(&config, args),
        Commands::Browse(args) => tui::run(&config, args),
    }
}

/// Log to stderr. `-v` flags take precedence over `RUST_LOG`.
fn init_logging(verbose: u8, default_level: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

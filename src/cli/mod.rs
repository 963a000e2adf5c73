//! Command-line interface for layered-table
//!
//! Provides `dump`, `get` and `sources` subcommands.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::CliOverrides;

mod dump;
mod get;
mod sources;
mod utils;

/// Merge layered key/value CSV files into one typed table
#[derive(Parser)]
#[command(name = "layered-table")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    profile: ProfileArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Settings overrides shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Directory holding the layered sources
    #[arg(long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Environment layer to apply over the defaults
    #[arg(long = "env", global = true, value_name = "NAME", env = "LAYERED_TABLE_ENV")]
    environment: Option<String>,

    /// Skip the machine-local override layer
    #[arg(long, global = true)]
    no_local: bool,
}

impl ProfileArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            directory: self.dir.clone(),
            environment: self.environment.clone(),
            no_local: self.no_local,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print every merged entry
    Dump(dump::DumpArgs),

    /// Print a single value
    Get(get::GetArgs),

    /// List the layered sources for the current profile
    Sources,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let overrides = cli.profile.overrides();
    match cli.command {
        Commands::Dump(args) => dump::run(args, &overrides),
        Commands::Get(args) => get::run(args, &overrides),
        Commands::Sources => sources::run(&overrides),
    }
}

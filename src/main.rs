//! layered-table: inspect layered CSV configuration from the command line
//!
//! Builds a table from explicit sources or from the conventional
//! `default` / `<environment>` / `local` layers and prints it.

use anyhow::Result;

mod cli;
mod config;

fn main() -> Result<()> {
    cli::run()
}

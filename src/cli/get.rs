//! Get command implementation

use anyhow::Result;
use clap::Args;
use layered_table::{coerce, Value};
use std::path::PathBuf;

use super::utils::build_table;
use crate::config::CliOverrides;

#[derive(Args)]
pub struct GetArgs {
    /// Key to look up
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Source files in precedence order (lowest first)
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<PathBuf>,

    /// Value to print when the key is absent (coerced like a cell)
    #[arg(short, long, value_name = "VALUE")]
    pub default: Option<String>,
}

pub fn run(args: GetArgs, overrides: &CliOverrides) -> Result<()> {
    let table = build_table(args.sources, overrides)?;

    let value: Value = match args.default {
        Some(default) => table.fetch_or(&args.key, &coerce(Some(&default))).clone(),
        None => table.fetch(&args.key)?.clone(),
    };
    println!("{}", value);
    Ok(())
}

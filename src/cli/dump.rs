//! Dump command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use super::utils::build_table;
use crate::config::CliOverrides;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum DumpFormat {
    /// One `key=value` line per entry
    #[default]
    Text,
    /// A single JSON object
    Json,
}

#[derive(Args)]
pub struct DumpArgs {
    /// Source files in precedence order (lowest first)
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = DumpFormat::Text)]
    pub format: DumpFormat,
}

pub fn run(args: DumpArgs, overrides: &CliOverrides) -> Result<()> {
    let table = build_table(args.sources, overrides)?;

    match args.format {
        DumpFormat::Text => {
            for (key, value) in table.sorted() {
                println!("{}={}", key, value);
            }
        }
        DumpFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}

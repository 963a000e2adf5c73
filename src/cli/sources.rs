//! Sources command implementation

use anyhow::Result;

use super::utils::resolve_sources;
use crate::config::CliOverrides;

pub fn run(overrides: &CliOverrides) -> Result<()> {
    for path in resolve_sources(Vec::new(), overrides)? {
        let status = if path.is_file() { "exists" } else { "missing" };
        println!("{:<8} {}", status, path.display());
    }
    Ok(())
}

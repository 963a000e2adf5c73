//! Shared CLI utilities.

use anyhow::{Context, Result};
use layered_table::{environment_sources, LayeredTable};
use std::path::PathBuf;

use crate::config::{load_settings, merge_cli_with_settings, CliOverrides};

/// Explicit sources when given, otherwise the profile layers from settings.
pub fn resolve_sources(explicit: Vec<PathBuf>, overrides: &CliOverrides) -> Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        return Ok(explicit);
    }
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let settings = merge_cli_with_settings(load_settings(&cwd)?, overrides)?;
    Ok(environment_sources(
        &settings.directory,
        &settings.environment,
        &settings.extension,
        settings.local_override,
    ))
}

pub fn build_table(explicit: Vec<PathBuf>, overrides: &CliOverrides) -> Result<LayeredTable> {
    let sources = resolve_sources(explicit, overrides)?;
    LayeredTable::load(&sources).context("Failed to build table")
}

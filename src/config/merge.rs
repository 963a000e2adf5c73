//! CLI flag overrides on top of loaded settings

use super::loader::Settings;
use anyhow::Result;
use std::path::PathBuf;

/// Settings values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub directory: Option<PathBuf>,
    pub environment: Option<String>,
    pub no_local: bool,
}

/// Apply CLI overrides (highest precedence) and validate the result.
pub fn merge_cli_with_settings(mut settings: Settings, cli: &CliOverrides) -> Result<Settings> {
    if let Some(dir) = &cli.directory {
        settings.directory = dir.clone();
    }
    if let Some(env) = &cli.environment {
        settings.environment = env.clone();
    }
    if cli.no_local {
        settings.local_override = false;
    }
    settings.validate()?;
    Ok(settings)
}

//! Settings file and environment loading

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SETTINGS_FILE: &str = "layered-table.toml";
pub const ENV_PREFIX: &str = "LAYERED_TABLE_";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("environment name cannot be empty")]
    EmptyEnvironment,

    #[error("source extension cannot be empty")]
    EmptyExtension,
}

/// Where the CLI looks for layered sources when none are given explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub directory: PathBuf,
    pub environment: String,
    pub extension: String,
    pub local_override: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("config"),
            environment: "development".to_string(),
            extension: "csv".to_string(),
            local_override: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.environment.trim().is_empty() {
            return Err(SettingsError::EmptyEnvironment);
        }
        if self.extension.trim_start_matches('.').trim().is_empty() {
            return Err(SettingsError::EmptyExtension);
        }
        Ok(())
    }
}

/// Defaults < settings file < `LAYERED_TABLE_*` environment variables.
pub fn settings_figment(settings_file: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(settings_file))
        .merge(Env::prefixed(ENV_PREFIX))
}

/// Load settings from `<working_dir>/layered-table.toml` and the environment.
///
/// A missing settings file is fine; a malformed one is an error.
pub fn load_settings(working_dir: &Path) -> Result<Settings> {
    let settings_file = working_dir.join(SETTINGS_FILE);
    let settings: Settings = settings_figment(&settings_file)
        .extract()
        .with_context(|| format!("Invalid settings in {}", settings_file.display()))?;
    tracing::debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_settings_file() {
        let tmp = TempDir::new().expect("tmp");
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(tmp.path().join(SETTINGS_FILE)))
            .extract()
            .expect("extract");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(SETTINGS_FILE);
        fs::write(&path, "environment = \"production\"\nlocal_override = false\n").expect("write");

        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(&path))
            .extract()
            .expect("extract");
        assert_eq!(settings.environment, "production");
        assert!(!settings.local_override);
        assert_eq!(settings.directory, PathBuf::from("config"), "unset fields keep defaults");
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(SETTINGS_FILE), "local_override = \"sometimes\"\n")
            .expect("write");

        assert!(load_settings(tmp.path()).is_err());
    }

    #[test]
    fn validate_rejects_empty_names() {
        let mut settings = Settings::default();
        assert_eq!(settings.validate(), Ok(()));

        settings.environment = "  ".to_string();
        assert_eq!(settings.validate(), Err(SettingsError::EmptyEnvironment));

        settings.environment = "test".to_string();
        settings.extension = ".".to_string();
        assert_eq!(settings.validate(), Err(SettingsError::EmptyExtension));
    }
}

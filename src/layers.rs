//! Conventional environment layering
//!
//! Precedence (lowest to highest):
//! 1. `<dir>/default.<ext>`
//! 2. `<dir>/<environment>.<ext>`
//! 3. `<dir>/local.<ext>` (optional machine-local overrides)

use std::path::{Path, PathBuf};

pub const DEFAULT_LAYER: &str = "default";
pub const LOCAL_LAYER: &str = "local";

/// Ordered source list for `environment`, ready for [`crate::LayeredTable::load`].
///
/// Paths are not checked here; files that do not exist are skipped when the
/// table is built.
pub fn environment_sources(
    dir: &Path,
    environment: &str,
    extension: &str,
    include_local: bool,
) -> Vec<PathBuf> {
    let extension = extension.trim_start_matches('.');
    let mut layers = vec![DEFAULT_LAYER, environment];
    if include_local {
        layers.push(LOCAL_LAYER);
    }
    layers.into_iter().map(|name| dir.join(format!("{name}.{extension}"))).collect()
}

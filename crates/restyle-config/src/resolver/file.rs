//! Read-only resolver over a settings file (TOML or JSON).

use std::path::{Path, PathBuf};

use restyle_common::{ConfigError, SettingsMap};
use tracing::debug;

use super::SettingsResolver;
use crate::catalog::defaults_map;

/// Reads persisted settings from a flat TOML or JSON file on every call.
#[derive(Debug, Clone)]
pub struct FileResolver {
    path: PathBuf,
}

impl FileResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsResolver for FileResolver {
    fn get_settings(&self, group: &str) -> Result<SettingsMap, ConfigError> {
        let settings = read_settings_file(&self.path)?;
        debug!(group, path = %self.path.display(), keys = settings.len(), "settings loaded");
        Ok(settings)
    }

    fn get_defaults(&self, _group: &str) -> Result<SettingsMap, ConfigError> {
        Ok(defaults_map().clone())
    }
}

/// Parse a flat settings map from `path`. `.json` files are read as JSON,
/// everything else as TOML.
pub fn read_settings_file(path: &Path) -> Result<SettingsMap, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON settings: {e}")))
    } else {
        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML settings: {e}")))
    }
}

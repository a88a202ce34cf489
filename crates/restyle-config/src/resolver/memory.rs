//! In-memory resolver for embedding hosts and tests.

use std::sync::RwLock;

use restyle_common::{ConfigError, SettingValue, SettingsMap};

use super::SettingsResolver;
use crate::catalog::defaults_map;

/// Holds persisted settings in memory; defaults come from the catalog.
#[derive(Debug, Default)]
pub struct StaticResolver {
    settings: RwLock<SettingsMap>,
    defaults: Option<SettingsMap>,
}

impl StaticResolver {
    pub fn new(settings: SettingsMap) -> Self {
        Self {
            settings: RwLock::new(settings),
            defaults: None,
        }
    }

    /// Replace the catalog defaults with a custom map.
    pub fn with_defaults(mut self, defaults: SettingsMap) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Update one persisted value.
    pub fn set(&self, key: &str, value: impl Into<SettingValue>) {
        if let Ok(mut settings) = self.settings.write() {
            settings.insert(key.to_string(), value.into());
        }
    }
}

impl SettingsResolver for StaticResolver {
    fn get_settings(&self, _group: &str) -> Result<SettingsMap, ConfigError> {
        self.settings
            .read()
            .map(|s| s.clone())
            .map_err(|_| ConfigError::ParseError("settings lock poisoned".into()))
    }

    fn get_defaults(&self, _group: &str) -> Result<SettingsMap, ConfigError> {
        Ok(self
            .defaults
            .clone()
            .unwrap_or_else(|| defaults_map().clone()))
    }
}

//! Restyle engine configuration.
//!
//! Provides the TOML engine config (limits, specificity targets, cache
//! tuning), the static option catalog that defines every style setting and
//! its default, and the settings resolvers the compiler reads from.

pub mod catalog;
pub mod resolver;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use catalog::{defaults_map, option_spec, OptionGroup, OptionSpec, OPTION_CATALOG, SETTINGS_GROUP};
pub use resolver::{read_settings_file, FileResolver, SettingsResolver, StaticResolver};
pub use schema::{EngineConfig, CONFIG_SCHEMA_VERSION};

use restyle_common::ConfigError;
use std::path::Path;

/// Load the engine config from `path`, or from the platform default location
/// when no path is given, and validate it.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EngineConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

//! Settings resolution.
//!
//! The engine never owns persisted settings; it asks a [`SettingsResolver`]
//! for the persisted values and the defaults of a settings group.

mod file;
mod memory;


pub use file::{read_settings_file, FileResolver};
pub use memory::StaticResolver;

use restyle_common::{ConfigError, SettingsMap};

/// Source of persisted settings and their defaults.
pub trait SettingsResolver: Send + Sync {
    /// Persisted values for `group`. May be sparse.
    fn get_settings(&self, group: &str) -> Result<SettingsMap, ConfigError>;

    /// Defaults for `group`. Must contain every known key.
    fn get_defaults(&self, group: &str) -> Result<SettingsMap, ConfigError>;
}

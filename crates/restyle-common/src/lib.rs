pub mod errors;
pub mod types;

pub use errors::{CacheError, ConfigError, RestyleError};
pub use types::{format_number, merge_settings, Color, CompileMode, SettingValue, SettingsMap};

pub type Result<T> = std::result::Result<T, RestyleError>;

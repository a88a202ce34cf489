//! Engine configuration schema.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod cache;
mod limits;
mod product;
mod specificity;

pub use cache::*;
pub use limits::*;
pub use product::*;
pub use specificity::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the style engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub product: ProductConfig,
    pub limits: LimitsConfig,
    pub specificity: SpecificityConfig,
    pub cache: CacheConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_product_header_fields() {
        let config = EngineConfig::default();
        assert_eq!(config.product.name, "Restyle");
        assert_eq!(config.product.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn default_config_has_limits() {
        let config = EngineConfig::default();
        assert_eq!(config.limits.max_rule_bytes, 10 * 1024);
        assert_eq!(config.limits.max_raw_bytes, 20 * 1024);
        assert_eq!(config.limits.max_document_bytes, 500 * 1024);
        assert_eq!(config.limits.max_font_family_chars, 200);
    }

    #[test]
    fn default_config_has_cache_budget() {
        let config = EngineConfig::default();
        assert!(config.cache.enabled);
        assert_eq!(config.cache.memory_budget_bytes, 10 * 1024 * 1024);
        assert_eq!(config.cache.eviction_ratio, 0.8);
        assert_eq!(config.cache.max_key_len, 172);
        assert!(config.cache.durable_dir.is_none());
    }

    #[test]
    fn navigation_target_outranks_default() {
        let config = EngineConfig::default();
        assert!(config.specificity.navigation_target > config.specificity.default_target);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
[cache]
memory_budget_bytes = 4096
"#,
        )
        .unwrap();
        assert_eq!(config.cache.memory_budget_bytes, 4096);
        assert_eq!(config.cache.default_ttl_secs, 3600);
        assert_eq!(config.product.name, "Restyle");
    }
}

//! Engine configuration validation.
//!
//! Each section has its own check; every violation is collected into a
//! single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::EngineConfig;
use restyle_common::ConfigError;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_product(&mut errors, config);
    validate_limits(&mut errors, config);
    validate_specificity(&mut errors, config);
    validate_cache(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_product(errors: &mut Vec<String>, config: &EngineConfig) {
    let name = config.product.name.trim();
    if name.is_empty() {
        errors.push("product.name must not be empty".into());
    }
    // The name lands inside a CSS comment.
    if name.contains("*/") || name.contains("/*") {
        errors.push("product.name must not contain comment delimiters".into());
    }
    if config.product.version.contains("*/") {
        errors.push("product.version must not contain comment delimiters".into());
    }
}

fn validate_limits(errors: &mut Vec<String>, config: &EngineConfig) {
    let limits = &config.limits;
    validate_range(errors, "limits.max_rule_bytes", limits.max_rule_bytes, 64, 65_536);
    validate_range(errors, "limits.max_raw_bytes", limits.max_raw_bytes, 256, 262_144);
    validate_range(
        errors,
        "limits.max_document_bytes",
        limits.max_document_bytes,
        1024,
        8 * 1024 * 1024,
    );
    validate_range(
        errors,
        "limits.max_font_family_chars",
        limits.max_font_family_chars,
        1,
        1000,
    );
    if limits.max_rule_bytes > limits.max_document_bytes {
        errors.push("limits.max_rule_bytes must not exceed limits.max_document_bytes".into());
    }
}

fn validate_specificity(errors: &mut Vec<String>, config: &EngineConfig) {
    let spec = &config.specificity;
    validate_range(errors, "specificity.default_target", spec.default_target as usize, 0, 1000);
    validate_range(
        errors,
        "specificity.navigation_target",
        spec.navigation_target as usize,
        0,
        1000,
    );
    if spec.navigation_target < spec.default_target {
        errors.push("specificity.navigation_target must be >= specificity.default_target".into());
    }
}

fn validate_cache(errors: &mut Vec<String>, config: &EngineConfig) {
    let cache = &config.cache;
    validate_range(
        errors,
        "cache.memory_budget_bytes",
        cache.memory_budget_bytes,
        1024,
        usize::MAX,
    );
    validate_range_f64(errors, "cache.eviction_ratio", cache.eviction_ratio, 0.1, 1.0);
    validate_range(
        errors,
        "cache.default_ttl_secs",
        cache.default_ttl_secs as usize,
        1,
        30 * 24 * 3600,
    );
    validate_range(errors, "cache.max_key_len", cache.max_key_len, 32, 1024);
}

//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = EngineConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_product_name() {
    let mut config = EngineConfig::default();
    config.product.name = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("product.name"));
}

#[test]
fn catches_comment_breakout_in_product_name() {
    let mut config = EngineConfig::default();
    config.product.name = "Evil */ body { display: none } /*".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("comment delimiters"));
}

#[test]
fn catches_rule_ceiling_too_small() {
    let mut config = EngineConfig::default();
    config.limits.max_rule_bytes = 8;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("limits.max_rule_bytes"));
}

#[test]
fn catches_inverted_specificity_targets() {
    let mut config = EngineConfig::default();
    config.specificity.default_target = 200;
    config.specificity.navigation_target = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("navigation_target"));
}

#[test]
fn catches_eviction_ratio_out_of_range() {
    let mut config = EngineConfig::default();
    config.cache.eviction_ratio = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("cache.eviction_ratio"));
}

#[test]
fn catches_tiny_memory_budget() {
    let mut config = EngineConfig::default();
    config.cache.memory_budget_bytes = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("cache.memory_budget_bytes"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = EngineConfig::default();
    config.cache.max_key_len = 4;
    config.cache.default_ttl_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("cache.max_key_len"));
    assert!(err.contains("cache.default_ttl_secs"));
    assert!(err.contains("; "));
}

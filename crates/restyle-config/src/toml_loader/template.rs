//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Restyle engine configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[product]
name = "Restyle"

[limits]
# max_rule_bytes = 10240         # 64-65536
# max_raw_bytes = 20480          # 256-262144
# max_document_bytes = 512000    # 1024-8388608
# max_font_family_chars = 200    # 1-1000

[specificity]
# default_target = 21            # 0-1000
# navigation_target = 111        # 0-1000, must be >= default_target

[cache]
# enabled = true
# memory_budget_bytes = 10485760 # >= 1024
# eviction_ratio = 0.8           # 0.1-1.0
# default_ttl_secs = 3600        # 1-2592000
# max_key_len = 172              # 32-1024
# shared_enabled = true
# durable_enabled = true
# durable_dir = "/var/lib/restyle/cache"
"##
    .to_string()
}

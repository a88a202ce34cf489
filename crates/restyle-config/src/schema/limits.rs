//! Size ceilings applied while assembling CSS.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest single `selector { property: value; }` rule.
    pub max_rule_bytes: usize,
    /// Raw blocks beyond this are truncated with a marker comment.
    pub max_raw_bytes: usize,
    /// Whole-document ceiling applied at finalization.
    pub max_document_bytes: usize,
    pub max_font_family_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_rule_bytes: 10 * 1024,
            max_raw_bytes: 20 * 1024,
            max_document_bytes: 500 * 1024,
            max_font_family_chars: 200,
        }
    }
}

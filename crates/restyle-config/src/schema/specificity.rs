//! Specificity targets for generated selectors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecificityConfig {
    /// Target for selectors outside the primary navigation.
    pub default_target: u32,
    /// Target for selectors touching the admin menu.
    pub navigation_target: u32,
}

impl Default for SpecificityConfig {
    fn default() -> Self {
        Self {
            default_target: 21,
            navigation_target: 111,
        }
    }
}

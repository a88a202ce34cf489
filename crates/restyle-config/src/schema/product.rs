//! Product identity written into the generated document header.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductConfig {
    pub name: String,
    pub version: String,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            name: "Restyle".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

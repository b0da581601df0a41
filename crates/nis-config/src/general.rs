//! General CLI defaults.

use serde::{Deserialize, Serialize};

/// Number of items shown when no count is given.
const fn default_count() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Item count used when the CLI gets no positional count.
    #[serde(default = "default_count")]
    pub default_count: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
        }
    }
}

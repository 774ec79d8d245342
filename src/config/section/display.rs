//! `[display]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [display]
//! clear = true    # clear the terminal before printing new content
//! ```

use serde::{Deserialize, Serialize};

/// Terminal display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clear the screen before each render instead of appending.
    pub clear: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { clear: true }
    }
}

//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! indent = 2            # spaces per nesting level for JSON
//! encoding = "utf-8"    # utf-8 | utf-16le | utf-16be
//! ```
//!
//! A byte order mark at the start of the file always wins over `encoding`.

use serde::{Deserialize, Serialize};

use crate::render::TextEncoding;

/// Upper bound accepted for `render.indent`.
pub const MAX_INDENT: usize = 16;

/// Rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level when pretty-printing JSON.
    pub indent: usize,

    /// Encoding assumed when the file has no byte order mark.
    pub encoding: TextEncoding,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            encoding: TextEncoding::Utf8,
        }
    }
}

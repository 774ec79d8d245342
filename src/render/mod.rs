//! Content renderer.
//!
//! Turns the bytes of one complete file read into display text:
//!
//! ```text
//! bytes → decode (BOM / configured encoding) → Structured: parse + pretty-print
//!                                            → PlainText:  verbatim
//! ```

mod encoding;
mod structured;

pub use encoding::TextEncoding;

use crate::config::RenderConfig;
use crate::core::{ContentKind, ReloadError};

/// Pure renderer: same bytes and kind always produce the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    indent: usize,
    encoding: TextEncoding,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl Renderer {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            indent: config.indent,
            encoding: config.encoding,
        }
    }

    /// Structured input only ever fails with `Parse`: undecodable bytes are
    /// not a well-formed document either. PlainText fails with `Encoding`.
    pub fn render(&self, bytes: &[u8], kind: ContentKind) -> Result<String, ReloadError> {
        match kind {
            ContentKind::Structured => {
                let text = self.encoding.decode(bytes).map_err(|e| {
                    ReloadError::Parse(<serde_json::Error as serde::de::Error>::custom(e))
                })?;
                structured::pretty_print(&text, self.indent)
            }
            ContentKind::PlainText => self.encoding.decode(bytes),
        }
    }
}

//! Viewer configuration management for `jwatch.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── display    # [display]
//! │   ├── load       # [load]
//! │   └── render     # [render]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError
//! └── mod.rs         # ViewerConfig (this file)
//! ```
//!
//! The config file is optional. Without one every section uses its defaults.

pub mod section;
pub mod types;

pub use section::{DisplayConfig, LoadConfig, MAX_INDENT, RenderConfig};
pub use types::ConfigError;

use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing jwatch.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Absolute path to the config file, if one was loaded
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Read retry settings
    #[serde(default)]
    pub load: LoadConfig,

    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Terminal display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ViewerConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file is not an error: defaults are used. A file that exists
    /// but cannot be read, parsed or validated is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("config"; "{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let mut config = Self::from_path(path)?;
        config.validate()?;
        let config_path = crate::utils::path::normalize_path(path);
        debug!("config"; "loaded {}", config_path.display());
        config.config_path = Some(config_path);

        Ok(config)
    }

    /// Where the settings came from, for the startup log.
    pub fn source(&self) -> String {
        match &self.config_path {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.load.max_retries == 0 {
            return Err(ConfigError::Validation(
                "load.max_retries must be at least 1".to_string(),
            ));
        }

        if self.render.indent > MAX_INDENT {
            return Err(ConfigError::Validation(format!(
                "render.indent must be at most {MAX_INDENT}, got {}",
                self.render.indent
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
pub fn test_parse_config(extra: &str) -> ViewerConfig {
    let (parsed, ignored) = ViewerConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

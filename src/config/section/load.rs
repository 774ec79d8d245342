//! `[load]` section configuration.
//!
//! Retry budget for reading the watched file while another process holds it.
//!
//! # Example
//!
//! ```toml
//! [load]
//! max_retries = 10    # total read attempts before giving up
//! delay_ms = 200      # pause between attempts
//! ```
//!
//! Worst-case time spent on one locked file is `max_retries * delay_ms`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// File read retry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Total read attempts, including the first one. Must be at least 1.
    pub max_retries: u32,

    /// Milliseconds to wait between attempts.
    pub delay_ms: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            delay_ms: 200,
        }
    }
}

impl LoadConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::time::Duration;

    #[test]
    fn test_load_config() {
        let config = test_parse_config("[load]\nmax_retries = 3\ndelay_ms = 50");

        assert_eq!(config.load.max_retries, 3);
        assert_eq!(config.load.delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_load_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.load.max_retries, 10);
        assert_eq!(config.load.delay_ms, 200);
    }

    #[test]
    fn test_load_config_partial() {
        let config = test_parse_config("[load]\ndelay_ms = 0");

        assert_eq!(config.load.max_retries, 10);
        assert_eq!(config.load.delay(), Duration::ZERO);
    }
}

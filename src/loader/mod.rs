//! Retry-read loader.
//!
//! Reads the watched file in full, retrying while another process holds it,
//! then hands the bytes to the renderer:
//!
//! ```text
//! read ──ok──────────────→ render → Rendered | Failed(Parse/Encoding, 1)
//!  │
//!  ├─transient → sleep(delay) → read ...  (at most max_retries reads)
//!  │                └─ budget spent → Failed(Io, max_retries)
//!  └─fatal ─────────────────────────→ Failed(FatalIo, attempts)
//! ```
//!
//! Blocking: callers run it on a blocking worker, never on the event path.

mod source;


pub use source::{FileSource, FsSource, is_transient};

use std::sync::Arc;
use std::time::Duration;

use crate::config::{LoadConfig, ViewerConfig};
use crate::core::{LoadResult, ReloadError, WatchTarget};
use crate::render::Renderer;

/// Bounded fixed-delay retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total read attempts, including the first. Never less than 1.
    pub max_retries: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&LoadConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &LoadConfig) -> Self {
        Self {
            max_retries: config.max_retries.max(1),
            delay: config.delay(),
        }
    }
}

/// Reads and renders one target per call.
#[derive(Clone)]
pub struct Loader {
    policy: RetryPolicy,
    renderer: Renderer,
    source: Arc<dyn FileSource>,
}

impl Loader {
    pub fn new(policy: RetryPolicy, renderer: Renderer, source: Arc<dyn FileSource>) -> Self {
        Self {
            policy,
            renderer,
            source,
        }
    }

    /// Loader reading from disk with settings from `config`.
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(
            RetryPolicy::from_config(&config.load),
            Renderer::from_config(&config.render),
            Arc::new(FsSource),
        )
    }

    /// Run one load attempt sequence for `target`.
    ///
    /// The returned result always comes from a single complete read.
    pub fn load(&self, target: &WatchTarget) -> LoadResult {
        let path = target.path();
        let name = target.display_name();
        let max = self.policy.max_retries.max(1);
        let mut attempts = 0;

        let bytes = loop {
            attempts += 1;
            match self.source.read(&path) {
                Ok(bytes) => break bytes,
                Err(err) if !is_transient(&err) => {
                    crate::debug!("load"; "{}: {} (not retrying)", name, err);
                    return LoadResult::Failed {
                        error: ReloadError::FatalIo(err),
                        attempts,
                    };
                }
                Err(err) if attempts >= max => {
                    crate::log!("load"; "{}: giving up after {} attempts: {}", name, attempts, err);
                    return LoadResult::Failed {
                        error: ReloadError::Io(err),
                        attempts,
                    };
                }
                Err(err) => {
                    crate::debug!("load"; "{}: attempt {}/{} failed: {}", name, attempts, max, err);
                    std::thread::sleep(self.policy.delay);
                }
            }
        };

        crate::debug!("load"; "{}: read {} bytes in {} attempt(s)", name, bytes.len(), attempts);

        // A render failure concerns the one read that succeeded
        match self.renderer.render(&bytes, target.kind()) {
            Ok(text) => LoadResult::Rendered(text),
            Err(error) => LoadResult::Failed { error, attempts: 1 },
        }
    }
}

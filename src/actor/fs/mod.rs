//! FileSystem Watcher
//!
//! Watches the directory of one target file and forwards a `ChangeNotice`
//! for every relevant OS event on that file name.
//!
//! Architecture:
//! ```text
//! notify thread → active? → Classifier (kind + file name) → CoordinatorMsg::Changed
//! ```
//!
//! Watching the parent directory instead of the file means a file that does
//! not exist yet is picked up once it is created, and editors that save by
//! renaming a temp file over the original keep working.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use super::messages::CoordinatorMsg;
use crate::core::{ReloadError, WatchTarget};

// Event filtering (raw notify events -> notices for the target).
mod classifier;
// Shared fs event types.
mod types;


pub use types::{ChangeKind, ChangeNotice};

/// Live watch registration for one target.
///
/// Dropping the handle releases the OS watcher. Notices still queued in the
/// coordinator inbox keep the generation they were produced with.
pub struct WatchHandle {
    generation: u64,
    /// Shared with the notify callback; cleared on release
    active: Arc<AtomicBool>,
    /// Watcher handle (must be kept alive while armed)
    watcher: Option<RecommendedWatcher>,
    directory: PathBuf,
}

impl WatchHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop forwarding events and release the OS watcher.
    pub fn disarm(self) {
        drop(self);
    }

    fn release(&mut self) {
        self.active.store(false, Ordering::SeqCst);

        let Some(mut watcher) = self.watcher.take() else {
            return;
        };
        if let Err(e) = watcher.unwatch(&self.directory) {
            crate::debug!("watch"; "unwatch {}: {}", self.directory.display(), e);
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Start watching `target`, tagging every notice with `generation`.
pub fn arm(
    target: &WatchTarget,
    generation: u64,
    tx: mpsc::UnboundedSender<CoordinatorMsg>,
) -> Result<WatchHandle, ReloadError> {
    let directory = target.directory();

    if !directory.exists() {
        return Err(ReloadError::watcher_setup(directory, "directory does not exist"));
    }
    if !directory.is_dir() {
        return Err(ReloadError::watcher_setup(directory, "not a directory"));
    }
    if target.file_name().is_empty() {
        return Err(ReloadError::watcher_setup(target.path(), "empty file name"));
    }

    let active = Arc::new(AtomicBool::new(true));
    let callback_active = Arc::clone(&active);
    let filter = target.clone();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if !callback_active.load(Ordering::SeqCst) {
            return;
        }
        match res {
            Ok(event) => {
                let Some(notice) = classifier::classify(&event, &filter, generation) else {
                    return;
                };
                crate::debug!("watch"; "{}: {} ({:?})", filter.display_name(), notice.kind.label(), event.kind);
                // Receiver gone means the coordinator already exited
                let _ = tx.send(CoordinatorMsg::Changed(notice));
            }
            Err(e) => crate::log!("watch"; "notify error: {}", e),
        }
    })
    .map_err(|e| ReloadError::watcher_setup(directory, e.to_string()))?;

    watcher
        .watch(directory, RecursiveMode::NonRecursive)
        .map_err(|e| ReloadError::watcher_setup(directory, e.to_string()))?;

    crate::debug!("watch"; "armed generation {} on {}", generation, directory.display());

    Ok(WatchHandle {
        generation,
        active,
        watcher: Some(watcher),
        directory: directory.to_path_buf(),
    })
}

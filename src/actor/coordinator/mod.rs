//! Reload Coordinator
//!
//! Owns the display state and the watch handle, and turns selections and
//! change notices into loads:
//!
//! ```text
//!            Select(path)         LoadDone/LoadAborted (+pending → one more load)
//!   Idle ──────────────→ Loading ──arm──→ Armed ←──────────── Loading
//!    ↑                      │               │                   ↑
//!    └──── arm failed ──────┘               └──── Changed ──────┘
//! ```
//!
//! Every message is handled on one task, so state needs no locking. Loads run
//! on blocking workers and report back through the same inbox. Each selection
//! bumps a generation counter; notices and results from older generations are
//! dropped on arrival.

mod runtime;
mod state;


pub use runtime::run_watch;
pub use state::{CoordinatorState, DisplayState};

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use super::fs::{self, ChangeNotice, WatchHandle};
use super::messages::CoordinatorMsg;
use crate::core::{ErrorKind, LoadResult, ReloadError, WatchTarget};
use crate::display::Display;
use crate::loader::Loader;
use crate::{debug, log};

/// Single-task reload coordinator.
pub struct Coordinator<D: Display> {
    rx: mpsc::UnboundedReceiver<CoordinatorMsg>,
    /// Cloned into watchers and blocking loads
    tx: mpsc::UnboundedSender<CoordinatorMsg>,
    loader: Arc<Loader>,
    display: D,
    state: CoordinatorState,
    content: DisplayState,
    target: Option<WatchTarget>,
    handle: Option<WatchHandle>,
    generation: u64,
    /// A notice arrived while loading
    pending: bool,
}

impl<D: Display> Coordinator<D> {
    pub fn new(loader: Loader, display: D) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            rx,
            tx,
            loader: Arc::new(loader),
            display,
            state: CoordinatorState::Idle,
            content: DisplayState::default(),
            target: None,
            handle: None,
            generation: 0,
            pending: false,
        }
    }

    /// Sender for selection and shutdown messages.
    pub fn sender(&self) -> mpsc::UnboundedSender<CoordinatorMsg> {
        self.tx.clone()
    }

    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn content(&self) -> &DisplayState {
        &self.content
    }

    /// Run until `Shutdown`, then release the watch handle.
    pub async fn run(mut self) -> D {
        debug!("actor"; "coordinator start");
        while let Some(msg) = self.rx.recv().await {
            if self.handle_message(msg).await.is_break() {
                break;
            }
        }
        self.release_handle();
        debug!("actor"; "coordinator stopped");
        self.display
    }

    async fn handle_message(&mut self, msg: CoordinatorMsg) -> ControlFlow<()> {
        match msg {
            CoordinatorMsg::Select(path) => self.select(path).await,
            CoordinatorMsg::Changed(notice) => self.on_changed(notice),
            CoordinatorMsg::LoadDone { generation, result } => {
                self.on_load_done(generation, result)
            }
            CoordinatorMsg::LoadAborted { generation, reason } => {
                self.on_load_aborted(generation, &reason)
            }
            CoordinatorMsg::Shutdown => {
                debug!("actor"; "shutdown");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    // ========================================================================
    // selection
    // ========================================================================

    async fn select(&mut self, path: PathBuf) {
        self.release_handle();
        self.generation += 1;
        self.pending = false;
        self.state = CoordinatorState::Idle;

        let target = match WatchTarget::from_path(&path) {
            Ok(target) => target,
            Err(error) => {
                self.target = None;
                self.report(&error.to_string());
                return;
            }
        };

        log!("select"; "{} ({})", target.path().display(), target.kind().name());
        self.display.on_select(&target);
        self.target = Some(target.clone());
        self.state = CoordinatorState::Loading;

        // Nothing else is handled until the initial load is in
        let loader = Arc::clone(&self.loader);
        match load_blocking(loader, target.clone()).await {
            Ok(result) => self.publish(&target, result),
            Err(reason) => self.report(&aborted_message(&target, &reason)),
        }

        match fs::arm(&target, self.generation, self.tx.clone()) {
            Ok(handle) => {
                log!("watch"; "watching {}", target.display_name());
                self.handle = Some(handle);
                self.state = CoordinatorState::Armed;
            }
            Err(error) => {
                self.state = CoordinatorState::Idle;
                self.report(&error.to_string());
            }
        }
    }

    fn release_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("watch"; "disarm generation {}", handle.generation());
            handle.disarm();
        }
    }

    // ========================================================================
    // reloads
    // ========================================================================

    fn on_changed(&mut self, notice: ChangeNotice) {
        if notice.generation != self.generation {
            debug!("watch"; "stale notice (generation {})", notice.generation);
            return;
        }

        match self.state {
            CoordinatorState::Armed => {
                debug!("watch"; "{}: {}", notice.kind.label(), notice.path.display());
                self.spawn_load();
            }
            CoordinatorState::Loading => self.pending = true,
            CoordinatorState::Idle => {}
        }
    }

    fn on_load_done(&mut self, generation: u64, result: LoadResult) {
        let Some(target) = self.current_load(generation) else {
            return;
        };
        debug!("load"; "done: {}", result.error_kind().map_or("rendered", ErrorKind::label));

        self.publish(&target, result);
        self.finish_load();
    }

    fn on_load_aborted(&mut self, generation: u64, reason: &str) {
        let Some(target) = self.current_load(generation) else {
            return;
        };

        self.report(&aborted_message(&target, reason));
        self.finish_load();
    }

    /// Target of the in-flight load, if `generation` still owns it.
    fn current_load(&self, generation: u64) -> Option<WatchTarget> {
        if generation != self.generation || self.state != CoordinatorState::Loading {
            debug!("load"; "stale result (generation {})", generation);
            return None;
        }
        self.target.clone()
    }

    fn finish_load(&mut self) {
        self.state = CoordinatorState::Armed;

        if std::mem::take(&mut self.pending) {
            self.spawn_load();
        }
    }

    /// Start one background load; its outcome comes back as `LoadDone`,
    /// or `LoadAborted` if the worker panicked.
    fn spawn_load(&mut self) {
        let Some(target) = self.target.clone() else {
            return;
        };
        self.state = CoordinatorState::Loading;

        let generation = self.generation;
        let loader = Arc::clone(&self.loader);
        let tx = self.tx.clone();
        let task = tokio::task::spawn_blocking(move || loader.load(&target));
        tokio::spawn(async move {
            let msg = match task.await {
                Ok(result) => CoordinatorMsg::LoadDone { generation, result },
                Err(e) => CoordinatorMsg::LoadAborted {
                    generation,
                    reason: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    // ========================================================================
    // publishing
    // ========================================================================

    fn publish(&mut self, target: &WatchTarget, result: LoadResult) {
        match result {
            LoadResult::Rendered(text) => {
                self.content.replace(text);
                self.display.on_content_updated(self.content.text());
            }
            LoadResult::Failed { error, attempts } => {
                self.report(&failure_message(target, &error, attempts));
            }
        }
    }

    fn report(&mut self, message: &str) {
        debug!("error"; "{}", message);
        self.display.on_error(message);
    }
}

async fn load_blocking(loader: Arc<Loader>, target: WatchTarget) -> Result<LoadResult, String> {
    tokio::task::spawn_blocking(move || loader.load(&target))
        .await
        .map_err(|e| e.to_string())
}

/// User-facing text for a load whose worker died.
pub fn aborted_message(target: &WatchTarget, reason: &str) -> String {
    format!("failed to load {}: load task failed: {}", target.path().display(), reason)
}

/// User-facing text for a failed load.
pub fn failure_message(target: &WatchTarget, error: &ReloadError, attempts: u32) -> String {
    let path = target.path();
    match error.kind() {
        ErrorKind::Io => format!(
            "failed to load {} after {} attempts: {}",
            path.display(),
            attempts,
            error
        ),
        ErrorKind::WatcherSetup => error.to_string(),
        _ => format!("failed to load {}: {}", path.display(), error),
    }
}

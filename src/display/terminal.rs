use std::io::{Write, stdout};

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};

use super::Display;
use crate::config::DisplayConfig;
use crate::core::WatchTarget;
use crate::logger::WatchStatus;

/// Prints content to stdout with a single status line beneath it.
pub struct TerminalDisplay {
    clear: bool,
    status: WatchStatus,
    /// File name shown in the status line
    name: String,
}

impl TerminalDisplay {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            clear: config.clear,
            status: WatchStatus::new(),
            name: String::new(),
        }
    }
}

impl Display for TerminalDisplay {
    fn on_select(&mut self, target: &WatchTarget) {
        self.name = target.display_name().into_owned();
    }

    fn on_content_updated(&mut self, text: &str) {
        let mut out = stdout().lock();
        if self.clear {
            execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0)).ok();
        }
        if text.is_empty() {
            writeln!(out).ok();
        } else {
            writeln!(out, "{text}").ok();
        }
        out.flush().ok();
        drop(out);

        // The content now sits above the cursor; keep it
        self.status.detach();
        self.status.success(&format!("updated {}", self.name));
    }

    fn on_error(&mut self, message: &str) {
        let (summary, detail) = message.split_once('\n').unwrap_or((message, ""));
        self.status.error(summary, detail);
    }
}

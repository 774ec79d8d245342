//! Display collaborators.
//!
//! - `Display` - what the coordinator publishes to
//! - `terminal` - stdout rendering with an overwriting status line
//! - `input` - stdin reader feeding selections to the coordinator

mod input;
mod terminal;

pub use input::spawn_input_reader;
pub use terminal::TerminalDisplay;

use crate::core::WatchTarget;

/// Receives rendered content and failures from the coordinator.
///
/// Called only from the coordinator task, never concurrently.
pub trait Display: Send {
    /// A new file was selected. Called before its first load.
    fn on_select(&mut self, _target: &WatchTarget) {}

    /// Called on every successful render with the full new text.
    fn on_content_updated(&mut self, text: &str);

    /// Called at most once per load attempt sequence.
    fn on_error(&mut self, message: &str);
}

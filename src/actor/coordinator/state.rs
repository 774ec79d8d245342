/// Where the coordinator is in its select/load/watch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    /// Nothing armed: before the first selection or after a setup failure
    Idle,
    /// A load for the current generation is running
    Loading,
    /// Watching, no load in flight
    Armed,
}

/// The last successfully rendered text.
///
/// Only replaced by a complete render; failures leave it as is.
#[derive(Debug, Default)]
pub struct DisplayState {
    text: String,
}

impl DisplayState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(super) fn replace(&mut self, text: String) {
        self.text = text;
    }
}

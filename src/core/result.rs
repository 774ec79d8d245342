//! Outcome of one load attempt sequence.

use super::{ErrorKind, ReloadError};

/// Produced once per load attempt sequence, consumed once by the coordinator.
#[derive(Debug)]
pub enum LoadResult {
    /// File was read in full and rendered
    Rendered(String),
    /// Sequence ended in an error after `attempts` reads
    Failed { error: ReloadError, attempts: u32 },
}

impl LoadResult {
    /// Error kind of a failed sequence.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Rendered(_) => None,
            Self::Failed { error, .. } => Some(error.kind()),
        }
    }
}

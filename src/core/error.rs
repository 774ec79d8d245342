//! Reload pipeline error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Classification of a reload failure, independent of its cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// File missing or permission denied - not retried
    FatalIo,
    /// Transient lock/share violation - retried until the budget is spent
    Io,
    /// Malformed structured content
    Parse,
    /// Bytes are not valid text under the selected encoding
    Encoding,
    /// Watcher could not be armed for the target
    WatcherSetup,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::FatalIo => "fatal io",
            Self::Io => "io",
            Self::Parse => "parse",
            Self::Encoding => "encoding",
            Self::WatcherSetup => "watcher setup",
        }
    }
}

/// Errors produced by the loader, renderer and watcher.
#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("{0}")]
    FatalIo(#[source] io::Error),

    #[error("{0}")]
    Io(#[source] io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {encoding} text: {detail}")]
    Encoding {
        encoding: &'static str,
        detail: String,
    },

    #[error("cannot watch `{}`: {reason}", path.display())]
    WatcherSetup { path: PathBuf, reason: String },
}

impl ReloadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FatalIo(_) => ErrorKind::FatalIo,
            Self::Io(_) => ErrorKind::Io,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Encoding { .. } => ErrorKind::Encoding,
            Self::WatcherSetup { .. } => ErrorKind::WatcherSetup,
        }
    }

    pub fn watcher_setup(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::WatcherSetup {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = ReloadError::FatalIo(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.kind(), ErrorKind::FatalIo);

        let err = ReloadError::Io(io::Error::other("locked"));
        assert_eq!(err.kind(), ErrorKind::Io);

        let err = ReloadError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = ReloadError::watcher_setup("/nowhere", "directory does not exist");
        assert_eq!(err.kind(), ErrorKind::WatcherSetup);
    }

    #[test]
    fn test_display() {
        let err = ReloadError::watcher_setup("/nowhere/a.json", "directory does not exist");
        let display = err.to_string();
        assert!(display.contains("/nowhere/a.json"));
        assert!(display.contains("directory does not exist"));

        let err = ReloadError::Encoding {
            encoding: "utf-8",
            detail: "invalid byte at 3".to_string(),
        };
        assert_eq!(err.to_string(), "invalid utf-8 text: invalid byte at 3");
    }
}

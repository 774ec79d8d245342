//! Where file bytes come from.

use std::io;
use std::path::Path;

/// One complete read of a file.
///
/// Every call returns a fresh buffer; implementations must not hand back
/// bytes from an earlier attempt.
pub trait FileSource: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FileSource for FsSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Whether a read error is expected to clear up if we try again shortly.
///
/// Missing files, permission problems and bad paths will not fix themselves;
/// everything else (sharing violations, busy files, interrupted reads) is
/// treated as another process holding the file.
pub fn is_transient(err: &io::Error) -> bool {
    #[cfg(windows)]
    {
        // ERROR_SHARING_VIOLATION, ERROR_LOCK_VIOLATION
        if matches!(err.raw_os_error(), Some(32 | 33)) {
            return true;
        }
    }

    !matches!(
        err.kind(),
        io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::InvalidInput
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_source_reads_whole_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        std::fs::write(&path, "line 1\nline 2\n").unwrap();

        assert_eq!(FsSource.read(&path).unwrap(), b"line 1\nline 2\n");
    }

    #[test]
    fn test_fs_source_missing_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = FsSource.read(&temp.path().join("missing.txt")).unwrap_err();
        assert!(!is_transient(&err));
    }

    #[test]
    fn test_classification() {
        use io::ErrorKind::*;

        for kind in [NotFound, PermissionDenied, IsADirectory, InvalidInput] {
            assert!(!is_transient(&io::Error::from(kind)), "{kind:?}");
        }
        for kind in [ResourceBusy, WouldBlock, Interrupted, TimedOut, Other] {
            assert!(is_transient(&io::Error::from(kind)), "{kind:?}");
        }
    }
}

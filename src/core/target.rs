//! The single file being watched.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::{ContentKind, ReloadError};
use crate::utils::path::absolute_keep_name;

/// Identifies exactly one file: its directory, its name and how to render it.
///
/// Immutable once armed. Selecting another file builds a new target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    directory: PathBuf,
    file_name: OsString,
    kind: ContentKind,
}

impl WatchTarget {
    /// Build a target from a user-selected path.
    ///
    /// The path is made absolute first, so `notes.txt` resolves against the
    /// current directory. The file name is kept as typed: a symlink is
    /// watched and classified by its own name, not its target's.
    pub fn from_path(path: &Path) -> Result<Self, ReloadError> {
        let absolute = absolute_keep_name(path);

        let file_name = absolute
            .file_name()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ReloadError::watcher_setup(path, "invalid file name"))?
            .to_os_string();

        let directory = absolute
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .ok_or_else(|| ReloadError::watcher_setup(path, "invalid directory path"))?
            .to_path_buf();

        Ok(Self {
            kind: ContentKind::from_path(&absolute),
            directory,
            file_name,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Full path of the watched file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Whether `path` names the watched file (compared by file name only,
    /// since the watcher observes a single directory).
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name() == Some(self.file_name.as_os_str())
    }

    /// Short name for log and status lines.
    pub fn display_name(&self) -> std::borrow::Cow<'_, str> {
        self.file_name.to_string_lossy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::utils::path::normalize_path;
    use tempfile::TempDir;

    #[test]
    fn test_from_existing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("data.json");
        std::fs::write(&file, "{}").unwrap();

        let target = WatchTarget::from_path(&file).unwrap();
        assert_eq!(target.file_name(), "data.json");
        assert_eq!(target.kind(), ContentKind::Structured);
        assert_eq!(target.directory(), normalize_path(temp.path()));
        assert_eq!(target.path(), normalize_path(&file));
    }

    #[test]
    fn test_from_missing_file_keeps_name() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("later.txt");

        let target = WatchTarget::from_path(&file).unwrap();
        assert_eq!(target.file_name(), "later.txt");
        assert_eq!(target.kind(), ContentKind::PlainText);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_keeps_link_name_and_kind() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real.txt");
        let link = temp.path().join("data.json");
        std::fs::write(&real, r#"{"a":1}"#).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let target = WatchTarget::from_path(&link).unwrap();
        assert_eq!(target.file_name(), "data.json");
        assert_eq!(target.kind(), ContentKind::Structured);
        assert_eq!(target.directory(), normalize_path(temp.path()));
        assert!(target.matches(&link));
        assert!(!target.matches(&real));
    }

    #[test]
    fn test_root_has_no_file_name() {
        let err = WatchTarget::from_path(Path::new("/")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WatcherSetup);
    }

    #[test]
    fn test_matches_by_file_name() {
        let temp = TempDir::new().unwrap();
        let target = WatchTarget::from_path(&temp.path().join("a.json")).unwrap();

        assert!(target.matches(&temp.path().join("a.json")));
        assert!(target.matches(Path::new("/elsewhere/a.json")));
        assert!(!target.matches(&temp.path().join("b.json")));
        assert!(!target.matches(&temp.path().join("a.json.swp")));
    }
}

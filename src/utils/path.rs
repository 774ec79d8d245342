//! Path normalization utilities.
//!
//! - `normalize_path` - absolute form of a path that may not exist yet
//! - `absolute_keep_name` - absolute form that leaves the last component alone
//! - `expand_input_path` - turn a typed/pasted line into a path

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Canonical parent joined with the file name (file not created yet)
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    absolute_keep_name(path)
}

/// Make `path` absolute, canonicalizing only its parent directory.
///
/// The final component is kept as given, so a symlink stays the link
/// rather than becoming its target.
pub fn absolute_keep_name(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };

    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .map_or_else(|_| absolute.clone(), |dir| dir.join(name)),
        _ => absolute,
    }
}

/// Convert one line of user input into a path.
///
/// Trims whitespace, strips one pair of matching surrounding quotes (as left
/// by drag-and-drop in most terminals) and expands a leading `~`.
///
/// Returns `None` for blank input.
pub fn expand_input_path(line: &str) -> Option<PathBuf> {
    let trimmed = line.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        return None;
    }

    Some(PathBuf::from(shellexpand::tilde(unquoted).as_ref()))
}

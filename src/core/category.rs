//! Content kind detection.

use std::path::Path;

/// Kind of watched file, determines rendering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// JSON document (.json) - parsed and pretty-printed
    Structured,
    /// Anything else - decoded and shown verbatim
    PlainText,
}

impl ContentKind {
    /// Detect content kind from file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("json") {
            Self::Structured
        } else {
            Self::PlainText
        }
    }

    /// Detect content kind from file path.
    ///
    /// Paths without an extension are plain text.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(Self::PlainText, Self::from_extension)
    }

    /// Display name for this content kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Structured => "json",
            Self::PlainText => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ContentKind::from_extension("json"), ContentKind::Structured);
        assert_eq!(ContentKind::from_extension("JSON"), ContentKind::Structured);
        assert_eq!(ContentKind::from_extension("Json"), ContentKind::Structured);
        assert_eq!(ContentKind::from_extension("txt"), ContentKind::PlainText);
        assert_eq!(ContentKind::from_extension("jsonl"), ContentKind::PlainText);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ContentKind::from_path(Path::new("/tmp/config.JSON")),
            ContentKind::Structured
        );
        assert_eq!(
            ContentKind::from_path(Path::new("notes.txt")),
            ContentKind::PlainText
        );
        assert_eq!(
            ContentKind::from_path(Path::new("Makefile")),
            ContentKind::PlainText
        );
        // A dotfile named `.json` has no extension
        assert_eq!(
            ContentKind::from_path(Path::new("/tmp/.json")),
            ContentKind::PlainText
        );
    }
}

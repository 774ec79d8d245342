use std::path::PathBuf;

/// What happened to the watched file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Created, or renamed into place
    Created,
    Modified,
}

impl ChangeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
        }
    }
}

/// One relevant OS event for the watched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotice {
    /// Generation of the handle that produced this notice
    pub generation: u64,
    pub kind: ChangeKind,
    /// Path reported by the OS
    pub path: PathBuf,
}

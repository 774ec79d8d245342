use std::path::Path;

use notify::EventKind;
use notify::event::{AccessKind, AccessMode, MetadataKind, ModifyKind, RenameMode};

use super::types::{ChangeKind, ChangeNotice};
use crate::core::WatchTarget;

/// Map a raw notify event kind to a change worth reloading for.
///
/// Removals, reads and metadata noise other than mtime return `None`.
pub(super) fn change_kind(kind: &EventKind) -> Option<ChangeKind> {
    match kind {
        EventKind::Create(_) => Some(ChangeKind::Created),
        EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Both)) => {
            Some(ChangeKind::Created)
        }
        EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => Some(ChangeKind::Modified),
        EventKind::Modify(ModifyKind::Metadata(MetadataKind::WriteTime)) => {
            Some(ChangeKind::Modified)
        }
        EventKind::Access(AccessKind::Close(AccessMode::Write)) => Some(ChangeKind::Modified),
        _ => None,
    }
}

/// Build the notice for `event` if it concerns `target`.
pub(super) fn classify(
    event: &notify::Event,
    target: &WatchTarget,
    generation: u64,
) -> Option<ChangeNotice> {
    let kind = change_kind(&event.kind)?;
    let path = relevant_path(event, target)?;

    Some(ChangeNotice {
        generation,
        kind,
        path: path.to_path_buf(),
    })
}

fn relevant_path<'a>(event: &'a notify::Event, target: &WatchTarget) -> Option<&'a Path> {
    // [from, to]: only a rename onto the target counts
    if matches!(
        event.kind,
        EventKind::Modify(ModifyKind::Name(RenameMode::Both))
    ) {
        return event
            .paths
            .last()
            .map(|p| p.as_path())
            .filter(|p| target.matches(p));
    }

    event
        .paths
        .iter()
        .map(|p| p.as_path())
        .find(|p| target.matches(p))
}

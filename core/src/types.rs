//! Shared data structures exchanged between the core and the hosting shell.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Classification of a filesystem object discovered during a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn is_folder(self) -> bool {
        matches!(self, EntryKind::Folder)
    }
}

/// One filesystem object (file or folder) discovered while listing a folder.
///
/// `path` identifies the object at listing time; entries are snapshots and may go
/// stale if the underlying object is removed or renamed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub name: String,
    /// Reported byte length for files; 0 for folders.
    pub size_bytes: u64,
}

impl Entry {
    /// Display label for a path: the last component, or the full path for a
    /// filesystem root (which has none).
    pub fn display_name(path: &Path) -> String {
        match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.to_string_lossy().into_owned(),
        }
    }
}

/// One element of the navigation stack: the folder navigated into, plus the
/// label used for stack bookkeeping.
///
/// Labels are derived from the path and are display-unique only; two pushes of
/// the same folder produce two distinct frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFrame {
    pub entry: Entry,
    pub label: String,
}

impl HistoryFrame {
    pub fn new(entry: Entry) -> Self {
        let label = entry.path.to_string_lossy().into_owned();
        Self { entry, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_uses_last_component() {
        assert_eq!(Entry::display_name(Path::new("/home/user/docs")), "docs");
        assert_eq!(Entry::display_name(Path::new("notes.txt")), "notes.txt");
    }

    #[test]
    fn display_name_of_root_is_the_root_itself() {
        assert_eq!(Entry::display_name(Path::new("/")), "/");
    }

    #[test]
    fn frame_label_tracks_the_entry_path() {
        let entry = Entry {
            path: PathBuf::from("/srv/shared"),
            kind: EntryKind::Folder,
            name: "shared".to_string(),
            size_bytes: 0,
        };
        let frame = HistoryFrame::new(entry);
        assert_eq!(frame.label, "/srv/shared");
    }
}

//! Directory enumeration and entry construction.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Error;
use crate::types::{Entry, EntryKind};

use super::Result;

/// Enumerate the immediate children of `dir`, in the order the filesystem
/// reports them.
///
/// No sorting and no filtering: the result is exactly the set of children.
/// Ordering and grouping for display belong to the shell. An empty folder
/// yields an empty `Ok`; a path that cannot be enumerated (missing, not a
/// directory, access denied) yields [`Error::NotAListing`].
pub fn list_entries(dir: &Path) -> Result<Vec<Entry>> {
    let reader = fs::read_dir(dir).map_err(|source| not_a_listing(dir, source))?;

    let mut entries = Vec::new();
    for child in reader {
        let child = child.map_err(|source| not_a_listing(dir, source))?;
        entries.push(describe(child.path()));
    }

    debug!(dir = %dir.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

/// Describe `path` itself as an [`Entry`], for seeding a navigation root or
/// re-describing a known path. Fails with [`Error::NotAListing`] when the path
/// cannot be inspected.
pub fn entry_for(path: &Path) -> Result<Entry> {
    let meta = fs::metadata(path).map_err(|source| not_a_listing(path, source))?;
    let kind = if meta.is_dir() { EntryKind::Folder } else { EntryKind::File };
    let size_bytes = if kind.is_folder() { 0 } else { meta.len() };

    Ok(Entry { name: Entry::display_name(path), path: path.to_path_buf(), kind, size_bytes })
}

fn not_a_listing(path: &Path, source: std::io::Error) -> Error {
    Error::NotAListing { path: path.to_path_buf(), source }
}

/// Best-effort description of a child found during enumeration. Metadata is
/// read through symlinks so a link to a folder navigates like a folder; a
/// child whose metadata cannot be read (e.g. a dangling link) stays listed as
/// a zero-length file rather than dropping out of the result.
fn describe(path: PathBuf) -> Entry {
    let name = Entry::display_name(&path);
    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => {
            Entry { path, kind: EntryKind::Folder, name, size_bytes: 0 }
        }
        Ok(meta) => Entry { path, kind: EntryKind::File, name, size_bytes: meta.len() },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "child metadata unavailable");
            Entry { path, kind: EntryKind::File, name, size_bytes: 0 }
        }
    }
}

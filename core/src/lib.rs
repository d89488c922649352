//! Navigation core for the file manager: directory listing and visited-folder history.
//!
//! The hosting shell owns rendering, permission prompts, and file launching; it drives
//! this crate by listing folders and recording the user's forward/back movement in a
//! [`NavigationHistory`], reacting to the change notifications it emits.

#![deny(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod fs;
pub mod log;
pub mod nav;
pub mod types;

pub type Result<T> = std::result::Result<T, error::Error>;

pub use config::SessionConfig;
pub use error::Error;
pub use nav::{NavigationHistory, PopOutcome};
pub use types::{Entry, EntryKind, HistoryFrame};

/// Crate version string, surfaced to the shell for diagnostics.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_semver_version() {
        assert!(version().contains('.'));
    }

    #[test]
    fn constructs_basic_types() {
        let entry = Entry {
            path: std::path::PathBuf::from("/tmp/music"),
            kind: EntryKind::Folder,
            name: "music".to_string(),
            size_bytes: 0,
        };
        let frame = HistoryFrame::new(entry.clone());

        assert_eq!(frame.entry, entry);
        assert_eq!(frame.label, "/tmp/music");
    }
}

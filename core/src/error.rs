//! Error taxonomy for the navigation core.
//!
//! Three conditions cover every fallible operation:
//!
//! - [`Error::NotAListing`] - a path could not be enumerated or inspected; the
//!   shell shows an empty/error state regardless of the underlying cause.
//! - [`Error::InvalidHistoryState`] - a history operation ran out of lifecycle
//!   order; an integration bug, not a runtime condition.
//! - [`Error::InvalidEntryKind`] - a non-folder entry was used as a navigation
//!   target; likewise an integration bug.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The path cannot be enumerated as a directory. Missing, not-a-directory,
    /// and access-denied all surface here; the source error carries the detail.
    #[error("cannot list {path:?}")]
    NotAListing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A navigation history operation was invoked out of lifecycle order.
    #[error("navigation history misuse: {0}")]
    InvalidHistoryState(&'static str),

    /// Only folders can be navigated into.
    #[error("not a folder, cannot navigate into {path:?}")]
    InvalidEntryKind { path: PathBuf },
}

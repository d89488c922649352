//! File system access layer: directory enumeration behind one contract.

pub mod listing;

pub use listing::{entry_for, list_entries};

/// Shared result type for fs operations.
pub type Result<T> = crate::Result<T>;

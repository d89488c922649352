//! Visited-folder history driving forward and back navigation.

pub mod history;

pub use history::{NavigationHistory, PopOutcome};

/// Shared result type for navigation operations.
pub type Result<T> = crate::Result<T>;

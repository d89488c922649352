//! The stack of visited folders and its change notification.

use std::fmt;

use tracing::debug;

use crate::error::Error;
use crate::types::{Entry, HistoryFrame};

use super::Result;

type ChangeObserver = Box<dyn FnMut(&HistoryFrame)>;

/// Outcome of a back-navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopOutcome {
    /// The top frame was removed; the new top is the folder to show.
    Popped(HistoryFrame),
    /// Only the root frame remains. Nothing was removed; the caller should
    /// treat the back gesture as a request to leave the session.
    AtRoot,
}

/// Ordered stack of the folders a session has visited.
///
/// One instance belongs to one UI session and is driven from one logical
/// thread of control; there is no internal locking. The stack holds at least
/// the root frame from [`initialize`](Self::initialize) onwards, and ordinary
/// back navigation never removes that root.
///
/// A single observer slot delivers the new top frame synchronously after every
/// mutation that changes it. Registering a new observer replaces the previous
/// one; with no observer registered the event is dropped, never queued.
#[derive(Default)]
pub struct NavigationHistory {
    frames: Vec<HistoryFrame>,
    on_change: Option<ChangeObserver>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the stack with the session root. Must be called exactly once
    /// before any other stack operation; the root must be a folder. Notifies
    /// the observer with the root frame.
    pub fn initialize(&mut self, root: Entry) -> Result<()> {
        if !self.frames.is_empty() {
            return Err(Error::InvalidHistoryState("initialize called twice"));
        }
        if !root.kind.is_folder() {
            return Err(Error::InvalidEntryKind { path: root.path });
        }

        debug!(root = %root.path.display(), "navigation history initialized");
        self.frames.push(HistoryFrame::new(root));
        self.notify();
        Ok(())
    }

    /// Record forward navigation into `entry`, which must be a folder.
    /// Notifies the observer with the new top frame.
    pub fn push(&mut self, entry: Entry) -> Result<()> {
        self.top("push called before initialize")?;
        if !entry.kind.is_folder() {
            return Err(Error::InvalidEntryKind { path: entry.path });
        }

        self.frames.push(HistoryFrame::new(entry));
        self.notify();
        Ok(())
    }

    /// Remove and return the top frame, unless only the root remains, in
    /// which case nothing mutates and [`PopOutcome::AtRoot`] is returned.
    /// Notifies the observer only when a frame was actually removed.
    pub fn pop(&mut self) -> Result<PopOutcome> {
        self.top("pop called before initialize")?;
        if self.frames.len() == 1 {
            return Ok(PopOutcome::AtRoot);
        }

        let frame = self.frames.pop().expect("stack holds more than the root frame");
        self.notify();
        Ok(PopOutcome::Popped(frame))
    }

    /// The current top frame, without mutating.
    pub fn peek(&self) -> Result<&HistoryFrame> {
        self.top("peek called before initialize")
    }

    /// Current stack size; at least 1 once initialized.
    pub fn depth(&self) -> Result<usize> {
        self.top("depth called before initialize")?;
        Ok(self.frames.len())
    }

    /// Register the observer invoked with the new top frame after every
    /// mutation that changes it, replacing any previous observer. The slot may
    /// be assigned at any point in the lifecycle, including before
    /// [`initialize`](Self::initialize).
    pub fn set_on_change<F>(&mut self, observer: F)
    where
        F: FnMut(&HistoryFrame) + 'static,
    {
        self.on_change = Some(Box::new(observer));
    }

    /// Remove the registered observer, if any.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    fn top(&self, misuse: &'static str) -> Result<&HistoryFrame> {
        self.frames.last().ok_or(Error::InvalidHistoryState(misuse))
    }

    fn notify(&mut self) {
        if let (Some(observer), Some(top)) = (self.on_change.as_mut(), self.frames.last()) {
            observer(top);
        }
    }
}

impl fmt::Debug for NavigationHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationHistory")
            .field("frames", &self.frames)
            .field("observer", &self.on_change.is_some())
            .finish()
    }
}

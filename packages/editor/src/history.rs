//! # History Log
//!
//! Linear undo/redo over whole-document snapshots.
//!
//! ## Design
//!
//! - Every committing action pushes a snapshot of the resulting document
//! - Entries past the cursor (undone states) are discarded on push
//! - Undo/redo only move the cursor; they never add entries
//! - `entries[cursor]` is the current document as of its last commit;
//!   uncommitted flag changes (device, preview, live) live only in the
//!   working document and are replaced by the snapshot on undo/redo
//! - Optional bound on the number of entries (oldest dropped first)
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = HistoryLog::new(EditorDocument::new());
//!
//! history.push(next_document);
//! let previous = history.undo();
//! let next = history.redo();
//! ```

use crate::document::EditorDocument;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog {
    entries: Vec<EditorDocument>,

    cursor: usize,

    /// Maximum number of entries kept (0 = unlimited)
    max_entries: usize,
}

impl HistoryLog {
    /// Create a log holding a single initial snapshot
    pub fn new(initial: EditorDocument) -> Self {
        Self::with_max_entries(initial, 0)
    }

    /// Create a log that keeps at most `max_entries` snapshots
    pub fn with_max_entries(initial: EditorDocument, max_entries: usize) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            max_entries,
        }
    }

    /// Commit a snapshot, discarding the redo branch
    pub(crate) fn push(&mut self, snapshot: EditorDocument) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);

        // Trim if exceeded max entries
        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }

        self.cursor = self.entries.len() - 1;
    }

    /// Step back; returns the now-current snapshot, or `None` at the start
    pub(crate) fn undo(&mut self) -> Option<&EditorDocument> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward; returns the now-current snapshot, or `None` at the tip
    pub(crate) fn redo(&mut self) -> Option<&EditorDocument> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Drop every entry and start over from `initial`
    pub(crate) fn reset(&mut self, initial: EditorDocument) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }

    pub fn current(&self) -> &EditorDocument {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[EditorDocument] {
        &self.entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(EditorDocument::new())
    }
}

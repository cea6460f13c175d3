//! Linear undo/redo history over document snapshots.

use crate::document::{Document, ShapeList};
use std::sync::Arc;

/// A sequence of shape-list snapshots with a cursor on the current one.
///
/// Entry 0 is the empty document the engine starts from. Snapshots share
/// structure with the live document, so a commit does not copy the list.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<ShapeList>,
    cursor: usize,
    /// Maximum number of entries to keep (`None` = unbounded).
    limit: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Start with a single empty-document entry.
    pub fn new() -> Self {
        Self {
            entries: vec![Arc::new(Vec::new())],
            cursor: 0,
            limit: None,
        }
    }

    /// Keep at most `limit` entries, dropping the oldest ones.
    ///
    /// Once entries have been dropped, entry 0 is no longer the initial
    /// empty document.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|l| l.max(1));
        self.enforce_limit();
        self
    }

    /// Record the document's current shapes as the newest entry.
    ///
    /// Anything after the cursor (the undone future) is discarded first.
    pub fn commit(&mut self, document: &Document) {
        let discarded = self.entries.len() - self.cursor - 1;
        if discarded > 0 {
            log::debug!("Discarding {} redo entries", discarded);
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(document.snapshot());
        self.cursor = self.entries.len() - 1;
        self.enforce_limit();
        log::debug!(
            "Committed history entry {} ({} shapes)",
            self.cursor,
            document.len()
        );
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else { return };
        if self.entries.len() > limit {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
    }

    /// Step back one entry and return it. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<ShapeList> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        log::debug!("Undo to history entry {}", self.cursor);
        Some(Arc::clone(&self.entries[self.cursor]))
    }

    /// Step forward one entry and return it. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<ShapeList> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        log::debug!("Redo to history entry {}", self.cursor);
        Some(Arc::clone(&self.entries[self.cursor]))
    }

    /// The entry representing the current committed state.
    pub fn current(&self) -> ShapeList {
        Arc::clone(&self.entries[self.cursor])
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

    /// Always false: there is at least the initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

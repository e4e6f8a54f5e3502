//! View history: a linear list of recorded views with a cursor.
//!
//! Recording after stepping back discards the abandoned forward branch, the
//! same way browser history behaves. Stepping past either end is a no-op.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::Serialize;

use crate::view::View;

/// Which navigation buttons the toolbar should enable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistoryState {
    pub can_back: bool,
    pub can_forward: bool,
}

/// Ordered views in chronological order plus the index of the current one.
///
/// Invariant: `cursor < entries.len()` whenever `entries` is non-empty.
#[derive(Debug, Clone, Default)]
pub struct ViewHistory {
    entries: Vec<View>,
    cursor: usize,
}

impl ViewHistory {
    /// An empty history. The first [`record`](Self::record) becomes entry 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A history holding only `home`.
    #[must_use]
    pub fn seeded(home: View) -> Self {
        Self { entries: vec![home], cursor: 0 }
    }

    /// Insert `view` after the cursor, dropping everything that followed it,
    /// and move the cursor onto the new entry.
    pub fn record(&mut self, view: View) {
        if self.entries.is_empty() {
            self.entries.push(view);
            self.cursor = 0;
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(view);
        self.cursor += 1;
    }

    #[must_use]
    pub fn can_step_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_step_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Move one entry back and return the new current view.
    ///
    /// At the first entry nothing moves and the current view is returned.
    /// `None` only for an empty history.
    pub fn step_back(&mut self) -> Option<&View> {
        if self.can_step_back() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Move one entry forward and return the new current view.
    ///
    /// At the last entry nothing moves and the current view is returned.
    /// `None` only for an empty history.
    pub fn step_forward(&mut self) -> Option<&View> {
        if self.can_step_forward() {
            self.cursor += 1;
        }
        self.current()
    }

    #[must_use]
    pub fn current(&self) -> Option<&View> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn entries(&self) -> &[View] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Button-enabled flags for the current position.
    #[must_use]
    pub fn state(&self) -> HistoryState {
        HistoryState { can_back: self.can_step_back(), can_forward: self.can_step_forward() }
    }
}

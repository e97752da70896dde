//! Visited-state history with an undo/redo cursor.
//!
//! History is a linear list of state names plus a cursor pointing at the
//! active entry. Moving the cursor never loses entries; only recording a
//! new branch or collapsing the history does.

use serde::Serialize;

/// Ordered record of visited states and the active position within it.
///
/// The history is never empty and `position` always indexes a valid
/// entry, so [`History::current`] cannot fail.
///
/// # Example
///
/// ```rust
/// use waymark::core::History;
///
/// let history = History::new("Draft");
///
/// assert_eq!(history.current(), "Draft");
/// assert_eq!(history.position(), 0);
/// assert_eq!(history.entries(), ["Draft"]);
/// assert!(!history.can_undo());
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<String>,
    position: usize,
}

impl History {
    /// Create a history holding only `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            position: 0,
        }
    }

    /// State at the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.position]
    }

    /// Zero-based cursor into [`History::entries`].
    pub fn position(&self) -> usize {
        self.position
    }

    /// All recorded states, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for symmetry with [`History::len`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Append `state` at the end and move the cursor onto it.
    ///
    /// Entries after the cursor are kept in place, ahead of the new entry.
    pub(crate) fn push(&mut self, state: String) {
        self.entries.push(state);
        self.position = self.entries.len() - 1;
    }

    /// Drop every entry after the cursor, then append `state`.
    pub(crate) fn branch(&mut self, state: String) {
        self.entries.truncate(self.position + 1);
        self.push(state);
    }

    /// Move the cursor back one entry. Returns `false` at the oldest entry.
    pub(crate) fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Move the cursor forward one entry. Returns `false` at the newest entry.
    pub(crate) fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Keep only the current entry.
    pub(crate) fn collapse(&mut self) {
        let current = self.entries.swap_remove(self.position);
        self.entries.clear();
        self.entries.push(current);
        self.position = 0;
    }

    /// Start over from `initial`.
    pub(crate) fn restart(&mut self, initial: &str) {
        self.entries.clear();
        self.entries.push(initial.to_owned());
        self.position = 0;
    }
}

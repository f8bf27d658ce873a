//! Live buffer state and the machinery that makes edits reversible.
//!
//! [`EditorState`] owns one buffer/selection pair; the two are created
//! together and share a lifetime. Its [`ReplayPrimitives`] implementation is
//! the only mutation path in the engine: live edits go through it and then
//! record a command, history replay goes through it and records nothing.

mod clipboard;
mod history;

pub use clipboard::Clipboard;
pub use history::{
    ActionStack, Deletion, EditCommand, HISTORY_CAPACITY, HistoryError, Insertion,
};

use quill_model::{Caret, Selection, SelectionObserver, SelectionSpan};
use quill_text::{LineMetrics, TextBuffer, TextError};
use tracing::trace;

/// Non-recording mutation primitives. Undo/redo replay drives these
/// directly; implementations must never touch the history themselves.
pub trait ReplayPrimitives {
    /// Insert `text` with its first codepoint at `at`; leaves the selection
    /// collapsed after the inserted text.
    fn replay_insert(&mut self, at: Caret, text: &str) -> Result<(), TextError>;

    /// Remove `count` codepoints starting at `at`; leaves the selection
    /// collapsed at `at`.
    fn replay_remove(&mut self, at: Caret, count: usize) -> Result<(), TextError>;

    /// Reinstate a selection verbatim.
    fn restore_selection(&mut self, selection: SelectionSpan);
}

/// One buffer's live state: the text, its selection, and the name change
/// notifications are tagged with.
#[derive(Debug)]
pub struct EditorState {
    name: String,
    buffer: TextBuffer,
    selection: Selection,
}

impl EditorState {
    pub fn new(name: impl Into<String>, content: &str) -> Self {
        Self {
            name: name.into(),
            buffer: TextBuffer::from_text(content),
            selection: Selection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn content(&self) -> String {
        self.buffer.content()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Swap the selection observer (selection state untouched).
    pub fn set_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.selection.set_observer(observer);
    }

    /// Selection snapshot with virtual columns resolved against the current
    /// line shape.
    pub fn resolved_selection(&self) -> SelectionSpan {
        self.selection.resolved(&self.buffer)
    }

    /// Selection as `(offset, length)` in codepoint space.
    pub fn selected_range(&self) -> (usize, usize) {
        self.selection.linear(&self.buffer)
    }

    /// Text currently covered by the selection; empty when collapsed.
    pub fn selected_text(&self) -> Result<String, TextError> {
        let (offset, len) = self.selected_range();
        self.buffer.get_range(offset, len)
    }

    pub fn cursor_up(&mut self, extend: bool) {
        self.selection.cursor_up(extend);
    }

    pub fn cursor_down(&mut self, extend: bool) {
        self.selection.cursor_down(extend, &self.buffer);
    }

    pub fn cursor_left(&mut self, extend: bool) {
        self.selection.cursor_left(extend, &self.buffer);
    }

    pub fn cursor_right(&mut self, extend: bool) {
        self.selection.cursor_right(extend, &self.buffer);
    }

    pub fn move_caret(&mut self, line_delta: isize, column_delta: isize) {
        self.selection
            .move_caret(line_delta, column_delta, &self.buffer);
    }

    pub fn set_selection(&mut self, start: Caret, end: Caret) {
        self.selection.set_selection(start, end, &self.buffer);
    }

    /// Select from the document origin to the end of the last line.
    pub fn select_all(&mut self) {
        let last = self.buffer.last_line();
        let len = self.buffer.line_length(last).unwrap_or(0);
        self.selection
            .set_selection(Caret::origin(), Caret::new(last, len), &self.buffer);
    }
}

impl ReplayPrimitives for EditorState {
    fn replay_insert(&mut self, at: Caret, text: &str) -> Result<(), TextError> {
        let offset = at.linear(&self.buffer);
        self.buffer.insert(offset, text)?;
        trace!(
            target: "state.edit",
            buffer = %self.name,
            offset,
            inserted = text.chars().count(),
            "insert"
        );
        let mut end = at;
        end.move_right(text.chars().count(), &self.buffer);
        self.selection
            .set_span(SelectionSpan::collapsed(end), &self.buffer);
        Ok(())
    }

    fn replay_remove(&mut self, at: Caret, count: usize) -> Result<(), TextError> {
        let offset = at.linear(&self.buffer);
        self.buffer.delete(offset, count)?;
        trace!(
            target: "state.edit",
            buffer = %self.name,
            offset,
            removed = count,
            "delete"
        );
        self.selection
            .set_span(SelectionSpan::collapsed(at), &self.buffer);
        Ok(())
    }

    fn restore_selection(&mut self, selection: SelectionSpan) {
        self.selection.set_span(selection, &self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_insert_places_caret_after_text() {
        let mut state = EditorState::new("t", "hello");
        state.replay_insert(Caret::new(0, 5), " world").unwrap();
        assert_eq!(state.content(), "hello world");
        assert!(state.selection().is_collapsed());
        assert_eq!(state.selection().start(), Caret::new(0, 11));
    }

    #[test]
    fn replay_insert_walks_across_inserted_newlines() {
        let mut state = EditorState::new("t", "ab");
        state.replay_insert(Caret::new(0, 1), "x\ny").unwrap();
        assert_eq!(state.content(), "ax\nyb");
        assert_eq!(state.selection().start(), Caret::new(1, 1));
    }

    #[test]
    fn replay_remove_collapses_at_deletion_point() {
        let mut state = EditorState::new("t", "hello world");
        state.replay_remove(Caret::new(0, 5), 6).unwrap();
        assert_eq!(state.content(), "hello");
        assert_eq!(state.selection().start(), Caret::new(0, 5));
        assert!(state.selection().is_collapsed());
    }

    #[test]
    fn replay_errors_propagate() {
        let mut state = EditorState::new("t", "ab");
        assert!(state.replay_remove(Caret::new(0, 1), 5).is_err());
        assert_eq!(state.content(), "ab");
    }

    #[test]
    fn select_all_spans_whole_document() {
        let mut state = EditorState::new("t", "ab\ncd");
        state.select_all();
        assert_eq!(state.selection().start(), Caret::origin());
        assert_eq!(state.selection().end(), Caret::new(1, 2));
        assert_eq!(state.selected_text().unwrap(), "ab\ncd");
    }

    #[test]
    fn selected_text_of_collapsed_selection_is_empty() {
        let state = EditorState::new("t", "abc");
        assert_eq!(state.selected_text().unwrap(), "");
    }
}

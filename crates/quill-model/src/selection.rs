use std::fmt;

use quill_text::LineMetrics;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::caret::Caret;

/// Immutable snapshot of a selection's endpoints. This is what edit
/// commands and notifications carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSpan {
    pub start: Caret,
    pub end: Caret,
}

impl SelectionSpan {
    pub const fn new(start: Caret, end: Caret) -> Self {
        Self { start, end }
    }

    /// A bare caret: both endpoints at `at`.
    pub const fn collapsed(at: Caret) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// `(offset, length)` in codepoint space. The lower offset wins, so the
    /// length is non-negative even for a span whose focus sits before its
    /// anchor mid-extension.
    pub fn linear(&self, metrics: &impl LineMetrics) -> (usize, usize) {
        let start = self.start.linear(metrics);
        let end = self.end.linear(metrics);
        (start.min(end), start.abs_diff(end))
    }
}

/// Receives every selection change, synchronously, inside the mutating
/// call.
pub trait SelectionObserver: Send {
    fn selection_changed(&mut self, selection: SelectionSpan);
}

/// Observer that discards notifications (detached engines, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {
    fn selection_changed(&mut self, _selection: SelectionSpan) {}
}

/// A pair of carets with anchor/focus movement semantics.
///
/// `start` is the anchor, `end` the focus: non-extending moves relocate
/// `start` and collapse `end` onto it; extending moves relocate `end` only,
/// leaving the anchor fixed. Explicit range placement (mouse drag, range
/// set) restores document order (`start <= end`) by endpoint swap; while a
/// leftward extension is in flight the raw endpoints may sit inverted, and
/// readers order them at conversion time ([`Selection::resolved`],
/// [`SelectionSpan::linear`]).
pub struct Selection {
    start: Caret,
    end: Caret,
    observer: Box<dyn SelectionObserver>,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::with_observer(Box::new(NoopObserver))
    }

    pub fn with_observer(observer: Box<dyn SelectionObserver>) -> Self {
        Self {
            start: Caret::origin(),
            end: Caret::origin(),
            observer,
        }
    }

    /// Swap in a new observer; the selection itself is untouched and nothing
    /// is emitted.
    pub fn set_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observer = observer;
    }

    pub fn start(&self) -> Caret {
        self.start
    }

    pub fn end(&self) -> Caret {
        self.end
    }

    /// Snapshot of the raw endpoints (virtual columns preserved, possibly
    /// inverted mid-extension).
    pub fn span(&self) -> SelectionSpan {
        SelectionSpan::new(self.start, self.end)
    }

    /// Snapshot with both endpoints clamped to the current line shape and
    /// put in document order. This is the form edit commands capture.
    pub fn resolved(&self, metrics: &impl LineMetrics) -> SelectionSpan {
        let a = self.start.resolve(metrics);
        let b = self.end.resolve(metrics);
        if b < a {
            SelectionSpan::new(b, a)
        } else {
            SelectionSpan::new(a, b)
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// `(offset, length)` of the selected range in codepoint space.
    pub fn linear(&self, metrics: &impl LineMetrics) -> (usize, usize) {
        self.span().linear(metrics)
    }

    /// Apply signed deltas to `start`, then collapse onto it. Caret-only
    /// relocation after a non-extending edit.
    pub fn move_caret(
        &mut self,
        line_delta: isize,
        column_delta: isize,
        metrics: &impl LineMetrics,
    ) {
        if line_delta >= 0 {
            self.start.move_down(line_delta as usize, metrics);
        } else {
            self.start.move_up(line_delta.unsigned_abs());
        }
        if column_delta >= 0 {
            self.start.move_right(column_delta as usize, metrics);
        } else {
            self.start.move_left(column_delta.unsigned_abs(), metrics);
        }
        self.collapse();
    }

    /// Assign both endpoints (permissively, per [`Caret::set`]), restore
    /// document order, notify.
    pub fn set_selection(&mut self, start: Caret, end: Caret, metrics: &impl LineMetrics) {
        self.start.set(start.line, start.column, metrics);
        self.end.set(end.line, end.column, metrics);
        self.normalize();
        self.notify();
    }

    /// [`Selection::set_selection`] from a snapshot.
    pub fn set_span(&mut self, span: SelectionSpan, metrics: &impl LineMetrics) {
        self.set_selection(span.start, span.end, metrics);
    }

    /// Vertical-up motion needs no line metrics: the top boundary clamps the
    /// column to zero without consulting the buffer.
    pub fn cursor_up(&mut self, extend: bool) {
        if extend {
            self.end.up();
            self.notify();
        } else {
            self.start.up();
            self.collapse();
        }
    }

    pub fn cursor_down(&mut self, extend: bool, metrics: &impl LineMetrics) {
        if extend {
            self.end.down(metrics);
            self.notify();
        } else {
            self.start.down(metrics);
            self.collapse();
        }
    }

    pub fn cursor_left(&mut self, extend: bool, metrics: &impl LineMetrics) {
        if extend {
            self.end.left(metrics);
            self.notify();
        } else {
            self.start.left(metrics);
            self.collapse();
        }
    }

    pub fn cursor_right(&mut self, extend: bool, metrics: &impl LineMetrics) {
        if extend {
            self.end.right(metrics);
            self.notify();
        } else {
            self.start.right(metrics);
            self.collapse();
        }
    }

    /// Collapse `end` onto `start`, notify.
    pub fn collapse(&mut self) {
        self.end = self.start;
        self.notify();
    }

    fn normalize(&mut self) {
        if self.end < self.start {
            std::mem::swap(&mut self.start, &mut self.end);
        }
    }

    fn notify(&mut self) {
        let span = self.span();
        trace!(
            target: "model.selection",
            start_line = span.start.line,
            start_column = span.start.column,
            end_line = span.end.line,
            end_column = span.end.column,
            "selection_changed"
        );
        self.observer.selection_changed(span);
    }
}

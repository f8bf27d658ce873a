//! Reversible edit commands and the pointer-indexed history that replays
//! them.

use quill_model::{Caret, SelectionSpan};
use quill_text::TextError;
use thiserror::Error;
use tracing::trace;

use crate::ReplayPrimitives;

/// Default number of history entries retained.
pub const HISTORY_CAPACITY: usize = 50;

/// A stored command's replay failed: the buffer no longer matches what the
/// command recorded (out-of-band mutation). The stack pointer stays where it
/// was.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history entry no longer applies: {source}")]
    Corrupted {
        #[from]
        source: TextError,
    },
}

/// Text inserted at a caret. The text is captured verbatim so replay never
/// re-derives it from buffer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Collapsed insert point, pre-insertion.
    pub at: Caret,
    pub text: String,
}

impl Insertion {
    fn undo(&self, target: &mut dyn ReplayPrimitives) -> Result<(), TextError> {
        target.replay_remove(self.at, self.text.chars().count())
    }

    fn redo(&self, target: &mut dyn ReplayPrimitives) -> Result<(), TextError> {
        target.replay_insert(self.at, &self.text)
    }
}

/// A removed range. `before` is the selection exactly as it stood ahead of
/// the deletion; undo reinstates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    /// The range removed from the buffer.
    pub span: SelectionSpan,
    /// Text that occupied `span` when the deletion ran.
    pub text: String,
    /// Selection prior to the deletion.
    pub before: SelectionSpan,
}

impl Deletion {
    fn undo(&self, target: &mut dyn ReplayPrimitives) -> Result<(), TextError> {
        target.replay_insert(self.span.start, &self.text)?;
        target.restore_selection(self.before);
        Ok(())
    }

    fn redo(&self, target: &mut dyn ReplayPrimitives) -> Result<(), TextError> {
        target.replay_remove(self.span.start, self.text.chars().count())
    }
}

/// One reversible edit, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Insertion(Insertion),
    Deletion(Deletion),
    /// A deletion followed by an insertion at the deletion point ("replace
    /// selection with typed text").
    Replacing {
        deletion: Deletion,
        insertion: Insertion,
    },
}

impl EditCommand {
    fn undo(&self, target: &mut dyn ReplayPrimitives) -> Result<(), TextError> {
        match self {
            Self::Insertion(insertion) => insertion.undo(target),
            Self::Deletion(deletion) => deletion.undo(target),
            Self::Replacing {
                deletion,
                insertion,
            } => {
                insertion.undo(target)?;
                deletion.undo(target)
            }
        }
    }

    fn redo(&self, target: &mut dyn ReplayPrimitives) -> Result<(), TextError> {
        match self {
            Self::Insertion(insertion) => insertion.redo(target),
            Self::Deletion(deletion) => deletion.redo(target),
            // Deleting first keeps the insertion's offsets correct.
            Self::Replacing {
                deletion,
                insertion,
            } => {
                deletion.redo(target)?;
                insertion.redo(target)
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Insertion(_) => "insertion",
            Self::Deletion(_) => "deletion",
            Self::Replacing { .. } => "replacing",
        }
    }
}

/// Bounded, pointer-indexed history. Entries below the pointer are the
/// undoable past; entries at and above it are the redoable future.
#[derive(Debug)]
pub struct ActionStack {
    stack: Vec<EditCommand>,
    pointer: usize,
    capacity: usize,
}

impl Default for ActionStack {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl ActionStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            stack: Vec::new(),
            pointer: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer < self.stack.len()
    }

    /// Record a new command. Any redo tail is discarded first (linear
    /// timeline, no forks), and at capacity the oldest entry is evicted with
    /// the pointer shifted down to match.
    pub fn push(&mut self, command: EditCommand) {
        if self.pointer < self.stack.len() {
            self.stack.truncate(self.pointer);
            trace!(target: "state.history", retained = self.pointer, "redo_tail_discarded");
        }
        if self.stack.len() == self.capacity {
            self.stack.remove(0);
            self.pointer -= 1;
            trace!(target: "state.history", "oldest_entry_evicted");
        }
        trace!(
            target: "state.history",
            kind = command.kind(),
            depth = self.stack.len() + 1,
            "push"
        );
        self.stack.push(command);
        self.pointer += 1;
    }

    /// Reverse the most recent command. `Ok(false)` when there is nothing to
    /// undo; a failed replay leaves the pointer unchanged.
    pub fn undo(&mut self, target: &mut dyn ReplayPrimitives) -> Result<bool, HistoryError> {
        if self.pointer == 0 {
            return Ok(false);
        }
        self.stack[self.pointer - 1].undo(target)?;
        self.pointer -= 1;
        trace!(target: "state.history", pointer = self.pointer, "undo");
        Ok(true)
    }

    /// Replay the next command. `Ok(false)` when there is nothing to redo; a
    /// failed replay leaves the pointer unchanged.
    pub fn redo(&mut self, target: &mut dyn ReplayPrimitives) -> Result<bool, HistoryError> {
        if self.pointer == self.stack.len() {
            return Ok(false);
        }
        self.stack[self.pointer].redo(target)?;
        self.pointer += 1;
        trace!(target: "state.history", pointer = self.pointer, "redo");
        Ok(true)
    }
}

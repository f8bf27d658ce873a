use quill_config::Config;
use quill_events::{Direction, EventSink, Notification, SelectionRelay};
use quill_model::{Caret, SelectionSpan};
use quill_state::{
    ActionStack, Clipboard, Deletion, EditCommand, EditorState, Insertion, ReplayPrimitives,
};
use tracing::trace;

use crate::EngineError;

/// The edit orchestrator: one buffer, its selection, its history, and the
/// collaborators the engine talks to.
///
/// Every editing operation is one atomic logical step from the caller's
/// point of view: capture the pre-mutation state, mutate the buffer, update
/// the selection, record the command, emit the change notification. Replay
/// (undo/redo) reuses the same primitives without recording.
pub struct Editor {
    state: EditorState,
    history: ActionStack,
    clipboard: Option<Clipboard>,
    events: EventSink,
}

impl Editor {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            history: ActionStack::default(),
            clipboard: None,
            events: EventSink::disabled(),
        }
    }

    /// Wire engine notifications (selection and buffer changes) to a host
    /// sink.
    pub fn with_events(mut self, sink: EventSink) -> Self {
        self.state
            .set_observer(Box::new(SelectionRelay::new(sink.clone())));
        self.events = sink;
        self
    }

    /// Attach the process-wide clipboard collaborator. Without one, copy,
    /// cut, and paste report [`EngineError::Unsupported`].
    pub fn with_clipboard(mut self, clipboard: Clipboard) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Apply engine configuration. Replaces the history, so call this before
    /// the first edit.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.history = ActionStack::new(config.history_capacity());
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn content(&self) -> String {
        self.state.content()
    }

    pub fn history(&self) -> &ActionStack {
        &self.history
    }

    // --- selection-only operations: no history entry, no buffer change ---

    pub fn move_cursor(&mut self, direction: Direction, extend: bool) {
        match direction {
            Direction::Up => self.state.cursor_up(extend),
            Direction::Down => self.state.cursor_down(extend),
            Direction::Left => self.state.cursor_left(extend),
            Direction::Right => self.state.cursor_right(extend),
        }
    }

    pub fn set_selection(&mut self, start: Caret, end: Caret) {
        self.state.set_selection(start, end);
    }

    pub fn select_all(&mut self) {
        self.state.select_all();
    }

    // --- editing operations ---

    /// Insert `text` at the caret, replacing the selection when one exists.
    pub fn type_text(&mut self, text: &str) -> Result<(), EngineError> {
        if text.is_empty() {
            return Ok(());
        }
        let command = self.splice(text)?;
        self.history.push(command);
        self.changed();
        Ok(())
    }

    /// Delete `count` codepoints leftward from a collapsed caret; with a
    /// range selected, the range is deleted instead and `count` is ignored.
    pub fn delete_backward(&mut self, count: usize) -> Result<(), EngineError> {
        let before = self.state.resolved_selection();
        let span = if before.is_collapsed() {
            let mut start = before.start;
            start.move_left(count, self.state.buffer());
            SelectionSpan::new(start, before.start)
        } else {
            before
        };
        self.remove_span(span, before)
    }

    /// Delete `count` codepoints rightward from a collapsed caret; with a
    /// range selected, the range is deleted instead and `count` is ignored.
    pub fn delete_forward(&mut self, count: usize) -> Result<(), EngineError> {
        let before = self.state.resolved_selection();
        let span = if before.is_collapsed() {
            let mut end = before.start;
            end.move_right(count, self.state.buffer());
            SelectionSpan::new(before.start, end)
        } else {
            before
        };
        self.remove_span(span, before)
    }

    /// Copy the selected text to the process clipboard. Read-only: no
    /// history entry, no notification.
    pub fn copy(&self) -> Result<(), EngineError> {
        let clipboard = self.require_clipboard("copy")?;
        clipboard.write(self.state.selected_text()?);
        Ok(())
    }

    /// Copy then delete the selection as one recorded step. A collapsed
    /// selection is a no-op (the clipboard keeps its contents).
    pub fn cut(&mut self) -> Result<(), EngineError> {
        let clipboard = self.require_clipboard("cut")?;
        let before = self.state.resolved_selection();
        if before.is_collapsed() {
            return Ok(());
        }
        clipboard.write(self.state.selected_text()?);
        self.remove_span(before, before)
    }

    /// Insert the clipboard contents, replacing the selection when one
    /// exists. An empty clipboard is a no-op.
    pub fn paste(&mut self) -> Result<(), EngineError> {
        let clipboard = self.require_clipboard("paste")?;
        let text = clipboard.read();
        if text.is_empty() {
            return Ok(());
        }
        let command = self.splice(&text)?;
        self.history.push(command);
        self.changed();
        Ok(())
    }

    // --- history ---

    /// Reverse the most recent edit. `Ok(false)` when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> Result<bool, EngineError> {
        let undone = self.history.undo(&mut self.state)?;
        if undone {
            self.changed();
        }
        Ok(undone)
    }

    /// Replay the most recently undone edit. `Ok(false)` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> Result<bool, EngineError> {
        let redone = self.history.redo(&mut self.state)?;
        if redone {
            self.changed();
        }
        Ok(redone)
    }

    // --- internals ---

    /// Mutation half of type/paste: delete any selected range, insert `text`
    /// at its start, and build the command describing the whole step.
    fn splice(&mut self, text: &str) -> Result<EditCommand, EngineError> {
        let before = self.state.resolved_selection();
        if before.is_collapsed() {
            let at = before.start;
            self.state.replay_insert(at, text)?;
            Ok(EditCommand::Insertion(Insertion {
                at,
                text: text.to_string(),
            }))
        } else {
            let removed = self.state.selected_text()?;
            let deletion = Deletion {
                span: before,
                text: removed,
                before,
            };
            let insertion = Insertion {
                at: before.start,
                text: text.to_string(),
            };
            self.state
                .replay_remove(before.start, deletion.text.chars().count())?;
            self.state.replay_insert(before.start, text)?;
            Ok(EditCommand::Replacing {
                deletion,
                insertion,
            })
        }
    }

    /// Shared deletion path; empty spans mutate nothing and are never
    /// recorded.
    fn remove_span(
        &mut self,
        span: SelectionSpan,
        before: SelectionSpan,
    ) -> Result<(), EngineError> {
        let (offset, len) = span.linear(self.state.buffer());
        if len == 0 {
            return Ok(());
        }
        let removed = self.state.buffer().get_range(offset, len)?;
        self.state.replay_remove(span.start, len)?;
        self.history.push(EditCommand::Deletion(Deletion {
            span,
            text: removed,
            before,
        }));
        self.changed();
        Ok(())
    }

    fn require_clipboard(&self, operation: &'static str) -> Result<Clipboard, EngineError> {
        self.clipboard
            .clone()
            .ok_or(EngineError::Unsupported { operation })
    }

    fn changed(&self) {
        trace!(target: "actions.edit", buffer = self.state.name(), "buffer_changed");
        self.events.emit(Notification::BufferChanged {
            buffer: self.state.name().to_string(),
        });
    }
}

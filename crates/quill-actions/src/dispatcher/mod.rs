//! Dispatcher applying [`EditRequest`]s to an [`Editor`].
//!
//! Decomposed into focused sub-modules:
//! * `motion`    - caret movement and selection placement
//! * `edit`      - text mutation (insert / delete backward / delete forward)
//! * `clipboard` - copy / cut / paste against the process clipboard
//! * `undo`      - undo / redo dispatch
//!
//! Every arm returns a recoverable result; a failed request leaves the
//! editor serviceable for the next one.

use quill_events::EditRequest;
use quill_model::Caret;

use crate::{Editor, EngineError};

mod clipboard;
mod edit;
mod motion;
mod undo;

/// Result of dispatching a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Whether the request changed buffer or selection state.
    pub dirty: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self { dirty: true }
    }

    pub fn clean() -> Self {
        Self { dirty: false }
    }
}

/// Apply one request to the editor.
pub fn dispatch(request: EditRequest, editor: &mut Editor) -> Result<DispatchResult, EngineError> {
    match request {
        EditRequest::MoveCaret { direction, extend } => {
            Ok(motion::handle_move(direction, extend, editor))
        }
        EditRequest::SetSelection {
            start_line,
            start_column,
            end_line,
            end_column,
        } => Ok(motion::handle_set_selection(
            Caret::new(start_line, start_column),
            Caret::new(end_line, end_column),
            editor,
        )),
        EditRequest::SelectAll => Ok(motion::handle_select_all(editor)),
        EditRequest::InsertText { text } => edit::handle_insert(&text, editor),
        EditRequest::DeleteBackward { count } => edit::handle_delete_backward(count, editor),
        EditRequest::DeleteForward { count } => edit::handle_delete_forward(count, editor),
        EditRequest::Copy => clipboard::handle_copy(editor),
        EditRequest::Cut => clipboard::handle_cut(editor),
        EditRequest::Paste => clipboard::handle_paste(editor),
        EditRequest::Undo => undo::handle_undo(editor),
        EditRequest::Redo => undo::handle_redo(editor),
    }
}

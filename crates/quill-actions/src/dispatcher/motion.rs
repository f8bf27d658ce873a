//! Caret movement and selection placement.

use quill_events::Direction;
use quill_model::Caret;
use tracing::trace;

use super::DispatchResult;
use crate::Editor;

pub(crate) fn handle_move(direction: Direction, extend: bool, editor: &mut Editor) -> DispatchResult {
    editor.move_cursor(direction, extend);
    trace!(target: "actions.dispatch", op = "move_caret", ?direction, extend, "motion");
    DispatchResult::dirty()
}

pub(crate) fn handle_set_selection(start: Caret, end: Caret, editor: &mut Editor) -> DispatchResult {
    editor.set_selection(start, end);
    trace!(
        target: "actions.dispatch",
        op = "set_selection",
        start_line = start.line,
        start_column = start.column,
        end_line = end.line,
        end_column = end.column,
        "motion"
    );
    DispatchResult::dirty()
}

pub(crate) fn handle_select_all(editor: &mut Editor) -> DispatchResult {
    editor.select_all();
    trace!(target: "actions.dispatch", op = "select_all", "motion");
    DispatchResult::dirty()
}

//! Text mutation dispatch (insert / delete backward / delete forward).
//!
//! Inserted text is never logged verbatim; traces carry lengths only.

use tracing::trace;

use super::DispatchResult;
use crate::{Editor, EngineError};

pub(crate) fn handle_insert(text: &str, editor: &mut Editor) -> Result<DispatchResult, EngineError> {
    editor.type_text(text)?;
    trace!(
        target: "actions.dispatch",
        op = "insert_text",
        inserted = text.chars().count(),
        "edit"
    );
    Ok(DispatchResult::dirty())
}

pub(crate) fn handle_delete_backward(
    count: usize,
    editor: &mut Editor,
) -> Result<DispatchResult, EngineError> {
    editor.delete_backward(count)?;
    trace!(target: "actions.dispatch", op = "delete_backward", count, "edit");
    Ok(DispatchResult::dirty())
}

pub(crate) fn handle_delete_forward(
    count: usize,
    editor: &mut Editor,
) -> Result<DispatchResult, EngineError> {
    editor.delete_forward(count)?;
    trace!(target: "actions.dispatch", op = "delete_forward", count, "edit");
    Ok(DispatchResult::dirty())
}

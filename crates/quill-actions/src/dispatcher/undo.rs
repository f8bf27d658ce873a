//! Undo / redo dispatch.

use tracing::trace;

use super::DispatchResult;
use crate::{Editor, EngineError};

pub(crate) fn handle_undo(editor: &mut Editor) -> Result<DispatchResult, EngineError> {
    let applied = editor.undo()?;
    trace!(target: "actions.dispatch", op = "undo", applied, "history");
    Ok(if applied {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    })
}

pub(crate) fn handle_redo(editor: &mut Editor) -> Result<DispatchResult, EngineError> {
    let applied = editor.redo()?;
    trace!(target: "actions.dispatch", op = "redo", applied, "history");
    Ok(if applied {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    })
}

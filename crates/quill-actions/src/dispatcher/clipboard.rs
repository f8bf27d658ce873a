//! Clipboard dispatch. The clipboard itself is an external, process-wide
//! collaborator; only the buffer mutation happens here.

use tracing::trace;

use super::DispatchResult;
use crate::{Editor, EngineError};

pub(crate) fn handle_copy(editor: &mut Editor) -> Result<DispatchResult, EngineError> {
    editor.copy()?;
    trace!(target: "actions.dispatch", op = "copy", "clipboard");
    Ok(DispatchResult::clean())
}

pub(crate) fn handle_cut(editor: &mut Editor) -> Result<DispatchResult, EngineError> {
    editor.cut()?;
    trace!(target: "actions.dispatch", op = "cut", "clipboard");
    Ok(DispatchResult::dirty())
}

pub(crate) fn handle_paste(editor: &mut Editor) -> Result<DispatchResult, EngineError> {
    editor.paste()?;
    trace!(target: "actions.dispatch", op = "paste", "clipboard");
    Ok(DispatchResult::dirty())
}

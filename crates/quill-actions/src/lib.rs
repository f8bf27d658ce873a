//! Edit orchestration: the façade composing buffer mutation, selection
//! update, history recording, and change notification into atomic logical
//! steps, plus the dispatcher and request-stream service driving it.

pub mod dispatcher;
mod editor;
pub mod service;

pub use editor::Editor;

use quill_state::HistoryError;
use quill_text::TextError;
use thiserror::Error;

/// Failures the orchestrator surfaces to the host. All recoverable: the
/// editor stays serviceable after any of them.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    History(#[from] HistoryError),
    /// A request the engine cannot serve, e.g. clipboard operations with no
    /// clipboard collaborator attached.
    #[error("unsupported operation: {operation}")]
    Unsupported { operation: &'static str },
}

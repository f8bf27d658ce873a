//! Serialized request loop: one stream per buffer.
//!
//! The host merges its input sources (keyboard stream, pointer drags) into
//! one ordered queue before it reaches the engine; the engine performs no
//! merging or reordering of its own. Processing is cooperative (the loop
//! suspends only while awaiting the next request), and the channel closing
//! is the cancellation signal: the loop drains and returns cleanly.

use quill_events::{EditRequest, REQUEST_CHANNEL_CAP};
use tokio::sync::mpsc::{Receiver, Sender, channel};
use tracing::{info, warn};

use crate::Editor;
use crate::dispatcher;

/// Build a request channel at the engine's default bound.
pub fn request_channel() -> (Sender<EditRequest>, Receiver<EditRequest>) {
    channel(REQUEST_CHANNEL_CAP)
}

/// Drain `requests` into `editor` until the channel closes. A failed
/// request is logged and the loop keeps serving subsequent ones; it never
/// faults.
pub async fn serve(editor: &mut Editor, requests: &mut Receiver<EditRequest>) {
    while let Some(request) = requests.recv().await {
        if let Err(err) = dispatcher::dispatch(request, editor) {
            warn!(
                target: "engine.service",
                buffer = editor.state().name(),
                error = %err,
                "request failed"
            );
        }
    }
    info!(
        target: "engine.service",
        buffer = editor.state().name(),
        "request stream closed; stopping"
    );
}

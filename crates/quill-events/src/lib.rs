//! Host-facing request and notification surface, plus channel policy.

use quill_model::{Caret, SelectionObserver, SelectionSpan};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::trace;

// -------------------------------------------------------------------------
// Channel policy
// -------------------------------------------------------------------------
// Requests travel over one bounded mpsc channel per buffer: a single
// serialized stream gives natural producer backpressure, and the engine
// never reorders or merges. Notifications go the other way over an
// unbounded channel because they must be emitted synchronously inside the
// mutating call; a slow host delays itself, never the edit.
// -------------------------------------------------------------------------

/// Bound for the per-buffer request channel.
pub const REQUEST_CHANNEL_CAP: usize = 1024;

/// Cursor movement direction for [`EditRequest::MoveCaret`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One decoded logical edit request. Decoding raw input (key codes, mouse
/// pixels) into these is the host's job; mouse-driven selection arrives as
/// [`EditRequest::SetSelection`] with already-resolved endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditRequest {
    MoveCaret {
        direction: Direction,
        extend: bool,
    },
    InsertText {
        text: String,
    },
    DeleteBackward {
        count: usize,
    },
    DeleteForward {
        count: usize,
    },
    SetSelection {
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    },
    SelectAll,
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
}

/// Engine-emitted change notification. Delivered synchronously within the
/// call that produced it; serializing these across a process boundary is
/// the host's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    SelectionChanged { start: Caret, end: Caret },
    BufferChanged { buffer: String },
}

/// Synchronous notification sender. A disabled sink discards everything, so
/// an engine can run detached (tests, headless use) without a host channel.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<UnboundedSender<Notification>>,
}

impl EventSink {
    /// Sink wired to a host channel.
    pub fn new(tx: UnboundedSender<Notification>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Sink that discards every notification.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Emit one notification. A dropped receiver is traced and otherwise
    /// ignored; the engine never blocks on its host.
    pub fn emit(&self, notification: Notification) {
        if let Some(tx) = &self.tx {
            if tx.send(notification).is_err() {
                trace!(target: "engine.events", "notification receiver dropped");
            }
        }
    }
}

/// Build a notification channel and the sink feeding it.
pub fn notification_channel() -> (EventSink, UnboundedReceiver<Notification>) {
    let (tx, rx) = unbounded_channel();
    (EventSink::new(tx), rx)
}

/// Forwards model-level selection changes onto an [`EventSink`].
#[derive(Debug, Clone)]
pub struct SelectionRelay {
    sink: EventSink,
}

impl SelectionRelay {
    pub fn new(sink: EventSink) -> Self {
        Self { sink }
    }
}

impl SelectionObserver for SelectionRelay {
    fn selection_changed(&mut self, selection: SelectionSpan) {
        self.sink.emit(Notification::SelectionChanged {
            start: selection.start,
            end: selection.end,
        });
    }
}

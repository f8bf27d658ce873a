#![allow(dead_code)] // Shared across the integration tests; each test binary uses a subset of helpers.

use quill_actions::Editor;
use quill_events::{Notification, notification_channel};
use quill_state::{Clipboard, EditorState};
use tokio::sync::mpsc::UnboundedReceiver;

pub fn editor(content: &str) -> Editor {
    Editor::new(EditorState::new("test", content))
}

pub fn editor_with_events(content: &str) -> (Editor, UnboundedReceiver<Notification>) {
    let (sink, rx) = notification_channel();
    (editor(content).with_events(sink), rx)
}

pub fn editor_with_clipboard(content: &str, clipboard: &Clipboard) -> Editor {
    editor(content).with_clipboard(clipboard.clone())
}

/// Collect everything currently buffered in a notification channel.
pub fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        out.push(notification);
    }
    out
}

/// Route engine traces through the test writer; safe to call from every
/// test, only the first initialization wins.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//! Async request-stream service behavior.

mod common;

use quill_actions::service;
use quill_events::{Direction, EditRequest, Notification};

#[tokio::test]
async fn serves_a_request_stream_and_stops_on_close() -> anyhow::Result<()> {
    common::init_logging();
    let (mut editor, mut notifications) = common::editor_with_events("");
    let (tx, mut rx) = service::request_channel();

    let worker = tokio::spawn(async move {
        service::serve(&mut editor, &mut rx).await;
        editor
    });

    for request in [
        EditRequest::InsertText {
            text: "hello".to_string(),
        },
        EditRequest::InsertText {
            text: " world".to_string(),
        },
        EditRequest::MoveCaret {
            direction: Direction::Left,
            extend: false,
        },
        EditRequest::Undo,
    ] {
        tx.send(request).await?;
    }
    drop(tx); // stream end is the cancellation signal

    let editor = worker.await?;
    assert_eq!(editor.content(), "hello");

    // every buffer mutation produced a notification, in order
    let buffer_changes = common::drain(&mut notifications)
        .into_iter()
        .filter(|n| matches!(n, Notification::BufferChanged { .. }))
        .count();
    assert_eq!(buffer_changes, 3);
    Ok(())
}

#[tokio::test]
async fn a_failing_request_does_not_stop_the_loop() {
    common::init_logging();
    // no clipboard attached: Paste is unsupported and must only be logged
    let (mut editor, _notifications) = common::editor_with_events("");
    let (tx, mut rx) = service::request_channel();

    let worker = tokio::spawn(async move {
        service::serve(&mut editor, &mut rx).await;
        editor
    });

    tx.send(EditRequest::Paste).await.unwrap();
    tx.send(EditRequest::InsertText {
        text: "still alive".to_string(),
    })
    .await
    .unwrap();
    drop(tx);

    let editor = worker.await.unwrap();
    assert_eq!(editor.content(), "still alive");
}

#[tokio::test]
async fn select_all_notifies_resolved_endpoints() {
    let (mut editor, mut notifications) = common::editor_with_events("ab\ncd");
    let (tx, mut rx) = service::request_channel();

    let worker = tokio::spawn(async move {
        service::serve(&mut editor, &mut rx).await;
        editor
    });

    tx.send(EditRequest::SelectAll).await.unwrap();
    drop(tx);
    worker.await.unwrap();

    let seen = common::drain(&mut notifications);
    assert_eq!(seen.len(), 1);
    match &seen[0] {
        Notification::SelectionChanged { start, end } => {
            assert_eq!((start.line, start.column), (0, 0));
            assert_eq!((end.line, end.column), (1, 2));
        }
        other => panic!("expected a selection notification, got {other:?}"),
    }
}

#[tokio::test]
async fn set_selection_requests_stand_in_for_mouse_drags() {
    let (mut editor, _notifications) = common::editor_with_events("hello\nworld");
    let (tx, mut rx) = service::request_channel();

    let worker = tokio::spawn(async move {
        service::serve(&mut editor, &mut rx).await;
        editor
    });

    // endpoints arrive reversed, as a bottom-up drag would produce them
    tx.send(EditRequest::SetSelection {
        start_line: 1,
        start_column: 2,
        end_line: 0,
        end_column: 1,
    })
    .await
    .unwrap();
    tx.send(EditRequest::Cut).await.unwrap(); // unsupported, logged, skipped
    tx.send(EditRequest::DeleteBackward { count: 1 }).await.unwrap();
    drop(tx);

    let editor = worker.await.unwrap();
    // the normalized selection (0,1)..(1,2) was deleted
    assert_eq!(editor.content(), "hrld");
}

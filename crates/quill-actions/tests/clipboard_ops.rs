//! Cut/copy/paste against the process-wide clipboard.

mod common;

use common::{editor, editor_with_clipboard};
use quill_model::Caret;
use quill_state::Clipboard;

#[test]
fn cut_then_paste_moves_text() {
    let clipboard = Clipboard::new();
    let mut ed = editor_with_clipboard("hello world", &clipboard);

    ed.set_selection(Caret::new(0, 0), Caret::new(0, 6));
    ed.cut().unwrap();
    assert_eq!(ed.content(), "world");
    assert_eq!(clipboard.read(), "hello ");

    ed.set_selection(Caret::new(0, 5), Caret::new(0, 5));
    ed.paste().unwrap();
    assert_eq!(ed.content(), "worldhello ");
}

#[test]
fn copy_leaves_buffer_and_history_untouched() {
    let clipboard = Clipboard::new();
    let mut ed = editor_with_clipboard("abc", &clipboard);
    ed.select_all();
    ed.copy().unwrap();
    assert_eq!(clipboard.read(), "abc");
    assert_eq!(ed.content(), "abc");
    assert!(ed.history().is_empty());
}

#[test]
fn paste_over_selection_replaces_and_undoes_as_one_step() {
    let clipboard = Clipboard::new();
    clipboard.write("NEW");
    let mut ed = editor_with_clipboard("old text", &clipboard);

    ed.set_selection(Caret::new(0, 0), Caret::new(0, 3));
    ed.paste().unwrap();
    assert_eq!(ed.content(), "NEW text");

    assert!(ed.undo().unwrap());
    assert_eq!(ed.content(), "old text");
    assert_eq!(ed.state().selection().start(), Caret::new(0, 0));
    assert_eq!(ed.state().selection().end(), Caret::new(0, 3));
}

#[test]
fn clipboard_is_shared_last_writer_wins() {
    let clipboard = Clipboard::new();
    let mut left = editor_with_clipboard("left", &clipboard);
    let mut right = editor_with_clipboard("right", &clipboard);

    left.select_all();
    left.copy().unwrap();
    right.select_all();
    right.copy().unwrap();

    // the later writer owns the slot; either editor may paste it
    left.set_selection(Caret::new(0, 4), Caret::new(0, 4));
    left.paste().unwrap();
    assert_eq!(left.content(), "leftright");
}

#[test]
fn cut_with_collapsed_selection_is_a_no_op() {
    let clipboard = Clipboard::new();
    clipboard.write("keep me");
    let mut ed = editor_with_clipboard("abc", &clipboard);
    ed.cut().unwrap();
    assert_eq!(ed.content(), "abc");
    assert_eq!(clipboard.read(), "keep me");
    assert!(ed.history().is_empty());
}

#[test]
fn empty_clipboard_paste_is_a_no_op() {
    let clipboard = Clipboard::new();
    let mut ed = editor_with_clipboard("abc", &clipboard);
    ed.paste().unwrap();
    assert_eq!(ed.content(), "abc");
    assert!(ed.history().is_empty());
}

#[test]
fn detached_editor_reports_unsupported() {
    let mut ed = editor("abc");
    assert!(ed.paste().is_err());
    assert!(ed.copy().is_err());
    assert!(ed.cut().is_err());
}

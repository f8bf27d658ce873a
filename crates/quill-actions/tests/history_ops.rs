//! Undo/redo behavior over whole edit sequences.

mod common;

use common::editor;
use quill_actions::Editor;
use quill_model::Caret;
use quill_state::EditorState;

#[test]
fn undo_walks_back_a_whole_session_and_redo_replays_it() {
    let mut ed = editor("");
    ed.type_text("hello").unwrap();
    ed.type_text(" world").unwrap();
    ed.delete_backward(5).unwrap();
    ed.type_text("there").unwrap();
    assert_eq!(ed.content(), "hello there");

    let mut undone = 0;
    while ed.undo().unwrap() {
        undone += 1;
    }
    assert_eq!(undone, 4);
    assert_eq!(ed.content(), "");
    assert!(ed.state().selection().is_collapsed());
    assert_eq!(ed.state().selection().start(), Caret::origin());

    let mut redone = 0;
    while ed.redo().unwrap() {
        redone += 1;
    }
    assert_eq!(redone, 4);
    assert_eq!(ed.content(), "hello there");
}

#[test]
fn new_edit_forks_history_linearly() {
    let mut ed = editor("");
    ed.type_text("a").unwrap();
    ed.type_text("b").unwrap();
    assert!(ed.undo().unwrap());
    assert_eq!(ed.content(), "a");

    ed.type_text("c").unwrap();
    assert_eq!(ed.content(), "ac");

    // the "b" branch is gone: redo has nothing to replay
    assert!(!ed.redo().unwrap());
    assert!(ed.undo().unwrap());
    assert_eq!(ed.content(), "a");
}

#[test]
fn configured_capacity_bounds_undo_depth() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quill.toml");
    std::fs::write(&path, "[history]\ncapacity = 2\n").unwrap();
    let config = quill_config::load(&path).unwrap();
    let mut ed = Editor::new(EditorState::new("test", "")).with_config(&config);

    ed.type_text("a").unwrap();
    ed.type_text("b").unwrap();
    ed.type_text("c").unwrap();

    assert!(ed.undo().unwrap());
    assert!(ed.undo().unwrap());
    // the oldest edit was evicted; "a" survives
    assert!(!ed.undo().unwrap());
    assert_eq!(ed.content(), "a");
}

#[test]
fn undo_then_redo_is_stable_at_the_boundaries() {
    let mut ed = editor("x");
    assert!(!ed.undo().unwrap());
    assert!(!ed.redo().unwrap());

    ed.type_text("y").unwrap();
    assert!(ed.undo().unwrap());
    assert!(!ed.undo().unwrap());
    assert!(ed.redo().unwrap());
    assert!(!ed.redo().unwrap());
    assert_eq!(ed.content(), "yx");
}

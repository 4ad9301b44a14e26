//! Integration tests for rwh-core
//!
//! These tests drive the editor end-to-end through scripted byte sources, the
//! way a terminal would feed it.

use rwh_core::{
    byte_source::ReplayByteSource,
    config::get_config_path,
    editor::LineEditor,
    error::Error,
    file_handling::get_editor_config,
    shortcuts::ShortcutAction,
};
use std::io::Write;
use tempfile::NamedTempFile;

const UP: &[u8] = b"\x1b[A";
const DOWN: &[u8] = b"\x1b[B";
const LEFT: &[u8] = b"\x1b[D";
const RIGHT: &[u8] = b"\x1b[C";
const DELETE: &[u8] = b"\x1b[3~";
const CTRL_LEFT: &[u8] = b"\x1b[1;5D";
const CTRL_RIGHT: &[u8] = b"\x1b[1;5C";
const HOME: &[u8] = b"\x01";
const END: &[u8] = b"\x05";
const BACKSPACE: &[u8] = b"\x7f";

fn read_with(editor: &mut LineEditor, parts: &[&[u8]]) -> Result<String, Error> {
    let mut source = ReplayByteSource::new(parts.concat());
    let mut screen: Vec<u8> = Vec::new();
    editor.read_line("> ", &mut source, &mut screen)
}

/// Reads the line typed as `parts` and checks what is on screen before Enter.
fn displayed_after(editor: &mut LineEditor, parts: &[&[u8]]) -> String {
    let mut with_enter = parts.to_vec();
    with_enter.push(b"\n");
    read_with(editor, &with_enter).unwrap()
}

fn editor_with_history(capacity: usize, lines: &[&str]) -> LineEditor {
    let mut editor = LineEditor::new(capacity).unwrap();
    for line in lines {
        let typed = format!("{line}\n");
        assert_eq!(read_with(&mut editor, &[typed.as_bytes()]).unwrap(), *line);
    }
    editor
}

/// Dive and float through a three-line history and back to the typed line
#[test]
fn test_history_browsing_round_trip() {
    // Every accepted line lands in history, so each check starts fresh
    let browse = |parts: &[&[u8]]| {
        displayed_after(&mut editor_with_history(3, &["ls", "pwd", "cd /tmp"]), parts)
    };

    assert_eq!(browse(&[b"gi", UP]), "cd /tmp");
    assert_eq!(browse(&[b"gi", UP, UP]), "pwd");
    assert_eq!(browse(&[b"gi", UP, UP, DOWN]), "cd /tmp");
    assert_eq!(browse(&[b"gi", UP, UP, DOWN, DOWN]), "gi");
}

/// Diving past the oldest entry stays on the oldest entry
#[test]
fn test_dive_stops_at_oldest() {
    let browse = |parts: &[&[u8]]| displayed_after(&mut editor_with_history(3, &["ls", "pwd"]), parts);

    assert_eq!(browse(&[UP, UP, UP, UP]), "ls");
    assert_eq!(browse(&[UP, UP, UP, UP, DOWN]), "pwd");
}

#[test]
fn test_insert_in_middle() {
    let mut editor = LineEditor::new(3).unwrap();
    let script: &[&[u8]] = &[b"abc", LEFT, LEFT, b"X"];
    let mut source = ReplayByteSource::new(script.concat());
    let mut screen: Vec<u8> = Vec::new();

    // Nothing left after "X": the read ends without Enter
    let result = editor.read_line("> ", &mut source, &mut screen);
    assert!(matches!(result, Err(Error::EndOfInput)));

    // The last redraw shows "aXbc" with the cursor moved back two places
    assert!(screen.ends_with(b"> aXbc\x08\x08"));

    assert_eq!(displayed_after(&mut editor, &[b"abc", LEFT, LEFT, b"X"]), "aXbc");
}

#[test]
fn test_dive_with_empty_history_is_noop() {
    let mut editor = LineEditor::new(3).unwrap();
    assert_eq!(displayed_after(&mut editor, &[b"abc", LEFT, UP, b"X"]), "abXc");
    assert_eq!(displayed_after(&mut editor, &[UP, DOWN]), "");
}

#[test]
fn test_accepted_line_is_available_to_next_session() {
    let mut editor = LineEditor::new(3).unwrap();
    assert_eq!(read_with(&mut editor, &[b"ls\n"]).unwrap(), "ls");
    assert_eq!(displayed_after(&mut editor, &[UP]), "ls");
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_empty_input_is_not_recorded() {
    let mut editor = LineEditor::new(3).unwrap();
    assert_eq!(read_with(&mut editor, &[b"\n"]).unwrap(), "");
    assert!(editor.history().is_empty());

    // Typing and erasing everything is "no input" too
    assert_eq!(read_with(&mut editor, &[b"ab", BACKSPACE, BACKSPACE, b"\r"]).unwrap(), "");
    assert!(editor.history().is_empty());
}

#[test]
fn test_editing_a_history_line_does_not_change_history() {
    let mut editor = editor_with_history(3, &["make test"]);
    assert_eq!(
        displayed_after(&mut editor, &[UP, BACKSPACE, BACKSPACE, BACKSPACE, BACKSPACE, b"build"]),
        "make build"
    );
    assert_eq!(editor.history().read_at(1), Some("make test"));
    assert_eq!(editor.history().read_at(0), Some("make build"));
}

#[test]
fn test_oldest_line_is_evicted() {
    let mut editor = editor_with_history(2, &["one", "two", "three"]);
    assert_eq!(editor.history().iter().collect::<Vec<_>>(), vec!["two", "three"]);
    assert_eq!(displayed_after(&mut editor, &[UP, UP, UP]), "two");
}

#[test]
fn test_cursor_shortcuts() {
    let mut editor = LineEditor::new(3).unwrap();

    assert_eq!(displayed_after(&mut editor, &[b"bc", HOME, b"a", END, b"d"]), "abcd");
    assert_eq!(displayed_after(&mut editor, &[b"abc", HOME, DELETE, RIGHT, DELETE]), "b");
    assert_eq!(displayed_after(&mut editor, &[b"ab", DELETE, RIGHT, b"c"]), "abc");
    assert_eq!(displayed_after(&mut editor, &[b"ab", HOME, BACKSPACE, b"_"]), "_ab");
}

#[test]
fn test_block_jumps() {
    let mut editor = LineEditor::new(3).unwrap();

    // End of "ls" → start of "-la"; insert there
    assert_eq!(
        displayed_after(&mut editor, &[b"ls -la /tmp", HOME, CTRL_RIGHT, CTRL_RIGHT, b"-h "]),
        "ls -h -la /tmp"
    );
    // From the end: start of "/tmp"
    assert_eq!(
        displayed_after(&mut editor, &[b"ls -la /tmp", CTRL_LEFT, b"~"]),
        "ls -la ~/tmp"
    );
    assert_eq!(displayed_after(&mut editor, &[CTRL_LEFT, CTRL_RIGHT, b"x"]), "x");
}

#[test]
fn test_custom_shortcuts() {
    let mut editor = LineEditor::builder()
        .history_size(4)
        .shortcut(ShortcutAction::DiveHistory, b"\x10".to_vec())
        .shortcut(ShortcutAction::FloatHistory, b"\x0e".to_vec())
        .build()
        .unwrap();

    assert_eq!(read_with(&mut editor, &[b"first\n"]).unwrap(), "first");
    assert_eq!(displayed_after(&mut editor, &[b"\x10"]), "first");
    assert_eq!(displayed_after(&mut editor, &[b"zz", b"\x10", b"\x0e"]), "zz");

    // Up is no longer bound to history; the abandoned sequence types its last byte
    assert_eq!(displayed_after(&mut editor, &[UP]), "A");
}

#[test]
fn test_raw_mode_is_restored_on_every_exit() {
    let mut editor = LineEditor::new(3).unwrap();

    let mut source = ReplayByteSource::new(b"ok\n");
    editor.read_line("> ", &mut source, &mut Vec::<u8>::new()).unwrap();
    assert!(!source.is_raw());
    assert_eq!(source.mode_switches(), 2);

    let mut source = ReplayByteSource::new(b"unfinished");
    let result = editor.read_line("> ", &mut source, &mut Vec::<u8>::new());
    assert!(matches!(result, Err(Error::EndOfInput)));
    assert!(!source.is_raw());
    assert_eq!(source.mode_switches(), 2);
}

#[test]
fn test_one_source_many_lines() {
    let mut editor = LineEditor::new(3).unwrap();
    let mut source = ReplayByteSource::new(b"first\nsecond\n");
    let mut screen: Vec<u8> = Vec::new();

    assert_eq!(editor.read_line("> ", &mut source, &mut screen).unwrap(), "first");
    assert_eq!(source.remaining(), 7);
    assert_eq!(editor.read_line("> ", &mut source, &mut screen).unwrap(), "second");
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_editor_from_config_file() {
    let yaml_content = r#"
history_size: 2
shortcuts:
  dive_history: "\x10"
  head: [2]
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = get_config_path(&Some(temp_file.path().to_str().unwrap().to_string()));

    let config = get_editor_config(&temp_path).unwrap().unwrap();
    let mut editor = config.build_editor().unwrap();

    assert_eq!(editor.history().capacity(), 2);
    assert_eq!(read_with(&mut editor, &[b"abc\n"]).unwrap(), "abc");
    assert_eq!(displayed_after(&mut editor, &[b"\x10", b"\x02", b"_"]), "_abc");
}

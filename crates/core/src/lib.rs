//! Rwh Core Library
//!
//! This crate provides an interactive terminal line editor with bounded
//! command history: a small, self-contained alternative to a full readline
//! library for tools that read one line of input at a time.
//!
//! # Key Features
//!
//! - **Shortcut Recognition**: Escape and control sequences are recognised one byte at a time
//! - **Line Editing**: Cursor movement, block-wise jumps, insert, backspace and delete
//! - **History**: A fixed-capacity ring of accepted lines, browsed with dive/float
//! - **Configuration**: YAML configuration for history size and shortcut bindings
//! - **Error Handling**: A single error type for all failure modes
//!
//! # Examples
//!
//! Reading a line from the terminal:
//!
//! ```no_run
//! use rwh_core::editor::LineEditor;
//!
//! let mut editor = LineEditor::new(100)?;
//! let line = editor.read_line_from_terminal("> ")?;
//! println!("Got: {line}");
//! # Ok::<(), rwh_core::error::Error>(())
//! ```
//!
//! Feeding the editor from a script instead of a terminal:
//!
//! ```
//! use rwh_core::byte_source::ReplayByteSource;
//! use rwh_core::editor::LineEditor;
//!
//! let mut editor = LineEditor::new(10)?;
//! let mut source = ReplayByteSource::new(b"ls -l\n");
//! let mut screen = Vec::new();
//!
//! assert_eq!(editor.read_line("$ ", &mut source, &mut screen)?, "ls -l");
//! assert_eq!(editor.history().read_at(0), Some("ls -l"));
//! # Ok::<(), rwh_core::error::Error>(())
//! ```

pub mod byte_source;
pub mod config;
pub mod editor;
pub mod error;
pub mod file_handling;
pub mod history;
pub mod line_buffer;
pub mod matcher;
pub mod shortcuts;

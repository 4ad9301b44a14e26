//! Rwh CLI Library
//!
//! This crate provides `rwh`, a small interactive prompt built on the
//! `rwh-core` line editor. It reads lines with editing shortcuts and history
//! browsing and runs them through the user's shell.
//!
//! # Key Features
//!
//! - **Line Editing**: Cursor movement, block jumps and deletion while typing
//! - **History Browsing**: Up/Down (or configured keys) walk through accepted lines
//! - **Builtins**: `history` lists accepted lines, `exit` leaves the prompt
//! - **Dry Run**: Echo lines instead of running them
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`prompt_loop`]: The read/handle loop and its builtins
//! - [`execution`]: Running accepted lines with the shell
//!
//! # Examples
//!
//! ```bash
//! # Interactive prompt that runs each line
//! rwh
//!
//! # Custom prompt, only echo lines
//! rwh --prompt '$ ' --dry-run
//!
//! # Keep 500 lines of history, custom config file
//! rwh -n 500 -c ~/rwh.yml
//! ```

pub mod cli_args;
pub mod execution;
pub mod prompt_loop;

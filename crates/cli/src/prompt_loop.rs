//! The interactive loop of the `rwh` binary.
//!
//! Each accepted line is either a builtin (`exit`, `history`), skipped when
//! blank, or handed to the shell. In dry-run mode lines are only echoed.

use std::io::Write;

use itertools::Itertools;
use log::{debug, warn};
use rwh_core::byte_source::ByteSource;
use rwh_core::editor::LineEditor;
use rwh_core::error::{Error, Result};
use rwh_core::history::HistoryRing;

use crate::execution::execute_line;

/// What to do with an accepted line.
#[derive(PartialEq, Eq, Debug)]
pub enum LineAction<'a> {
    Skip,
    Exit,
    ShowHistory,
    Run(&'a str),
}

/// Settings for [`run_prompt_loop`].
#[derive(Debug, Clone)]
pub struct LoopSettings {
    pub prompt: String,
    pub dry_run: bool,
    pub shell: String,
}

#[must_use]
pub fn classify_line(line: &str) -> LineAction<'_> {
    match line.trim() {
        "" => LineAction::Skip,
        "exit" => LineAction::Exit,
        "history" => LineAction::ShowHistory,
        command => LineAction::Run(command),
    }
}

/// History as numbered lines, oldest first.
#[must_use]
pub fn format_history(history: &HistoryRing) -> String {
    history
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>4}  {line}", i + 1))
        .join("\n")
}

/// Reads and handles lines until `exit`, Ctrl-C or the end of input.
///
/// A command that exits unsuccessfully is reported and the loop continues.
///
/// # Errors
///
/// Returns an error if reading a line fails for any other reason, or if the
/// shell cannot be started.
pub fn run_prompt_loop<S, W>(
    editor: &mut LineEditor,
    source: &mut S,
    out: &mut W,
    settings: &LoopSettings,
) -> Result<()>
where
    S: ByteSource,
    W: Write,
{
    loop {
        let line = match editor.read_line(&settings.prompt, source, out) {
            Ok(line) => line,
            Err(e) if e.is_end_of_session() => {
                debug!("Prompt loop ended: {e}");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match classify_line(&line) {
            LineAction::Skip => {}
            LineAction::Exit => return Ok(()),
            LineAction::ShowHistory => {
                writeln!(out, "{}", format_history(editor.history()))?;
            }
            LineAction::Run(command) if settings.dry_run => {
                writeln!(out, "{command}")?;
            }
            LineAction::Run(command) => match execute_line(&settings.shell, command) {
                Err(Error::SubProcessExit) => warn!("`{command}` exited unsuccessfully"),
                result => result?,
            },
        }
        out.flush()?;
    }
}

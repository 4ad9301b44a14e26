//! The line editor: reads raw bytes, applies shortcuts and history browsing,
//! and redraws the line until Enter is pressed.

use std::fmt::{Debug, Formatter};
use std::io::{stdout, Write};

use crossterm::queue;
use crossterm::style::Print;
use log::{debug, trace};

use crate::byte_source::{ByteSource, RawModeGuard, TerminalByteSource};
use crate::error::{Error, Result};
use crate::history::HistoryRing;
use crate::line_buffer::{LineBuffer, SeekDirection};
use crate::matcher::{Classification, ShortcutMatcher};
use crate::shortcuts::{is_line_terminator, ShortcutAction, ShortcutTable, BACKSPACE, INTERRUPT};

/// Default number of lines kept in history.
pub const DEFAULT_HISTORY_SIZE: usize = 64;

const CURSOR_BACK: u8 = 0x08;

/// Bytes below space have no glyph and would be interpreted by the terminal.
fn is_control_byte(byte: u8) -> bool {
    byte < 0x20
}

/// Extension point invoked by the completion shortcut.
///
/// The default implementation leaves the line untouched.
pub trait CompletionHook {
    /// Called with the displayed line; may edit it in place.
    ///
    /// # Errors
    ///
    /// Any error aborts the current read.
    fn complete(&mut self, line: &mut LineBuffer) -> Result<()> {
        let _ = line;
        Ok(())
    }
}

/// Completion that does nothing.
#[derive(Default, Debug)]
pub struct NoCompletion;

impl CompletionHook for NoCompletion {}

/// Builds a [`LineEditor`] from a history size and shortcut overrides.
pub struct LineEditorBuilder {
    history_size: usize,
    overrides: Vec<(ShortcutAction, Vec<u8>)>,
    completion: Box<dyn CompletionHook>,
}

impl Default for LineEditorBuilder {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            overrides: Vec::new(),
            completion: Box::new(NoCompletion),
        }
    }
}

impl LineEditorBuilder {
    #[must_use]
    pub fn history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }

    /// Rebinds one of the [`ShortcutAction::CONFIGURABLE`] actions.
    #[must_use]
    pub fn shortcut(mut self, action: ShortcutAction, sequence: impl Into<Vec<u8>>) -> Self {
        self.overrides.push((action, sequence.into()));
        self
    }

    #[must_use]
    pub fn completion(mut self, completion: impl CompletionHook + 'static) -> Self {
        self.completion = Box::new(completion);
        self
    }

    /// Validates the configuration and builds the editor.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero history size or an invalid shortcut
    /// sequence.
    pub fn build(self) -> Result<LineEditor> {
        Ok(LineEditor {
            shortcuts: ShortcutTable::with_overrides(self.overrides)?,
            history: HistoryRing::new(self.history_size)?,
            completion: self.completion,
        })
    }
}

/// Reads lines from a raw terminal with editing shortcuts and history.
pub struct LineEditor {
    shortcuts: ShortcutTable,
    history: HistoryRing,
    completion: Box<dyn CompletionHook>,
}

impl Debug for LineEditor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEditor")
            .field("shortcuts", &self.shortcuts)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl LineEditor {
    #[must_use]
    pub fn builder() -> LineEditorBuilder {
        LineEditorBuilder::default()
    }

    /// An editor with default shortcuts and `history_size` history entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroHistoryCapacity`] if `history_size` is zero.
    pub fn new(history_size: usize) -> Result<Self> {
        Self::builder().history_size(history_size).build()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    #[must_use]
    pub fn shortcuts(&self) -> &ShortcutTable {
        &self.shortcuts
    }

    /// Reads one line from the terminal, echoing to stdout.
    ///
    /// # Errors
    ///
    /// See [`LineEditor::read_line`].
    pub fn read_line_from_terminal(&mut self, prompt: &str) -> Result<String> {
        let mut source = TerminalByteSource;
        let mut out = stdout();
        self.read_line(prompt, &mut source, &mut out)
    }

    /// Reads one line from `source`, drawing the prompt and line on `out`.
    ///
    /// The source is switched to raw mode for the duration of the call and
    /// restored on every exit path. The accepted line is returned without its
    /// terminator and, unless nothing was typed, added to history.
    ///
    /// # Errors
    ///
    /// - [`Error::EndOfInput`] if the source runs out before Enter.
    /// - [`Error::Interrupted`] on Ctrl-C.
    /// - [`Error::ResourceExhaustion`] if the line cannot grow.
    /// - [`Error::Io`] if reading or drawing fails.
    pub fn read_line<S, W>(&mut self, prompt: &str, source: &mut S, out: &mut W) -> Result<String>
    where
        S: ByteSource + ?Sized,
        W: Write,
    {
        let mut source = RawModeGuard::enter(source);
        let mut session = EditorSession::new(prompt);

        queue!(out, Print(prompt))?;
        out.flush()?;

        loop {
            let byte = source.read_byte()?;
            trace!("Read byte {byte:#04x}");

            if is_line_terminator(byte) {
                return self.accept(session, out);
            }

            if byte == INTERRUPT {
                queue!(out, Print("\r\n"))?;
                out.flush()?;
                return Err(Error::Interrupted);
            }

            if byte == BACKSPACE {
                if session.buffer.backspace() {
                    session.dirty = true;
                }
                session.redraw(out)?;
                continue;
            }

            match session.matcher.feed(&self.shortcuts, byte)? {
                Classification::Pending => continue,
                // Bytes of an abandoned sequence are dropped; only the byte
                // that broke the match is typed, and only if printable.
                Classification::Literal if is_control_byte(byte) => {
                    debug!("Dropping unbound control byte {byte:#04x}");
                }
                Classification::Literal => {
                    session.buffer.insert(byte)?;
                    session.dirty = true;
                }
                Classification::Bound(action) => {
                    debug!("Shortcut `{action}`");
                    self.dispatch(action, &mut session)?;
                }
            }

            session.redraw(out)?;
        }
    }

    fn dispatch(&mut self, action: ShortcutAction, session: &mut EditorSession<'_>) -> Result<()> {
        match action {
            ShortcutAction::Head => session.buffer.move_to_start(),
            ShortcutAction::Tail => session.buffer.move_to_end(),
            ShortcutAction::NextBlock => {
                session.buffer.seek_word_block(SeekDirection::Forward);
            }
            ShortcutAction::PrevBlock => {
                session.buffer.seek_word_block(SeekDirection::Backward);
            }
            ShortcutAction::Completion => self.completion.complete(&mut session.buffer)?,
            ShortcutAction::DiveHistory => session.dive(&self.history)?,
            ShortcutAction::FloatHistory => session.float(&self.history)?,
            ShortcutAction::CursorRight => session.buffer.move_right(),
            ShortcutAction::CursorLeft => session.buffer.move_left(),
            ShortcutAction::Delete => {
                if session.buffer.delete() {
                    session.dirty = true;
                }
            }
        }

        Ok(())
    }

    fn accept<W: Write>(&mut self, session: EditorSession<'_>, out: &mut W) -> Result<String> {
        queue!(out, Print("\r\n"))?;
        out.flush()?;

        if session.buffer.is_absent() {
            return Ok(String::new());
        }

        let line = session.buffer.to_text();
        let mut stored = String::new();
        stored.try_reserve_exact(line.len())?;
        stored.push_str(&line);

        self.history.push(stored);
        Ok(line)
    }
}

/// State of one `read_line` call.
struct EditorSession<'p> {
    prompt: &'p str,
    buffer: LineBuffer,
    /// The in-progress line, kept while history is displayed.
    stashed: Option<LineBuffer>,
    depth: usize,
    dirty: bool,
    matcher: ShortcutMatcher,
    drawn_len: usize,
}

impl<'p> EditorSession<'p> {
    fn new(prompt: &'p str) -> Self {
        Self {
            prompt,
            buffer: LineBuffer::new(),
            stashed: None,
            depth: 0,
            dirty: false,
            matcher: ShortcutMatcher::new(),
            drawn_len: 0,
        }
    }

    /// Displays the next older history line, stashing the in-progress line on
    /// the first step (or re-stashing it if it was edited since).
    fn dive(&mut self, history: &HistoryRing) -> Result<()> {
        let Some(line) = history.read_at(self.depth) else {
            return Ok(());
        };

        let displayed = LineBuffer::from_line(line)?;
        let previous = std::mem::replace(&mut self.buffer, displayed);
        if self.depth == 0 || self.dirty {
            self.stashed = Some(previous);
        }

        self.depth += 1;
        self.dirty = false;
        Ok(())
    }

    /// Displays the next newer history line, or the stashed line once back at
    /// the top.
    fn float(&mut self, history: &HistoryRing) -> Result<()> {
        if self.depth == 0 {
            return Ok(());
        }

        self.depth -= 1;
        self.buffer = if self.depth == 0 {
            let mut restored = self.stashed.take().unwrap_or_default();
            restored.move_to_end();
            restored
        } else {
            match history.read_at(self.depth - 1) {
                Some(line) => LineBuffer::from_line(line)?,
                None => LineBuffer::new(),
            }
        };

        self.dirty = false;
        Ok(())
    }

    /// Clears the drawn line, prints the prompt and line again and moves the
    /// terminal cursor back to the buffer cursor.
    fn redraw<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.matcher.is_pending() {
            return Ok(());
        }

        let clear_width = self.prompt.len() + self.drawn_len.max(self.buffer.len());
        queue!(
            out,
            Print('\r'),
            Print(" ".repeat(clear_width)),
            Print('\r'),
            Print(self.prompt)
        )?;
        out.write_all(self.buffer.as_bytes())?;
        out.write_all(&vec![CURSOR_BACK; self.buffer.len() - self.buffer.cursor()])?;
        out.flush()?;

        self.drawn_len = self.buffer.len();
        Ok(())
    }
}

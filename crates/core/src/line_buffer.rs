//! Cursor-addressed line contents.
//!
//! The buffer is byte-indexed. It distinguishes "absent" (nothing typed yet,
//! or everything deleted) from "present but empty"; only present lines are
//! recorded in history.

use crate::error::{Error, Result};

/// Direction for [`LineBuffer::seek_word_block`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeekDirection {
    Forward,
    Backward,
}

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct LineBuffer {
    content: Option<Vec<u8>>,
    cursor: usize,
}

impl LineBuffer {
    /// An absent line with the cursor at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A present line holding a private copy of `line`, cursor at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhaustion`] if the copy cannot be allocated.
    pub fn from_line(line: &str) -> Result<Self> {
        let mut content = Vec::new();
        content.try_reserve_exact(line.len())?;
        content.extend_from_slice(line.as_bytes());

        Ok(Self {
            cursor: content.len(),
            content: Some(content),
        })
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.content.is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.as_ref().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_deref().unwrap_or_default()
    }

    /// The line as text, replacing invalid UTF-8 with U+FFFD.
    #[must_use]
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// Inserts `byte` at `position`, shifting the trailing bytes right.
    ///
    /// The cursor is left where it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CursorOutOfRange`] if `position` is past the end, or
    /// [`Error::ResourceExhaustion`] if the line cannot grow.
    pub fn insert_at(&mut self, position: usize, byte: u8) -> Result<()> {
        let length = self.len();
        if position > length {
            return Err(Error::CursorOutOfRange { position, length });
        }

        let content = self.content.get_or_insert_with(Vec::new);
        content.try_reserve(1)?;
        content.insert(position, byte);
        Ok(())
    }

    /// Removes and returns the byte at `position`, shifting the trailing bytes
    /// left. Removing the only byte makes the line absent.
    ///
    /// The cursor is clamped to the new length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CursorOutOfRange`] if there is no byte at `position`.
    pub fn delete_at(&mut self, position: usize) -> Result<u8> {
        let length = self.len();
        let Some(content) = self.content.as_mut().filter(|_| position < length) else {
            return Err(Error::CursorOutOfRange { position, length });
        };

        let removed = content.remove(position);
        if content.is_empty() {
            self.content = None;
        }
        self.cursor = self.cursor.min(self.len());

        Ok(removed)
    }

    /// Inserts `byte` at the cursor and moves the cursor past it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhaustion`] if the line cannot grow.
    pub fn insert(&mut self, byte: u8) -> Result<()> {
        self.insert_at(self.cursor, byte)?;
        self.cursor += 1;
        Ok(())
    }

    /// Deletes the byte before the cursor. Returns false at the start of line.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.delete_at(self.cursor).is_ok()
    }

    /// Deletes the byte under the cursor. Returns false at the end of line.
    pub fn delete(&mut self) -> bool {
        self.cursor < self.len() && self.delete_at(self.cursor).is_ok()
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.len();
    }

    /// Moves the cursor to the next block boundary in `direction`.
    ///
    /// A block boundary is a position where exactly one of the two adjacent
    /// bytes is a space. The cursor always moves at least one step unless it
    /// is already at the edge of the line, and never passes the edges.
    pub fn seek_word_block(&mut self, direction: SeekDirection) -> usize {
        let bytes = self.content.as_deref().unwrap_or_default();
        let length = bytes.len();
        let mut position = self.cursor;

        loop {
            match direction {
                SeekDirection::Forward if position < length => position += 1,
                SeekDirection::Backward if position > 0 => position -= 1,
                _ => break,
            }

            if position == 0 || position == length {
                break;
            }

            if (bytes[position - 1] == b' ') != (bytes[position] == b' ') {
                break;
            }
        }

        self.cursor = position;
        position
    }
}

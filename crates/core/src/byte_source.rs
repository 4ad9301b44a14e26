//! Where the editor's raw bytes come from.
//!
//! Reads block with no timeout and no cancellation. A source that needs
//! either can implement [`ByteSource`] itself.

use std::collections::VecDeque;
use std::io::{stdin, ErrorKind, Read};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, warn};

use crate::error::{Error, Result};

/// A blocking single-byte reader that can switch the terminal between raw
/// and canonical mode.
pub trait ByteSource {
    /// Blocks until one byte is available.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfInput`] once the source is exhausted, or
    /// [`Error::Io`] if reading fails.
    fn read_byte(&mut self) -> Result<u8>;

    /// Switches to raw, no-echo input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalMode`] if the mode cannot be changed.
    fn enter_raw_mode(&mut self) -> Result<()>;

    /// Restores the mode that was active before [`ByteSource::enter_raw_mode`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalMode`] if the mode cannot be changed.
    fn restore_mode(&mut self) -> Result<()>;
}

/// Keeps a [`ByteSource`] in raw mode for as long as it lives.
///
/// Mode switch failures are logged and otherwise ignored, so input keeps
/// working on terminals that refuse the change.
pub struct RawModeGuard<'a, S: ByteSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: ByteSource + ?Sized> RawModeGuard<'a, S> {
    pub fn enter(source: &'a mut S) -> Self {
        if let Err(e) = source.enter_raw_mode() {
            warn!("Continuing without raw mode: {e}");
        }
        Self { source }
    }

    /// Reads one byte from the guarded source.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`ByteSource::read_byte`].
    pub fn read_byte(&mut self) -> Result<u8> {
        self.source.read_byte()
    }
}

impl<S: ByteSource + ?Sized> Drop for RawModeGuard<'_, S> {
    fn drop(&mut self) {
        if let Err(e) = self.source.restore_mode() {
            warn!("Could not restore terminal mode: {e}");
        }
    }
}

/// Standard input of the controlling terminal.
#[derive(Default, Debug)]
pub struct TerminalByteSource;

impl ByteSource for TerminalByteSource {
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        loop {
            match stdin().lock().read(&mut byte) {
                Ok(0) => return Err(Error::EndOfInput),
                Ok(_) => return Ok(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }

    fn enter_raw_mode(&mut self) -> Result<()> {
        debug!("Entering raw mode");
        enable_raw_mode().map_err(Error::TerminalMode)
    }

    fn restore_mode(&mut self) -> Result<()> {
        debug!("Leaving raw mode");
        disable_raw_mode().map_err(Error::TerminalMode)
    }
}

/// Replays a fixed byte script. Useful for tests and for feeding the editor
/// from something other than a terminal.
#[derive(Default, Debug)]
pub struct ReplayByteSource {
    bytes: VecDeque<u8>,
    is_raw: bool,
    mode_switches: usize,
}

impl ReplayByteSource {
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: bytes.as_ref().iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Queues more bytes behind the ones not yet read.
    pub fn extend(&mut self, bytes: impl AsRef<[u8]>) {
        self.bytes.extend(bytes.as_ref());
    }

    #[must_use]
    pub fn is_raw(&self) -> bool {
        self.is_raw
    }

    /// Number of times raw mode was entered or left.
    #[must_use]
    pub fn mode_switches(&self) -> usize {
        self.mode_switches
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ByteSource for ReplayByteSource {
    fn read_byte(&mut self) -> Result<u8> {
        self.bytes.pop_front().ok_or(Error::EndOfInput)
    }

    fn enter_raw_mode(&mut self) -> Result<()> {
        self.is_raw = true;
        self.mode_switches += 1;
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<()> {
        self.is_raw = false;
        self.mode_switches += 1;
        Ok(())
    }
}

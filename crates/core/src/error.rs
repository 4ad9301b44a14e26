use std::collections::TryReserveError;

use thiserror::Error;

use crate::shortcuts::ShortcutAction;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Out of memory while growing the line: {}", .0)]
    ResourceExhaustion(#[from] TryReserveError),

    #[error("Could not switch terminal mode: {}", .0)]
    TerminalMode(std::io::Error),

    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Shortcut `{}` has an empty byte sequence", .0)]
    EmptyShortcut(ShortcutAction),

    #[error("Shortcut `{}` contains a line terminator", .0)]
    ShortcutContainsTerminator(ShortcutAction),

    #[error("Shortcut `{}` contains the backspace byte (0x7f)", .0)]
    ShortcutContainsBackspace(ShortcutAction),

    #[error("Shortcut `{}` contains the interrupt byte (0x03)", .0)]
    ShortcutContainsInterrupt(ShortcutAction),

    #[error("Position {} is outside of a line of length {}", .position, .length)]
    CursorOutOfRange { position: usize, length: usize },

    #[error("Input ended before a line was accepted")]
    EndOfInput,

    #[error("Line input interrupted")]
    Interrupted,

    #[error("IO error: {}", .0)]
    Io(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    ConfigIo {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("The sub process exiting with non-success code.")]
    SubProcessExit,

    #[error("Error with sub process: {}", .0)]
    SubProcess(std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn config_io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::ConfigIo {
            file_description,
            path,
            original,
        }
    }

    /// Whether this error ends a prompt loop cleanly rather than as a failure.
    #[must_use]
    pub fn is_end_of_session(&self) -> bool {
        matches!(self, Self::EndOfInput | Self::Interrupted)
    }
}

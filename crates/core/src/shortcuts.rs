//! Named control and escape sequences recognised by the editor.
//!
//! A [`ShortcutTable`] is an ordered mapping from [`ShortcutAction`] to the raw
//! bytes a terminal sends for it. Seven actions can be rebound; cursor-right,
//! cursor-left and delete are always bound to the standard VT100 sequences.
//! Backspace ([`BACKSPACE`]) and Ctrl-C ([`INTERRUPT`]) are handled by the
//! editor before any matching.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Backspace as delivered by terminals in raw mode.
pub const BACKSPACE: u8 = 0x7f;
/// Ctrl-C. Raw mode stops the terminal from turning it into a signal.
pub const INTERRUPT: u8 = 0x03;

pub const DEFAULT_HEAD: &[u8] = &[0x01];
pub const DEFAULT_TAIL: &[u8] = &[0x05];
pub const DEFAULT_NEXT_BLOCK: &[u8] = &[0x1b, 0x5b, 0x31, 0x3b, 0x35, 0x43];
pub const DEFAULT_PREV_BLOCK: &[u8] = &[0x1b, 0x5b, 0x31, 0x3b, 0x35, 0x44];
pub const DEFAULT_COMPLETION: &[u8] = &[0x09];
pub const DEFAULT_DIVE_HISTORY: &[u8] = &[0x1b, 0x5b, 0x41];
pub const DEFAULT_FLOAT_HISTORY: &[u8] = &[0x1b, 0x5b, 0x42];

const CURSOR_RIGHT: &[u8] = &[0x1b, 0x5b, 0x43];
const CURSOR_LEFT: &[u8] = &[0x1b, 0x5b, 0x44];
const DELETE: &[u8] = &[0x1b, 0x5b, 0x33, 0x7e];

/// Returns true for the bytes that end a line.
#[must_use]
pub fn is_line_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Everything a byte sequence can be bound to.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ShortcutAction {
    Head,
    Tail,
    NextBlock,
    PrevBlock,
    Completion,
    DiveHistory,
    FloatHistory,
    CursorRight,
    CursorLeft,
    Delete,
}

impl ShortcutAction {
    /// The actions a caller may rebind, in matching priority order.
    pub const CONFIGURABLE: [ShortcutAction; 7] = [
        ShortcutAction::Head,
        ShortcutAction::Tail,
        ShortcutAction::NextBlock,
        ShortcutAction::PrevBlock,
        ShortcutAction::Completion,
        ShortcutAction::DiveHistory,
        ShortcutAction::FloatHistory,
    ];

    #[must_use]
    pub fn is_configurable(self) -> bool {
        !matches!(
            self,
            ShortcutAction::CursorRight | ShortcutAction::CursorLeft | ShortcutAction::Delete
        )
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Head => "head",
            ShortcutAction::Tail => "tail",
            ShortcutAction::NextBlock => "next_block",
            ShortcutAction::PrevBlock => "prev_block",
            ShortcutAction::Completion => "completion",
            ShortcutAction::DiveHistory => "dive_history",
            ShortcutAction::FloatHistory => "float_history",
            ShortcutAction::CursorRight => "cursor_right",
            ShortcutAction::CursorLeft => "cursor_left",
            ShortcutAction::Delete => "delete",
        }
    }

    fn default_sequence(self) -> &'static [u8] {
        match self {
            ShortcutAction::Head => DEFAULT_HEAD,
            ShortcutAction::Tail => DEFAULT_TAIL,
            ShortcutAction::NextBlock => DEFAULT_NEXT_BLOCK,
            ShortcutAction::PrevBlock => DEFAULT_PREV_BLOCK,
            ShortcutAction::Completion => DEFAULT_COMPLETION,
            ShortcutAction::DiveHistory => DEFAULT_DIVE_HISTORY,
            ShortcutAction::FloatHistory => DEFAULT_FLOAT_HISTORY,
            ShortcutAction::CursorRight => CURSOR_RIGHT,
            ShortcutAction::CursorLeft => CURSOR_LEFT,
            ShortcutAction::Delete => DELETE,
        }
    }
}

impl Display for ShortcutAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable, validated set of shortcut bindings.
///
/// Iteration order is matching priority: the configurable actions first, in
/// [`ShortcutAction::CONFIGURABLE`] order, then the fixed ones.
#[derive(Clone, Debug)]
pub struct ShortcutTable {
    entries: IndexMap<ShortcutAction, Vec<u8>>,
}

impl Default for ShortcutTable {
    fn default() -> Self {
        // The default sequences are known to be valid.
        Self {
            entries: ShortcutAction::CONFIGURABLE
                .iter()
                .chain(&[
                    ShortcutAction::CursorRight,
                    ShortcutAction::CursorLeft,
                    ShortcutAction::Delete,
                ])
                .map(|action| (*action, action.default_sequence().to_vec()))
                .collect(),
        }
    }
}

impl ShortcutTable {
    /// Builds a table from optional overrides for the configurable actions.
    ///
    /// Actions without an override keep their default sequence. Overrides for
    /// fixed actions are ignored with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if any resulting sequence is empty or contains a line
    /// terminator, the backspace byte or the interrupt byte.
    pub fn with_overrides<I>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ShortcutAction, Vec<u8>)>,
    {
        let mut table = Self::default();

        for (action, sequence) in overrides {
            if !action.is_configurable() {
                log::warn!("Ignoring override for fixed shortcut `{action}`");
                continue;
            }
            validate_sequence(action, &sequence)?;
            table.entries.insert(action, sequence);
        }

        Ok(table)
    }

    /// Sequence bound to `action`.
    #[must_use]
    pub fn sequence(&self, action: ShortcutAction) -> &[u8] {
        self.entries
            .get(&action)
            .map_or_else(|| action.default_sequence(), Vec::as_slice)
    }

    /// Entries in matching priority order.
    pub fn iter(&self) -> impl Iterator<Item = (ShortcutAction, &[u8])> {
        self.entries
            .iter()
            .map(|(action, sequence)| (*action, sequence.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_sequence(action: ShortcutAction, sequence: &[u8]) -> Result<()> {
    if sequence.is_empty() {
        return Err(Error::EmptyShortcut(action));
    }

    if sequence.iter().any(|byte| is_line_terminator(*byte)) {
        return Err(Error::ShortcutContainsTerminator(action));
    }

    if sequence.contains(&BACKSPACE) {
        return Err(Error::ShortcutContainsBackspace(action));
    }

    if sequence.contains(&INTERRUPT) {
        return Err(Error::ShortcutContainsInterrupt(action));
    }

    Ok(())
}

//! Incremental recognition of shortcut sequences.
//!
//! Terminals deliver escape sequences one byte at a time with no terminator,
//! so after every byte the editor asks [`classify`] whether to keep waiting,
//! run an action, or treat the input as text.

use crate::error::Result;
use crate::shortcuts::{ShortcutAction, ShortcutTable};

/// Outcome of classifying the bytes accumulated so far.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Classification {
    /// The bytes are a proper prefix of at least one sequence.
    Pending,
    /// No sequence can match any more.
    Literal,
    /// A sequence matched exactly.
    Bound(ShortcutAction),
}

/// Classifies `accumulator` against every entry of `table`.
///
/// Entries are tested in table order and the first one to complete wins, so a
/// configurable binding shadows a fixed one with the same bytes. An empty
/// accumulator is [`Classification::Pending`].
#[must_use]
pub fn classify(table: &ShortcutTable, accumulator: &[u8]) -> Classification {
    let mut possible: Vec<(ShortcutAction, &[u8])> = table
        .iter()
        .filter(|(_, sequence)| sequence.len() >= accumulator.len())
        .collect();

    for (i, byte) in accumulator.iter().enumerate() {
        let mut completed = None;

        possible.retain(|(action, sequence)| {
            if sequence[i] != *byte {
                return false;
            }
            if completed.is_none() && sequence.len() == i + 1 {
                completed = Some(*action);
            }
            true
        });

        if let Some(action) = completed {
            return Classification::Bound(action);
        }
    }

    if possible.is_empty() {
        Classification::Literal
    } else {
        Classification::Pending
    }
}

/// Accumulates bytes between calls to [`classify`].
#[derive(Default, Debug)]
pub struct ShortcutMatcher {
    pending: Vec<u8>,
}

impl ShortcutMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `byte` and classifies the accumulated bytes.
    ///
    /// The accumulator is cleared on anything but [`Classification::Pending`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::ResourceExhaustion`] if the accumulator
    /// cannot grow.
    pub fn feed(&mut self, table: &ShortcutTable, byte: u8) -> Result<Classification> {
        self.pending.try_reserve(1)?;
        self.pending.push(byte);

        let classification = classify(table, &self.pending);
        if classification != Classification::Pending {
            self.pending.clear();
        }

        Ok(classification)
    }

    /// Whether a multi-byte sequence is partially received.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

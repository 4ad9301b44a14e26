//! Editor configuration and configuration path utilities.
//!
//! The configuration file is YAML. Shortcut sequences can be written either as
//! a list of byte values or as a string whose bytes are used as-is:
//!
//! ```yaml
//! history_size: 200
//! shortcuts:
//!   head: [27, 79, 72]
//!   dive_history: "\e[A"
//! ```

use serde::Deserialize;

use crate::editor::{LineEditor, LineEditorBuilder, DEFAULT_HISTORY_SIZE};
use crate::error::Result;
use crate::shortcuts::ShortcutAction;

/// Default path for the editor configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.rwh/config.yml";

/// A shortcut sequence as written in the configuration file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SequenceDefinition {
    Bytes(Vec<u8>),
    Text(String),
}

impl SequenceDefinition {
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            SequenceDefinition::Bytes(bytes) => bytes.clone(),
            SequenceDefinition::Text(text) => text.as_bytes().to_vec(),
        }
    }
}

/// Overrides for the configurable shortcuts. Unset entries keep the default.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShortcutDefinitions {
    pub head: Option<SequenceDefinition>,
    pub tail: Option<SequenceDefinition>,
    pub next_block: Option<SequenceDefinition>,
    pub prev_block: Option<SequenceDefinition>,
    pub completion: Option<SequenceDefinition>,
    pub dive_history: Option<SequenceDefinition>,
    pub float_history: Option<SequenceDefinition>,
}

impl ShortcutDefinitions {
    /// The set overrides, in matching priority order.
    #[must_use]
    pub fn overrides(&self) -> Vec<(ShortcutAction, Vec<u8>)> {
        [
            (ShortcutAction::Head, &self.head),
            (ShortcutAction::Tail, &self.tail),
            (ShortcutAction::NextBlock, &self.next_block),
            (ShortcutAction::PrevBlock, &self.prev_block),
            (ShortcutAction::Completion, &self.completion),
            (ShortcutAction::DiveHistory, &self.dive_history),
            (ShortcutAction::FloatHistory, &self.float_history),
        ]
        .into_iter()
        .filter_map(|(action, definition)| {
            definition
                .as_ref()
                .map(|definition| (action, definition.to_bytes()))
        })
        .collect()
    }
}

/// Everything configurable about a [`LineEditor`].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    #[serde(default)]
    pub shortcuts: ShortcutDefinitions,
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            shortcuts: ShortcutDefinitions::default(),
        }
    }
}

impl EditorConfig {
    /// A builder pre-filled with this configuration.
    #[must_use]
    pub fn builder(&self) -> LineEditorBuilder {
        self.shortcuts.overrides().into_iter().fold(
            LineEditor::builder().history_size(self.history_size),
            |builder, (action, sequence)| builder.shortcut(action, sequence),
        )
    }

    /// Validates the configuration and builds an editor from it.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero history size or an invalid sequence.
    pub fn build_editor(&self) -> Result<LineEditor> {
        self.builder().build()
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rwh_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

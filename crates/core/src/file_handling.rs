use std::fs::File;
use std::path::Path;

use log::debug;

use crate::config::EditorConfig;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::config_io_error(file_description.to_string(), path.to_string(), e))
}

/// Loads the editor configuration at `config_path`.
///
/// A missing file is not an error: `Ok(None)` means "use the defaults".
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn get_editor_config(config_path: &str) -> Result<Option<EditorConfig>> {
    if !Path::new(config_path).exists() {
        debug!("No editor config at `{config_path}`");
        return Ok(None);
    }

    let reader = get_reader("config", config_path)?;

    let config = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "parsing".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    Ok(Some(config))
}

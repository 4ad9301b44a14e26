use std::process::{Command, Stdio};

use log::info;
use rwh_core::error::{Error, Result};

/// Default shell to use for running accepted lines
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Runs `line` with `shell -c`, inheriting the standard streams.
///
/// # Errors
///
/// Returns an error if the shell cannot be started or exits with a non-zero
/// status.
pub fn execute_line(shell: &str, line: &str) -> Result<()> {
    info!("Running `{line}` with {shell}");

    let subprocess_exit_success = Command::new(shell)
        .args(["-c", line])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(Error::SubProcess)?
        .success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}

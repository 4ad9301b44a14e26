//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure of the `rwh`
//! binary using the `clap` crate.

use clap::Parser;

/// Prompt shown when none is given on the command line.
pub const DEFAULT_PROMPT: &str = "> ";

/// Command-line arguments for the rwh prompt.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rwh_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rwh", "--dry-run", "-n", "10"]);
/// assert!(args.dry_run);
/// assert_eq!(args.history_size, Some(10));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the editor config file YAML.
    ///
    /// If not provided, defaults to `~/.rwh/config.yml`. A missing default
    /// file means built-in defaults are used.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Number of accepted lines kept in history.
    ///
    /// Overrides `history_size` from the config file.
    #[arg(long, short = 'n', value_parser = clap::value_parser!(usize))]
    pub history_size: Option<usize>,

    /// Text printed before each line.
    #[arg(long, short = 'p', default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Only echo accepted lines, do not run them.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["rwh"]);

        assert!(args.config_path.is_none());
        assert!(args.history_size.is_none());
        assert_eq!(args.prompt, DEFAULT_PROMPT);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "rwh",
            "-c",
            "/custom/config.yml",
            "-n",
            "5",
            "-p",
            "$ ",
            "-d",
        ]);

        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
        assert_eq!(args.history_size, Some(5));
        assert_eq!(args.prompt, "$ ");
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "rwh",
            "--config-path",
            "/custom/config.yml",
            "--history-size",
            "12",
            "--prompt",
            "rwh> ",
            "--dry-run",
        ]);

        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
        assert_eq!(args.history_size, Some(12));
        assert_eq!(args.prompt, "rwh> ");
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_reject_non_numeric_history_size() {
        let result = Args::try_parse_from(["rwh", "--history-size", "lots"]);
        assert!(result.is_err());
    }
}

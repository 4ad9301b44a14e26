use std::env;
use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};
use rwh_core::byte_source::TerminalByteSource;
use rwh_core::config::{self, EditorConfig};
use rwh_core::editor::LineEditor;
use rwh_core::error::Result;
use rwh_core::file_handling;

use rwh_cli::cli_args::Args;
use rwh_cli::execution::DEFAULT_SHELL;
use rwh_cli::prompt_loop::{run_prompt_loop, LoopSettings};

/// Load the editor configuration and apply command-line overrides
fn initialize_editor(args: &Args) -> Result<LineEditor> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let mut editor_config = match file_handling::get_editor_config(&config_path)? {
        Some(editor_config) => editor_config,
        None => {
            if args.config_path.is_some() {
                warn!("Config file `{config_path}` not found, using defaults");
            }
            EditorConfig::default()
        }
    };

    if let Some(history_size) = args.history_size {
        editor_config.history_size = history_size;
    }

    editor_config.build_editor()
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let shell = env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string());

    let mut editor = initialize_editor(&args)?;

    let settings = LoopSettings {
        prompt: args.prompt,
        dry_run: args.dry_run,
        shell,
    };

    run_prompt_loop(&mut editor, &mut TerminalByteSource, &mut stdout(), &settings)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

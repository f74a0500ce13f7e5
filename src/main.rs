//! codeprompt: build model prompts for editor code actions.
//!
//! This is the main entry point for the `codeprompt` CLI. It parses
//! arguments, loads configuration, sets up logging, dispatches to the
//! command handler, and maps errors to exit codes.

use codeprompt::cli::Cli;
use codeprompt::context::PromptContext;
use codeprompt::error::Result;
use codeprompt::{commands, exit_codes, logging};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = PromptContext::resolve(cli.config.as_deref())?;

    let level = logging::effective_level(cli.log_level.as_deref(), ctx.config.log_level)?;
    logging::init_logging(level);
    ctx.config.warn_ignored_overrides();
    debug!(
        working_dir = %ctx.working_dir.display(),
        overrides = ctx.config.custom_prompts.overridden_keys().len(),
        "context resolved"
    );

    commands::dispatch(&ctx, &cli.command)
}

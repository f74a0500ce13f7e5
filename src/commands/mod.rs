//! Command implementations for codeprompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command returns the text to print, so the
//! commands themselves never touch stdout.

mod create;
mod enhance;
mod render;
mod show;

pub use create::cmd_create;
pub use enhance::cmd_enhance;
pub use render::cmd_render;
pub use show::{cmd_labels, cmd_show};

use crate::cli::Command;
use crate::context::PromptContext;
use crate::error::{CodepromptError, Result};
use std::io::Write;

/// Dispatch a command to its implementation and print its output.
pub fn dispatch(ctx: &PromptContext, command: &Command) -> Result<()> {
    let output = run(ctx, command)?;
    write_output(&mut std::io::stdout().lock(), &output)
}

/// Run a command and return the text it produces.
pub fn run(ctx: &PromptContext, command: &Command) -> Result<String> {
    match command {
        Command::Create(args) => cmd_create(ctx, args),
        Command::Render(args) => cmd_render(ctx, args),
        Command::Enhance(args) => cmd_enhance(ctx, args),
        Command::Show(args) => cmd_show(ctx, args),
        Command::Labels => cmd_labels(),
    }
}

/// Write command output verbatim, adding a final newline only if missing.
fn write_output<W: Write>(out: &mut W, text: &str) -> Result<()> {
    let write = |out: &mut W| -> std::io::Result<()> {
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()
    };
    write(out).map_err(|e| CodepromptError::IoError(format!("failed to write output: {}", e)))
}

//! Implementation of the `codeprompt render` command.
//!
//! Substitutes a JSON params object into a caller-supplied template,
//! bypassing the built-in registry.

use crate::cli::RenderArgs;
use crate::context::PromptContext;
use crate::error::Result;
use crate::prompt::{PromptParams, create_prompt};
use tracing::debug;

/// Execute the `codeprompt render` command.
pub fn cmd_render(ctx: &PromptContext, args: &RenderArgs) -> Result<String> {
    let template = ctx.read_input(&args.template_file)?;

    let params = match &args.params {
        Some(path) => PromptParams::from_json_str(&ctx.read_input(path)?)?,
        None => PromptParams::new(),
    };
    debug!(
        template = %args.template_file.display(),
        params = params.len(),
        "rendering template file"
    );

    Ok(create_prompt(&template, &params))
}

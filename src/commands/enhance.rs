//! Implementation of the `codeprompt enhance` command.

use crate::cli::EnhanceArgs;
use crate::context::PromptContext;
use crate::error::{CodepromptError, Result};
use crate::prompt::enhance_request;

/// Execute the `codeprompt enhance` command.
pub fn cmd_enhance(ctx: &PromptContext, args: &EnhanceArgs) -> Result<String> {
    if args.text.trim().is_empty() {
        return Err(CodepromptError::UserError(
            "nothing to enhance: prompt text is empty".to_string(),
        ));
    }

    Ok(enhance_request(&ctx.registry, ctx.custom_prompts(), &args.text))
}

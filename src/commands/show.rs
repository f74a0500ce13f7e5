//! Implementation of the `codeprompt show` and `codeprompt labels` commands.

use crate::cli::ShowArgs;
use crate::context::PromptContext;
use crate::error::{CodepromptError, Result};
use crate::prompt::{CODE_ACTION_LABELS, TemplateKey};

/// Execute the `codeprompt show` command.
///
/// Prints the template that `create`/`enhance` would use, or the built-in
/// one with `--default`.
pub fn cmd_show(ctx: &PromptContext, args: &ShowArgs) -> Result<String> {
    let key = args
        .key
        .parse::<TemplateKey>()
        .map_err(|e| CodepromptError::UserError(e.to_string()))?;

    let template = if args.default {
        ctx.registry.default_for(key)
    } else {
        ctx.registry.template(ctx.custom_prompts(), key)
    };

    Ok(template.to_string())
}

/// Execute the `codeprompt labels` command.
pub fn cmd_labels() -> Result<String> {
    let lines: Vec<String> = CODE_ACTION_LABELS
        .iter()
        .map(|(kind, label)| format!("{:<8} {}", kind.as_str(), label))
        .collect();
    Ok(lines.join("\n"))
}

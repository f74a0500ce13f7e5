//! Implementation of the `codeprompt create` command.
//!
//! Collects the standard placeholders from flags and files, then renders
//! the effective template for the requested code action.

use crate::cli::CreateArgs;
use crate::context::PromptContext;
use crate::error::{CodepromptError, Result};
use crate::prompt::{ActionKind, DIAGNOSTICS_PARAM, Diagnostic, PromptParams};
use std::path::Path;
use tracing::debug;

/// Execute the `codeprompt create` command.
///
/// Parameters are applied in the order filePath, userInput, selectedText,
/// diagnostics, then each `--param` as given.
pub fn cmd_create(ctx: &PromptContext, args: &CreateArgs) -> Result<String> {
    let kind = args
        .kind
        .parse::<ActionKind>()
        .map_err(|e| CodepromptError::UserError(e.to_string()))?;

    let params = build_params(ctx, args)?;
    debug!(%kind, params = params.len(), "creating code action prompt");

    Ok(ctx.registry.create(kind, &params, ctx.custom_prompts()))
}

fn build_params(ctx: &PromptContext, args: &CreateArgs) -> Result<PromptParams> {
    let mut params = PromptParams::new();

    if let Some(file_path) = &args.file_path {
        params.insert("filePath", file_path.as_str());
    }
    if let Some(user_input) = &args.user_input {
        params.insert("userInput", user_input.as_str());
    }

    let selected_text = match (&args.selected_text, &args.selection_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(ctx.read_input(path)?),
        (None, None) => None,
    };
    if let Some(selected_text) = selected_text {
        params.insert("selectedText", selected_text);
    }

    if let Some(path) = &args.diagnostics {
        params.insert(DIAGNOSTICS_PARAM, read_diagnostics(ctx, path)?);
    }

    for raw in &args.params {
        let (name, value) = parse_param(raw)?;
        params.insert(name, value);
    }

    Ok(params)
}

/// Read a JSON array of diagnostics.
fn read_diagnostics(ctx: &PromptContext, path: &Path) -> Result<Vec<Diagnostic>> {
    let content = ctx.read_input(path)?;
    serde_json::from_str(&content).map_err(|e| {
        CodepromptError::InvalidParams(format!(
            "diagnostics file '{}' must be a JSON array of {{message, source?, code?}}: {}",
            path.display(),
            e
        ))
    })
}

/// Split a `KEY=VALUE` argument. The value may itself contain `=`.
fn parse_param(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(CodepromptError::UserError(format!(
            "invalid --param '{}': expected KEY=VALUE",
            raw
        ))),
    }
}

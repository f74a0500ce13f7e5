//! codeprompt: prompt templates for editor code actions.
//!
//! The [`prompt`] module holds the engine: default templates for the
//! explain / fix / improve actions and the enhance instruction, user
//! override resolution, diagnostics formatting and `${name}` substitution.
//! The remaining modules make up the `codeprompt` CLI around it.
//!
//! ```
//! use codeprompt::prompt::{ActionKind, Diagnostic, PromptParams, TemplateRegistry};
//!
//! let registry = TemplateRegistry::builtin();
//! let params = PromptParams::new()
//!     .text("filePath", "src/lib.rs")
//!     .text("selectedText", "let x = 1;")
//!     .diagnostics(vec![Diagnostic::new("unused variable `x`").with_source("rustc")]);
//!
//! let prompt = registry.create(ActionKind::Fix, &params, None);
//! assert!(prompt.contains("- [rustc] unused variable `x`"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod prompt;

#[cfg(test)]
mod test_support;

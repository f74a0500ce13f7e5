//! Prompt templates for editor code actions.
//!
//! This module provides:
//!
//! - **Kinds**: the code actions (`EXPLAIN`, `FIX`, `IMPROVE`) and their labels
//! - **Registry**: built-in templates plus user override resolution
//! - **Diagnostics**: rendering of editor problems into `${diagnosticText}`
//! - **Template**: literal `${name}` substitution
//!
//! # Template Syntax
//!
//! ```text
//! Fix any issues in the following code from file path @/${filePath}
//! ${diagnosticText}
//! ${userInput}
//! ```
//!
//! Nothing in this module performs I/O. Template lookup and substitution
//! cannot fail; only decoding loosely typed JSON into [`PromptParams`]
//! reports errors.

mod diagnostics;
mod kind;
mod params;
mod registry;
mod template;

pub use diagnostics::{DIAGNOSTICS_HEADER, Diagnostic, DiagnosticCode, format_diagnostics};
pub use kind::{ActionKind, CODE_ACTION_LABELS, TemplateKey, UnknownKind};
pub use params::{DIAGNOSTICS_PARAM, ParamValue, PromptParams};
pub use registry::{CustomPrompts, TemplateRegistry, create_prompt, enhance_request};
pub use template::{
    DIAGNOSTIC_TEXT_PLACEHOLDER, USER_INPUT_PLACEHOLDER, apply_template, placeholder,
};

//! Config struct definition and default implementation.

use super::types::LogLevel;
use crate::prompt::CustomPrompts;
use serde::{Deserialize, Serialize};

/// Configuration for codeprompt.
///
/// This struct represents the contents of `.codeprompt.yaml`:
///
/// ```yaml
/// log_level: warn
/// custom_prompts:
///   FIX: |
///     Fix ${filePath}
///     ${diagnosticText}
///     ${selectedText}
///   enhance: "Rewrite this prompt so it is specific and testable:"
/// ```
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging verbosity when `--log-level` is not given (default: "warn").
    #[serde(default)]
    pub log_level: LogLevel,

    /// Overrides for the built-in templates, keyed `EXPLAIN`, `FIX`,
    /// `IMPROVE` and `enhance`.
    #[serde(default)]
    pub custom_prompts: CustomPrompts,
}

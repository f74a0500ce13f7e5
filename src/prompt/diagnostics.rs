//! Rendering of editor diagnostics into prompt text.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Header line introducing the diagnostics block.
pub const DIAGNOSTICS_HEADER: &str = "Current problems detected:";

/// Source label used when a diagnostic does not name one.
const DEFAULT_SOURCE: &str = "Error";

/// A single reported code problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable problem description.
    #[serde(default)]
    pub message: String,

    /// Tool that reported the problem (e.g. "TypeScript", "eslint").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Tool-specific problem code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<DiagnosticCode>,
}

/// Tool-specific problem code.
///
/// Most tools report a string or an integer. Some (eslint, for one) send
/// `{ value, target }` where `target` links to the rule docs; only `value`
/// is rendered. Anything else is kept as raw JSON and rendered compactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiagnosticCode {
    Number(i64),
    Text(String),
    Linked {
        value: Box<DiagnosticCode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<Value>,
    },
    Other(Value),
}

impl DiagnosticCode {
    /// Empty strings and zero carry no information and are not rendered.
    fn is_blank(&self) -> bool {
        match self {
            DiagnosticCode::Number(n) => *n == 0,
            DiagnosticCode::Text(s) => s.is_empty(),
            DiagnosticCode::Linked { value, .. } => value.is_blank(),
            DiagnosticCode::Other(value) => value.is_null(),
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCode::Number(n) => write!(f, "{}", n),
            DiagnosticCode::Text(s) => f.write_str(s),
            DiagnosticCode::Linked { value, .. } => write!(f, "{}", value),
            DiagnosticCode::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for DiagnosticCode {
    fn from(s: &str) -> Self {
        DiagnosticCode::Text(s.to_string())
    }
}

impl From<i64> for DiagnosticCode {
    fn from(n: i64) -> Self {
        DiagnosticCode::Number(n)
    }
}

impl Diagnostic {
    /// Create a diagnostic with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
            code: None,
        }
    }

    /// Set the reporting source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the problem code.
    pub fn with_code(mut self, code: impl Into<DiagnosticCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    fn source_label(&self) -> &str {
        match self.source.as_deref() {
            Some(source) if !source.is_empty() => source,
            _ => DEFAULT_SOURCE,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- [{}] {}", self.source_label(), self.message)?;
        if let Some(code) = self.code.as_ref().filter(|c| !c.is_blank()) {
            write!(f, " ({})", code)?;
        }
        Ok(())
    }
}

/// Format diagnostics as a bullet list suitable for `${diagnosticText}`.
///
/// Returns an empty string when there is nothing to report. Otherwise the
/// block starts with a newline and the header, followed by one line per
/// diagnostic in input order, with no trailing newline.
///
/// ```
/// use codeprompt::prompt::{Diagnostic, format_diagnostics};
///
/// let diags = [Diagnostic::new("bad type").with_source("TypeScript").with_code("2322")];
/// assert_eq!(
///     format_diagnostics(Some(diags.as_slice())),
///     "\nCurrent problems detected:\n- [TypeScript] bad type (2322)"
/// );
/// assert_eq!(format_diagnostics(None), "");
/// ```
pub fn format_diagnostics(diagnostics: Option<&[Diagnostic]>) -> String {
    let diagnostics = match diagnostics {
        Some(d) if !d.is_empty() => d,
        _ => return String::new(),
    };

    let lines: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    format!("\n{}\n{}", DIAGNOSTICS_HEADER, lines.join("\n"))
}

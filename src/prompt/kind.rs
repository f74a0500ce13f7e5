//! Template kinds and their display labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category of code-action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Explain,
    Fix,
    Improve,
}

/// Display labels for every action kind, in presentation order.
pub const CODE_ACTION_LABELS: [(ActionKind, &str); 3] = [
    (ActionKind::Fix, "Fix Issues"),
    (ActionKind::Explain, "Explain Code"),
    (ActionKind::Improve, "Improve Code"),
];

impl ActionKind {
    /// All action kinds.
    pub const ALL: [ActionKind; 3] = [ActionKind::Explain, ActionKind::Fix, ActionKind::Improve];

    /// Canonical upper-case name (`EXPLAIN`, `FIX`, `IMPROVE`).
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Explain => "EXPLAIN",
            ActionKind::Fix => "FIX",
            ActionKind::Improve => "IMPROVE",
        }
    }

    /// User-facing label for editor menus.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Explain => "Explain Code",
            ActionKind::Fix => "Fix Issues",
            ActionKind::Improve => "Improve Code",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown template kind '{}' (expected one of: explain, fix, improve, enhance)",
            self.0
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ActionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explain" => Ok(ActionKind::Explain),
            "fix" => Ok(ActionKind::Fix),
            "improve" => Ok(ActionKind::Improve),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Key into the override map: one of the action kinds, or the enhance prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    Action(ActionKind),
    Enhance,
}

impl TemplateKey {
    /// Name of the key as it appears in a custom prompt map.
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKey::Action(kind) => kind.as_str(),
            TemplateKey::Enhance => "enhance",
        }
    }
}

impl From<ActionKind> for TemplateKey {
    fn from(kind: ActionKind) -> Self {
        TemplateKey::Action(kind)
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("enhance") {
            return Ok(TemplateKey::Enhance);
        }
        s.parse::<ActionKind>().map(TemplateKey::Action)
    }
}

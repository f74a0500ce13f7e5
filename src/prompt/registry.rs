//! Built-in templates and user override resolution.

use super::kind::{ActionKind, TemplateKey};
use super::params::PromptParams;
use super::template::apply_template;
use serde::{Deserialize, Serialize};
use tracing::debug;

const EXPLAIN_TEMPLATE: &str = "
Explain the following code from file path @/${filePath}:
${userInput}

```
${selectedText}
```

Please provide a clear and concise explanation of what this code does, including:
1. The purpose and functionality
2. Key components and their interactions
3. Important patterns or techniques used
";

const FIX_TEMPLATE: &str = "
Fix any issues in the following code from file path @/${filePath}
${diagnosticText}
${userInput}

```
${selectedText}
```

Please:
1. Address all detected problems listed above (if any)
2. Identify any other potential bugs or issues
3. Provide corrected code
4. Explain what was fixed and why
";

const IMPROVE_TEMPLATE: &str = "
Improve the following code from file path @/${filePath}:
${userInput}

```
${selectedText}
```

Please suggest improvements for:
1. Code readability and maintainability
2. Performance optimization
3. Best practices and patterns
4. Error handling and edge cases

Provide the improved code along with explanations for each enhancement.
";

const ENHANCE_TEMPLATE: &str = "Generate an enhanced version of this prompt (reply with only the enhanced prompt - no conversation, explanations, lead-in, bullet points, placeholders, or surrounding quotes):";

/// User-supplied replacements for the built-in templates.
///
/// Keys follow the names editors store them under: `EXPLAIN`, `FIX`,
/// `IMPROVE` and `enhance`. Key names are case-sensitive and unknown keys
/// (including `fix` or `Enhance`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomPrompts {
    #[serde(rename = "EXPLAIN", skip_serializing_if = "Option::is_none")]
    pub explain: Option<String>,

    #[serde(rename = "FIX", skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,

    #[serde(rename = "IMPROVE", skip_serializing_if = "Option::is_none")]
    pub improve: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhance: Option<String>,
}

impl CustomPrompts {
    /// The override for `key`, if one is set and non-empty.
    pub fn get(&self, key: TemplateKey) -> Option<&str> {
        let value = match key {
            TemplateKey::Action(ActionKind::Explain) => &self.explain,
            TemplateKey::Action(ActionKind::Fix) => &self.fix,
            TemplateKey::Action(ActionKind::Improve) => &self.improve,
            TemplateKey::Enhance => &self.enhance,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// Set or clear the override for `key`.
    pub fn set(&mut self, key: TemplateKey, template: Option<String>) {
        let slot = match key {
            TemplateKey::Action(ActionKind::Explain) => &mut self.explain,
            TemplateKey::Action(ActionKind::Fix) => &mut self.fix,
            TemplateKey::Action(ActionKind::Improve) => &mut self.improve,
            TemplateKey::Enhance => &mut self.enhance,
        };
        *slot = template;
    }

    /// Keys that currently carry a usable override.
    pub fn overridden_keys(&self) -> Vec<TemplateKey> {
        ActionKind::ALL
            .into_iter()
            .map(TemplateKey::Action)
            .chain(std::iter::once(TemplateKey::Enhance))
            .filter(|key| self.get(*key).is_some())
            .collect()
    }
}

/// Read-only set of default templates.
///
/// Build one with [`TemplateRegistry::builtin`] and pass it to whoever needs
/// to resolve templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    explain: String,
    fix: String,
    improve: String,
    enhance: String,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    /// Registry holding the shipped default templates.
    pub fn builtin() -> Self {
        Self {
            explain: EXPLAIN_TEMPLATE.to_string(),
            fix: FIX_TEMPLATE.to_string(),
            improve: IMPROVE_TEMPLATE.to_string(),
            enhance: ENHANCE_TEMPLATE.to_string(),
        }
    }

    /// Default template for an action kind, ignoring overrides.
    pub fn default_template(&self, kind: ActionKind) -> &str {
        match kind {
            ActionKind::Explain => &self.explain,
            ActionKind::Fix => &self.fix,
            ActionKind::Improve => &self.improve,
        }
    }

    /// Default enhance instruction, ignoring overrides.
    pub fn default_enhance(&self) -> &str {
        &self.enhance
    }

    /// Default template for any key, ignoring overrides.
    pub fn default_for(&self, key: TemplateKey) -> &str {
        match key {
            TemplateKey::Action(kind) => self.default_template(kind),
            TemplateKey::Enhance => self.default_enhance(),
        }
    }

    /// Effective template for `key`: the user's override when set, else the default.
    pub fn template<'a>(&'a self, custom: Option<&'a CustomPrompts>, key: TemplateKey) -> &'a str {
        match custom.and_then(|c| c.get(key)) {
            Some(template) => {
                debug!(%key, "using custom template");
                template
            }
            None => {
                debug!(%key, "using default template");
                self.default_for(key)
            }
        }
    }

    /// Effective template for a code action.
    pub fn code_action<'a>(
        &'a self,
        custom: Option<&'a CustomPrompts>,
        kind: ActionKind,
    ) -> &'a str {
        self.template(custom, TemplateKey::Action(kind))
    }

    /// Effective enhance instruction.
    pub fn enhance<'a>(&'a self, custom: Option<&'a CustomPrompts>) -> &'a str {
        self.template(custom, TemplateKey::Enhance)
    }

    /// Resolve the template for `kind` and substitute `params` into it.
    pub fn create(
        &self,
        kind: ActionKind,
        params: &PromptParams,
        custom: Option<&CustomPrompts>,
    ) -> String {
        apply_template(self.code_action(custom, kind), params)
    }
}

/// Substitute `params` into a caller-supplied template.
pub fn create_prompt(template: &str, params: &PromptParams) -> String {
    apply_template(template, params)
}

/// Full enhance request: the instruction, a blank line, then the user's text.
pub fn enhance_request(
    registry: &TemplateRegistry,
    custom: Option<&CustomPrompts>,
    text: &str,
) -> String {
    format!("{}\n\n{}", registry.enhance(custom), text)
}

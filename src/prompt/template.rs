//! Placeholder substitution engine.
//!
//! Placeholders have the literal form `${name}` and are found by plain text
//! search. There is no escaping, no conditionals and no error for unknown
//! names: a placeholder nobody supplied stays in the output so the gap is
//! visible to whoever reads the prompt. The one exception is
//! `${userInput}`, which is always cleared after substitution.
//!
//! # Ordering
//!
//! Parameters are applied one at a time in insertion order. Each parameter
//! is a single pass over the current text, so text inserted by one
//! parameter can be matched by a parameter applied later, but never by the
//! same one.

use super::diagnostics::format_diagnostics;
use super::params::{DIAGNOSTICS_PARAM, ParamValue, PromptParams};
use tracing::trace;

/// Placeholder that receives the rendered `diagnostics` parameter.
pub const DIAGNOSTIC_TEXT_PLACEHOLDER: &str = "${diagnosticText}";

/// Placeholder cleared after all parameters are applied.
pub const USER_INPUT_PLACEHOLDER: &str = "${userInput}";

/// Build the literal placeholder text for a parameter name.
pub fn placeholder(name: &str) -> String {
    format!("${{{}}}", name)
}

fn render_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Text(text) => text.clone(),
        ParamValue::Diagnostics(diagnostics) => format_diagnostics(Some(diagnostics.as_slice())),
    }
}

/// Substitute `params` into `template`.
///
/// # Examples
///
/// ```
/// use codeprompt::prompt::{PromptParams, apply_template};
///
/// let params = PromptParams::new().text("name", "Ann");
/// assert_eq!(apply_template("Hi ${name}!", &params), "Hi Ann!");
///
/// // `${userInput}` is always cleared; other unknown placeholders stay.
/// let empty = PromptParams::new();
/// assert_eq!(apply_template("${userInput}", &empty), "");
/// assert_eq!(apply_template("${filePath}", &empty), "${filePath}");
/// ```
pub fn apply_template(template: &str, params: &PromptParams) -> String {
    let mut result = template.to_string();

    for (name, value) in params.iter() {
        let target = if name == DIAGNOSTICS_PARAM {
            DIAGNOSTIC_TEXT_PLACEHOLDER.to_string()
        } else {
            placeholder(name)
        };
        if result.contains(&target) {
            result = result.replace(&target, &render_value(value));
        } else {
            trace!(param = name, "placeholder not present in template");
        }
    }

    result.replace(USER_INPUT_PLACEHOLDER, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Diagnostic;

    fn params<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> PromptParams {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_simple_substitution() {
        let result = apply_template("Hi ${name}!", &params([("name", "Ann")]));
        assert_eq!(result, "Hi Ann!");
    }

    #[test]
    fn test_no_placeholders() {
        let result = apply_template("Just plain text", &PromptParams::new());
        assert_eq!(result, "Just plain text");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(apply_template("", &params([("x", "1")])), "");
    }

    #[test]
    fn test_user_input_is_always_cleared() {
        assert_eq!(apply_template("${userInput}", &PromptParams::new()), "");
        assert_eq!(
            apply_template("a${userInput}b${userInput}c", &PromptParams::new()),
            "abc"
        );
    }

    #[test]
    fn test_supplied_user_input_is_used() {
        let result = apply_template("> ${userInput}", &params([("userInput", "why?")]));
        assert_eq!(result, "> why?");
    }

    #[test]
    fn test_unsupplied_placeholder_is_left_verbatim() {
        assert_eq!(
            apply_template("${filePath}", &PromptParams::new()),
            "${filePath}"
        );
    }

    #[test]
    fn test_multiple_occurrences() {
        let result = apply_template("${x}-${x}-${x}", &params([("x", "X")]));
        assert_eq!(result, "X-X-X");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let result = apply_template("${a}${b}", &params([("a", "A"), ("b", "B")]));
        assert_eq!(result, "AB");
    }

    #[test]
    fn test_brace_only_syntax_is_not_a_placeholder() {
        let result = apply_template("{name} $name ${name}", &params([("name", "Ann")]));
        assert_eq!(result, "{name} $name Ann");
    }

    #[test]
    fn test_diagnostics_route_to_diagnostic_text() {
        let params = PromptParams::new().diagnostics(vec![Diagnostic::new("unused var")]);
        let result = apply_template("Problems:${diagnosticText}", &params);
        assert_eq!(
            result,
            "Problems:\nCurrent problems detected:\n- [Error] unused var"
        );
    }

    #[test]
    fn test_empty_diagnostics_clear_diagnostic_text() {
        let params = PromptParams::new().diagnostics(vec![]);
        assert_eq!(apply_template("a${diagnosticText}b", &params), "ab");
    }

    #[test]
    fn test_diagnostics_key_does_not_touch_its_own_placeholder() {
        let params = PromptParams::new().diagnostics(vec![Diagnostic::new("x")]);
        assert_eq!(apply_template("${diagnostics}", &params), "${diagnostics}");
    }

    #[test]
    fn test_text_under_diagnostics_key_is_inserted_verbatim() {
        let mut params = PromptParams::new();
        params.insert(DIAGNOSTICS_PARAM, "precomputed");
        assert_eq!(apply_template("${diagnosticText}", &params), "precomputed");
    }

    #[test]
    fn test_diagnostics_under_other_key_are_formatted() {
        let mut params = PromptParams::new();
        params.insert("problems", vec![Diagnostic::new("x").with_source("lint")]);
        assert_eq!(
            apply_template("${problems}", &params),
            "\nCurrent problems detected:\n- [lint] x"
        );
    }

    #[test]
    fn test_later_params_see_earlier_insertions() {
        let result = apply_template("${a}", &params([("a", "${b}"), ("b", "B")]));
        assert_eq!(result, "B");
    }

    #[test]
    fn test_earlier_params_do_not_rescan() {
        let result = apply_template("${a}", &params([("b", "B"), ("a", "${b}")]));
        assert_eq!(result, "${b}");
    }

    #[test]
    fn test_value_with_user_input_text_is_cleared_by_post_pass() {
        let result = apply_template("${a}", &params([("a", "x${userInput}y")]));
        assert_eq!(result, "xy");
    }

    #[test]
    fn test_reapplying_with_empty_params_is_idempotent() {
        let template = "File ${filePath}\n${userInput}\n${selectedText}";
        let once = apply_template(template, &params([("filePath", "a.ts")]));
        let twice = apply_template(&once, &PromptParams::new());
        assert_eq!(once, twice);
        assert_eq!(once, "File a.ts\n\n${selectedText}");
    }

    #[test]
    fn test_unicode_and_multiline_values() {
        let result = apply_template(
            "${emoji}\n${code}",
            &params([("emoji", "🎉 日本語"), ("code", "fn main() {\n}\n")]),
        );
        assert_eq!(result, "🎉 日本語\nfn main() {\n}\n");
    }

    #[test]
    fn test_placeholder_helper() {
        assert_eq!(placeholder("filePath"), "${filePath}");
    }
}

//! Typed substitution parameters.
//!
//! Parameters are kept in insertion order because substitution runs one key
//! at a time, left to right.

use super::diagnostics::Diagnostic;
use crate::error::{CodepromptError, Result};
use serde_json::{Map, Value};

/// Reserved parameter name whose value renders into `${diagnosticText}`.
pub const DIAGNOSTICS_PARAM: &str = "diagnostics";

/// Value bound to a placeholder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Literal replacement text.
    Text(String),
    /// Diagnostics, rendered through the diagnostics formatter.
    Diagnostics(Vec<Diagnostic>),
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<Vec<Diagnostic>> for ParamValue {
    fn from(d: Vec<Diagnostic>) -> Self {
        ParamValue::Diagnostics(d)
    }
}

/// Ordered mapping from placeholder name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptParams {
    entries: Vec<(String, ParamValue)>,
}

impl PromptParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`.
    ///
    /// Re-binding an existing name replaces the value but keeps the name's
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert) for text values.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, ParamValue::Text(value.into()));
        self
    }

    /// Builder form binding the reserved `diagnostics` parameter.
    pub fn diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.insert(DIAGNOSTICS_PARAM, ParamValue::Diagnostics(diagnostics));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build params from a loosely typed JSON object, keeping key order.
    ///
    /// Coercion rules:
    /// - `diagnostics` holding an array decodes into [`ParamValue::Diagnostics`]
    /// - strings are used verbatim, `null` becomes the empty string
    /// - numbers and booleans use their JSON text (`42`, `true`)
    /// - arrays and objects use compact JSON text
    pub fn from_json(object: Map<String, Value>) -> Result<Self> {
        let mut params = PromptParams::new();
        for (name, value) in object {
            let value = if name == DIAGNOSTICS_PARAM && value.is_array() {
                let diagnostics: Vec<Diagnostic> = serde_json::from_value(value).map_err(|e| {
                    CodepromptError::InvalidParams(format!("malformed diagnostics array: {}", e))
                })?;
                ParamValue::Diagnostics(diagnostics)
            } else {
                ParamValue::Text(coerce_to_text(value))
            };
            params.insert(name, value);
        }
        Ok(params)
    }

    /// Parse a JSON document that must be an object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| CodepromptError::InvalidParams(format!("failed to parse JSON: {}", e)))?;
        match value {
            Value::Object(object) => Self::from_json(object),
            other => Err(CodepromptError::InvalidParams(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for PromptParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = PromptParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

fn coerce_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut params = PromptParams::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("a", "3");

        let entries: Vec<_> = params.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("a", &ParamValue::Text("3".to_string())),
                ("b", &ParamValue::Text("2".to_string())),
            ]
        );
    }

    #[test]
    fn builder_binds_reserved_diagnostics_key() {
        let params = PromptParams::new()
            .text("filePath", "a.ts")
            .diagnostics(vec![Diagnostic::new("unused var")]);

        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get(DIAGNOSTICS_PARAM),
            Some(&ParamValue::Diagnostics(vec![Diagnostic::new("unused var")]))
        );
    }

    #[test]
    fn collects_from_pairs() {
        let params: PromptParams = [("x", "1"), ("y", "2")].into_iter().collect();
        assert_eq!(params.get("y"), Some(&ParamValue::from("2")));
        assert!(!params.is_empty());
    }

    #[test]
    fn from_json_coerces_scalars() {
        let params = PromptParams::from_json_str(
            r#"{"s": "text", "n": 42, "f": 1.5, "b": true, "z": null, "o": {"k": [1, 2]}}"#,
        )
        .unwrap();

        assert_eq!(params.get("s"), Some(&ParamValue::from("text")));
        assert_eq!(params.get("n"), Some(&ParamValue::from("42")));
        assert_eq!(params.get("f"), Some(&ParamValue::from("1.5")));
        assert_eq!(params.get("b"), Some(&ParamValue::from("true")));
        assert_eq!(params.get("z"), Some(&ParamValue::from("")));
        assert_eq!(params.get("o"), Some(&ParamValue::from(r#"{"k":[1,2]}"#)));
    }

    #[test]
    fn from_json_keeps_document_order() {
        let params = PromptParams::from_json_str(r#"{"zeta": "1", "alpha": "2", "mid": "3"}"#)
            .unwrap();
        let names: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn from_json_decodes_diagnostics() {
        let params = PromptParams::from_json_str(
            r#"{"diagnostics": [{"message": "bad type", "source": "TypeScript", "code": "2322"}]}"#,
        )
        .unwrap();

        match params.get(DIAGNOSTICS_PARAM) {
            Some(ParamValue::Diagnostics(d)) => {
                assert_eq!(d.len(), 1);
                assert_eq!(d[0].message, "bad type");
            }
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn from_json_accepts_structured_and_oversized_codes() {
        let params = PromptParams::from_json_str(
            r#"{"diagnostics": [
                {"message": "m", "code": {"value": "no-unused", "target": "https://x"}},
                {"message": "n", "code": 18446744073709551615}
            ]}"#,
        )
        .unwrap();

        let text = crate::prompt::apply_template("${diagnosticText}", &params);
        assert_eq!(
            text,
            "\nCurrent problems detected:\n\
             - [Error] m (no-unused)\n\
             - [Error] n (18446744073709551615)"
        );
    }

    #[test]
    fn from_json_rejects_malformed_diagnostics() {
        let err = PromptParams::from_json_str(r#"{"diagnostics": [42]}"#).unwrap_err();
        assert!(matches!(err, CodepromptError::InvalidParams(_)));
        assert!(err.to_string().contains("malformed diagnostics array"));
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = PromptParams::from_json_str("[1, 2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameters: expected a JSON object, found an array"
        );

        let err = PromptParams::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CodepromptError::InvalidParams(_)));
    }
}

//! Validation model - case facts supplied so far and the gaps found in them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::document::ParseError;

/// How critical a missing field is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseError::Priority(s.to_string())),
        }
    }
}

/// A missing or insufficient datum with a follow-up question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFieldAnalysis {
    /// Identifier of the missing datum
    pub field_name: String,

    /// Natural-language follow-up prompt
    pub question: String,

    /// How critical the gap is
    pub priority: Priority,

    /// Example answers or hints
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl MissingFieldAnalysis {
    /// Create a new finding.
    pub fn new(field_name: impl Into<String>, question: impl Into<String>, priority: Priority) -> Self {
        Self {
            field_name: field_name.into(),
            question: question.into(),
            priority,
            suggestions: Vec::new(),
        }
    }

    /// Set suggestions.
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }
}

/// Case facts supplied by the caller, as a string-keyed mapping.
///
/// Unknown keys are carried but ignored by the detector. A key counts as
/// provided only when its value is non-empty: `null`, `false`, `0`, `""`,
/// `[]` and `{}` are all treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvidedData(Map<String, Value>);

impl ProvidedData {
    /// Create an empty set of facts.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build from an arbitrary JSON value. Non-object values yield no facts.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }

    /// Set a field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Raw value for a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether a field is present with a non-empty value.
    pub fn has(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(is_filled)
    }

    /// String value of a field, or `""` if absent or not a string.
    pub fn text(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or_default()
    }

    /// The nested `parties` record, if one is present and non-empty.
    pub fn parties(&self) -> Option<&Map<String, Value>> {
        match self.0.get("parties") {
            Some(Value::Object(map)) if !map.is_empty() => Some(map),
            _ => None,
        }
    }

    /// Number of supplied keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no keys were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ProvidedData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Whether a JSON value carries content.
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_values_count_as_absent() {
        let data = ProvidedData::from_value(json!({
            "title": "",
            "sections": [],
            "parties": {},
            "court": null,
            "urgent": false,
            "facts": "The accused was arrested on 1 May."
        }));

        assert!(!data.has("title"));
        assert!(!data.has("sections"));
        assert!(!data.has("parties"));
        assert!(!data.has("court"));
        assert!(!data.has("urgent"));
        assert!(!data.has("relief_sought"));
        assert!(data.has("facts"));
    }

    #[test]
    fn test_text_falls_back_to_empty() {
        let data = ProvidedData::new().with("facts", "brief").with("sections", json!(["420"]));
        assert_eq!(data.text("facts"), "brief");
        assert_eq!(data.text("sections"), "");
        assert_eq!(data.text("missing"), "");
    }

    #[test]
    fn test_parties_requires_object() {
        let data = ProvidedData::new().with("parties", "A vs B");
        assert!(data.parties().is_none());

        let data = ProvidedData::new().with("parties", json!({"petitioner": "A"}));
        assert_eq!(data.parties().map(|p| p.len()), Some(1));
    }

    #[test]
    fn test_non_object_value_yields_no_facts() {
        assert!(ProvidedData::from_value(json!(["facts"])).is_empty());
    }

    #[test]
    fn test_priority_parse_and_serde() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());

        let finding = MissingFieldAnalysis::new("court", "Which court?", Priority::High)
            .with_suggestions(["High Court"]);
        let value = serde_json::to_value(&finding).unwrap();
        assert_eq!(value["priority"], "high");
        assert_eq!(value["suggestions"][0], "High Court");
    }
}

//! Delta operation types.
//!
//! An [`Operation`] is one insert of a Quill-style delta: either a run of text or an
//! embed value, with optional formatting attributes. Operations are never mutated by
//! the parser; normalization builds new ones.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Formatting attributes of an operation, keyed by attribute name.
pub type Attributes = Map<String, Value>;

/// The payload of an insert operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    /// Plain text, possibly containing newlines.
    Text(String),
    /// Any non-string payload (mentions, emojis, external embeds...).
    Embed(Value),
}

/// A single delta insert operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub insert: Insert,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Operation {
    /// Creates a text insert without attributes.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: Insert::Text(text.into()),
            attributes: None,
        }
    }

    /// Creates an embed insert without attributes.
    pub fn embed(value: Value) -> Self {
        Self {
            insert: Insert::Embed(value),
            attributes: None,
        }
    }

    /// Returns a copy of this operation with one more attribute set.
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: Value) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }

    /// The inserted text, if this is a text insert.
    pub fn text_insert(&self) -> Option<&str> {
        match &self.insert {
            Insert::Text(s) => Some(s),
            Insert::Embed(_) => None,
        }
    }

    /// Looks up a key of an object embed, e.g. `mention` in `{"mention": {...}}`.
    pub fn embed_field(&self, key: &str) -> Option<&Value> {
        match &self.insert {
            Insert::Embed(Value::Object(map)) => map.get(key),
            _ => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.as_ref()?.get(key)
    }

    /// True when the attribute is present and not `null`, `false` or an empty string.
    pub fn has_truthy_attr(&self, key: &str) -> bool {
        match self.attr(key) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    pub fn has_attributes(&self) -> bool {
        self.attributes.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// A bare insert is a text insert with no attributes.
    pub fn bare_text(&self) -> Option<&str> {
        if self.has_attributes() {
            return None;
        }
        self.text_insert()
    }

    pub fn ends_with_newline(&self) -> bool {
        self.text_insert().is_some_and(|s| s.ends_with('\n'))
    }

    /// True for a non-empty text insert made only of `\n` characters.
    pub fn is_newline_run(&self) -> bool {
        self.text_insert()
            .is_some_and(|s| !s.is_empty() && s.bytes().all(|b| b == b'\n'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_text_and_embed_inserts() {
        let ops: Vec<Operation> = serde_json::from_value(json!([
            { "insert": "Hello" },
            { "insert": { "emoji": { "emojiChar": "🙂" } }, "attributes": { "bold": true } }
        ]))
        .unwrap();

        assert_eq!(ops[0], Operation::text("Hello"));
        assert!(ops[1].text_insert().is_none());
        assert!(ops[1].embed_field("emoji").is_some());
        assert!(ops[1].has_truthy_attr("bold"));
    }

    #[test]
    fn empty_attributes_still_count_as_bare() {
        let op: Operation = serde_json::from_value(json!({ "insert": "x", "attributes": {} })).unwrap();
        assert_eq!(op.bare_text(), Some("x"));
    }

    #[test]
    fn attributed_text_is_not_bare() {
        let op = Operation::text("x").with_attr("italic", json!(true));
        assert_eq!(op.bare_text(), None);
        assert_eq!(op.text_insert(), Some("x"));
    }

    #[test]
    fn truthiness_of_attributes() {
        let op = Operation::text("x")
            .with_attr("a", json!(false))
            .with_attr("b", json!(""))
            .with_attr("c", Value::Null)
            .with_attr("d", json!("https://example.com"))
            .with_attr("e", json!(2));
        assert!(!op.has_truthy_attr("a"));
        assert!(!op.has_truthy_attr("b"));
        assert!(!op.has_truthy_attr("c"));
        assert!(op.has_truthy_attr("d"));
        assert!(op.has_truthy_attr("e"));
        assert!(!op.has_truthy_attr("missing"));
    }

    #[test]
    fn newline_runs() {
        assert!(Operation::text("\n").is_newline_run());
        assert!(Operation::text("\n\n").is_newline_run());
        assert!(!Operation::text("a\n").is_newline_run());
        assert!(!Operation::text("").is_newline_run());
        assert!(!Operation::embed(json!({ "emoji": {} })).is_newline_run());
    }

    #[test]
    fn serializes_without_empty_attributes() {
        let out = serde_json::to_value(Operation::text("hi")).unwrap();
        assert_eq!(out, json!({ "insert": "hi" }));
    }
}

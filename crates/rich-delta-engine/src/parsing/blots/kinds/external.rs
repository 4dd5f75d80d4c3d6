use serde_json::Value;

use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow},
    delta::Operation,
    group::Group,
};

/// Block embed (link card, image, video...):
/// `{"insert": {"embed-external": {"data": {"url": "...", "type": "image"}}}}`.
///
/// Always rendered alone.
#[derive(Debug)]
pub struct ExternalBlot {
    data: Value,
}

impl ExternalBlot {
    pub const NAME: &'static str = "external";
    pub const KEY: &'static str = "embed-external";

    pub fn matches(current: &Operation, _next: Option<&Operation>) -> bool {
        current.embed_field(Self::KEY).is_some()
    }

    pub fn build(window: OpWindow<'_>) -> Box<dyn Blot> {
        let data = window
            .current
            .embed_field(Self::KEY)
            .and_then(|e| e.get("data"))
            .cloned()
            .unwrap_or(Value::Null);
        Box::new(Self { data })
    }

    pub fn variant() -> BlotVariant {
        BlotVariant::new(Self::NAME, Self::matches, Self::build)
    }
}

impl Blot for ExternalBlot {
    fn kind(&self) -> &str {
        Self::NAME
    }

    /// The embedded URL, or its name when there is none.
    fn content(&self) -> String {
        ["url", "name"]
            .iter()
            .find_map(|key| self.data.get(key).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string()
    }

    fn should_clear_current_group(&self, _group: &Group) -> bool {
        true
    }

    fn is_own_group(&self) -> bool {
        true
    }

    fn embed_data(&self) -> Option<&Value> {
        Some(&self.data).filter(|data| !data.is_null())
    }
}

use serde_json::Value;

use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow, inline_should_clear},
    delta::Operation,
    group::Group,
};

use super::line::LineKind;

/// `@user` mention.
///
/// Accepted both as attributed text (`{"insert": "@alice", "attributes": {"mention":
/// {"name": "alice"}}}`) and as an embed (`{"insert": {"mention": {"name": "alice"}}}`).
#[derive(Debug)]
pub struct MentionBlot {
    username: String,
    content: String,
    line: Option<LineKind>,
}

impl MentionBlot {
    pub const NAME: &'static str = "mention";
    pub const KEY: &'static str = "mention";

    fn username(op: &Operation) -> Option<&str> {
        op.attr(Self::KEY)
            .or_else(|| op.embed_field(Self::KEY))
            .and_then(|m| m.get("name"))
            .and_then(Value::as_str)
    }

    pub fn matches(current: &Operation, _next: Option<&Operation>) -> bool {
        Self::username(current).is_some()
    }

    pub fn build(window: OpWindow<'_>) -> Box<dyn Blot> {
        let username = Self::username(window.current).unwrap_or_default().to_string();
        let content = match window.current.text_insert() {
            Some(text) => text.to_string(),
            None => format!("@{username}"),
        };
        Box::new(Self {
            username,
            content,
            line: window.owning_line(),
        })
    }

    pub fn variant() -> BlotVariant {
        BlotVariant::new(Self::NAME, Self::matches, Self::build).with_mentions()
    }
}

impl Blot for MentionBlot {
    fn kind(&self) -> &str {
        Self::NAME
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn should_clear_current_group(&self, group: &Group) -> bool {
        inline_should_clear(group, self.line.as_ref())
    }

    fn mention_usernames(&self) -> Vec<String> {
        vec![self.username.clone()]
    }
}

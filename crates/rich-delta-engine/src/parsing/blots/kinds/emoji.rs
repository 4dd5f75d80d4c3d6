use serde_json::Value;

use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow, inline_should_clear},
    delta::Operation,
    group::Group,
};

use super::line::LineKind;

/// Inline emoji embed: `{"insert": {"emoji": {"emojiChar": "🙂"}}}`.
#[derive(Debug)]
pub struct EmojiBlot {
    emoji: String,
    line: Option<LineKind>,
}

impl EmojiBlot {
    pub const NAME: &'static str = "emoji";
    pub const KEY: &'static str = "emoji";

    pub fn matches(current: &Operation, _next: Option<&Operation>) -> bool {
        current.embed_field(Self::KEY).is_some_and(Value::is_object)
    }

    pub fn build(window: OpWindow<'_>) -> Box<dyn Blot> {
        let emoji = window
            .current
            .embed_field(Self::KEY)
            .and_then(|e| e.get("emojiChar"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Box::new(Self {
            emoji,
            line: window.owning_line(),
        })
    }

    pub fn variant() -> BlotVariant {
        BlotVariant::new(Self::NAME, Self::matches, Self::build)
    }
}

impl Blot for EmojiBlot {
    fn kind(&self) -> &str {
        Self::NAME
    }

    fn content(&self) -> String {
        self.emoji.clone()
    }

    fn should_clear_current_group(&self, group: &Group) -> bool {
        inline_should_clear(group, self.line.as_ref())
    }
}

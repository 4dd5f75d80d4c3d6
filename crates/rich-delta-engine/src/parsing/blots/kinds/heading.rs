use serde_json::Value;

use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow},
    delta::Operation,
    group::Group,
};

use super::{
    TextBlot,
    line::{LineKind, claims_line},
};

/// Heading line, closed by `{"header": 2}` or `{"header": {"level": 2}}`.
///
/// A heading always occupies a group of its own.
#[derive(Debug)]
pub struct HeadingBlot {
    level: u8,
    content: String,
    consumed_next: bool,
}

impl HeadingBlot {
    pub const NAME: &'static str = "heading";
    pub const ATTR: &'static str = "header";
    pub const DEFAULT_LEVEL: u8 = 2;

    /// Reads the level from the attribute value, clamped to 1..=6.
    pub fn level(value: &Value) -> u8 {
        let raw = match value {
            Value::Object(map) => map.get("level").and_then(Value::as_u64),
            other => other.as_u64(),
        };
        raw.map_or(Self::DEFAULT_LEVEL, |l| l.clamp(1, 6) as u8)
    }

    pub fn is_terminator(op: &Operation) -> bool {
        matches!(LineKind::terminated_by(op), Some(LineKind::Heading(_)))
    }

    pub fn matches(current: &Operation, next: Option<&Operation>) -> bool {
        claims_line(Self::is_terminator, current, next)
    }

    pub fn build(window: OpWindow<'_>) -> Box<dyn Blot> {
        if let Some(LineKind::Heading(level)) = LineKind::terminated_by(window.current) {
            return Box::new(Self {
                level,
                content: String::new(),
                consumed_next: false,
            });
        }

        match window.next.and_then(LineKind::terminated_by) {
            Some(LineKind::Heading(level)) => Box::new(Self {
                level,
                content: window.current.text_insert().unwrap_or_default().to_string(),
                consumed_next: true,
            }),
            _ => TextBlot::build(window),
        }
    }

    pub fn variant() -> BlotVariant {
        BlotVariant::new(Self::NAME, Self::matches, Self::build)
    }
}

impl Blot for HeadingBlot {
    fn kind(&self) -> &str {
        Self::NAME
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn should_clear_current_group(&self, group: &Group) -> bool {
        group.last_closed_line().is_some()
    }

    fn is_own_group(&self) -> bool {
        true
    }

    fn has_consumed_next_op(&self) -> bool {
        self.consumed_next
    }

    fn closes_line(&self) -> Option<LineKind> {
        Some(LineKind::Heading(self.level))
    }
}

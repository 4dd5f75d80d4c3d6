use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow},
    delta::Operation,
};

use super::line::{LineBlot, LineKind, claims_line};

/// List item, closed by `{"list": "bullet" | "ordered" | "checked" | "unchecked"}`.
///
/// Items of different styles never share a group.
pub struct ListLine;

impl ListLine {
    pub const NAME: &'static str = "list";
    pub const ATTR: &'static str = "list";

    pub fn is_terminator(op: &Operation) -> bool {
        matches!(LineKind::terminated_by(op), Some(LineKind::List(_)))
    }

    pub fn matches(current: &Operation, next: Option<&Operation>) -> bool {
        claims_line(Self::is_terminator, current, next)
    }

    pub fn build(window: OpWindow<'_>) -> Box<dyn Blot> {
        LineBlot::build(window)
    }

    pub fn variant() -> BlotVariant {
        BlotVariant::new(Self::NAME, Self::matches, Self::build)
            .with_line_terminator(Self::is_terminator)
    }
}

use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow},
    delta::Operation,
};

use super::line::{LineBlot, LineKind, claims_line};

/// Blockquote line, closed by `{"blockquote-line": true}`.
pub struct BlockquoteLine;

impl BlockquoteLine {
    pub const NAME: &'static str = "blockquote";
    pub const ATTR: &'static str = "blockquote-line";

    pub fn is_terminator(op: &Operation) -> bool {
        LineKind::terminated_by(op) == Some(LineKind::Blockquote)
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

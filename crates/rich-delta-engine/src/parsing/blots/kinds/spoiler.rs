use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow},
    delta::Operation,
};

use super::line::{LineBlot, LineKind, claims_line};

/// Spoiler line, closed by `{"spoiler-line": true}`.
pub struct SpoilerLine;

impl SpoilerLine {
    pub const NAME: &'static str = "spoiler";
    pub const ATTR: &'static str = "spoiler-line";

    pub fn is_terminator(op: &Operation) -> bool {
        LineKind::terminated_by(op) == Some(LineKind::Spoiler)
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

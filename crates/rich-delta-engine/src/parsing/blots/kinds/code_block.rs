use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow},
    delta::Operation,
};

use super::line::{LineBlot, LineKind, claims_line};

/// Code block line, closed by `{"code-block": true}`.
///
/// Consecutive code lines form one group. Unlike the other line structures it is not
/// a normalizer terminator: inline content after it is split off by the inline
/// blots' own grouping rule instead.
pub struct CodeBlock;

impl CodeBlock {
    pub const NAME: &'static str = "code-block";
    pub const ATTR: &'static str = "code-block";

    pub fn is_terminator(op: &Operation) -> bool {
        LineKind::terminated_by(op) == Some(LineKind::CodeBlock)
    }

    pub fn matches(current: &Operation, next: Option<&Operation>) -> bool {
        claims_line(Self::is_terminator, current, next)
    }

    pub fn build(window: OpWindow<'_>) -> Box<dyn Blot> {
        LineBlot::build(window)
    }

    pub fn variant() -> BlotVariant {
        BlotVariant::new(Self::NAME, Self::matches, Self::build)
    }
}

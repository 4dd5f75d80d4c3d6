use crate::parsing::{
    blots::OpWindow,
    delta::Operation,
    formats::{Format, FormatVariant},
};

/// Inline code span, `{"code": true}`.
#[derive(Debug)]
pub struct CodeSpanFormat;

impl CodeSpanFormat {
    pub const ATTR: &'static str = "code";

    pub fn matches(current: &Operation) -> bool {
        current.has_truthy_attr(Self::ATTR)
    }

    pub fn build(_window: OpWindow<'_>) -> Box<dyn Format> {
        Box::new(Self)
    }

    pub fn variant() -> FormatVariant {
        FormatVariant::new(Self::ATTR, Self::matches, Self::build)
    }
}

impl Format for CodeSpanFormat {
    fn kind(&self) -> &str {
        Self::ATTR
    }
}

use crate::parsing::{
    blots::OpWindow,
    delta::Operation,
    formats::{Format, FormatVariant},
};

/// Bold text.
#[derive(Debug)]
pub struct BoldFormat;

impl BoldFormat {
    pub const ATTR: &'static str = "bold";

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

impl Format for BoldFormat {
    fn kind(&self) -> &str {
        Self::ATTR
    }
}

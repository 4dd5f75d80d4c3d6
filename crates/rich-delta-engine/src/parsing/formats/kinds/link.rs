use serde_json::Value;

use crate::parsing::{
    blots::OpWindow,
    delta::Operation,
    formats::{Format, FormatVariant},
};

/// Hyperlink, `{"link": "https://..."}`.
#[derive(Debug)]
pub struct LinkFormat {
    url: String,
}

impl LinkFormat {
    pub const ATTR: &'static str = "link";

    pub fn matches(current: &Operation) -> bool {
        current
            .attr(Self::ATTR)
            .and_then(Value::as_str)
            .is_some_and(|url| !url.is_empty())
    }

    pub fn from_operation(op: &Operation) -> Self {
        let url = op
            .attr(Self::ATTR)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { url }
    }

    pub fn build(window: OpWindow<'_>) -> Box<dyn Format> {
        Box::new(Self::from_operation(window.current))
    }

    pub fn variant() -> FormatVariant {
        FormatVariant::new(Self::ATTR, Self::matches, Self::build)
    }
}

impl Format for LinkFormat {
    fn kind(&self) -> &str {
        Self::ATTR
    }

    fn target(&self) -> Option<&str> {
        Some(&self.url)
    }
}

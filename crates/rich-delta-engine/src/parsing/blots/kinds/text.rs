use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow, inline_should_clear},
    delta::Operation,
    group::Group,
};

use super::line::LineKind;

/// Plain text run. Registered last; also the implicit fallback for any text insert.
///
/// A lone newline left over by normalization is an empty line and gets a group of
/// its own.
#[derive(Debug)]
pub struct TextBlot {
    content: String,
    line: Option<LineKind>,
}

impl TextBlot {
    pub const NAME: &'static str = "text";

    pub fn matches(current: &Operation, _next: Option<&Operation>) -> bool {
        current.text_insert().is_some()
    }

    pub fn build(window: OpWindow<'_>) -> Box<dyn Blot> {
        Box::new(Self {
            content: window.current.text_insert().unwrap_or_default().to_string(),
            line: window.owning_line(),
        })
    }

    pub fn variant() -> BlotVariant {
        BlotVariant::new(Self::NAME, Self::matches, Self::build)
    }

    pub fn is_line_break(&self) -> bool {
        !self.content.is_empty() && self.content.bytes().all(|b| b == b'\n')
    }
}

impl Blot for TextBlot {
    fn kind(&self) -> &str {
        Self::NAME
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn should_clear_current_group(&self, group: &Group) -> bool {
        if self.is_line_break() {
            return true;
        }
        inline_should_clear(group, self.line.as_ref())
    }

    fn is_own_group(&self) -> bool {
        self.is_line_break()
    }
}

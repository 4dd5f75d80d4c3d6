//! Line structures.
//!
//! Quill closes a formatted line with a newline insert that carries the line
//! attribute, e.g. `{"insert": "\n", "attributes": {"list": "bullet"}}`. The text of
//! the line is the operation right before that terminator. A line blot is built
//! either from the text (and then swallows the terminator) or from a bare terminator
//! (an empty line). A line factory handed a window with no terminator in reach (a
//! custom variant reusing it under a looser matcher) builds a plain text blot instead.

use serde_json::Value;

use crate::parsing::{
    blots::{Blot, OpWindow},
    delta::Operation,
    group::Group,
};

use super::{BlockquoteLine, CodeBlock, HeadingBlot, ListLine, SpoilerLine, TextBlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bullet,
    Ordered,
    Checked,
    Unchecked,
}

impl ListStyle {
    /// Reads `"ordered"` as well as the object form `{"type": "ordered"}`.
    /// Unknown styles render as bullets.
    pub fn from_attr(value: &Value) -> Self {
        let name = match value {
            Value::String(s) => s.as_str(),
            Value::Object(map) => map.get("type").and_then(Value::as_str).unwrap_or(""),
            _ => "",
        };
        match name {
            "ordered" => ListStyle::Ordered,
            "checked" => ListStyle::Checked,
            "unchecked" => ListStyle::Unchecked,
            _ => ListStyle::Bullet,
        }
    }
}

/// The kind of line an operation terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Spoiler,
    Blockquote,
    List(ListStyle),
    CodeBlock,
    Heading(u8),
}

impl LineKind {
    /// Recognizes a line terminator: a newline-only insert carrying a line attribute.
    pub fn terminated_by(op: &Operation) -> Option<Self> {
        if !op.is_newline_run() {
            return None;
        }
        if op.has_truthy_attr(SpoilerLine::ATTR) {
            Some(LineKind::Spoiler)
        } else if op.has_truthy_attr(BlockquoteLine::ATTR) {
            Some(LineKind::Blockquote)
        } else if op.has_truthy_attr(ListLine::ATTR) {
            op.attr(ListLine::ATTR)
                .map(|v| LineKind::List(ListStyle::from_attr(v)))
        } else if op.has_truthy_attr(CodeBlock::ATTR) {
            Some(LineKind::CodeBlock)
        } else if op.has_truthy_attr(HeadingBlot::ATTR) {
            op.attr(HeadingBlot::ATTR)
                .map(|v| LineKind::Heading(HeadingBlot::level(v)))
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Spoiler => SpoilerLine::NAME,
            LineKind::Blockquote => BlockquoteLine::NAME,
            LineKind::List(_) => ListLine::NAME,
            LineKind::CodeBlock => CodeBlock::NAME,
            LineKind::Heading(_) => HeadingBlot::NAME,
        }
    }
}

/// Shared predicate: `current` is a terminator, or text directly followed by one.
pub(crate) fn claims_line(
    is_terminator: fn(&Operation) -> bool,
    current: &Operation,
    next: Option<&Operation>,
) -> bool {
    if is_terminator(current) {
        return true;
    }
    current.text_insert().is_some()
        && LineKind::terminated_by(current).is_none()
        && next.is_some_and(is_terminator)
}

/// One line of a spoiler, blockquote, list or code block.
#[derive(Debug)]
pub struct LineBlot {
    line: LineKind,
    content: String,
    consumed_next: bool,
}

impl LineBlot {
    /// `None` when neither `current` nor `next` terminates a line.
    pub fn from_window(window: OpWindow<'_>) -> Option<Self> {
        if let Some(line) = LineKind::terminated_by(window.current) {
            return Some(Self {
                line,
                content: String::new(),
                consumed_next: false,
            });
        }

        let line = window.next.and_then(LineKind::terminated_by)?;
        Some(Self {
            line,
            content: window.current.text_insert().unwrap_or_default().to_string(),
            consumed_next: true,
        })
    }

    /// Factory shared by the line structure variants.
    pub fn build(window: OpWindow<'_>) -> Box<dyn Blot> {
        match Self::from_window(window) {
            Some(blot) => Box::new(blot),
            None => TextBlot::build(window),
        }
    }
}

impl Blot for LineBlot {
    fn kind(&self) -> &str {
        self.line.name()
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    /// Consecutive lines of the same structure share a group.
    fn should_clear_current_group(&self, group: &Group) -> bool {
        group
            .last_closed_line()
            .is_some_and(|closed| closed != self.line)
    }

    fn has_consumed_next_op(&self) -> bool {
        self.consumed_next
    }

    fn closes_line(&self) -> Option<LineKind> {
        Some(self.line.clone())
    }
}

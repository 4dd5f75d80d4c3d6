//! # Blot Kinds
//!
//! Built-in blot variants. Each kind owns the attribute or embed key it reacts to, so
//! the matcher and the normalizer never hardcode `"list"` or `"embed-external"`.
//!
//! ## Bootstrap order
//!
//! Embeds first (so an embed at the end of a list item is not taken as the item's
//! text), then line structures (spoiler, blockquote, list), code block, heading, and
//! plain text last. [`NullBlot`] is never registered; it is the matcher's fallback.

pub mod blockquote;
pub mod code_block;
pub mod emoji;
pub mod external;
pub mod heading;
pub mod line;
pub mod list;
pub mod mention;
pub mod null;
pub mod spoiler;
pub mod text;

pub use blockquote::BlockquoteLine;
pub use code_block::CodeBlock;
pub use emoji::EmojiBlot;
pub use external::ExternalBlot;
pub use heading::HeadingBlot;
pub use line::{LineBlot, LineKind, ListStyle};
pub use list::ListLine;
pub use mention::MentionBlot;
pub use null::NullBlot;
pub use spoiler::SpoilerLine;
pub use text::TextBlot;

use super::BlotVariant;

/// Built-in variants in bootstrap order.
pub fn bootstrap() -> Vec<BlotVariant> {
    vec![
        MentionBlot::variant(),
        EmojiBlot::variant(),
        ExternalBlot::variant(),
        SpoilerLine::variant(),
        BlockquoteLine::variant(),
        ListLine::variant(),
        CodeBlock::variant(),
        HeadingBlot::variant(),
        TextBlot::variant(),
    ]
}

pub(crate) fn builtin(name: &str) -> Option<BlotVariant> {
    bootstrap().into_iter().find(|v| v.name == name)
}

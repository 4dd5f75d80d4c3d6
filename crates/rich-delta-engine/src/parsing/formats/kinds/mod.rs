//! Built-in formats. Bootstrap order: link, bold, italic, code span, strike.

pub mod bold;
pub mod code_span;
pub mod italic;
pub mod link;
pub mod strike;

pub use bold::BoldFormat;
pub use code_span::CodeSpanFormat;
pub use italic::ItalicFormat;
pub use link::LinkFormat;
pub use strike::StrikeFormat;

use super::FormatVariant;

pub fn bootstrap() -> Vec<FormatVariant> {
    vec![
        LinkFormat::variant(),
        BoldFormat::variant(),
        ItalicFormat::variant(),
        CodeSpanFormat::variant(),
        StrikeFormat::variant(),
    ]
}

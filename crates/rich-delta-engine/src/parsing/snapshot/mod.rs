//! # Snapshot Testing Support
//!
//! Rendering-independent views of parser output.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts groups into the serializable `Snap` format used by
//!   `insta` fixture snapshots and the CLI's JSON output
//! - **`invariants`**: Runtime checks for parser correctness (no empty groups)

pub mod invariants;
pub mod normalize;

use serde::Serialize;

pub use invariants::check as invariants;
pub use normalize::{GroupSnap, Snap, normalize};

/// Simplified, comparable record of one blot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlotSnap {
    /// Blot kind (e.g. "text", "list", "heading").
    pub kind: String,
    /// Textual content without the line terminator.
    pub content: String,
    /// Kinds of the attached formats in registry order.
    pub formats: Vec<String>,
}

impl BlotSnap {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
            formats: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }
}

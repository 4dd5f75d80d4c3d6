use std::sync::LazyLock;

use super::{
    blots::{BlotVariant, kinds as blot_kinds},
    delta::Operation,
    formats::{FormatVariant, kinds as format_kinds},
};

static SHARED: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// Ordered blot and format variants used by a parse.
///
/// Blot order is match priority. A registry is built once and only read afterwards,
/// so one value can serve any number of concurrent parses.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    blots: Vec<BlotVariant>,
    formats: Vec<FormatVariant>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// No variants at all; the matcher still falls back to text and null blots.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in variants in bootstrap order.
    pub fn builtin() -> Self {
        Self::builder().with_builtin_blots().with_builtin_formats().build()
    }

    /// Process-wide built-in registry, created on first use.
    pub fn shared() -> &'static Registry {
        &SHARED
    }

    pub fn blots(&self) -> &[BlotVariant] {
        &self.blots
    }

    pub fn formats(&self) -> &[FormatVariant] {
        &self.formats
    }

    /// Whether any registered blot can report mention usernames.
    pub fn provides_mentions(&self) -> bool {
        self.blots.iter().any(|v| v.provides_mentions)
    }

    /// Whether `op` closes a line structure of any registered variant.
    pub fn is_line_terminator(&self, op: &Operation) -> bool {
        self.blots.iter().any(|v| v.is_line_terminator(op))
    }
}

/// Append-only construction of a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    blots: Vec<BlotVariant>,
    formats: Vec<FormatVariant>,
}

impl RegistryBuilder {
    /// Appends a blot variant at the lowest priority so far.
    #[must_use]
    pub fn with_blot(mut self, variant: BlotVariant) -> Self {
        self.blots.push(variant);
        self
    }

    #[must_use]
    pub fn with_format(mut self, variant: FormatVariant) -> Self {
        self.formats.push(variant);
        self
    }

    #[must_use]
    pub fn with_builtin_blots(mut self) -> Self {
        self.blots.extend(blot_kinds::bootstrap());
        self
    }

    #[must_use]
    pub fn with_builtin_formats(mut self) -> Self {
        self.formats.extend(format_kinds::bootstrap());
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            blots: self.blots,
            formats: self.formats,
        }
    }
}

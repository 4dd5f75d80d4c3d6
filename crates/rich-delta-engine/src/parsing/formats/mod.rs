//! # Formats
//!
//! Attribute-driven styles wrapped around a blot's content. Unlike blots, every format
//! whose predicate accepts the current operation attaches; there is no priority and no
//! fallback.

pub mod kinds;

use std::fmt;

use super::{blots::OpWindow, delta::Operation, registry::Registry};

pub trait Format: fmt::Debug + Send + Sync {
    /// Short kind name used in snapshots (e.g. `bold`, `link`).
    fn kind(&self) -> &str;

    /// Where the format points, for formats that carry a target.
    fn target(&self) -> Option<&str> {
        None
    }
}

pub type FormatMatcher = fn(&Operation) -> bool;
pub type FormatFactory = fn(OpWindow<'_>) -> Box<dyn Format>;

#[derive(Debug, Clone, Copy)]
pub struct FormatVariant {
    pub name: &'static str,
    pub matches: FormatMatcher,
    pub build: FormatFactory,
}

impl FormatVariant {
    pub fn new(name: &'static str, matches: FormatMatcher, build: FormatFactory) -> Self {
        Self {
            name,
            matches,
            build,
        }
    }

    pub fn builtin(name: &str) -> Option<Self> {
        kinds::bootstrap().into_iter().find(|v| v.name == name)
    }
}

/// Builds every registered format that applies to `window.current`.
pub fn match_formats(registry: &Registry, window: OpWindow<'_>) -> Vec<Box<dyn Format>> {
    registry
        .formats()
        .iter()
        .filter(|variant| (variant.matches)(window.current))
        .map(|variant| (variant.build)(window))
        .collect()
}

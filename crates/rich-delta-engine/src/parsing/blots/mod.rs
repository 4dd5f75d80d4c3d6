//! # Blots
//!
//! A blot is the content-bearing unit the grouping engine places into groups. Each
//! blot is built from a three-operation window (previous, current, next) and tells the
//! engine how it wants to be grouped.
//!
//! ## Matching
//!
//! Variants are tried in registry order; the first whose predicate accepts
//! `(current, next)` wins. `previous` is only handed to the factory. When nothing in
//! the registry claims the operation, text inserts fall back to [`kinds::TextBlot`]
//! and everything else to [`kinds::NullBlot`].
//!
//! ## Modules
//!
//! - **`kinds`**: the built-in variants, each owning its attribute/embed names

pub mod kinds;

use std::fmt;

use serde_json::Value;

use super::{delta::Operation, group::Group, registry::Registry, snapshot::BlotSnap};

pub use kinds::LineKind;

/// The lookbehind/lookahead window a blot or format is built from.
#[derive(Debug, Clone, Copy)]
pub struct OpWindow<'a> {
    pub previous: Option<&'a Operation>,
    pub current: &'a Operation,
    pub next: Option<&'a Operation>,
    /// The terminator of the line `current` sits on, when one lies ahead before the
    /// line ends as plain text or at a breakpoint.
    pub line_end: Option<&'a Operation>,
}

impl<'a> OpWindow<'a> {
    /// A window whose line ends at `next` if `next` is a terminator.
    pub fn new(
        previous: Option<&'a Operation>,
        current: &'a Operation,
        next: Option<&'a Operation>,
    ) -> Self {
        Self {
            previous,
            current,
            next,
            line_end: next.filter(|op| LineKind::terminated_by(op).is_some()),
        }
    }

    /// A window with no neighbours.
    pub fn single(current: &'a Operation) -> Self {
        Self::new(None, current, None)
    }

    /// The kind of line `current` belongs to, if any.
    pub fn owning_line(&self) -> Option<LineKind> {
        self.line_end.and_then(LineKind::terminated_by)
    }
}

/// Capabilities the grouping engine needs from a matched blot.
pub trait Blot: fmt::Debug + Send + Sync {
    /// Short kind name used in snapshots (e.g. `text`, `list`).
    fn kind(&self) -> &str;

    /// Textual content of the blot, without its line terminator.
    fn content(&self) -> String;

    /// Checked before the blot is pushed: `true` closes the open group first.
    fn should_clear_current_group(&self, _group: &Group) -> bool {
        false
    }

    /// Checked after the blot is pushed: `true` closes the group right away.
    fn is_own_group(&self) -> bool {
        false
    }

    /// `true` when the next operation was folded into this blot and must be skipped.
    fn has_consumed_next_op(&self) -> bool {
        false
    }

    /// The kind of line this blot terminates, if it ends a line structure.
    fn closes_line(&self) -> Option<LineKind> {
        None
    }

    /// Structured payload of a block embed, for renderers.
    fn embed_data(&self) -> Option<&Value> {
        None
    }

    /// Usernames mentioned by this blot. Only mention embeds return any.
    fn mention_usernames(&self) -> Vec<String> {
        Vec::new()
    }

    /// Simplified, comparable representation (formats are filled in by the group).
    fn snapshot(&self) -> BlotSnap {
        BlotSnap::new(self.kind(), self.content())
    }
}

/// Match predicate over `(current, next)`.
pub type BlotMatcher = fn(&Operation, Option<&Operation>) -> bool;
/// Builds a blot from its window.
pub type BlotFactory = fn(OpWindow<'_>) -> Box<dyn Blot>;
/// Recognizes an operation that closes a line structure.
pub type LineTerminator = fn(&Operation) -> bool;

/// A registrable blot variant: a predicate and a factory plus capability flags.
#[derive(Debug, Clone, Copy)]
pub struct BlotVariant {
    pub name: &'static str,
    pub matches: BlotMatcher,
    pub build: BlotFactory,
    /// Set for line structures whose terminators the normalizer must respect.
    pub line_terminator: Option<LineTerminator>,
    /// Whether blots of this variant can report mention usernames.
    pub provides_mentions: bool,
}

impl BlotVariant {
    pub fn new(name: &'static str, matches: BlotMatcher, build: BlotFactory) -> Self {
        Self {
            name,
            matches,
            build,
            line_terminator: None,
            provides_mentions: false,
        }
    }

    #[must_use]
    pub fn with_line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = Some(terminator);
        self
    }

    #[must_use]
    pub fn with_mentions(mut self) -> Self {
        self.provides_mentions = true;
        self
    }

    pub fn is_line_terminator(&self, op: &Operation) -> bool {
        self.line_terminator.is_some_and(|t| t(op))
    }

    /// Looks up a built-in variant by its registry name.
    pub fn builtin(name: &str) -> Option<Self> {
        kinds::builtin(name)
    }
}

/// Selects and builds the blot for `window`.
pub fn match_blot(registry: &Registry, window: OpWindow<'_>) -> Box<dyn Blot> {
    for variant in registry.blots() {
        if (variant.matches)(window.current, window.next) {
            log::trace!("blot `{}` claimed {:?}", variant.name, window.current.insert);
            return (variant.build)(window);
        }
    }

    if kinds::TextBlot::matches(window.current, window.next) {
        kinds::TextBlot::build(window)
    } else {
        kinds::NullBlot::build(window)
    }
}

/// Grouping rule shared by inline blots: after a closed line, inline content starts a
/// new group unless the line it sits on is of the same kind. `owning_line` comes from
/// [`OpWindow::owning_line`], so every run of a multi-run line agrees.
pub(crate) fn inline_should_clear(group: &Group, owning_line: Option<&LineKind>) -> bool {
    match group.last_blot_line() {
        Some(closed) => owning_line != Some(&closed),
        None => false,
    }
}

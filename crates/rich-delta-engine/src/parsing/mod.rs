//! # Delta Parsing
//!
//! Turns a flat list of delta operations into ordered groups of blots.
//!
//! ## Pipeline
//!
//! 1. **Normalization** (`normalizer`): bare text is split on newlines and paragraph
//!    breaks become breakpoints
//! 2. **Grouping** (`builder`): a `GroupBuilder` walks the token stream with a
//!    `Cursor`, matches one blot and any number of formats per operation, and opens and
//!    closes groups following each blot's directives
//!
//! ## Modules
//!
//! - **`delta`**: `Operation`, `Insert`, `Attributes`
//! - **`blots`** / **`formats`**: capability traits, matchers and built-in kinds
//! - **`registry`**: the ordered variant lists a parse runs against
//! - **`group`**: `Group`, the output unit
//! - **`snapshot`**: rendering-independent views for tests and tooling

pub mod blots;
pub mod builder;
pub mod cursor;
pub mod delta;
pub mod formats;
pub mod group;
pub mod normalizer;
pub mod registry;
pub mod snapshot;

#[cfg(test)]
mod tests;

use builder::GroupBuilder;
use delta::Operation;
use group::Group;
use normalizer::normalize_operations;
use registry::Registry;
use snapshot::BlotSnap;

/// Parses `ops` into groups using the variants in `registry`.
pub fn parse(registry: &Registry, ops: &[Operation]) -> Vec<Group> {
    let tokens = normalize_operations(registry, ops);
    let groups = GroupBuilder::new(registry).run(&tokens);
    log::debug!(
        "parsed {} operations into {} groups",
        ops.len(),
        groups.len()
    );
    groups
}

/// Every mentioned username, in document order.
///
/// Skips parsing entirely when the registry has no mention-capable blot.
pub fn parse_mention_usernames(registry: &Registry, ops: &[Operation]) -> Vec<String> {
    if !registry.provides_mentions() {
        return Vec::new();
    }
    parse(registry, ops)
        .iter()
        .flat_map(Group::mention_usernames)
        .collect()
}

/// The structural snapshot of every group.
pub fn parse_into_test_data(registry: &Registry, ops: &[Operation]) -> Vec<Vec<BlotSnap>> {
    parse(registry, ops).iter().map(Group::snapshot).collect()
}

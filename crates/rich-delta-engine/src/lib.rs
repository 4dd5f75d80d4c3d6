pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    blots::{Blot, BlotVariant, LineKind, OpWindow},
    delta::{Attributes, Insert, Operation},
    formats::{Format, FormatVariant},
    group::{Group, GroupItem},
    parse, parse_into_test_data, parse_mention_usernames,
    registry::{Registry, RegistryBuilder},
    snapshot::BlotSnap,
};

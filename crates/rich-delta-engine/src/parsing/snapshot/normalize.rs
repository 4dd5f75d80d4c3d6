use serde::Serialize;

use crate::parsing::group::Group;

use super::BlotSnap;

/// Snapshot of a whole parse for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub groups: Vec<GroupSnap>,
}

/// Snapshot of one group.
#[derive(Debug, Serialize)]
pub struct GroupSnap {
    /// Line structure of the group (e.g. "list"), absent for paragraphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    pub blots: Vec<BlotSnap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<String>,
}

/// Converts parsed groups into a serializable snapshot.
pub fn normalize(groups: &[Group]) -> Snap {
    let groups = groups
        .iter()
        .map(|g| GroupSnap {
            line: g.line_kind().map(|k| k.name().to_string()),
            blots: g.snapshot(),
            mentions: g.mention_usernames(),
        })
        .collect();

    Snap { groups }
}

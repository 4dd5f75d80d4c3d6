use crate::parsing::group::Group;

/// Validates parser output invariants.
///
/// Asserts that no group is empty.
///
/// # Panics
/// Panics with the index of the first offending group.
pub fn check(groups: &[Group]) {
    for (i, g) in groups.iter().enumerate() {
        assert!(!g.is_empty(), "group {i} of {} is empty", groups.len());
    }
}

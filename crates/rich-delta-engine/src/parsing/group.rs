use super::{
    blots::{Blot, LineKind},
    formats::Format,
    snapshot::BlotSnap,
};

/// A blot together with the formats matched for its operation.
#[derive(Debug)]
pub struct GroupItem {
    pub blot: Box<dyn Blot>,
    pub formats: Vec<Box<dyn Format>>,
}

impl GroupItem {
    pub fn snapshot(&self) -> BlotSnap {
        let mut snap = self.blot.snapshot();
        snap.formats = self.formats.iter().map(|f| f.kind().to_string()).collect();
        snap
    }
}

/// An ordered bundle of blots rendered together.
///
/// Groups handed out by the parser are never empty.
#[derive(Debug, Default)]
pub struct Group {
    items: Vec<GroupItem>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, blot: Box<dyn Blot>, formats: Vec<Box<dyn Format>>) {
        self.items.push(GroupItem { blot, formats });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[GroupItem] {
        &self.items
    }

    pub fn blots(&self) -> impl Iterator<Item = &dyn Blot> {
        self.items.iter().map(|item| item.blot.as_ref())
    }

    /// The line closed by the most recently pushed blot, if it closed one.
    pub fn last_blot_line(&self) -> Option<LineKind> {
        self.items.last().and_then(|item| item.blot.closes_line())
    }

    /// The most recent line closed anywhere in the group.
    pub fn last_closed_line(&self) -> Option<LineKind> {
        self.items.iter().rev().find_map(|item| item.blot.closes_line())
    }

    /// The structure this group renders as: the first line kind it contains, or `None`
    /// for a plain paragraph.
    pub fn line_kind(&self) -> Option<LineKind> {
        self.items.iter().find_map(|item| item.blot.closes_line())
    }

    /// Mentioned usernames in blot order.
    pub fn mention_usernames(&self) -> Vec<String> {
        self.blots().flat_map(|b| b.mention_usernames()).collect()
    }

    /// Kind, content and format kinds of every blot, in order.
    pub fn snapshot(&self) -> Vec<BlotSnap> {
        self.items.iter().map(GroupItem::snapshot).collect()
    }
}

use super::{
    blots::{OpWindow, match_blot},
    cursor::Cursor,
    formats::match_formats,
    group::Group,
    normalizer::Token,
    registry::Registry,
};

/// The grouping state machine.
///
/// Walks the normalized stream left to right with one open group:
///
/// - a breakpoint closes the open group
/// - a blot that asks to clear the group closes it before being pushed
/// - a blot that is its own group closes the group right after being pushed
/// - a blot that consumed the next operation makes the cursor skip it
///
/// Empty groups are never emitted.
pub struct GroupBuilder<'r> {
    registry: &'r Registry,
    open: Group,
    out: Vec<Group>,
}

impl<'r> GroupBuilder<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            open: Group::new(),
            out: vec![],
        }
    }

    /// Runs the state machine over the whole stream.
    pub fn run(mut self, tokens: &[Token]) -> Vec<Group> {
        let mut cursor = Cursor::new(tokens);

        while !cursor.eof() {
            match cursor.window() {
                Some(window) => {
                    // A breakpoint after the blot is never swallowed.
                    let skip_next = self.push(window) && window.next.is_some();
                    cursor.bump_n(if skip_next { 2 } else { 1 });
                }
                None => {
                    log::trace!("breakpoint at {}", cursor.pos());
                    self.flush();
                    cursor.bump();
                }
            }
        }

        self.finish()
    }

    /// Matches and places the blot for `window`. Returns whether the next operation
    /// was consumed.
    pub fn push(&mut self, window: OpWindow<'_>) -> bool {
        let blot = match_blot(self.registry, window);
        let formats = match_formats(self.registry, window);

        if blot.should_clear_current_group(&self.open) {
            self.flush();
        }

        let own_group = blot.is_own_group();
        let consumed_next = blot.has_consumed_next_op();
        log::trace!(
            "push {} (own group: {own_group}, consumed next: {consumed_next})",
            blot.kind()
        );
        self.open.push(blot, formats);

        if own_group {
            self.flush();
        }

        consumed_next
    }

    /// Closes the open group and returns everything emitted.
    pub fn finish(mut self) -> Vec<Group> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if self.open.is_empty() {
            return;
        }
        let group = std::mem::take(&mut self.open);
        log::debug!(
            "group {} closed with {} blot(s)",
            self.out.len(),
            group.len()
        );
        self.out.push(group);
    }
}

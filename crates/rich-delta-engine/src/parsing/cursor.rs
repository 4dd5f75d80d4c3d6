use super::{
    blots::{LineKind, OpWindow},
    delta::Operation,
    normalizer::Token,
};

/// A cursor over the normalized token stream with bounded lookbehind/lookahead.
///
/// Neighbours that are breakpoints (or out of range) read as absent.
#[derive(Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    /// For each token, the index of the terminator closing its line.
    line_ends: Vec<Option<usize>>,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            line_ends: line_ends(tokens),
            i: 0,
        }
    }

    /// Current index into the token stream.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.i)
    }

    /// The operation just before the cursor.
    pub fn peek_behind(&self) -> Option<&'a Operation> {
        let i = self.i.checked_sub(1)?;
        self.tokens.get(i)?.as_op()
    }

    /// The operation just after the cursor.
    pub fn peek_ahead(&self) -> Option<&'a Operation> {
        self.tokens.get(self.i + 1)?.as_op()
    }

    /// The terminator that closes the line the cursor is on.
    pub fn line_end(&self) -> Option<&'a Operation> {
        let end = (*self.line_ends.get(self.i)?)?;
        self.tokens.get(end)?.as_op()
    }

    /// The window around the current token, if it is an operation.
    pub fn window(&self) -> Option<OpWindow<'a>> {
        let current = self.current()?.as_op()?;
        Some(OpWindow {
            previous: self.peek_behind(),
            current,
            next: self.peek_ahead(),
            line_end: self.line_end(),
        })
    }

    pub fn bump(&mut self) {
        self.bump_n(1);
    }

    /// Advances by `n` tokens, stopping at the end of the stream.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.tokens.len());
    }
}

/// One backward pass: a line runs up to the next terminator unless a breakpoint or
/// a plain newline ends it first.
fn line_ends(tokens: &[Token]) -> Vec<Option<usize>> {
    let mut ends = vec![None; tokens.len()];
    let mut ahead = None;

    for (i, token) in tokens.iter().enumerate().rev() {
        ends[i] = ahead;
        ahead = match token {
            Token::Breakpoint => None,
            Token::Op(op) if LineKind::terminated_by(op).is_some() => Some(i),
            Token::Op(op) if op.text_insert().is_some_and(|t| t.contains('\n')) => None,
            Token::Op(_) => ahead,
        };
    }

    ends
}

//! Operation normalization.
//!
//! Makes line boundaries inside plain text explicit before grouping:
//!
//! 1. Every bare insert containing a newline is split into one operation per line
//!    run and per `\n`. When the insert directly follows a line-structure terminator
//!    and does not itself start with a newline, a breakpoint goes in front of it so
//!    the text is not pulled into the line structure's group.
//! 2. A lone `\n` that follows content which did not end in a newline is a paragraph
//!    break and becomes a breakpoint. A lone `\n` after another newline stays as
//!    content (an empty line).
//!
//! The input slice is never modified.

use std::sync::LazyLock;

use regex::Regex;

use super::{delta::Operation, registry::Registry};

/// Runs of non-newline characters, or a single newline.
static LINE_PIECES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\n]+|\n").expect("Invalid line piece regex"));

/// An element of the normalized stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Op(Operation),
    /// Ends the current group. Never part of a group.
    Breakpoint,
}

impl Token {
    pub fn as_op(&self) -> Option<&Operation> {
        match self {
            Token::Op(op) => Some(op),
            Token::Breakpoint => None,
        }
    }
}

/// Rewrites `ops` into the token stream the grouping engine walks.
pub fn normalize_operations(registry: &Registry, ops: &[Operation]) -> Vec<Token> {
    let tokens = insert_breakpoints(split_newlines(registry, ops));
    log::trace!("normalized {} operations into {} tokens", ops.len(), tokens.len());
    tokens
}

fn split_newlines(registry: &Registry, ops: &[Operation]) -> Vec<Token> {
    let mut out = Vec::with_capacity(ops.len());
    let mut previous: Option<&Operation> = None;

    for op in ops {
        let pieces: Vec<&str> = op
            .bare_text()
            .map(|text| LINE_PIECES.find_iter(text).map(|m| m.as_str()).collect())
            .unwrap_or_default();

        if pieces.len() <= 1 {
            out.push(Token::Op(op.clone()));
        } else {
            let after_terminator = previous.is_some_and(|p| registry.is_line_terminator(p));
            if after_terminator && pieces[0] != "\n" {
                log::trace!("breakpoint before text following a line terminator");
                out.push(Token::Breakpoint);
            }
            out.extend(pieces.into_iter().map(|p| Token::Op(Operation::text(p))));
        }

        previous = Some(op);
    }

    out
}

fn insert_breakpoints(tokens: Vec<Token>) -> Vec<Token> {
    let mut previous_ended_in_newline = false;

    tokens
        .into_iter()
        .map(|token| match token {
            Token::Op(op) => {
                let paragraph_break = op.bare_text() == Some("\n") && !previous_ended_in_newline;
                previous_ended_in_newline = op.ends_with_newline();
                if paragraph_break {
                    Token::Breakpoint
                } else {
                    Token::Op(op)
                }
            }
            Token::Breakpoint => Token::Breakpoint,
        })
        .collect()
}

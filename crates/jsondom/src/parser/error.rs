//! Structured parse errors.
//!
//! Every surface that was fatal in spirit — a grammar mismatch, a bad
//! literal, a stray byte, running off the end of the input — comes back to
//! the caller as a [`ParseError`] carrying the byte offset where the lexeme
//! started. Nothing in the parser aborts the process.

use thiserror::Error;

use super::lexer::TokenKind;

/// A parse failure at a specific byte offset of the input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Byte offset into the input where the offending lexeme starts.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The ways a parse can fail.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The grammar required one token kind and the input held another.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// A position where any value could start held a non-value token.
    #[error("expected a value, found {found}")]
    ExpectedValue { found: TokenKind },

    /// The top level of a document must be an object or an array.
    #[error("expected '{{' or '[' at the top level, found {found}")]
    ExpectedContainer { found: TokenKind },

    /// A byte that starts no token of the grammar.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A lexeme opened like `null`, `true` or `false` but did not match.
    #[error("invalid literal, expected `{expected}`")]
    InvalidLiteral { expected: &'static str },

    /// The input ended inside a string or a fixed literal.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// Growing the element or property buffer failed.
    #[error("allocation failed")]
    AllocationFailed,
}

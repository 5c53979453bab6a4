//! Tokenizer for the supported JSON subset.
//!
//! Tokens are produced one at a time on demand; nothing is buffered ahead of
//! the parser's single-token lookahead. The scan is byte-oriented over the
//! input `&str`: whitespace is space, tab and newline only, numbers are the
//! digit-accumulation algorithm described on [`Lexer::scan_number`], and
//! strings are copied raw between their quotes — the byte after a `\` is
//! skipped without being decoded and the backslash stays in the content.

use alloc::string::String;
use core::fmt;

use super::error::{ParseError, ParseErrorKind};

/// A transient lexical unit, consumed by the parser as soon as it is
/// produced. Owned payloads (string text, decoded numbers) transfer straight
/// into the value tree.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Comma,
    Colon,
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Eof,
}

impl Token {
    pub(crate) fn kind(&self) -> TokenKind {
        match self {
            Token::ObjectStart => TokenKind::ObjectStart,
            Token::ObjectEnd => TokenKind::ObjectEnd,
            Token::ArrayStart => TokenKind::ArrayStart,
            Token::ArrayEnd => TokenKind::ArrayEnd,
            Token::Comma => TokenKind::Comma,
            Token::Colon => TokenKind::Colon,
            Token::String(_) => TokenKind::String,
            Token::Number(_) => TokenKind::Number,
            Token::Boolean(_) => TokenKind::Boolean,
            Token::Null => TokenKind::Null,
            Token::Eof => TokenKind::Eof,
        }
    }
}

/// The kind of a token, without its payload.
///
/// Carried in [`ParseError`]s to report expected-versus-found mismatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Comma,
    Colon,
    String,
    Number,
    Boolean,
    Null,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::ObjectStart => "'{'",
            TokenKind::ObjectEnd => "'}'",
            TokenKind::ArrayStart => "'['",
            TokenKind::ArrayEnd => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::Eof => "end of input",
        })
    }
}

pub(crate) struct Lexer<'src> {
    src: &'src str,
    bytes: &'src [u8],
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub(crate) fn new(src: &'src str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    /// Scans the next token, returning it with its starting byte offset.
    ///
    /// End of input is the [`Token::Eof`] token rather than an error, so the
    /// parser can report what it was expecting at that point.
    pub(crate) fn next_token(&mut self) -> Result<(usize, Token), ParseError> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(&byte) = self.bytes.get(self.pos) else {
            return Ok((start, Token::Eof));
        };
        let token = match byte {
            b'{' => {
                self.pos += 1;
                Token::ObjectStart
            }
            b'}' => {
                self.pos += 1;
                Token::ObjectEnd
            }
            b'[' => {
                self.pos += 1;
                Token::ArrayStart
            }
            b']' => {
                self.pos += 1;
                Token::ArrayEnd
            }
            b',' => {
                self.pos += 1;
                Token::Comma
            }
            b':' => {
                self.pos += 1;
                Token::Colon
            }
            b'0'..=b'9' | b'-' => self.scan_number(),
            b'n' => self.scan_literal("null", Token::Null)?,
            b't' => self.scan_literal("true", Token::Boolean(true))?,
            b'f' => self.scan_literal("false", Token::Boolean(false))?,
            b'"' => self.scan_string()?,
            _ => {
                let ch = self.src[start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedCharacter(ch),
                    start,
                ));
            }
        };
        Ok((start, token))
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n') = self.bytes.get(self.pos) {
            self.pos += 1;
        }
    }

    fn digit(&self) -> Option<f64> {
        match self.bytes.get(self.pos) {
            Some(b @ b'0'..=b'9') => Some(f64::from(b - b'0')),
            _ => None,
        }
    }

    /// Decodes a numeric lexeme: `value = value * 10 + digit` in an `f64`
    /// accumulator for the integer part, the same for an optional fraction
    /// with a power-of-ten divisor, negated when the lexeme opened with `-`.
    ///
    /// Large integers lose precision (there is no integer fast path) and
    /// exponent notation is not recognized; both limits are intentional.
    fn scan_number(&mut self) -> Token {
        let negative = self.bytes[self.pos] == b'-';
        if negative {
            self.pos += 1;
        }

        let mut value = 0.0_f64;
        while let Some(digit) = self.digit() {
            value = value * 10.0 + digit;
            self.pos += 1;
        }

        if self.bytes.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            let mut decimal = 0.0_f64;
            let mut decimal_factor = 1.0_f64;
            while let Some(digit) = self.digit() {
                decimal = decimal * 10.0 + digit;
                decimal_factor *= 10.0;
                self.pos += 1;
            }
            value += decimal / decimal_factor;
        }

        Token::Number(if negative { -value } else { value })
    }

    fn scan_literal(&mut self, literal: &'static str, token: Token) -> Result<Token, ParseError> {
        let start = self.pos;
        let end = start + literal.len();
        if end > self.bytes.len() {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEndOfInput,
                self.bytes.len(),
            ));
        }
        if &self.bytes[start..end] != literal.as_bytes() {
            return Err(ParseError::new(
                ParseErrorKind::InvalidLiteral { expected: literal },
                start,
            ));
        }
        self.pos = end;
        Ok(token)
    }

    /// Scans to the matching unescaped `"`. Any byte directly after a `\` is
    /// treated as non-terminating; no escape sequence is interpreted.
    fn scan_string(&mut self) -> Result<Token, ParseError> {
        // Cursor sits on the opening quote.
        self.pos += 1;
        let content_start = self.pos;
        loop {
            match self.bytes.get(self.pos) {
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedEndOfInput,
                        self.bytes.len(),
                    ));
                }
                Some(b'"') => break,
                Some(b'\\') => self.pos += 2,
                Some(_) => self.pos += 1,
            }
        }
        // Both bounds sit next to ASCII quotes, so the slice is on char
        // boundaries even though the scan walked raw bytes.
        let content = String::from(&self.src[content_start..self.pos]);
        self.pos += 1;
        Ok(Token::String(content))
    }
}

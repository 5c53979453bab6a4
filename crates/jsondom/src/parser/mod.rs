//! Recursive-descent parser over the tokenizer.
//!
//! One entry point per grammar production, with a lookahead of exactly one
//! token. The consume-and-check step ([`Parser::expect`]) returns a
//! structured [`ParseError`] on a mismatch instead of aborting, and element
//! and property buffers grow under the shared amortized policy in
//! [`crate::buffer`], so allocation failure is a returned error too.

use alloc::vec::Vec;

use crate::{
    buffer::reserve_for_push,
    value::{Object, Property, Value},
};

mod error;
mod lexer;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::TokenKind;

use lexer::{Lexer, Token};

/// Parses a document of the supported JSON subset into a [`Value`] tree.
///
/// The top level must be an object or an array; the returned tree's tag
/// matches the opening delimiter. Input after the closing delimiter is
/// rejected.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the first offending lexeme. Structural
/// errors abort the current parse with no partial tree; the caller can
/// report the error and retry without the process having been harmed.
///
/// # Examples
///
/// ```
/// use jsondom::{parse, ValueKind};
///
/// let doc = parse(r#"{"ciao": 1234.5}"#).unwrap();
/// assert_eq!(doc.kind(), ValueKind::Object);
/// assert!(parse("{\"a\": }").is_err());
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input)?;
    let value = match parser.tok.kind() {
        TokenKind::ObjectStart => parser.parse_object()?,
        TokenKind::ArrayStart => parser.parse_array()?,
        found => {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedContainer { found },
                parser.tok_offset,
            ));
        }
    };
    parser.expect(TokenKind::Eof)?;
    Ok(value)
}

struct Parser<'src> {
    lexer: Lexer<'src>,
    /// Current lookahead token.
    tok: Token,
    /// Byte offset where the lookahead token starts.
    tok_offset: usize,
}

impl<'src> Parser<'src> {
    fn new(input: &'src str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let (tok_offset, tok) = lexer.next_token()?;
        Ok(Self {
            lexer,
            tok,
            tok_offset,
        })
    }

    /// Consumes the lookahead token and returns it, pulling in the next one.
    fn bump(&mut self) -> Result<Token, ParseError> {
        let (offset, next) = self.lexer.next_token()?;
        self.tok_offset = offset;
        Ok(core::mem::replace(&mut self.tok, next))
    }

    /// Consume-and-check: the lookahead must have the expected kind.
    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let found = self.tok.kind();
        if found != expected {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken { expected, found },
                self.tok_offset,
            ));
        }
        self.bump()
    }

    fn alloc_failed(&self) -> ParseError {
        ParseError::new(ParseErrorKind::AllocationFailed, self.tok_offset)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.tok.kind() {
            TokenKind::ObjectStart => return self.parse_object(),
            TokenKind::ArrayStart => return self.parse_array(),
            TokenKind::Number | TokenKind::String | TokenKind::Boolean | TokenKind::Null => {}
            found => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedValue { found },
                    self.tok_offset,
                ));
            }
        }
        match self.bump()? {
            Token::Number(n) => Ok(Value::Number(n)),
            Token::String(s) => Ok(Value::String(s)),
            Token::Boolean(b) => Ok(Value::Boolean(b)),
            Token::Null => Ok(Value::Null),
            _ => unreachable!("scalar kinds are filtered above"),
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.expect(TokenKind::ArrayStart)?;
        let mut values = Vec::new();
        if self.tok.kind() != TokenKind::ArrayEnd {
            loop {
                let value = self.parse_value()?;
                reserve_for_push(&mut values).map_err(|_| self.alloc_failed())?;
                values.push(value);
                if self.tok.kind() != TokenKind::Comma {
                    break;
                }
                self.bump()?;
            }
        }
        self.expect(TokenKind::ArrayEnd)?;
        Ok(Value::Array(values))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.expect(TokenKind::ObjectStart)?;
        let mut properties = Vec::new();
        if self.tok.kind() != TokenKind::ObjectEnd {
            loop {
                let property = self.parse_property()?;
                reserve_for_push(&mut properties).map_err(|_| self.alloc_failed())?;
                properties.push(property);
                if self.tok.kind() != TokenKind::Comma {
                    break;
                }
                self.bump()?;
            }
        }
        self.expect(TokenKind::ObjectEnd)?;
        Ok(Value::Object(Object::from_properties(properties)))
    }

    fn parse_property(&mut self) -> Result<Property, ParseError> {
        let key = match self.expect(TokenKind::String)? {
            Token::String(key) => key,
            _ => unreachable!("expect(String) returned a non-string token"),
        };
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value()?;
        Ok(Property { key, value })
    }
}

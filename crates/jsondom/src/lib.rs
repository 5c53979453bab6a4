//! A minimal JSON document model.
//!
//! `jsondom` parses a strict subset of JSON into a tree of tagged [`Value`]s
//! with a single-pass tokenizer and a recursive-descent parser, then lets the
//! caller navigate the tree by key path ([`Value::get_path`],
//! [`Value::exists`], [`Value::kind_of`]) and mutate it in place
//! ([`Value::set`]). A [`core::fmt::Display`] implementation serializes a
//! tree back to text.
//!
//! The supported grammar is deliberately narrow: the top level must be an
//! object or an array, numbers are `-`, digits and at most one `.` (no
//! exponents), and string escapes are skipped raw rather than decoded — the
//! byte after a `\` never terminates the string, and the backslash stays in
//! the content.
//!
//! Every failure surface is a returned error: malformed input is a
//! [`ParseError`] with a byte offset, lookup misses and type mismatches are
//! [`AccessError`]s, and buffer growth reports allocation failure instead of
//! aborting.
//!
//! # Quick start
//!
//! ```
//! use jsondom::{parse, Value, ValueKind};
//!
//! let doc = parse(r#"{ "name": "roberto", "scores": [1, 2.5] }"#).unwrap();
//!
//! assert_eq!(doc.get_str(&["name"]), Ok("roberto"));
//! assert_eq!(doc.kind_of("scores"), Some(ValueKind::Array));
//! assert_eq!(doc.get_path(&["scores"]).unwrap().at(1), Ok(&Value::Number(2.5)));
//! ```
//!
//! Trees can also be built directly:
//!
//! ```
//! use jsondom::object;
//!
//! let mut doc = object! {
//!     "test" => 9999.0,
//!     "value" => object! { "nested" => "deeply nested string" },
//! };
//!
//! assert_eq!(doc.get_str(&["value", "nested"]), Ok("deeply nested string"));
//!
//! doc.set("extra", true.into()).unwrap();
//! assert!(doc.exists(&["extra"]));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod parser;
mod path;
mod value;

#[cfg(test)]
mod tests;

pub use error::{AccessError, AllocError};
pub use parser::{parse, ParseError, ParseErrorKind, TokenKind};
pub use value::{Array, Object, Property, Value, ValueKind};

#[doc(hidden)]
pub mod __private {
    pub use alloc::string::String;
}

/// Builds a [`Value::Object`] literal from `key => value` pairs.
///
/// Keys are anything convertible to a `String`, values anything with a
/// `From` conversion onto [`Value`] — including another `object!` invocation
/// for nesting. The resulting object owns all of its storage and grows like
/// any other, so it can be mutated with [`Value::set`] right away.
///
/// ```
/// use jsondom::{object, Value};
///
/// let doc = object! {
///     "enabled" => true,
///     "retries" => 3.0,
///     "inner" => object! { "name" => "x" },
/// };
/// assert_eq!(doc.get_bool(&["enabled"]), Ok(true));
/// assert_eq!(doc.get_str(&["inner", "name"]), Ok("x"));
/// ```
#[macro_export]
macro_rules! object {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {
        $crate::Value::Object(::core::iter::FromIterator::from_iter([
            $( ($crate::__private::String::from($key), $crate::Value::from($value)) ),*
        ]))
    };
}

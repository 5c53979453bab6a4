//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any value of the
//! supported JSON subset, together with the [`Object`] property list it uses
//! for the object variant and the [`ValueKind`] tag used by kind queries and
//! type-mismatch errors.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{buffer::reserve_for_push, error::AllocError};

/// The storage for the array variant of [`Value`].
pub type Array = Vec<Value>;

/// A node in a JSON tree.
///
/// Exactly one variant is live at a time and all access is checked: the
/// `is_*` predicates, the `as_*` conversions returning `Option`, and the
/// accessor methods in this crate all match on the tag rather than trusting
/// the caller.
///
/// # Examples
///
/// ```
/// use jsondom::{Object, Value};
///
/// let mut object = Object::new();
/// object.set("key", Value::String("value".into())).unwrap();
/// let v = Value::Object(object);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

/// The tag of a [`Value`], without its payload.
///
/// Returned by [`Value::kind`] and [`Value::kind_of`] and carried inside
/// [`AccessError::WrongType`](crate::AccessError::WrongType).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        })
    }
}

/// A `(key, value)` pair owned by an [`Object`].
///
/// Keys are compared by exact content; nothing ever deduplicates them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Value,
}

/// An ordered list of [`Property`]s.
///
/// Properties keep their insertion order and every lookup scans linearly for
/// the first key match. Duplicate keys are allowed; the first one shadows the
/// rest for `get`, `set` and the path accessors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    properties: Vec<Property>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Returns the number of properties, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the object has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over the property keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|property| property.key.as_str())
    }

    /// The properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the value of the first property whose key matches exactly.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|property| property.key == key)
            .map(|property| &property.value)
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.properties
            .iter_mut()
            .find(|property| property.key == key)
            .map(|property| &mut property.value)
    }

    /// Returns `true` if any property has the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Writes `value` under `key` and returns the written slot.
    ///
    /// If the key already exists, the first matching property's value is
    /// overwritten in place and its key left untouched. Otherwise a new
    /// property is appended, growing the property buffer under the shared
    /// amortized policy; a failed grow surfaces as [`AllocError`].
    pub fn set(&mut self, key: &str, value: Value) -> Result<&mut Value, AllocError> {
        if let Some(index) = self.properties.iter().position(|p| p.key == key) {
            let slot = &mut self.properties[index].value;
            *slot = value;
            return Ok(slot);
        }
        let index = self.properties.len();
        reserve_for_push(&mut self.properties)?;
        self.properties.push(Property {
            key: String::from(key),
            value,
        });
        Ok(&mut self.properties[index].value)
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(key, value)| Property { key, value })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Property;
    type IntoIter = core::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if this is a [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text payload, if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element slice, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Mutable access to the elements, if this is an [`Array`](Value::Array).
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// The property list, if this is an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Mutable access to the property list, if this is an
    /// [`Object`](Value::Object).
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Quotes, backslashes and control characters are replaced with their escape
/// sequences. Note the asymmetry with the tokenizer, which copies escapes raw:
/// exact re-parse equality only holds for strings without `"` or `\`.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c if c.is_ascii_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            // Finite floats render without exponents, so the output stays
            // inside the parseable subset. Non-finite numbers can only come
            // from hand-built trees.
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Value::Object(object) => {
                f.write_str("{")?;
                for (i, property) in object.properties.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str("\"")?;
                    write_escaped_string(&property.key, f)?;
                    write!(f, "\":{}", property.value)?;
                }
                f.write_str("}")
            }
        }
    }
}

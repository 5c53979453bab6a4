//! Path-based navigation and mutation over a [`Value`] tree.
//!
//! A path is an ordered sequence of keys walked through nested objects; a
//! single index addresses an array element. All walks are checked: a missing
//! key is [`AccessError::NotFound`], a shape mismatch along the way or at the
//! target is [`AccessError::WrongType`], and indexing past the end is
//! [`AccessError::IndexOutOfBounds`]. Accessor errors are always local and
//! recoverable.

use alloc::string::String;

use crate::{
    error::AccessError,
    value::{Value, ValueKind},
};

impl Value {
    /// Walks `path` key by key through nested objects and returns the value
    /// at the end, whatever its kind.
    ///
    /// The receiver and every intermediate step must be objects. At each
    /// step the current object is scanned linearly for the first exact key
    /// match. An empty path returns the receiver itself.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotFound`] for the first key that has no match,
    /// [`AccessError::WrongType`] when the walk hits a non-object before the
    /// path is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{parse, Value};
    ///
    /// let doc = parse(r#"{"value": {"test_object": {"nested": "x"}}}"#).unwrap();
    /// let v = doc.get_path(&["value", "test_object", "nested"]).unwrap();
    /// assert_eq!(v, &Value::String("x".into()));
    /// assert!(doc.get_path(&["value", "missing"]).is_err());
    /// ```
    pub fn get_path(&self, path: &[&str]) -> Result<&Value, AccessError> {
        let mut current = self;
        for &key in path {
            let Value::Object(object) = current else {
                return Err(AccessError::WrongType {
                    expected: ValueKind::Object,
                    actual: current.kind(),
                });
            };
            current = object.get(key).ok_or_else(|| AccessError::NotFound {
                key: String::from(key),
            })?;
        }
        Ok(current)
    }

    /// Walks `path` and converts the target to `f64`.
    ///
    /// # Errors
    ///
    /// The walk's errors, plus [`AccessError::WrongType`] when the target is
    /// not a number.
    pub fn get_f64(&self, path: &[&str]) -> Result<f64, AccessError> {
        let value = self.get_path(path)?;
        value.as_f64().ok_or(AccessError::WrongType {
            expected: ValueKind::Number,
            actual: value.kind(),
        })
    }

    /// Walks `path` and borrows the target as `&str`.
    ///
    /// # Errors
    ///
    /// The walk's errors, plus [`AccessError::WrongType`] when the target is
    /// not a string.
    pub fn get_str(&self, path: &[&str]) -> Result<&str, AccessError> {
        let value = self.get_path(path)?;
        value.as_str().ok_or(AccessError::WrongType {
            expected: ValueKind::String,
            actual: value.kind(),
        })
    }

    /// Walks `path` and converts the target to `bool`.
    ///
    /// # Errors
    ///
    /// The walk's errors, plus [`AccessError::WrongType`] when the target is
    /// not a boolean.
    pub fn get_bool(&self, path: &[&str]) -> Result<bool, AccessError> {
        let value = self.get_path(path)?;
        value.as_bool().ok_or(AccessError::WrongType {
            expected: ValueKind::Boolean,
            actual: value.kind(),
        })
    }

    /// Returns `true` if [`get_path`](Self::get_path) would succeed.
    #[must_use]
    pub fn exists(&self, path: &[&str]) -> bool {
        self.get_path(path).is_ok()
    }

    /// The tag of the value under `key`, one level deep.
    ///
    /// `None` when the key is missing or the receiver is not an object —
    /// the "no such key" sentinel, not an error.
    #[must_use]
    pub fn kind_of(&self, key: &str) -> Option<ValueKind> {
        match self {
            Value::Object(object) => object.get(key).map(Value::kind),
            _ => None,
        }
    }

    /// Checked indexing into an array value.
    ///
    /// # Errors
    ///
    /// [`AccessError::WrongType`] when the receiver is not an array,
    /// [`AccessError::IndexOutOfBounds`] past the end.
    pub fn at(&self, index: usize) -> Result<&Value, AccessError> {
        let Value::Array(values) = self else {
            return Err(AccessError::WrongType {
                expected: ValueKind::Array,
                actual: self.kind(),
            });
        };
        values.get(index).ok_or(AccessError::IndexOutOfBounds {
            index,
            len: values.len(),
        })
    }

    /// Writes `value` under a top-level `key` and returns the written slot.
    ///
    /// This is single-level: the key is looked up in the receiver only, not
    /// along a path. An existing property (first match) is overwritten in
    /// place with its key preserved; a new one is appended, growing the
    /// property buffer under the shared amortized policy.
    ///
    /// # Errors
    ///
    /// [`AccessError::WrongType`] when the receiver is not an object,
    /// [`AccessError::AllocationFailed`] when the append could not grow the
    /// buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{parse, ValueKind};
    ///
    /// let mut doc = parse("{}").unwrap();
    /// doc.set("ciaociao", 100.0.into()).unwrap();
    /// assert!(doc.exists(&["ciaociao"]));
    /// assert_eq!(doc.kind_of("ciaociao"), Some(ValueKind::Number));
    /// ```
    pub fn set(&mut self, key: &str, value: Value) -> Result<&mut Value, AccessError> {
        match self {
            Value::Object(object) => Ok(object.set(key, value)?),
            _ => Err(AccessError::WrongType {
                expected: ValueKind::Object,
                actual: self.kind(),
            }),
        }
    }
}

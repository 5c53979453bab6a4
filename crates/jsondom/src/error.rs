//! Errors returned by the accessor and mutation APIs.

use alloc::string::String;

use thiserror::Error;

use crate::value::ValueKind;

/// A buffer grow operation could not reserve memory.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("allocation failed")]
pub struct AllocError;

/// A path lookup, index, or mutation did not resolve.
///
/// "Not found" and "found but of the wrong kind" are distinct, so a caller
/// can tell a missing key apart from a shape mismatch.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// No property with this key at the step where the walk stopped.
    #[error("key `{key}` not found")]
    NotFound { key: String },

    /// The value at the target (or an intermediate step) has the wrong tag.
    #[error("expected {expected}, found {actual}")]
    WrongType {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Array index past the end.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Appending a new property failed to grow the property buffer.
    #[error("allocation failed")]
    AllocationFailed,
}

impl From<AllocError> for AccessError {
    fn from(_: AllocError) -> Self {
        Self::AllocationFailed
    }
}

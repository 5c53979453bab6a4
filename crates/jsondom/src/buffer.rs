//! Amortized buffer growth shared by the parser and the object mutator.
//!
//! Array elements and object properties grow under one policy, stated in
//! element counts only: the first insertion reserves [`INITIAL_CAPACITY`]
//! slots, and a full buffer reserves half its capacity again (1.5× amortized
//! growth). Reservation goes through [`Vec::try_reserve_exact`], so a failed
//! grow is a recoverable [`AllocError`] instead of an abort.

use alloc::vec::Vec;

use crate::error::AllocError;

pub(crate) const INITIAL_CAPACITY: usize = 32;

/// Makes room for one more element without letting `push` reallocate.
pub(crate) fn reserve_for_push<T>(buf: &mut Vec<T>) -> Result<(), AllocError> {
    if buf.len() < buf.capacity() {
        return Ok(());
    }
    let additional = if buf.capacity() == 0 {
        INITIAL_CAPACITY
    } else {
        (buf.capacity() / 2).max(1)
    };
    buf.try_reserve_exact(additional).map_err(|_| AllocError)
}

//! Error and Result types shared by both containers.
//!
//! End-of-iteration is not an error: cursor methods return `None` instead.

use std::collections::TryReserveError;
use thiserror::Error;

/// Failure modes of `HashMap` and `GrowableList` operations.
#[derive(Error, Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Error {
    /// `HashMap::insert`: the key is already present. The stored value is
    /// left untouched.
    #[error("key already exists")]
    AlreadyExists,
    /// `HashMap::find`: the key is absent.
    #[error("key not found")]
    NotFound,
    /// Growing the backing storage or copying a key failed to allocate.
    #[error("out of memory")]
    OutOfMemory,
    /// `GrowableList::get`: the index is not below the current length.
    #[error("index out of range")]
    IndexOutOfRange,
    /// `GrowableList::insert`: the index was not below the current length.
    ///
    /// This is not a pure validation error: the value has been appended at
    /// the end of the list before this is returned.
    #[error("index past end; value appended")]
    IndexPastEnd,
    /// `GrowableList::pop`: the list is empty.
    #[error("stack underflow")]
    Underflow,
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// Result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

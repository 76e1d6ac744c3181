//! Error types shared by both containers.

use thiserror::Error;

/// Failure conditions reported by [`Deque`](crate::Deque) and
/// [`Stack`](crate::Stack).
///
/// Every fallible operation returns one of these instead of panicking; a
/// failed call leaves the container untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// A removal or peek was attempted on a container with no elements.
    #[error("container is empty")]
    EmptyContainer,

    /// A positional removal addressed an index past the end of the sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Alias for operations that can fail with [`CollectionError`].
pub type Result<T> = std::result::Result<T, CollectionError>;

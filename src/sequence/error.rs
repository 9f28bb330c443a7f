use thiserror::Error;

/// Errors raised by the query operations of a [`Sequence`](super::traits::Sequence).
///
/// Every variant is a caller-usage error: the precondition of the operation
/// (a valid index, a non-empty sequence, exactly one item) was not met.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// `item(index)` was called with `index >= size()`.
    #[error("index {index} out of bounds for sequence of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// An item was requested from an empty sequence.
    #[error("no such element: the sequence is empty")]
    Empty,

    /// A single item was requested but the sequence holds more than one.
    #[error("no such element: expected a single item but the sequence has {size}")]
    MultipleItems { size: usize },
}

pub type Result<T> = std::result::Result<T, SeqError>;

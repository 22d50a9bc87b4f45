//! Errors raised by [`DynamicArray`](crate::DynamicArray) operations.

use thiserror::Error;

/// Failure of a single container operation.
///
/// Operations validate every argument before touching storage, so a
/// container that returned an error is exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// An index failed the operation's range check.
    ///
    /// `low..bound` is the range that was accepted at the time of the call.
    #[error("index {index} is out of range (accepted indices are {low}..{bound})")]
    IndexOutOfRange {
        index: usize,
        low: usize,
        bound: usize,
    },

    /// A `from..to` pair with `from > to`.
    #[error("invalid range: start {from} is greater than end {to}")]
    InvalidRange { from: usize, to: usize },
}

pub type Result<T, E = ArrayError> = core::result::Result<T, E>;

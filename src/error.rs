//! Error types for striped list operations.
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose error
//! type is [`StripeListError`]. Variants are grouped by what went wrong:
//!
//! - **Bounds**: [`IndexOutOfBounds`](StripeListError::IndexOutOfBounds),
//!   [`InvalidRange`](StripeListError::InvalidRange)
//! - **Capacity**: [`CapacityExceeded`](StripeListError::CapacityExceeded)
//! - **Source validation**: [`EmptySource`](StripeListError::EmptySource),
//!   [`NullElement`](StripeListError::NullElement),
//!   [`IncompatibleSequence`](StripeListError::IncompatibleSequence)
//! - **Iteration**: [`ConcurrentModification`](StripeListError::ConcurrentModification),
//!   [`NoCurrentElement`](StripeListError::NoCurrentElement)
//! - **Construction**: [`InvalidParameters`](StripeListError::InvalidParameters)
//!
//! # Error Propagation
//!
//! ```
//! use stripelist::{Result, StripedList};
//!
//! fn middle(list: &StripedList<u32>) -> Result<u32> {
//!     let idx = list.len() / 2;
//!     list.get(idx)
//! }
//!
//! let list = StripedList::from_vec(vec![1, 2, 3]);
//! assert_eq!(middle(&list).unwrap(), 2);
//! assert!(middle(&StripedList::new()).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for striped list operations.
pub type Result<T> = std::result::Result<T, StripeListError>;

/// Errors that can occur while operating on a striped list.
///
/// No operation retries internally. Preconditions that can be checked up
/// front (indices, ranges, empty sources, absent cells) are checked before
/// any stripe is touched, so an error from those checks means nothing was
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripeListError {
    /// An index was outside `[0, length)` (or `[0, length]` for insertion).
    IndexOutOfBounds {
        /// The invalid index.
        index: usize,
        /// The number of elements at the time of the check.
        length: usize,
    },

    /// A `[start, end)` range was reversed or reached past the end.
    InvalidRange {
        /// Start of the range.
        start: usize,
        /// End of the range (exclusive).
        end: usize,
        /// Length of the sequence the range was checked against.
        length: usize,
        /// Why the range was rejected.
        reason: String,
    },

    /// The list is at its maximum capacity and cannot grow further.
    CapacityExceeded {
        /// Capacity the list could reach.
        capacity: usize,
        /// Number of elements the operation needed room for.
        attempted: usize,
    },

    /// An operation that needs a non-empty source was given an empty one.
    EmptySource {
        /// Name of the operation.
        operation: &'static str,
    },

    /// An empty cell was offered for insertion.
    NullElement {
        /// Position of the empty cell in the source.
        position: usize,
    },

    /// A live iterator observed a structural change made behind its back.
    ///
    /// The iterator cannot recover; create a new one to restart.
    ConcurrentModification {
        /// Modification count captured by the iterator.
        expected: u64,
        /// Modification count observed on the list.
        actual: u64,
    },

    /// A source sequence broke its own contract.
    IncompatibleSequence {
        /// Description of the mismatch.
        reason: String,
    },

    /// Construction parameters were rejected.
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// An iterator was asked to `remove` or `set` without a current element.
    NoCurrentElement,
}

impl fmt::Display for StripeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "Index {} out of bounds for list of length {}", index, length)
            }
            Self::InvalidRange {
                start,
                end,
                length,
                reason,
            } => {
                write!(
                    f,
                    "Invalid range [{}..{}) for list of length {}: {}",
                    start, end, length, reason
                )
            }
            Self::CapacityExceeded {
                capacity,
                attempted,
            } => {
                write!(
                    f,
                    "List capacity of {} elements exceeded. Needed room for {} elements.",
                    capacity, attempted
                )
            }
            Self::EmptySource { operation } => {
                write!(f, "Operation '{}' requires a non-empty source.", operation)
            }
            Self::NullElement { position } => {
                write!(f, "Empty element at source position {} cannot be stored.", position)
            }
            Self::ConcurrentModification { expected, actual } => {
                write!(
                    f,
                    "Concurrent modification detected: iterator expected modification count {}, list is at {}.",
                    expected, actual
                )
            }
            Self::IncompatibleSequence { reason } => {
                write!(f, "Incompatible source sequence: {}.", reason)
            }
            Self::InvalidParameters { message } => {
                write!(f, "Invalid list parameters: {}.", message)
            }
            Self::NoCurrentElement => {
                write!(f, "Iterator has no current element; call next() or previous() first.")
            }
        }
    }
}

impl std::error::Error for StripeListError {}

impl StripeListError {
    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create an `InvalidRange` error.
    #[must_use]
    pub fn invalid_range(start: usize, end: usize, length: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            start,
            end,
            length,
            reason: reason.into(),
        }
    }

    /// Create a `CapacityExceeded` error.
    #[must_use]
    pub fn capacity_exceeded(capacity: usize, attempted: usize) -> Self {
        Self::CapacityExceeded {
            capacity,
            attempted,
        }
    }

    /// Create an `EmptySource` error.
    #[must_use]
    pub fn empty_source(operation: &'static str) -> Self {
        Self::EmptySource { operation }
    }

    /// Create a `NullElement` error.
    #[must_use]
    pub fn null_element(position: usize) -> Self {
        Self::NullElement { position }
    }

    /// Create a `ConcurrentModification` error.
    #[must_use]
    pub fn concurrent_modification(expected: u64, actual: u64) -> Self {
        Self::ConcurrentModification { expected, actual }
    }

    /// Create an `IncompatibleSequence` error.
    #[must_use]
    pub fn incompatible_sequence(reason: impl Into<String>) -> Self {
        Self::IncompatibleSequence {
            reason: reason.into(),
        }
    }

    /// Create an `InvalidParameters` error.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Check a `[start, end)` range against `length`.
    ///
    /// # Errors
    ///
    /// `InvalidRange` if `start > end` or `end > length`.
    pub fn check_range(start: usize, end: usize, length: usize) -> Result<()> {
        if start > end {
            return Err(Self::invalid_range(start, end, length, "start exceeds end"));
        }
        if end > length {
            return Err(Self::invalid_range(start, end, length, "end exceeds length"));
        }
        Ok(())
    }
}

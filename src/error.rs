//! Error taxonomy for cursor commands.
//!
//! Only commands raise errors: moves, extraction, and searches given a
//! malformed target. Lookups that simply find nothing return `None`.

/// Errors raised by [`StringWalker`](crate::StringWalker) commands.
///
/// | Variant               | Raised by                                   |
/// |-----------------------|---------------------------------------------|
/// | [`InvalidArgument`]   | `find_next`, `find_next_of`                 |
/// | [`OutOfRange`]        | `move_by`, `move_to`, `substring`           |
/// | [`InvalidRange`]      | `substring`                                 |
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`OutOfRange`]: Self::OutOfRange
/// [`InvalidRange`]: Self::InvalidRange
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkerError {
    /// A search target was not exactly one character.
    #[error("expected a single character, got {got:?}")]
    InvalidArgument {
        /// The offending target, as text.
        got: String,
    },

    /// A position fell outside `0..=length`.
    #[error("position {position} is outside the text bounds 0..={length}")]
    OutOfRange {
        /// The rejected position.
        position: isize,
        /// Length of the text at the time of the call.
        length: usize,
    },

    /// The start of a range came after its end.
    #[error("from ({from}) can not be greater than to ({to})")]
    InvalidRange {
        /// Requested start.
        from: isize,
        /// Requested end.
        to: isize,
    },
}

impl WalkerError {
    pub(crate) fn invalid_argument(got: impl Into<String>) -> Self {
        Self::InvalidArgument { got: got.into() }
    }
}

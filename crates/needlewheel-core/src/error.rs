//! Errors raised while building patterns and wheels.

/// An error returned when a [`Pattern`](crate::Pattern) cannot be constructed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum PatternError {
    /// The symbol and hole sequences have different lengths.
    #[display("symbol count {symbols} does not match hole count {holes}")]
    LengthMismatch {
        /// Number of symbols supplied.
        symbols: usize,
        /// Number of holes supplied.
        holes: usize,
    },
    /// The pattern length is zero or does not evenly divide the 8-slot ring.
    #[display("pattern length {len} does not evenly tile the 8-slot ring")]
    InvalidLength {
        /// The offending length.
        len: usize,
    },
    /// A hole string contained a character other than `.`, `O` or `^`.
    #[display("unknown hole character {ch:?}")]
    UnknownHoleChar {
        /// The offending character.
        ch: char,
    },
}

/// An error returned when a [`Wheel`](crate::Wheel) cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WheelError {
    /// The starting index is outside `0..pattern.len()`.
    #[display("wheel index {index} is out of range for a pattern of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the wheel's pattern.
        len: usize,
    },
}

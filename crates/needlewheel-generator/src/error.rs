/// An error returned when no puzzle can be generated.
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
pub enum GenerateError {
    /// The pattern pool is empty.
    #[display("pattern pool is empty")]
    EmptyPool,
    /// The bonus pattern has no circular hole, so no draw can ever be solved.
    #[display("bonus pattern has no circular hole")]
    NoCircleHoles,
    /// Every draw failed the solvability probe.
    #[display("no solvable draw found after {draws} draws")]
    ExhaustedDraws {
        /// Number of draws attempted.
        draws: usize,
    },
}

/// An error returned when parsing a [`PuzzleSeed`](crate::PuzzleSeed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The string contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
    },
}

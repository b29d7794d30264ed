use needlewheel_core::WheelError;
use needlewheel_generator::GenerateError;

/// Errors that can occur during a puzzle session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The wheel number does not name a playable wheel.
    #[display("wheel {wheel} does not exist")]
    WheelOutOfRange {
        /// The requested wheel number.
        wheel: usize,
    },
    /// The puzzle has not been activated yet.
    #[display("puzzle is not active")]
    Inactive,
    /// The puzzle has already been solved.
    #[display("puzzle is already solved")]
    AlreadySolved,
    /// No rotation of the playable wheels solves the puzzle with the current bonus wheel.
    #[display("no winning rotation exists for the current bonus wheel")]
    Unsolvable,
    /// A wheel could not be built.
    #[display("invalid wheel: {_0}")]
    Wheel(#[from] WheelError),
    /// No puzzle could be generated.
    #[display("puzzle generation failed: {_0}")]
    Generate(#[from] GenerateError),
}

/// An error returned by [`solve`](crate::solve).
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
pub enum SolveError {
    /// No rotation of the playable wheels aligns with the given bonus wheel.
    #[display("no winning rotation exists for this bonus wheel")]
    NotFound,
}

//! Puzzle generation for the needlewheel puzzle.
//!
//! [`PuzzleGenerator`] draws patterns for the playable wheels and keeps only
//! draws that a stochastic solvability probe confirms can be solved together
//! with the bonus pattern. Generation is reproducible from a [`PuzzleSeed`].
//!
//! # Examples
//!
//! ```
//! use needlewheel_core::catalog;
//! use needlewheel_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::with_standard_pool();
//! let bonus = catalog::bonus_pattern(0, 0);
//! let puzzle = generator.generate(bonus)?;
//! println!("seed: {}", puzzle.seed);
//! # Ok::<(), needlewheel_generator::GenerateError>(())
//! ```

pub use self::{error::*, generator::*, seed::*};

mod error;
mod generator;
mod seed;

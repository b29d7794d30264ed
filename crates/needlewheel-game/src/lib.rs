//! Puzzle sessions for the needlewheel puzzle.
//!
//! - [`select_bonus`]: derives the bonus wheel from live [`BombState`] readings.
//! - [`PuzzleSession`]: one puzzle attempt. Tracks the playable wheels,
//!   accepts rotations, judges submissions, and plans forced solves.
//!
//! # Example
//!
//! ```
//! use needlewheel_game::{BombState, BonusPolicy, PuzzleSession, SessionId};
//! use needlewheel_generator::PuzzleGenerator;
//!
//! let bomb = BombState::new("AB1CD2", 2, 1);
//! let generator = PuzzleGenerator::with_standard_pool();
//! let mut session =
//!     PuzzleSession::generate(SessionId(1), &generator, &bomb, BonusPolicy::Snapshot)?;
//! session.activate();
//!
//! let plan = session.forced_solve_plan(&bomb, &mut rand::rng())?;
//! session.apply_rotations(&plan)?;
//! assert!(session.submit(&bomb)?.is_solved());
//! # Ok::<(), needlewheel_game::GameError>(())
//! ```

pub use self::{bonus::*, error::*, session::*};

mod bonus;
mod error;
mod session;

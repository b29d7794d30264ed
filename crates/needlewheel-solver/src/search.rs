use std::sync::Arc;

use needlewheel_core::{PLAYABLE_WHEELS, Pattern, WHEEL_COUNT, Wheel};

use crate::{Odometer, SolveError, evaluate};

/// Finds rotations of the playable wheels that solve the puzzle.
///
/// The bonus wheel is held at its current index. Every combination of
/// playable-wheel indices is tried in [`Odometer`] order (wheel 0 advancing
/// fastest) and the first one that [`evaluate`]s as solved is returned.
///
/// # Errors
///
/// Returns [`SolveError::NotFound`] if no combination solves the puzzle with
/// this bonus wheel.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use needlewheel_core::{Pattern, Wheel};
/// use needlewheel_solver::solve;
///
/// let pattern = Arc::new(Pattern::from_strs("12345678", "O.......")?);
/// let patterns = [(); 5].map(|()| Arc::clone(&pattern));
/// let bonus = Wheel::new(pattern, 2)?;
///
/// assert_eq!(solve(&patterns, &bonus)?, [2; 5]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solve(
    patterns: &[Arc<Pattern>; PLAYABLE_WHEELS],
    bonus: &Wheel,
) -> Result<[usize; PLAYABLE_WHEELS], SolveError> {
    let radices = patterns.each_ref().map(|pattern| pattern.len());
    Odometer::new(radices)
        .find(|indices| evaluate(&candidate_wheels(patterns, indices, bonus)))
        .ok_or(SolveError::NotFound)
}

fn candidate_wheels(
    patterns: &[Arc<Pattern>; PLAYABLE_WHEELS],
    indices: &[usize; PLAYABLE_WHEELS],
    bonus: &Wheel,
) -> [Wheel; WHEEL_COUNT] {
    std::array::from_fn(|i| match patterns.get(i) {
        Some(pattern) => Wheel::new(Arc::clone(pattern), indices[i])
            .expect("odometer digits stay below each radix"),
        None => bonus.clone(),
    })
}

use std::cmp::Ordering;

use needlewheel_core::Wheel;
use rand::{Rng, seq::IndexedRandom as _};

/// Which way to turn a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Advance the index, as [`Wheel::rotate_up`] does.
    Up,
    /// Move the index back, as [`Wheel::rotate_down`] does.
    Down,
}

impl Direction {
    /// Both directions.
    pub const ALL: [Self; 2] = [Self::Up, Self::Down];
}

/// A number of single-slot turns in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    /// Direction of every turn.
    pub direction: Direction,
    /// Number of turns.
    pub steps: usize,
}

impl Rotation {
    /// Turns `wheel` by this rotation.
    pub fn apply(self, wheel: &mut Wheel) {
        for _ in 0..self.steps {
            match self.direction {
                Direction::Up => wheel.rotate_up(),
                Direction::Down => wheel.rotate_down(),
            }
        }
    }
}

/// Plans the shortest rotation bringing `wheel` to `target`.
///
/// When both directions take the same number of turns (including zero turns),
/// the direction is a fair coin flip drawn from `rng`.
///
/// # Panics
///
/// Panics if `target` is not below the wheel's pattern length.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use needlewheel_core::{Pattern, Wheel};
/// use needlewheel_solver::{Direction, plan_rotation};
///
/// let pattern = Arc::new(Pattern::from_strs("12345678", "O.......")?);
/// let wheel = Wheel::new(pattern, 1)?;
///
/// let rotation = plan_rotation(&wheel, 7, &mut rand::rng());
/// assert_eq!(rotation.direction, Direction::Down);
/// assert_eq!(rotation.steps, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plan_rotation<R>(wheel: &Wheel, target: usize, rng: &mut R) -> Rotation
where
    R: Rng + ?Sized,
{
    let len = wheel.pattern().len();
    assert!(target < len, "target {target} out of range for length {len}");
    let current = wheel.index();
    let up = (target + len - current) % len;
    let down = (current + len - target) % len;
    let direction = match up.cmp(&down) {
        Ordering::Less => Direction::Up,
        Ordering::Greater => Direction::Down,
        Ordering::Equal => Direction::ALL.choose(rng).copied().unwrap_or(Direction::Up),
    };
    Rotation {
        direction,
        steps: up.min(down),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::pattern;

    fn wheel(index: usize) -> Wheel {
        Wheel::new(pattern("O......."), index).unwrap()
    }

    #[test]
    fn test_shorter_direction_wins() {
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(
            plan_rotation(&wheel(0), 3, &mut rng),
            Rotation {
                direction: Direction::Up,
                steps: 3
            }
        );
        assert_eq!(
            plan_rotation(&wheel(0), 5, &mut rng),
            Rotation {
                direction: Direction::Down,
                steps: 3
            }
        );
        assert_eq!(
            plan_rotation(&wheel(6), 1, &mut rng),
            Rotation {
                direction: Direction::Up,
                steps: 3
            }
        );
    }

    #[test]
    fn test_tie_is_reproducible_per_seed() {
        let plan = |seed| {
            let mut rng = Pcg64::seed_from_u64(seed);
            (0..32)
                .map(|_| plan_rotation(&wheel(2), 6, &mut rng).direction)
                .collect::<Vec<_>>()
        };
        let first = plan(7);
        assert_eq!(first, plan(7));
        assert!(first.contains(&Direction::Up));
        assert!(first.contains(&Direction::Down));
    }

    #[test]
    fn test_already_there_takes_no_steps() {
        let mut rng = Pcg64::seed_from_u64(1);
        assert_eq!(plan_rotation(&wheel(4), 4, &mut rng).steps, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_target_out_of_range_panics() {
        let mut rng = Pcg64::seed_from_u64(1);
        let _ = plan_rotation(&wheel(0), 8, &mut rng);
    }

    proptest! {
        #[test]
        fn prop_plan_reaches_target_minimally(
            current in 0_usize..8,
            target in 0_usize..8,
            seed: u64,
        ) {
            let mut rng = Pcg64::seed_from_u64(seed);
            let mut w = wheel(current);
            let rotation = plan_rotation(&w, target, &mut rng);
            prop_assert!(rotation.steps <= 4);
            rotation.apply(&mut w);
            prop_assert_eq!(w.index(), target);
        }
    }
}

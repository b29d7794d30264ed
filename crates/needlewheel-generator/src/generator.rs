use std::sync::Arc;

use needlewheel_core::{PLAYABLE_WHEELS, Pattern, RING_SLOTS, WHEEL_COUNT, Wheel, catalog};
use needlewheel_solver::evaluate;
use rand::{
    Rng,
    seq::{IndexedRandom as _, IteratorRandom as _},
};
use tinyvec::ArrayVec;

use crate::{GenerateError, PuzzleSeed};

/// Default upper bound on pattern draws before generation gives up.
pub const DEFAULT_MAX_DRAWS: usize = 1000;

/// Default number of random circle alignments tried per draw.
pub const DEFAULT_PROBE_TRIALS: usize = 100;

/// A generated puzzle: the playable wheels' patterns and starting rotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Patterns of the playable wheels, in wheel order.
    pub patterns: [Arc<Pattern>; PLAYABLE_WHEELS],
    /// Starting index of each playable wheel.
    pub start_indices: [usize; PLAYABLE_WHEELS],
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
    /// Number of draws it took to find a solvable set of patterns.
    pub draws: usize,
}

/// Generates solvable puzzles from a pool of patterns.
///
/// Each draw picks the playable wheels' patterns uniformly at random, with
/// replacement, and runs [`probe_solvable`] on them together with the bonus
/// pattern. Rejected draws are retried up to [`max_draws`](Self::max_draws)
/// times.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use needlewheel_core::catalog;
/// use needlewheel_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::with_standard_pool().max_draws(50);
/// let seed = PuzzleSeed::from_str(
///     "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
/// )?;
/// let bonus = catalog::bonus_pattern(1, 1);
///
/// let first = generator.generate_with_seed(seed, bonus)?;
/// let again = generator.generate_with_seed(seed, bonus)?;
/// assert_eq!(first, again);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    pool: Vec<Arc<Pattern>>,
    max_draws: usize,
    probe_trials: usize,
}

impl PuzzleGenerator {
    /// Creates a generator drawing from `pool`.
    #[must_use]
    pub fn new(pool: &[Arc<Pattern>]) -> Self {
        Self {
            pool: pool.to_vec(),
            max_draws: DEFAULT_MAX_DRAWS,
            probe_trials: DEFAULT_PROBE_TRIALS,
        }
    }

    /// Creates a generator drawing from [`catalog::standard_pool`].
    #[must_use]
    pub fn with_standard_pool() -> Self {
        Self::new(catalog::standard_pool())
    }

    /// Sets the maximum number of draws before giving up.
    #[must_use]
    pub fn max_draws(mut self, max_draws: usize) -> Self {
        self.max_draws = max_draws;
        self
    }

    /// Sets the number of probe trials per draw.
    #[must_use]
    pub fn probe_trials(mut self, probe_trials: usize) -> Self {
        self.probe_trials = probe_trials;
        self
    }

    /// Returns the pattern pool.
    #[must_use]
    pub fn pool(&self) -> &[Arc<Pattern>] {
        &self.pool
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self, bonus: &Arc<Pattern>) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random(), bonus)
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::EmptyPool`] if the pool has no patterns.
    /// - [`GenerateError::NoCircleHoles`] if `bonus` has no circular hole.
    /// - [`GenerateError::ExhaustedDraws`] if no draw passed the solvability
    ///   probe within the draw limit.
    pub fn generate_with_seed(
        &self,
        seed: PuzzleSeed,
        bonus: &Arc<Pattern>,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        if self.pool.is_empty() {
            return Err(GenerateError::EmptyPool);
        }
        if bonus.circle_slots().next().is_none() {
            return Err(GenerateError::NoCircleHoles);
        }

        let mut rng = seed.rng();
        for draw in 1..=self.max_draws {
            log::debug!("draw {draw}: generating wheel patterns");
            let patterns = self.draw_patterns(&mut rng);
            if !probe_solvable(&patterns, bonus, self.probe_trials, &mut rng) {
                continue;
            }
            let start_indices = start_indices(&patterns, &mut rng);
            log::info!("wheel patterns generated after {draw} draw(s), seed={seed}");
            return Ok(GeneratedPuzzle {
                patterns,
                start_indices,
                seed,
                draws: draw,
            });
        }

        log::error!(
            "no solvable draw after {} draws, seed={seed}",
            self.max_draws
        );
        Err(GenerateError::ExhaustedDraws {
            draws: self.max_draws,
        })
    }

    fn draw_patterns<R>(&self, rng: &mut R) -> [Arc<Pattern>; PLAYABLE_WHEELS]
    where
        R: Rng + ?Sized,
    {
        std::array::from_fn(|_| Arc::clone(self.pool.choose(rng).expect("pool is not empty")))
    }
}

fn start_indices<R>(
    patterns: &[Arc<Pattern>; PLAYABLE_WHEELS],
    rng: &mut R,
) -> [usize; PLAYABLE_WHEELS]
where
    R: Rng + ?Sized,
{
    patterns.each_ref().map(|pattern| {
        (0..pattern.len())
            .choose(rng)
            .expect("patterns are not empty")
    })
}

/// Checks, by random sampling, that a set of patterns can be solved.
///
/// Each trial rotates every wheel so that one of its own circular holes,
/// picked at random, sits at the top, then [`evaluate`]s the result. Returns
/// `true` as soon as a trial is solved.
///
/// A `true` result is always backed by a real winning configuration. A `false`
/// result may miss one, since at most `trials` configurations are sampled.
/// Patterns without any circular hole can never be aligned and yield `false`
/// immediately.
pub fn probe_solvable<R>(
    patterns: &[Arc<Pattern>; PLAYABLE_WHEELS],
    bonus: &Arc<Pattern>,
    trials: usize,
    rng: &mut R,
) -> bool
where
    R: Rng + ?Sized,
{
    let patterns: [&Arc<Pattern>; WHEEL_COUNT] =
        std::array::from_fn(|i| patterns.get(i).unwrap_or(bonus));
    let circles = patterns.map(|pattern| {
        pattern
            .circle_slots()
            .collect::<ArrayVec<[usize; RING_SLOTS]>>()
    });
    if circles.iter().any(|slots| slots.is_empty()) {
        return false;
    }

    (0..trials).any(|_| evaluate(&circle_aligned_wheels(&patterns, &circles, rng)))
}

fn circle_aligned_wheels<R>(
    patterns: &[&Arc<Pattern>; WHEEL_COUNT],
    circles: &[ArrayVec<[usize; RING_SLOTS]>; WHEEL_COUNT],
    rng: &mut R,
) -> [Wheel; WHEEL_COUNT]
where
    R: Rng + ?Sized,
{
    std::array::from_fn(|i| {
        let index = *circles[i].choose(rng).expect("every wheel has a circle");
        Wheel::new(Arc::clone(patterns[i]), index).expect("circle slots are valid indices")
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use needlewheel_solver::solve;
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    const SEEDS: [&str; 3] = [
        "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
        "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
        "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    ];

    fn pattern(holes: &str) -> Arc<Pattern> {
        Arc::new(Pattern::from_strs("abcdefgh", holes).unwrap())
    }

    fn all_bonus_patterns() -> impl Iterator<Item = &'static Arc<Pattern>> {
        (0..catalog::BONUS_ROWS).flat_map(|row| {
            (0..catalog::BONUS_COLUMNS).map(move |column| catalog::bonus_pattern(row, column))
        })
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::with_standard_pool();
        let bonus = catalog::bonus_pattern(2, 0);
        for seed in SEEDS {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            let a = generator.generate_with_seed(seed, bonus).unwrap();
            let b = generator.generate_with_seed(seed, bonus).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.seed, seed);
            assert!(a.draws >= 1);
        }
    }

    #[test]
    fn test_generated_puzzles_are_solvable_for_every_bonus() {
        let generator = PuzzleGenerator::with_standard_pool();
        for (i, bonus) in all_bonus_patterns().enumerate() {
            for seed in SEEDS {
                let puzzle = generator
                    .generate_with_seed(PuzzleSeed::from_str(seed).unwrap(), bonus)
                    .unwrap();
                for (pattern, &index) in puzzle.patterns.iter().zip(&puzzle.start_indices) {
                    assert!(generator.pool().contains(pattern));
                    assert!(index < pattern.len());
                }
                // Any bonus rotation works: solutions shift with the bonus wheel.
                let bonus_wheel = Wheel::new(Arc::clone(bonus), i % RING_SLOTS).unwrap();
                assert!(solve(&puzzle.patterns, &bonus_wheel).is_ok());
            }
        }
    }

    #[test]
    fn test_empty_pool() {
        let generator = PuzzleGenerator::new(&[]);
        let result = generator.generate(catalog::bonus_pattern(0, 0));
        assert_eq!(result, Err(GenerateError::EmptyPool));
    }

    #[test]
    fn test_bonus_without_circles() {
        let generator = PuzzleGenerator::with_standard_pool();
        let result = generator.generate(&pattern("^^..^^.."));
        assert_eq!(result, Err(GenerateError::NoCircleHoles));
    }

    #[test]
    fn test_exhausted_draws() {
        // A circle row always brings a triangle row along.
        let hopeless = pattern("O^......");
        let generator = PuzzleGenerator::new(&[Arc::clone(&hopeless)]).max_draws(3);
        let result = generator.generate(&hopeless);
        assert_eq!(result, Err(GenerateError::ExhaustedDraws { draws: 3 }));
    }

    #[test]
    fn test_probe_accepts_trivially_aligned_patterns() {
        let p = pattern("O.......");
        let patterns = [(); PLAYABLE_WHEELS].map(|()| Arc::clone(&p));
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(probe_solvable(&patterns, &p, 1, &mut rng));
        assert!(!probe_solvable(&patterns, &p, 0, &mut rng));
    }

    #[test]
    fn test_probe_rejects_wheel_without_circles() {
        let patterns = [(); PLAYABLE_WHEELS].map(|()| pattern("O......."));
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(!probe_solvable(&patterns, &pattern("^^^^^^^^"), 100, &mut rng));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_accepted_draws_are_solvable(
            draw in prop::array::uniform5(0_usize..12),
            row in 0..catalog::BONUS_ROWS,
            column in 0..catalog::BONUS_COLUMNS,
            bonus_index in 0..RING_SLOTS,
            seed: u64,
        ) {
            let pool = catalog::standard_pool();
            let patterns = draw.map(|i| Arc::clone(&pool[i]));
            let bonus = catalog::bonus_pattern(row, column);
            let mut rng = Pcg64::seed_from_u64(seed);
            if probe_solvable(&patterns, bonus, DEFAULT_PROBE_TRIALS, &mut rng) {
                let bonus_wheel = Wheel::new(Arc::clone(bonus), bonus_index).unwrap();
                prop_assert!(solve(&patterns, &bonus_wheel).is_ok());
            }
        }
    }
}

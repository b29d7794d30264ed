use std::{
    array,
    fmt::{self, Display},
    sync::Arc,
};

use needlewheel_core::{PLAYABLE_WHEELS, WHEEL_COUNT, Wheel};
use needlewheel_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use needlewheel_solver::{AlignmentReport, Rotation, SolveError, plan_rotation, solve};
use rand::Rng;

use crate::{BombState, BonusSelection, GameError, select_bonus};

/// Identifies one puzzle session in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

impl Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// When the bonus wheel is resolved from the bomb state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum BonusPolicy {
    /// Freeze the bonus wheel selected when the puzzle was generated.
    ///
    /// Generation checked solvability against exactly this wheel, so forced
    /// solves always succeed.
    #[default]
    Snapshot,
    /// Re-select the bonus wheel from the bomb state at every submission and
    /// forced solve.
    ///
    /// If the bomb's readings change after generation, the bonus pattern can
    /// change too and the puzzle may become unsolvable.
    Live,
}

/// Lifecycle of a puzzle session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SessionState {
    /// Waiting for the bomb to activate. Input is rejected.
    #[default]
    Inactive,
    /// Accepting rotations and submissions.
    Active,
    /// Solved. Input is rejected.
    Solved,
}

/// Result of submitting the current wheel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SubmitOutcome {
    /// The wheels show a circle row and no triangle row.
    Solved(AlignmentReport),
    /// The submission was wrong and counts as a strike.
    Strike(AlignmentReport),
}

impl SubmitOutcome {
    /// Returns the alignment report the verdict was based on.
    #[must_use]
    pub fn report(&self) -> &AlignmentReport {
        match self {
            Self::Solved(report) | Self::Strike(report) => report,
        }
    }
}

/// One attempt at a needlewheel puzzle.
///
/// Holds the five playable wheels and the bonus wheel selection. Wheels only
/// turn while the session is [`Active`](SessionState::Active), and a correct
/// submission moves it to [`Solved`](SessionState::Solved) for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSession {
    id: SessionId,
    wheels: [Wheel; PLAYABLE_WHEELS],
    bonus: BonusSelection,
    policy: BonusPolicy,
    state: SessionState,
    seed: PuzzleSeed,
}

impl PuzzleSession {
    /// Creates an inactive session from a generated puzzle and a bonus wheel
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Wheel`] if a start index does not fit its pattern.
    pub fn new(
        id: SessionId,
        puzzle: &GeneratedPuzzle,
        bonus: BonusSelection,
        policy: BonusPolicy,
    ) -> Result<Self, GameError> {
        let [w0, w1, w2, w3, w4] = array::from_fn(|i| {
            Wheel::new(Arc::clone(&puzzle.patterns[i]), puzzle.start_indices[i])
        });
        let wheels = [w0?, w1?, w2?, w3?, w4?];
        let bonus_wheel = bonus.wheel()?;

        for (i, wheel) in wheels.iter().enumerate() {
            log::info!("[needlewheel {id}] wheel {i}: {wheel}");
        }
        log::info!("[needlewheel {id}] bonus wheel: {bonus_wheel}");

        Ok(Self {
            id,
            wheels,
            bonus,
            policy,
            state: SessionState::Inactive,
            seed: puzzle.seed,
        })
    }

    /// Generates a puzzle for the bomb's current readings.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Generate`] if the generator fails.
    pub fn generate(
        id: SessionId,
        generator: &PuzzleGenerator,
        bomb: &BombState,
        policy: BonusPolicy,
    ) -> Result<Self, GameError> {
        Self::generate_with_seed(id, generator, PuzzleSeed::random(), bomb, policy)
    }

    /// Generates the puzzle determined by `seed` for the bomb's current
    /// readings.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Generate`] if the generator fails.
    pub fn generate_with_seed(
        id: SessionId,
        generator: &PuzzleGenerator,
        seed: PuzzleSeed,
        bomb: &BombState,
        policy: BonusPolicy,
    ) -> Result<Self, GameError> {
        let bonus = select_bonus(bomb);
        let puzzle = generator.generate_with_seed(seed, &bonus.pattern)?;
        Self::new(id, &puzzle, bonus, policy)
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the bonus policy.
    #[must_use]
    pub fn policy(&self) -> BonusPolicy {
        self.policy
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the playable wheels.
    #[must_use]
    pub fn wheels(&self) -> &[Wheel; PLAYABLE_WHEELS] {
        &self.wheels
    }

    /// Returns the bonus selection made at generation time.
    #[must_use]
    pub fn bonus(&self) -> &BonusSelection {
        &self.bonus
    }

    /// Returns the symbol each playable wheel's label shows.
    #[must_use]
    pub fn labels(&self) -> [char; PLAYABLE_WHEELS] {
        self.wheels.each_ref().map(Wheel::label)
    }

    /// Starts accepting input. Has no effect once solved.
    pub fn activate(&mut self) {
        if self.state.is_inactive() {
            log::debug!("[needlewheel {}] activated", self.id);
            self.state = SessionState::Active;
        }
    }

    /// Turns playable wheel `wheel` up by one slot.
    ///
    /// # Errors
    ///
    /// - [`GameError::Inactive`] before [`activate`](Self::activate).
    /// - [`GameError::AlreadySolved`] after a correct submission.
    /// - [`GameError::WheelOutOfRange`] if `wheel` is not a playable wheel.
    pub fn rotate_up(&mut self, wheel: usize) -> Result<(), GameError> {
        self.wheel_mut(wheel)?.rotate_up();
        Ok(())
    }

    /// Turns playable wheel `wheel` down by one slot.
    ///
    /// # Errors
    ///
    /// Same as [`rotate_up`](Self::rotate_up).
    pub fn rotate_down(&mut self, wheel: usize) -> Result<(), GameError> {
        self.wheel_mut(wheel)?.rotate_down();
        Ok(())
    }

    /// Returns the bonus wheel to judge against, following the session's
    /// [`BonusPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Wheel`] if the selected start index does not fit
    /// the bonus pattern.
    pub fn bonus_wheel(&self, bomb: &BombState) -> Result<Wheel, GameError> {
        let wheel = match self.policy {
            BonusPolicy::Snapshot => self.bonus.wheel()?,
            BonusPolicy::Live => select_bonus(bomb).wheel()?,
        };
        Ok(wheel)
    }

    /// Judges the current wheel positions.
    ///
    /// A wrong submission is reported as [`SubmitOutcome::Strike`] and the
    /// session stays active.
    ///
    /// # Errors
    ///
    /// - [`GameError::Inactive`] before [`activate`](Self::activate).
    /// - [`GameError::AlreadySolved`] after a correct submission.
    /// - [`GameError::Wheel`] if the bonus wheel cannot be built.
    pub fn submit(&mut self, bomb: &BombState) -> Result<SubmitOutcome, GameError> {
        self.ensure_active()?;
        let id = self.id;
        let wheels = self.all_wheels(bomb)?;

        log::info!(
            "[needlewheel {id}] submitting with {} strike(s) and {} solved module(s)",
            bomb.strikes,
            bomb.solved_count
        );
        for (i, wheel) in wheels.iter().enumerate() {
            log::info!("[needlewheel {id}] wheel {i}: {wheel}");
        }

        let report = AlignmentReport::scan(&wheels);
        log::info!(
            "[needlewheel {id}] circle rows: {}, triangle rows: {}",
            report.circle_slots().count(),
            report.triangle_slots().count()
        );

        if report.is_solved() {
            log::info!("[needlewheel {id}] solved");
            self.state = SessionState::Solved;
            Ok(SubmitOutcome::Solved(report))
        } else {
            log::info!("[needlewheel {id}] strike");
            Ok(SubmitOutcome::Strike(report))
        }
    }

    /// Plans the rotations that solve the puzzle, one per playable wheel.
    ///
    /// Each wheel turns the shorter way round to its solved index. Ties are
    /// broken by a coin flip drawn from `rng`.
    ///
    /// # Errors
    ///
    /// - [`GameError::Inactive`] before [`activate`](Self::activate).
    /// - [`GameError::AlreadySolved`] after a correct submission.
    /// - [`GameError::Unsolvable`] if no rotation solves the puzzle with the
    ///   current bonus wheel.
    /// - [`GameError::Wheel`] if the bonus wheel cannot be built.
    pub fn forced_solve_plan<R>(
        &self,
        bomb: &BombState,
        rng: &mut R,
    ) -> Result<[Rotation; PLAYABLE_WHEELS], GameError>
    where
        R: Rng + ?Sized,
    {
        self.ensure_active()?;
        let bonus = self.bonus_wheel(bomb)?;
        let patterns = self.wheels.each_ref().map(|wheel| Arc::clone(wheel.pattern()));
        let targets = solve(&patterns, &bonus).map_err(|err| match err {
            SolveError::NotFound => {
                log::warn!(
                    "[needlewheel {}] no winning rotation with bonus wheel {bonus}",
                    self.id
                );
                GameError::Unsolvable
            }
        })?;
        Ok(array::from_fn(|i| {
            plan_rotation(&self.wheels[i], targets[i], &mut *rng)
        }))
    }

    /// Turns every playable wheel by its planned rotation.
    ///
    /// # Errors
    ///
    /// - [`GameError::Inactive`] before [`activate`](Self::activate).
    /// - [`GameError::AlreadySolved`] after a correct submission.
    pub fn apply_rotations(
        &mut self,
        plan: &[Rotation; PLAYABLE_WHEELS],
    ) -> Result<(), GameError> {
        self.ensure_active()?;
        for (i, (wheel, rotation)) in self.wheels.iter_mut().zip(plan).enumerate() {
            log::debug!(
                "[needlewheel {}] wheel {i}: {} step(s) {:?}",
                self.id,
                rotation.steps,
                rotation.direction
            );
            rotation.apply(wheel);
        }
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        let err = match self.state {
            SessionState::Active => return Ok(()),
            SessionState::Inactive => GameError::Inactive,
            SessionState::Solved => GameError::AlreadySolved,
        };
        log::debug!("[needlewheel {}] input rejected: {err}", self.id);
        Err(err)
    }

    fn wheel_mut(&mut self, wheel: usize) -> Result<&mut Wheel, GameError> {
        self.ensure_active()?;
        let id = self.id;
        self.wheels.get_mut(wheel).ok_or_else(|| {
            log::debug!("[needlewheel {id}] input rejected: no wheel {wheel}");
            GameError::WheelOutOfRange { wheel }
        })
    }

    fn all_wheels(&self, bomb: &BombState) -> Result<[Wheel; WHEEL_COUNT], GameError> {
        let bonus = self.bonus_wheel(bomb)?;
        let [w0, w1, w2, w3, w4] = self.wheels.clone();
        Ok([w0, w1, w2, w3, w4, bonus])
    }
}

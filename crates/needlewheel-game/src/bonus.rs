use std::sync::Arc;

use needlewheel_core::{Pattern, RING_SLOTS, Wheel, WheelError, catalog};

/// Live readings from the bomb the puzzle is mounted on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BombState {
    /// The bomb's serial number.
    pub serial: String,
    /// Number of batteries.
    pub battery_count: usize,
    /// Number of indicators currently lit.
    pub lit_indicator_count: usize,
    /// Strikes recorded so far.
    pub strikes: usize,
    /// Number of modules already solved.
    pub solved_count: usize,
}

impl BombState {
    /// Creates a bomb state with no strikes and no solved modules.
    #[must_use]
    pub fn new(
        serial: impl Into<String>,
        battery_count: usize,
        lit_indicator_count: usize,
    ) -> Self {
        Self {
            serial: serial.into(),
            battery_count,
            lit_indicator_count,
            strikes: 0,
            solved_count: 0,
        }
    }
}

/// The bonus wheel's pattern and starting rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusSelection {
    /// Pattern of the bonus wheel.
    pub pattern: Arc<Pattern>,
    /// Starting index of the bonus wheel.
    pub index: usize,
}

impl BonusSelection {
    /// Builds the bonus wheel.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::IndexOutOfRange`] if `index` does not fit the pattern.
    pub fn wheel(&self) -> Result<Wheel, WheelError> {
        Wheel::new(Arc::clone(&self.pattern), self.index)
    }
}

/// Scores a serial number: 1 per odd digit, 2 per vowel.
///
/// Only uppercase vowels count, as serial numbers are uppercase.
///
/// # Examples
///
/// ```
/// use needlewheel_game::odd_vowel_score;
///
/// assert_eq!(odd_vowel_score("AEIOU1"), 11);
/// assert_eq!(odd_vowel_score("BX2468"), 0);
/// ```
#[must_use]
pub fn odd_vowel_score(serial: &str) -> u32 {
    serial
        .chars()
        .map(|ch| match ch {
            '1' | '3' | '5' | '7' | '9' => 1,
            'A' | 'E' | 'I' | 'O' | 'U' => 2,
            _ => 0,
        })
        .sum()
}

/// Maps an odd/vowel score to a bonus table column.
#[must_use]
pub fn bonus_column(score: u32) -> usize {
    match score {
        1 | 3 => 0,
        2 | 4 | 5 => 1,
        _ => 2,
    }
}

/// Maps a bonus table row from the battery count and lit indicator count.
///
/// The row is keyed by the surplus `batteries - lit`: zero or less, 1-2, 3,
/// and 4 or more.
#[must_use]
pub fn bonus_row(battery_count: usize, lit_indicator_count: usize) -> usize {
    // A negative surplus lands in the same row as zero.
    match battery_count.saturating_sub(lit_indicator_count) {
        0 => 0,
        1 | 2 => 1,
        3 => 2,
        _ => 3,
    }
}

/// Returns the bonus wheel's starting index: `strikes - solved_count`, wrapped
/// onto the ring so that a negative difference counts back from the end.
#[must_use]
pub fn bonus_index(strikes: usize, solved_count: usize) -> usize {
    (strikes % RING_SLOTS + RING_SLOTS - solved_count % RING_SLOTS) % RING_SLOTS
}

/// Selects the bonus wheel for the given bomb readings.
///
/// The serial number picks the column of the bonus table, the battery surplus
/// picks the row, and strikes minus solved modules give the starting index.
///
/// # Examples
///
/// ```
/// use needlewheel_core::catalog;
/// use needlewheel_game::{BombState, select_bonus};
///
/// let mut bomb = BombState::new("AEIOU1", 3, 1);
/// bomb.solved_count = 3;
///
/// let bonus = select_bonus(&bomb);
/// assert_eq!(&bonus.pattern, catalog::bonus_pattern(1, 2));
/// assert_eq!(bonus.index, 5);
/// ```
#[must_use]
pub fn select_bonus(bomb: &BombState) -> BonusSelection {
    let column = bonus_column(odd_vowel_score(&bomb.serial));
    let row = bonus_row(bomb.battery_count, bomb.lit_indicator_count);
    BonusSelection {
        pattern: Arc::clone(catalog::bonus_pattern(row, column)),
        index: bonus_index(bomb.strikes, bomb.solved_count),
    }
}

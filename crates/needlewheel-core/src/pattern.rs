//! Immutable symbol/hole templates engraved on a wheel.

use tinyvec::ArrayVec;

use crate::{HoleKind, PatternError, RING_SLOTS};

/// A fixed circular arrangement of symbols and holes.
///
/// A pattern has `len` slots, each carrying one symbol and one [`HoleKind`].
/// The length must evenly divide [`RING_SLOTS`] so the pattern can be repeated
/// around the common ring; in practice that means 1, 2, 4 or 8 slots.
///
/// # Examples
///
/// ```
/// use needlewheel_core::{HoleKind, Pattern, PatternError};
///
/// let pattern = Pattern::from_strs("1234", "O.^.")?;
/// assert_eq!(pattern.len(), 4);
/// assert_eq!(pattern.hole(2), HoleKind::Triangle);
///
/// // Three slots do not tile an 8-slot ring.
/// assert_eq!(
///     Pattern::from_strs("123", "O.^"),
///     Err(PatternError::InvalidLength { len: 3 })
/// );
/// # Ok::<(), PatternError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    symbols: ArrayVec<[char; RING_SLOTS]>,
    holes: ArrayVec<[HoleKind; RING_SLOTS]>,
}

#[expect(clippy::len_without_is_empty)]
impl Pattern {
    /// Creates a pattern from its symbols and holes.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::LengthMismatch`] if `symbols` and `holes` differ in
    /// length, and [`PatternError::InvalidLength`] if the length is zero or does not
    /// evenly divide [`RING_SLOTS`].
    pub fn new(symbols: &[char], holes: &[HoleKind]) -> Result<Self, PatternError> {
        if symbols.len() != holes.len() {
            return Err(PatternError::LengthMismatch {
                symbols: symbols.len(),
                holes: holes.len(),
            });
        }
        let len = symbols.len();
        if len == 0 || RING_SLOTS % len != 0 {
            return Err(PatternError::InvalidLength { len });
        }
        Ok(Self {
            symbols: symbols.iter().copied().collect(),
            holes: holes.iter().copied().collect(),
        })
    }

    /// Creates a pattern from a symbol string and a hole string.
    ///
    /// The hole string uses `.` for no hole, `O` for a circle and `^` for a
    /// triangle.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownHoleChar`] for any other hole character, and
    /// otherwise the same errors as [`Pattern::new`].
    pub fn from_strs(symbols: &str, holes: &str) -> Result<Self, PatternError> {
        let symbols = symbols.chars().collect::<Vec<_>>();
        let holes = holes
            .chars()
            .map(|ch| HoleKind::from_char(ch).ok_or(PatternError::UnknownHoleChar { ch }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&symbols, &holes)
    }

    /// Returns the number of slots in this pattern.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Returns the engraved symbols in slot order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the holes in slot order.
    #[must_use]
    pub fn holes(&self) -> &[HoleKind] {
        &self.holes
    }

    /// Returns the symbol at a local slot.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn symbol(&self, i: usize) -> char {
        self.symbols[i]
    }

    /// Returns the hole at a local slot.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn hole(&self, i: usize) -> HoleKind {
        self.holes[i]
    }

    /// Returns the local slots holding a circular hole, in ascending order.
    pub fn circle_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.holes
            .iter()
            .enumerate()
            .filter(|(_, hole)| hole.is_circle())
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn hole_kind() -> impl Strategy<Value = HoleKind> {
        prop::sample::select(HoleKind::ALL.to_vec())
    }

    #[test]
    fn test_from_strs() {
        let pattern = Pattern::from_strs("+-]!<0#<", "O.^^^.OO").unwrap();
        assert_eq!(pattern.len(), 8);
        assert_eq!(pattern.symbol(0), '+');
        assert_eq!(pattern.symbol(7), '<');
        assert_eq!(pattern.hole(0), HoleKind::Circle);
        assert_eq!(pattern.hole(1), HoleKind::None);
        assert_eq!(pattern.hole(2), HoleKind::Triangle);
        assert_eq!(pattern.circle_slots().collect::<Vec<_>>(), [0, 6, 7]);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Pattern::from_strs("1234", "O.^"),
            Err(PatternError::LengthMismatch {
                symbols: 4,
                holes: 3
            })
        );
        assert_eq!(
            Pattern::from_strs("", ""),
            Err(PatternError::InvalidLength { len: 0 })
        );
        assert_eq!(
            Pattern::from_strs("123456789ABCDEFG", "................"),
            Err(PatternError::InvalidLength { len: 16 })
        );
        assert_eq!(
            Pattern::from_strs("12", "Ox"),
            Err(PatternError::UnknownHoleChar { ch: 'x' })
        );
    }

    #[test]
    fn test_short_lengths_accepted() {
        for (symbols, holes) in [("1", "O"), ("12", "O^"), ("1234", ".O.^")] {
            let pattern = Pattern::from_strs(symbols, holes).unwrap();
            assert_eq!(pattern.len(), symbols.len());
        }
    }

    proptest! {
        #[test]
        fn prop_new_succeeds_iff_lengths_tile_ring(
            symbols in prop::collection::vec(any::<char>(), 0..12),
            holes in prop::collection::vec(hole_kind(), 0..12),
        ) {
            let valid = symbols.len() == holes.len()
                && !symbols.is_empty()
                && RING_SLOTS % symbols.len() == 0;
            match Pattern::new(&symbols, &holes) {
                Ok(pattern) => {
                    prop_assert!(valid);
                    prop_assert_eq!(pattern.symbols(), &symbols[..]);
                    prop_assert_eq!(pattern.holes(), &holes[..]);
                }
                Err(err) => {
                    prop_assert!(!valid);
                    prop_assert!(err.is_length_mismatch() || err.is_invalid_length());
                }
            }
        }
    }
}

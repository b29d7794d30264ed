use needlewheel_core::{HoleKind, RING_SLOTS, WHEEL_COUNT, Wheel};

/// Which ring slots form a full row of circles or triangles.
///
/// A row is the set of holes all wheels show at one absolute slot. A row is
/// *all-circle* when every wheel shows a circle there and *all-triangle* when
/// every wheel shows a triangle there. Any wheel showing no hole breaks both.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use needlewheel_core::{Pattern, Wheel};
/// use needlewheel_solver::AlignmentReport;
///
/// let pattern = Arc::new(Pattern::from_strs("12345678", "O.......")?);
/// let wheels = [(); 6].map(|()| Wheel::new(Arc::clone(&pattern), 0).unwrap());
///
/// let report = AlignmentReport::scan(&wheels);
/// assert!(report.is_solved());
/// assert_eq!(report.circle_slots().collect::<Vec<_>>(), [0]);
/// # Ok::<(), needlewheel_core::PatternError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentReport {
    circle_rows: [bool; RING_SLOTS],
    triangle_rows: [bool; RING_SLOTS],
}

impl AlignmentReport {
    /// Scans every ring slot of the given wheels.
    #[must_use]
    pub fn scan(wheels: &[Wheel; WHEEL_COUNT]) -> Self {
        let mut circle_rows = [false; RING_SLOTS];
        let mut triangle_rows = [false; RING_SLOTS];
        let rows = circle_rows.iter_mut().zip(&mut triangle_rows);
        for (slot, (circle_row, triangle_row)) in rows.enumerate() {
            let mut all_circle = true;
            let mut all_triangle = true;
            for wheel in wheels {
                let hole = wheel.hole_at(slot);
                if hole.is_none() {
                    all_circle = false;
                    all_triangle = false;
                    break;
                }
                all_circle &= hole == HoleKind::Circle;
                all_triangle &= hole == HoleKind::Triangle;
            }
            *circle_row = all_circle;
            *triangle_row = all_triangle;
        }
        Self {
            circle_rows,
            triangle_rows,
        }
    }

    /// Returns `true` if every wheel shows a circle at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= RING_SLOTS`.
    #[must_use]
    pub fn is_circle_row(&self, slot: usize) -> bool {
        self.circle_rows[slot]
    }

    /// Returns `true` if every wheel shows a triangle at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= RING_SLOTS`.
    #[must_use]
    pub fn is_triangle_row(&self, slot: usize) -> bool {
        self.triangle_rows[slot]
    }

    /// Returns `true` if at least one slot is an all-circle row.
    #[must_use]
    pub fn has_circle_row(&self) -> bool {
        self.circle_rows.contains(&true)
    }

    /// Returns `true` if at least one slot is an all-triangle row.
    #[must_use]
    pub fn has_triangle_row(&self) -> bool {
        self.triangle_rows.contains(&true)
    }

    /// Returns `true` if the wheels solve the puzzle.
    ///
    /// A triangle row anywhere invalidates the alignment even when a circle row
    /// exists at another slot.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.has_circle_row() && !self.has_triangle_row()
    }

    /// Returns the slots holding an all-circle row.
    pub fn circle_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..RING_SLOTS).filter(|&slot| self.circle_rows[slot])
    }

    /// Returns the slots holding an all-triangle row.
    pub fn triangle_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..RING_SLOTS).filter(|&slot| self.triangle_rows[slot])
    }
}

/// Returns `true` if the wheels solve the puzzle.
///
/// Shorthand for `AlignmentReport::scan(wheels).is_solved()`.
#[must_use]
pub fn evaluate(wheels: &[Wheel; WHEEL_COUNT]) -> bool {
    AlignmentReport::scan(wheels).is_solved()
}

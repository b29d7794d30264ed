//! A pattern mounted on a rotating wheel.

use std::{
    fmt::{self, Display, Write as _},
    sync::Arc,
};

use crate::{HoleKind, Pattern, RING_SLOTS, WheelError};

/// A [`Pattern`] plus its current rotation.
///
/// `index` is the local pattern slot currently sitting at the top of the
/// wheel. Rotating up advances it, rotating down moves it back, and both wrap
/// around the pattern length.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use needlewheel_core::{Pattern, Wheel};
///
/// let pattern = Arc::new(Pattern::from_strs("12345678", "..O..^^O")?);
/// let mut wheel = Wheel::new(pattern, 7)?;
/// wheel.rotate_up();
/// assert_eq!(wheel.index(), 0);
/// wheel.rotate_down();
/// assert_eq!(wheel.index(), 7);
/// assert_eq!(wheel.to_string(), "[81234567] [O  O  ^^]");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    pattern: Arc<Pattern>,
    index: usize,
}

impl Wheel {
    /// Creates a wheel showing local slot `index` at the top.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::IndexOutOfRange`] if `index >= pattern.len()`.
    pub fn new(pattern: Arc<Pattern>, index: usize) -> Result<Self, WheelError> {
        let len = pattern.len();
        if index >= len {
            return Err(WheelError::IndexOutOfRange { index, len });
        }
        Ok(Self { pattern, index })
    }

    /// Returns the pattern engraved on this wheel.
    #[must_use]
    pub fn pattern(&self) -> &Arc<Pattern> {
        &self.pattern
    }

    /// Returns the current rotation.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rotates the wheel one slot up, wrapping to 0 after the last slot.
    pub fn rotate_up(&mut self) {
        self.index = (self.index + 1) % self.pattern.len();
    }

    /// Rotates the wheel one slot down, wrapping to the last slot before 0.
    pub fn rotate_down(&mut self) {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.pattern.len() - 1);
    }

    /// Returns the hole this wheel shows at an absolute ring slot.
    ///
    /// The slot is taken modulo [`RING_SLOTS`], shifted by the wheel's
    /// rotation, and finally reduced modulo the pattern length so that shorter
    /// patterns repeat around the ring.
    #[must_use]
    pub fn hole_at(&self, slot: usize) -> HoleKind {
        let ring = (slot % RING_SLOTS + self.index) % RING_SLOTS;
        self.pattern.hole(ring % self.pattern.len())
    }

    /// Returns the symbol currently shown at the top of the wheel.
    #[must_use]
    pub fn label(&self) -> char {
        self.pattern.symbol(self.index)
    }
}

impl Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.pattern.len();
        let rotated = (0..len).map(|i| (i + self.index) % len);
        f.write_char('[')?;
        for i in rotated.clone() {
            f.write_char(self.pattern.symbol(i))?;
        }
        f.write_str("] [")?;
        for i in rotated {
            f.write_char(self.pattern.hole(i).dump_char())?;
        }
        f.write_char(']')
    }
}

//! Hole kinds cut into a wheel.

/// What, if anything, is cut out of a wheel at one slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum HoleKind {
    /// Solid wheel, nothing can pass.
    #[default]
    None,
    /// A circular hole. A full row of these solves the puzzle.
    Circle,
    /// A triangular hole. A full row of these invalidates a submission.
    Triangle,
}

impl HoleKind {
    /// All hole kinds.
    pub const ALL: [Self; 3] = [Self::None, Self::Circle, Self::Triangle];

    /// Parses a hole from its pattern-string character.
    ///
    /// `.` is no hole, `O` a circle and `^` a triangle. Any other character
    /// yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use needlewheel_core::HoleKind;
    ///
    /// assert_eq!(HoleKind::from_char('O'), Some(HoleKind::Circle));
    /// assert_eq!(HoleKind::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::None),
            'O' => Some(Self::Circle),
            '^' => Some(Self::Triangle),
            _ => None,
        }
    }

    /// Returns the character used when dumping a wheel.
    ///
    /// Unlike [`from_char`](Self::from_char), an empty slot renders as a space
    /// so that the holes line up visually.
    #[must_use]
    pub const fn dump_char(self) -> char {
        match self {
            Self::None => ' ',
            Self::Circle => 'O',
            Self::Triangle => '^',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_mapping() {
        assert_eq!(HoleKind::from_char('.'), Some(HoleKind::None));
        assert_eq!(HoleKind::from_char('O'), Some(HoleKind::Circle));
        assert_eq!(HoleKind::from_char('^'), Some(HoleKind::Triangle));
        assert_eq!(HoleKind::from_char(' '), None);
        assert_eq!(HoleKind::from_char('o'), None);

        let dumped: String = HoleKind::ALL.iter().map(|h| h.dump_char()).collect();
        assert_eq!(dumped, " O^");
        assert_eq!(HoleKind::default(), HoleKind::None);
    }
}

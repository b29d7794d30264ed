use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::PuzzleSeedError;

const SEED_BYTES: usize = 32;

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds print and parse as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use needlewheel_generator::PuzzleSeed;
///
/// let text = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
/// let seed = PuzzleSeed::from_str(text)?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), needlewheel_generator::PuzzleSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; SEED_BYTES]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }

    /// Returns a random generator seeded from this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; SEED_BYTES]> for PuzzleSeed {
    fn from(bytes: [u8; SEED_BYTES]) -> Self {
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != SEED_BYTES * 2 {
            return Err(PuzzleSeedError::InvalidLength { len });
        }
        let nibbles = s
            .chars()
            .map(|ch| {
                ch.to_digit(16)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .ok_or(PuzzleSeedError::InvalidHexDigit { ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut bytes = [0; SEED_BYTES];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}

use std::iter::FusedIterator;

/// A mixed-radix counter over `N` digits, least significant digit first.
///
/// Iterating yields every combination with `digits[i] < radices[i]`, starting
/// from all zeros. Digit 0 advances fastest and carries into digit 1 when it
/// wraps, and so on, like the wheels of an odometer.
///
/// # Examples
///
/// ```
/// use needlewheel_solver::Odometer;
///
/// let combos: Vec<_> = Odometer::new([2, 3]).collect();
/// assert_eq!(combos.len(), 6);
/// assert_eq!(combos[0], [0, 0]);
/// assert_eq!(combos[1], [1, 0]);
/// assert_eq!(combos[2], [0, 1]);
/// assert_eq!(combos[5], [1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Odometer<const N: usize> {
    radices: [usize; N],
    next: Option<[usize; N]>,
}

impl<const N: usize> Odometer<N> {
    /// Creates a counter with a separate radix per digit.
    ///
    /// A zero radix leaves no valid combination, so the counter is empty.
    #[must_use]
    pub fn new(radices: [usize; N]) -> Self {
        let next = radices.iter().all(|&radix| radix > 0).then_some([0; N]);
        Self { radices, next }
    }

    /// Creates a counter where every digit has the same radix.
    #[must_use]
    pub fn uniform(radix: usize) -> Self {
        Self::new([radix; N])
    }

    /// Returns the total number of combinations the counter walks through.
    #[must_use]
    pub fn combinations(&self) -> usize {
        self.radices.iter().product()
    }

    fn advance(&self, mut digits: [usize; N]) -> Option<[usize; N]> {
        for (digit, &radix) in digits.iter_mut().zip(&self.radices) {
            *digit += 1;
            if *digit < radix {
                return Some(digits);
            }
            *digit = 0;
        }
        None
    }
}

impl<const N: usize> Iterator for Odometer<N> {
    type Item = [usize; N];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.advance(current);
        Some(current)
    }
}

impl<const N: usize> FusedIterator for Odometer<N> {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_base_8_five_digits() {
        let odometer = Odometer::<5>::uniform(8);
        assert_eq!(odometer.combinations(), 32_768);

        let combos: Vec<_> = odometer.collect();
        assert_eq!(combos.len(), 32_768);
        assert_eq!(combos[0], [0, 0, 0, 0, 0]);
        assert_eq!(combos[7], [7, 0, 0, 0, 0]);
        assert_eq!(combos[8], [0, 1, 0, 0, 0]);
        assert_eq!(combos[64], [0, 0, 1, 0, 0]);
        assert_eq!(combos[32_767], [7, 7, 7, 7, 7]);
    }

    #[test]
    fn test_zero_radix_is_empty() {
        let mut odometer = Odometer::new([3, 0, 2]);
        assert_eq!(odometer.next(), None);
        assert_eq!(odometer.next(), None);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut odometer = Odometer::new([1]);
        assert_eq!(odometer.next(), Some([0]));
        assert_eq!(odometer.next(), None);
        assert_eq!(odometer.next(), None);
    }

    proptest! {
        #[test]
        fn prop_visits_every_combination_once(radices in prop::array::uniform3(1_usize..6)) {
            let odometer = Odometer::new(radices);
            let expected = odometer.combinations();
            let combos: Vec<_> = odometer.collect();
            prop_assert_eq!(combos.len(), expected);

            let unique: HashSet<_> = combos.iter().collect();
            prop_assert_eq!(unique.len(), expected);
            for combo in &combos {
                for (digit, radix) in combo.iter().zip(&radices) {
                    prop_assert!(digit < radix);
                }
            }
        }
    }
}

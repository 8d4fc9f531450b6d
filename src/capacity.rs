//! Growth behavior for collections which have exceeded their available storage.

use core::fmt::Debug;

/// Calculate the next capacity to request when a collection must grow.
pub trait Grow: Debug {
    /// Calculate the next capacity given the previous capacity and the
    /// minimum capacity which must be satisfied.
    fn next_capacity(prev: usize, minimum: usize) -> usize;
}

/// Growth behavior which starts from a single slot and consistently doubles in size.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowDoubling;

impl Grow for GrowDoubling {
    #[inline]
    fn next_capacity(prev: usize, minimum: usize) -> usize {
        let preferred = if prev == 0 {
            1
        } else {
            prev.saturating_mul(2)
        };
        preferred.max(minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::{Grow, GrowDoubling};

    #[test]
    fn doubling_sequence() {
        let mut cap = 0;
        let mut seen = [0usize; 6];
        for (i, slot) in seen.iter_mut().enumerate() {
            cap = GrowDoubling::next_capacity(cap, i + 1);
            *slot = cap;
        }
        assert_eq!(seen, [1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn doubling_respects_minimum() {
        assert_eq!(GrowDoubling::next_capacity(0, 5), 5);
        assert_eq!(GrowDoubling::next_capacity(4, 9), 9);
        assert_eq!(GrowDoubling::next_capacity(4, 5), 8);
    }

    #[test]
    fn doubling_saturates() {
        assert_eq!(
            GrowDoubling::next_capacity(usize::MAX / 2 + 1, 0),
            usize::MAX
        );
    }
}

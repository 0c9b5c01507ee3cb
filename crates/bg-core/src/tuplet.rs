//! Tuplet quantizer: burst-count index → triggers per burst.

use crate::params::{Tuplets, NUMBER_INDEX_MAX, NUMBER_MAX, NUMBER_MIN};

/// Index ceiling for duplet/triplet modes (2^5 = 32 is the largest
/// power of two within the count range).
const INDEX_MAX_DUPLETS: i32 = 5;
const INDEX_MAX_TRIPLETS: i32 = 5;

/// Upper bound on the burst-count index for a tuplet mode. Bounds
/// index edits, CV mapping, and random excursions alike.
pub fn max_index(tuplets: Tuplets) -> i32 {
    match tuplets {
        Tuplets::Free => NUMBER_INDEX_MAX,
        Tuplets::Duplets => INDEX_MAX_DUPLETS,
        Tuplets::Triplets => INDEX_MAX_TRIPLETS,
    }
}

/// Resolve a burst-count index to a trigger count under a tuplet mode.
/// Always lands in [NUMBER_MIN, NUMBER_MAX].
pub fn quantize(tuplets: Tuplets, index: i32) -> i32 {
    match tuplets {
        Tuplets::Free => index.clamp(NUMBER_MIN, NUMBER_INDEX_MAX),
        Tuplets::Duplets => pow2(index).clamp(NUMBER_MIN, NUMBER_INDEX_MAX),
        // 2^i + 2^(i-1) = 1.5 × 2^i, the classic triplet subdivision.
        Tuplets::Triplets => (pow2(index) + pow2(index - 1)).clamp(NUMBER_MIN, NUMBER_MAX),
    }
}

/// 2^exp with the negative-exponent-is-zero convention, so the triplet
/// formula degenerates to 1 at index 0. Saturates above the count
/// range; a stale free-mode index can reach 32, which must not shift.
fn pow2(exp: i32) -> i32 {
    if exp < 0 {
        0
    } else {
        1 << exp.min(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_mode_is_identity_above_one() {
        for i in 1..=NUMBER_INDEX_MAX {
            assert_eq!(quantize(Tuplets::Free, i), i);
        }
    }

    #[test]
    fn free_mode_floors_at_one() {
        assert_eq!(quantize(Tuplets::Free, 0), 1);
        assert_eq!(quantize(Tuplets::Free, -5), 1);
    }

    #[test]
    fn duplets_are_powers_of_two() {
        assert_eq!(quantize(Tuplets::Duplets, 0), 1);
        assert_eq!(quantize(Tuplets::Duplets, 1), 2);
        assert_eq!(quantize(Tuplets::Duplets, 2), 4);
        assert_eq!(quantize(Tuplets::Duplets, 3), 8);
        assert_eq!(quantize(Tuplets::Duplets, 4), 16);
        assert_eq!(quantize(Tuplets::Duplets, 5), 32);
    }

    #[test]
    fn triplets_are_three_halves_of_powers() {
        assert_eq!(quantize(Tuplets::Triplets, 0), 1); // 1 + 0
        assert_eq!(quantize(Tuplets::Triplets, 1), 3);
        assert_eq!(quantize(Tuplets::Triplets, 2), 6);
        assert_eq!(quantize(Tuplets::Triplets, 3), 12);
        assert_eq!(quantize(Tuplets::Triplets, 4), 24);
        assert_eq!(quantize(Tuplets::Triplets, 5), 48);
    }

    #[test]
    fn output_in_range_for_all_modes() {
        for tuplets in [Tuplets::Free, Tuplets::Duplets, Tuplets::Triplets] {
            for i in 0..=max_index(tuplets) {
                let n = quantize(tuplets, i);
                assert!((NUMBER_MIN..=NUMBER_MAX).contains(&n), "{tuplets:?} {i} -> {n}");
            }
        }
    }

    #[test]
    fn monotonic_in_index_within_mode() {
        for tuplets in [Tuplets::Free, Tuplets::Duplets, Tuplets::Triplets] {
            let mut prev = 0;
            for i in 0..=max_index(tuplets) {
                let n = quantize(tuplets, i);
                assert!(n >= prev, "{tuplets:?} not monotonic at {i}");
                prev = n;
            }
        }
    }

    #[test]
    fn stale_free_mode_index_clamps_in_tuplet_modes() {
        // A free-mode index up to 32 may still be set when the mode
        // switches; the count must clamp, not overflow.
        assert_eq!(quantize(Tuplets::Duplets, 32), 32);
        assert_eq!(quantize(Tuplets::Triplets, 32), 48);
    }

    #[test]
    fn max_index_per_mode() {
        assert_eq!(max_index(Tuplets::Free), 32);
        assert_eq!(max_index(Tuplets::Duplets), 5);
        assert_eq!(max_index(Tuplets::Triplets), 5);
    }
}

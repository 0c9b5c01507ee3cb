//! Random-source boundary.
//!
//! The core owns no RNG state; hosts supply one per tick and tests
//! script exact sequences.

/// A uniform integer source.
pub trait RandomSource {
    /// Uniform draw from the half-open range [lo, hi).
    fn range(&mut self, lo: i32, hi: i32) -> i32;
}

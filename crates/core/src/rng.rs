//! RNG module — deterministic LCG and uniform shape selection.
//!
//! The game draws each new piece uniformly at random from the four shape
//! kinds; there is no bag. A small LCG keeps the core free of external
//! randomness so whole games replay from a single seed.

use quadris_types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Inclusive uniform integer in [min, max].
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        min + self.next_range(max - min + 1)
    }

    /// Draw a uniformly random shape kind.
    pub fn next_shape(&mut self) -> ShapeKind {
        let index = self.next_range(ShapeKind::ALL.len() as u32);
        // Index is always within 0..4.
        ShapeKind::from_index(index).unwrap_or(ShapeKind::I)
    }

    /// Current internal state, usable as a seed to replay from here.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_equal_seeds() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn diverges_for_different_seeds() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn range_inclusive_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.range_inclusive(2, 5);
            assert!((2..=5).contains(&v));
        }
    }

    #[test]
    fn shape_draws_cover_all_kinds() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let kind = rng.next_shape();
            seen[ShapeKind::ALL.iter().position(|&k| k == kind).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "all four kinds should appear");
    }
}

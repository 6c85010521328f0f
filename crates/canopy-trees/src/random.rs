//! Randomness consumed by tree selection.

use rand::Rng;

/// Source of the two kinds of draws made while choosing a tree.
///
/// Implemented for every [`rand::Rng`], so hosts normally pass their world
/// RNG directly.
pub trait TreeRandom {
    /// Uniform float in `[0.0, 1.0)`.
    fn next_chance(&mut self) -> f32;

    /// Uniform index in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> TreeRandom for R {
    fn next_chance(&mut self) -> f32 {
        self.random::<f32>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_chance_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let c = rng.next_chance();
            assert!((0.0..1.0).contains(&c), "chance out of range: {c}");
        }
    }

    #[test]
    fn test_index_below_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for bound in 1..20 {
            let i = rng.next_index(bound);
            assert!(i < bound, "index {i} not below {bound}");
        }
    }
}

//! Species matching: two tree recipes are the same species when they resolve to
//! the same trunk and foliage materials.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::feature::TreeDescriptor;

const SAMPLING_SEED: u64 = 0x5A91_1DE5;

/// Compares tree recipes by sampling their material providers.
///
/// All samples come from one throwaway RNG, never from the world RNG, so
/// matching does not perturb the draws that decide which tree grows. With
/// stochastic providers the comparison is a best-effort heuristic.
pub struct SpeciesMatcher {
    rng: ChaCha8Rng,
}

impl SpeciesMatcher {
    /// Creates a matcher with a fixed sampling seed.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(SAMPLING_SEED),
        }
    }

    /// Returns `true` if `candidate` and `expected` resolve to the same
    /// foliage and trunk materials.
    pub fn matches(&mut self, candidate: &TreeDescriptor, expected: &TreeDescriptor) -> bool {
        let candidate_foliage = candidate.foliage.sample(&mut self.rng);
        let expected_foliage = expected.foliage.sample(&mut self.rng);
        if candidate_foliage != expected_foliage {
            return false;
        }

        let candidate_trunk = candidate.trunk.sample(&mut self.rng);
        let expected_trunk = expected.trunk.sample(&mut self.rng);
        candidate_trunk == expected_trunk
    }
}

impl Default for SpeciesMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot species comparison with a fresh matcher.
pub fn matches(candidate: &TreeDescriptor, expected: &TreeDescriptor) -> bool {
    SpeciesMatcher::new().matches(candidate, expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{MaterialId, MaterialProvider};

    const OAK_LOG: MaterialId = MaterialId(1);
    const OAK_LEAVES: MaterialId = MaterialId(2);
    const BIRCH_LOG: MaterialId = MaterialId(3);
    const BIRCH_LEAVES: MaterialId = MaterialId(4);

    #[test]
    fn test_matches_is_reflexive() {
        let oak = TreeDescriptor::simple("oak", OAK_LOG, OAK_LEAVES);
        assert!(matches(&oak, &oak));
    }

    #[test]
    fn test_shape_does_not_affect_species() {
        let oak = TreeDescriptor::simple("oak", OAK_LOG, OAK_LEAVES);
        let mut fancy = TreeDescriptor::simple("fancy_oak", OAK_LOG, OAK_LEAVES);
        fancy.trunk_height = 12;
        fancy.foliage_radius = 4;
        assert!(matches(&fancy, &oak));
    }

    #[test]
    fn test_matches_is_symmetric() {
        let oak = TreeDescriptor::simple("oak", OAK_LOG, OAK_LEAVES);
        let birch = TreeDescriptor::simple("birch", BIRCH_LOG, BIRCH_LEAVES);
        let odd = TreeDescriptor::simple("odd", OAK_LOG, BIRCH_LEAVES);
        let all = [&oak, &birch, &odd];

        for x in all {
            for y in all {
                assert_eq!(matches(x, y), matches(y, x), "{} vs {}", x.name, y.name);
            }
        }
    }

    #[test]
    fn test_both_materials_must_agree() {
        let oak = TreeDescriptor::simple("oak", OAK_LOG, OAK_LEAVES);
        let oak_log_birch_leaves = TreeDescriptor::simple("a", OAK_LOG, BIRCH_LEAVES);
        let birch_log_oak_leaves = TreeDescriptor::simple("b", BIRCH_LOG, OAK_LEAVES);
        assert!(!matches(&oak_log_birch_leaves, &oak));
        assert!(!matches(&birch_log_oak_leaves, &oak));
    }

    #[test]
    fn test_degenerate_weighted_provider_matches_simple() {
        let oak = TreeDescriptor::simple("oak", OAK_LOG, OAK_LEAVES);
        let mut weighted = oak.clone();
        weighted.foliage = MaterialProvider::Weighted(vec![(OAK_LEAVES, 5)]);
        assert!(matches(&weighted, &oak));
    }

    #[test]
    fn test_matcher_is_deterministic() {
        let mixed = TreeDescriptor {
            foliage: MaterialProvider::Weighted(vec![(OAK_LEAVES, 1), (BIRCH_LEAVES, 1)]),
            ..TreeDescriptor::simple("mixed", OAK_LOG, OAK_LEAVES)
        };
        let oak = TreeDescriptor::simple("oak", OAK_LOG, OAK_LEAVES);

        let run = || {
            let mut matcher = SpeciesMatcher::new();
            (0..16).map(|_| matcher.matches(&mixed, &oak)).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}

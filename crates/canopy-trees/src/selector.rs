//! Chooses which catalogued tree a sapling grows into.
//!
//! Weighted trees are tried first, each gated by its own chance. If none of
//! them is placed, one species-matching default tree is drawn uniformly and
//! attempted once.

use std::sync::Arc;

use crate::catalog::BiomeCatalog;
use crate::feature::TreeDescriptor;
use crate::random::TreeRandom;
use crate::species::SpeciesMatcher;
use crate::world::{BlockPos, GrowthWorld};

/// Result of a selection.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// This tree was placed in the world.
    Placed(Arc<TreeDescriptor>),
    /// Nothing was placed; the host should fall back to its default growth.
    NoMatch,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Placed`].
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}

/// Picks and places a tree of the same species as `expected` from `catalog`.
///
/// The caller is responsible for clearing `pos` beforehand and for restoring
/// it when [`Outcome::NoMatch`] is returned.
pub fn select<W, R>(
    catalog: &BiomeCatalog,
    expected: &TreeDescriptor,
    world: &mut W,
    pos: BlockPos,
    rng: &mut R,
) -> Outcome
where
    W: GrowthWorld,
    R: TreeRandom + ?Sized,
{
    let mut matcher = SpeciesMatcher::new();

    for entry in &catalog.weighted {
        if !matcher.matches(&entry.descriptor, expected) {
            continue;
        }
        if rng.next_chance() >= entry.chance {
            continue;
        }
        if world.place_tree(&entry.descriptor, pos, rng) {
            tracing::trace!(tree = %entry.descriptor.name, chance = entry.chance, "placed weighted tree");
            return Outcome::Placed(Arc::clone(&entry.descriptor));
        }
        tracing::trace!(tree = %entry.descriptor.name, "weighted tree placement failed");
    }

    let matching: Vec<&Arc<TreeDescriptor>> = catalog
        .defaults
        .iter()
        .filter(|candidate| matcher.matches(candidate, expected))
        .collect();
    if matching.is_empty() {
        return Outcome::NoMatch;
    }

    let index = rng.next_index(matching.len());
    let Some(chosen) = matching.get(index) else {
        return Outcome::NoMatch;
    };

    if world.place_tree(chosen, pos, rng) {
        tracing::trace!(tree = %chosen.name, index, of = matching.len(), "placed default tree");
        Outcome::Placed(Arc::clone(chosen))
    } else {
        tracing::trace!(tree = %chosen.name, "default tree placement failed");
        Outcome::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WeightedTreeEntry;
    use crate::material::MaterialId;
    use crate::testing::{MockWorld, ScriptedRandom};

    const POS: BlockPos = BlockPos::new(0, 64, 0);

    fn oak(name: &str) -> Arc<TreeDescriptor> {
        Arc::new(TreeDescriptor::simple(name, MaterialId(1), MaterialId(2)))
    }

    fn birch(name: &str) -> Arc<TreeDescriptor> {
        Arc::new(TreeDescriptor::simple(name, MaterialId(3), MaterialId(4)))
    }

    fn weighted(descriptor: Arc<TreeDescriptor>, chance: f32) -> WeightedTreeEntry {
        WeightedTreeEntry { descriptor, chance }
    }

    fn placed_name(outcome: &Outcome) -> Option<&str> {
        match outcome {
            Outcome::Placed(d) => Some(d.name.as_str()),
            Outcome::NoMatch => None,
        }
    }

    #[test]
    fn test_weighted_entry_placed_when_draw_below_chance() {
        let catalog = BiomeCatalog {
            weighted: vec![weighted(oak("fancy_oak"), 0.5)],
            defaults: Vec::new(),
        };
        let mut world = MockWorld::new();
        let mut rng = ScriptedRandom::new(0.4, 0);

        let outcome = select(&catalog, &oak("oak"), &mut world, POS, &mut rng);

        assert_eq!(placed_name(&outcome), Some("fancy_oak"));
        assert_eq!(world.attempts, vec!["fancy_oak"]);
    }

    #[test]
    fn test_failed_draw_falls_through_to_defaults() {
        let catalog = BiomeCatalog {
            weighted: vec![weighted(oak("fancy_oak"), 0.5)],
            defaults: vec![oak("plain_oak")],
        };
        let mut world = MockWorld::new();
        let mut rng = ScriptedRandom::new(0.6, 0);

        let outcome = select(&catalog, &oak("oak"), &mut world, POS, &mut rng);

        assert_eq!(placed_name(&outcome), Some("plain_oak"));
        assert_eq!(world.attempts, vec!["plain_oak"], "failed draw must not attempt placement");
        assert_eq!(rng.chance_draws, 1);
        assert_eq!(rng.index_bounds, vec![1]);
    }

    #[test]
    fn test_draw_equal_to_chance_does_not_trigger() {
        let catalog = BiomeCatalog {
            weighted: vec![weighted(oak("fancy_oak"), 0.5)],
            defaults: Vec::new(),
        };
        let mut world = MockWorld::new();
        let mut rng = ScriptedRandom::new(0.5, 0);

        let outcome = select(&catalog, &oak("oak"), &mut world, POS, &mut rng);
        assert!(!outcome.is_placed());
        assert!(world.attempts.is_empty());
    }

    #[test]
    fn test_non_matching_weighted_entries_draw_nothing() {
        let catalog = BiomeCatalog {
            weighted: vec![weighted(birch("tall_birch"), 0.9)],
            defaults: Vec::new(),
        };
        let mut world = MockWorld::new();
        let mut rng = ScriptedRandom::new(0.0, 0);

        let outcome = select(&catalog, &oak("oak"), &mut world, POS, &mut rng);

        assert!(!outcome.is_placed());
        assert_eq!(rng.chance_draws, 0);
        assert!(world.attempts.is_empty());
    }

    #[test]
    fn test_failed_weighted_placement_continues_with_next_entry() {
        let catalog = BiomeCatalog {
            weighted: vec![weighted(oak("blocked"), 0.9), weighted(oak("fits"), 0.9)],
            defaults: vec![oak("plain_oak")],
        };
        let mut world = MockWorld::new().rejecting("blocked");
        let mut rng = ScriptedRandom::new(0.1, 0);

        let outcome = select(&catalog, &oak("oak"), &mut world, POS, &mut rng);

        assert_eq!(placed_name(&outcome), Some("fits"));
        assert_eq!(world.attempts, vec!["blocked", "fits"]);
    }

    #[test]
    fn test_no_matches_at_all_is_no_match() {
        let catalog = BiomeCatalog {
            weighted: vec![weighted(birch("tall_birch"), 0.5)],
            defaults: vec![birch("birch")],
        };
        let mut world = MockWorld::new();
        let mut rng = ScriptedRandom::new(0.0, 0);

        let outcome = select(&catalog, &oak("oak"), &mut world, POS, &mut rng);

        assert!(!outcome.is_placed());
        assert!(world.attempts.is_empty());
        assert!(rng.index_bounds.is_empty(), "no index drawn without matching defaults");
    }

    #[test]
    fn test_default_index_counts_only_matching_entries() {
        let catalog = BiomeCatalog {
            weighted: Vec::new(),
            defaults: vec![
                oak("first"),
                birch("birch_a"),
                oak("second"),
                birch("birch_b"),
                oak("third"),
            ],
        };
        let mut world = MockWorld::new();
        let mut rng = ScriptedRandom::new(0.0, 1);

        let outcome = select(&catalog, &oak("oak"), &mut world, POS, &mut rng);

        assert_eq!(placed_name(&outcome), Some("second"));
        assert_eq!(rng.index_bounds, vec![3]);
        assert_eq!(world.attempts, vec!["second"]);
    }

    #[test]
    fn test_failed_default_placement_is_single_shot() {
        let catalog = BiomeCatalog {
            weighted: Vec::new(),
            defaults: vec![oak("blocked"), oak("would_fit")],
        };
        let mut world = MockWorld::new().rejecting("blocked");
        let mut rng = ScriptedRandom::new(0.0, 0);

        let outcome = select(&catalog, &oak("oak"), &mut world, POS, &mut rng);

        assert!(!outcome.is_placed());
        assert_eq!(world.attempts, vec!["blocked"]);
    }

    #[test]
    fn test_zero_chance_entry_never_triggers() {
        let catalog = BiomeCatalog {
            weighted: vec![weighted(oak("ghost"), 0.0)],
            defaults: Vec::new(),
        };
        let mut world = MockWorld::new();
        let mut rng = ScriptedRandom::new(0.0, 0);

        assert!(!select(&catalog, &oak("oak"), &mut world, POS, &mut rng).is_placed());
        assert!(world.attempts.is_empty());
    }
}

//! Shared fixtures for unit tests.

use std::collections::HashMap;

use crate::feature::TreeDescriptor;
use crate::random::TreeRandom;
use crate::world::{BlockPos, GrowthWorld};

/// Returns the same chance and index on every draw and records what was asked.
pub(crate) struct ScriptedRandom {
    chance: f32,
    index: usize,
    pub chance_draws: usize,
    pub index_bounds: Vec<usize>,
}

impl ScriptedRandom {
    pub fn new(chance: f32, index: usize) -> Self {
        Self {
            chance,
            index,
            chance_draws: 0,
            index_bounds: Vec::new(),
        }
    }
}

impl TreeRandom for ScriptedRandom {
    fn next_chance(&mut self) -> f32 {
        self.chance_draws += 1;
        self.chance
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.index_bounds.push(bound);
        self.index
    }
}

/// Block map that records every placement attempt by tree name.
pub(crate) struct MockWorld {
    pub blocks: HashMap<BlockPos, String>,
    pub attempts: Vec<String>,
    rejected: Vec<String>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
            attempts: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Placement of the named tree will fail.
    pub fn rejecting(mut self, name: &str) -> Self {
        self.rejected.push(name.to_string());
        self
    }
}

impl GrowthWorld for MockWorld {
    type BlockState = String;

    fn block_state(&self, pos: BlockPos) -> String {
        self.blocks
            .get(&pos)
            .cloned()
            .unwrap_or_else(|| "air".to_string())
    }

    fn set_block_state(&mut self, pos: BlockPos, state: String) {
        self.blocks.insert(pos, state);
    }

    fn clear_block(&mut self, pos: BlockPos) {
        self.blocks.remove(&pos);
    }

    fn place_tree<R: TreeRandom + ?Sized>(
        &mut self,
        tree: &TreeDescriptor,
        pos: BlockPos,
        _rng: &mut R,
    ) -> bool {
        self.attempts.push(tree.name.clone());
        if self.rejected.contains(&tree.name) {
            return false;
        }
        self.blocks.insert(pos, format!("log:{}", tree.name));
        true
    }
}

//! Sparse in-memory block grid standing in for a real world.

use std::collections::BTreeMap;

use canopy_trees::{BlockPos, GrowthWorld, MaterialId, TreeDescriptor, TreeRandom};
use rustc_hash::FxHashMap;

/// Tallest trunk a tree may have.
pub const MAX_TRUNK_HEIGHT: u32 = 64;
/// Largest foliage radius a tree may have.
pub const MAX_FOLIAGE_RADIUS: u32 = 16;

/// Contents of one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Air,
    /// A sapling, by index into the simulator's sapling table.
    Sapling(usize),
    Solid(MaterialId),
}

/// A world of blocks above a flat ground plane. Unset positions are air.
pub struct GridWorld {
    blocks: FxHashMap<BlockPos, Block>,
    height_limit: i32,
    last_placed: Option<String>,
}

impl GridWorld {
    /// Creates an empty world; trees may not reach `height_limit`.
    pub fn new(height_limit: i32) -> Self {
        Self {
            blocks: FxHashMap::default(),
            height_limit,
            last_placed: None,
        }
    }

    /// Puts a sapling at `pos`.
    pub fn plant(&mut self, pos: BlockPos, sapling: usize) {
        self.blocks.insert(pos, Block::Sapling(sapling));
    }

    /// Block at `pos`.
    pub fn block(&self, pos: BlockPos) -> Block {
        self.blocks.get(&pos).copied().unwrap_or(Block::Air)
    }

    /// Name of the most recently placed tree, clearing it.
    pub fn take_last_placed(&mut self) -> Option<String> {
        self.last_placed.take()
    }

    /// Number of non-air blocks.
    pub fn filled(&self) -> usize {
        self.blocks.len()
    }

    /// Count of solid blocks per material.
    pub fn material_counts(&self) -> BTreeMap<MaterialId, usize> {
        let mut counts = BTreeMap::new();
        for block in self.blocks.values() {
            if let Block::Solid(id) = block {
                *counts.entry(*id).or_default() += 1;
            }
        }
        counts
    }

    /// Stores a solid block, leaving air-sampled positions empty.
    fn put_solid(&mut self, pos: BlockPos, material: MaterialId) {
        if !material.is_air() {
            self.blocks.insert(pos, Block::Solid(material));
        }
    }

    /// Whether the bounding box of `tree` at `pos` lies in addressable space
    /// below the height limit.
    fn fits(&self, tree: &TreeDescriptor, pos: BlockPos) -> bool {
        let height = i64::from(tree.trunk_height);
        let radius = i64::from(tree.foliage_radius);
        let addressable = |v: i64| i32::try_from(v).is_ok();

        [pos.x, pos.z]
            .into_iter()
            .all(|c| addressable(i64::from(c) - radius) && addressable(i64::from(c) + radius))
            && addressable(i64::from(pos.y) + height - radius)
            && i64::from(pos.y) + height + radius < i64::from(self.height_limit)
    }

    /// Trunk column and foliage blob of `tree` rooted at `pos`, or `None` if
    /// the shape exceeds [`MAX_TRUNK_HEIGHT`] or [`MAX_FOLIAGE_RADIUS`].
    fn tree_shape(tree: &TreeDescriptor, pos: BlockPos) -> Option<(Vec<BlockPos>, Vec<BlockPos>)> {
        if tree.trunk_height > MAX_TRUNK_HEIGHT || tree.foliage_radius > MAX_FOLIAGE_RADIUS {
            return None;
        }
        let height = i32::try_from(tree.trunk_height).ok()?;
        let radius = i32::try_from(tree.foliage_radius).ok()?;
        let trunk: Vec<BlockPos> = (0..height).map(|dy| pos.offset(0, dy, 0)).collect();
        let crown = pos.offset(0, height, 0);

        let mut foliage = Vec::new();
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                for dz in -radius..=radius {
                    if dx * dx + dy * dy + dz * dz > radius * radius + 1 {
                        continue;
                    }
                    let leaf = crown.offset(dx, dy, dz);
                    if dx == 0 && dz == 0 && leaf.y < crown.y {
                        continue; // trunk
                    }
                    foliage.push(leaf);
                }
            }
        }
        Some((trunk, foliage))
    }
}

impl GrowthWorld for GridWorld {
    type BlockState = Block;

    fn block_state(&self, pos: BlockPos) -> Block {
        self.block(pos)
    }

    fn set_block_state(&mut self, pos: BlockPos, state: Block) {
        match state {
            Block::Air => self.blocks.remove(&pos),
            other => self.blocks.insert(pos, other),
        };
    }

    fn clear_block(&mut self, pos: BlockPos) {
        self.blocks.remove(&pos);
    }

    fn place_tree<R: TreeRandom + ?Sized>(
        &mut self,
        tree: &TreeDescriptor,
        pos: BlockPos,
        rng: &mut R,
    ) -> bool {
        if !self.fits(tree, pos) {
            tracing::trace!(tree = %tree.name, ?pos, "tree exceeds world bounds");
            return false;
        }
        let Some((trunk, foliage)) = Self::tree_shape(tree, pos) else {
            tracing::trace!(tree = %tree.name, "tree shape too large");
            return false;
        };

        if trunk.iter().chain(&foliage).any(|p| self.block(*p) != Block::Air) {
            tracing::trace!(tree = %tree.name, ?pos, "tree is obstructed");
            return false;
        }

        for p in trunk {
            self.put_solid(p, tree.trunk.sample(rng));
        }
        for p in foliage {
            self.put_solid(p, tree.foliage.sample(rng));
        }
        self.last_placed = Some(tree.name.clone());
        true
    }
}

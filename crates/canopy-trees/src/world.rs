//! Host interface: the world a sapling grows in.

use serde::{Deserialize, Serialize};

use crate::feature::TreeDescriptor;
use crate::random::TreeRandom;

/// Integer block position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the position offset by `(dx, dy, dz)`.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

/// Block access and tree placement supplied by the host.
///
/// The host guarantees exclusive access to the growing position for the
/// duration of one grow call.
pub trait GrowthWorld {
    /// Whatever the host stores per block (the sapling's state included).
    type BlockState: Clone;

    /// Reads the block at `pos`.
    fn block_state(&self, pos: BlockPos) -> Self::BlockState;

    /// Overwrites the block at `pos`.
    fn set_block_state(&mut self, pos: BlockPos, state: Self::BlockState);

    /// Sets the block at `pos` to empty space.
    fn clear_block(&mut self, pos: BlockPos);

    /// Generates `tree` rooted at `pos`. Returns `false` if the tree could not
    /// be placed (obstructed, out of bounds, ...).
    fn place_tree<R: TreeRandom + ?Sized>(
        &mut self,
        tree: &TreeDescriptor,
        pos: BlockPos,
        rng: &mut R,
    ) -> bool;
}

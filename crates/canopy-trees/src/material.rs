//! Resolved block materials and the providers that choose them.

use serde::{Deserialize, Serialize};

use crate::random::TreeRandom;

/// Compact identifier of a resolved block material (log, leaves, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u16);

impl MaterialId {
    /// Empty space. Also the result of a provider with nothing to choose from.
    pub const AIR: Self = Self(0);

    /// Returns `true` if this is [`MaterialId::AIR`].
    pub fn is_air(self) -> bool {
        self == Self::AIR
    }
}

/// Chooses the material of a trunk or foliage block.
///
/// Providers may be stochastic, so two samples of the same provider are not
/// guaranteed to agree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MaterialProvider {
    /// Always the same material.
    Simple(MaterialId),
    /// Picks one of several materials proportionally to its weight.
    Weighted(Vec<(MaterialId, u32)>),
}

impl MaterialProvider {
    /// Samples one material from this provider.
    pub fn sample<R: TreeRandom + ?Sized>(&self, rng: &mut R) -> MaterialId {
        match self {
            Self::Simple(material) => *material,
            Self::Weighted(entries) => {
                let total: usize = entries.iter().map(|&(_, w)| w as usize).sum();
                if total == 0 {
                    return MaterialId::AIR;
                }

                let mut roll = rng.next_index(total);
                for &(material, weight) in entries {
                    let weight = weight as usize;
                    if roll < weight {
                        return material;
                    }
                    roll -= weight;
                }
                MaterialId::AIR
            }
        }
    }
}

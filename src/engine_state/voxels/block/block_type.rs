//! # Block Type Module
//!
//! This module defines the closed set of block types a chunk can hold.
//! A block type carries no behavior beyond identity: it is either empty
//! (contributes no geometry) or solid (contributes geometry and occludes
//! its neighbors' faces).

use std::fmt;

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::BlockTypeSize;
use crate::engine_state::error::ChunkError;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminants are the raw ids stored in compact form (`BlockTypeSize`).
/// `FromPrimitive` allows decoding raw ids without an unchecked cast. Settings
/// files store block types by raw id.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize,
)]
#[serde(try_from = "BlockTypeSize", into = "BlockTypeSize")]
pub enum BlockType {
    /// Empty space. The only block type that contributes no geometry.
    #[default]
    AIR = 0,

    /// A grass block with distinct top, side and bottom textures.
    GRASS = 1,
}

impl BlockType {
    /// Every block type, in id order.
    pub const ALL: [BlockType; 2] = [BlockType::AIR, BlockType::GRASS];

    /// Decodes a raw block id.
    ///
    /// # Returns
    /// `None` if `raw` does not name a block type.
    pub fn from_raw(raw: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(raw)
    }

    /// The raw id of this block type.
    pub fn raw(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Returns `true` for the empty block type (air).
    #[inline]
    pub fn is_empty(self) -> bool {
        self == BlockType::AIR
    }

    /// Returns `true` for every block type that contributes geometry.
    #[inline]
    pub fn is_solid(self) -> bool {
        !self.is_empty()
    }
}

impl TryFrom<BlockTypeSize> for BlockType {
    type Error = ChunkError;

    fn try_from(raw: BlockTypeSize) -> Result<Self, Self::Error> {
        BlockType::from_raw(raw).ok_or(ChunkError::UnknownBlockId { raw })
    }
}

impl From<BlockType> for BlockTypeSize {
    fn from(block_type: BlockType) -> Self {
        block_type.raw()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::AIR => write!(f, "air"),
            BlockType::GRASS => write!(f, "grass"),
        }
    }
}

//! # Engine Error Types
//!
//! Errors raised by voxel storage and mesh generation. None of them is
//! retried inside the engine: the caller decides whether a failure ends the
//! process or only skips the affected chunk.

use thiserror::Error;

use super::voxels::block::{block_side::BlockSide, block_type::BlockType, BlockTypeSize};

/// Errors raised by chunk storage operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// A voxel coordinate lies outside the chunk grid.
    #[error("voxel ({x}, {y}, {z}) is outside the chunk grid")]
    OutOfBounds {
        /// X coordinate that was requested.
        x: usize,
        /// Y coordinate that was requested.
        y: usize,
        /// Z coordinate that was requested.
        z: usize,
    },

    /// A column fill height exceeds the chunk height.
    #[error("fill height {height} exceeds the chunk height {max}")]
    HeightOutOfRange {
        /// Requested height.
        height: usize,
        /// Chunk height.
        max: usize,
    },

    /// A raw block id does not name a block type.
    #[error("unknown block id {raw}")]
    UnknownBlockId {
        /// The raw id that failed to decode.
        raw: BlockTypeSize,
    },
}

/// Errors raised while assembling a chunk mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Emitting the next face would push an index past the 16-bit ceiling.
    #[error(
        "mesh index overflow: {vertex_count} vertices emitted, next face needs 4 more (limit 65536)"
    )]
    IndexOverflow {
        /// Vertices already emitted when the overflow was detected.
        vertex_count: usize,
    },

    /// A solid block type has no region in the texture atlas.
    #[error("no atlas region for {block_type} on the {side:?} face")]
    MissingAtlasRegion {
        /// The block type being meshed.
        block_type: BlockType,
        /// The face being meshed.
        side: BlockSide,
    },
}

/// Result type for chunk storage operations.
pub type ChunkResult<T> = Result<T, ChunkError>;

/// Result type for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

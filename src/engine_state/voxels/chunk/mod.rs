//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed-size, dense 3D grid of
//! block types together with the geometry buffers its mesh is built into.
//!
//! ## Storage
//!
//! Blocks are stored as `[x][y][z]` in a boxed array of
//! `CHUNK_SIZE_X * CHUNK_SIZE_Y * CHUNK_SIZE_Z` entries. All coordinates are
//! zero based and never wrap; accessing a voxel outside the grid is an error.
//!
//! ## Meshing
//!
//! `Chunk::generate_mesh` rebuilds the mesh from the current grid. The chunk
//! owns its `MeshBuffers` for its whole lifetime and reuses them on every
//! rebuild (see `chunk_meshing`).
//!
//! ## Concurrency
//!
//! A chunk is plain data. Generation takes `&mut self`, so edits and rebuilds
//! of the same chunk are serialized by the borrow checker; different chunks
//! can be meshed on different threads.

use cgmath::{Point3, Vector3};

use super::block::{block_side::BlockSide, block_type::BlockType};
use crate::engine_state::{
    error::{ChunkError, ChunkResult},
    rendering::meshing::MeshBuffers,
};

mod chunk_creation;
pub mod chunk_iteration;
mod chunk_meshing;

/// Width of a chunk along X, in blocks.
pub const CHUNK_SIZE_X: usize = 16;
/// Height of a chunk along Y, in blocks.
pub const CHUNK_SIZE_Y: usize = 64;
/// Depth of a chunk along Z, in blocks.
pub const CHUNK_SIZE_Z: usize = 16;
/// The total number of blocks in a chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE_X * CHUNK_SIZE_Y * CHUNK_SIZE_Z;
/// Faces on the outer shell of a completely solid chunk.
///
/// The mesh buffers reserve this many faces on their first build, which
/// covers every flat or heightmap terrain without reallocating.
pub const CHUNK_SHELL_FACES: usize =
    2 * (CHUNK_SIZE_X * CHUNK_SIZE_Y + CHUNK_SIZE_Y * CHUNK_SIZE_Z + CHUNK_SIZE_X * CHUNK_SIZE_Z);

/// Dense block storage, indexed `[x][y][z]`.
pub type BlockGrid = [[[BlockType; CHUNK_SIZE_Z]; CHUNK_SIZE_Y]; CHUNK_SIZE_X];

/// A `CHUNK_SIZE_X x CHUNK_SIZE_Y x CHUNK_SIZE_Z` column of voxel blocks.
///
/// Chunks are the unit of world storage and of mesh regeneration. Each chunk
/// knows its position on the chunk grid; the mesh it builds is in chunk-local
/// coordinates and is placed in the world by the renderer's model transform.
#[derive(Clone)]
pub struct Chunk {
    /// X position of this chunk on the chunk grid (not in blocks).
    origin_x: i32,
    /// Z position of this chunk on the chunk grid (not in blocks).
    origin_z: i32,
    /// The block data, indexed `[x][y][z]`.
    blocks: Box<BlockGrid>,
    /// Geometry produced by the last call to `generate_mesh`.
    mesh: MeshBuffers,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    ///
    /// No mesh memory is allocated until the first call to `generate_mesh`.
    ///
    /// # Arguments
    /// * `origin_x` - X position of the chunk on the chunk grid
    /// * `origin_z` - Z position of the chunk on the chunk grid
    pub fn new(origin_x: i32, origin_z: i32) -> Self {
        Chunk {
            origin_x,
            origin_z,
            blocks: Box::new([[[BlockType::AIR; CHUNK_SIZE_Z]; CHUNK_SIZE_Y]; CHUNK_SIZE_X]),
            mesh: MeshBuffers::new(),
        }
    }

    /// The chunk's position on the chunk grid as `(x, z)`.
    pub fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_z)
    }

    /// World-space translation of the chunk's local origin.
    ///
    /// This is `(origin_x * CHUNK_SIZE_X, 0, origin_z * CHUNK_SIZE_Z)`.
    pub fn world_offset(&self) -> Vector3<f32> {
        Vector3::new(
            (self.origin_x * CHUNK_SIZE_X as i32) as f32,
            0.0,
            (self.origin_z * CHUNK_SIZE_Z as i32) as f32,
        )
    }

    /// Returns `true` if `(x, y, z)` lies inside the chunk grid.
    pub fn contains(x: i64, y: i64, z: i64) -> bool {
        (0..CHUNK_SIZE_X as i64).contains(&x)
            && (0..CHUNK_SIZE_Y as i64).contains(&y)
            && (0..CHUNK_SIZE_Z as i64).contains(&z)
    }

    fn check_bounds(x: usize, y: usize, z: usize) -> ChunkResult<()> {
        if x < CHUNK_SIZE_X && y < CHUNK_SIZE_Y && z < CHUNK_SIZE_Z {
            Ok(())
        } else {
            Err(ChunkError::OutOfBounds { x, y, z })
        }
    }

    /// Gets the block at the specified chunk-relative coordinates.
    ///
    /// # Errors
    /// [`ChunkError::OutOfBounds`] if the coordinates are outside the grid.
    pub fn get_block(&self, x: usize, y: usize, z: usize) -> ChunkResult<BlockType> {
        Self::check_bounds(x, y, z)?;
        Ok(self.blocks[x][y][z])
    }

    /// Sets the block at the specified chunk-relative coordinates.
    ///
    /// The mesh is not touched; call `generate_mesh` once the edits are done.
    ///
    /// # Errors
    /// [`ChunkError::OutOfBounds`] if the coordinates are outside the grid.
    pub fn set_block(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        block_type: BlockType,
    ) -> ChunkResult<()> {
        Self::check_bounds(x, y, z)?;
        self.blocks[x][y][z] = block_type;
        Ok(())
    }

    /// Number of solid (non-air) blocks in the chunk.
    pub fn solid_count(&self) -> usize {
        self.blocks
            .iter()
            .flatten()
            .flatten()
            .filter(|block_type| block_type.is_solid())
            .count()
    }

    /// Determines whether `side` of the voxel at `(x, y, z)` must be drawn.
    ///
    /// A face is exposed when the neighbor across it lies outside the chunk
    /// (neighboring chunks are not consulted) or when the neighbor is air.
    ///
    /// # Panics
    /// Panics if `(x, y, z)` itself lies outside the grid.
    pub fn is_face_exposed(&self, x: usize, y: usize, z: usize, side: BlockSide) -> bool {
        assert!(
            x < CHUNK_SIZE_X && y < CHUNK_SIZE_Y && z < CHUNK_SIZE_Z,
            "voxel ({x}, {y}, {z}) is outside the chunk grid"
        );

        let offset = side.offset();
        let neighbor = Point3::new(
            x as i64 + offset.x as i64,
            y as i64 + offset.y as i64,
            z as i64 + offset.z as i64,
        );
        if !Self::contains(neighbor.x, neighbor.y, neighbor.z) {
            return true;
        }

        self.blocks[neighbor.x as usize][neighbor.y as usize][neighbor.z as usize].is_empty()
    }

    /// Geometry produced by the last call to `generate_mesh`.
    ///
    /// Empty until the chunk has been meshed at least once.
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }
}

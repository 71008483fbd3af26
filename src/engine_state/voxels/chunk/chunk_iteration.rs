//! # Chunk Iteration Module
//!
//! This module provides an iterator over the solid blocks of a chunk.
//!
//! ## Traversal Order
//!
//! Voxels are visited with X as the outer loop, Y as the middle loop and Z as
//! the inner loop. The mesher emits faces in this order, so the order is what
//! makes two builds of the same grid produce identical buffers.

use cgmath::Point3;

use crate::engine_state::voxels::block::block_type::BlockType;

use super::{Chunk, CHUNK_SIZE_Y, CHUNK_SIZE_Z, CHUNK_VOLUME};

/// Converts a linear traversal index into chunk coordinates.
#[inline]
pub fn position_from_index(index: usize) -> Point3<usize> {
    let z = index % CHUNK_SIZE_Z;
    let y = (index / CHUNK_SIZE_Z) % CHUNK_SIZE_Y;
    let x = index / (CHUNK_SIZE_Z * CHUNK_SIZE_Y);
    Point3::new(x, y, z)
}

/// An iterator over all non-air blocks in a chunk.
///
/// Air blocks are skipped entirely; they contribute no geometry of their own.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Linear index of the next voxel to inspect
    next_index: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned before the first voxel.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            next_index: 0,
        }
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<usize>, BlockType);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index < CHUNK_VOLUME {
            let position = position_from_index(self.next_index);
            self.next_index += 1;

            let block_type = self.chunk_ref.blocks[position.x][position.y][position.z];
            if block_type.is_solid() {
                return Some((position, block_type));
            }
        }

        None
    }
}

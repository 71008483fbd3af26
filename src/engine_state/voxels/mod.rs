//! # Voxel Engine Core
//!
//! This module contains the voxel data model: block types, block faces and
//! the chunk grid that owns its mesh buffers.
//!
//! ## Data Flow
//!
//! 1. World generation populates a chunk's block grid
//! 2. `Chunk::generate_mesh` culls hidden faces and assembles the mesh
//! 3. The renderer uploads the produced buffers and draws them every frame
//! 4. Block edits trigger another `generate_mesh`, reusing the same buffers

pub mod block;
pub mod chunk;

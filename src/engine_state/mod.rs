//! # Engine State Module
//!
//! The core of the mesher.
//!
//! ## Key Components
//!
//! * `voxels` - Block types, block faces and the chunk grid with its mesher
//! * `rendering` - Texture atlas layout, mesh buffers and the GPU upload adapter
//! * `camera_state` - First-person camera used to inspect the result
//! * `error` - Error types for chunk storage and meshing
//!
//! ## Architecture
//!
//! A chunk owns its block grid and its mesh buffers. `Chunk::generate_mesh`
//! reads the grid, asks the atlas for texture regions and writes the buffers
//! in place. Nothing in this module talks to the GPU except `rendering::gpu_mesh`,
//! which only reads finished buffers.

pub mod camera_state;
pub mod error;
pub mod rendering;
pub mod voxels;

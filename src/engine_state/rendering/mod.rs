//! Rendering side of the voxel engine.
//!
//! This module contains the texture atlas layout, the chunk mesher's output
//! buffers and face templates, and the thin adapter that hands finished
//! meshes to WebGPU.

pub mod atlas;
pub mod gpu_mesh;
pub mod meshing;
pub mod vertex;

// Re-export commonly used types
pub use gpu_mesh::{ChunkModel, GpuMesh};
pub use vertex::Vertex;

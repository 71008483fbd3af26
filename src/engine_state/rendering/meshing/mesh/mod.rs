//! Mesh generation building blocks for voxel rendering.
//!
//! # Architecture
//! - [`FaceTemplate`]: constant geometry of each of the six block faces
//! - [`MeshBuffers`]: flat, reusable vertex/normal/uv/index buffers a chunk
//!   mesh is assembled into
//!
//! The per-voxel traversal lives on the chunk itself (see
//! `Chunk::generate_mesh`), which consults the templates and appends into the
//! buffers it owns.

mod face;
#[allow(clippy::module_inception)]
mod mesh;

pub use face::{FaceTemplate, FACE_INDICES, FACE_TEMPLATES, FACE_UVS};
pub use mesh::*;

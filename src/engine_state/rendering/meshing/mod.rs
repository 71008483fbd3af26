//! Mesh generation for voxel rendering.
//!
//! This module turns voxel data into GPU-friendly geometry. Meshing is the
//! naive per-voxel, per-face algorithm: every face of a solid voxel that
//! borders air or the chunk boundary becomes one quad of two triangles.
//! Coplanar faces are never merged, so the output size is exactly
//! `4 vertices + 6 indices` per exposed face.
//!
//! # Performance Considerations
//! - Hidden faces are culled against the voxel's in-chunk neighbors, which
//!   keeps the mesh proportional to surface area rather than volume
//! - Buffers are owned by the chunk and reused across rebuilds
//! - 16-bit indices halve index memory; overflow is reported, never wrapped

mod mesh;

pub use mesh::*;

//! # Chunk Meshing Module
//!
//! Converts a chunk's block grid into a triangle mesh.
//!
//! For every solid voxel (in `ChunkBlockIterator` order) and every face (in
//! `BlockSide::all` order) the exposure test decides whether the face is
//! visible. Each visible face appends 4 vertices and 6 indices built from its
//! constant `FaceTemplate`, translated to the voxel position and textured
//! from the atlas region of `(block type, face)`.
//!
//! The output is a pure function of the grid: rebuilding an unchanged chunk
//! produces bit-identical buffers.

use log::debug;
use web_time::Instant;

use crate::engine_state::{
    error::MeshResult,
    rendering::{
        atlas::atlas_region,
        meshing::{FaceTemplate, MeshBuffers},
    },
    voxels::block::block_side::BlockSide,
};

use super::{chunk_iteration::ChunkBlockIterator, Chunk, CHUNK_SHELL_FACES};

impl Chunk {
    /// Rebuilds the chunk mesh from the current block grid.
    ///
    /// The first call allocates the mesh buffers with room for
    /// `CHUNK_SHELL_FACES` faces. Later calls truncate them and reuse their
    /// capacity, so a rebuild only allocates when it emits more faces than any
    /// earlier build did.
    ///
    /// A chunk without exposed faces (for example all air) yields an empty,
    /// valid mesh.
    ///
    /// # Errors
    /// - [`MeshError::IndexOverflow`](crate::MeshError::IndexOverflow) if the
    ///   mesh needs more vertices than 16-bit indices can address
    /// - [`MeshError::MissingAtlasRegion`](crate::MeshError::MissingAtlasRegion)
    ///   if a solid block type has no atlas mapping
    ///
    /// On error the buffers are left empty; no partial mesh is exposed.
    pub fn generate_mesh(&mut self) -> MeshResult<&MeshBuffers> {
        let start = Instant::now();

        let mut mesh = std::mem::take(&mut self.mesh);
        let capacity_before = mesh.capacity();
        mesh.begin(CHUNK_SHELL_FACES);

        let result = self.append_exposed_faces(&mut mesh);
        if result.is_err() {
            mesh.clear();
        }

        if capacity_before.positions != 0 && mesh.capacity() != capacity_before {
            debug!(
                "Chunk ({}, {}) mesh buffers grew from {:?} to {:?}",
                self.origin_x,
                self.origin_z,
                capacity_before,
                mesh.capacity()
            );
        }
        self.mesh = mesh;
        result?;

        debug!(
            "Meshed chunk ({}, {}): {} faces, {} vertices, {} triangles in {:?}",
            self.origin_x,
            self.origin_z,
            self.mesh.face_count(),
            self.mesh.vertex_count(),
            self.mesh.triangle_count(),
            start.elapsed()
        );

        Ok(&self.mesh)
    }

    /// Appends every exposed face of the chunk to `mesh`.
    fn append_exposed_faces(&self, mesh: &mut MeshBuffers) -> MeshResult<()> {
        for (position, block_type) in ChunkBlockIterator::new(self) {
            let origin = [position.x as f32, position.y as f32, position.z as f32];

            for side in BlockSide::all() {
                if !self.is_face_exposed(position.x, position.y, position.z, side) {
                    continue;
                }

                let region = atlas_region(block_type, side)?;
                mesh.push_face(origin, FaceTemplate::for_side(side), &region)?;
            }
        }

        Ok(())
    }
}

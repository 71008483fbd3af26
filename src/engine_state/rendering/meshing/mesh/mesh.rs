//! Reusable geometry buffers for chunk meshes.
//!
//! A [`MeshBuffers`] holds four flat sequences: positions (3 floats per
//! vertex), normals (3 floats per vertex), texture coordinates (2 floats per
//! vertex) and 16-bit indices (6 per face). Every face owns its 4 vertices;
//! nothing is shared between faces.
//!
//! The buffers are meant to live as long as their chunk. A rebuild truncates
//! them to length zero and keeps the capacity, so meshing the same chunk again
//! does not allocate unless it produces more faces than any earlier build.

use log::debug;

use crate::engine_state::{
    error::{MeshError, MeshResult},
    rendering::atlas::UvRegion,
};

use super::face::FaceTemplate;

/// Vertices a single 16-bit index buffer can address.
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Vertices emitted per face.
pub const VERTICES_PER_FACE: usize = 4;

/// Indices emitted per face.
pub const INDICES_PER_FACE: usize = 6;

/// Capacities of the four buffers, in elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity {
    /// Capacity of the position buffer, in floats.
    pub positions: usize,
    /// Capacity of the normal buffer, in floats.
    pub normals: usize,
    /// Capacity of the texture coordinate buffer, in floats.
    pub texcoords: usize,
    /// Capacity of the index buffer, in indices.
    pub indices: usize,
}

/// Flat vertex and index data of one chunk mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<f32>,
    normals: Vec<f32>,
    texcoords: Vec<f32>,
    indices: Vec<u16>,
}

impl MeshBuffers {
    /// Creates empty buffers. Nothing is allocated until the first build.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepares the buffers for a new build.
    ///
    /// Buffers that were never allocated reserve room for `reserve_faces`
    /// faces. Buffers that were allocated before are truncated to length zero
    /// and keep their capacity.
    pub(crate) fn begin(&mut self, reserve_faces: usize) {
        if self.positions.capacity() == 0 {
            let vertices = reserve_faces * VERTICES_PER_FACE;
            self.positions.reserve_exact(vertices * 3);
            self.normals.reserve_exact(vertices * 3);
            self.texcoords.reserve_exact(vertices * 2);
            self.indices.reserve_exact(reserve_faces * INDICES_PER_FACE);
            debug!("Reserved mesh buffers for {} faces", reserve_faces);
        } else {
            self.clear();
        }
    }

    /// Truncates all four buffers to length zero, keeping their capacity.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.texcoords.clear();
        self.indices.clear();
    }

    /// Appends one face.
    ///
    /// The template corners are translated by `origin`, texture coordinates are
    /// mapped into `region`, and the template index pattern is offset by the
    /// number of vertices emitted so far.
    ///
    /// # Errors
    /// [`MeshError::IndexOverflow`] if the face's vertices could not be
    /// addressed by 16-bit indices. Nothing is appended in that case.
    pub(crate) fn push_face(
        &mut self,
        origin: [f32; 3],
        template: &FaceTemplate,
        region: &UvRegion,
    ) -> MeshResult<()> {
        let vertex_count = self.vertex_count();
        if vertex_count + VERTICES_PER_FACE > MAX_VERTICES {
            return Err(MeshError::IndexOverflow { vertex_count });
        }
        let base = vertex_count as u16;

        for (corner, uv) in template.vertices.iter().zip(template.uvs.iter()) {
            self.positions.extend_from_slice(&[
                origin[0] + corner[0],
                origin[1] + corner[1],
                origin[2] + corner[2],
            ]);
            self.normals.extend_from_slice(&template.normal);
            self.texcoords.extend_from_slice(&region.map(*uv));
        }
        self.indices.extend(template.indices.iter().map(|index| base + index));

        Ok(())
    }

    /// Vertex positions, 3 floats per vertex.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Vertex normals, 3 floats per vertex.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Vertex texture coordinates, 2 floats per vertex.
    pub fn texcoords(&self) -> &[f32] {
        &self.texcoords
    }

    /// Triangle indices, 6 per face.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Number of vertices emitted.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles emitted.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of faces emitted.
    pub fn face_count(&self) -> usize {
        self.indices.len() / INDICES_PER_FACE
    }

    /// Returns `true` if the mesh has no drawable geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Current capacity of each buffer.
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity {
            positions: self.positions.capacity(),
            normals: self.normals.capacity(),
            texcoords: self.texcoords.capacity(),
            indices: self.indices.capacity(),
        }
    }

    /// Position of vertex `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`MeshBuffers::vertex_count`].
    pub fn position(&self, index: usize) -> [f32; 3] {
        let start = index * 3;
        [
            self.positions[start],
            self.positions[start + 1],
            self.positions[start + 2],
        ]
    }

    /// Iterates the emitted triangles as corner positions, in index order.
    ///
    /// This reads the same buffers that are handed to the renderer, which
    /// makes it suitable for wireframe overlays and geometry checks.
    pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |triangle| {
            [
                self.position(triangle[0] as usize),
                self.position(triangle[1] as usize),
                self.position(triangle[2] as usize),
            ]
        })
    }
}

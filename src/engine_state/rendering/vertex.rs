//! Vertex data structures and layouts for voxel rendering.
//!
//! The mesher produces flat per-attribute buffers. This module interleaves
//! them into the vertex format the chunk shader consumes.

use crate::engine_state::rendering::meshing::MeshBuffers;

/// A vertex in the voxel rendering pipeline.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Chunk-local position
    pub position: [f32; 3],
    /// Face normal
    pub normal: [f32; 3],
    /// Atlas texture coordinates (normalized 0.0-1.0)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Returns the vertex buffer layout description for the shader pipeline.
    ///
    /// # Shader Attributes
    /// - `location = 0`: position (vec3<f32>)
    /// - `location = 1`: normal (vec3<f32>)
    /// - `location = 2`: tex_coords (vec2<f32>)
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Interleaves `mesh` into `out`, replacing its previous contents.
///
/// `out` keeps its capacity, so the same vector can be reused for every upload.
pub fn interleave(mesh: &MeshBuffers, out: &mut Vec<Vertex>) {
    out.clear();
    out.extend(
        mesh.positions()
            .chunks_exact(3)
            .zip(mesh.normals().chunks_exact(3))
            .zip(mesh.texcoords().chunks_exact(2))
            .map(|((position, normal), uv)| Vertex {
                position: [position[0], position[1], position[2]],
                normal: [normal[0], normal[1], normal[2]],
                tex_coords: [uv[0], uv[1]],
            }),
    );
}

//! GPU-side copies of chunk meshes.
//!
//! The host owns the device, queue and render pipeline. This module only turns
//! a chunk's `MeshBuffers` into vertex/index buffers and records the draw.

use cgmath::Matrix4;
use log::debug;
use wgpu::util::DeviceExt;

use crate::engine_state::voxels::chunk::Chunk;

use super::{
    meshing::MeshBuffers,
    vertex::{interleave, Vertex},
};

/// Per-chunk model transform, laid out for a uniform buffer.
///
/// Mesh positions are chunk-local; this matrix places them in the world.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChunkModel {
    model: [[f32; 4]; 4],
}

impl ChunkModel {
    /// Builds the model transform for `chunk`.
    pub fn for_chunk(chunk: &Chunk) -> Self {
        Self {
            model: Matrix4::from_translation(chunk.world_offset()).into(),
        }
    }

    /// The model matrix as a column-major array.
    pub fn matrix(&self) -> [[f32; 4]; 4] {
        self.model
    }
}

/// Vertex and index buffers holding one uploaded chunk mesh.
///
/// A mesh without geometry uploads nothing; drawing it records no commands.
#[derive(Debug)]
pub struct GpuMesh {
    /// Interleaved `Vertex` data
    vertex_buffer: Option<wgpu::Buffer>,
    /// `u16` indices into `vertex_buffer`
    index_buffer: Option<wgpu::Buffer>,
    /// Number of indices to draw
    index_count: u32,
}

impl GpuMesh {
    /// Uploads `mesh` to the GPU.
    ///
    /// # Arguments
    /// * `device` - Device that creates the buffers
    /// * `label` - Debug label attached to both buffers
    /// * `mesh` - The mesh to copy
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &MeshBuffers) -> Self {
        if mesh.is_empty() {
            return Self::empty();
        }

        let mut vertices: Vec<Vertex> = Vec::with_capacity(mesh.vertex_count());
        interleave(mesh, &mut vertices);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        debug!(
            "Uploaded mesh '{}': {} vertices, {} indices",
            label,
            vertices.len(),
            mesh.indices().len()
        );

        Self {
            vertex_buffer: Some(vertex_buffer),
            index_buffer: Some(index_buffer),
            index_count: mesh.indices().len() as u32,
        }
    }

    /// A mesh with no GPU buffers.
    pub fn empty() -> Self {
        Self {
            vertex_buffer: None,
            index_buffer: None,
            index_count: 0,
        }
    }

    /// Number of indices the draw call covers.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Returns `true` if nothing was uploaded.
    pub fn is_empty(&self) -> bool {
        self.index_count == 0
    }

    /// Records the draw of this mesh into `render_pass`.
    ///
    /// The caller binds the pipeline and the `ChunkModel` uniform first.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&self.vertex_buffer, &self.index_buffer)
        else {
            return;
        };

        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

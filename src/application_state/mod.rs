//! # Application State Management
//!
//! This module wires settings, input and the engine together:
//! - Settings loading
//! - Input collection and per-frame snapshots
//! - Building, editing and re-meshing the configured chunk
//! - Driving the camera from input

pub mod input_manager;
pub mod input_state;
pub mod settings;

use input_manager::InputManager;
use log::info;
use settings::{Settings, SettingsError};
use thiserror::Error;
use web_time::{Duration, Instant};
use winit::event::WindowEvent;

use crate::engine_state::{
    camera_state::CameraState,
    error::{ChunkError, MeshError},
    rendering::{meshing::MeshBuffers, ChunkModel},
    voxels::{block::block_type::BlockType, chunk::Chunk},
};

/// Viewport size used until the host reports its real size.
pub const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

/// Any failure while starting up or editing the world.
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// A chunk edit or generation failed.
    #[error(transparent)]
    Chunk(#[from] ChunkError),
    /// The chunk could not be meshed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// The running application: one meshed chunk and a camera looking at it.
///
/// The host owns the window and the GPU. It forwards window events here,
/// calls `frame` once per frame and uploads `chunk().mesh()` whenever
/// `rebuild` or `set_block` returned.
pub struct ApplicationState {
    /// Loaded settings
    pub settings: Settings,
    /// The chunk being displayed
    chunk: Chunk,
    /// Camera and its uniform data
    pub camera_state: CameraState,
    /// Manages input state and event processing
    pub input_manager: InputManager,
    /// Timestamp of the last frame for delta time calculations
    last_frame: Instant,
}

impl ApplicationState {
    /// Builds the configured chunk, fills it and generates its first mesh.
    ///
    /// # Errors
    /// Propagates terrain generation and meshing failures.
    pub fn new(settings: Settings) -> Result<Self, ApplicationError> {
        let world = &settings.world;
        let mut chunk = Chunk::new(world.chunk_x, world.chunk_z);
        world.generator.populate(&mut chunk)?;

        let solid_count = chunk.solid_count();
        let mesh = chunk.generate_mesh()?;
        info!(
            "Chunk ({}, {}) meshed: {} solid blocks, {} faces, {} vertices, {} indices",
            world.chunk_x,
            world.chunk_z,
            solid_count,
            mesh.face_count(),
            mesh.vertex_count(),
            mesh.indices().len()
        );

        let (width, height) = DEFAULT_VIEWPORT;
        let camera_state = CameraState::new(settings.camera.clone(), width, height);

        Ok(Self {
            settings,
            chunk,
            camera_state,
            input_manager: InputManager::new(),
            last_frame: Instant::now(),
        })
    }

    /// The chunk being displayed.
    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    /// Model transform for the displayed chunk.
    pub fn chunk_model(&self) -> ChunkModel {
        ChunkModel::for_chunk(&self.chunk)
    }

    /// Replaces one block and rebuilds the mesh.
    ///
    /// # Errors
    /// [`ChunkError::OutOfBounds`] for coordinates outside the chunk, or a
    /// meshing error. An out-of-bounds edit leaves the current mesh intact.
    pub fn set_block(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        block_type: BlockType,
    ) -> Result<&MeshBuffers, ApplicationError> {
        self.chunk.set_block(x, y, z, block_type)?;
        self.rebuild()
    }

    /// Regenerates the chunk mesh from the current blocks.
    pub fn rebuild(&mut self) -> Result<&MeshBuffers, ApplicationError> {
        Ok(self.chunk.generate_mesh()?)
    }

    /// Forwards a window event to the input manager.
    pub fn window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::Focused(false) = event {
            self.input_manager.reset_inputs();
        }
        self.input_manager.intake_input(event);
    }

    /// Forwards raw mouse motion to the input manager.
    pub fn mouse_motion(&mut self, delta: (f64, f64)) {
        self.input_manager.intake_mouse_motion(delta);
    }

    /// Advances one frame using the wall-clock time since the previous frame.
    ///
    /// # Returns
    /// `true` if the camera uniform changed
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.step(dt)
    }

    /// Advances one frame of length `dt`.
    pub fn step(&mut self, dt: Duration) -> bool {
        let input = self.input_manager.take_snapshot();
        self.camera_state.update(dt, &input)
    }
}

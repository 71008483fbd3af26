#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Mesher
//!
//! Turns fixed-size voxel chunks into triangle meshes ready for WebGPU.
//!
//! Only faces between a solid block and air (or the chunk border) are
//! emitted. Each face gets 4 vertices with position, normal and texture
//! coordinates and 6 `u16` indices. Texture coordinates select one strip of a
//! three-strip atlas: top, side or bottom.
//!
//! ## Key Modules
//!
//! * `engine_state` - Chunks, meshing, atlas layout, GPU upload and camera
//! * `application_state` - Settings, input and startup
//!
//! ## Usage
//!
//! ```
//! use voxel_mesher::{BlockType, Chunk};
//!
//! let mut chunk = Chunk::new(0, 0);
//! chunk.set_block(1, 2, 3, BlockType::GRASS).unwrap();
//!
//! let mesh = chunk.generate_mesh().unwrap();
//! assert_eq!(mesh.face_count(), 6);
//! assert_eq!(mesh.indices().len(), 36);
//! ```
//!
//! ## Performance Considerations
//!
//! * Each chunk keeps its mesh buffers and reuses their capacity on every rebuild
//! * Face geometry comes from constant templates; no per-face allocation
//! * Indices are 16 bit; a mesh that would need more vertices is rejected

use log::{error, info};

pub mod application_state;
pub mod engine_state;

pub use application_state::{
    input_manager::InputManager,
    input_state::{InputSnapshot, RawInputState},
    settings::{Settings, SettingsError, TerrainGenerator, WorldSettings},
    ApplicationError, ApplicationState,
};
pub use engine_state::{
    camera_state::{Camera, CameraSettings, CameraState, CameraUniform, Facing, Projection},
    error::{ChunkError, ChunkResult, MeshError, MeshResult},
    rendering::{
        atlas::{atlas_region, AtlasStrip, UvRegion},
        meshing::{FaceTemplate, MeshBuffers, FACE_TEMPLATES},
        vertex::interleave,
        ChunkModel, GpuMesh, Vertex,
    },
    voxels::{
        block::{block_side::BlockSide, block_type::BlockType},
        chunk::{Chunk, CHUNK_SHELL_FACES, CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z, CHUNK_VOLUME},
    },
};

/// Settings file read by `run`, relative to the working directory.
pub const SETTINGS_PATH: &str = "settings.json";

/// Initializes logging, loads the settings and builds and meshes the configured chunk.
///
/// # Errors
/// Returns the first settings, generation or meshing error.
pub fn run() -> Result<(), ApplicationError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let settings = Settings::load_or_default(SETTINGS_PATH).inspect_err(|err| error!("{err}"))?;
    let state = ApplicationState::new(settings).inspect_err(|err| error!("{err}"))?;

    let mesh = state.chunk().mesh();
    info!(
        "Mesh ready: {} triangles, camera facing {}",
        mesh.triangle_count(),
        state.camera_state.camera.facing()
    );

    Ok(())
}

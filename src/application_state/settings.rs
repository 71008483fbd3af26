//! # Settings
//!
//! JSON settings for the mesher binary. Every field has a default, so a
//! partial (or missing) settings file is valid.

use std::{fs, io, path::Path, path::PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine_state::{
    camera_state::CameraSettings,
    error::ChunkResult,
    voxels::{block::block_type::BlockType, chunk::Chunk},
};

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid settings JSON.
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the chunk's blocks are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerrainGenerator {
    /// Grass columns of a fixed height.
    Flat {
        /// Height of every column
        height: usize,
    },
    /// Perlin noise heightmap.
    Perlin {
        /// Noise seed
        seed: u32,
        /// Height where the noise is zero
        base_height: f64,
        /// Height variation
        amplitude: f64,
    },
    /// Seeded random blocks.
    Random {
        /// Probability of a block being air
        sparseness: f64,
        /// Random seed
        seed: u64,
    },
    /// Every voxel set to one block type, given by raw id.
    Fill {
        /// Block type of every voxel
        block: BlockType,
    },
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        TerrainGenerator::Flat { height: 4 }
    }
}

impl TerrainGenerator {
    /// Fills `chunk` with this generator's terrain.
    pub fn populate(&self, chunk: &mut Chunk) -> ChunkResult<()> {
        match *self {
            TerrainGenerator::Flat { height } => chunk.generate_flat(height),
            TerrainGenerator::Perlin {
                seed,
                base_height,
                amplitude,
            } => {
                chunk.generate_perlin(seed, base_height, amplitude);
                Ok(())
            }
            TerrainGenerator::Random { sparseness, seed } => {
                chunk.generate_random(sparseness, seed);
                Ok(())
            }
            TerrainGenerator::Fill { block } => {
                chunk.fill(block);
                Ok(())
            }
        }
    }
}

/// Which chunk to build and how to fill it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// X position of the chunk on the chunk grid
    pub chunk_x: i32,
    /// Z position of the chunk on the chunk grid
    pub chunk_z: i32,
    /// Terrain generator
    pub generator: TerrainGenerator,
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Camera settings
    pub camera: CameraSettings,
    /// World settings
    pub world: WorldSettings,
}

impl Settings {
    /// Parses settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the settings file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Like `load`, but a missing file yields the default settings.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(SettingsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                info!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }
}

//! # Chunk Creation Module
//!
//! World-generation helpers that populate a chunk's block grid. None of them
//! touch the mesh; call `Chunk::generate_mesh` afterwards.

use noise::{NoiseFn, Perlin};

use crate::engine_state::{
    error::{ChunkError, ChunkResult},
    voxels::block::block_type::BlockType,
};

use super::{Chunk, CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z};

/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

impl Chunk {
    /// Sets every block of the chunk to `block_type`.
    pub fn fill(&mut self, block_type: BlockType) {
        for column in self.blocks.iter_mut().flatten() {
            column.fill(block_type);
        }
    }

    /// Sets every block of the chunk to air.
    pub fn clear(&mut self) {
        self.fill(BlockType::AIR);
    }

    /// Fills every column from `y = 0` up to (excluding) `height` with grass.
    ///
    /// Blocks at or above `height` are left as they are.
    ///
    /// # Errors
    /// [`ChunkError::HeightOutOfRange`] if `height` exceeds `CHUNK_SIZE_Y`.
    pub fn generate_flat(&mut self, height: usize) -> ChunkResult<()> {
        if height > CHUNK_SIZE_Y {
            return Err(ChunkError::HeightOutOfRange {
                height,
                max: CHUNK_SIZE_Y,
            });
        }

        for plane in self.blocks.iter_mut() {
            for row in plane.iter_mut().take(height) {
                row.fill(BlockType::GRASS);
            }
        }

        Ok(())
    }

    /// Generates heightmap terrain from 2D Perlin noise.
    ///
    /// Each column is sampled at its world position, so neighboring chunks
    /// generated with the same parameters line up. Column heights are
    /// `base_height + noise * amplitude`, clamped to `1..=CHUNK_SIZE_Y`.
    /// Blocks below the height become grass, blocks above it become air.
    ///
    /// # Arguments
    /// * `seed` - Perlin seed
    /// * `base_height` - Height of a column where the noise is zero
    /// * `amplitude` - Height variation for a noise value of one
    pub fn generate_perlin(&mut self, seed: u32, base_height: f64, amplitude: f64) {
        let perlin = Perlin::new(seed);
        let world_x = self.origin_x as f64 * CHUNK_SIZE_X as f64;
        let world_z = self.origin_z as f64 * CHUNK_SIZE_Z as f64;

        for (x, plane) in self.blocks.iter_mut().enumerate() {
            for z in 0..CHUNK_SIZE_Z {
                let sample = perlin.get([
                    (world_x + x as f64) * PERLIN_SCALE_FACTOR,
                    (world_z + z as f64) * PERLIN_SCALE_FACTOR,
                ]);
                let height = (base_height + sample * amplitude)
                    .round()
                    .clamp(1.0, CHUNK_SIZE_Y as f64) as usize;

                for (y, row) in plane.iter_mut().enumerate() {
                    row[z] = if y < height {
                        BlockType::GRASS
                    } else {
                        BlockType::AIR
                    };
                }
            }
        }
    }

    /// Fills the chunk with randomly placed grass blocks.
    ///
    /// # Arguments
    /// * `sparseness` - Probability of a block being air
    /// * `seed` - Seed of the random generator; equal seeds give equal grids
    pub fn generate_random(&mut self, sparseness: f64, seed: u64) {
        let mut rng = fastrand::Rng::with_seed(seed);

        for block in self.blocks.iter_mut().flatten().flatten() {
            *block = if rng.f64() < sparseness {
                BlockType::AIR
            } else {
                BlockType::GRASS
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_fills_columns_below_height() {
        let mut chunk = Chunk::new(0, 0);
        chunk.generate_flat(4).unwrap();

        assert_eq!(chunk.solid_count(), CHUNK_SIZE_X * CHUNK_SIZE_Z * 4);
        assert_eq!(chunk.get_block(15, 3, 15), Ok(BlockType::GRASS));
        assert_eq!(chunk.get_block(0, 4, 0), Ok(BlockType::AIR));
    }

    #[test]
    fn flat_rejects_heights_above_the_chunk() {
        let mut chunk = Chunk::new(0, 0);
        assert_eq!(
            chunk.generate_flat(CHUNK_SIZE_Y + 1),
            Err(ChunkError::HeightOutOfRange {
                height: CHUNK_SIZE_Y + 1,
                max: CHUNK_SIZE_Y
            })
        );
        chunk.generate_flat(CHUNK_SIZE_Y).unwrap();
        assert_eq!(chunk.solid_count(), CHUNK_SIZE_X * CHUNK_SIZE_Y * CHUNK_SIZE_Z);
    }

    #[test]
    fn perlin_columns_are_contiguous_and_in_range() {
        let mut chunk = Chunk::new(2, -3);
        chunk.generate_perlin(7, 20.0, 12.0);

        for x in 0..CHUNK_SIZE_X {
            for z in 0..CHUNK_SIZE_Z {
                let height = (0..CHUNK_SIZE_Y)
                    .take_while(|&y| chunk.get_block(x, y, z).unwrap().is_solid())
                    .count();
                assert!(height >= 1);
                for y in height..CHUNK_SIZE_Y {
                    assert!(chunk.get_block(x, y, z).unwrap().is_empty());
                }
            }
        }
    }

    #[test]
    fn random_fill_is_seeded() {
        let mut a = Chunk::new(0, 0);
        let mut b = Chunk::new(0, 0);
        a.generate_random(0.7, 42);
        b.generate_random(0.7, 42);

        assert_eq!(a.blocks, b.blocks);
        assert!(a.solid_count() > 0);
    }

    #[test]
    fn clear_removes_everything() {
        let mut chunk = Chunk::new(0, 0);
        chunk.fill(BlockType::GRASS);
        chunk.clear();
        assert_eq!(chunk.solid_count(), 0);
    }
}

//! Texture atlas mapping.
//!
//! All block textures live in one shared atlas. The atlas is split into three
//! equal vertical strips along U: strip 0 holds top faces, strip 1 side faces
//! and strip 2 bottom faces. Each strip spans the whole V range.
//!
//! The mesher only ever asks for a `(block type, face)` pair, so a larger
//! block palette can later share the atlas without touching the meshing code.

use crate::engine_state::{
    error::{MeshError, MeshResult},
    voxels::block::{block_side::BlockSide, block_type::BlockType},
};

/// Number of strips the atlas is divided into.
pub const ATLAS_STRIPS: usize = 3;

/// The face groups a block type textures separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtlasStrip {
    /// Upward facing faces.
    TOP = 0,
    /// The four horizontal facing faces.
    SIDE = 1,
    /// Downward facing faces.
    BOTTOM = 2,
}

impl From<BlockSide> for AtlasStrip {
    fn from(side: BlockSide) -> Self {
        match side {
            BlockSide::TOP => AtlasStrip::TOP,
            BlockSide::BOTTOM => AtlasStrip::BOTTOM,
            BlockSide::RIGHT | BlockSide::LEFT | BlockSide::FRONT | BlockSide::BACK => {
                AtlasStrip::SIDE
            }
        }
    }
}

/// Maps each block type to the atlas strip of every face.
///
/// The outer array is indexed by `BlockType` as a `usize`; `None` marks block
/// types that never produce geometry. The inner array follows the
/// [`BlockSide::all`] order: [Right, Left, Top, Bottom, Front, Back]
pub static BLOCK_TYPE_TO_ATLAS_STRIPS: [Option<[AtlasStrip; 6]>; 2] = [
    None, // AIR
    Some([
        AtlasStrip::SIDE,
        AtlasStrip::SIDE,
        AtlasStrip::TOP,
        AtlasStrip::BOTTOM,
        AtlasStrip::SIDE,
        AtlasStrip::SIDE,
    ]), // GRASS
];

/// A rectangle inside the atlas in normalized texture coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRegion {
    /// Left edge.
    pub min_u: f32,
    /// Top edge.
    pub min_v: f32,
    /// Right edge.
    pub max_u: f32,
    /// Bottom edge.
    pub max_v: f32,
}

impl UvRegion {
    /// The region covered by one atlas strip.
    pub fn for_strip(strip: AtlasStrip) -> Self {
        let width = 1.0 / ATLAS_STRIPS as f32;
        let index = strip as usize as f32;
        UvRegion {
            min_u: index * width,
            min_v: 0.0,
            max_u: (index + 1.0) * width,
            max_v: 1.0,
        }
    }

    /// Maps a face-local coordinate (`0..=1` on both axes) into this region.
    #[inline]
    pub fn map(&self, local: [f32; 2]) -> [f32; 2] {
        [
            self.min_u + local[0] * (self.max_u - self.min_u),
            self.min_v + local[1] * (self.max_v - self.min_v),
        ]
    }
}

/// Resolves the atlas region used by `side` of a `block_type` block.
///
/// # Errors
/// [`MeshError::MissingAtlasRegion`] when the block type has no entry in
/// [`BLOCK_TYPE_TO_ATLAS_STRIPS`]. There is no fallback region.
pub fn atlas_region(block_type: BlockType, side: BlockSide) -> MeshResult<UvRegion> {
    BLOCK_TYPE_TO_ATLAS_STRIPS
        .get(block_type.raw() as usize)
        .copied()
        .flatten()
        .map(|strips| UvRegion::for_strip(strips[side.index()]))
        .ok_or(MeshError::MissingAtlasRegion { block_type, side })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grass_faces_use_their_strip() {
        for side in BlockSide::all() {
            let region = atlas_region(BlockType::GRASS, side).unwrap();
            assert_eq!(region, UvRegion::for_strip(AtlasStrip::from(side)));
        }
    }

    #[test]
    fn air_has_no_region() {
        assert_eq!(
            atlas_region(BlockType::AIR, BlockSide::TOP),
            Err(MeshError::MissingAtlasRegion {
                block_type: BlockType::AIR,
                side: BlockSide::TOP,
            })
        );
    }

    #[test]
    fn map_interpolates_within_region() {
        let region = UvRegion::for_strip(AtlasStrip::SIDE);
        assert_eq!(region.map([0.0, 0.0]), [region.min_u, 0.0]);
        assert_eq!(region.map([1.0, 1.0]), [region.max_u, 1.0]);
    }
}

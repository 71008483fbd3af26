//! Precomputed face geometry.
//!
//! Every block face is emitted from one of six constant templates. A template
//! stores the four quad corners relative to the voxel center, the outward
//! normal, the face-local texture coordinates of each corner and the index
//! pattern splitting the quad into two triangles.
//!
//! Corners are listed counter-clockwise when viewed from outside the block, so
//! `(v1 - v0) x (v2 - v0)` points along the normal for both triangles of the
//! `[0, 1, 2, 2, 3, 0]` pattern.

use crate::engine_state::voxels::block::block_side::BlockSide;

/// Index pattern shared by every face: two triangles over the diagonal 0-2.
pub const FACE_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Face-local texture coordinates of the four corners.
pub const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Constant geometry of one block face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTemplate {
    /// Quad corners relative to the voxel center, in emission order.
    pub vertices: [[f32; 3]; 4],
    /// Outward normal, shared by all four corners.
    pub normal: [f32; 3],
    /// Face-local texture coordinates of each corner.
    pub uvs: [[f32; 2]; 4],
    /// Triangle indices relative to the first corner of the face.
    pub indices: [u16; 6],
}

const RIGHT_TEMPLATE: FaceTemplate = FaceTemplate {
    vertices: [
        [0.5, -0.5, 0.5],  // lower left
        [0.5, -0.5, -0.5], // lower right
        [0.5, 0.5, -0.5],  // upper right
        [0.5, 0.5, 0.5],   // upper left
    ],
    normal: [1.0, 0.0, 0.0],
    uvs: FACE_UVS,
    indices: FACE_INDICES,
};

const LEFT_TEMPLATE: FaceTemplate = FaceTemplate {
    vertices: [
        [-0.5, -0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, 0.5, -0.5],
    ],
    normal: [-1.0, 0.0, 0.0],
    uvs: FACE_UVS,
    indices: FACE_INDICES,
};

const TOP_TEMPLATE: FaceTemplate = FaceTemplate {
    vertices: [
        [-0.5, 0.5, -0.5],
        [-0.5, 0.5, 0.5],
        [0.5, 0.5, 0.5],
        [0.5, 0.5, -0.5],
    ],
    normal: [0.0, 1.0, 0.0],
    uvs: FACE_UVS,
    indices: FACE_INDICES,
};

const BOTTOM_TEMPLATE: FaceTemplate = FaceTemplate {
    vertices: [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, -0.5, 0.5],
        [-0.5, -0.5, 0.5],
    ],
    normal: [0.0, -1.0, 0.0],
    uvs: FACE_UVS,
    indices: FACE_INDICES,
};

const FRONT_TEMPLATE: FaceTemplate = FaceTemplate {
    vertices: [
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ],
    normal: [0.0, 0.0, 1.0],
    uvs: FACE_UVS,
    indices: FACE_INDICES,
};

const BACK_TEMPLATE: FaceTemplate = FaceTemplate {
    vertices: [
        [0.5, -0.5, -0.5],
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5],
    ],
    normal: [0.0, 0.0, -1.0],
    uvs: FACE_UVS,
    indices: FACE_INDICES,
};

/// All face templates in [`BlockSide::all`] order.
pub static FACE_TEMPLATES: [FaceTemplate; 6] = [
    RIGHT_TEMPLATE,
    LEFT_TEMPLATE,
    TOP_TEMPLATE,
    BOTTOM_TEMPLATE,
    FRONT_TEMPLATE,
    BACK_TEMPLATE,
];

impl FaceTemplate {
    /// Returns the constant template of `side`.
    #[inline]
    pub fn for_side(side: BlockSide) -> &'static FaceTemplate {
        &FACE_TEMPLATES[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, Vector3};

    use super::*;

    fn corner(template: &FaceTemplate, i: usize) -> Vector3<f32> {
        let [x, y, z] = template.vertices[i];
        Vector3::new(x, y, z)
    }

    #[test]
    fn template_normals_match_side_offsets() {
        for side in BlockSide::all() {
            let normal = FaceTemplate::for_side(side).normal;
            let expected = side.normal();
            assert_eq!(normal, [expected.x, expected.y, expected.z], "{side:?}");
        }
    }

    #[test]
    fn both_triangles_wind_towards_the_normal() {
        for side in BlockSide::all() {
            let template = FaceTemplate::for_side(side);
            let [nx, ny, nz] = template.normal;
            let normal = Vector3::new(nx, ny, nz);
            for triangle in template.indices.chunks(3) {
                let a = corner(template, triangle[0] as usize);
                let b = corner(template, triangle[1] as usize);
                let c = corner(template, triangle[2] as usize);
                let cross = (b - a).cross(c - a);
                assert!(cross.dot(normal) > 0.0, "{side:?} triangle {triangle:?}");
                assert!(cross.normalize().dot(normal) > 0.999, "{side:?} is not planar");
            }
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for side in BlockSide::all() {
            let template = FaceTemplate::for_side(side);
            let normal = side.normal();
            for i in 0..4 {
                assert_eq!(corner(template, i).dot(normal), 0.5, "{side:?} corner {i}");
            }
        }
    }
}

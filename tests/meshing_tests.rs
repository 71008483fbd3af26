use cgmath::{InnerSpace, Vector3};
use voxel_mesher::{
    BlockSide, BlockType, Chunk, ChunkError, MeshBuffers, MeshError, CHUNK_SHELL_FACES,
    CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z,
};

/// One emitted face, read back from the flat buffers.
struct Face {
    corners: [Vector3<f32>; 4],
    normal: Vector3<f32>,
    uvs: [[f32; 2]; 4],
}

fn faces(mesh: &MeshBuffers) -> Vec<Face> {
    let vector = |slice: &[f32]| Vector3::new(slice[0], slice[1], slice[2]);

    mesh.positions()
        .chunks_exact(12)
        .zip(mesh.normals().chunks_exact(12))
        .zip(mesh.texcoords().chunks_exact(8))
        .map(|((positions, normals), uvs)| Face {
            corners: [
                vector(&positions[0..3]),
                vector(&positions[3..6]),
                vector(&positions[6..9]),
                vector(&positions[9..12]),
            ],
            normal: vector(&normals[0..3]),
            uvs: [
                [uvs[0], uvs[1]],
                [uvs[2], uvs[3]],
                [uvs[4], uvs[5]],
                [uvs[6], uvs[7]],
            ],
        })
        .collect()
}

/// Voxel a face belongs to: its center sits half a block along the normal.
fn owning_voxel(face: &Face) -> [i64; 3] {
    let center = (face.corners[0] + face.corners[1] + face.corners[2] + face.corners[3]) / 4.0;
    let voxel = center - face.normal * 0.5;
    [voxel.x.round() as i64, voxel.y.round() as i64, voxel.z.round() as i64]
}

fn side_of(normal: Vector3<f32>) -> BlockSide {
    BlockSide::all()
        .into_iter()
        .find(|side| side.normal() == normal)
        .expect("normal is axis aligned")
}

fn terrain_chunk() -> Chunk {
    let mut chunk = Chunk::new(1, -2);
    chunk.generate_perlin(11, 24.0, 10.0);
    // a floating block and a hole to break up the heightmap
    chunk.set_block(4, 60, 4, BlockType::GRASS).unwrap();
    chunk.set_block(8, 0, 8, BlockType::AIR).unwrap();
    chunk
}

#[test]
fn rebuilding_an_unchanged_chunk_is_deterministic() {
    let mut chunk = terrain_chunk();
    let first = chunk.generate_mesh().unwrap().clone();
    let second = chunk.generate_mesh().unwrap().clone();
    assert_eq!(first, second);

    let mut copy = terrain_chunk();
    assert_eq!(copy.generate_mesh().unwrap(), &first);
}

#[test]
fn rebuilds_reuse_buffer_capacity() {
    let mut chunk = Chunk::new(0, 0);
    chunk.generate_flat(4).unwrap();
    chunk.generate_mesh().unwrap();
    let capacity = chunk.mesh().capacity();

    chunk.generate_mesh().unwrap();
    assert_eq!(chunk.mesh().capacity(), capacity);

    chunk.fill(BlockType::GRASS);
    assert_eq!(chunk.generate_mesh().unwrap().face_count(), CHUNK_SHELL_FACES);
    assert_eq!(chunk.mesh().capacity(), capacity);

    chunk.clear();
    chunk.generate_flat(4).unwrap();
    assert_eq!(chunk.generate_mesh().unwrap().face_count(), 768);
    assert_eq!(chunk.mesh().capacity(), capacity);
}

#[test]
fn every_face_borders_air_or_the_chunk_boundary() {
    let mut chunk = terrain_chunk();
    let mesh = chunk.generate_mesh().unwrap().clone();
    let faces = faces(&mesh);
    assert!(!faces.is_empty());

    for face in &faces {
        let [x, y, z] = owning_voxel(face);
        let side = side_of(face.normal);
        assert!(chunk.get_block(x as usize, y as usize, z as usize).unwrap().is_solid());

        let offset = side.offset();
        let neighbor = (x + offset.x as i64, y + offset.y as i64, z + offset.z as i64);
        if Chunk::contains(neighbor.0, neighbor.1, neighbor.2) {
            let block = chunk
                .get_block(neighbor.0 as usize, neighbor.1 as usize, neighbor.2 as usize)
                .unwrap();
            assert!(block.is_empty(), "face {side:?} of ({x}, {y}, {z}) is hidden");
        }
    }
}

#[test]
fn every_exposed_face_is_emitted_exactly_once() {
    let mut chunk = terrain_chunk();
    let mesh = chunk.generate_mesh().unwrap().clone();

    let mut expected = 0;
    for x in 0..CHUNK_SIZE_X {
        for y in 0..CHUNK_SIZE_Y {
            for z in 0..CHUNK_SIZE_Z {
                if chunk.get_block(x, y, z).unwrap().is_solid() {
                    expected += BlockSide::all()
                        .into_iter()
                        .filter(|side| chunk.is_face_exposed(x, y, z, *side))
                        .count();
                }
            }
        }
    }

    assert_eq!(mesh.face_count(), expected);
    assert_eq!(mesh.vertex_count(), expected * 4);
    assert_eq!(mesh.indices().len(), expected * 6);
}

#[test]
fn all_air_chunk_produces_an_empty_mesh() {
    let mut chunk = Chunk::new(0, 0);
    let mesh = chunk.generate_mesh().unwrap();

    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangles().count(), 0);
}

#[test]
fn blocks_on_the_chunk_corners_keep_all_faces() {
    let mut chunk = Chunk::new(0, 0);
    chunk.set_block(0, 0, 0, BlockType::GRASS).unwrap();
    chunk
        .set_block(CHUNK_SIZE_X - 1, CHUNK_SIZE_Y - 1, CHUNK_SIZE_Z - 1, BlockType::GRASS)
        .unwrap();

    assert_eq!(chunk.generate_mesh().unwrap().face_count(), 12);
}

#[test]
fn triangles_wind_counter_clockwise_around_their_normal() {
    let mut chunk = terrain_chunk();
    let mesh = chunk.generate_mesh().unwrap();
    let normals = mesh.normals();

    for (i, [a, b, c]) in mesh.triangles().enumerate() {
        let (a, b, c) = (Vector3::from(a), Vector3::from(b), Vector3::from(c));
        let first_index = mesh.indices()[i * 3] as usize;
        let normal = Vector3::new(
            normals[first_index * 3],
            normals[first_index * 3 + 1],
            normals[first_index * 3 + 2],
        );

        let winding = (b - a).cross(c - a);
        assert!((winding.magnitude() - 1.0).abs() < 1e-5);
        assert!(winding.normalize().dot(normal) > 0.999);
    }
}

#[test]
fn indices_stay_inside_the_vertex_buffer() {
    let mut chunk = Chunk::new(0, 0);
    chunk.generate_random(0.8, 1234);
    let mesh = chunk.generate_mesh().unwrap();

    assert!(mesh.indices().iter().all(|&index| (index as usize) < mesh.vertex_count()));
    assert_eq!(mesh.indices().len() % 6, 0);
}

#[test]
fn texture_coordinates_use_the_face_strip() {
    let mut chunk = terrain_chunk();
    let mesh = chunk.generate_mesh().unwrap().clone();

    for face in faces(&mesh) {
        let (min_u, max_u) = match side_of(face.normal) {
            BlockSide::TOP => (0.0, 1.0 / 3.0),
            BlockSide::BOTTOM => (2.0 / 3.0, 1.0),
            _ => (1.0 / 3.0, 2.0 / 3.0),
        };

        for [u, v] in face.uvs {
            assert!(u >= min_u - 1e-6 && u <= max_u + 1e-6);
            assert!((0.0..=1.0).contains(&v));
        }
        let us: Vec<f32> = face.uvs.iter().map(|uv| uv[0]).collect();
        assert!(us.iter().any(|&u| (u - min_u).abs() < 1e-6));
        assert!(us.iter().any(|&u| (u - max_u).abs() < 1e-6));
    }
}

#[test]
fn positions_stay_within_half_a_block_of_the_grid() {
    let mut chunk = Chunk::new(0, 0);
    chunk.fill(BlockType::GRASS);
    let mesh = chunk.generate_mesh().unwrap();

    for position in mesh.positions().chunks_exact(3) {
        assert!((-0.5..=CHUNK_SIZE_X as f32 - 0.5).contains(&position[0]));
        assert!((-0.5..=CHUNK_SIZE_Y as f32 - 0.5).contains(&position[1]));
        assert!((-0.5..=CHUNK_SIZE_Z as f32 - 0.5).contains(&position[2]));
    }
}

#[test]
fn out_of_bounds_access_is_an_error() {
    let mut chunk = Chunk::new(0, 0);

    assert_eq!(
        chunk.set_block(CHUNK_SIZE_X, 0, 0, BlockType::GRASS),
        Err(ChunkError::OutOfBounds { x: CHUNK_SIZE_X, y: 0, z: 0 })
    );
    assert!(chunk.get_block(0, CHUNK_SIZE_Y, 0).is_err());
    assert!(chunk.get_block(0, 0, CHUNK_SIZE_Z).is_err());
    assert_eq!(chunk.solid_count(), 0);
}

#[test]
fn huge_coordinates_are_reported_verbatim() {
    let mut chunk = Chunk::new(0, 0);

    let err = chunk.set_block(usize::MAX, 0, 0, BlockType::GRASS).unwrap_err();
    assert_eq!(err, ChunkError::OutOfBounds { x: usize::MAX, y: 0, z: 0 });
    assert!(err.to_string().contains(&usize::MAX.to_string()));
    assert!(!err.to_string().contains("-1"));
}

#[test]
fn overflowing_meshes_are_rejected_and_recoverable() {
    let mut chunk = Chunk::new(0, 0);
    for x in 0..CHUNK_SIZE_X {
        for y in 0..CHUNK_SIZE_Y {
            for z in 0..CHUNK_SIZE_Z {
                if (x + y + z) % 2 == 0 {
                    chunk.set_block(x, y, z, BlockType::GRASS).unwrap();
                }
            }
        }
    }

    assert!(matches!(
        chunk.generate_mesh(),
        Err(MeshError::IndexOverflow { .. })
    ));
    assert!(chunk.mesh().is_empty());

    chunk.clear();
    chunk.generate_flat(1).unwrap();
    assert_eq!(
        chunk.generate_mesh().unwrap().face_count(),
        CHUNK_SIZE_X * CHUNK_SIZE_Z * 2 + 2 * (CHUNK_SIZE_X + CHUNK_SIZE_Z)
    );
}

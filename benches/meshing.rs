//! # Chunk Meshing Benchmark
//!
//! Measures `Chunk::generate_mesh` on typical and worst-case grids, plus the
//! edit-then-rebuild loop that reuses the chunk's buffers.
//!
//! Run with: `cargo bench`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxel_mesher::{BlockType, Chunk};

fn meshed(mut chunk: Chunk) -> Chunk {
    chunk.generate_mesh().unwrap();
    chunk
}

/// Benchmark: one rebuild per terrain shape, buffers already allocated.
fn bench_generate_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_mesh");

    let mut flat = Chunk::new(0, 0);
    flat.generate_flat(4).unwrap();

    let mut full = Chunk::new(0, 0);
    full.fill(BlockType::GRASS);

    let mut perlin = Chunk::new(0, 0);
    perlin.generate_perlin(1, 24.0, 12.0);

    let mut random = Chunk::new(0, 0);
    random.generate_random(0.9, 7);

    for (name, chunk) in [("flat", flat), ("full", full), ("perlin", perlin), ("random", random)] {
        let mut chunk = meshed(chunk);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(chunk.generate_mesh().unwrap().face_count()));
        });
    }

    group.finish();
}

/// Benchmark: first build of a fresh chunk, including the buffer allocation.
fn bench_first_build(c: &mut Criterion) {
    c.bench_function("first_build_flat", |b| {
        b.iter(|| {
            let mut chunk = Chunk::new(0, 0);
            chunk.generate_flat(4).unwrap();
            black_box(chunk.generate_mesh().unwrap().vertex_count())
        });
    });
}

/// Benchmark: toggle one block and rebuild, as an editor would.
fn bench_edit_rebuild(c: &mut Criterion) {
    let mut chunk = Chunk::new(0, 0);
    chunk.generate_perlin(3, 24.0, 12.0);
    let mut chunk = meshed(chunk);
    let mut placed = false;

    c.bench_function("edit_rebuild", |b| {
        b.iter(|| {
            placed = !placed;
            let block_type = if placed { BlockType::GRASS } else { BlockType::AIR };
            chunk.set_block(8, 50, 8, block_type).unwrap();
            black_box(chunk.generate_mesh().unwrap().face_count())
        });
    });
}

criterion_group!(benches, bench_generate_mesh, bench_first_build, bench_edit_rebuild);
criterion_main!(benches);

//! Benchmarks for index operations.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use trindex::prelude::*;

fn grid_faces(n: usize) -> Vec<[usize; 3]> {
    let mut faces = Vec::with_capacity(n * n * 2);
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }
    faces
}

fn grid_mesh(n: usize) -> FaceIndex {
    let mut faces = FaceIndex::new();
    faces.extend_faces(grid_faces(n));
    faces
}

fn bench_construction(c: &mut Criterion) {
    let n = 50;
    let points: Vec<[f64; 3]> = (0..=n)
        .flat_map(|j| (0..=n).map(move |i| [i as f64, j as f64, 0.0]))
        .collect();
    let faces = grid_faces(n);

    c.bench_function("load_vertices_50x50", |b| {
        b.iter(|| {
            let mut verts: VertexIndex = VertexIndex::new();
            verts.extend_points(points.iter().copied());
            verts
        });
    });

    c.bench_function("load_faces_50x50", |b| {
        b.iter(|| {
            let mut index: FaceIndex = FaceIndex::new();
            index.extend_faces(faces.iter().copied());
            index
        });
    });

    c.bench_function("load_faces_with_edges_50x50", |b| {
        b.iter(|| {
            let mut index: FaceIndex = FaceIndex::new();
            let mut edges = EdgeIndex::new();
            for &f in &faces {
                index.insert_with_edges(Face::from(f), (), &mut edges);
            }
            (index, edges)
        });
    });
}

fn bench_queries(c: &mut Criterion) {
    let faces = grid_mesh(50);
    let edges = faces.edges();
    let count = 51 * 51;

    c.bench_function("search_vertex_all", |b| {
        b.iter(|| {
            (0..count)
                .map(|v| faces.search_vertex(VertexId::new(v)).len())
                .sum::<usize>()
        });
    });

    c.bench_function("search_edge_all", |b| {
        b.iter(|| edges.iter().map(|e| faces.search_edge(&e).len()).sum::<usize>());
    });

    c.bench_function("sync_50x50", |b| {
        let mut target = EdgeIndex::new();
        b.iter(|| {
            faces.sync(&mut target);
            target.len()
        });
    });
}

fn bench_cascades(c: &mut Criterion) {
    let faces = grid_mesh(50);
    let edges = faces.edges();
    let interior: Vec<VertexId> = (1..50)
        .flat_map(|j| (1..50).map(move |i| VertexId::new(j * 51 + i)))
        .step_by(7)
        .collect();

    c.bench_function("erase_vertex_incremental", |b| {
        b.iter_batched(
            || (faces.clone(), edges.clone()),
            |(mut f, mut e)| {
                for &v in &interior {
                    f.erase_vertex_with_edges(v, &mut e);
                }
                (f, e)
            },
            BatchSize::LargeInput,
        );
    });

    c.bench_function("erase_vertex_then_sync", |b| {
        b.iter_batched(
            || (faces.clone(), edges.clone()),
            |(mut f, mut e)| {
                for &v in &interior {
                    f.erase_vertex(v);
                }
                f.sync(&mut e);
                (f, e)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_construction, bench_queries, bench_cascades);
criterion_main!(benches);

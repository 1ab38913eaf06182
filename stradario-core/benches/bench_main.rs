use criterion::{Criterion, black_box, criterion_group, criterion_main};

use stradario_core::graph::{RawWay, filter_street_ways, find_crossings, segment_ways};

/// Grid of `size` x `size` intersections, one way per row and column.
fn grid_ways(size: i64) -> Vec<RawWay> {
    let node_at = |row: i64, col: i64| row * size + col;
    let mut ways = Vec::with_capacity(2 * size as usize);

    for row in 0..size {
        ways.push(RawWay {
            id: row,
            node_refs: (0..size).map(|col| node_at(row, col)).collect(),
            tags: vec![("highway".to_string(), "residential".to_string())],
        });
    }
    for col in 0..size {
        ways.push(RawWay {
            id: size + col,
            node_refs: (0..size).map(|row| node_at(row, col)).collect(),
            tags: vec![("highway".to_string(), "secondary".to_string())],
        });
    }
    ways
}

fn bench_segmentation(c: &mut Criterion) {
    let (ways, index) = filter_street_ways(grid_ways(100));
    let crossings = find_crossings(&index);

    c.bench_function("segment_100x100_grid", |b| {
        b.iter(|| segment_ways(black_box(&ways), black_box(&crossings)));
    });
}

fn bench_filter(c: &mut Criterion) {
    c.bench_function("filter_100x100_grid", |b| {
        b.iter(|| filter_street_ways(black_box(grid_ways(100))));
    });
}

criterion_group!(benches, bench_filter, bench_segmentation);
criterion_main!(benches);

//! Benchmarks for snake sorting, cyclic equality and union folds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use polyset::ordering::{sort_points_snake, Axis, SortDirection};
use polyset::polygon::{get_union, merge_polygons, poly_same, Polygon};
use polyset::Point;

/// Generates a jittered grid, shuffled with a fixed xorshift sequence.
fn generate_grid(side: usize, seed: u64) -> Vec<Point<f64>> {
    let mut state = seed;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut points: Vec<Point<f64>> = (0..side * side)
        .map(|i| {
            let jitter = (next() % 1000) as f64 * 1e-6; // Deterministic "noise"
            Point::new((i / side) as f64 + jitter, (i % side) as f64)
        })
        .collect();
    for i in (1..points.len()).rev() {
        let j = (next() % (i as u64 + 1)) as usize;
        points.swap(i, j);
    }
    points
}

/// Generates a regular polygon with `n` vertices.
fn generate_ngon(n: usize, radius: f64) -> Polygon<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * 2.0 * std::f64::consts::PI;
            [radius * t.cos(), radius * t.sin()]
        })
        .collect()
}

/// Generates a row of overlapping rectangles.
fn generate_row(count: usize) -> Vec<Polygon<f64>> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 8.0;
            Polygon::from(vec![[x, 0.0], [x + 10.0, 0.0], [x + 10.0, 10.0], [x, 10.0]])
        })
        .collect()
}

fn bench_snake_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_sort");

    for side in [10, 30, 100] {
        let points = generate_grid(side, 12345);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("exact", side), &points, |b, pts| {
            b.iter(|| {
                sort_points_snake(
                    black_box(pts),
                    Axis::X,
                    [SortDirection::Ascending, SortDirection::Ascending],
                    [None, None],
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("epsilon", side), &points, |b, pts| {
            b.iter(|| {
                sort_points_snake(
                    black_box(pts),
                    Axis::X,
                    [SortDirection::Ascending, SortDirection::Ascending],
                    [Some(0.01), None],
                )
            })
        });
    }

    group.finish();
}

fn bench_poly_same(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_same");

    for n in [8, 64, 512] {
        let poly = generate_ngon(n, 100.0);
        let mut vertices = poly.vertices.clone();
        vertices.rotate_left(n / 3);
        let other = Polygon::new(vertices).reversed();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("rotated_reversed", n), &n, |b, _| {
            b.iter(|| poly_same(black_box(&poly), black_box(&other), true))
        });
    }

    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");

    for count in [2, 10, 50] {
        let row = generate_row(count);
        let groups: Vec<Vec<Polygon<f64>>> = row.iter().cloned().map(|p| vec![p]).collect();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("get_union", count), &row, |b, polys| {
            b.iter(|| get_union(black_box(polys)))
        });

        group.bench_with_input(BenchmarkId::new("merge_polygons", count), &groups, |b, gs| {
            b.iter(|| merge_polygons(black_box(gs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_snake_sort, bench_poly_same, bench_union);
criterion_main!(benches);

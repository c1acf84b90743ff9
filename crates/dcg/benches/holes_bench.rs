//! Criterion benchmarks for the r-hole search.
//! Focus sizes: n in {10, 20, 30} points, r in {3, 4, 5, 6}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dcg::api::{count_convex_rholes, count_empty_triangles, random_point_set, GridCfg, ReplayToken};

fn sample(n: usize, seed: u64) -> Vec<dcg::api::Point> {
    let cfg = GridCfg {
        side: 1 << 16,
        general_position: true,
    };
    random_point_set(n, cfg, ReplayToken { seed, index: 0 }).expect("grid large enough")
}

fn bench_holes(c: &mut Criterion) {
    let mut group = c.benchmark_group("holes");
    for &n in &[10usize, 20, 30] {
        let pts = sample(n, 43);
        for &r in &[3usize, 4, 5, 6] {
            group.bench_with_input(
                BenchmarkId::new(format!("count_convex_rholes_r{r}"), n),
                &pts,
                |b, pts| {
                    b.iter_batched(
                        || pts.clone(),
                        |s| count_convex_rholes(&s, r, false).unwrap(),
                        BatchSize::SmallInput,
                    )
                },
            );
        }
        group.bench_with_input(BenchmarkId::new("count_empty_triangles", n), &pts, |b, pts| {
            b.iter_batched(
                || pts.clone(),
                |s| count_empty_triangles(&s),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_holes);
criterion_main!(benches);

//! Performance benchmarks for the recommendation engine
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use raplan::catalog::{NodeCountRange, Pattern, Workload};
use raplan::engine::{recommend_pattern, RecommendRequest};

/// Build a synthetic catalog of the given size
fn synthetic_catalog(len: usize) -> Vec<Pattern> {
    (0..len)
        .map(|i| Pattern {
            id: format!("pattern-{}", i),
            family: "enterprise".to_string(),
            description: "synthetic benchmark pattern".to_string(),
            c: 2,
            g: 1 + (i as u32 % 16),
            n: 9,
            b_gbps_per_gpu: 100 * (1 + (i as u32 % 8)),
            node_count: NodeCountRange { min: 1, max: 128 },
            tags: vec![],
            workload_fit: vec![],
            notes: vec![],
        })
        .collect()
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [8usize, 64, 512] {
        let patterns = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::new("catalog_size", size), &patterns, |b, p| {
            b.iter(|| {
                let request = RecommendRequest::new(black_box(1000), Workload::Training);
                let _ = black_box(recommend_pattern(p, &request));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);

//! # Catalog Benchmarks
//!
//! Performance benchmarks for catalog expansion and search filtering.
//!
//! Run with: `cargo bench -p buildsmith-core`

use buildsmith_core::{Catalog, SkillDef, filter};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Create N skill definitions with levels cycling through 1..=7.
fn create_skill_defs(size: usize) -> Vec<SkillDef> {
    (0..size)
        .map(|i| SkillDef::new(format!("Skill {i}"), (i % 7) as u32 + 1))
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_expansion");

    for size in [100, 1000, 10000].iter() {
        let defs = create_skill_defs(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &defs, |b, defs| {
            b.iter(|| black_box(Catalog::from_defs(defs)));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");

    for size in [100, 1000, 10000].iter() {
        let catalog = Catalog::from_defs(&create_skill_defs(*size));
        group.bench_with_input(
            BenchmarkId::new("substring", size),
            &catalog,
            |b, catalog| {
                b.iter(|| black_box(filter(catalog.entries(), black_box("skill 4"))));
            },
        );
        group.bench_with_input(BenchmarkId::new("empty", size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter(catalog.entries(), black_box(""))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expansion, bench_filter);
criterion_main!(benches);
